pub mod fuzzy;
pub mod matcher;
pub mod normalize;

pub use fuzzy::partial_ratio;
pub use matcher::{match_field, DetailMatch};
pub use normalize::clean_field_label;
