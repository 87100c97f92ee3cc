pub mod constants;
pub mod details;
pub mod element;
pub mod kind;

pub use details::{Details, value_to_string};
pub use element::{Element, ElementState};
pub use kind::{ElementKind, UnknownKindError};
