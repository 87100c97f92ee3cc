pub mod classify;
pub mod config;
pub mod driver;
pub mod fill;
pub mod generate;
pub mod session;
pub mod upload;
pub mod value;

pub use config::{ConfigError, ConfigLoader, FormantConfig};
pub use driver::{Driver, DriverError};
pub use generate::{ContentGenerator, LlmClient, TextGenerator};
pub use session::{FillError, FormFiller};
pub use upload::handle_file_upload;

pub use formant_common::{Details, Element, ElementKind, ElementState};
