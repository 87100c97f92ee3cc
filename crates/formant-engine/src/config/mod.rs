//! Session configuration: YAML schema, defaults, and file discovery.

pub mod loader;
pub mod schema;

pub use loader::{ConfigError, ConfigLoader};
pub use schema::FormantConfig;
