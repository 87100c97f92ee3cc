//! Shared tunables and sentinel values used across the filling pipeline.

/// Default similarity score a details key must exceed to match a field name.
pub const DEFAULT_FUZZY_MATCH_THRESHOLD: i32 = 80;
pub const MIN_FUZZY_MATCH_THRESHOLD: i32 = 0;
pub const MAX_FUZZY_MATCH_THRESHOLD: i32 = 100;

/// Longest parent-text candidate accepted as a field name.
pub const MAX_FIELD_NAME_LENGTH: usize = 100;

/// Resume files larger than this are rejected before extraction.
pub const MAX_RESUME_SIZE: u64 = 10_000_000;

/// Values interpreted as "check the box" (compared case-insensitively).
pub const TRUTHY_TOKENS: [&str; 4] = ["true", "yes", "1", "on"];

/// Details-map key carrying the resume file location.
pub const RESUME_PATH_KEY: &str = "resume_path";

/// Sentinel returned when no field-name signal is available.
pub const UNKNOWN_FIELD_NAME: &str = "unknown";

/// Choice offered alongside a radio's own label, meaning "leave unchecked".
pub const NONE_OPTION: &str = "None";
