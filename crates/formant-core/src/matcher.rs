//! Fuzzy lookup of a field name against caller-supplied details.

use crate::fuzzy::partial_ratio;
use formant_common::constants::{MAX_FUZZY_MATCH_THRESHOLD, RESUME_PATH_KEY};
use formant_common::details::{value_to_string, Details};

/// Outcome of a successful details lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailMatch {
    /// The details key that won.
    pub key: String,
    /// Similarity score of the winning key (100 for the resume bypass).
    pub score: i32,
    /// Stored value coerced to a string; None for an explicit null.
    pub value: Option<String>,
}

/// Find the explicit answer for `field_name`, if the details hold one.
///
/// Resume-flavored field names short-circuit to the `resume_path` entry
/// so a file path is never fuzzy-compared against unrelated keys. All
/// other lookups scan keys in insertion order and take the first whose
/// partial-ratio similarity strictly exceeds `threshold`.
pub fn match_field(field_name: &str, details: &Details, threshold: i32) -> Option<DetailMatch> {
    let needle = field_name.to_lowercase();

    if let Some(path) = details.get(RESUME_PATH_KEY) {
        if needle.contains("resume") || needle.contains("file") {
            return Some(DetailMatch {
                key: RESUME_PATH_KEY.to_string(),
                score: MAX_FUZZY_MATCH_THRESHOLD,
                value: value_to_string(path),
            });
        }
    }

    for (key, value) in details {
        let score = partial_ratio(&needle, &key.to_lowercase());
        if score > threshold {
            return Some(DetailMatch {
                key: key.clone(),
                score,
                value: value_to_string(value),
            });
        }
    }
    None
}
