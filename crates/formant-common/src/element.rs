//! Snapshot model for a single form control.
//!
//! Elements are captured by the external automation driver and handed to
//! the pipeline as plain data. The pipeline never owns a live DOM handle;
//! live queries and actions go back through the driver, keyed by id.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Custom deserializer for HashMap<String, String> that filters out null values.
/// Scanners report missing attributes as explicit nulls rather than omitting them.
fn deserialize_nullable_string_map<'de, D>(
    deserializer: D,
) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let map: HashMap<String, Option<String>> = HashMap::deserialize(deserializer)?;
    Ok(map
        .into_iter()
        .filter_map(|(k, v)| v.map(|val| (k, val)))
        .collect())
}

/// One form control as seen at scan time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    pub id: u32,
    pub tag: String, // "input", "select", "span", etc.
    pub role: Option<String>,
    pub text: Option<String>,
    pub placeholder: Option<String>,

    pub selector: String,

    #[serde(default, deserialize_with = "deserialize_nullable_string_map")]
    pub attributes: HashMap<String, String>,
    #[serde(default)]
    pub state: ElementState,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ElementState {
    pub checked: bool,
    pub selected: bool,
    pub disabled: bool,
    pub readonly: bool,
}

impl Element {
    /// Attribute value as captured at scan time.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Attribute value trimmed, with empty results treated as absent.
    pub fn attr_trimmed(&self, name: &str) -> Option<&str> {
        self.attr(name).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Label an option-like control presents: aria-label, else value attribute.
    pub fn choice_label(&self) -> Option<&str> {
        self.attr_trimmed("aria-label")
            .or_else(|| self.attr_trimmed("value"))
    }

    /// Label for a grouped checkbox member: aria-label, value, then id.
    pub fn member_label(&self) -> Option<&str> {
        self.choice_label().or_else(|| self.attr_trimmed("id"))
    }
}
