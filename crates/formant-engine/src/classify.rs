//! Element classification: functional kind and human-readable field name.
//!
//! Two cascades with opposite failure contracts. Kind resolution is
//! strict: an element matching no rule is a typed error. Name resolution
//! is best-effort: every signal may fail, and the cascade falls through
//! to the "unknown" sentinel instead of raising.

use crate::driver::{Driver, DriverError};
use formant_common::constants::{MAX_FIELD_NAME_LENGTH, UNKNOWN_FIELD_NAME};
use formant_common::{Element, ElementKind};
use formant_core::clean_field_label;
use thiserror::Error;
use tracing::{debug, warn};

/// Tokens recognized both as control tags and as wrapper-attribute hints.
const KNOWN_TYPE_TOKENS: [&str; 7] = [
    "text",
    "select",
    "select-one",
    "textarea",
    "radio",
    "checkbox",
    "fieldset",
];
const CLICKABLE_TAGS: [&str; 3] = ["a", "button", "label"];
/// Wrapper attributes searched for type tokens, in priority order.
const WRAPPER_ATTRIBUTES: [&str; 3] = ["id", "class", "name"];
/// Direct attributes tried first for a field name, in priority order.
const NAME_ATTRIBUTES: [&str; 4] = ["name", "id", "aria-label", "data-testid"];
/// Class-token keywords accepted as a last-resort field name.
const SEMANTIC_CLASS_KEYWORDS: [&str; 5] = ["name", "email", "phone", "address", "field"];

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("Unrecognized input type {token:?} on element at {selector}")]
    UnknownInputType { token: String, selector: String },
    #[error("Cannot classify element <{tag}> at {selector}")]
    Unclassifiable { tag: String, selector: String },
}

fn parse_token(token: &str, element: &Element) -> Result<ElementKind, ClassifyError> {
    ElementKind::parse(token).map_err(|e| ClassifyError::UnknownInputType {
        token: e.0,
        selector: element.selector.clone(),
    })
}

/// Determine the functional kind of a form control.
///
/// Runs the classification cascade, each step short-circuiting on
/// success. Classification is total over the known taxonomy; an element
/// no step claims is an error, never a silent default.
pub async fn element_kind<D>(driver: &mut D, element: &Element) -> Result<ElementKind, ClassifyError>
where
    D: Driver + ?Sized,
{
    let tag = element.tag.to_lowercase();

    // Inputs carry their kind in the type attribute; absent means text.
    if tag == "input" {
        let token = element
            .attr_trimmed("type")
            .map(str::to_lowercase)
            .unwrap_or_else(|| "text".to_string());
        return parse_token(&token, element);
    }

    if KNOWN_TYPE_TOKENS.contains(&tag.as_str()) {
        return parse_token(&tag, element);
    }

    if CLICKABLE_TAGS.contains(&tag.as_str()) {
        debug!("Element <{}> at {} is clickable", tag, element.selector);
        return Ok(ElementKind::Clickable);
    }

    // Wrapper tags sometimes encode the control kind in their attributes.
    for attr in WRAPPER_ATTRIBUTES {
        if let Some(value) = element.attr(attr) {
            for token in KNOWN_TYPE_TOKENS {
                if value.contains(token) {
                    debug!(
                        "Element <{}> at {} classified as {} via {} attribute",
                        tag, element.selector, token, attr
                    );
                    return parse_token(token, element);
                }
            }
        }
    }

    let role = element.role.as_deref().or_else(|| element.attr("role"));
    if role == Some("radiogroup") {
        return Ok(ElementKind::Radiogroup);
    }

    match driver.query_within(element, "input[type='checkbox']").await {
        Ok(members) if !members.is_empty() => {
            debug!("Element at {} is a checkbox container", element.selector);
            return Ok(ElementKind::CheckboxContainer);
        }
        Ok(_) => {}
        Err(e) => debug!("Checkbox probe failed for {}: {}", element.selector, e),
    }

    Err(ClassifyError::Unclassifiable {
        tag: element.tag.clone(),
        selector: element.selector.clone(),
    })
}

/// Best human-readable name for a field.
///
/// Tries signals in priority order and returns the first usable one.
/// Signals that fail (absent attribute, unresolvable reference, driver
/// error) fall through to the next tier; the final fallback is the
/// "unknown" sentinel, so this never fails.
pub async fn field_name<D>(driver: &mut D, element: &Element) -> String
where
    D: Driver + ?Sized,
{
    for attr in NAME_ATTRIBUTES {
        if let Some(value) = element.attr_trimmed(attr) {
            debug!("Field name {:?} from {} attribute", value, attr);
            return value.to_string();
        }
    }

    if let Some(labelledby) = element.attr_trimmed("aria-labelledby") {
        match driver.text_content(&format!("#{}", labelledby)).await {
            Ok(text) if !text.trim().is_empty() => {
                let name = text.trim().to_string();
                debug!("Field name {:?} via aria-labelledby", name);
                return name;
            }
            Ok(_) => {}
            Err(DriverError::NotFound(_)) => {}
            Err(e) => warn!("Could not resolve aria-labelledby {:?}: {}", labelledby, e),
        }
    }

    if let Some(id) = element.attr("id").filter(|v| !v.is_empty()) {
        match driver.text_content(&format!("label[for='{}']", id)).await {
            Ok(text) if !text.trim().is_empty() => {
                let name = text.trim().to_string();
                debug!("Field name {:?} via associated label", name);
                return name;
            }
            Ok(_) => {}
            Err(DriverError::NotFound(_)) => {}
            Err(e) => warn!("Could not read label for {:?}: {}", id, e),
        }
    }

    match driver.parent_text(element).await {
        Ok(text) if !text.trim().is_empty() => {
            let cleaned = clean_field_label(text.trim());
            if !cleaned.is_empty() && cleaned.chars().count() < MAX_FIELD_NAME_LENGTH {
                debug!("Field name {:?} from parent text", cleaned);
                return cleaned;
            }
        }
        Ok(_) => {}
        Err(e) => debug!("Could not read parent text for {}: {}", element.selector, e),
    }

    let placeholder = element
        .placeholder
        .as_deref()
        .or_else(|| element.attr("placeholder"));
    if let Some(placeholder) = placeholder.map(str::trim).filter(|p| !p.is_empty()) {
        debug!("Field name {:?} from placeholder", placeholder);
        return placeholder.to_string();
    }

    if let Some(class_attr) = element.attr_trimmed("class") {
        for class in class_attr.split_whitespace() {
            let lowered = class.to_lowercase();
            if SEMANTIC_CLASS_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
                debug!("Field name {:?} from class token", class);
                return class.to_string();
            }
        }
    }

    warn!(
        "No field name signal for element at {}; using {:?}",
        element.selector, UNKNOWN_FIELD_NAME
    );
    UNKNOWN_FIELD_NAME.to_string()
}
