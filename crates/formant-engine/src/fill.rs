//! Applies a determined value to a control through the driver.

use formant_common::constants::{NONE_OPTION, TRUTHY_TOKENS};
use formant_common::{Element, ElementKind};
use formant_core::partial_ratio;
use tracing::{debug, info, warn};

use crate::driver::{Driver, DriverError};
use crate::upload;

/// Apply `value` to `element` according to its kind.
///
/// Missing values degrade per kind. Text controls are filled with the
/// empty string and choice controls are left alone with a warning.
/// Checkboxes are always set to the value's truthiness, so an absent
/// value actively unchecks. File inputs fall back to the session resume.
pub async fn apply_value<D: Driver + ?Sized>(
    driver: &mut D,
    element: &Element,
    kind: ElementKind,
    field_name: &str,
    value: Option<&str>,
    threshold: i32,
    resume_fallback: Option<&str>,
) -> Result<(), DriverError> {
    match kind {
        ElementKind::Text
        | ElementKind::Email
        | ElementKind::Tel
        | ElementKind::Url
        | ElementKind::Search
        | ElementKind::Password
        | ElementKind::Textarea
        | ElementKind::Fieldset
        | ElementKind::Clickable => fill_text(driver, element, field_name, value).await,
        ElementKind::Select | ElementKind::SelectOne => {
            fill_select(driver, element, field_name, value).await
        }
        ElementKind::Radio => fill_radio(driver, element, value).await,
        ElementKind::Radiogroup => fill_radiogroup(driver, element, field_name, value).await,
        ElementKind::Checkbox => fill_checkbox(driver, element, value).await,
        ElementKind::CheckboxContainer => {
            fill_checkbox_container(driver, element, field_name, value, threshold).await
        }
        ElementKind::File => {
            let path = value.or(resume_fallback).unwrap_or("");
            upload::handle_file_upload(driver, element, path).await
        }
    }
}

async fn fill_text<D: Driver + ?Sized>(
    driver: &mut D,
    element: &Element,
    field_name: &str,
    value: Option<&str>,
) -> Result<(), DriverError> {
    let text = value.unwrap_or("");
    info!("Filling {} with {:?}", field_name, text);
    driver.fill(element, text).await
}

async fn fill_select<D: Driver + ?Sized>(
    driver: &mut D,
    element: &Element,
    field_name: &str,
    value: Option<&str>,
) -> Result<(), DriverError> {
    match value {
        Some(label) if !label.is_empty() => {
            info!("Selecting {:?} for {}", label, field_name);
            driver.select_by_label(element, label).await
        }
        _ => {
            warn!("No option chosen for select {}", field_name);
            Ok(())
        }
    }
}

/// Check a lone radio unless the value is absent, empty, or the opt-out
/// sentinel. Radios are never actively unchecked.
async fn fill_radio<D: Driver + ?Sized>(
    driver: &mut D,
    element: &Element,
    value: Option<&str>,
) -> Result<(), DriverError> {
    match value {
        Some(v) if !v.is_empty() && v != NONE_OPTION => {
            info!("Checking radio {}", element.selector);
            driver.set_checked(element, true).await
        }
        _ => {
            debug!("Leaving radio {} unchecked", element.selector);
            Ok(())
        }
    }
}

/// Check the group member whose label equals the chosen value exactly.
async fn fill_radiogroup<D: Driver + ?Sized>(
    driver: &mut D,
    element: &Element,
    field_name: &str,
    value: Option<&str>,
) -> Result<(), DriverError> {
    let choice = match value {
        Some(choice) => choice,
        None => {
            warn!("No choice available for radio group {}", field_name);
            return Ok(());
        }
    };
    let members = driver.query_within(element, "input[type='radio']").await?;
    for member in &members {
        if member.choice_label() == Some(choice) {
            return fill_radio(driver, member, Some("true")).await;
        }
    }
    warn!("No radio in {} matches {:?}", field_name, choice);
    Ok(())
}

async fn fill_checkbox<D: Driver + ?Sized>(
    driver: &mut D,
    element: &Element,
    value: Option<&str>,
) -> Result<(), DriverError> {
    let desired = is_truthy(value);
    info!("Setting checkbox {} to {}", element.selector, desired);
    driver.set_checked(element, desired).await
}

/// Fuzzy-match the wanted value against member labels and check the
/// first member that clears the threshold.
async fn fill_checkbox_container<D: Driver + ?Sized>(
    driver: &mut D,
    element: &Element,
    field_name: &str,
    value: Option<&str>,
    threshold: i32,
) -> Result<(), DriverError> {
    let wanted = match value {
        Some(wanted) if !wanted.is_empty() => wanted,
        _ => {
            warn!("No value to match inside checkbox group {}", field_name);
            return Ok(());
        }
    };
    let members = driver.query_within(element, "input[type='checkbox']").await?;
    if members.is_empty() {
        warn!("Checkbox group {} has no members", field_name);
        return Ok(());
    }
    let wanted_lower = wanted.to_lowercase();
    for member in &members {
        let label = match member.member_label() {
            Some(label) => label.to_lowercase(),
            None => continue,
        };
        let score = partial_ratio(&wanted_lower, &label);
        if score > threshold {
            debug!("Checkbox {:?} matched {:?} at {}", label, wanted_lower, score);
            return fill_checkbox(driver, member, Some("true")).await;
        }
    }
    warn!("No checkbox in {} matches {:?}", field_name, wanted);
    Ok(())
}

/// Truthiness of a checkbox value. Absent or unrecognized means unchecked.
pub fn is_truthy(value: Option<&str>) -> bool {
    match value {
        Some(v) => TRUTHY_TOKENS.iter().any(|token| v.eq_ignore_ascii_case(token)),
        None => false,
    }
}
