//! Decides what text goes into a classified control.

use formant_common::constants::NONE_OPTION;
use formant_common::{Element, ElementKind};
use tracing::{debug, warn};

use crate::driver::{Driver, DriverError};
use crate::generate::ContentGenerator;

/// Determine the value to apply to a control.
///
/// A matched detail always wins regardless of kind. Otherwise the value
/// is produced per kind, which may require live option queries through
/// the driver. `Ok(None)` means there is nothing to type or pick; for
/// checkboxes that translates into an explicit uncheck downstream.
pub async fn evaluate_value<D: Driver + ?Sized>(
    driver: &mut D,
    generator: &ContentGenerator,
    kind: ElementKind,
    field_name: &str,
    raw_value: Option<String>,
    element: &Element,
) -> Result<Option<String>, DriverError> {
    if raw_value.is_some() {
        debug!("Using matched detail for {}: {:?}", field_name, raw_value);
        return Ok(raw_value);
    }

    match kind {
        ElementKind::Text
        | ElementKind::Email
        | ElementKind::Tel
        | ElementKind::Url
        | ElementKind::Search
        | ElementKind::Password
        | ElementKind::Textarea => Ok(Some(generator.field_content(field_name).await)),
        ElementKind::Select | ElementKind::SelectOne => {
            let options = option_labels(driver, element).await?;
            if options.is_empty() {
                warn!("Select {} has no usable options", element.selector);
                Ok(None)
            } else {
                Ok(Some(generator.select_content(&options).await))
            }
        }
        ElementKind::Radio => {
            // A lone radio is a yes/no question: its own label against
            // the explicit opt-out sentinel.
            let mut options = Vec::new();
            if let Some(label) = element.choice_label() {
                options.push(label.to_string());
            }
            options.push(NONE_OPTION.to_string());
            Ok(Some(generator.radio_content(&options).await))
        }
        ElementKind::Radiogroup => {
            let members = driver.query_within(element, "input[type='radio']").await?;
            let options: Vec<String> = members
                .iter()
                .filter_map(|member| member.choice_label())
                .map(str::to_string)
                .collect();
            if options.is_empty() {
                warn!("Radio group {} has no labelled members", element.selector);
                Ok(None)
            } else {
                Ok(Some(generator.radio_content(&options).await))
            }
        }
        ElementKind::Checkbox | ElementKind::CheckboxContainer => Ok(None),
        ElementKind::File => Ok(generator.resume_path().map(str::to_string)),
        ElementKind::Fieldset | ElementKind::Clickable => {
            warn!("No value strategy for {} element {}", kind, element.selector);
            Ok(None)
        }
    }
}

/// Visible labels of a select's options, trimmed, empties dropped.
async fn option_labels<D: Driver + ?Sized>(
    driver: &mut D,
    element: &Element,
) -> Result<Vec<String>, DriverError> {
    let options = driver.query_within(element, "option").await?;
    Ok(options
        .iter()
        .filter_map(|option| option.text.as_deref())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .collect())
}
