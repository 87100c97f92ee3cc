use async_trait::async_trait;
use formant_engine::classify::{self, ClassifyError};
use formant_engine::{Driver, DriverError, Element, ElementKind, ElementState};
use std::collections::HashMap;

// =============================================================================
// Probe Driver
// =============================================================================

/// Serves canned query results; actions are never exercised here.
#[derive(Default)]
struct ProbeDriver {
    pub children: HashMap<(u32, String), Vec<Element>>,
    pub texts: HashMap<String, String>,
    pub parent_texts: HashMap<u32, String>,
}

impl ProbeDriver {
    fn with_children(mut self, id: u32, selector: &str, children: Vec<Element>) -> Self {
        self.children.insert((id, selector.to_string()), children);
        self
    }

    fn with_text(mut self, selector: &str, text: &str) -> Self {
        self.texts.insert(selector.to_string(), text.to_string());
        self
    }

    fn with_parent_text(mut self, id: u32, text: &str) -> Self {
        self.parent_texts.insert(id, text.to_string());
        self
    }
}

#[async_trait]
impl Driver for ProbeDriver {
    async fn query_within(
        &mut self,
        element: &Element,
        selector: &str,
    ) -> Result<Vec<Element>, DriverError> {
        Ok(self
            .children
            .get(&(element.id, selector.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn fill(&mut self, _element: &Element, _text: &str) -> Result<(), DriverError> {
        Ok(())
    }

    async fn select_by_label(
        &mut self,
        _element: &Element,
        _label: &str,
    ) -> Result<(), DriverError> {
        Ok(())
    }

    async fn set_checked(&mut self, _element: &Element, _state: bool) -> Result<(), DriverError> {
        Ok(())
    }

    async fn text_content(&mut self, selector: &str) -> Result<String, DriverError> {
        self.texts
            .get(selector)
            .cloned()
            .ok_or_else(|| DriverError::NotFound(selector.to_string()))
    }

    async fn parent_text(&mut self, element: &Element) -> Result<String, DriverError> {
        self.parent_texts
            .get(&element.id)
            .cloned()
            .ok_or_else(|| DriverError::NotFound(element.selector.clone()))
    }
}

/// Every live query fails, to exercise the degradation paths.
struct FailingDriver;

#[async_trait]
impl Driver for FailingDriver {
    async fn query_within(
        &mut self,
        _element: &Element,
        _selector: &str,
    ) -> Result<Vec<Element>, DriverError> {
        Err(DriverError::ActionFailed("query_within".into()))
    }

    async fn fill(&mut self, _element: &Element, _text: &str) -> Result<(), DriverError> {
        Ok(())
    }

    async fn select_by_label(
        &mut self,
        _element: &Element,
        _label: &str,
    ) -> Result<(), DriverError> {
        Ok(())
    }

    async fn set_checked(&mut self, _element: &Element, _state: bool) -> Result<(), DriverError> {
        Ok(())
    }

    async fn text_content(&mut self, _selector: &str) -> Result<String, DriverError> {
        Err(DriverError::ActionFailed("text_content".into()))
    }

    async fn parent_text(&mut self, _element: &Element) -> Result<String, DriverError> {
        Err(DriverError::ActionFailed("parent_text".into()))
    }
}

fn make_element(id: u32, tag: &str, selector: &str, attributes: &[(&str, &str)]) -> Element {
    Element {
        id,
        tag: tag.to_string(),
        role: None,
        text: None,
        placeholder: None,
        selector: selector.to_string(),
        attributes: attributes
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        state: ElementState::default(),
    }
}

// =============================================================================
// Kind Resolution
// =============================================================================

#[tokio::test]
async fn input_kind_comes_from_the_type_attribute() {
    let mut driver = ProbeDriver::default();
    let element = make_element(1, "input", "#email", &[("type", "email")]);

    let kind = classify::element_kind(&mut driver, &element).await.unwrap();
    assert_eq!(kind, ElementKind::Email);

    // Same snapshot, same answer.
    let again = classify::element_kind(&mut driver, &element).await.unwrap();
    assert_eq!(again, kind);
}

#[tokio::test]
async fn type_attribute_is_trimmed_and_lowercased() {
    let mut driver = ProbeDriver::default();
    let element = make_element(1, "INPUT", "#t", &[("type", "  TEXT ")]);
    let kind = classify::element_kind(&mut driver, &element).await.unwrap();
    assert_eq!(kind, ElementKind::Text);
}

#[tokio::test]
async fn typeless_input_defaults_to_text() {
    let mut driver = ProbeDriver::default();
    let element = make_element(1, "input", "#plain", &[]);
    let kind = classify::element_kind(&mut driver, &element).await.unwrap();
    assert_eq!(kind, ElementKind::Text);
}

#[tokio::test]
async fn unrecognized_input_type_is_a_typed_error() {
    let mut driver = ProbeDriver::default();
    let element = make_element(1, "input", "#qty", &[("type", "number")]);
    let err = classify::element_kind(&mut driver, &element)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ClassifyError::UnknownInputType { ref token, .. } if token == "number"
    ));
}

#[tokio::test]
async fn control_tags_classify_directly() {
    let mut driver = ProbeDriver::default();
    for (tag, expected) in [
        ("select", ElementKind::Select),
        ("textarea", ElementKind::Textarea),
        ("fieldset", ElementKind::Fieldset),
    ] {
        let element = make_element(1, tag, "#x", &[]);
        let kind = classify::element_kind(&mut driver, &element).await.unwrap();
        assert_eq!(kind, expected);
    }
}

#[tokio::test]
async fn anchor_button_and_label_are_clickable() {
    let mut driver = ProbeDriver::default();
    for tag in ["a", "button", "label"] {
        let element = make_element(1, tag, "#x", &[]);
        let kind = classify::element_kind(&mut driver, &element).await.unwrap();
        assert_eq!(kind, ElementKind::Clickable);
    }
}

#[tokio::test]
async fn wrapper_attributes_reveal_the_control_kind() {
    let mut driver = ProbeDriver::default();

    let element = make_element(2, "span", "#exp", &[("class", "custom-select-container")]);
    let kind = classify::element_kind(&mut driver, &element).await.unwrap();
    assert_eq!(kind, ElementKind::Select);

    let element = make_element(3, "div", "#g", &[("id", "radio-buttons")]);
    let kind = classify::element_kind(&mut driver, &element).await.unwrap();
    assert_eq!(kind, ElementKind::Radio);
}

#[tokio::test]
async fn wrapper_attribute_priority_is_id_then_class_then_name() {
    let mut driver = ProbeDriver::default();
    let element = make_element(
        2,
        "div",
        "#w",
        &[("id", "text-wrapper"), ("class", "checkbox-area")],
    );
    let kind = classify::element_kind(&mut driver, &element).await.unwrap();
    assert_eq!(kind, ElementKind::Text);
}

#[tokio::test]
async fn wrapper_token_search_is_case_sensitive() {
    let mut driver = ProbeDriver::default();
    // Capitalized class carries no lowercase token, so the cascade moves on
    // and, with nothing else to go on, classification fails.
    let element = make_element(2, "span", "#s", &[("class", "Select-Container")]);
    let err = classify::element_kind(&mut driver, &element)
        .await
        .unwrap_err();
    assert!(matches!(err, ClassifyError::Unclassifiable { .. }));
}

#[tokio::test]
async fn tokenless_wrapper_with_radiogroup_role_classifies() {
    let mut driver = ProbeDriver::default();
    let element = make_element(2, "div", "#gender", &[("role", "radiogroup")]);
    let kind = classify::element_kind(&mut driver, &element).await.unwrap();
    assert_eq!(kind, ElementKind::Radiogroup);
}

#[tokio::test]
async fn checkbox_children_make_a_container() {
    let member = make_element(21, "input", "#c1", &[("type", "checkbox")]);
    let mut driver =
        ProbeDriver::default().with_children(2, "input[type='checkbox']", vec![member]);
    let element = make_element(2, "div", "#skills", &[("id", "skills")]);
    let kind = classify::element_kind(&mut driver, &element).await.unwrap();
    assert_eq!(kind, ElementKind::CheckboxContainer);
}

#[tokio::test]
async fn bare_wrapper_is_unclassifiable() {
    let mut driver = ProbeDriver::default();
    let element = make_element(2, "div", "#mystery", &[]);
    let err = classify::element_kind(&mut driver, &element)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ClassifyError::Unclassifiable { ref tag, .. } if tag == "div"
    ));
}

#[tokio::test]
async fn failed_checkbox_probe_degrades_to_unclassifiable() {
    let mut driver = FailingDriver;
    let element = make_element(2, "div", "#mystery", &[]);
    let err = classify::element_kind(&mut driver, &element)
        .await
        .unwrap_err();
    assert!(matches!(err, ClassifyError::Unclassifiable { .. }));
}

// =============================================================================
// Name Resolution
// =============================================================================

#[tokio::test]
async fn name_attribute_wins_over_id() {
    let mut driver = ProbeDriver::default();
    let element = make_element(
        1,
        "input",
        "#f",
        &[("name", "first_name"), ("id", "field-17")],
    );
    let name = classify::field_name(&mut driver, &element).await;
    assert_eq!(name, "first_name");
}

#[tokio::test]
async fn aria_labelledby_resolves_through_the_driver() {
    let mut driver = ProbeDriver::default().with_text("#exp-label", "  Years of experience  ");
    let element = make_element(1, "input", "#exp", &[("aria-labelledby", "exp-label")]);
    let name = classify::field_name(&mut driver, &element).await;
    assert_eq!(name, "Years of experience");
}

#[tokio::test]
async fn whitespace_id_still_resolves_its_label() {
    // A usable id would have been returned directly; one that is all
    // whitespace skips the attribute tier yet still keys the label lookup.
    let mut driver = ProbeDriver::default().with_text("label[for=' ']", "Email Address *");
    let element = make_element(1, "input", "#e", &[("id", " ")]);
    let name = classify::field_name(&mut driver, &element).await;
    assert_eq!(name, "Email Address *");
}

#[tokio::test]
async fn parent_text_is_cleaned_to_its_shortest_line() {
    let mut driver = ProbeDriver::default()
        .with_parent_text(1, "First Name *\nThis field is required for the application");
    let element = make_element(1, "input", "#fn", &[]);
    let name = classify::field_name(&mut driver, &element).await;
    assert_eq!(name, "First Name");
}

#[tokio::test]
async fn oversized_parent_text_is_ignored() {
    let long_line = "x".repeat(120);
    let mut driver = ProbeDriver::default().with_parent_text(1, &long_line);
    let mut element = make_element(1, "input", "#fn", &[]);
    element.placeholder = Some("Enter your phone number".to_string());
    let name = classify::field_name(&mut driver, &element).await;
    assert_eq!(name, "Enter your phone number");
}

#[tokio::test]
async fn semantic_class_token_is_a_last_resort() {
    let mut driver = ProbeDriver::default();
    let element = make_element(1, "input", "#e", &[("class", "form-control Email-Input")]);
    let name = classify::field_name(&mut driver, &element).await;
    assert_eq!(name, "Email-Input");
}

#[tokio::test]
async fn nameless_element_gets_the_unknown_sentinel() {
    let mut driver = ProbeDriver::default();
    let element = make_element(1, "input", "#blank", &[("class", "form-control")]);
    let name = classify::field_name(&mut driver, &element).await;
    assert_eq!(name, "unknown");
}

#[tokio::test]
async fn driver_failures_fall_through_the_name_cascade() {
    let mut driver = FailingDriver;
    let mut element = make_element(1, "input", "#p", &[("aria-labelledby", "gone")]);
    element.placeholder = Some("Your name".to_string());
    let name = classify::field_name(&mut driver, &element).await;
    assert_eq!(name, "Your name");
}
