use async_trait::async_trait;
use formant_common::Element;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("Element not found: {0}")]
    NotFound(String),
    #[error("Action failed: {0}")]
    ActionFailed(String),
    #[error("Timed out waiting for: {0}")]
    Timeout(String),
    #[error("Operation not supported by this driver: {0}")]
    NotSupported(String),
}

/// The Driver trait is the interface every automation backend must implement.
///
/// The pipeline borrows a driver per fill call and never retains it.
/// Elements are passed as scan-time snapshots; implementations resolve
/// them to live handles however they like (id, selector, cached node).
/// Optional operations default to `NotSupported` so a partial driver is
/// still usable; the cascades treat those failures as a missing signal.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Enumerate descendants of `element` matching a CSS selector.
    async fn query_within(
        &mut self,
        element: &Element,
        selector: &str,
    ) -> Result<Vec<Element>, DriverError>;

    /// Type a value into a text-accepting control, replacing its content.
    async fn fill(&mut self, element: &Element, text: &str) -> Result<(), DriverError>;

    /// Choose the option of a select whose visible label matches exactly.
    async fn select_by_label(&mut self, element: &Element, label: &str)
        -> Result<(), DriverError>;

    /// Force a checkbox or radio into the given checked state.
    async fn set_checked(&mut self, element: &Element, state: bool) -> Result<(), DriverError>;

    /// Click the element. The pipeline drives controls through the typed
    /// actions above; this is surface for embedders that navigate.
    async fn click(&mut self, _element: &Element) -> Result<(), DriverError> {
        Err(DriverError::NotSupported("click".into()))
    }

    /// Text content of the first document node matching a CSS selector.
    async fn text_content(&mut self, _selector: &str) -> Result<String, DriverError> {
        Err(DriverError::NotSupported("text_content".into()))
    }

    /// Visible text of the element's immediate parent.
    async fn parent_text(&mut self, _element: &Element) -> Result<String, DriverError> {
        Err(DriverError::NotSupported("parent_text".into()))
    }

    /// Resolve the element's file chooser with the given path.
    async fn upload_file(&mut self, _element: &Element, _path: &str) -> Result<(), DriverError> {
        Err(DriverError::NotSupported("upload_file".into()))
    }
}
