//! File-input handling.

use formant_common::Element;
use tracing::{info, warn};

use crate::driver::{Driver, DriverError};

/// Push a file into an upload control. An empty path is a warning and a
/// no-op, not an error.
pub async fn handle_file_upload<D: Driver + ?Sized>(
    driver: &mut D,
    element: &Element,
    path: &str,
) -> Result<(), DriverError> {
    if path.is_empty() {
        warn!("No file available for upload control {}", element.selector);
        return Ok(());
    }
    driver.upload_file(element, path).await?;
    info!("Uploaded {} to {}", path, element.selector);
    Ok(())
}
