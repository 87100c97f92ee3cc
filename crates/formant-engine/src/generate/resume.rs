//! Resume text extraction from PDF files.

use formant_common::constants::MAX_RESUME_SIZE;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("Resume file not found: {0}")]
    NotFound(String),
    #[error("Resume file unreadable: {path}: {source}")]
    Unreadable {
        path: String,
        source: std::io::Error,
    },
    #[error("Resume file {path} is {size} bytes, over the {limit} byte limit")]
    TooLarge { path: String, size: u64, limit: u64 },
    #[error("Could not extract text from {path}: {source}")]
    Extraction {
        path: String,
        source: pdf_extract::OutputError,
    },
}

/// Extract page-concatenated text from a PDF resume.
///
/// Guards run before extraction: the file must exist and stay under the
/// size cap. Failures here are fatal to the session.
pub fn pdf_to_text(path: &str) -> Result<String, ResumeError> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ResumeError::NotFound(path.to_string())
        } else {
            ResumeError::Unreadable {
                path: path.to_string(),
                source: e,
            }
        }
    })?;

    let size = metadata.len();
    if size > MAX_RESUME_SIZE {
        return Err(ResumeError::TooLarge {
            path: path.to_string(),
            size,
            limit: MAX_RESUME_SIZE,
        });
    }

    let text = pdf_extract::extract_text(path).map_err(|e| ResumeError::Extraction {
        path: path.to_string(),
        source: e,
    })?;
    info!(
        "Extracted {} characters of resume text from {}",
        text.len(),
        path
    );
    Ok(text)
}
