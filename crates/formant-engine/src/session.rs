//! The fill session: classify, match, generate, apply, one element at a
//! time.
//!
//! A [`FormFiller`] holds the validated configuration and the session's
//! content generator. Elements arrive as snapshots from the embedding
//! driver; each call classifies the element live, consults the caller's
//! details, falls back to generation, and pushes the resulting action
//! back through the driver.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use formant_common::constants::RESUME_PATH_KEY;
use formant_common::{value_to_string, Details, Element};
use formant_core::match_field;

use crate::classify::{self, ClassifyError};
use crate::config::{ConfigError, FormantConfig};
use crate::driver::{Driver, DriverError};
use crate::fill;
use crate::generate::{ContentGenerator, LlmClient, LlmError, ResumeError, TextGenerator};
use crate::upload;
use crate::value::evaluate_value;

#[derive(Debug, Error)]
pub enum FillError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Element error: {0}")]
    Element(#[from] ClassifyError),
    #[error("Generation error: {0}")]
    Generation(#[from] LlmError),
    #[error("Resource error: {0}")]
    Resource(#[from] ResumeError),
    #[error("Driver error: {0}")]
    Driver(#[from] DriverError),
    #[error("Validation error: {0}")]
    Validation(String),
}

pub struct FormFiller {
    config: FormantConfig,
    generator: ContentGenerator,
}

impl FormFiller {
    /// Build a session from validated configuration.
    ///
    /// A configured resume file is extracted here, before any element is
    /// touched, and an unusable file fails the whole session.
    pub fn new(config: FormantConfig) -> Result<Self, FillError> {
        config.validate()?;
        let llm: Arc<dyn TextGenerator> = Arc::new(LlmClient::new(&config.llm)?);
        let generator = match (&config.resume.path, &config.resume.content) {
            (Some(path), _) => ContentGenerator::with_resume_file(Some(llm), path)?,
            (None, Some(content)) => ContentGenerator::with_resume(Some(llm), content.clone(), None),
            (None, None) => ContentGenerator::new(Some(llm)),
        };
        Ok(Self { config, generator })
    }

    /// Build a session around a caller-supplied generator, for embedders
    /// that manage the capability and resume state themselves.
    pub fn with_generator(
        config: FormantConfig,
        generator: ContentGenerator,
    ) -> Result<Self, FillError> {
        config.validate()?;
        Ok(Self { config, generator })
    }

    pub fn config(&self) -> &FormantConfig {
        &self.config
    }

    pub fn generator(&self) -> &ContentGenerator {
        &self.generator
    }

    /// Mutable access for mid-session resume updates driven by the caller.
    pub fn generator_mut(&mut self) -> &mut ContentGenerator {
        &mut self.generator
    }

    /// Fill one element end to end.
    ///
    /// `field_name` overrides derivation when supplied and must not be
    /// blank. `details` are the caller's known answers, consulted before
    /// any generation; a `resume_path` detail that differs from the
    /// session resume re-extracts it before matching.
    pub async fn fill_element<D: Driver + ?Sized>(
        &mut self,
        driver: &mut D,
        element: &Element,
        field_name: Option<&str>,
        details: Option<&Details>,
    ) -> Result<(), FillError> {
        let field = match field_name {
            Some(name) if name.trim().is_empty() => {
                return Err(FillError::Validation(
                    "field name override must not be blank".to_string(),
                ));
            }
            Some(name) => name.to_string(),
            None => classify::field_name(driver, element).await,
        };
        let kind = classify::element_kind(driver, element).await?;
        info!(
            "Element {} classified as {} (field {:?})",
            element.selector, kind, field
        );

        if let Some(details) = details {
            self.refresh_resume(details)?;
        }

        let threshold = self.config.matching.fuzzy_match_threshold;
        let raw_value = match details.and_then(|details| match_field(&field, details, threshold)) {
            Some(matched) => {
                debug!(
                    "Detail {:?} covers {} (score {})",
                    matched.key, field, matched.score
                );
                matched.value
            }
            None => None,
        };

        let value = evaluate_value(driver, &self.generator, kind, &field, raw_value, element).await?;

        // A value equal to the session resume path is a file to push,
        // whatever the control was classified as.
        if let (Some(value), Some(resume)) = (value.as_deref(), self.generator.resume_path()) {
            if value == resume {
                upload::handle_file_upload(driver, element, value).await?;
                return Ok(());
            }
        }

        fill::apply_value(
            driver,
            element,
            kind,
            &field,
            value.as_deref(),
            threshold,
            self.generator.resume_path(),
        )
        .await?;
        Ok(())
    }

    /// Re-extract the session resume when the details name a new file.
    fn refresh_resume(&mut self, details: &Details) -> Result<(), ResumeError> {
        let path = details
            .get(RESUME_PATH_KEY)
            .and_then(value_to_string)
            .unwrap_or_default();
        if path.is_empty() || Some(path.as_str()) == self.generator.resume_path() {
            return Ok(());
        }
        info!("Switching session resume to {}", path);
        self.generator.set_resume_from_path(&path)
    }
}
