//! Resume-grounded content generation.
//!
//! The [`ContentGenerator`] owns the session's resume state (text plus
//! the path it came from) and wraps the text-generation capability. A
//! missing or failing capability is recovered by returning an empty
//! string; one generation failure never aborts a form traversal.
//! Resume extraction failures, by contrast, are fatal to the session.

pub mod llm;
pub mod prompts;
pub mod resume;

pub use llm::{clean_response, LlmClient, LlmError, TextGenerator};
pub use resume::ResumeError;

use std::sync::Arc;
use tracing::{debug, error, info};

pub struct ContentGenerator {
    llm: Option<Arc<dyn TextGenerator>>,
    resume_content: Option<String>,
    resume_path: Option<String>,
}

impl ContentGenerator {
    /// Generator with no resume on hand.
    pub fn new(llm: Option<Arc<dyn TextGenerator>>) -> Self {
        Self {
            llm,
            resume_content: None,
            resume_path: None,
        }
    }

    /// Generator holding resume text the caller already has, optionally
    /// attributed to the file it came from.
    pub fn with_resume(
        llm: Option<Arc<dyn TextGenerator>>,
        content: String,
        path: Option<String>,
    ) -> Self {
        Self {
            llm,
            resume_content: Some(content),
            resume_path: path,
        }
    }

    /// Generator whose resume text is extracted from a PDF up front.
    pub fn with_resume_file(
        llm: Option<Arc<dyn TextGenerator>>,
        path: &str,
    ) -> Result<Self, ResumeError> {
        let mut generator = Self::new(llm);
        generator.set_resume_from_path(path)?;
        Ok(generator)
    }

    pub fn resume_path(&self) -> Option<&str> {
        self.resume_path.as_deref()
    }

    pub fn resume_content(&self) -> Option<&str> {
        self.resume_content.as_deref()
    }

    /// Replace the session resume with freshly extracted text from a file.
    pub fn set_resume_from_path(&mut self, path: &str) -> Result<(), ResumeError> {
        info!("Loading resume content from {}", path);
        let content = resume::pdf_to_text(path)?;
        self.resume_content = Some(content);
        self.resume_path = Some(path.to_string());
        Ok(())
    }

    /// Replace the session resume with literal text, detaching any file.
    pub fn set_resume(&mut self, content: String) {
        self.resume_content = Some(content);
        self.resume_path = None;
    }

    /// Answer a free-text field from the resume.
    pub async fn field_content(&self, field_label: &str) -> String {
        debug!("Generating content for field {:?}", field_label);
        let prompt = prompts::text_prompt(field_label, self.resume_text());
        self.invoke(&prompt, field_label).await
    }

    /// Choose one dropdown option.
    pub async fn select_content(&self, options: &[String]) -> String {
        debug!("Generating select choice from {:?}", options);
        let prompt = prompts::select_prompt(options, self.resume_text());
        self.invoke(&prompt, "select options").await
    }

    /// Choose one radio option.
    pub async fn radio_content(&self, options: &[String]) -> String {
        debug!("Generating radio choice from {:?}", options);
        let prompt = prompts::radio_prompt(options, self.resume_text());
        self.invoke(&prompt, "radio options").await
    }

    fn resume_text(&self) -> &str {
        self.resume_content.as_deref().unwrap_or("")
    }

    async fn invoke(&self, prompt: &str, context: &str) -> String {
        let llm = match &self.llm {
            Some(llm) => llm,
            None => {
                error!(
                    "No text generation capability configured; leaving {} empty",
                    context
                );
                return String::new();
            }
        };
        match llm.generate(prompt).await {
            Ok(raw) => {
                let cleaned = clean_response(&raw);
                debug!("Generated {:?} for {}", cleaned, context);
                cleaned
            }
            Err(e) => {
                error!("Text generation failed for {}: {}", context, e);
                String::new()
            }
        }
    }
}
