//! Text-generation capability and its default HTTP implementation.

use crate::config::schema::LlmConfig;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("LLM request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("LLM endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Malformed LLM response: {0}")]
    Malformed(String),
}

/// A prompt-in, text-out capability.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Produce completion text for a prompt.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Ollama-style HTTP client implementing [`TextGenerator`].
///
/// Posts to `/api/generate` on the configured endpoint and retries
/// transient failures (transport errors, HTTP 429 and 5xx) with
/// exponential backoff. Non-transient failures surface immediately.
pub struct LlmClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    temperature: f64,
    max_retries: u32,
    retry_base_delay: Duration,
    retry_max_delay: Duration,
    retry_exponential_base: f64,
}

impl LlmClient {
    pub fn new(config: &LlmConfig) -> Result<Self, LlmError> {
        if config.provider != "ollama" {
            warn!(
                "Provider {:?} has no dedicated client; using the Ollama-style API",
                config.provider
            );
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_retries: config.max_retries,
            retry_base_delay: Duration::from_millis(config.retry_base_delay_ms),
            retry_max_delay: Duration::from_millis(config.retry_max_delay_ms),
            retry_exponential_base: config.retry_exponential_base,
        })
    }

    async fn request(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/api/generate", self.endpoint);
        let body = serde_json::json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false,
            "options": { "temperature": self.temperature },
        });

        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(LlmError::Status {
                status: status.as_u16(),
                body: truncate(&text),
            });
        }
        let parsed: GenerateResponse =
            serde_json::from_str(&text).map_err(|e| LlmError::Malformed(e.to_string()))?;
        Ok(parsed.response)
    }

    /// Delay before the given 1-based retry, capped at the configured maximum.
    fn backoff_delay(&self, retry: u32) -> Duration {
        let exponent = retry.saturating_sub(1);
        let scaled = self.retry_base_delay.as_millis() as f64
            * self.retry_exponential_base.powi(exponent as i32);
        let capped = scaled.min(self.retry_max_delay.as_millis() as f64);
        Duration::from_millis(capped as u64)
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let mut retry = 0;
        loop {
            match self.request(prompt).await {
                Ok(text) => return Ok(text),
                Err(e) if retry < self.max_retries && retryable(&e) => {
                    retry += 1;
                    let delay = self.backoff_delay(retry);
                    warn!(
                        "LLM request failed ({}); retrying in {:?} ({}/{})",
                        e, delay, retry, self.max_retries
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

fn retryable(error: &LlmError) -> bool {
    match error {
        LlmError::Transport(_) => true,
        LlmError::Status { status, .. } => *status == 429 || *status >= 500,
        LlmError::Malformed(_) => false,
    }
}

fn truncate(body: &str) -> String {
    body.chars().take(200).collect()
}

/// Normalize raw model output into the bare value to fill.
///
/// Strips surrounding whitespace, markdown code fences, and one layer of
/// wrapping double quotes. Interior content is left untouched.
pub fn clean_response(raw: &str) -> String {
    let mut text = raw.trim();
    if text.starts_with("```") {
        text = text.trim_start_matches('`');
        if let Some((_tag, rest)) = text.split_once('\n') {
            text = rest;
        }
    }
    text = text.trim_end_matches('`').trim();
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        text = &text[1..text.len() - 1];
    }
    text.trim().to_string()
}
