use serde::{Deserialize, Serialize};

use formant_common::constants::{
    DEFAULT_FUZZY_MATCH_THRESHOLD, MAX_FUZZY_MATCH_THRESHOLD, MIN_FUZZY_MATCH_THRESHOLD,
};

use super::loader::ConfigError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormantConfig {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub resume: ResumeConfig,
}

impl FormantConfig {
    /// Check every rule and report the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.llm.validate()?;
        self.matching.validate()?;
        self.timing.validate()?;
        self.resume.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub temperature: f64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_retry_base_delay_ms")]
    pub retry_base_delay_ms: u64,
    #[serde(default = "default_retry_max_delay_ms")]
    pub retry_max_delay_ms: u64,
    #[serde(default = "default_retry_exponential_base")]
    pub retry_exponential_base: f64,
}

impl LlmConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(invalid(
                "llm.temperature",
                self.temperature,
                "must be between 0.0 and 1.0",
            ));
        }
        if self.timeout_secs == 0 {
            return Err(invalid(
                "llm.timeout_secs",
                self.timeout_secs,
                "must be greater than zero",
            ));
        }
        if self.max_retries > 10 {
            return Err(invalid(
                "llm.max_retries",
                self.max_retries,
                "must be at most 10",
            ));
        }
        if self.retry_base_delay_ms == 0 {
            return Err(invalid(
                "llm.retry_base_delay_ms",
                self.retry_base_delay_ms,
                "must be greater than zero",
            ));
        }
        if self.retry_max_delay_ms < self.retry_base_delay_ms {
            return Err(invalid(
                "llm.retry_max_delay_ms",
                self.retry_max_delay_ms,
                "must be at least retry_base_delay_ms",
            ));
        }
        if self.retry_exponential_base <= 1.0 {
            return Err(invalid(
                "llm.retry_exponential_base",
                self.retry_exponential_base,
                "must be greater than 1.0",
            ));
        }
        Ok(())
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            endpoint: default_endpoint(),
            temperature: 0.0,
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            retry_base_delay_ms: default_retry_base_delay_ms(),
            retry_max_delay_ms: default_retry_max_delay_ms(),
            retry_exponential_base: default_retry_exponential_base(),
        }
    }
}

fn default_provider() -> String {
    "ollama".to_string()
}

fn default_model() -> String {
    "mistral".to_string()
}

fn default_endpoint() -> String {
    "http://localhost:11434".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_base_delay_ms() -> u64 {
    1000
}

fn default_retry_max_delay_ms() -> u64 {
    60000
}

fn default_retry_exponential_base() -> f64 {
    2.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    #[serde(default = "default_fuzzy_match_threshold")]
    pub fuzzy_match_threshold: i32,
}

impl MatchingConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let range = MIN_FUZZY_MATCH_THRESHOLD..=MAX_FUZZY_MATCH_THRESHOLD;
        if !range.contains(&self.fuzzy_match_threshold) {
            return Err(invalid(
                "matching.fuzzy_match_threshold",
                self.fuzzy_match_threshold,
                "must be between 0 and 100",
            ));
        }
        Ok(())
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            fuzzy_match_threshold: default_fuzzy_match_threshold(),
        }
    }
}

fn default_fuzzy_match_threshold() -> i32 {
    DEFAULT_FUZZY_MATCH_THRESHOLD
}

/// Timeouts surfaced to the embedding driver. The pipeline itself does
/// not enforce them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    #[serde(default = "default_element_timeout_ms")]
    pub element_timeout_ms: u64,
    #[serde(default = "default_page_load_timeout_ms")]
    pub page_load_timeout_ms: u64,
}

impl TimingConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.element_timeout_ms == 0 {
            return Err(invalid(
                "timing.element_timeout_ms",
                self.element_timeout_ms,
                "must be greater than zero",
            ));
        }
        if self.page_load_timeout_ms == 0 {
            return Err(invalid(
                "timing.page_load_timeout_ms",
                self.page_load_timeout_ms,
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            element_timeout_ms: default_element_timeout_ms(),
            page_load_timeout_ms: default_page_load_timeout_ms(),
        }
    }
}

fn default_element_timeout_ms() -> u64 {
    5000
}

fn default_page_load_timeout_ms() -> u64 {
    30000
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeConfig {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl ResumeConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.path.is_some() && self.content.is_some() {
            return Err(invalid(
                "resume",
                "path and content both set",
                "supply at most one resume source",
            ));
        }
        Ok(())
    }
}

fn invalid(key: &str, value: impl std::fmt::Display, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
