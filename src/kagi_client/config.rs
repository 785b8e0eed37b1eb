//! Configuration for the Kagi client
//!
//! - `KAGI_API_KEY`: API key (required)
//! - `KAGI_SUMMARIZER_ENGINE`: default summarizer engine (optional, default `cecil`)
//! - `KAGI_API_BASE_URL`: API base URL (optional, default `https://kagi.com/api/v0`)
//! - `KAGI_TIMEOUT_SECS`: per-call HTTP timeout in seconds (optional, default 30)

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::time::Duration;

use super::error::{KagiError, Result};

const DEFAULT_BASE_URL: &str = "https://kagi.com/api/v0";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Summarization engine variants offered by the Kagi Universal Summarizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarizerEngine {
    /// Friendly, descriptive, fast (the default)
    Cecil,
    /// Formal, technical, analytical
    Agnes,
    /// Informal, creative, friendly
    Daphne,
    /// Best-in-class, enterprise-grade
    Muriel,
}

impl SummarizerEngine {
    /// Parse an engine name. The error message lists the valid names so a
    /// caller sees the complete set of options.
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        match s.to_lowercase().as_str() {
            "cecil" => Ok(SummarizerEngine::Cecil),
            "agnes" => Ok(SummarizerEngine::Agnes),
            "daphne" => Ok(SummarizerEngine::Daphne),
            "muriel" => Ok(SummarizerEngine::Muriel),
            _ => Err(format!(
                "invalid summarizer engine '{}'; must be one of: cecil, agnes, daphne, muriel",
                s
            )),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SummarizerEngine::Cecil => "cecil",
            SummarizerEngine::Agnes => "agnes",
            SummarizerEngine::Daphne => "daphne",
            SummarizerEngine::Muriel => "muriel",
        }
    }
}

impl Default for SummarizerEngine {
    fn default() -> Self {
        SummarizerEngine::Cecil
    }
}

impl fmt::Display for SummarizerEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable configuration for the Kagi client.
///
/// Constructed once at start-up and passed explicitly into the client and
/// service constructors; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct KagiConfig {
    /// Kagi API key, attached as an Authorization header (never in URLs)
    pub api_key: String,
    /// API base URL
    pub base_url: String,
    /// Engine used by summarize calls that do not name one explicitly
    pub default_engine: SummarizerEngine,
    /// Per-call HTTP timeout
    pub timeout: Duration,
}

impl KagiConfig {
    /// Create a configuration with defaults for everything but the key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            default_engine: SummarizerEngine::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Override the API base URL (used by tests to point at a mock server).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the default summarizer engine.
    #[must_use]
    pub fn with_default_engine(mut self, engine: SummarizerEngine) -> Self {
        self.default_engine = engine;
        self
    }

    /// Override the per-call timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// A missing API key is a fatal start-up error, not a per-call error.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("KAGI_API_KEY").map_err(|_| {
            KagiError::Config(
                "KAGI_API_KEY is not set; a Kagi API key is required".to_string(),
            )
        })?;

        let mut config = Self::new(api_key);

        if let Ok(engine) = env::var("KAGI_SUMMARIZER_ENGINE") {
            config.default_engine =
                SummarizerEngine::parse(&engine).map_err(KagiError::Config)?;
        }

        if let Ok(base_url) = env::var("KAGI_API_BASE_URL") {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }

        if let Ok(timeout) = env::var("KAGI_TIMEOUT_SECS") {
            let secs: u64 = timeout.parse().map_err(|_| {
                KagiError::Config(format!("KAGI_TIMEOUT_SECS must be an integer, got '{}'", timeout))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(KagiError::Config("API key cannot be empty".to_string()));
        }

        if self.base_url.is_empty() {
            return Err(KagiError::Config("API base URL cannot be empty".to_string()));
        }

        if self.timeout.is_zero() {
            return Err(KagiError::Config("timeout must be greater than 0".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_parse_accepts_all_known_engines() {
        assert_eq!(SummarizerEngine::parse("cecil").unwrap(), SummarizerEngine::Cecil);
        assert_eq!(SummarizerEngine::parse("agnes").unwrap(), SummarizerEngine::Agnes);
        assert_eq!(SummarizerEngine::parse("daphne").unwrap(), SummarizerEngine::Daphne);
        assert_eq!(SummarizerEngine::parse("muriel").unwrap(), SummarizerEngine::Muriel);
    }

    #[test]
    fn engine_parse_is_case_insensitive() {
        assert_eq!(SummarizerEngine::parse("Cecil").unwrap(), SummarizerEngine::Cecil);
        assert_eq!(SummarizerEngine::parse("MURIEL").unwrap(), SummarizerEngine::Muriel);
    }

    #[test]
    fn engine_parse_rejects_unknown_names() {
        let err = SummarizerEngine::parse("hal9000").unwrap_err();
        assert!(err.contains("hal9000"));
        assert!(err.contains("cecil"));
    }

    #[test]
    fn default_engine_is_cecil() {
        assert_eq!(SummarizerEngine::default(), SummarizerEngine::Cecil);
        assert_eq!(KagiConfig::new("key").default_engine, SummarizerEngine::Cecil);
    }

    #[test]
    fn new_config_uses_defaults() {
        let config = KagiConfig::new("test-key");
        assert_eq!(config.base_url, "https://kagi.com/api/v0");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn with_base_url_strips_trailing_slash() {
        let config = KagiConfig::new("key").with_base_url("http://localhost:8080/");
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn validate_rejects_empty_api_key() {
        let err = KagiConfig::new("   ").validate().unwrap_err();
        assert!(matches!(err, KagiError::Config(_)));
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let config = KagiConfig::new("key").with_timeout(Duration::ZERO);
        assert!(matches!(config.validate(), Err(KagiError::Config(_))));
    }
}
