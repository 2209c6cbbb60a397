//! Generation client configuration.

/// Configuration for the generation client.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmConfig {
    /// API endpoint.
    pub endpoint: String,
    /// API key, read from GEMINI_API_KEY. Checked when a call is attempted.
    pub api_key: Option<String>,
    /// Model used for drafting.
    pub model: String,
    /// Maximum tokens in the response.
    pub max_output_tokens: u32,
    /// Temperature for generation (0.0 - 1.0).
    pub temperature: f32,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_max_output_tokens() -> u32 {
    1024
}

fn default_temperature() -> f32 {
    0.3
}

fn default_timeout_secs() -> u64 {
    120
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self::base_default().with_env_overrides()
    }
}

impl LlmConfig {
    /// Base default without env overrides (used internally to avoid recursion).
    fn base_default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            model: default_model(),
            max_output_tokens: default_max_output_tokens(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Apply environment variable overrides.
    ///
    /// Supported env vars:
    /// - `GEMINI_API_KEY`: API key
    /// - `GEMINI_MODEL`: Model name
    /// - `GEMINI_API_URL`: API endpoint
    /// - `GEMINI_MAX_TOKENS`: Maximum tokens in response
    /// - `GEMINI_TEMPERATURE`: Generation temperature (0.0-1.0)
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(val) = std::env::var("GEMINI_API_KEY") {
            if !val.is_empty() {
                self.api_key = Some(val);
            }
        }
        if let Ok(val) = std::env::var("GEMINI_MODEL") {
            if !val.is_empty() {
                self.model = val;
            }
        }
        if let Ok(val) = std::env::var("GEMINI_API_URL") {
            if !val.is_empty() {
                self.endpoint = val.trim_end_matches('/').to_string();
            }
        }
        if let Ok(val) = std::env::var("GEMINI_MAX_TOKENS") {
            if let Ok(n) = val.parse() {
                self.max_output_tokens = n;
            }
        }
        if let Ok(val) = std::env::var("GEMINI_TEMPERATURE") {
            if let Ok(t) = val.parse() {
                self.temperature = t;
            }
        }
        self
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_defaults() {
        let config = LlmConfig::base_default();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.endpoint, "https://generativelanguage.googleapis.com");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_with_model() {
        let config = LlmConfig::base_default().with_model("gemini-2.5-pro");
        assert_eq!(config.model, "gemini-2.5-pro");
    }

    #[test]
    fn test_with_endpoint_trims_slash() {
        let config = LlmConfig::base_default().with_endpoint("http://localhost:9090/");
        assert_eq!(config.endpoint, "http://localhost:9090");
    }
}
