/// Placeholder key value shipped in sample configs; treated the same as no key
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY_HERE";

/// Default model used when GEMINI_MODEL env var is not set
pub const DEFAULT_MODEL: &str = "gemma-3-27b-it";

/// Default base URL of the Generative Language API
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default role for the instruction block. The upstream API accepts the
/// instruction under the "model" role; kept configurable via
/// GEMINI_INSTRUCTION_ROLE in case a model requires "system" instead.
pub const DEFAULT_INSTRUCTION_ROLE: &str = "model";

/// Application configuration, injected into the adapter at construction time.
/// Core logic never reads the environment directly.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the Generative Language API. None means unconfigured.
    pub api_key: Option<String>,
    pub model: String,
    pub instruction_role: String,
    pub api_base_url: String,
}

impl Config {
    /// Load configuration from .env file and environment
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // missing .env is fine

        let api_key = std::env::var("GEMINI_API_KEY").ok();

        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let instruction_role = std::env::var("GEMINI_INSTRUCTION_ROLE")
            .unwrap_or_else(|_| DEFAULT_INSTRUCTION_ROLE.to_string());

        let api_base_url = std::env::var("GEMINI_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        Self {
            api_key,
            model,
            instruction_role,
            api_base_url,
        }
    }

    /// Create a configuration with the given key and all defaults
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            model: DEFAULT_MODEL.to_string(),
            instruction_role: DEFAULT_INSTRUCTION_ROLE.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    /// The API key, if one is configured and not the sample placeholder
    pub fn usable_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty() && *key != PLACEHOLDER_API_KEY)
    }
}
