use crate::error::{Result, StudioError};
use std::env;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";

/// Sentinel shipped in env templates. Never a real credential.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_GEMINI_API_KEY_HERE";

#[derive(Debug, Clone, Default)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub api_base: Option<String>,
    pub image_model: Option<String>,
    pub text_model: Option<String>,
}

impl GeminiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        GeminiConfig {
            api_key: env::var("GEMINI_API_KEY").ok(),
            api_base: env::var("GEMINI_API_BASE").ok(),
            image_model: env::var("GEMINI_IMAGE_MODEL").ok(),
            text_model: env::var("GEMINI_TEXT_MODEL").ok(),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    pub fn with_models(
        mut self,
        image_model: impl Into<String>,
        text_model: impl Into<String>,
    ) -> Self {
        self.image_model = Some(image_model.into());
        self.text_model = Some(text_model.into());
        self
    }

    pub fn api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    pub fn image_model(&self) -> &str {
        self.image_model.as_deref().unwrap_or(DEFAULT_IMAGE_MODEL)
    }

    pub fn text_model(&self) -> &str {
        self.text_model.as_deref().unwrap_or(DEFAULT_TEXT_MODEL)
    }

    /// Resolves the API credential, rejecting the missing, empty, and
    /// placeholder cases before any network call is made.
    pub fn resolve_api_key(&self) -> Result<String> {
        let key = self.api_key.as_deref().unwrap_or("");
        if key.is_empty() {
            return Err(StudioError::Config(
                "API key not found. Set GEMINI_API_KEY in the environment or a .env file.".into(),
            ));
        }
        if key == PLACEHOLDER_API_KEY {
            return Err(StudioError::Config(
                "API key is still the placeholder value. Replace it with a real Gemini API key."
                    .into(),
            ));
        }
        Ok(key.to_string())
    }
}
