pub mod image_client;
pub mod text_client;

pub use image_client::ImageClient;
pub use text_client::TextClient;

use crate::{
    config::GeminiConfig,
    error::Result,
    models::content::{PromptPart, ResponsePart},
    studio::backend::GenerativeBackend,
};
use async_trait::async_trait;

/// HTTP client for the generative service. The credential is resolved once
/// at construction, so a missing or placeholder key fails here instead of
/// on the first call.
#[derive(Clone)]
pub struct GeminiClient {
    image_client: ImageClient,
    text_client: TextClient,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let api_key = config.resolve_api_key()?;
        let http = reqwest::Client::new();

        Ok(Self {
            image_client: ImageClient::new(
                http.clone(),
                api_key.clone(),
                config.api_base().to_string(),
                config.image_model().to_string(),
            ),
            text_client: TextClient::new(
                http,
                api_key,
                config.api_base().to_string(),
                config.text_model().to_string(),
            ),
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(GeminiConfig::from_env())
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }

    pub fn text(&self) -> &TextClient {
        &self.text_client
    }
}

#[async_trait]
impl GenerativeBackend for GeminiClient {
    async fn generate_visual(&self, parts: Vec<PromptPart>) -> Result<Vec<ResponsePart>> {
        self.image_client.generate(parts).await
    }

    async fn generate_caption(&self, prompt: &str) -> Result<String> {
        self.text_client.generate(prompt).await
    }
}
