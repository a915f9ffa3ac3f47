use crate::{
    error::{Result, StudioError},
    models::content::{
        GenerateContentRequest, GenerateContentResponse, GenerationConfig, PromptPart,
        ResponsePart,
    },
};
use reqwest::Client;

/// Client for the multimodal visual call. Requests image output via
/// `responseModalities` and hands back the raw candidate parts.
#[derive(Clone)]
pub struct ImageClient {
    client: Client,
    api_key: String,
    api_base: String,
    model: String,
}

impl ImageClient {
    pub fn new(client: Client, api_key: String, api_base: String, model: String) -> Self {
        Self {
            client,
            api_key,
            api_base,
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn generate(&self, parts: Vec<PromptPart>) -> Result<Vec<ResponsePart>> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base, self.model
        );
        let body = GenerateContentRequest::multimodal(parts, GenerationConfig::image_only());

        log::info!("Generating visual with model: {}", self.model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StudioError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let content: GenerateContentResponse = response.json().await?;

        // Safety blocks arrive inside an HTTP 200 response.
        if let Some(message) = content.block_message() {
            return Err(StudioError::Generation(message));
        }

        Ok(content.into_first_candidate_parts())
    }
}
