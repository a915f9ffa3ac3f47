use crate::{
    error::{Result, StudioError},
    models::content::{GenerateContentRequest, GenerateContentResponse},
};
use reqwest::Client;

/// Client for the text-only caption call.
#[derive(Clone)]
pub struct TextClient {
    client: Client,
    api_key: String,
    api_base: String,
    model: String,
}

impl TextClient {
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

    /// Returns the concatenated text of the first candidate, untrimmed.
    /// An empty string is a valid response.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base, self.model
        );
        let body = GenerateContentRequest::text_only(prompt);

        log::info!("Generating caption with model: {}", self.model);
        log::debug!("Caption prompt length: {} chars", prompt.len());

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

        if let Some(message) = content.block_message() {
            return Err(StudioError::Generation(message));
        }

        let text = content
            .into_first_candidate_parts()
            .into_iter()
            .filter_map(|part| part.text)
            .collect::<Vec<_>>()
            .join("");

        Ok(text)
    }
}
