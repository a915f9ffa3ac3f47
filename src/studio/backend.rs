use crate::{
    error::Result,
    models::content::{PromptPart, ResponsePart},
};
use async_trait::async_trait;

/// Seam to the external generative capability. `GeminiClient` implements it
/// over HTTP; tests substitute fakes.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Multimodal visual generation. Returns the content parts of the first
    /// candidate, which may be empty.
    async fn generate_visual(&self, parts: Vec<PromptPart>) -> Result<Vec<ResponsePart>>;

    /// Text-only caption generation. Returns the raw, untrimmed text.
    async fn generate_caption(&self, prompt: &str) -> Result<String>;
}
