pub mod backend;
pub mod prompt;

pub use backend::GenerativeBackend;

use crate::{
    config::GeminiConfig,
    error::{Result, StudioError},
    gemini::GeminiClient,
    models::content::ResponsePart,
    models::design::{DesignRequest, DesignResult},
};
use futures::future;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

/// Orchestrates one design generation: builds the visual and caption
/// prompts, dispatches both backend calls concurrently, and merges the
/// results. Each invocation is independent; the studio holds no state
/// beyond the backend handle.
#[derive(Clone)]
pub struct DesignStudio {
    backend: Arc<dyn GenerativeBackend>,
}

impl DesignStudio {
    pub fn new(backend: Arc<dyn GenerativeBackend>) -> Self {
        Self { backend }
    }

    /// Builds a studio over the real HTTP backend. Fails here, before any
    /// network I/O, when the credential is missing or a placeholder.
    pub fn with_config(config: GeminiConfig) -> Result<Self> {
        Ok(Self::new(Arc::new(GeminiClient::new(config)?)))
    }

    pub fn from_env() -> Result<Self> {
        Self::with_config(GeminiConfig::from_env())
    }

    /// Turns one design brief into a finished design. Both backend calls run
    /// concurrently and are joined; if either fails the whole operation
    /// fails with that error. Single attempt, no retries.
    pub async fn generate(&self, request: &DesignRequest) -> Result<DesignResult> {
        if request.prompt.trim().is_empty() {
            return Err(StudioError::Request("design prompt must not be empty".into()));
        }

        let request_id = Uuid::new_v4();
        let visual_parts = prompt::visual_parts(request);
        let caption_prompt = prompt::caption_prompt(request);

        log::info!(
            "🎨 Generating {} [{}] (request {})",
            request.visual_type.label(),
            request.format.label(),
            request_id
        );
        log::debug!(
            "Visual prompt: {} part(s), caption prompt: {} chars, logo attached: {}",
            visual_parts.len(),
            caption_prompt.len(),
            request.logo.is_some()
        );

        let started = Instant::now();

        let (visual_response, caption_response) = future::try_join(
            self.backend.generate_visual(visual_parts),
            self.backend.generate_caption(&caption_prompt),
        )
        .await?;

        let image_url = extract_image_url(visual_response)?;
        let caption = caption_response.trim().to_string();

        log::info!(
            "✅ Design ready in {}ms (request {})",
            started.elapsed().as_millis(),
            request_id
        );

        Ok(DesignResult { image_url, caption })
    }
}

/// Scans the returned content parts for the first one carrying inline image
/// data and renders it as a data URI. An empty payload is treated the same
/// as a missing one; no placeholder image is ever synthesized.
fn extract_image_url(parts: Vec<ResponsePart>) -> Result<String> {
    parts
        .into_iter()
        .find_map(|part| part.inline_data)
        .filter(|blob| !blob.data.is_empty())
        .map(|blob| blob.to_data_uri())
        .ok_or_else(|| {
            StudioError::Generation(
                "The model did not return image data. Please try a different prompt.".into(),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::content::PromptPart;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct FakeBackend {
        visual_calls: AtomicUsize,
        caption_calls: AtomicUsize,
        seen_visual_parts: Mutex<Vec<PromptPart>>,
        visual_response: Mutex<Option<Result<Vec<ResponsePart>>>>,
        caption_response: Mutex<Option<Result<String>>>,
    }

    impl FakeBackend {
        fn new(visual: Result<Vec<ResponsePart>>, caption: Result<String>) -> Arc<Self> {
            Arc::new(Self {
                visual_calls: AtomicUsize::new(0),
                caption_calls: AtomicUsize::new(0),
                seen_visual_parts: Mutex::new(Vec::new()),
                visual_response: Mutex::new(Some(visual)),
                caption_response: Mutex::new(Some(caption)),
            })
        }

        fn image_parts() -> Vec<ResponsePart> {
            vec![ResponsePart::from_inline_data("image/png", "iVBORw0KGgo=")]
        }
    }

    #[async_trait]
    impl GenerativeBackend for FakeBackend {
        async fn generate_visual(&self, parts: Vec<PromptPart>) -> Result<Vec<ResponsePart>> {
            self.visual_calls.fetch_add(1, Ordering::SeqCst);
            *self.seen_visual_parts.lock().unwrap() = parts;
            self.visual_response
                .lock()
                .unwrap()
                .take()
                .expect("visual response already consumed")
        }

        async fn generate_caption(&self, _prompt: &str) -> Result<String> {
            self.caption_calls.fetch_add(1, Ordering::SeqCst);
            self.caption_response
                .lock()
                .unwrap()
                .take()
                .expect("caption response already consumed")
        }
    }

    #[tokio::test]
    async fn test_generate_returns_well_formed_data_uri() {
        let backend = FakeBackend::new(
            Ok(FakeBackend::image_parts()),
            Ok("A bold new look for your brand. #design".to_string()),
        );
        let studio = DesignStudio::new(backend.clone());

        let result = studio
            .generate(&DesignRequest::new("A promotional post for coffee beans"))
            .await
            .unwrap();

        assert_eq!(result.image_url, "data:image/png;base64,iVBORw0KGgo=");
        assert_eq!(result.caption, "A bold new look for your brand. #design");
        assert_eq!(backend.visual_calls.load(Ordering::SeqCst), 1);
        assert_eq!(backend.caption_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_prompt_rejected_before_dispatch() {
        let backend = FakeBackend::new(Ok(FakeBackend::image_parts()), Ok(String::new()));
        let studio = DesignStudio::new(backend.clone());

        let error = studio
            .generate(&DesignRequest::new("   "))
            .await
            .unwrap_err();

        assert!(matches!(error, StudioError::Request(_)));
        assert_eq!(backend.visual_calls.load(Ordering::SeqCst), 0);
        assert_eq!(backend.caption_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_visual_failure_aborts_operation() {
        let backend = FakeBackend::new(
            Err(StudioError::Api {
                status: 500,
                message: "internal".to_string(),
            }),
            Ok("A fine caption".to_string()),
        );
        let studio = DesignStudio::new(backend);

        let error = studio
            .generate(&DesignRequest::new("Coffee beans"))
            .await
            .unwrap_err();

        assert!(matches!(error, StudioError::Api { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_caption_failure_aborts_operation() {
        let backend = FakeBackend::new(
            Ok(FakeBackend::image_parts()),
            Err(StudioError::Api {
                status: 429,
                message: "quota exceeded".to_string(),
            }),
        );
        let studio = DesignStudio::new(backend);

        let error = studio
            .generate(&DesignRequest::new("Coffee beans"))
            .await
            .unwrap_err();

        assert!(matches!(error, StudioError::Api { status: 429, .. }));
    }

    #[tokio::test]
    async fn test_missing_image_part_fails() {
        let backend = FakeBackend::new(
            Ok(vec![ResponsePart::from_text("no image, sorry")]),
            Ok("A fine caption".to_string()),
        );
        let studio = DesignStudio::new(backend);

        let error = studio
            .generate(&DesignRequest::new("Coffee beans"))
            .await
            .unwrap_err();

        assert!(matches!(error, StudioError::Generation(_)));
    }

    #[tokio::test]
    async fn test_empty_image_payload_fails() {
        let backend = FakeBackend::new(
            Ok(vec![ResponsePart::from_inline_data("image/png", "")]),
            Ok("A fine caption".to_string()),
        );
        let studio = DesignStudio::new(backend);

        let error = studio
            .generate(&DesignRequest::new("Coffee beans"))
            .await
            .unwrap_err();

        assert!(matches!(error, StudioError::Generation(_)));
    }

    #[tokio::test]
    async fn test_caption_is_trimmed_and_may_be_empty() {
        let backend = FakeBackend::new(
            Ok(FakeBackend::image_parts()),
            Ok("  Great caption! #eco #fresh  ".to_string()),
        );
        let studio = DesignStudio::new(backend);
        let result = studio
            .generate(&DesignRequest::new("Coffee beans"))
            .await
            .unwrap();
        assert_eq!(result.caption, "Great caption! #eco #fresh");

        let backend = FakeBackend::new(Ok(FakeBackend::image_parts()), Ok("   ".to_string()));
        let studio = DesignStudio::new(backend);
        let result = studio
            .generate(&DesignRequest::new("Coffee beans"))
            .await
            .unwrap();
        assert_eq!(result.caption, "");
    }

    #[tokio::test]
    async fn test_logo_bytes_reach_the_backend() {
        let backend = FakeBackend::new(
            Ok(FakeBackend::image_parts()),
            Ok("A fine caption".to_string()),
        );
        let studio = DesignStudio::new(backend.clone());

        let request =
            DesignRequest::new("Coffee beans").with_logo(vec![1, 2, 3, 4], "image/jpeg");
        studio.generate(&request).await.unwrap();

        let parts = backend.seen_visual_parts.lock().unwrap();
        let blobs: Vec<_> = parts.iter().filter_map(|p| p.as_inline_blob()).collect();
        assert_eq!(blobs.len(), 1);
        assert_eq!(blobs[0].mime_type, "image/jpeg");
        assert_eq!(blobs[0].data, "AQIDBA==");
    }

    #[tokio::test]
    async fn test_placeholder_credential_rejected_at_construction() {
        let config = GeminiConfig::new().with_api_key(crate::config::PLACEHOLDER_API_KEY);
        assert!(matches!(
            DesignStudio::with_config(config),
            Err(StudioError::Config(_))
        ));
    }
}
