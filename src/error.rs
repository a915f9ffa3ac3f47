use thiserror::Error;

/// Errors surfaced by the design generation pipeline.
#[derive(Debug, Error)]
pub enum StudioError {
    /// Missing or unusable API credential. Detected before any network I/O.
    #[error("configuration error: {0}")]
    Config(String),

    /// The caller handed us an unusable request.
    #[error("invalid request: {0}")]
    Request(String),

    /// The service responded but produced no usable output.
    #[error("generation failed: {0}")]
    Generation(String),

    /// The underlying HTTP call itself failed.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service rejected the call with a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Request or response payload could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Anything unexpected.
    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, StudioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StudioError::Config("GEMINI_API_KEY is not set".into());
        assert_eq!(
            err.to_string(),
            "configuration error: GEMINI_API_KEY is not set"
        );

        let err = StudioError::Api {
            status: 429,
            message: "quota exceeded".into(),
        };
        assert_eq!(err.to_string(), "API error: 429 - quota exceeded");

        let err = StudioError::Generation("model did not return image data".into());
        assert_eq!(
            err.to_string(),
            "generation failed: model did not return image data"
        );
    }
}
