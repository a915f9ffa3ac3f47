use base64::Engine;
use serde::{Deserialize, Serialize};

/// Inline binary content on the wire: base64 payload plus media type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineBlob {
    pub mime_type: String,
    pub data: String,
}

impl InlineBlob {
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }

    /// Renders the blob as a self-contained `data:` URI.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// One part of a multimodal prompt. Serializes untagged so text parts become
/// `{"text": ...}` and binary parts `{"inlineData": {...}}`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PromptPart {
    Text {
        text: String,
    },
    #[serde(rename_all = "camelCase")]
    InlineData {
        inline_data: InlineBlob,
    },
}

impl PromptPart {
    pub fn text(text: impl Into<String>) -> Self {
        PromptPart::Text { text: text.into() }
    }

    pub fn inline_data(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        PromptPart::InlineData {
            inline_data: InlineBlob::from_bytes(mime_type, bytes),
        }
    }

    pub fn is_inline_data(&self) -> bool {
        matches!(self, PromptPart::InlineData { .. })
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PromptPart::Text { text } => Some(text),
            PromptPart::InlineData { .. } => None,
        }
    }

    pub fn as_inline_blob(&self) -> Option<&InlineBlob> {
        match self {
            PromptPart::Text { .. } => None,
            PromptPart::InlineData { inline_data } => Some(inline_data),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PromptContent {
    pub parts: Vec<PromptPart>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_modalities: Vec<String>,
}

impl GenerationConfig {
    pub fn image_only() -> Self {
        Self {
            response_modalities: vec!["IMAGE".to_string()],
        }
    }
}

/// Request envelope for the `generateContent` endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<PromptContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    pub fn multimodal(parts: Vec<PromptPart>, config: GenerationConfig) -> Self {
        Self {
            contents: vec![PromptContent { parts }],
            generation_config: Some(config),
        }
    }

    pub fn text_only(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![PromptContent {
                parts: vec![PromptPart::text(prompt)],
            }],
            generation_config: None,
        }
    }
}

/// Response envelope for `generateContent`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

impl GenerateContentResponse {
    /// Content parts of the first candidate; empty when the response carries
    /// no candidates or no content.
    pub fn into_first_candidate_parts(self) -> Vec<ResponsePart> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| content.parts)
            .unwrap_or_default()
    }

    /// Block reason reported by the service's safety layer, if any. Blocks
    /// arrive inside an otherwise-successful HTTP response.
    pub fn block_message(&self) -> Option<String> {
        let feedback = self.prompt_feedback.as_ref()?;
        let reason = feedback.block_reason.as_ref()?;
        Some(
            feedback
                .block_reason_message
                .clone()
                .unwrap_or_else(|| format!("prompt blocked: {}", reason)),
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

/// One part of a returned candidate. Either field may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub inline_data: Option<InlineBlob>,
}

impl ResponsePart {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    pub fn from_inline_data(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineBlob {
                mime_type: mime_type.into(),
                data: data.into(),
            }),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
    #[serde(default)]
    pub block_reason_message: Option<String>,
}
