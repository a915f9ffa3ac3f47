//! Designgen turns a structured design brief (prompt, brand colors, format,
//! logo, style choices) into a generated visual plus a matching social
//! caption by orchestrating two concurrent calls to a Gemini-style
//! `generateContent` API.

pub mod config;
pub mod error;
pub mod gemini;
pub mod logger;
pub mod models;
pub mod studio;

pub use config::GeminiConfig;
pub use error::{Result, StudioError};
pub use gemini::{GeminiClient, ImageClient, TextClient};
pub use models::content::{PromptPart, ResponsePart};
pub use models::design::{
    aspect_ratio_from_label, DesignFormat, DesignRequest, DesignResult, DesignStyle,
    LogoAttachment, VisualType,
};
pub use studio::{DesignStudio, GenerativeBackend};
