use serde::{Deserialize, Serialize};

pub const DEFAULT_PRIMARY_COLOR: &str = "#4f46e5";
pub const DEFAULT_SECONDARY_COLOR: &str = "#10b981";

/// Target format for the generated visual. Each variant carries its aspect
/// ratio explicitly instead of encoding it only in the display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DesignFormat {
    InstagramPost,
    InstagramStory,
    FacebookPost,
    TwitterPost,
}

impl DesignFormat {
    pub fn all() -> &'static [DesignFormat] {
        &[
            DesignFormat::InstagramPost,
            DesignFormat::InstagramStory,
            DesignFormat::FacebookPost,
            DesignFormat::TwitterPost,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            DesignFormat::InstagramPost => "Instagram Post",
            DesignFormat::InstagramStory => "Instagram Story",
            DesignFormat::FacebookPost => "Facebook Post",
            DesignFormat::TwitterPost => "Twitter Post",
        }
    }

    pub fn aspect_ratio(&self) -> &'static str {
        match self {
            DesignFormat::InstagramPost => "1:1",
            DesignFormat::InstagramStory => "9:16",
            DesignFormat::FacebookPost => "1.91:1",
            DesignFormat::TwitterPost => "16:9",
        }
    }

    /// Display label in the `"<Name> (<ratio>)"` convention, e.g.
    /// `"Instagram Post (1:1)"`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name(), self.aspect_ratio())
    }

    pub fn from_label(label: &str) -> Option<DesignFormat> {
        Self::all()
            .iter()
            .copied()
            .find(|format| format.label() == label)
    }
}

impl Default for DesignFormat {
    fn default() -> Self {
        DesignFormat::InstagramPost
    }
}

/// Extracts the parenthesized aspect ratio from a display label, e.g.
/// `"Instagram Post (1:1)"` yields `"1:1"`. Labels without a parenthesized
/// segment fall back to `"1:1"`.
pub fn aspect_ratio_from_label(label: &str) -> &str {
    let inner = label
        .find('(')
        .and_then(|open| label[open + 1..].find(')').map(|close| &label[open + 1..open + 1 + close]));
    match inner {
        Some(ratio) if !ratio.is_empty() => ratio,
        _ => "1:1",
    }
}

/// Overall aesthetic of the generated visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DesignStyle {
    HyperRealistic,
    Modern,
    Minimalist,
    Vintage,
    Futuristic,
    Elegant,
    BoldVibrant,
    AnimeManga,
    StudioGhibli,
    Watercolor,
}

impl DesignStyle {
    pub fn all() -> &'static [DesignStyle] {
        &[
            DesignStyle::HyperRealistic,
            DesignStyle::Modern,
            DesignStyle::Minimalist,
            DesignStyle::Vintage,
            DesignStyle::Futuristic,
            DesignStyle::Elegant,
            DesignStyle::BoldVibrant,
            DesignStyle::AnimeManga,
            DesignStyle::StudioGhibli,
            DesignStyle::Watercolor,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DesignStyle::HyperRealistic => "Hyper-Realistic",
            DesignStyle::Modern => "Modern",
            DesignStyle::Minimalist => "Minimalist",
            DesignStyle::Vintage => "Vintage",
            DesignStyle::Futuristic => "Futuristic",
            DesignStyle::Elegant => "Elegant",
            DesignStyle::BoldVibrant => "Bold & Vibrant",
            DesignStyle::AnimeManga => "Anime / Manga",
            DesignStyle::StudioGhibli => "Studio Ghibli Inspired",
            DesignStyle::Watercolor => "Watercolor",
        }
    }

    /// Styles that should render as a photograph rather than an illustration.
    pub fn is_photorealistic(&self) -> bool {
        matches!(self, DesignStyle::HyperRealistic)
    }
}

impl Default for DesignStyle {
    fn default() -> Self {
        DesignStyle::HyperRealistic
    }
}

/// Kind of marketing visual being produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisualType {
    SocialMediaAd,
    EventFlyer,
    RestaurantMenu,
    BusinessCard,
    WebsiteBanner,
}

impl VisualType {
    pub fn all() -> &'static [VisualType] {
        &[
            VisualType::SocialMediaAd,
            VisualType::EventFlyer,
            VisualType::RestaurantMenu,
            VisualType::BusinessCard,
            VisualType::WebsiteBanner,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            VisualType::SocialMediaAd => "Social Media Ad",
            VisualType::EventFlyer => "Event Flyer",
            VisualType::RestaurantMenu => "Restaurant Menu",
            VisualType::BusinessCard => "Business Card",
            VisualType::WebsiteBanner => "Website Banner",
        }
    }
}

impl Default for VisualType {
    fn default() -> Self {
        VisualType::SocialMediaAd
    }
}

/// A brand logo handed to the generator. The caller is responsible for
/// decoding any upload format; the core only sees raw bytes plus media type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoAttachment {
    pub data: Vec<u8>,
    pub mime_type: String,
}

impl LogoAttachment {
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            data,
            mime_type: mime_type.into(),
        }
    }
}

/// One design brief, built once per submission and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignRequest {
    pub prompt: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub format: DesignFormat,
    pub logo: Option<LogoAttachment>,
    pub overlay_text: Option<String>,
    pub component_style: Option<String>,
    pub style: DesignStyle,
    pub visual_type: VisualType,
}

impl DesignRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            secondary_color: DEFAULT_SECONDARY_COLOR.to_string(),
            format: DesignFormat::default(),
            logo: None,
            overlay_text: None,
            component_style: None,
            style: DesignStyle::default(),
            visual_type: VisualType::default(),
        }
    }

    pub fn with_colors(
        mut self,
        primary: impl Into<String>,
        secondary: impl Into<String>,
    ) -> Self {
        self.primary_color = primary.into();
        self.secondary_color = secondary.into();
        self
    }

    pub fn with_format(mut self, format: DesignFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_logo(mut self, data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        self.logo = Some(LogoAttachment::new(data, mime_type));
        self
    }

    pub fn with_overlay_text(mut self, text: impl Into<String>) -> Self {
        self.overlay_text = Some(text.into());
        self
    }

    pub fn with_component_style(mut self, hints: impl Into<String>) -> Self {
        self.component_style = Some(hints.into());
        self
    }

    pub fn with_style(mut self, style: DesignStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_visual_type(mut self, visual_type: VisualType) -> Self {
        self.visual_type = visual_type;
        self
    }
}

/// Finished design: a self-contained image data URI plus a social caption.
#[derive(Debug, Clone, Serialize)]
pub struct DesignResult {
    pub image_url: String,
    pub caption: String,
}
