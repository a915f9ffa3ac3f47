use crate::models::{
    content::PromptPart,
    design::DesignRequest,
};

/// Assembles the ordered prompt parts for the visual call: one structured
/// text brief, followed by the logo bytes when a logo was supplied.
pub fn visual_parts(request: &DesignRequest) -> Vec<PromptPart> {
    let mut parts = vec![PromptPart::text(visual_brief(request))];

    if let Some(logo) = &request.logo {
        parts.push(PromptPart::inline_data(logo.mime_type.clone(), &logo.data));
    }

    parts
}

fn visual_brief(request: &DesignRequest) -> String {
    let overlay_line = match request.overlay_text.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => format!(
            "\"{}\". This is the most important element. Ensure it is legible, well-placed, and creatively integrated with the design.",
            text
        ),
        _ => "None specified. Focus on a strong visual that leaves space for text to be added later."
            .to_string(),
    };

    let mut style_line = format!(
        "\"{}\". The design must strictly embody this aesthetic.",
        request.style.label()
    );
    if request.style.is_photorealistic() {
        style_line.push_str(
            " The image should look like a real photograph, with photorealistic lighting, textures, and details.",
        );
    }

    let component_line = match request.component_style.as_deref().map(str::trim) {
        Some(hints) if !hints.is_empty() => format!(
            "Apply these specific styles to elements within the visual: \"{}\".",
            hints
        ),
        _ => "None specified.".to_string(),
    };

    let branding_line = if request.logo.is_some() {
        "- **Brand Logo:** Incorporate the provided logo naturally and elegantly. Do not distort, recolor, or obstruct the logo. Place it where it makes sense (e.g., a corner)."
    } else {
        "- **Branding:** The design is for a professional brand, so it must reflect superior quality and aesthetics."
    };

    format!(
        "Generate a visually stunning and ultra-high quality graphic. The final output must be extremely polished and professional.\n\
         \n\
         **Design Brief:**\n\
         - **Visual Type:** A professional \"{visual_type}\".\n\
         - **Topic:** \"{topic}\"\n\
         - **Key Text on Visual:** {overlay_line}\n\
         - **Overall Style:** {style_line}\n\
         - **Component Style Details:** {component_line}\n\
         - **Aspect Ratio:** {aspect_ratio}. Adhere to this strictly.\n\
         - **Brand Colors:** Use \"{primary}\" as the dominant color and \"{secondary}\" as an accent color. The color scheme should be harmonious and integrated naturally into the chosen style.\n\
         {branding_line}\n\
         - **Quality Requirement:** The output MUST be of the highest possible quality. Think 4K, ultra-high resolution, with sharp focus, crisp lines and professional-grade composition. Avoid cartoonish or overly simplistic styles unless explicitly requested.",
        visual_type = request.visual_type.label(),
        topic = request.prompt.trim(),
        overlay_line = overlay_line,
        style_line = style_line,
        component_line = component_line,
        aspect_ratio = request.format.aspect_ratio(),
        primary = request.primary_color,
        secondary = request.secondary_color,
        branding_line = branding_line,
    )
}

/// Short instruction for the caption call. Text only, no image content.
pub fn caption_prompt(request: &DesignRequest) -> String {
    format!(
        "Generate a short and catchy social media caption for a \"{visual_type}\" about: \"{topic}\".\n\
         The visual style is \"{style}\".\n\
         The tone should be professional yet engaging. Include 3-4 relevant hashtags.\n\
         Keep the caption under 60 words.",
        visual_type = request.visual_type.label(),
        topic = request.prompt.trim(),
        style = request.style.label(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::design::{DesignFormat, DesignStyle, VisualType};
    use base64::Engine;

    fn brief_text(request: &DesignRequest) -> String {
        let parts = visual_parts(request);
        parts[0].as_text().unwrap().to_string()
    }

    #[test]
    fn test_brief_embeds_core_fields() {
        let request = DesignRequest::new("A pop-up bakery opening")
            .with_colors("#112233", "#445566")
            .with_format(DesignFormat::InstagramStory)
            .with_style(DesignStyle::Vintage)
            .with_visual_type(VisualType::EventFlyer);

        let brief = brief_text(&request);
        assert!(brief.contains("A professional \"Event Flyer\""));
        assert!(brief.contains("\"A pop-up bakery opening\""));
        assert!(brief.contains("\"Vintage\". The design must strictly embody this aesthetic."));
        assert!(brief.contains("**Aspect Ratio:** 9:16. Adhere to this strictly."));
        assert!(brief.contains("Use \"#112233\" as the dominant color"));
        assert!(brief.contains("\"#445566\" as an accent color"));
    }

    #[test]
    fn test_overlay_text_is_marked_most_important() {
        let request = DesignRequest::new("Coffee beans").with_overlay_text("Fresh Brews!");
        let brief = brief_text(&request);
        assert!(brief.contains("\"Fresh Brews!\". This is the most important element."));

        let request = DesignRequest::new("Coffee beans");
        let brief = brief_text(&request);
        assert!(brief.contains("leaves space for text to be added later"));

        // Whitespace-only overlay text counts as absent.
        let request = DesignRequest::new("Coffee beans").with_overlay_text("   ");
        let brief = brief_text(&request);
        assert!(brief.contains("leaves space for text to be added later"));
    }

    #[test]
    fn test_photorealistic_style_gets_stronger_instruction() {
        let request = DesignRequest::new("Coffee beans").with_style(DesignStyle::HyperRealistic);
        let brief = brief_text(&request);
        assert!(brief.contains("should look like a real photograph"));

        let request = DesignRequest::new("Coffee beans").with_style(DesignStyle::Watercolor);
        let brief = brief_text(&request);
        assert!(!brief.contains("should look like a real photograph"));
    }

    #[test]
    fn test_component_style_hints() {
        let request =
            DesignRequest::new("Coffee beans").with_component_style("soft shadows, rounded badges");
        let brief = brief_text(&request);
        assert!(brief.contains(
            "Apply these specific styles to elements within the visual: \"soft shadows, rounded badges\"."
        ));

        let request = DesignRequest::new("Coffee beans");
        let brief = brief_text(&request);
        assert!(brief.contains("**Component Style Details:** None specified."));
    }

    #[test]
    fn test_no_logo_means_no_binary_part() {
        let request = DesignRequest::new("Coffee beans");
        let parts = visual_parts(&request);
        assert_eq!(parts.len(), 1);
        assert!(parts.iter().all(|part| !part.is_inline_data()));
        assert!(brief_text(&request).contains("**Branding:**"));
    }

    #[test]
    fn test_logo_attached_as_single_binary_part() {
        let logo_bytes = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        let request =
            DesignRequest::new("Coffee beans").with_logo(logo_bytes.clone(), "image/png");

        let parts = visual_parts(&request);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts.iter().filter(|part| part.is_inline_data()).count(), 1);

        let blob = parts[1].as_inline_blob().unwrap();
        assert_eq!(blob.mime_type, "image/png");
        assert_eq!(
            blob.data,
            base64::engine::general_purpose::STANDARD.encode(&logo_bytes)
        );
        assert!(brief_text(&request).contains("**Brand Logo:**"));
        assert!(brief_text(&request).contains("Do not distort, recolor, or obstruct the logo."));
    }

    #[test]
    fn test_caption_prompt_references_brief() {
        let request = DesignRequest::new("A rooftop jazz night")
            .with_style(DesignStyle::Elegant)
            .with_visual_type(VisualType::EventFlyer);

        let prompt = caption_prompt(&request);
        assert!(prompt.contains("caption for a \"Event Flyer\""));
        assert!(prompt.contains("about: \"A rooftop jazz night\""));
        assert!(prompt.contains("The visual style is \"Elegant\"."));
        assert!(prompt.contains("Include 3-4 relevant hashtags."));
        assert!(prompt.contains("under 60 words"));
    }
}
