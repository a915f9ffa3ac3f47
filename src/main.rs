use base64::Engine;
use designgen::{DesignFormat, DesignRequest, DesignStudio, DesignStyle, VisualType};
use std::env;
use std::fs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    designgen::logger::init_with_config(
        designgen::logger::LoggerConfig::development()
            .with_level(designgen::logger::LogLevel::Debug),
    )?;

    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    log::info!("🔍 Checking Gemini environment...");

    match env::var("GEMINI_API_KEY") {
        Ok(key) if !key.is_empty() => {
            log::info!("✅ GEMINI_API_KEY found in environment");
            log::debug!("API key starts with: {}...", &key[..6.min(key.len())]);
        }
        _ => {
            log::warn!("⚠️  GEMINI_API_KEY not set, generation will fail");
        }
    }

    if let Ok(base) = env::var("GEMINI_API_BASE") {
        log::info!("GEMINI_API_BASE: {}", base);
    }

    log::info!("🔄 Creating design studio...");
    let studio = match DesignStudio::from_env() {
        Ok(studio) => {
            log::info!("✅ Design studio initialized successfully");
            studio
        }
        Err(e) => {
            log::error!("❌ Failed to initialize design studio: {}", e);
            return Err(e.into());
        }
    };

    let mut request =
        DesignRequest::new("A promotional post for a new line of eco-friendly coffee beans.")
            .with_overlay_text("Fresh Brews, Greener Tomorrow!")
            .with_colors("#4f46e5", "#10b981")
            .with_format(DesignFormat::InstagramPost)
            .with_style(DesignStyle::HyperRealistic)
            .with_visual_type(VisualType::SocialMediaAd)
            .with_component_style("photorealistic lighting, detailed textures");

    if let Ok(path) = env::var("DESIGN_LOGO_PATH") {
        match fs::read(&path) {
            Ok(bytes) => {
                let mime_type = mime_for_path(&path);
                log::info!(
                    "🖼️  Attaching logo from {} ({}, {} bytes)",
                    path,
                    mime_type,
                    bytes.len()
                );
                request = request.with_logo(bytes, mime_type);
            }
            Err(e) => {
                log::warn!("⚠️  Could not read logo at {}: {}", path, e);
            }
        }
    }

    log::info!("🎨 Requesting design generation...");
    match studio.generate(&request).await {
        Ok(result) => {
            log::info!("✅ Design generation successful!");
            log::info!(
                "📏 Image data URI length: {} characters",
                result.image_url.len()
            );
            log::info!("📝 Caption: {}", result.caption);

            match decode_data_uri(&result.image_url) {
                Some((extension, image_bytes)) => {
                    let filename = format!(
                        "generated_design_{}.{}",
                        chrono::Utc::now().timestamp(),
                        extension
                    );
                    match fs::write(&filename, image_bytes) {
                        Ok(_) => log::info!("💾 Design saved to: {}", filename),
                        Err(e) => log::error!("❌ Failed to save design: {}", e),
                    }
                }
                None => {
                    log::error!("❌ Could not decode the returned data URI");
                }
            }
        }
        Err(e) => {
            log::error!("❌ Design generation failed: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}

fn mime_for_path(path: &str) -> &'static str {
    match path
        .rsplit('.')
        .next()
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        _ => "image/png",
    }
}

fn decode_data_uri(uri: &str) -> Option<(&'static str, Vec<u8>)> {
    let rest = uri.strip_prefix("data:")?;
    let (mime_type, payload) = rest.split_once(";base64,")?;
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .ok()?;
    let extension = match mime_type {
        "image/jpeg" => "jpg",
        "image/webp" => "webp",
        _ => "png",
    };
    Some((extension, bytes))
}
