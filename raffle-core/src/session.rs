use crate::error::{RaffleError, Result};
use crate::raffle::Raffle;
use crate::types::BackgroundImage;
use std::path::Path;

/// MIME type for a background image file, by extension.
pub fn image_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        _ => return None,
    };
    Some(mime)
}

impl Raffle {
    pub fn set_background(&self, bytes: &[u8], mime: &str) -> Result<BackgroundImage> {
        let image = BackgroundImage::from_bytes(bytes, mime);
        self.state().set_background(&image)?;
        tracing::info!("Background set ({}, {} bytes)", mime, bytes.len());
        Ok(image)
    }

    pub async fn set_background_file(&self, path: &Path) -> Result<BackgroundImage> {
        let mime = image_mime(path)
            .ok_or_else(|| RaffleError::UnsupportedImage(path.display().to_string()))?;

        if !path.exists() {
            return Err(RaffleError::missing_input(format!(
                "No image at '{}'",
                path.display()
            )));
        }

        let bytes = tokio::fs::read(path).await?;
        self.set_background(&bytes, mime)
    }

    /// Stored background, if one was set and is still readable.
    pub fn load_background(&self) -> Option<BackgroundImage> {
        let image = self.state().background();
        if image.is_some() {
            tracing::debug!("Restored saved background");
        }
        image
    }

    /// Wipe every persisted key, including ones written under other
    /// configurations. Returns the number of keys removed.
    pub fn reset_all(&self) -> Result<usize> {
        let removed = self.storage().clear()?;
        tracing::warn!("Reset wiped {} stored keys", removed);
        Ok(removed)
    }
}
