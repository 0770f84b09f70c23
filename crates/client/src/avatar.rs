//! Avatar download and circular cropping.
//!
//! [`AvatarLoader`] fetches the image bytes behind a character's
//! `image` URL, decodes them with the [`image`] crate, and masks the
//! result to a circle: the image is centre-cropped to a square and every
//! pixel outside the inscribed circle is made fully transparent.

use image::{imageops, DynamicImage, RgbaImage};

/// A decoded, circle-cropped avatar.
#[derive(Debug, Clone)]
pub struct Avatar {
    pub source_url: String,
    pub image: RgbaImage,
}

impl Avatar {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Errors from avatar loading.
#[derive(Debug, thiserror::Error)]
pub enum AvatarError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Avatar download failed with status {0}")]
    Status(u16),

    #[error("Avatar could not be decoded: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Avatar load cancelled")]
    Cancelled,
}

/// Downloads and crops avatars.
#[derive(Clone)]
pub struct AvatarLoader {
    client: reqwest::Client,
}

impl AvatarLoader {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Download, decode and circle-crop the image at `url`.
    pub async fn load(&self, url: &str) -> Result<Avatar, AvatarError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AvatarError::Status(status.as_u16()));
        }
        let bytes = response.bytes().await?;
        tracing::debug!(%url, size = bytes.len(), "Avatar downloaded");

        let decoded = image::load_from_memory(&bytes)?;
        Ok(Avatar {
            source_url: url.to_string(),
            image: circle_crop(&decoded),
        })
    }
}

/// Centre-crop to a square and clear every pixel outside the inscribed
/// circle.
pub fn circle_crop(source: &DynamicImage) -> RgbaImage {
    let rgba = source.to_rgba8();
    let side = rgba.width().min(rgba.height());
    let left = (rgba.width() - side) / 2;
    let top = (rgba.height() - side) / 2;

    let mut square = imageops::crop_imm(&rgba, left, top, side, side).to_image();

    let radius = side as f64 / 2.0;
    for (x, y, pixel) in square.enumerate_pixels_mut() {
        let dx = x as f64 + 0.5 - radius;
        let dy = y as f64 + 0.5 - radius;
        if dx * dx + dy * dy > radius * radius {
            pixel.0[3] = 0;
        }
    }
    square
}
