use image::{ColorType, DynamicImage, ImageFormat};

use crate::pixel_format;

/// A decoded bitmap, owned by a single conversion for its whole lifetime.
#[derive(Debug, Clone)]
pub struct Image {
    pub pixels: DynamicImage,
    /// Container format detected when decoding, if any
    pub format: Option<ImageFormat>,
}

impl Image {
    /// Converts the pixels to 8-bit three-channel RGB, which is what the JPEG encoder accepts.
    /// Alpha is dropped without compositing; palette and grayscale images are expanded.
    pub fn normalize(&mut self) {
        let original = self.pixels.color();
        if let Some(rgb) = pixel_format::to_rgb8(&self.pixels) {
            log::debug!("converting pixel format {original:?} to {:?}", ColorType::Rgb8);
            self.pixels = rgb;
        }
    }

    pub fn is_normalized(&self) -> bool {
        self.pixels.color() == ColorType::Rgb8
    }
}
