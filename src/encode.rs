use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use image::{codecs::jpeg::JpegEncoder, ColorType, ImageFormat};

use crate::{error::ConversionError, image::Image, rc_err, rc_try};

/// Quality used for every encode. Matches the default of the most common imaging libraries.
pub const JPEG_QUALITY: u8 = 75;

/// Writes the image to `path` as a JPEG, replacing whatever is there.
///
/// The image must already be normalized to `Rgb8`.
/// Nothing is written atomically: a failure halfway leaves a truncated file behind.
pub fn encode(image: &Image, path: &Path) -> Result<(), ConversionError> {
    if image.pixels.color() != ColorType::Rgb8 {
        return Err(rc_err!(
            "JPEG requires {:?} pixels, got {:?}",
            ColorType::Rgb8,
            image.pixels.color()
        ));
    }
    warn_on_mismatched_extension(path);

    // `File::create` automatically truncates (overwrites) the file if it exists.
    let file = File::create(path)
        .map_err(|error| rc_err!("unable to open image '{}': {error}", path.display()))?;
    // Wrap in BufWriter for performance
    let mut writer = BufWriter::new(file);

    let encoder = JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY);
    rc_try!(image.pixels.write_with_encoder(encoder));

    // The buffers would be flushed on drop too, but that swallows errors such as a full disk.
    rc_try!(writer.flush());
    Ok(())
}

fn warn_on_mismatched_extension(path: &Path) {
    match ImageFormat::from_path(path) {
        Ok(ImageFormat::Jpeg) => (),
        Ok(other) => log::warn!(
            "writing JPEG data to '{}' whose extension suggests {other:?}",
            path.display()
        ),
        Err(_) => log::debug!("'{}' has no known image extension", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use image::{DynamicImage, ImageReader, RgbImage, RgbaImage};

    use super::*;

    fn gradient(width: u32, height: u32) -> Image {
        let pixels = RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x * 16) as u8, (y * 16) as u8, 128])
        });
        Image {
            pixels: DynamicImage::ImageRgb8(pixels),
            format: None,
        }
    }

    #[test]
    fn writes_decodable_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        encode(&gradient(16, 8), &path).unwrap();

        let reader = ImageReader::open(&path)
            .unwrap()
            .with_guessed_format()
            .unwrap();
        assert_eq!(reader.format(), Some(ImageFormat::Jpeg));
        let decoded = reader.decode().unwrap();
        assert_eq!(decoded.color(), ColorType::Rgb8);
        assert_eq!((decoded.width(), decoded.height()), (16, 8));
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        std::fs::write(&path, vec![0u8; 1 << 16]).unwrap();

        encode(&gradient(4, 4), &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..3], &[0xFF, 0xD8, 0xFF]);
        assert!(bytes.len() < 1 << 16);
    }

    #[test]
    fn rejects_unnormalized_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        let image = Image {
            pixels: DynamicImage::ImageRgba8(RgbaImage::new(2, 2)),
            format: None,
        };
        let err = encode(&image, &path).unwrap_err();
        assert!(err.to_string().contains("Rgba8"));
        assert!(!path.exists());
    }

    #[test]
    fn unwritable_target_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.jpg");
        let err = encode(&gradient(2, 2), &path).unwrap_err();
        assert!(err.to_string().contains("unable to open image"));
    }
}
