use image::{DynamicImage, ImageBuffer, Pixel, Primitive};
use std::fmt::Debug;

/// Converts the image to `Rgb8`, or returns `None` if it already is `Rgb8`.
///
/// Higher bit depths are scaled down to 8 bits, grayscale is replicated across the three channels
/// and the alpha channel, if any, is discarded as-is. Discarding a channel that actually carries
/// transparency is logged, because the hidden pixels will show up in the output.
pub(crate) fn to_rgb8(pixels: &DynamicImage) -> Option<DynamicImage> {
    if let DynamicImage::ImageRgb8(_) = pixels {
        return None;
    }
    if pixels.color().has_alpha() && !is_opaque(pixels) {
        log::warn!(
            "discarding alpha channel of a {}x{} image with transparent pixels",
            pixels.width(),
            pixels.height()
        );
    }
    Some(DynamicImage::ImageRgb8(pixels.to_rgb8()))
}

/// Scans the image to determine whether every pixel is fully opaque.
pub(crate) fn is_opaque(image: &DynamicImage) -> bool {
    match image {
        DynamicImage::ImageLuma8(pixels) => is_opaque_inner(pixels),
        DynamicImage::ImageLumaA8(pixels) => is_opaque_inner(pixels),
        DynamicImage::ImageRgb8(pixels) => is_opaque_inner(pixels),
        DynamicImage::ImageRgba8(pixels) => is_opaque_inner(pixels),
        DynamicImage::ImageLuma16(pixels) => is_opaque_inner(pixels),
        DynamicImage::ImageLumaA16(pixels) => is_opaque_inner(pixels),
        DynamicImage::ImageRgb16(pixels) => is_opaque_inner(pixels),
        DynamicImage::ImageRgba16(pixels) => is_opaque_inner(pixels),
        DynamicImage::ImageRgb32F(pixels) => is_opaque_inner(pixels),
        DynamicImage::ImageRgba32F(pixels) => is_opaque_inner(pixels),
        // DynamicImage is non-exhaustive
        other => is_opaque_inner(&other.to_rgba32f()),
    }
}

fn is_opaque_inner<S, P, Container>(input: &ImageBuffer<P, Container>) -> bool
where
    S: Primitive + Debug,
    P: Pixel<Subpixel = S>,
    Container: std::ops::Deref<Target = [P::Subpixel]>,
{
    if !P::HAS_ALPHA {
        return true;
    }
    let mut result = true; // opaque until proven otherwise
    for row in input.rows() {
        for pixel in row {
            result &= has_max_alpha(*pixel);
        }
        // checked once per row so that the inner loop can be autovectorized
        if !result {
            return result;
        }
    }
    result
}

#[inline]
fn has_max_alpha<P: Pixel>(pixel: P) -> bool {
    // Alpha is the last channel in every DynamicImage variant
    match pixel.channels().last() {
        Some(alpha) => *alpha == P::Subpixel::DEFAULT_MAX_VALUE,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use image::{ColorType, GrayImage, Luma, Rgba, RgbaImage};
    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;

    use super::*;

    /// A small image of arbitrary pixel format and content
    #[derive(Debug, Clone)]
    struct SampleImage(DynamicImage);

    impl Arbitrary for SampleImage {
        fn arbitrary(g: &mut Gen) -> Self {
            let width = u32::arbitrary(g) % 16 + 1;
            let height = u32::arbitrary(g) % 16 + 1;
            let rgba = RgbaImage::from_fn(width, height, |_, _| {
                Rgba([
                    u8::arbitrary(g),
                    u8::arbitrary(g),
                    u8::arbitrary(g),
                    u8::arbitrary(g),
                ])
            });
            let base = DynamicImage::ImageRgba8(rgba);
            let pixels = match u8::arbitrary(g) % 10 {
                0 => DynamicImage::ImageLuma8(base.to_luma8()),
                1 => DynamicImage::ImageLumaA8(base.to_luma_alpha8()),
                2 => DynamicImage::ImageRgb8(base.to_rgb8()),
                3 => base,
                4 => DynamicImage::ImageLuma16(base.to_luma16()),
                5 => DynamicImage::ImageLumaA16(base.to_luma_alpha16()),
                6 => DynamicImage::ImageRgb16(base.to_rgb16()),
                7 => DynamicImage::ImageRgba16(base.to_rgba16()),
                8 => DynamicImage::ImageRgb32F(base.to_rgb32f()),
                _ => DynamicImage::ImageRgba32F(base.to_rgba32f()),
            };
            SampleImage(pixels)
        }
    }

    #[quickcheck]
    fn any_format_normalizes_to_rgb8(sample: SampleImage) -> bool {
        let original = sample.0;
        let converted = to_rgb8(&original).unwrap_or_else(|| original.clone());
        converted.color() == ColorType::Rgb8
            && converted.width() == original.width()
            && converted.height() == original.height()
    }

    #[test]
    fn rgb8_is_left_alone() {
        let img = DynamicImage::ImageRgb8(image::RgbImage::new(8, 8));
        assert!(to_rgb8(&img).is_none());
    }

    #[test]
    fn transparent_pixels_are_dropped_not_composited() {
        let mut img = RgbaImage::from_pixel(2, 1, Rgba([200, 100, 50, 255]));
        img.put_pixel(1, 0, Rgba([10, 20, 30, 0]));
        let img = DynamicImage::ImageRgba8(img);
        assert!(!is_opaque(&img));

        let converted = to_rgb8(&img).unwrap().to_rgb8();
        assert_eq!(converted.get_pixel(0, 0).0, [200, 100, 50]);
        assert_eq!(converted.get_pixel(1, 0).0, [10, 20, 30]);
    }

    #[test]
    fn opacity_detection() {
        let mut img = GrayImage::new(10, 10);
        image::imageops::vertical_gradient(&mut img, &Luma([0]), &Luma([255]));
        let luma8 = DynamicImage::ImageLuma8(img);
        assert!(is_opaque(&luma8));

        let opaque_rgba16 = DynamicImage::ImageRgba16(luma8.to_rgba16());
        assert!(is_opaque(&opaque_rgba16));

        let mut translucent = opaque_rgba16.to_rgba16();
        translucent.put_pixel(9, 9, Rgba([0, 0, 0, 1]));
        assert!(!is_opaque(&DynamicImage::ImageRgba16(translucent)));
    }
}
