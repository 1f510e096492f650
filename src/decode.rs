use std::path::Path;

use image::ImageReader;

use crate::{error::ConversionError, image::Image, rc_err, rc_try};

/// Decodes the file at `path`. The format is guessed from the file contents first,
/// falling back to the extension, so a JPEG named `.png` still decodes.
///
/// The file handle is released before this function returns.
pub fn decode(path: &Path) -> Result<Image, ConversionError> {
    let reader = ImageReader::open(path)
        .map_err(|error| rc_err!("unable to open image '{}': {error}", path.display()))?;
    let reader = rc_try!(reader.with_guessed_format());
    let format = reader.format();
    let pixels = reader
        .decode()
        .map_err(|error| rc_err!("unable to decode image '{}': {error}", path.display()))?;
    log::debug!(
        "decoded '{}': {}x{} {:?} ({:?})",
        path.display(),
        pixels.width(),
        pixels.height(),
        pixels.color(),
        format
    );
    Ok(Image { pixels, format })
}
