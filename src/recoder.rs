//! The conversion itself: one file in, one JPEG out.

use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

use crate::{decode::decode, encode::encode, error::ConversionError};

/// How a conversion that did not fail ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The target now holds the JPEG-encoded source
    Converted { source: PathBuf, target: PathBuf },
    /// The source did not exist, so nothing was read or written
    SourceNotFound { source: PathBuf },
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Converted { source, target } => {
                write!(f, "Converted {} to {}", source.display(), target.display())
            }
            Outcome::SourceNotFound { source } => {
                write!(f, "Source {} not found.", source.display())
            }
        }
    }
}

/// Decodes `source`, converts it to three-channel RGB and writes it to `target` as JPEG.
///
/// `target` may be the same path as `source`, in which case the original is replaced.
/// An existing `target` is overwritten without asking.
/// A missing `source` is not an error: it is reported as [`Outcome::SourceNotFound`]
/// and `target` is left untouched.
pub fn convert(source: &Path, target: &Path) -> Result<Outcome, ConversionError> {
    crate::init::init();

    if !source.exists() {
        log::info!("source '{}' does not exist, skipping", source.display());
        return Ok(Outcome::SourceNotFound {
            source: source.to_path_buf(),
        });
    }

    // the source is fully read and closed here, which is what makes in-place conversion work
    let mut image = decode(source)?;
    image.normalize();
    encode(&image, target)?;

    log::info!(
        "converted '{}' to JPEG at '{}'",
        source.display(),
        target.display()
    );
    Ok(Outcome::Converted {
        source: source.to_path_buf(),
        target: target.to_path_buf(),
    })
}
