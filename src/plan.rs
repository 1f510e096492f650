use std::path::PathBuf;

use crate::{
    error::ConversionError,
    recoder::{convert, Outcome},
};

/// Source used when none is given on the command line
pub const DEFAULT_SOURCE: &str = "assets/images/quartermaster_v3.png";
/// Target used when neither a source nor a target is given on the command line
pub const DEFAULT_TARGET: &str = "assets/images/QuarterMaster_v3.jpg";

/// What a single run of the binary does
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecodePlan {
    pub source: PathBuf,
    pub target: PathBuf,
    /// Log at debug level instead of only warnings
    pub verbose: bool,
}

impl Default for RecodePlan {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            target: PathBuf::from(DEFAULT_TARGET),
            verbose: false,
        }
    }
}

impl RecodePlan {
    /// Re-encodes `path` over itself
    pub fn in_place(path: PathBuf) -> Self {
        Self {
            target: path.clone(),
            source: path,
            ..Default::default()
        }
    }

    pub fn is_in_place(&self) -> bool {
        self.source == self.target
    }

    pub fn execute(&self) -> Result<Outcome, ConversionError> {
        log::debug!(
            "recoding '{}' -> '{}'{}",
            self.source.display(),
            self.target.display(),
            if self.is_in_place() { " (in place)" } else { "" }
        );
        convert(&self.source, &self.target)
    }
}
