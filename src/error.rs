use std::fmt::{Debug, Display};

/// The single failure kind of a conversion: decoding, pixel format conversion,
/// encoding and writing all report through it with a human-readable message.
pub struct ConversionError(pub String);

impl Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Debug for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ConversionError").field(&self.0).finish()
    }
}

impl std::error::Error for ConversionError {}

#[macro_export]
macro_rules! rc_err {
    ($($arg:tt)*) => {
        $crate::error::ConversionError(format!(
            "recoder: {} @ {}:{}:{}",
            format_args!($($arg)*),
            file!(),
            line!(),
            column!()
        ))
    };
}

#[macro_export]
macro_rules! rc_try {
    ($expr:expr $(,)?) => {
        match $expr {
            std::result::Result::Ok(val) => val,
            std::result::Result::Err(err) => {
                return std::result::Result::Err($crate::rc_err!("{}", err));
            }
        }
    };
}
