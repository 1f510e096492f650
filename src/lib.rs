//! Re-encodes a single image file as a three-channel JPEG.
//!
//! The entry point is [`recoder::convert`]; the `recode` binary wraps it with argument parsing
//! and prints the outcome.

#![forbid(unsafe_code)]

#[cfg(feature = "hardened_malloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod args;
pub mod decode;
pub mod encode;
pub mod error;
pub mod help;
pub mod image;
mod init;
mod pixel_format;
pub mod plan;
pub mod recoder;
