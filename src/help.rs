use std::ffi::{OsStr, OsString};

use current_platform::CURRENT_PLATFORM;
use strum::VariantArray;

use crate::{
    args::Arg,
    plan::{DEFAULT_SOURCE, DEFAULT_TARGET},
};

pub fn maybe_print_help_and_exit(bin_name: &str, args: &[OsString]) {
    let wants_help = args
        .iter()
        .skip(1)
        .any(|arg| arg.as_os_str() == OsStr::new("--help") || arg.as_os_str() == OsStr::new("-help"));
    if wants_help {
        print_help(bin_name);
        std::process::exit(0);
    }
}

fn print_help(bin_name: &str) {
    println!("Version: {}", version_string());
    println!("License: {}", env!("CARGO_PKG_LICENSE"));
    println!("Usage: {bin_name} [options ...] [source [target]]");
    println!();
    println!("Re-encodes the source image as an RGB JPEG at the target path.");
    println!("  source defaults to {DEFAULT_SOURCE}");
    println!("  target defaults to {DEFAULT_TARGET} if no source is given, otherwise to the source");
    println!();
    println!("Options:");
    for arg in Arg::VARIANTS {
        let name: &'static str = arg.into();
        println!("  -{name:19} {}", arg.help_text());
    }
    println!("  -{:19} {}", "help", "print this message");
}

fn version_string() -> String {
    let cpu = CURRENT_PLATFORM.split('-').next().unwrap_or("unknown");
    let version = env!("CARGO_PKG_VERSION");
    let repo = env!("CARGO_PKG_REPOSITORY");

    format!("recoder {version} {cpu} {repo}")
}
