//! Command-line argument parsing.
//!
//! Options are single-dash words in the imagemagick tradition (`-in_place`, not `--in-place`),
//! so the parser is hand-rolled rather than built on an argument parsing library.

use std::{ffi::OsString, path::PathBuf};

use crate::{error::ConversionError, plan::RecodePlan, rc_err};

use strum::{EnumString, IntoStaticStr, VariantArray};

#[derive(EnumString, IntoStaticStr, VariantArray, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum Arg {
    InPlace,
    Verbose,
}

impl Arg {
    pub fn help_text(&self) -> &'static str {
        match self {
            Arg::InPlace => "overwrite the source file instead of writing a separate target",
            Arg::Verbose => "log every step to stderr",
        }
    }
}

/// Turns `argv` (including `argv[0]`) into a plan.
///
/// Positional arguments are `[source [target]]`. With no source the default paths are used;
/// with a source but no target the source is converted in place.
pub fn parse_args(args: Vec<OsString>) -> Result<RecodePlan, ConversionError> {
    let mut positional: Vec<PathBuf> = Vec::new();
    let mut in_place = false;
    let mut verbose = false;

    for raw_arg in args.into_iter().skip(1) {
        // skip argv[0], path to our binary
        if starts_with_sign(&raw_arg) {
            let (_sign, string_arg) = sign_and_arg_name(raw_arg)?;
            let arg = Arg::try_from(string_arg.as_str())
                .map_err(|_| rc_err!("unrecognized option `{}'", string_arg))?;
            match arg {
                Arg::InPlace => in_place = true,
                Arg::Verbose => verbose = true,
            }
        } else {
            positional.push(PathBuf::from(raw_arg));
        }
    }

    let mut positional = positional.into_iter();
    let mut plan = match (positional.next(), positional.next(), positional.next()) {
        (None, _, _) => RecodePlan::default(),
        (Some(source), None, _) => RecodePlan::in_place(source),
        (Some(source), Some(target), None) => RecodePlan {
            source,
            target,
            ..Default::default()
        },
        (Some(_), Some(_), Some(extra)) => {
            return Err(rc_err!(
                "unexpected argument `{}': expected at most a source and a target",
                extra.display()
            ))
        }
    };
    if in_place {
        plan.target = plan.source.clone();
    }
    plan.verbose = verbose;
    Ok(plan)
}

/// Checks if the string starts with a `-` or a `+`.
/// Anything starting with two dashes instead of one is treated as a filename.
fn starts_with_sign(arg: &OsString) -> bool {
    let bytes = arg.as_encoded_bytes();
    matches!(bytes.first(), Some(b'-') | Some(b'+')) && bytes.get(1) != Some(&b'-')
}

/// Splits the string into a sign (- or +) and argument name
fn sign_and_arg_name(raw_arg: OsString) -> Result<(char, String), ConversionError> {
    let mut string = raw_arg
        .into_string()
        .map_err(|s| rc_err!("unrecognized option `{}'", s.to_string_lossy()))?;
    let sign = string.remove(0);
    Ok((sign, string))
}
