//! CLI argument definitions
//!
//! Top-level options come from [`TopLevelOption`]; anything else in first
//! position is a command name, and everything after it belongs to the
//! command untouched.

use std::{ffi::OsString, str::FromStr};

use ax_core::{workspace::OPTION_PREFIX, Error, TopLevelOption};
use clap::{Arg, ArgAction, Command};
use strum::IntoEnumIterator;

/// What the user asked for, in dispatch priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    NoArgs,
    Option(TopLevelOption),
    Command { name: String, args: Vec<OsString> },
}

fn option_arg(opt: TopLevelOption) -> Arg {
    let arg = Arg::new(opt.flag())
        .action(ArgAction::SetTrue)
        .help(opt.description());
    match (opt.short(), opt.long()) {
        (Some(short), _) => arg.short(short),
        (None, Some(long)) => arg.long(long),
        (None, None) => arg,
    }
}

/// The clap command used to render usage, help and version text.
pub fn build_cli() -> Command {
    Command::new("ax")
        .about("Run the commands of the enclosing .ax workspace")
        .version(env!("CARGO_PKG_VERSION"))
        .override_usage("ax <command> [-?|args...]\n       ax [option]")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .disable_help_subcommand(true)
        .args(TopLevelOption::iter().map(option_arg))
}

/// Classify the raw arguments (program name excluded).
///
/// Only the first argument decides: an exact top-level option, any other
/// option-like word (rejected), or a command name. Everything after it is
/// left untouched.
pub fn parse_invocation(args: &[OsString]) -> Result<Invocation, Error> {
    let Some((first, rest)) = args.split_first() else {
        return Ok(Invocation::NoArgs);
    };

    let Some(word) = first.to_str() else {
        let lossy = first.to_string_lossy().into_owned();
        tracing::debug!(word = %lossy, "first argument is not valid UTF-8");
        return Err(if lossy.starts_with(OPTION_PREFIX) {
            Error::UnrecognizedOption(lossy)
        } else {
            Error::UnknownCommand(lossy)
        });
    };

    if word.starts_with(OPTION_PREFIX) {
        return TopLevelOption::from_str(word)
            .map(Invocation::Option)
            .map_err(|_| Error::UnrecognizedOption(word.to_string()));
    }

    Ok(Invocation::Command {
        name: word.to_string(),
        args: rest.to_vec(),
    })
}
