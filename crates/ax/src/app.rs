use std::{ffi::OsString, process};

use anyhow::{Context, Result};
use ax_core::{exit_code, Settings, ShellLoader, TopLevelOption};

use crate::{
    cli::{format_error, get_exit_code, parse_invocation, setup, Invocation},
    commands::{complete, dispatch, help, init, shell_hook, update, version},
};

/// Execute one `ax` invocation and return its exit code
///
/// `args` excludes the program name. Errors are returned for the caller to
/// report; the usage-on-no-arguments case is not an error but still exits
/// with the invalid-argument code.
pub fn execute(args: &[OsString], settings: &Settings) -> Result<i32> {
    let loader = ShellLoader::new(settings.shell.clone());

    if let Some(request) = setup::parse_early_flags(args) {
        complete::run(&loader, &request);
        return Ok(exit_code::SUCCESS);
    }

    let invocation = parse_invocation(args)?;
    let cwd = std::env::current_dir().context("Failed to get current directory")?;

    match invocation {
        Invocation::NoArgs => {
            help::print_overview(&loader, &cwd);
            Ok(exit_code::INVALID_ARGUMENT)
        }
        Invocation::Command { name, args } => Ok(dispatch::run(&loader, &cwd, &name, &args)?),
        Invocation::Option(opt) => {
            match opt {
                TopLevelOption::Hint => help::print_hint(),
                TopLevelOption::Help => help::print_help(&loader, &cwd),
                TopLevelOption::Version => version::run(),
                TopLevelOption::Init => init::run(&cwd)?,
                TopLevelOption::Setup => shell_hook::setup(settings)?,
                TopLevelOption::Reset => shell_hook::reset(settings)?,
                TopLevelOption::Update => update::run(settings)?,
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

/// Main application runner
///
/// 1. Initialize logging
/// 2. Read settings from the environment
/// 3. Execute the invocation
/// 4. Report errors on one stderr line and exit with the matching code
pub fn run() -> ! {
    if let Err(e) = setup::init_tracing() {
        eprintln!("ax: {e}");
        process::exit(exit_code::FAILURE);
    }

    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    let settings = Settings::from_env();

    let code = match execute(&args, &settings) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("ax: {}", format_error(&err));
            get_exit_code(&err)
        }
    };

    process::exit(code);
}
