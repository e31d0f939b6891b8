//! Error formatting utilities for CLI output

/// Format an error for user display on a single line
///
/// Includes the source message when it adds something the top-level
/// message does not already say.
#[must_use]
pub fn format_error(err: &anyhow::Error) -> String {
    let msg = err.to_string();

    match err.source().map(ToString::to_string) {
        Some(source) if !source.is_empty() && !msg.contains(&source) => {
            format!("{msg}: {source}")
        }
        _ => msg,
    }
}

/// Extract the exit code for an error
///
/// # Exit Codes
/// * 1 - Generic failure
/// * 2 - Not found (no workspace, missing init file, missing executable)
/// * 17 - Already exists (init, setup)
/// * 22 - Invalid argument (unknown option or command)
#[must_use]
pub fn get_exit_code(err: &anyhow::Error) -> i32 {
    if let Some(core_err) = err.downcast_ref::<ax_core::Error>() {
        return core_err.exit_code();
    }

    if let Some(io_err) = err.downcast_ref::<std::io::Error>() {
        if io_err.kind() == std::io::ErrorKind::NotFound {
            return ax_core::exit_code::NOT_FOUND;
        }
    }

    ax_core::exit_code::FAILURE
}
