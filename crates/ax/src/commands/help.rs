//! Usage, hint and help text

use std::path::Path;

use ax_core::{registry::describe_commands, CommandSummary, Loader, Workspace};
use itertools::Itertools;

use crate::cli::build_cli;

/// One line per command, names padded to a common width.
fn commands_section(commands: &[CommandSummary]) -> String {
    let width = commands.iter().map(|c| c.name.len()).max().unwrap_or(0);
    commands
        .iter()
        .map(|c| format!("  {:width$}  {}", c.name, c.description))
        .join("\n")
}

/// Usage, the commands of the workspace around `cwd`, and the options.
pub fn overview<L: Loader>(loader: &L, cwd: &Path) -> String {
    let commands = match Workspace::discover(cwd) {
        Some(ws) => {
            let summaries = describe_commands(loader, &ws);
            if summaries.is_empty() {
                format!("  (no commands in {})", ws.marker().display())
            } else {
                commands_section(&summaries)
            }
        }
        None => "  (not inside a workspace; run 'ax --init' to create one)".to_string(),
    };

    let rendered = build_cli()
        .after_help(format!("Commands:\n{commands}"))
        .render_help()
        .to_string();
    rendered.trim_end().to_string()
}

/// A two-line reminder of how to get further.
pub fn hint() -> String {
    let usage = build_cli().render_usage().to_string();
    format!(
        "{}\nRun 'ax -?' for the full help, or 'ax <command> -?' for a command's help.",
        usage.trim_end()
    )
}

pub fn print_overview<L: Loader>(loader: &L, cwd: &Path) {
    eprintln!("{}", overview(loader, cwd));
}

pub fn print_help<L: Loader>(loader: &L, cwd: &Path) {
    println!("{}", overview(loader, cwd));
}

pub fn print_hint() {
    println!("{}", hint());
}
