//! ax CLI - workspace-scoped command runner
//!
//! Binary name: `ax`
//!
//! - Run a command: `ax build`, `ax deploy prod --dry-run`
//! - Command help: `ax build -?`
//! - Create a workspace: `ax --init`
//! - See all commands: `ax -?`

fn main() {
    ax::app::run();
}
