//! Version output for `-@`

use crate::cli::build_cli;

pub fn version_line() -> String {
    build_cli().render_version().trim_end().to_string()
}

pub fn run() {
    println!("{}", version_line());
}
