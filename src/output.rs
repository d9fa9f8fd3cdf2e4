//! Terminal status output for the tmplgen CLI.
//!
//! Status lines go to stderr with a right-aligned verb column, coloured when
//! stderr is a terminal. Stdout carries generated text only (`--stdout`).

use std::io::{self, IsTerminal, Write};
use std::path::Path;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";

/// Width of the verb column.
const VERB_WIDTH: usize = 12;

pub struct Printer {
    color: bool,
    quiet: bool,
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
            quiet: false,
        }
    }

    /// A printer that never emits escape codes.
    pub fn plain() -> Self {
        Self {
            color: false,
            quiet: false,
        }
    }

    /// A printer that prints nothing (`--quiet`).
    pub fn quiet() -> Self {
        Self {
            color: false,
            quiet: true,
        }
    }

    /// e.g. "   Generated vec.rs (2 instantiations)"
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(CYAN, verb, message);
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        if let Some(line) = self.format_line(color, verb, message) {
            let _ = writeln!(io::stderr().lock(), "{}", line);
        }
    }

    fn format_line(&self, color: &str, verb: &str, message: &str) -> Option<String> {
        if self.quiet {
            None
        } else if self.color {
            Some(format!("{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}"))
        } else {
            Some(format!("{verb:>VERB_WIDTH$} {message}"))
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// `plural(1, "instantiation", "instantiations")` → "1 instantiation".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    let word = if n == 1 { singular } else { pluralized };
    format!("{} {}", n, word)
}

/// Path relative to the working directory when it is underneath it.
pub fn display_path(path: &Path) -> String {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf))
        .map(|relative| {
            if relative.as_os_str().is_empty() {
                ".".to_string()
            } else {
                relative.display().to_string()
            }
        })
        .unwrap_or_else(|| path.display().to_string())
}
