//! Messages printed around CLI output.
//!
//! Everything except errors goes through a [`Prompter`], which knows whether
//! `--quiet` was given. Passwords themselves never pass through here.

use std::io::{IsTerminal, Write};

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print an error to stderr (red). Always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Prompter {
    quiet: bool,
}

impl Prompter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Yellow warning text, or `None` in quiet mode.
    fn warning(&self, msg: &str) -> Option<String> {
        (!self.quiet).then(|| format!("{YELLOW}{msg}{RESET}"))
    }

    pub fn warn(&self, msg: &str) {
        if let Some(line) = self.warning(msg) {
            eprintln!("{line}");
        }
    }

    fn copied_message(count: usize) -> String {
        match count {
            1 => "*** -PASSWORD COPIED TO CLIPBOARD- ***".to_string(),
            n => format!("*** -{n} PASSWORDS COPIED TO CLIPBOARD- ***"),
        }
    }

    pub fn clipboard_copied(&self, count: usize) {
        if !self.quiet {
            println!("{}", Self::copied_message(count));
        }
    }

    pub fn settings_saved(&self, path: &str) {
        if !self.quiet {
            eprintln!("Settings saved \u{2192} {path}");
        }
    }

    /// Ask whether to print instead when the clipboard is unavailable.
    ///
    /// Answers yes without asking in quiet mode or when stdin is not a
    /// terminal, so scripted runs still get their output.
    pub fn clipboard_fallback(&self, err: &str) -> bool {
        if self.quiet || !std::io::stdin().is_terminal() {
            return true;
        }

        eprintln!("Clipboard unavailable: {err}");
        eprint!("Print to terminal instead? [Y/n]: ");
        let _ = std::io::stderr().flush();

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err() {
            return true;
        }
        if accepts(&input) {
            eprintln!();
            return true;
        }

        eprintln!("\nAborted.");
        false
    }
}

/// Empty input counts as yes.
fn accepts(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "" | "y" | "yes")
}
