//! CLI context - bundles settings, flags, and clipboard state.

use std::io::{BufRead, Write};

use tracing::debug;
use zeroize::Zeroize;

use parola::clipboard::Clipboard;
use parola::pass::{self, charset, strength};
use parola::rng::SecureRandom;
use parola::settings::{self, Settings};
use parola::{Error, Result};

use super::Cli;
use super::prompts::Prompter;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<Clipboard>,
    pub flags: Cli,
    pub prompts: Prompter,
}

impl Context {
    pub fn new(flags: Cli) -> Result<Self> {
        let prompts = Prompter::new(flags.quiet);
        let base = base_settings(flags.saved, &prompts, Settings::load);
        let settings = flags.apply(&base);

        Ok(Self {
            settings,
            clipboard: None,
            flags,
            prompts,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        if self.flags.check {
            return self.check_stdin();
        }

        if self.flags.save {
            self.save_settings()?;
        }
        self.open_clipboard()?;
        self.generate_output()
    }

    fn save_settings(&self) -> Result<()> {
        self.settings.save()?;
        self.prompts.settings_saved(&settings::path().display().to_string());
        Ok(())
    }

    fn open_clipboard(&mut self) -> Result<()> {
        if !self.flags.board {
            return Ok(());
        }
        match Clipboard::new() {
            Ok(c) => self.clipboard = Some(c),
            Err(e) => {
                if !self.prompts.clipboard_fallback(&e.to_string()) {
                    return Err(e);
                }
            }
        }
        Ok(())
    }

    /// Rate each line of stdin.
    fn check_stdin(&self) -> Result<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        for line in stdin.lock().lines() {
            let mut line = line?;
            let label = strength::estimate(&line);
            line.zeroize();
            writeln!(out, "{label}")?;
        }
        Ok(())
    }

    /// Generate passwords and send them to the clipboard or stdout.
    pub fn generate_output(&mut self) -> Result<()> {
        let charset = charset::build(&self.settings.options);
        let count = self.settings.number_of_passwords.max(1);
        let prompts = self.prompts;
        let passwords = pass::generate_batch(
            self.settings.pass_length,
            &charset,
            count,
            &mut SecureRandom::new(),
        )?;

        let mut buf = String::new();
        for password in &passwords {
            buf.push_str(password.as_str());
            if self.flags.strength {
                buf.push('\t');
                buf.push_str(strength::estimate(password.as_str()).as_str());
            }
            buf.push('\n');
        }

        let result = match self.clipboard.as_mut() {
            Some(clipboard) => {
                let text = buf.trim_end_matches('\n');
                clipboard.copy(text).map(|_| prompts.clipboard_copied(count))
            }
            None => {
                let stdout = std::io::stdout();
                let mut out = stdout.lock();
                out.write_all(buf.as_bytes())
                    .and_then(|_| out.flush())
                    .map_err(Error::from)
            }
        };
        buf.zeroize();

        debug!(
            count,
            to_clipboard = self.clipboard.is_some(),
            quiet = self.prompts.is_quiet(),
            "output done"
        );
        result
    }
}

/// Saved settings with `-s`, otherwise the built-in defaults.
fn base_settings(
    saved: bool,
    prompts: &Prompter,
    load: impl FnOnce() -> Result<Settings>,
) -> Settings {
    if !saved {
        return Settings::default();
    }
    load().unwrap_or_else(|e| {
        prompts.warn(&format!("Failed to load settings: {e}"));
        Settings::default()
    })
}
