use std::num::NonZeroUsize;

use clap::Parser;

use parola::settings::{MAX_LENGTH, MAX_PASSWORDS, Settings};

/// Generate random passwords and rate their strength.
///
/// Run without arguments for the interactive screen.
#[derive(Debug, Default, Parser)]
#[command(name = "parola", version, about)]
pub struct Cli {
    /// Password length in characters
    #[arg(
        short,
        long,
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..=MAX_LENGTH as i64)
    )]
    pub length: Option<u32>,

    /// Number of passwords to generate
    #[arg(
        short,
        long,
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..=MAX_PASSWORDS as i64)
    )]
    pub number: Option<u32>,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Keep ambiguous characters (I l 1 O 0 and similar)
    #[arg(long)]
    pub ambiguous: bool,

    /// Print the strength rating after each password
    #[arg(short = 'S', long)]
    pub strength: bool,

    /// Rate passwords read from stdin, one per line
    #[arg(long, conflicts_with_all = ["board", "save", "number"])]
    pub check: bool,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long)]
    pub board: bool,

    /// Start from saved settings instead of the built-in defaults
    #[arg(short, long)]
    pub saved: bool,

    /// Save the resulting options as the new defaults
    #[arg(long)]
    pub save: bool,

    /// Suppress warnings and confirmations
    #[arg(short, long)]
    pub quiet: bool,

    /// Open the interactive screen
    #[arg(short, long)]
    pub interactive: bool,
}

impl Cli {
    /// Apply flags on top of `base`.
    pub fn apply(&self, base: &Settings) -> Settings {
        let mut settings = base.clone();
        let options = &mut settings.options;

        if self.no_lower {
            options.include_lower = false;
        }
        if self.no_upper {
            options.include_upper = false;
        }
        if self.no_digits {
            options.include_digits = false;
        }
        if self.no_symbols {
            options.include_symbols = false;
        }
        if self.ambiguous {
            options.exclude_ambiguous = false;
        }

        if let Some(len) = self.length.and_then(|n| NonZeroUsize::new(n as usize)) {
            settings.pass_length = len;
        }
        if let Some(num) = self.number {
            settings.number_of_passwords = num as usize;
        }

        settings
    }
}
