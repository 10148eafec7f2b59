//! Display state for the interactive screen.
//!
//! The core is stateless; whatever is on screen lives here and is replaced
//! wholesale on every generate or clear.

use std::num::NonZeroUsize;

use crate::pass::{self, EmptyCharsetError, GenerationOptions, Password, StrengthLabel, charset, strength};
use crate::rng::RandomSource;
use crate::settings::Settings;

/// A toggle on the generator screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Lower,
    Upper,
    Digits,
    Symbols,
    ExcludeAmbiguous,
}

impl Toggle {
    pub const ALL: [Toggle; 5] = [
        Toggle::Lower,
        Toggle::Upper,
        Toggle::Digits,
        Toggle::Symbols,
        Toggle::ExcludeAmbiguous,
    ];

    pub fn key(&self) -> char {
        match self {
            Toggle::Lower => 'l',
            Toggle::Upper => 'u',
            Toggle::Digits => 'd',
            Toggle::Symbols => 's',
            Toggle::ExcludeAmbiguous => 'a',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Toggle::Lower => "Lowercase",
            Toggle::Upper => "Uppercase",
            Toggle::Digits => "Digits",
            Toggle::Symbols => "Symbols",
            Toggle::ExcludeAmbiguous => "Exclude ambiguous (Il1O0)",
        }
    }

    pub fn from_key(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }

    fn flag(self, options: &mut GenerationOptions) -> &mut bool {
        match self {
            Toggle::Lower => &mut options.include_lower,
            Toggle::Upper => &mut options.include_upper,
            Toggle::Digits => &mut options.include_digits,
            Toggle::Symbols => &mut options.include_symbols,
            Toggle::ExcludeAmbiguous => &mut options.exclude_ambiguous,
        }
    }
}

/// What is currently shown.
pub struct Shown {
    pub password: Password,
    pub strength: StrengthLabel,
    pub entropy_bits: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Idle,
    Info(String),
    Error(String),
}

pub struct View {
    pub options: GenerationOptions,
    pub length: NonZeroUsize,
    shown: Option<Shown>,
    pub status: Status,
}

impl View {
    pub fn new(settings: &Settings) -> Self {
        Self {
            options: settings.options,
            length: settings.pass_length,
            shown: None,
            status: Status::Idle,
        }
    }

    pub fn shown(&self) -> Option<&Shown> {
        self.shown.as_ref()
    }

    pub fn is_enabled(&self, toggle: Toggle) -> bool {
        let mut options = self.options;
        *toggle.flag(&mut options)
    }

    pub fn toggle(&mut self, toggle: Toggle) {
        let flag = toggle.flag(&mut self.options);
        *flag = !*flag;
    }

    /// Build, sample, score. On an empty charset the current display is kept.
    pub fn generate<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Result<(), EmptyCharsetError> {
        let charset = charset::build(&self.options);
        match pass::generate_with(self.length, &charset, rng) {
            Ok(password) => {
                let strength = strength::estimate(password.as_str());
                let entropy_bits = strength::entropy_bits(self.length.get(), charset.len());
                self.shown = Some(Shown {
                    password,
                    strength,
                    entropy_bits,
                });
                self.status = Status::Idle;
                Ok(())
            }
            Err(e) => {
                self.status = Status::Error("Character set is empty, adjust the options.".into());
                Err(e)
            }
        }
    }

    pub fn clear(&mut self) {
        self.shown = None;
        self.status = Status::Idle;
    }

    /// Text for the copy action, if anything is displayed.
    pub fn copy_text(&self) -> Option<&str> {
        self.shown.as_ref().map(|s| s.password.as_str())
    }

    pub fn strength_text(&self) -> String {
        match &self.shown {
            Some(s) => format!("Strength: {}", s.strength),
            None => "Strength: -".to_string(),
        }
    }

    /// Settings carrying the current toggles and length.
    pub fn to_settings(&self, base: &Settings) -> Settings {
        Settings {
            options: self.options,
            pass_length: self.length,
            ..base.clone()
        }
    }
}
