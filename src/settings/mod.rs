//! Saved generation defaults.

mod file;

use std::num::NonZeroUsize;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::pass::{DEFAULT_LENGTH, GenerationOptions};

pub use file::{log_path, path};

/// Longest password the CLI and settings file accept.
pub const MAX_LENGTH: usize = 4096;

/// Most passwords one invocation may print.
pub const MAX_PASSWORDS: usize = 100_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub options: GenerationOptions,
    pub pass_length: NonZeroUsize,
    pub number_of_passwords: usize,
}

impl Settings {
    /// Load from the default location, falling back to defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        file::load(path)
    }

    /// Length and count are inside `MAX_LENGTH` / `MAX_PASSWORDS`.
    pub fn within_limits(&self) -> bool {
        self.pass_length.get() <= MAX_LENGTH && self.number_of_passwords <= MAX_PASSWORDS
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        file::save(self, path)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            options: GenerationOptions::default(),
            pass_length: DEFAULT_LENGTH,
            number_of_passwords: 1,
        }
    }
}
