//! Password generation and strength rating.

pub mod charset;
mod generate;
pub mod strength;

pub use charset::{Charset, GenerationOptions};
pub use generate::{DEFAULT_LENGTH, EmptyCharsetError, Password, generate, generate_batch, generate_with};
pub use strength::StrengthLabel;
