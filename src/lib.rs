//! Random password generation with a coarse strength rating.
//!
//! The core is three pure steps: [`pass::charset::build`] turns a set of
//! toggles into a character pool, [`pass::generate`] samples a password from
//! it with a cryptographically secure source, and [`pass::strength::estimate`]
//! rates the result. Everything else in the crate (settings, display state,
//! clipboard) is plumbing for the terminal front end.

pub mod clipboard;
mod error;
pub mod pass;
pub mod rng;
pub mod settings;
pub mod view;

pub use error::Error;

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
