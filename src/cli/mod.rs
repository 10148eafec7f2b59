mod context;
mod flags;
pub mod prompts;

pub use context::Context;
pub use flags::Cli;

use parola::Result;

/// Run non-interactive generation.
pub fn run(flags: Cli) -> Result<()> {
    Context::new(flags)?.run()
}
