//! Copy-to-clipboard.

use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::debug;
use zeroize::Zeroize;

use crate::{Error, Result};

/// System clipboard handle.
pub struct Clipboard(ClipboardContext);

impl Clipboard {
    pub fn new() -> Result<Self> {
        ClipboardContext::new()
            .map(Clipboard)
            .map_err(|e| Error::Clipboard(e.to_string()))
    }

    /// Put `text` on the clipboard. The read-back copy is wiped.
    pub fn copy(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Err(Error::NothingToCopy);
        }

        self.0
            .set_contents(text.to_owned())
            .map_err(|e| Error::Clipboard(e.to_string()))?;
        if let Ok(mut retrieved) = self.0.get_contents() {
            retrieved.zeroize();
        }
        debug!(chars = text.chars().count(), "copied to clipboard");
        Ok(())
    }
}
