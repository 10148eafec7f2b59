use thiserror::Error;

use crate::pass::EmptyCharsetError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    EmptyCharset(#[from] EmptyCharsetError),

    #[error("no password to copy")]
    NothingToCopy,

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
