//! System clipboard access behind a trait, so the workflow can be driven
//! with canned clipboard content in tests.

use thiserror::Error;
use writing::text::EmptyClipboard;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Clipboard is empty. Copy some text first!")]
    Empty,

    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
}

impl From<EmptyClipboard> for ClipboardError {
    fn from(_: EmptyClipboard) -> Self {
        ClipboardError::Empty
    }
}

pub trait ClipboardSource {
    fn read_text(&mut self) -> Result<String, ClipboardError>;
}

pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let inner =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

        Ok(Self { inner })
    }
}

impl ClipboardSource for SystemClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        self.inner.get_text().map_err(|e| match e {
            arboard::Error::ContentNotAvailable => ClipboardError::Empty,
            other => ClipboardError::Unavailable(other.to_string()),
        })
    }
}
