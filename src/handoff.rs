//! One-shot handoff of captured page markup.
//!
//! A capture step (the bookmarklet, a file, standard input) writes the page
//! once; the session initializer reads it once. Taking the value consumes the
//! handoff, so it cannot be processed twice.

/// Captured HTML waiting to be picked up by the session initializer.
#[derive(Debug, Default)]
pub struct Handoff {
    captured: Option<String>,
}

impl Handoff {
    /// A handoff with nothing captured.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A handoff carrying captured page markup.
    #[must_use]
    pub fn captured(html: impl Into<String>) -> Self {
        Self {
            captured: Some(html.into()),
        }
    }

    /// Consume the handoff, returning the captured markup if it is not blank.
    #[must_use]
    pub fn take(self) -> Option<String> {
        self.captured.filter(|html| !html.trim().is_empty())
    }
}
