//! Extracted video records.

use serde::{Deserialize, Serialize};

/// One video found in the page.
///
/// Records are built once during extraction and never mutated afterwards.
/// Equality is structural; duplicate ids are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    /// Video identifier from the marker attribute. Never empty.
    pub id: String,

    /// Human-readable label, or the configured fallback.
    pub subject: String,

    /// Explicit sort key; 0 when absent or not numeric.
    pub order: i64,
}

impl VideoRecord {
    /// Create a record.
    #[must_use]
    pub fn new(id: impl Into<String>, subject: impl Into<String>, order: i64) -> Self {
        Self {
            id: id.into(),
            subject: subject.into(),
            order,
        }
    }
}
