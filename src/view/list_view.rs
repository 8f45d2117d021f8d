//! Replace-all list view.
//!
//! [`ListView`] mirrors the most recently received valid payload. Every
//! application clears the previous entries first; there is no diffing and
//! no retained identity between updates.

use std::fmt;

use crate::domain::ApiPayload;

/// List container bound to a fixed target identifier.
///
/// Constructed once at startup, before the first `api_data` event can
/// arrive, and only ever mutated by the consumer loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    target: String,
    entries: Vec<String>,
}

impl ListView {
    /// Creates an empty view bound to `target`.
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            entries: Vec::new(),
        }
    }

    /// Replaces the entire contents of the view with `payload`.
    ///
    /// Items are appended in arrival order, one entry per item, with no
    /// length limit. An unexpected shape leaves a single entry naming the
    /// received type.
    pub fn apply(&mut self, payload: &ApiPayload) {
        self.entries.clear();
        match payload {
            ApiPayload::Items(items) => self.entries.extend(items.iter().cloned()),
            ApiPayload::UnexpectedShape { type_name } => {
                self.entries
                    .push(format!("Error: Expected an array, but received {type_name}"));
            }
        }
    }

    /// Current entries, in display order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries currently displayed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the view shows no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Identifier of the target container this view mirrors into.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl fmt::Display for ListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.target)?;
        for entry in &self.entries {
            writeln!(f, "  - {entry}")?;
        }
        Ok(())
    }
}
