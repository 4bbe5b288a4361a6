//! Error types for SideTide.

use crate::event::{EventKind, Flavor};

/// Result type alias for SideTide operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the core.
///
/// Assembly and dispatch never fail; these only come from lookups by
/// [`EventKind`] value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The string does not name any delegate hook.
    #[error("Unknown event kind '{0}'")]
    UnknownEventKind(String),

    /// The kind exists, but not in this flavor's delegate interface.
    #[error("Event kind '{kind}' is not part of the {flavor} delegate interface")]
    UnsupportedEvent { kind: EventKind, flavor: Flavor },
}

impl Error {
    /// Create an unsupported-event error.
    pub fn unsupported(kind: EventKind, flavor: Flavor) -> Self {
        Self::UnsupportedEvent { kind, flavor }
    }
}
