//! Error types for attaching delegates to widgets.

use crate::attach::WidgetId;

/// Result type alias for attachment operations.
pub type AttachResult<T> = std::result::Result<T, AttachError>;

/// Errors that can occur when attaching delegates to widgets.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttachError {
    /// The widget was never registered, or has been unregistered.
    #[error("Widget {0:?} is not registered")]
    UnknownWidget(WidgetId),
}
