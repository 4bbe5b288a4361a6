//! Argument types passed to delegate hooks.

use std::ops::Range;

pub use url::Url;

/// A range of characters in a text input.
///
/// Positions are character offsets, not byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextRange {
    /// Offset of the first character in the range.
    pub location: usize,
    /// Number of characters in the range.
    pub length: usize,
}

impl TextRange {
    /// Create a new range.
    pub fn new(location: usize, length: usize) -> Self {
        Self { location, length }
    }

    /// An empty range at `location`, i.e. an insertion point.
    pub fn caret(location: usize) -> Self {
        Self::new(location, 0)
    }

    /// Offset one past the last character, saturating at `usize::MAX`.
    pub fn end(&self) -> usize {
        self.location.saturating_add(self.length)
    }

    /// Whether the range covers no characters.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Whether `offset` falls inside the range.
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.location && offset < self.end()
    }
}

impl From<Range<usize>> for TextRange {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end.saturating_sub(range.start))
    }
}

impl From<TextRange> for Range<usize> {
    fn from(range: TextRange) -> Self {
        range.location..range.end()
    }
}

/// Why a text field stopped editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EndEditingReason {
    /// The edit was committed (focus moved on, or return was pressed).
    #[default]
    Committed,
    /// The edit was cancelled.
    Cancelled,
}

/// The kind of interaction the user started on a link or attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextItemInteraction {
    /// Perform the item's default action (open the link, show the attachment).
    #[default]
    InvokeDefaultAction,
    /// Show the actions available for the item.
    PresentActions,
    /// Show a preview of the item.
    Preview,
}

/// An object embedded in the text of a text view, such as an image.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextAttachment {
    /// Uniform type identifier of the contents, e.g. `"public.png"`.
    pub file_type: Option<String>,
    /// Raw contents of the attachment.
    pub contents: Vec<u8>,
}

impl TextAttachment {
    /// Create an attachment with the given type and contents.
    pub fn new(file_type: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            file_type: Some(file_type.into()),
            contents: contents.into(),
        }
    }
}
