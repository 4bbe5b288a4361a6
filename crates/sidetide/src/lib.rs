//! SideTide - declarative delegates for single-line and multi-line text inputs.
//!
//! This is the main umbrella crate. It re-exports the callback registry from
//! `sidetide-core` and adds the side-table that attaches assembled delegates
//! to widgets.
//!
//! # Example
//!
//! ```
//! use sidetide::prelude::*;
//!
//! struct PinField;
//!
//! let delegate = text_field_delegate![
//!     ShouldChange::new(|_: &PinField, range: TextRange, text: &str| {
//!         range.location + text.chars().count() <= 4 && text.chars().all(|c| c.is_ascii_digit())
//!     }),
//!     ShouldReturn::new(|_: &PinField| false),
//! ];
//!
//! assert!(delegate.should_change_characters(&PinField, TextRange::caret(0), "1234"));
//! assert!(!delegate.should_change_characters(&PinField, TextRange::caret(3), "56"));
//! assert!(!delegate.should_return(&PinField));
//! assert!(delegate.should_clear(&PinField));
//! ```

pub use sidetide_core::*;

pub mod attach;
mod error;
pub mod prelude;

pub use attach::{DelegateTable, SharedDelegateTable, WidgetId};
pub use error::{AttachError, AttachResult};
