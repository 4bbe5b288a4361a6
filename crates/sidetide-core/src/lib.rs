//! Core systems for SideTide.
//!
//! This crate provides the callback registry behind SideTide's declarative
//! text-input delegates:
//!
//! - **Event kinds**: The fixed hooks of the text-field and text-view interfaces
//! - **Callback wrappers**: One typed wrapper per hook (`ShouldReturn`, `DidChange`, ...)
//! - **Closure stores**: One optional slot per hook of a flavor
//! - **Assembler**: Folds an ordered list of wrappers into a store, last write wins
//! - **Delegates**: Dispatch each hook to its callback, or to the hook's default
//!
//! # Example
//!
//! ```
//! use sidetide_core::{
//!     DidChangeSelection, ShouldChange, TextViewDelegate, TextRange, ViewDelegate,
//!     text_view_delegate,
//! };
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! struct Notes;
//!
//! let moves = Arc::new(AtomicUsize::new(0));
//! let counter = moves.clone();
//!
//! let delegate = text_view_delegate![
//!     ShouldChange::new(|_: &Notes, range: TextRange, _| range.end() <= 140),
//!     DidChangeSelection::new(move |_: &Notes| {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!     }),
//! ];
//!
//! assert!(!delegate.should_change_text(&Notes, TextRange::new(139, 2), "!"));
//! delegate.did_change_selection(&Notes);
//! assert_eq!(moves.load(Ordering::SeqCst), 1);
//!
//! // Hooks nobody declared fall back to their defaults.
//! assert!(delegate.should_begin_editing(&Notes));
//! delegate.did_change(&Notes);
//! ```

mod assembler;
pub mod callback;
mod config;
pub mod delegate;
mod error;
mod event;
pub mod logging;
pub mod store;
mod types;

pub use assembler::{assemble, DelegateAssembler, FieldAssembler, ViewAssembler};
pub use callback::{
    DidBeginEditing, DidChange, DidChangeSelection, DidEndEditing, DidEndEditingWithReason,
    FieldEvent, ShouldBeginEditing, ShouldChange, ShouldClear, ShouldEndEditing,
    ShouldInteractWithAttachment, ShouldInteractWithUrl, ShouldReturn, ViewEvent,
};
pub use config::{DelegateConfig, QueryDefault};
pub use delegate::{FieldDelegate, TextFieldDelegate, TextViewDelegate, ViewDelegate};
pub use error::{Error, Result};
pub use event::{EventKind, EventStyle, Flavor};
pub use store::{ClosureStore, FieldClosureStore, ViewClosureStore};
pub use types::{EndEditingReason, TextAttachment, TextItemInteraction, TextRange, Url};

// Used by the exported logging macros.
#[doc(hidden)]
pub use tracing;
