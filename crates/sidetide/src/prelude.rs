//! Prelude module for SideTide.
//!
//! ```ignore
//! use sidetide::prelude::*;
//! ```
//!
//! This provides access to:
//! - Every callback wrapper (`ShouldReturn`, `DidChange`, ...)
//! - The assembly macros and assemblers
//! - The delegate interfaces and assembled delegates
//! - Hook argument types (`TextRange`, `EndEditingReason`, ...)
//! - The widget attachment side-table

// ============================================================================
// Callback Wrappers
// ============================================================================

pub use crate::{
    DidBeginEditing, DidChange, DidChangeSelection, DidEndEditing, DidEndEditingWithReason,
    ShouldBeginEditing, ShouldChange, ShouldClear, ShouldEndEditing, ShouldInteractWithAttachment,
    ShouldInteractWithUrl, ShouldReturn,
};

// ============================================================================
// Assembly
// ============================================================================

pub use crate::{text_field_delegate, text_view_delegate};
pub use crate::{DelegateConfig, FieldAssembler, QueryDefault, ViewAssembler};

// ============================================================================
// Delegates
// ============================================================================

pub use crate::{FieldDelegate, TextFieldDelegate, TextViewDelegate, ViewDelegate};

// ============================================================================
// Hook Arguments
// ============================================================================

pub use crate::{EndEditingReason, TextAttachment, TextItemInteraction, TextRange, Url};

// ============================================================================
// Attachment
// ============================================================================

pub use crate::{DelegateTable, SharedDelegateTable, WidgetId};
