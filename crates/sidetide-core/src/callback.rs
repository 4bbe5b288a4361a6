//! Callback wrappers and the per-flavor declaration unions.
//!
//! Every delegate hook has exactly one wrapper type holding one caller-supplied
//! callback of a fixed signature. Wrappers convert into [`FieldEvent`] and/or
//! [`ViewEvent`], but only for the flavors whose interface contains their hook:
//!
//! ```
//! use sidetide_core::{FieldEvent, ShouldClear};
//!
//! struct Field;
//! let event: FieldEvent<Field> = ShouldClear::new(|_: &Field| false).into();
//! assert_eq!(event.kind().name(), "should-clear");
//! ```
//!
//! Declaring a hook for the wrong flavor is rejected by the compiler rather
//! than dropped at runtime:
//!
//! ```compile_fail
//! use sidetide_core::{ShouldClear, ViewEvent};
//!
//! struct View;
//! let event: ViewEvent<View> = ShouldClear::new(|_: &View| false).into();
//! ```
//!
//! The same holds the other way round:
//!
//! ```compile_fail
//! use sidetide_core::{DidChange, FieldEvent};
//!
//! struct Field;
//! let event: FieldEvent<Field> = DidChange::new(|_: &Field| {}).into();
//! ```
//!
//! ```compile_fail
//! use sidetide_core::{FieldEvent, ShouldInteractWithUrl};
//!
//! struct Field;
//! let event: FieldEvent<Field> = ShouldInteractWithUrl::new(|_: &Field, _, _, _| true).into();
//! ```

use std::fmt;
use std::sync::Arc;

use crate::event::EventKind;
use crate::types::{EndEditingReason, TextAttachment, TextItemInteraction, TextRange, Url};

/// Query hook taking only the widget.
pub type QueryCallback<W> = Arc<dyn Fn(&W) -> bool + Send + Sync>;
/// Notify hook taking only the widget.
pub type NotifyCallback<W> = Arc<dyn Fn(&W) + Send + Sync>;
/// End-of-editing hook that also receives the reason.
pub type EndEditingCallback<W> = Arc<dyn Fn(&W, EndEditingReason) + Send + Sync>;
/// Text replacement query: affected range and replacement text.
pub type ChangeCallback<W> = Arc<dyn Fn(&W, TextRange, &str) -> bool + Send + Sync>;
/// Attachment interaction query.
pub type AttachmentCallback<W> =
    Arc<dyn Fn(&W, &TextAttachment, TextRange, TextItemInteraction) -> bool + Send + Sync>;
/// Link interaction query.
pub type LinkCallback<W> =
    Arc<dyn Fn(&W, &Url, TextRange, TextItemInteraction) -> bool + Send + Sync>;

macro_rules! callback_wrappers {
    ($(
        $(#[$meta:meta])*
        $name:ident($alias:ident): $kind:ident, Fn($($arg:ty),*) $(-> $ret:ty)?;
    )*) => {$(
        $(#[$meta])*
        pub struct $name<W>(pub(crate) $alias<W>);

        impl<W> $name<W> {
            /// Wrap a callback for this hook.
            pub fn new<F>(callback: F) -> Self
            where
                F: Fn($($arg),*) $(-> $ret)? + Send + Sync + 'static,
            {
                Self(Arc::new(callback))
            }

            /// The hook this wrapper declares.
            pub fn kind(&self) -> EventKind {
                EventKind::$kind
            }
        }

        impl<W> Clone for $name<W> {
            fn clone(&self) -> Self {
                Self(Arc::clone(&self.0))
            }
        }

        impl<W> fmt::Debug for $name<W> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&EventKind::$kind).finish()
            }
        }
    )*};
}

callback_wrappers! {
    /// Decides whether editing may begin.
    ShouldBeginEditing(QueryCallback): BeginEditingQuery, Fn(&W) -> bool;
    /// Informed when editing has begun.
    DidBeginEditing(NotifyCallback): BeginEditingNotify, Fn(&W);
    /// Decides whether editing may end.
    ShouldEndEditing(QueryCallback): EndEditingQuery, Fn(&W) -> bool;
    /// Informed when editing has ended.
    DidEndEditing(NotifyCallback): EndEditingNotify, Fn(&W);
    /// Informed when editing has ended, with the reason. Text fields only.
    DidEndEditingWithReason(EndEditingCallback): EndEditingWithReasonNotify, Fn(&W, EndEditingReason);
    /// Decides whether a range of text may be replaced.
    ShouldChange(ChangeCallback): ChangeQuery, Fn(&W, TextRange, &str) -> bool;
    /// Informed when the text has changed. Text views only.
    DidChange(NotifyCallback): ChangeNotify, Fn(&W);
    /// Informed when the selection has changed.
    DidChangeSelection(NotifyCallback): SelectionChangeNotify, Fn(&W);
    /// Decides whether the contents may be cleared. Text fields only.
    ShouldClear(QueryCallback): ClearQuery, Fn(&W) -> bool;
    /// Decides whether the return key is processed. Text fields only.
    ShouldReturn(QueryCallback): ReturnQuery, Fn(&W) -> bool;
    /// Decides whether the user may interact with an attachment. Text views only.
    ShouldInteractWithAttachment(AttachmentCallback): AttachmentInteractionQuery,
        Fn(&W, &TextAttachment, TextRange, TextItemInteraction) -> bool;
    /// Decides whether the user may interact with a link. Text views only.
    ShouldInteractWithUrl(LinkCallback): LinkInteractionQuery,
        Fn(&W, &Url, TextRange, TextItemInteraction) -> bool;
}

/// A callback declaration for a text-field delegate.
pub enum FieldEvent<W> {
    /// Asked before editing begins.
    ShouldBeginEditing(QueryCallback<W>),
    /// Editing has begun.
    DidBeginEditing(NotifyCallback<W>),
    /// Asked before editing ends.
    ShouldEndEditing(QueryCallback<W>),
    /// Editing has ended.
    DidEndEditing(NotifyCallback<W>),
    /// Editing has ended, with the reason.
    DidEndEditingWithReason(EndEditingCallback<W>),
    /// Asked before a range of text is replaced.
    ShouldChange(ChangeCallback<W>),
    /// The selection has changed.
    DidChangeSelection(NotifyCallback<W>),
    /// Asked before the contents are cleared.
    ShouldClear(QueryCallback<W>),
    /// Asked when the return key is pressed.
    ShouldReturn(QueryCallback<W>),
}

impl<W> FieldEvent<W> {
    /// The hook this declaration fills.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::ShouldBeginEditing(_) => EventKind::BeginEditingQuery,
            Self::DidBeginEditing(_) => EventKind::BeginEditingNotify,
            Self::ShouldEndEditing(_) => EventKind::EndEditingQuery,
            Self::DidEndEditing(_) => EventKind::EndEditingNotify,
            Self::DidEndEditingWithReason(_) => EventKind::EndEditingWithReasonNotify,
            Self::ShouldChange(_) => EventKind::ChangeQuery,
            Self::DidChangeSelection(_) => EventKind::SelectionChangeNotify,
            Self::ShouldClear(_) => EventKind::ClearQuery,
            Self::ShouldReturn(_) => EventKind::ReturnQuery,
        }
    }
}

/// A callback declaration for a text-view delegate.
pub enum ViewEvent<W> {
    /// Asked before editing begins.
    ShouldBeginEditing(QueryCallback<W>),
    /// Editing has begun.
    DidBeginEditing(NotifyCallback<W>),
    /// Asked before editing ends.
    ShouldEndEditing(QueryCallback<W>),
    /// Editing has ended.
    DidEndEditing(NotifyCallback<W>),
    /// Asked before a range of text is replaced.
    ShouldChange(ChangeCallback<W>),
    /// The text has changed.
    DidChange(NotifyCallback<W>),
    /// The selection has changed.
    DidChangeSelection(NotifyCallback<W>),
    /// Asked before the user interacts with an attachment.
    ShouldInteractWithAttachment(AttachmentCallback<W>),
    /// Asked before the user interacts with a link.
    ShouldInteractWithUrl(LinkCallback<W>),
}

impl<W> ViewEvent<W> {
    /// The hook this declaration fills.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::ShouldBeginEditing(_) => EventKind::BeginEditingQuery,
            Self::DidBeginEditing(_) => EventKind::BeginEditingNotify,
            Self::ShouldEndEditing(_) => EventKind::EndEditingQuery,
            Self::DidEndEditing(_) => EventKind::EndEditingNotify,
            Self::ShouldChange(_) => EventKind::ChangeQuery,
            Self::DidChange(_) => EventKind::ChangeNotify,
            Self::DidChangeSelection(_) => EventKind::SelectionChangeNotify,
            Self::ShouldInteractWithAttachment(_) => EventKind::AttachmentInteractionQuery,
            Self::ShouldInteractWithUrl(_) => EventKind::LinkInteractionQuery,
        }
    }
}

impl<W> fmt::Debug for FieldEvent<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FieldEvent").field(&self.kind()).finish()
    }
}

impl<W> fmt::Debug for ViewEvent<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ViewEvent").field(&self.kind()).finish()
    }
}

// Wrappers convert only into the unions of the flavors that support them.
macro_rules! into_event {
    ($event:ident: $($wrapper:ident),* $(,)?) => {$(
        impl<W> From<$wrapper<W>> for $event<W> {
            fn from(wrapper: $wrapper<W>) -> Self {
                Self::$wrapper(wrapper.0)
            }
        }
    )*};
}

into_event!(FieldEvent:
    ShouldBeginEditing,
    DidBeginEditing,
    ShouldEndEditing,
    DidEndEditing,
    DidEndEditingWithReason,
    ShouldChange,
    DidChangeSelection,
    ShouldClear,
    ShouldReturn,
);

into_event!(ViewEvent:
    ShouldBeginEditing,
    DidBeginEditing,
    ShouldEndEditing,
    DidEndEditing,
    ShouldChange,
    DidChange,
    DidChangeSelection,
    ShouldInteractWithAttachment,
    ShouldInteractWithUrl,
);
