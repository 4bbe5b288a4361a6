//! Closure stores: one optional callback slot per hook of a flavor.
//!
//! A store is plain data. It is filled once by the assembler, then moved into
//! the delegate it was assembled for and never written again. Cloning a store
//! copies the record; the callbacks themselves are immutable and shared.

use std::fmt;

use crate::callback::{
    AttachmentCallback, ChangeCallback, EndEditingCallback, FieldEvent, LinkCallback,
    NotifyCallback, QueryCallback, ViewEvent,
};
use crate::config::DelegateConfig;
use crate::delegate::{TextFieldDelegate, TextViewDelegate};
use crate::error::{Error, Result};
use crate::event::{EventKind, Flavor};
use crate::logging::targets;

/// Storage for the callbacks of one delegate flavor.
///
/// Implemented by [`FieldClosureStore`] and [`ViewClosureStore`]. The
/// assembler is generic over this trait; each implementation picks the
/// declaration union it accepts and the delegate it finishes into.
pub trait ClosureStore: Default + Clone {
    /// Declarations accepted by [`set_slot`](Self::set_slot).
    type Event;
    /// The delegate produced by [`into_delegate`](Self::into_delegate).
    type Delegate;
    /// The flavor whose interface this store covers.
    const FLAVOR: Flavor;

    /// The hook a declaration fills.
    fn event_kind(event: &Self::Event) -> EventKind;

    /// Write a declaration into its slot, replacing any earlier callback.
    ///
    /// Returns `true` if an earlier callback was replaced.
    fn set_slot(&mut self, event: Self::Event) -> bool;

    /// Whether the slot for `kind` holds a callback.
    ///
    /// Fails with [`Error::UnsupportedEvent`] if `kind` is not part of this
    /// flavor's interface.
    fn is_set(&self, kind: EventKind) -> Result<bool>;

    /// Wrap the finished store in the flavor's delegate.
    fn into_delegate(self, config: DelegateConfig) -> Self::Delegate;

    /// The hooks that hold a callback, in interface order.
    fn populated(&self) -> Vec<EventKind> {
        Self::FLAVOR
            .kinds()
            .iter()
            .copied()
            .filter(|&kind| self.is_set(kind).unwrap_or(false))
            .collect()
    }

    /// Number of hooks that hold a callback.
    fn len(&self) -> usize {
        self.populated().len()
    }

    /// Whether no hook holds a callback.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Callback slots for a text-field delegate.
pub struct FieldClosureStore<W> {
    pub(crate) should_begin_editing: Option<QueryCallback<W>>,
    pub(crate) did_begin_editing: Option<NotifyCallback<W>>,
    pub(crate) should_end_editing: Option<QueryCallback<W>>,
    pub(crate) did_end_editing: Option<NotifyCallback<W>>,
    pub(crate) did_end_editing_with_reason: Option<EndEditingCallback<W>>,
    pub(crate) should_change: Option<ChangeCallback<W>>,
    pub(crate) did_change_selection: Option<NotifyCallback<W>>,
    pub(crate) should_clear: Option<QueryCallback<W>>,
    pub(crate) should_return: Option<QueryCallback<W>>,
}

impl<W> FieldClosureStore<W> {
    /// Create a store with every slot empty.
    pub fn new() -> Self {
        Self {
            should_begin_editing: None,
            did_begin_editing: None,
            should_end_editing: None,
            did_end_editing: None,
            did_end_editing_with_reason: None,
            should_change: None,
            did_change_selection: None,
            should_clear: None,
            should_return: None,
        }
    }

    /// The callback asked before editing begins.
    pub fn should_begin_editing(&self) -> Option<&QueryCallback<W>> {
        self.should_begin_editing.as_ref()
    }

    /// The callback told that editing has begun.
    pub fn did_begin_editing(&self) -> Option<&NotifyCallback<W>> {
        self.did_begin_editing.as_ref()
    }

    /// The callback asked before editing ends.
    pub fn should_end_editing(&self) -> Option<&QueryCallback<W>> {
        self.should_end_editing.as_ref()
    }

    /// The callback told that editing has ended.
    pub fn did_end_editing(&self) -> Option<&NotifyCallback<W>> {
        self.did_end_editing.as_ref()
    }

    /// The callback told that editing has ended, with the reason.
    pub fn did_end_editing_with_reason(&self) -> Option<&EndEditingCallback<W>> {
        self.did_end_editing_with_reason.as_ref()
    }

    /// The callback asked before text is replaced.
    pub fn should_change(&self) -> Option<&ChangeCallback<W>> {
        self.should_change.as_ref()
    }

    /// The callback told that the selection has changed.
    pub fn did_change_selection(&self) -> Option<&NotifyCallback<W>> {
        self.did_change_selection.as_ref()
    }

    /// The callback asked before the contents are cleared.
    pub fn should_clear(&self) -> Option<&QueryCallback<W>> {
        self.should_clear.as_ref()
    }

    /// The callback asked when return is pressed.
    pub fn should_return(&self) -> Option<&QueryCallback<W>> {
        self.should_return.as_ref()
    }
}

impl<W> ClosureStore for FieldClosureStore<W> {
    type Event = FieldEvent<W>;
    type Delegate = TextFieldDelegate<W>;
    const FLAVOR: Flavor = Flavor::Field;

    fn event_kind(event: &FieldEvent<W>) -> EventKind {
        event.kind()
    }

    fn set_slot(&mut self, event: FieldEvent<W>) -> bool {
        let kind = event.kind();
        let replaced = match event {
            FieldEvent::ShouldBeginEditing(cb) => self.should_begin_editing.replace(cb).is_some(),
            FieldEvent::DidBeginEditing(cb) => self.did_begin_editing.replace(cb).is_some(),
            FieldEvent::ShouldEndEditing(cb) => self.should_end_editing.replace(cb).is_some(),
            FieldEvent::DidEndEditing(cb) => self.did_end_editing.replace(cb).is_some(),
            FieldEvent::DidEndEditingWithReason(cb) => {
                self.did_end_editing_with_reason.replace(cb).is_some()
            }
            FieldEvent::ShouldChange(cb) => self.should_change.replace(cb).is_some(),
            FieldEvent::DidChangeSelection(cb) => self.did_change_selection.replace(cb).is_some(),
            FieldEvent::ShouldClear(cb) => self.should_clear.replace(cb).is_some(),
            FieldEvent::ShouldReturn(cb) => self.should_return.replace(cb).is_some(),
        };
        tracing::trace!(
            target: targets::ASSEMBLER,
            flavor = %Self::FLAVOR,
            %kind,
            replaced,
            "slot written"
        );
        replaced
    }

    fn is_set(&self, kind: EventKind) -> Result<bool> {
        Ok(match kind {
            EventKind::BeginEditingQuery => self.should_begin_editing.is_some(),
            EventKind::BeginEditingNotify => self.did_begin_editing.is_some(),
            EventKind::EndEditingQuery => self.should_end_editing.is_some(),
            EventKind::EndEditingNotify => self.did_end_editing.is_some(),
            EventKind::EndEditingWithReasonNotify => self.did_end_editing_with_reason.is_some(),
            EventKind::ChangeQuery => self.should_change.is_some(),
            EventKind::SelectionChangeNotify => self.did_change_selection.is_some(),
            EventKind::ClearQuery => self.should_clear.is_some(),
            EventKind::ReturnQuery => self.should_return.is_some(),
            EventKind::ChangeNotify
            | EventKind::AttachmentInteractionQuery
            | EventKind::LinkInteractionQuery => {
                return Err(Error::unsupported(kind, Self::FLAVOR));
            }
        })
    }

    fn into_delegate(self, config: DelegateConfig) -> TextFieldDelegate<W> {
        TextFieldDelegate::from_store(self, config)
    }
}

impl<W> Default for FieldClosureStore<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Clone for FieldClosureStore<W> {
    fn clone(&self) -> Self {
        Self {
            should_begin_editing: self.should_begin_editing.clone(),
            did_begin_editing: self.did_begin_editing.clone(),
            should_end_editing: self.should_end_editing.clone(),
            did_end_editing: self.did_end_editing.clone(),
            did_end_editing_with_reason: self.did_end_editing_with_reason.clone(),
            should_change: self.should_change.clone(),
            did_change_selection: self.did_change_selection.clone(),
            should_clear: self.should_clear.clone(),
            should_return: self.should_return.clone(),
        }
    }
}

impl<W> fmt::Debug for FieldClosureStore<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldClosureStore")
            .field("populated", &self.populated())
            .finish()
    }
}

/// Callback slots for a text-view delegate.
pub struct ViewClosureStore<W> {
    pub(crate) should_begin_editing: Option<QueryCallback<W>>,
    pub(crate) did_begin_editing: Option<NotifyCallback<W>>,
    pub(crate) should_end_editing: Option<QueryCallback<W>>,
    pub(crate) did_end_editing: Option<NotifyCallback<W>>,
    pub(crate) should_change: Option<ChangeCallback<W>>,
    pub(crate) did_change: Option<NotifyCallback<W>>,
    pub(crate) did_change_selection: Option<NotifyCallback<W>>,
    pub(crate) should_interact_with_attachment: Option<AttachmentCallback<W>>,
    pub(crate) should_interact_with_url: Option<LinkCallback<W>>,
}

impl<W> ViewClosureStore<W> {
    /// Create a store with every slot empty.
    pub fn new() -> Self {
        Self {
            should_begin_editing: None,
            did_begin_editing: None,
            should_end_editing: None,
            did_end_editing: None,
            should_change: None,
            did_change: None,
            did_change_selection: None,
            should_interact_with_attachment: None,
            should_interact_with_url: None,
        }
    }

    /// The callback asked before editing begins.
    pub fn should_begin_editing(&self) -> Option<&QueryCallback<W>> {
        self.should_begin_editing.as_ref()
    }

    /// The callback told that editing has begun.
    pub fn did_begin_editing(&self) -> Option<&NotifyCallback<W>> {
        self.did_begin_editing.as_ref()
    }

    /// The callback asked before editing ends.
    pub fn should_end_editing(&self) -> Option<&QueryCallback<W>> {
        self.should_end_editing.as_ref()
    }

    /// The callback told that editing has ended.
    pub fn did_end_editing(&self) -> Option<&NotifyCallback<W>> {
        self.did_end_editing.as_ref()
    }

    /// The callback asked before text is replaced.
    pub fn should_change(&self) -> Option<&ChangeCallback<W>> {
        self.should_change.as_ref()
    }

    /// The callback told that the text has changed.
    pub fn did_change(&self) -> Option<&NotifyCallback<W>> {
        self.did_change.as_ref()
    }

    /// The callback told that the selection has changed.
    pub fn did_change_selection(&self) -> Option<&NotifyCallback<W>> {
        self.did_change_selection.as_ref()
    }

    /// The callback asked before an attachment interaction.
    pub fn should_interact_with_attachment(&self) -> Option<&AttachmentCallback<W>> {
        self.should_interact_with_attachment.as_ref()
    }

    /// The callback asked before a link interaction.
    pub fn should_interact_with_url(&self) -> Option<&LinkCallback<W>> {
        self.should_interact_with_url.as_ref()
    }
}

impl<W> ClosureStore for ViewClosureStore<W> {
    type Event = ViewEvent<W>;
    type Delegate = TextViewDelegate<W>;
    const FLAVOR: Flavor = Flavor::View;

    fn event_kind(event: &ViewEvent<W>) -> EventKind {
        event.kind()
    }

    fn set_slot(&mut self, event: ViewEvent<W>) -> bool {
        let kind = event.kind();
        let replaced = match event {
            ViewEvent::ShouldBeginEditing(cb) => self.should_begin_editing.replace(cb).is_some(),
            ViewEvent::DidBeginEditing(cb) => self.did_begin_editing.replace(cb).is_some(),
            ViewEvent::ShouldEndEditing(cb) => self.should_end_editing.replace(cb).is_some(),
            ViewEvent::DidEndEditing(cb) => self.did_end_editing.replace(cb).is_some(),
            ViewEvent::ShouldChange(cb) => self.should_change.replace(cb).is_some(),
            ViewEvent::DidChange(cb) => self.did_change.replace(cb).is_some(),
            ViewEvent::DidChangeSelection(cb) => self.did_change_selection.replace(cb).is_some(),
            ViewEvent::ShouldInteractWithAttachment(cb) => {
                self.should_interact_with_attachment.replace(cb).is_some()
            }
            ViewEvent::ShouldInteractWithUrl(cb) => {
                self.should_interact_with_url.replace(cb).is_some()
            }
        };
        tracing::trace!(
            target: targets::ASSEMBLER,
            flavor = %Self::FLAVOR,
            %kind,
            replaced,
            "slot written"
        );
        replaced
    }

    fn is_set(&self, kind: EventKind) -> Result<bool> {
        Ok(match kind {
            EventKind::BeginEditingQuery => self.should_begin_editing.is_some(),
            EventKind::BeginEditingNotify => self.did_begin_editing.is_some(),
            EventKind::EndEditingQuery => self.should_end_editing.is_some(),
            EventKind::EndEditingNotify => self.did_end_editing.is_some(),
            EventKind::ChangeQuery => self.should_change.is_some(),
            EventKind::ChangeNotify => self.did_change.is_some(),
            EventKind::SelectionChangeNotify => self.did_change_selection.is_some(),
            EventKind::AttachmentInteractionQuery => {
                self.should_interact_with_attachment.is_some()
            }
            EventKind::LinkInteractionQuery => self.should_interact_with_url.is_some(),
            EventKind::EndEditingWithReasonNotify
            | EventKind::ClearQuery
            | EventKind::ReturnQuery => {
                return Err(Error::unsupported(kind, Self::FLAVOR));
            }
        })
    }

    fn into_delegate(self, config: DelegateConfig) -> TextViewDelegate<W> {
        TextViewDelegate::from_store(self, config)
    }
}

impl<W> Default for ViewClosureStore<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Clone for ViewClosureStore<W> {
    fn clone(&self) -> Self {
        Self {
            should_begin_editing: self.should_begin_editing.clone(),
            did_begin_editing: self.did_begin_editing.clone(),
            should_end_editing: self.should_end_editing.clone(),
            did_end_editing: self.did_end_editing.clone(),
            should_change: self.should_change.clone(),
            did_change: self.did_change.clone(),
            did_change_selection: self.did_change_selection.clone(),
            should_interact_with_attachment: self.should_interact_with_attachment.clone(),
            should_interact_with_url: self.should_interact_with_url.clone(),
        }
    }
}

impl<W> fmt::Debug for ViewClosureStore<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewClosureStore")
            .field("populated", &self.populated())
            .finish()
    }
}
