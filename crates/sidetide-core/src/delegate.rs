//! Delegate interfaces and the assembled delegates that implement them.
//!
//! [`FieldDelegate`] and [`ViewDelegate`] are the fixed multi-method
//! interfaces a text field and a text view call into. Their provided methods
//! are the platform defaults: queries permit the action, notifications do
//! nothing. Platform glue only ever talks to these traits, so hand-written
//! delegates work just as well as assembled ones.
//!
//! [`TextFieldDelegate`] and [`TextViewDelegate`] are the assembled delegates.
//! Each dispatch looks up the hook's slot in the delegate's closure store and
//! invokes the callback when present; otherwise the query default from the
//! [`DelegateConfig`] applies, and notifications are dropped.
//!
//! # Example
//!
//! ```
//! use sidetide_core::{FieldDelegate, ShouldChange, TextFieldDelegate, TextRange};
//!
//! struct Field;
//!
//! let delegate = TextFieldDelegate::build([
//!     ShouldChange::new(|_: &Field, _range, text: &str| text.chars().all(char::is_numeric)),
//! ]);
//!
//! assert!(delegate.should_change_characters(&Field, TextRange::caret(0), "42"));
//! assert!(!delegate.should_change_characters(&Field, TextRange::caret(0), "4x"));
//! // Nothing was declared for this hook, so it is permitted.
//! assert!(delegate.should_begin_editing(&Field));
//! ```

use std::fmt;

use crate::assembler::{FieldAssembler, ViewAssembler};
use crate::callback::{FieldEvent, ViewEvent};
use crate::config::DelegateConfig;
use crate::event::{EventKind, Flavor};
use crate::logging::targets;
use crate::store::{ClosureStore, FieldClosureStore, ViewClosureStore};
use crate::types::{EndEditingReason, TextAttachment, TextItemInteraction, TextRange, Url};

/// Hooks a single-line text input calls on its delegate.
pub trait FieldDelegate<W> {
    /// Asked before the field becomes first responder.
    fn should_begin_editing(&self, _field: &W) -> bool {
        true
    }

    /// The field became first responder.
    fn did_begin_editing(&self, _field: &W) {}

    /// Asked before the field resigns first responder.
    fn should_end_editing(&self, _field: &W) -> bool {
        true
    }

    /// The field resigned first responder.
    fn did_end_editing(&self, _field: &W) {}

    /// The field resigned first responder for `reason`.
    fn did_end_editing_with_reason(&self, _field: &W, _reason: EndEditingReason) {}

    /// Asked before the characters in `range` are replaced by `replacement`.
    fn should_change_characters(&self, _field: &W, _range: TextRange, _replacement: &str) -> bool {
        true
    }

    /// The selection changed.
    fn did_change_selection(&self, _field: &W) {}

    /// Asked before the clear button empties the field.
    fn should_clear(&self, _field: &W) -> bool {
        true
    }

    /// Asked when the return key is pressed.
    fn should_return(&self, _field: &W) -> bool {
        true
    }
}

/// Hooks a multi-line text input calls on its delegate.
pub trait ViewDelegate<W> {
    /// Asked before the view becomes first responder.
    fn should_begin_editing(&self, _view: &W) -> bool {
        true
    }

    /// The view became first responder.
    fn did_begin_editing(&self, _view: &W) {}

    /// Asked before the view resigns first responder.
    fn should_end_editing(&self, _view: &W) -> bool {
        true
    }

    /// The view resigned first responder.
    fn did_end_editing(&self, _view: &W) {}

    /// Asked before the text in `range` is replaced by `text`.
    fn should_change_text(&self, _view: &W, _range: TextRange, _text: &str) -> bool {
        true
    }

    /// The text changed.
    fn did_change(&self, _view: &W) {}

    /// The selection changed.
    fn did_change_selection(&self, _view: &W) {}

    /// Asked before the user interacts with an embedded attachment.
    fn should_interact_with_attachment(
        &self,
        _view: &W,
        _attachment: &TextAttachment,
        _range: TextRange,
        _interaction: TextItemInteraction,
    ) -> bool {
        true
    }

    /// Asked before the user interacts with a link.
    fn should_interact_with_url(
        &self,
        _view: &W,
        _url: &Url,
        _range: TextRange,
        _interaction: TextItemInteraction,
    ) -> bool {
        true
    }
}

/// Resolve a query dispatch: the callback's answer, or the configured default.
fn answer_query(
    flavor: Flavor,
    config: &DelegateConfig,
    kind: EventKind,
    answer: Option<bool>,
) -> bool {
    let handled = answer.is_some();
    let result = answer.unwrap_or_else(|| config.unset_query.allows());
    tracing::trace!(
        target: targets::DISPATCH,
        %flavor,
        delegate = config.display_name(),
        %kind,
        handled,
        result,
        "query dispatched"
    );
    result
}

fn trace_notify(flavor: Flavor, config: &DelegateConfig, kind: EventKind, handled: bool) {
    tracing::trace!(
        target: targets::DISPATCH,
        %flavor,
        delegate = config.display_name(),
        %kind,
        handled,
        "notification dispatched"
    );
}

/// A text-field delegate assembled from callback declarations.
///
/// Built with [`TextFieldDelegate::build`], a [`FieldAssembler`](crate::FieldAssembler)
/// or the [`text_field_delegate!`](crate::text_field_delegate) macro. The
/// callbacks cannot be changed once built; `clone` produces an independent
/// copy that dispatches identically.
pub struct TextFieldDelegate<W> {
    store: FieldClosureStore<W>,
    config: DelegateConfig,
}

impl<W> TextFieldDelegate<W> {
    /// Assemble a delegate from declarations, in order. Later declarations
    /// of the same hook replace earlier ones.
    pub fn build<I>(events: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<FieldEvent<W>>,
    {
        Self::build_with_config(DelegateConfig::default(), events)
    }

    /// Assemble a delegate with a custom configuration.
    pub fn build_with_config<I>(config: DelegateConfig, events: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<FieldEvent<W>>,
    {
        FieldAssembler::with_config(config).extend(events).finish()
    }

    /// A delegate with no callbacks; every hook uses its default.
    pub fn empty() -> Self {
        Self::from_store(FieldClosureStore::new(), DelegateConfig::default())
    }

    pub(crate) fn from_store(store: FieldClosureStore<W>, config: DelegateConfig) -> Self {
        Self { store, config }
    }

    /// The callbacks this delegate dispatches to.
    pub fn store(&self) -> &FieldClosureStore<W> {
        &self.store
    }

    /// The configuration this delegate was assembled with.
    pub fn config(&self) -> &DelegateConfig {
        &self.config
    }

    fn query(&self, kind: EventKind, answer: Option<bool>) -> bool {
        answer_query(Flavor::Field, &self.config, kind, answer)
    }

    fn notified(&self, kind: EventKind, handled: bool) {
        trace_notify(Flavor::Field, &self.config, kind, handled);
    }
}

impl<W> FieldDelegate<W> for TextFieldDelegate<W> {
    fn should_begin_editing(&self, field: &W) -> bool {
        let answer = self.store.should_begin_editing.as_ref().map(|cb| cb(field));
        self.query(EventKind::BeginEditingQuery, answer)
    }

    fn did_begin_editing(&self, field: &W) {
        let cb = self.store.did_begin_editing.as_ref();
        if let Some(cb) = cb {
            cb(field);
        }
        self.notified(EventKind::BeginEditingNotify, cb.is_some());
    }

    fn should_end_editing(&self, field: &W) -> bool {
        let answer = self.store.should_end_editing.as_ref().map(|cb| cb(field));
        self.query(EventKind::EndEditingQuery, answer)
    }

    fn did_end_editing(&self, field: &W) {
        let cb = self.store.did_end_editing.as_ref();
        if let Some(cb) = cb {
            cb(field);
        }
        self.notified(EventKind::EndEditingNotify, cb.is_some());
    }

    fn did_end_editing_with_reason(&self, field: &W, reason: EndEditingReason) {
        let cb = self.store.did_end_editing_with_reason.as_ref();
        if let Some(cb) = cb {
            cb(field, reason);
        }
        self.notified(EventKind::EndEditingWithReasonNotify, cb.is_some());
    }

    fn should_change_characters(&self, field: &W, range: TextRange, replacement: &str) -> bool {
        let answer = self
            .store
            .should_change
            .as_ref()
            .map(|cb| cb(field, range, replacement));
        self.query(EventKind::ChangeQuery, answer)
    }

    fn did_change_selection(&self, field: &W) {
        let cb = self.store.did_change_selection.as_ref();
        if let Some(cb) = cb {
            cb(field);
        }
        self.notified(EventKind::SelectionChangeNotify, cb.is_some());
    }

    fn should_clear(&self, field: &W) -> bool {
        let answer = self.store.should_clear.as_ref().map(|cb| cb(field));
        self.query(EventKind::ClearQuery, answer)
    }

    fn should_return(&self, field: &W) -> bool {
        let answer = self.store.should_return.as_ref().map(|cb| cb(field));
        self.query(EventKind::ReturnQuery, answer)
    }
}

impl<W> Default for TextFieldDelegate<W> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<W> Clone for TextFieldDelegate<W> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            config: self.config.clone(),
        }
    }
}

impl<W> fmt::Debug for TextFieldDelegate<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextFieldDelegate")
            .field("name", &self.config.name)
            .field("populated", &self.store.populated())
            .finish()
    }
}

/// A text-view delegate assembled from callback declarations.
///
/// The multi-line counterpart of [`TextFieldDelegate`].
pub struct TextViewDelegate<W> {
    store: ViewClosureStore<W>,
    config: DelegateConfig,
}

impl<W> TextViewDelegate<W> {
    /// Assemble a delegate from declarations, in order. Later declarations
    /// of the same hook replace earlier ones.
    pub fn build<I>(events: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ViewEvent<W>>,
    {
        Self::build_with_config(DelegateConfig::default(), events)
    }

    /// Assemble a delegate with a custom configuration.
    pub fn build_with_config<I>(config: DelegateConfig, events: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ViewEvent<W>>,
    {
        ViewAssembler::with_config(config).extend(events).finish()
    }

    /// A delegate with no callbacks; every hook uses its default.
    pub fn empty() -> Self {
        Self::from_store(ViewClosureStore::new(), DelegateConfig::default())
    }

    pub(crate) fn from_store(store: ViewClosureStore<W>, config: DelegateConfig) -> Self {
        Self { store, config }
    }

    /// The callbacks this delegate dispatches to.
    pub fn store(&self) -> &ViewClosureStore<W> {
        &self.store
    }

    /// The configuration this delegate was assembled with.
    pub fn config(&self) -> &DelegateConfig {
        &self.config
    }

    fn query(&self, kind: EventKind, answer: Option<bool>) -> bool {
        answer_query(Flavor::View, &self.config, kind, answer)
    }

    fn notified(&self, kind: EventKind, handled: bool) {
        trace_notify(Flavor::View, &self.config, kind, handled);
    }
}

impl<W> ViewDelegate<W> for TextViewDelegate<W> {
    fn should_begin_editing(&self, view: &W) -> bool {
        let answer = self.store.should_begin_editing.as_ref().map(|cb| cb(view));
        self.query(EventKind::BeginEditingQuery, answer)
    }

    fn did_begin_editing(&self, view: &W) {
        let cb = self.store.did_begin_editing.as_ref();
        if let Some(cb) = cb {
            cb(view);
        }
        self.notified(EventKind::BeginEditingNotify, cb.is_some());
    }

    fn should_end_editing(&self, view: &W) -> bool {
        let answer = self.store.should_end_editing.as_ref().map(|cb| cb(view));
        self.query(EventKind::EndEditingQuery, answer)
    }

    fn did_end_editing(&self, view: &W) {
        let cb = self.store.did_end_editing.as_ref();
        if let Some(cb) = cb {
            cb(view);
        }
        self.notified(EventKind::EndEditingNotify, cb.is_some());
    }

    fn should_change_text(&self, view: &W, range: TextRange, text: &str) -> bool {
        let answer = self
            .store
            .should_change
            .as_ref()
            .map(|cb| cb(view, range, text));
        self.query(EventKind::ChangeQuery, answer)
    }

    fn did_change(&self, view: &W) {
        let cb = self.store.did_change.as_ref();
        if let Some(cb) = cb {
            cb(view);
        }
        self.notified(EventKind::ChangeNotify, cb.is_some());
    }

    fn did_change_selection(&self, view: &W) {
        let cb = self.store.did_change_selection.as_ref();
        if let Some(cb) = cb {
            cb(view);
        }
        self.notified(EventKind::SelectionChangeNotify, cb.is_some());
    }

    fn should_interact_with_attachment(
        &self,
        view: &W,
        attachment: &TextAttachment,
        range: TextRange,
        interaction: TextItemInteraction,
    ) -> bool {
        let answer = self
            .store
            .should_interact_with_attachment
            .as_ref()
            .map(|cb| cb(view, attachment, range, interaction));
        self.query(EventKind::AttachmentInteractionQuery, answer)
    }

    fn should_interact_with_url(
        &self,
        view: &W,
        url: &Url,
        range: TextRange,
        interaction: TextItemInteraction,
    ) -> bool {
        let answer = self
            .store
            .should_interact_with_url
            .as_ref()
            .map(|cb| cb(view, url, range, interaction));
        self.query(EventKind::LinkInteractionQuery, answer)
    }
}

impl<W> Default for TextViewDelegate<W> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<W> Clone for TextViewDelegate<W> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            config: self.config.clone(),
        }
    }
}

impl<W> fmt::Debug for TextViewDelegate<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextViewDelegate")
            .field("name", &self.config.name)
            .field("populated", &self.store.populated())
            .finish()
    }
}

// Assembled delegates can be handed to any thread that owns the widget.
static_assertions::assert_impl_all!(TextFieldDelegate<()>: Send, Sync, Clone);
static_assertions::assert_impl_all!(TextViewDelegate<()>: Send, Sync, Clone);
