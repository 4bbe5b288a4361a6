//! Attaching delegates to widgets.
//!
//! A text widget keeps only a weak reference to its delegate, so something
//! else has to own the delegate for as long as the widget lives. The
//! [`DelegateTable`] is that owner: a side-table from widget identity to the
//! widget's delegate.
//!
//! - Register each widget when it is created; the table hands out a [`WidgetId`].
//! - [`set_delegate`](DelegateTable::set_delegate) with `Some` attaches a
//!   delegate, replacing any previous one; with `None` it detaches.
//! - Unregister the widget when it is destroyed; its delegate is dropped with it.
//!
//! # Example
//!
//! ```
//! use sidetide::prelude::*;
//!
//! struct Field;
//!
//! let mut table = DelegateTable::new();
//! let id = table.register();
//! table
//!     .set_delegate(id, Some(text_field_delegate![ShouldReturn::new(|_: &Field| false)]))
//!     .unwrap();
//!
//! let returns = table.delegate(id).map_or(true, |d| d.should_return(&Field));
//! assert!(!returns);
//!
//! table.unregister(id).unwrap();
//! assert!(table.delegate(id).is_none());
//! ```

use std::sync::Arc;

use parking_lot::RwLock;
use sidetide_core::logging::targets;
use slotmap::{new_key_type, SlotMap};

use crate::error::{AttachError, AttachResult};

new_key_type! {
    /// Identity of a widget registered in a [`DelegateTable`].
    ///
    /// Ids are never reused: once a widget is unregistered, its id stays
    /// invalid even if new widgets are registered.
    pub struct WidgetId;
}

/// Owns the delegate attached to each registered widget.
pub struct DelegateTable<D> {
    widgets: SlotMap<WidgetId, Option<D>>,
}

impl<D> DelegateTable<D> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            widgets: SlotMap::with_key(),
        }
    }

    /// Register a widget with no delegate attached.
    pub fn register(&mut self) -> WidgetId {
        let id = self.widgets.insert(None);
        tracing::trace!(target: targets::ATTACH, ?id, "registered widget");
        id
    }

    /// Remove a widget, returning (and releasing) its delegate.
    pub fn unregister(&mut self, id: WidgetId) -> AttachResult<Option<D>> {
        let delegate = self
            .widgets
            .remove(id)
            .ok_or(AttachError::UnknownWidget(id))?;
        tracing::trace!(
            target: targets::ATTACH,
            ?id,
            had_delegate = delegate.is_some(),
            "unregistered widget"
        );
        Ok(delegate)
    }

    /// Attach `delegate` to a widget, or detach with `None`.
    ///
    /// Returns the previously attached delegate.
    pub fn set_delegate(&mut self, id: WidgetId, delegate: Option<D>) -> AttachResult<Option<D>> {
        let slot = self
            .widgets
            .get_mut(id)
            .ok_or(AttachError::UnknownWidget(id))?;
        let attached = delegate.is_some();
        let previous = std::mem::replace(slot, delegate);
        tracing::debug!(
            target: targets::ATTACH,
            ?id,
            attached,
            replaced = previous.is_some(),
            "widget delegate set"
        );
        Ok(previous)
    }

    /// Attach `delegate` to a widget. Shorthand for `set_delegate(id, Some(delegate))`.
    pub fn attach(&mut self, id: WidgetId, delegate: D) -> AttachResult<Option<D>> {
        self.set_delegate(id, Some(delegate))
    }

    /// Detach a widget's delegate. Shorthand for `set_delegate(id, None)`.
    pub fn detach(&mut self, id: WidgetId) -> AttachResult<Option<D>> {
        self.set_delegate(id, None)
    }

    /// The delegate attached to a widget, if the widget is registered and
    /// has one.
    pub fn delegate(&self, id: WidgetId) -> Option<&D> {
        self.widgets.get(id).and_then(Option::as_ref)
    }

    /// Check if a widget is registered.
    pub fn contains(&self, id: WidgetId) -> bool {
        self.widgets.contains_key(id)
    }

    /// Number of registered widgets.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Whether no widget is registered.
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Number of widgets with a delegate attached.
    pub fn attached_count(&self) -> usize {
        self.widgets.values().filter(|d| d.is_some()).count()
    }
}

impl<D> Default for DelegateTable<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Thread-safe, cloneable handle to a [`DelegateTable`].
///
/// Clones share the same table.
pub struct SharedDelegateTable<D> {
    inner: Arc<RwLock<DelegateTable<D>>>,
}

impl<D> SharedDelegateTable<D> {
    /// Create a handle to a new, empty table.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(DelegateTable::new())),
        }
    }

    /// Register a widget with no delegate attached.
    pub fn register(&self) -> WidgetId {
        self.inner.write().register()
    }

    /// Remove a widget, returning its delegate.
    pub fn unregister(&self, id: WidgetId) -> AttachResult<Option<D>> {
        self.inner.write().unregister(id)
    }

    /// Attach a delegate to a widget, or detach with `None`.
    pub fn set_delegate(&self, id: WidgetId, delegate: Option<D>) -> AttachResult<Option<D>> {
        self.inner.write().set_delegate(id, delegate)
    }

    /// Check if a widget is registered.
    pub fn contains(&self, id: WidgetId) -> bool {
        self.inner.read().contains(id)
    }

    /// Execute a closure with read access to the table.
    pub fn with_read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&DelegateTable<D>) -> R,
    {
        f(&self.inner.read())
    }

    /// Execute a closure with write access to the table.
    pub fn with_write<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut DelegateTable<D>) -> R,
    {
        f(&mut self.inner.write())
    }
}

impl<D: Clone> SharedDelegateTable<D> {
    /// A copy of the delegate attached to a widget.
    ///
    /// Assembled delegates are immutable, so the copy dispatches exactly
    /// like the attached one.
    pub fn delegate(&self, id: WidgetId) -> Option<D> {
        self.inner.read().delegate(id).cloned()
    }
}

impl<D> Clone for SharedDelegateTable<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<D> Default for SharedDelegateTable<D> {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(
    SharedDelegateTable<sidetide_core::TextFieldDelegate<()>>: Send, Sync, Clone
);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use sidetide_core::{
        text_view_delegate, DidChange, FieldDelegate, ShouldBeginEditing, ShouldReturn,
        TextFieldDelegate, TextViewDelegate, ViewDelegate,
    };

    struct Field;
    struct View;

    #[test]
    fn test_register_and_attach() {
        let mut table = DelegateTable::<TextFieldDelegate<Field>>::new();
        let id = table.register();
        assert!(table.contains(id));
        assert!(table.delegate(id).is_none());

        let previous = table
            .attach(id, TextFieldDelegate::build([ShouldReturn::new(|_: &Field| false)]))
            .unwrap();
        assert!(previous.is_none());
        assert_eq!(table.attached_count(), 1);
        assert!(!table.delegate(id).unwrap().should_return(&Field));
    }

    #[test]
    fn test_set_delegate_replaces_and_detaches() {
        let mut table = DelegateTable::<TextFieldDelegate<Field>>::new();
        let id = table.register();

        table
            .set_delegate(id, Some(TextFieldDelegate::build([ShouldReturn::new(|_: &Field| false)])))
            .unwrap();
        let previous = table
            .set_delegate(
                id,
                Some(TextFieldDelegate::build([ShouldBeginEditing::new(|_: &Field| false)])),
            )
            .unwrap()
            .expect("previous delegate returned");
        assert!(!previous.should_return(&Field));

        let current = table.delegate(id).unwrap();
        assert!(current.should_return(&Field));
        assert!(!current.should_begin_editing(&Field));

        assert!(table.detach(id).unwrap().is_some());
        assert!(table.delegate(id).is_none());
        // The widget stays registered after detaching.
        assert!(table.contains(id));
        assert_eq!(table.attached_count(), 0);
    }

    #[test]
    fn test_unregister_releases_delegate() {
        let captured = Arc::new(());
        let held = captured.clone();
        let delegate: TextViewDelegate<View> = text_view_delegate![DidChange::new(move |_: &View| {
            let _ = Arc::clone(&held);
        })];

        let mut table = DelegateTable::new();
        let id = table.register();
        table.attach(id, delegate).unwrap();
        assert_eq!(Arc::strong_count(&captured), 2);

        drop(table.unregister(id).unwrap());
        assert_eq!(Arc::strong_count(&captured), 1);
        assert!(!table.contains(id));
        assert!(table.is_empty());
    }

    #[test]
    fn test_unknown_widget() {
        let mut table = DelegateTable::<TextFieldDelegate<Field>>::new();
        let id = table.register();
        table.unregister(id).unwrap();

        // Ids are not reused after removal.
        let other = table.register();
        assert_ne!(id, other);

        assert_eq!(table.detach(id).unwrap_err(), AttachError::UnknownWidget(id));
        assert_eq!(table.unregister(id).unwrap_err(), AttachError::UnknownWidget(id));
        assert!(table.delegate(id).is_none());
    }

    #[test]
    fn test_shared_table_hands_out_copies() {
        let table = SharedDelegateTable::<TextViewDelegate<View>>::new();
        let handle = table.clone();
        let id = table.register();

        let calls = Arc::new(Mutex::new(0));
        let calls_clone = calls.clone();
        handle
            .set_delegate(
                id,
                Some(TextViewDelegate::build([DidChange::new(move |_: &View| {
                    *calls_clone.lock() += 1;
                })])),
            )
            .unwrap();

        let copy = table.delegate(id).unwrap();
        copy.did_change(&View);
        table.with_read(|t| t.delegate(id).unwrap().did_change(&View));
        assert_eq!(*calls.lock(), 2);

        assert_eq!(handle.with_write(|t| t.attached_count()), 1);
        assert!(table.unregister(id).unwrap().is_some());
        assert!(!handle.contains(id));
    }
}
