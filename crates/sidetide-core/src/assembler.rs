//! Declarative delegate assembly.
//!
//! The assembler takes callback declarations in order, writes each into a
//! fresh closure store, and wraps the finished store in the delegate of the
//! store's flavor. Declaring the same hook twice keeps the later callback.
//! Declaring nothing is valid and yields a delegate that answers every hook
//! with its default.
//!
//! # Example
//!
//! ```
//! use sidetide_core::{
//!     DidChangeSelection, FieldAssembler, FieldDelegate, ShouldReturn, TextFieldDelegate,
//! };
//!
//! struct Field;
//!
//! let delegate: TextFieldDelegate<Field> = FieldAssembler::new()
//!     .declare(ShouldReturn::new(|_: &Field| false))
//!     .declare(DidChangeSelection::new(|_: &Field| println!("selection moved")))
//!     .finish();
//!
//! assert!(!delegate.should_return(&Field));
//! ```

use crate::config::DelegateConfig;
use crate::logging::targets;
use crate::store::{ClosureStore, FieldClosureStore, ViewClosureStore};

/// Collects callback declarations into a closure store of flavor `S`.
#[derive(Debug)]
pub struct DelegateAssembler<S: ClosureStore> {
    store: S,
    config: DelegateConfig,
    declared: usize,
}

/// Assembler producing a [`TextFieldDelegate`](crate::TextFieldDelegate).
pub type FieldAssembler<W> = DelegateAssembler<FieldClosureStore<W>>;

/// Assembler producing a [`TextViewDelegate`](crate::TextViewDelegate).
pub type ViewAssembler<W> = DelegateAssembler<ViewClosureStore<W>>;

impl<S: ClosureStore> DelegateAssembler<S> {
    /// Create an assembler with an empty store and the default configuration.
    pub fn new() -> Self {
        Self::with_config(DelegateConfig::default())
    }

    /// Create an assembler whose delegate will use `config`.
    pub fn with_config(config: DelegateConfig) -> Self {
        Self {
            store: S::default(),
            config,
            declared: 0,
        }
    }

    /// Add a declaration, fluent form.
    pub fn declare(mut self, event: impl Into<S::Event>) -> Self {
        self.insert(event);
        self
    }

    /// Add a declaration. A later declaration of the same hook replaces
    /// the earlier one.
    pub fn insert(&mut self, event: impl Into<S::Event>) {
        let event = event.into();
        let kind = S::event_kind(&event);
        self.declared += 1;
        tracing::trace!(
            target: targets::ASSEMBLER,
            flavor = %S::FLAVOR,
            %kind,
            position = self.declared,
            "callback declared"
        );

        if self.store.set_slot(event) {
            tracing::debug!(
                target: targets::ASSEMBLER,
                flavor = %S::FLAVOR,
                delegate = self.config.display_name(),
                %kind,
                "hook declared more than once; keeping the later callback"
            );
        }
    }

    /// Add every declaration of `events`, in order.
    pub fn extend<I>(mut self, events: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<S::Event>,
    {
        for event in events {
            self.insert(event);
        }
        self
    }

    /// Number of declarations received so far, duplicates included.
    pub fn declared(&self) -> usize {
        self.declared
    }

    /// The store as filled so far.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Finish assembly and wrap the store in the flavor's delegate.
    pub fn finish(self) -> S::Delegate {
        tracing::debug!(
            target: targets::ASSEMBLER,
            flavor = %S::FLAVOR,
            delegate = self.config.display_name(),
            declared = self.declared,
            populated = self.store.len(),
            "delegate assembled"
        );
        self.store.into_delegate(self.config)
    }
}

impl<S: ClosureStore> Default for DelegateAssembler<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Assemble a delegate of the flavor of `S` from `events`, in order.
pub fn assemble<S, I>(events: I) -> S::Delegate
where
    S: ClosureStore,
    I: IntoIterator,
    I::Item: Into<S::Event>,
{
    DelegateAssembler::<S>::new().extend(events).finish()
}

/// Assemble a [`TextFieldDelegate`](crate::TextFieldDelegate) from a list of
/// callback wrappers.
///
/// An optional `config = <expr>;` prefix supplies a
/// [`DelegateConfig`](crate::DelegateConfig).
///
/// ```
/// use sidetide_core::{text_field_delegate, DelegateConfig, FieldDelegate, ShouldClear, ShouldReturn};
///
/// struct Field;
///
/// let delegate = text_field_delegate![
///     config = DelegateConfig::with_name("search");
///     ShouldClear::new(|_: &Field| false),
///     ShouldReturn::new(|_: &Field| true),
/// ];
/// assert!(!delegate.should_clear(&Field));
/// assert_eq!(delegate.config().name.as_deref(), Some("search"));
/// ```
#[macro_export]
macro_rules! text_field_delegate {
    (config = $config:expr; $($event:expr),* $(,)?) => {
        $crate::FieldAssembler::with_config($config)
            $(.declare($event))*
            .finish()
    };
    ($($event:expr),* $(,)?) => {
        $crate::text_field_delegate!(config = $crate::DelegateConfig::default(); $($event),*)
    };
}

/// Assemble a [`TextViewDelegate`](crate::TextViewDelegate) from a list of
/// callback wrappers.
///
/// Accepts the same `config = <expr>;` prefix as
/// [`text_field_delegate!`](crate::text_field_delegate).
#[macro_export]
macro_rules! text_view_delegate {
    (config = $config:expr; $($event:expr),* $(,)?) => {
        $crate::ViewAssembler::with_config($config)
            $(.declare($event))*
            .finish()
    };
    ($($event:expr),* $(,)?) => {
        $crate::text_view_delegate!(config = $crate::DelegateConfig::default(); $($event),*)
    };
}
