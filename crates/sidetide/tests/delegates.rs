//! Integration tests for assembling and dispatching delegates.

use std::sync::Arc;

use parking_lot::Mutex;
use sidetide::prelude::*;
use sidetide::{ClosureStore, EventKind, FieldEvent, Flavor, ViewEvent};

#[derive(Debug, PartialEq)]
struct Field {
    name: &'static str,
}

#[derive(Debug, PartialEq)]
struct View {
    name: &'static str,
}

const FIELD: Field = Field { name: "username" };
const VIEW: View = View { name: "notes" };

/// Records which hooks ran, in order.
type CallLog = Arc<Mutex<Vec<EventKind>>>;

/// A field declaration for `kind` that logs its call and answers `false`.
fn field_event(kind: EventKind, log: &CallLog) -> FieldEvent<Field> {
    let log = log.clone();
    let record = move || log.lock().push(kind);
    match kind {
        EventKind::BeginEditingQuery => {
            ShouldBeginEditing::new(move |_: &Field| { record(); false }).into()
        }
        EventKind::BeginEditingNotify => DidBeginEditing::new(move |_: &Field| record()).into(),
        EventKind::EndEditingQuery => {
            ShouldEndEditing::new(move |_: &Field| { record(); false }).into()
        }
        EventKind::EndEditingNotify => DidEndEditing::new(move |_: &Field| record()).into(),
        EventKind::EndEditingWithReasonNotify => {
            DidEndEditingWithReason::new(move |_: &Field, _| record()).into()
        }
        EventKind::ChangeQuery => ShouldChange::new(move |_: &Field, _, _| { record(); false }).into(),
        EventKind::SelectionChangeNotify => {
            DidChangeSelection::new(move |_: &Field| record()).into()
        }
        EventKind::ClearQuery => ShouldClear::new(move |_: &Field| { record(); false }).into(),
        EventKind::ReturnQuery => ShouldReturn::new(move |_: &Field| { record(); false }).into(),
        other => panic!("{other} is not a text-field hook"),
    }
}

/// A view declaration for `kind` that logs its call and answers `false`.
fn view_event(kind: EventKind, log: &CallLog) -> ViewEvent<View> {
    let log = log.clone();
    let record = move || log.lock().push(kind);
    match kind {
        EventKind::BeginEditingQuery => {
            ShouldBeginEditing::new(move |_: &View| { record(); false }).into()
        }
        EventKind::BeginEditingNotify => DidBeginEditing::new(move |_: &View| record()).into(),
        EventKind::EndEditingQuery => {
            ShouldEndEditing::new(move |_: &View| { record(); false }).into()
        }
        EventKind::EndEditingNotify => DidEndEditing::new(move |_: &View| record()).into(),
        EventKind::ChangeQuery => ShouldChange::new(move |_: &View, _, _| { record(); false }).into(),
        EventKind::ChangeNotify => DidChange::new(move |_: &View| record()).into(),
        EventKind::SelectionChangeNotify => DidChangeSelection::new(move |_: &View| record()).into(),
        EventKind::AttachmentInteractionQuery => {
            ShouldInteractWithAttachment::new(move |_: &View, _, _, _| { record(); false }).into()
        }
        EventKind::LinkInteractionQuery => {
            ShouldInteractWithUrl::new(move |_: &View, _, _, _| { record(); false }).into()
        }
        other => panic!("{other} is not a text-view hook"),
    }
}

/// Fire one hook on a field delegate. Queries return their answer.
fn fire_field(delegate: &impl FieldDelegate<Field>, kind: EventKind) -> Option<bool> {
    let range = TextRange::new(1, 2);
    match kind {
        EventKind::BeginEditingQuery => Some(delegate.should_begin_editing(&FIELD)),
        EventKind::BeginEditingNotify => {
            delegate.did_begin_editing(&FIELD);
            None
        }
        EventKind::EndEditingQuery => Some(delegate.should_end_editing(&FIELD)),
        EventKind::EndEditingNotify => {
            delegate.did_end_editing(&FIELD);
            None
        }
        EventKind::EndEditingWithReasonNotify => {
            delegate.did_end_editing_with_reason(&FIELD, EndEditingReason::Committed);
            None
        }
        EventKind::ChangeQuery => Some(delegate.should_change_characters(&FIELD, range, "ab")),
        EventKind::SelectionChangeNotify => {
            delegate.did_change_selection(&FIELD);
            None
        }
        EventKind::ClearQuery => Some(delegate.should_clear(&FIELD)),
        EventKind::ReturnQuery => Some(delegate.should_return(&FIELD)),
        other => panic!("{other} is not a text-field hook"),
    }
}

/// Fire one hook on a view delegate. Queries return their answer.
fn fire_view(delegate: &impl ViewDelegate<View>, kind: EventKind) -> Option<bool> {
    let range = TextRange::new(0, 3);
    let interaction = TextItemInteraction::InvokeDefaultAction;
    match kind {
        EventKind::BeginEditingQuery => Some(delegate.should_begin_editing(&VIEW)),
        EventKind::BeginEditingNotify => {
            delegate.did_begin_editing(&VIEW);
            None
        }
        EventKind::EndEditingQuery => Some(delegate.should_end_editing(&VIEW)),
        EventKind::EndEditingNotify => {
            delegate.did_end_editing(&VIEW);
            None
        }
        EventKind::ChangeQuery => Some(delegate.should_change_text(&VIEW, range, "xyz")),
        EventKind::ChangeNotify => {
            delegate.did_change(&VIEW);
            None
        }
        EventKind::SelectionChangeNotify => {
            delegate.did_change_selection(&VIEW);
            None
        }
        EventKind::AttachmentInteractionQuery => {
            let attachment = TextAttachment::new("public.jpeg", vec![0xFF, 0xD8]);
            Some(delegate.should_interact_with_attachment(&VIEW, &attachment, range, interaction))
        }
        EventKind::LinkInteractionQuery => {
            let url = Url::parse("https://example.com").expect("valid url");
            Some(delegate.should_interact_with_url(&VIEW, &url, range, interaction))
        }
        other => panic!("{other} is not a text-view hook"),
    }
}

#[test]
fn test_each_declared_field_hook_runs_its_callback_once() {
    for &declared in Flavor::Field.kinds() {
        let log = CallLog::default();
        let delegate = TextFieldDelegate::<Field>::build([field_event(declared, &log)]);

        for &fired in Flavor::Field.kinds() {
            let before = log.lock().len();
            let answer = fire_field(&delegate, fired);

            if fired == declared {
                assert_eq!(log.lock().len(), before + 1, "{fired} ran once");
                // The callback's answer wins over the default.
                assert_eq!(answer, fired.is_query().then_some(false));
            } else {
                assert_eq!(log.lock().len(), before, "{fired} must not run {declared}");
                assert_eq!(answer, fired.is_query().then_some(true));
            }
        }
        assert_eq!(*log.lock(), vec![declared]);
    }
}

#[test]
fn test_each_declared_view_hook_runs_its_callback_once() {
    for &declared in Flavor::View.kinds() {
        let log = CallLog::default();
        let delegate = TextViewDelegate::<View>::build([view_event(declared, &log)]);

        for &fired in Flavor::View.kinds() {
            let answer = fire_view(&delegate, fired);
            assert_eq!(answer, fired.is_query().then_some(fired != declared), "{fired}");
        }
        assert_eq!(*log.lock(), vec![declared]);
    }
}

#[test]
fn test_all_hooks_declared() {
    let log = CallLog::default();
    let delegate =
        TextFieldDelegate::<Field>::build(Flavor::Field.kinds().iter().map(|&k| field_event(k, &log)));
    assert_eq!(delegate.store().populated(), Flavor::Field.kinds());

    for &kind in Flavor::Field.kinds() {
        assert_ne!(fire_field(&delegate, kind), Some(true));
    }
    assert_eq!(*log.lock(), Flavor::Field.kinds());
}

#[test]
fn test_empty_sequence_yields_default_delegates() {
    let field = TextFieldDelegate::<Field>::build(Vec::<FieldEvent<Field>>::new());
    let view: TextViewDelegate<View> = text_view_delegate![];
    assert!(field.store().is_empty());
    assert!(view.store().is_empty());

    for &kind in Flavor::Field.kinds() {
        assert_eq!(fire_field(&field, kind), kind.is_query().then_some(true));
    }
    for &kind in Flavor::View.kinds() {
        assert_eq!(fire_view(&view, kind), kind.is_query().then_some(true));
    }
}

#[test]
fn test_duplicate_kind_last_declaration_wins() {
    let delegate = text_field_delegate![
        ShouldReturn::new(|_: &Field| false),
        ShouldReturn::new(|_: &Field| true),
    ];
    assert!(delegate.should_return(&FIELD));

    let delegate = text_field_delegate![
        ShouldReturn::new(|_: &Field| true),
        ShouldReturn::new(|_: &Field| false),
    ];
    assert!(!delegate.should_return(&FIELD));
}

#[test]
fn test_duplicate_kind_earlier_callback_never_runs() {
    let log = CallLog::default();
    let first = log.clone();
    let second = log.clone();
    let delegate = text_view_delegate![
        DidChange::new(move |_: &View| first.lock().push(EventKind::BeginEditingNotify)),
        DidChange::new(move |_: &View| second.lock().push(EventKind::ChangeNotify)),
    ];

    delegate.did_change(&VIEW);
    assert_eq!(*log.lock(), vec![EventKind::ChangeNotify]);
}

#[test]
fn test_field_should_change_scenario() {
    let delegate = text_field_delegate![ShouldChange::new(|_: &Field, _, _| false)];

    assert!(!delegate.should_change_characters(&FIELD, TextRange::new(0, 0), "a"));
    assert!(!delegate.should_change_characters(&FIELD, TextRange::new(5, 3), ""));
    assert!(delegate.should_begin_editing(&FIELD));
}

#[test]
fn test_view_selection_scenario() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = seen.clone();
    let delegate = text_view_delegate![DidChangeSelection::new(move |view: &View| {
        seen_clone.lock().push(view.name);
    })];

    delegate.did_change_selection(&VIEW);
    assert_eq!(*seen.lock(), vec!["notes"]);
    assert!(delegate.should_change_text(&VIEW, TextRange::new(0, 1), "x"));
    assert_eq!(seen.lock().len(), 1);
}

#[test]
fn test_field_callbacks_receive_widget_and_arguments() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = seen.clone();
    let delegate = text_field_delegate![ShouldChange::new(
        move |field: &Field, range: TextRange, text: &str| {
            seen_clone.lock().push(format!("{}:{}..{}:{text}", field.name, range.location, range.end()));
            true
        }
    )];

    assert!(delegate.should_change_characters(&FIELD, TextRange::new(3, 2), "hi"));
    assert_eq!(*seen.lock(), vec!["username:3..5:hi".to_string()]);
}

#[test]
fn test_range_at_end_of_offsets_dispatches() {
    let delegate = text_field_delegate![ShouldChange::new(|_: &Field, range: TextRange, _| {
        range.end() > range.location
    })];

    let range = TextRange::new(usize::MAX, 1);
    assert!(!delegate.should_change_characters(&FIELD, range, "x"));
    assert!(delegate.should_change_characters(&FIELD, TextRange::new(4, 1), "x"));
}

#[test]
fn test_copy_dispatches_like_original() {
    let log = CallLog::default();
    let original = TextFieldDelegate::<Field>::build_with_config(
        DelegateConfig::with_name("login"),
        [field_event(EventKind::ReturnQuery, &log)],
    );
    let copy = original.clone();
    drop(original);

    assert!(!copy.should_return(&FIELD));
    assert!(copy.should_clear(&FIELD));
    assert_eq!(copy.config().name.as_deref(), Some("login"));
    assert_eq!(*log.lock(), vec![EventKind::ReturnQuery]);
}

#[test]
fn test_assembler_matches_build() {
    let log = CallLog::default();
    let mut assembler = FieldAssembler::<Field>::new();
    assembler.insert(field_event(EventKind::ClearQuery, &log));
    let assembled = assembler.declare(ShouldReturn::new(|_: &Field| false)).finish();

    let built = TextFieldDelegate::<Field>::build([
        field_event(EventKind::ClearQuery, &log),
        ShouldReturn::new(|_: &Field| false).into(),
    ]);

    assert_eq!(assembled.store().populated(), built.store().populated());
    assert_eq!(fire_field(&assembled, EventKind::ClearQuery), Some(false));
    assert_eq!(fire_field(&built, EventKind::ClearQuery), Some(false));
}

#[test]
fn test_read_only_view_config() {
    let config = DelegateConfig::with_name("preview").with_unset_query(QueryDefault::Deny);
    let delegate = text_view_delegate![
        config = config;
        ShouldInteractWithUrl::new(|_: &View, _, _, _| true),
    ];

    for &kind in Flavor::View.kinds() {
        let expected = kind == EventKind::LinkInteractionQuery;
        assert_eq!(fire_view(&delegate, kind), kind.is_query().then_some(expected), "{kind}");
    }
}

#[test]
fn test_attached_delegate_dispatch() {
    let table = SharedDelegateTable::<TextFieldDelegate<Field>>::new();
    let first = table.register();
    let second = table.register();

    table
        .set_delegate(first, Some(text_field_delegate![ShouldReturn::new(|_: &Field| false)]))
        .unwrap();

    let answer = |id| table.delegate(id).map_or(true, |d| d.should_return(&FIELD));
    assert!(!answer(first));
    // A widget without a delegate behaves like the platform default.
    assert!(answer(second));

    table.set_delegate(first, None).unwrap();
    assert!(answer(first));
}
