//! Event kinds making up the text-input delegate interfaces.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// How a delegate hook participates in the widget's editing flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventStyle {
    /// The hook's result decides whether the widget may perform an action.
    Query,
    /// The hook is informed after the fact and returns nothing.
    Notify,
}

/// The two widget flavors a delegate can be assembled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    /// Single-line text input.
    Field,
    /// Multi-line text input.
    View,
}

impl Flavor {
    /// The event kinds that make up this flavor's delegate interface.
    pub fn kinds(self) -> &'static [EventKind] {
        match self {
            Self::Field => &FIELD_KINDS,
            Self::View => &VIEW_KINDS,
        }
    }

    /// Check whether `kind` is part of this flavor's delegate interface.
    pub fn supports(self, kind: EventKind) -> bool {
        self.kinds().contains(&kind)
    }

    /// Short lowercase name, used in log output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Field => "text-field",
            Self::View => "text-view",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One named hook of a text-input delegate interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Asked before editing begins.
    BeginEditingQuery,
    /// Editing has begun.
    BeginEditingNotify,
    /// Asked before editing ends.
    EndEditingQuery,
    /// Editing has ended.
    EndEditingNotify,
    /// Editing has ended, with the reason it ended.
    EndEditingWithReasonNotify,
    /// Asked before a range of text is replaced.
    ChangeQuery,
    /// The text has changed.
    ChangeNotify,
    /// The selection has changed.
    SelectionChangeNotify,
    /// Asked before the contents are cleared.
    ClearQuery,
    /// Asked when the return key is pressed.
    ReturnQuery,
    /// Asked before the user interacts with an embedded attachment.
    AttachmentInteractionQuery,
    /// Asked before the user interacts with a link.
    LinkInteractionQuery,
}

const FIELD_KINDS: [EventKind; 9] = [
    EventKind::BeginEditingQuery,
    EventKind::BeginEditingNotify,
    EventKind::EndEditingQuery,
    EventKind::EndEditingNotify,
    EventKind::EndEditingWithReasonNotify,
    EventKind::ChangeQuery,
    EventKind::SelectionChangeNotify,
    EventKind::ClearQuery,
    EventKind::ReturnQuery,
];

const VIEW_KINDS: [EventKind; 9] = [
    EventKind::BeginEditingQuery,
    EventKind::BeginEditingNotify,
    EventKind::EndEditingQuery,
    EventKind::EndEditingNotify,
    EventKind::ChangeQuery,
    EventKind::ChangeNotify,
    EventKind::SelectionChangeNotify,
    EventKind::AttachmentInteractionQuery,
    EventKind::LinkInteractionQuery,
];

impl EventKind {
    /// Every event kind, in declaration order.
    pub const ALL: [EventKind; 12] = [
        Self::BeginEditingQuery,
        Self::BeginEditingNotify,
        Self::EndEditingQuery,
        Self::EndEditingNotify,
        Self::EndEditingWithReasonNotify,
        Self::ChangeQuery,
        Self::ChangeNotify,
        Self::SelectionChangeNotify,
        Self::ClearQuery,
        Self::ReturnQuery,
        Self::AttachmentInteractionQuery,
        Self::LinkInteractionQuery,
    ];

    /// Get the style of this event.
    pub fn style(self) -> EventStyle {
        match self {
            Self::BeginEditingQuery
            | Self::EndEditingQuery
            | Self::ChangeQuery
            | Self::ClearQuery
            | Self::ReturnQuery
            | Self::AttachmentInteractionQuery
            | Self::LinkInteractionQuery => EventStyle::Query,
            Self::BeginEditingNotify
            | Self::EndEditingNotify
            | Self::EndEditingWithReasonNotify
            | Self::ChangeNotify
            | Self::SelectionChangeNotify => EventStyle::Notify,
        }
    }

    /// Whether the hook's result permits or forbids an action.
    pub fn is_query(self) -> bool {
        self.style() == EventStyle::Query
    }

    /// The hook name, e.g. `"should-begin-editing"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::BeginEditingQuery => "should-begin-editing",
            Self::BeginEditingNotify => "did-begin-editing",
            Self::EndEditingQuery => "should-end-editing",
            Self::EndEditingNotify => "did-end-editing",
            Self::EndEditingWithReasonNotify => "did-end-editing-with-reason",
            Self::ChangeQuery => "should-change",
            Self::ChangeNotify => "did-change",
            Self::SelectionChangeNotify => "did-change-selection",
            Self::ClearQuery => "should-clear",
            Self::ReturnQuery => "should-return",
            Self::AttachmentInteractionQuery => "should-interact-with-attachment",
            Self::LinkInteractionQuery => "should-interact-with-url",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EventKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::UnknownEventKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_and_notify_split() {
        let queries = EventKind::ALL.iter().filter(|k| k.is_query()).count();
        assert_eq!(queries, 7);
        assert_eq!(EventKind::ReturnQuery.style(), EventStyle::Query);
        assert_eq!(EventKind::SelectionChangeNotify.style(), EventStyle::Notify);
        assert_eq!(EventKind::EndEditingWithReasonNotify.style(), EventStyle::Notify);
    }

    #[test]
    fn test_flavor_interfaces_overlap() {
        assert!(Flavor::Field.supports(EventKind::ClearQuery));
        assert!(Flavor::Field.supports(EventKind::EndEditingWithReasonNotify));
        assert!(!Flavor::Field.supports(EventKind::ChangeNotify));
        assert!(!Flavor::Field.supports(EventKind::LinkInteractionQuery));

        assert!(Flavor::View.supports(EventKind::AttachmentInteractionQuery));
        assert!(Flavor::View.supports(EventKind::ChangeNotify));
        assert!(!Flavor::View.supports(EventKind::ReturnQuery));
        assert!(!Flavor::View.supports(EventKind::ClearQuery));

        // Every kind belongs to at least one flavor.
        for kind in EventKind::ALL {
            assert!(Flavor::Field.supports(kind) || Flavor::View.supports(kind));
        }
    }

    #[test]
    fn test_parse_hook_name() {
        for kind in EventKind::ALL {
            assert_eq!(kind.name().parse::<EventKind>().unwrap(), kind);
        }
        assert_eq!(
            "should-dance".parse::<EventKind>(),
            Err(Error::UnknownEventKind("should-dance".to_string()))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(EventKind::ChangeQuery.to_string(), "should-change");
        assert_eq!(Flavor::View.to_string(), "text-view");
    }
}
