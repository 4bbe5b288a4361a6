//! Configuration applied to assembled delegates.

/// What an unset query hook answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QueryDefault {
    /// Permit the action (the platform's own behavior).
    #[default]
    Allow,
    /// Forbid the action, e.g. for a read-only delegate.
    Deny,
}

impl QueryDefault {
    /// The answer given to the widget.
    pub fn allows(self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Configuration for an assembled delegate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DelegateConfig {
    /// Name reported in log output and `Debug`. `None` leaves the delegate anonymous.
    pub name: Option<String>,
    /// Answer for query hooks that have no callback.
    pub unset_query: QueryDefault,
}

impl DelegateConfig {
    /// Create a new configuration with the given name.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Set the answer for unset query hooks.
    pub fn with_unset_query(mut self, unset_query: QueryDefault) -> Self {
        self.unset_query = unset_query;
        self
    }

    /// Name for log output.
    pub(crate) fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("(unnamed)")
    }
}
