//! Outcome type for update and delete operations.

use serde::{Deserialize, Serialize};

/// The result of an update-by-key or delete-by-key operation.
///
/// The legacy contract at the supervisor boundary is a plain boolean,
/// which cannot distinguish "no such row" from "the store rejected the
/// write". Repositories report the richer outcome and the supervisor
/// collapses it with [`MutationOutcome::applied`], so a future API
/// revision can surface the distinction without touching the data layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutationOutcome {
    /// The row existed and the statement affected it.
    Applied,
    /// No row with the given key existed; no mutation was issued, or the
    /// row vanished between the existence check and the statement.
    NotFound,
    /// The store rejected the statement; the fault was logged and
    /// swallowed. Carries the fault's message text.
    Faulted(String),
}

impl MutationOutcome {
    /// Collapse to the legacy boolean: `true` only for [`Applied`].
    ///
    /// [`Applied`]: MutationOutcome::Applied
    pub fn applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_applied_collapses_to_true() {
        assert!(MutationOutcome::Applied.applied());
        assert!(!MutationOutcome::NotFound.applied());
        assert!(!MutationOutcome::Faulted("deadlock detected".into()).applied());
    }
}
