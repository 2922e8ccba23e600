//! Entity id newtypes
//!
//! Transactions and goals both carry uuid-backed ids. The newtypes keep the
//! two from being swapped at a call site, and the display form carries a
//! short prefix ("txn-", "goal-") so ids stay readable in listings.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Mint a fresh random id
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// The raw uuid
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Whether a user-typed string refers to this id.
            ///
            /// Accepts the display form, the bare uuid, or a uuid prefix of
            /// at least four hex characters, each with or without the
            /// display tag. Matching ignores case.
            pub fn matches(&self, input: &str) -> bool {
                let input = input.trim();
                let hex = input.strip_prefix($prefix).unwrap_or(input);
                let hex = hex.to_ascii_lowercase();
                let full = self.0.to_string();
                full == hex || (hex.len() >= 4 && full.starts_with(&hex))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $prefix, &self.0.to_string()[..8])
            }
        }
    };
}

entity_id!(
    /// Identifier of one recorded transaction
    TransactionId,
    "txn-"
);
entity_id!(
    /// Identifier of one savings goal
    GoalId,
    "goal-"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_ids_differ() {
        assert_ne!(TransactionId::new(), TransactionId::new());
        assert!(!GoalId::new().as_uuid().is_nil());
    }

    #[test]
    fn test_display_form() {
        let txn = TransactionId::new().to_string();
        assert!(txn.starts_with("txn-"));
        assert_eq!(txn.len(), "txn-".len() + 8);

        let goal = GoalId::new().to_string();
        assert!(goal.starts_with("goal-"));
        assert_eq!(goal.len(), "goal-".len() + 8);
    }

    #[test]
    fn test_matches_accepted_forms() {
        let id = GoalId::new();
        let full = id.as_uuid().to_string();

        assert!(id.matches(&id.to_string()));
        assert!(id.matches(&full));
        assert!(id.matches(&full[..6]));
        assert!(id.matches(&format!("goal-{}", full[..6].to_uppercase())));
        assert!(id.matches(&format!("  {}  ", id)));
    }

    #[test]
    fn test_matches_rejected_forms() {
        let id = TransactionId::new();
        let full = id.as_uuid().to_string();

        // Under four characters is too ambiguous to resolve
        assert!(!id.matches(&full[..3]));
        assert!(!id.matches(""));
        assert!(!id.matches("txn-zzzz"));
    }

    #[test]
    fn test_serde_round_trip_is_transparent() {
        let id = TransactionId::new();
        let json = serde_json::to_string(&id).unwrap();
        // Serializes as the bare uuid string
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));
        let back: TransactionId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_entity_ids_are_distinct_types() {
        // TransactionId and GoalId cannot be compared or assigned across;
        // only their raw uuids can
        assert_ne!(TransactionId::new().as_uuid(), GoalId::new().as_uuid());
    }
}
