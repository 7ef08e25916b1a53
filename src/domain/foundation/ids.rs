//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a decision record.
///
/// Assigned when the draft is created and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecisionId(Uuid);

impl DecisionId {
    /// Creates a new random DecisionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a DecisionId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for DecisionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DecisionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DecisionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_id_new_generates_unique_ids() {
        let a = DecisionId::new();
        let b = DecisionId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn decision_id_from_uuid_preserves_value() {
        let uuid = Uuid::new_v4();
        let id = DecisionId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
    }

    #[test]
    fn decision_id_parses_its_display_form() {
        let id = DecisionId::new();
        let parsed: DecisionId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn decision_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<DecisionId>().is_err());
    }

    #[test]
    fn decision_id_serializes_as_bare_string() {
        let uuid = Uuid::parse_str("6f1c2a4e-8c1b-4b4e-9a57-1f2d3c4b5a69").unwrap();
        let id = DecisionId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"6f1c2a4e-8c1b-4b4e-9a57-1f2d3c4b5a69\"");
    }
}
