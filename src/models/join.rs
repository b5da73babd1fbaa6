//! Join model for explore relationships between dbt models

use super::enums::{LookerJoinRelationship, LookerJoinType};
use serde::{Deserialize, Serialize};

/// Directed join from the owning model to the model it is keyed by
///
/// Declared in the model's `meta.looker.joins` mapping:
///
/// ```yaml
/// meta:
///   looker:
///     joins:
///       customers:
///         type: left_outer
///         relationship: many_to_one
///         left_on: customer_id
///         right_on: id
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LookerJoin {
    #[serde(rename = "type", default)]
    pub join_type: LookerJoinType,
    #[serde(default)]
    pub relationship: LookerJoinRelationship,
    /// Column of the owning model
    pub left_on: String,
    /// Column of the joined model
    pub right_on: String,
}

impl LookerJoin {
    pub fn new(left_on: impl Into<String>, right_on: impl Into<String>) -> Self {
        Self {
            join_type: LookerJoinType::default(),
            relationship: LookerJoinRelationship::default(),
            left_on: left_on.into(),
            right_on: right_on.into(),
        }
    }

    pub fn with_type(mut self, join_type: LookerJoinType) -> Self {
        self.join_type = join_type;
        self
    }

    pub fn with_relationship(mut self, relationship: LookerJoinRelationship) -> Self {
        self.relationship = relationship;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_defaults_from_json() {
        let join: LookerJoin =
            serde_json::from_str(r#"{"left_on": "customer_id", "right_on": "id"}"#).unwrap();
        assert_eq!(join.join_type, LookerJoinType::LeftOuter);
        assert_eq!(join.relationship, LookerJoinRelationship::ManyToOne);
    }

    #[test]
    fn test_join_explicit_values() {
        let join: LookerJoin = serde_json::from_str(
            r#"{"type": "inner", "relationship": "one_to_one", "left_on": "a", "right_on": "b"}"#,
        )
        .unwrap();
        assert_eq!(join.join_type, LookerJoinType::Inner);
        assert_eq!(join.relationship, LookerJoinRelationship::OneToOne);
    }
}
