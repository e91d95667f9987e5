use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::ModelError;
use crate::field::FieldId;

/// Comparison applied by a conditional rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operator {
    Equals,
    NotEquals,
    Contains,
    GreaterThan,
    LessThan,
}

impl Operator {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Equals,
            Self::NotEquals,
            Self::Contains,
            Self::GreaterThan,
            Self::LessThan,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equals => "equals",
            Operator::NotEquals => "notEquals",
            Operator::Contains => "contains",
            Operator::GreaterThan => "greaterThan",
            Operator::LessThan => "lessThan",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Operator::all()
            .iter()
            .copied()
            .find(|op| op.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::UnknownOperator(s.to_string()))
    }
}

/// Single-level visibility dependency on one other field.
///
/// Rules reference exactly one field and never chain, so a rule set
/// cannot form a cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalRule {
    pub field_id: FieldId,
    pub operator: Operator,
    pub value: Value,
}

impl ConditionalRule {
    pub fn new(field_id: FieldId, operator: Operator, value: impl Into<Value>) -> Self {
        Self {
            field_id,
            operator,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_round_trips_wire_tags() {
        for op in Operator::all() {
            assert_eq!(op.as_str().parse::<Operator>().unwrap(), *op);
        }
        assert!("between".parse::<Operator>().is_err());
    }
}
