//! Comparison operators for predicate clauses.
//!
//! The [`Op`] enum defines the six operators a member filter can carry.
//! Each operator also owns the suffix it uses in flat filter keys
//! (`firstName_starts_with`, `id_not_in`, ...).

use serde::Serialize;

/// Comparison operator for a predicate clause.
///
/// Operators are grouped by the values they take:
/// - **Scalar**: `Eq`, `Ne` - compare against a single value
/// - **Set**: `In`, `NotIn` - compare against a list of values
/// - **Text**: `Contains`, `StartsWith` - case-insensitive pattern match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Op {
    /// Equal (exact match).
    Eq,
    /// Not equal.
    Ne,
    /// Value is one of the given set.
    In,
    /// Value is none of the given set.
    NotIn,
    /// Case-insensitive substring match.
    Contains,
    /// Case-insensitive prefix match, anchored at position 0.
    StartsWith,
}

impl Op {
    /// All operators, in the order filter rules are declared.
    pub const ALL: [Op; 6] = [
        Op::Eq,
        Op::Ne,
        Op::In,
        Op::NotIn,
        Op::Contains,
        Op::StartsWith,
    ];

    /// Returns `true` if this operator compares against a single value.
    pub fn is_scalar_op(self) -> bool {
        matches!(self, Op::Eq | Op::Ne)
    }

    /// Returns `true` if this operator compares against a set of values.
    pub fn is_set_op(self) -> bool {
        matches!(self, Op::In | Op::NotIn)
    }

    /// Returns `true` if this operator is a case-insensitive text match.
    pub fn is_text_op(self) -> bool {
        matches!(self, Op::Contains | Op::StartsWith)
    }

    /// Suffix appended to a field name to form a flat filter key.
    pub fn key_suffix(self) -> &'static str {
        match self {
            Op::Eq => "",
            Op::Ne => "_not",
            Op::In => "_in",
            Op::NotIn => "_not_in",
            Op::Contains => "_contains",
            Op::StartsWith => "_starts_with",
        }
    }

    /// Returns the display name of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "eq",
            Op::Ne => "ne",
            Op::In => "in",
            Op::NotIn => "notIn",
            Op::Contains => "contains",
            Op::StartsWith => "startsWith",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
