//! Clause types for predicates.
//!
//! A [`Clause`] represents a single field predicate: a field, an operator,
//! and a comparison value. Clauses are evaluated with array semantics: on a
//! multi-valued field, a positive operator holds if *any* element satisfies
//! it and a negative operator (`Ne`, `NotIn`) holds if *no* element violates
//! it. A missing field therefore satisfies `Ne` and `NotIn` and nothing else.

use regex::{Regex, RegexBuilder};
use serde::{Serialize, Serializer};

use crate::field::Field;
use crate::op::Op;
use crate::value::Value;

/// A single field predicate.
///
/// # Example
///
/// ```
/// use roster_seeker::{Clause, Field, Op, Value};
///
/// let clause = Clause::new(Field::Email, Op::Eq, "ada@example.com");
/// assert!(clause.matches(&Value::Text("ada@example.com")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clause {
    /// The field to compare.
    pub field: Field,
    /// The comparison operator.
    pub op: Op,
    /// The value to compare against.
    pub value: ClauseValue,
}

impl Clause {
    /// Creates a new clause.
    pub fn new(field: Field, op: Op, value: impl Into<ClauseValue>) -> Self {
        Clause {
            field,
            op,
            value: value.into(),
        }
    }

    /// Evaluates this clause against a field value.
    ///
    /// Returns `false` when the operator and the clause value disagree
    /// (e.g. `In` with a single text value).
    pub fn matches(&self, field_value: &Value<'_>) -> bool {
        let mut values = field_value.texts();
        match (self.op, &self.value) {
            (Op::Eq, ClauseValue::Text(expected)) => values.any(|v| v == expected.as_str()),
            (Op::Ne, ClauseValue::Text(expected)) => !values.any(|v| v == expected.as_str()),
            (Op::In, ClauseValue::Set(set)) => values.any(|v| set.iter().any(|s| s == v)),
            (Op::NotIn, ClauseValue::Set(set)) => !values.any(|v| set.iter().any(|s| s == v)),
            (Op::Contains | Op::StartsWith, ClauseValue::Pattern(pattern)) => {
                values.any(|v| pattern.is_match(v))
            }
            _ => false,
        }
    }
}

/// Owned value stored in a clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ClauseValue {
    /// Single text value (`Eq`, `Ne`).
    Text(String),
    /// Set of text values (`In`, `NotIn`). May be empty.
    Set(Vec<String>),
    /// Compiled case-insensitive pattern (`Contains`, `StartsWith`).
    Pattern(Pattern),
}

impl From<String> for ClauseValue {
    fn from(s: String) -> Self {
        ClauseValue::Text(s)
    }
}

impl From<&str> for ClauseValue {
    fn from(s: &str) -> Self {
        ClauseValue::Text(s.to_string())
    }
}

impl From<Vec<String>> for ClauseValue {
    fn from(v: Vec<String>) -> Self {
        ClauseValue::Set(v)
    }
}

impl From<&[String]> for ClauseValue {
    fn from(v: &[String]) -> Self {
        ClauseValue::Set(v.to_vec())
    }
}

impl From<Pattern> for ClauseValue {
    fn from(p: Pattern) -> Self {
        ClauseValue::Pattern(p)
    }
}

/// A case-insensitive match pattern built from user input.
///
/// The input term is escaped, so it always matches literally. Prefix
/// patterns carry a leading `^` anchor. Two patterns are equal when their
/// sources are equal.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Builds a substring pattern for `term`.
    pub fn contains(term: &str) -> Result<Self, regex::Error> {
        Self::compile(regex::escape(term))
    }

    /// Builds a prefix pattern for `term`.
    pub fn starts_with(term: &str) -> Result<Self, regex::Error> {
        Self::compile(format!("^{}", regex::escape(term)))
    }

    fn compile(source: String) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(&source).case_insensitive(true).build()?;
        Ok(Pattern { source, regex })
    }

    /// Returns the pattern source handed to the matching facility.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns `true` if `text` matches this pattern, ignoring case.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern_clause(op: Op, term: &str) -> Clause {
        let pattern = match op {
            Op::StartsWith => Pattern::starts_with(term),
            _ => Pattern::contains(term),
        };
        Clause::new(Field::FirstName, op, pattern.unwrap())
    }

    #[test]
    fn text_eq_is_case_sensitive() {
        let clause = Clause::new(Field::FirstName, Op::Eq, "Ada");
        assert!(clause.matches(&Value::Text("Ada")));
        assert!(!clause.matches(&Value::Text("ada")));
        assert!(!clause.matches(&Value::None));
    }

    #[test]
    fn text_ne_matches_missing() {
        let clause = Clause::new(Field::FirstName, Op::Ne, "Ada");
        assert!(!clause.matches(&Value::Text("Ada")));
        assert!(clause.matches(&Value::Text("Grace")));
        assert!(clause.matches(&Value::None));
    }

    #[test]
    fn set_in() {
        let clause = Clause::new(Field::Id, Op::In, vec!["1".to_string(), "2".to_string()]);
        assert!(clause.matches(&Value::Text("1")));
        assert!(!clause.matches(&Value::Text("3")));
    }

    #[test]
    fn empty_set_in_matches_nothing() {
        let clause = Clause::new(Field::Id, Op::In, Vec::<String>::new());
        assert!(!clause.matches(&Value::Text("1")));
        assert!(!clause.matches(&Value::None));
    }

    #[test]
    fn empty_set_not_in_matches_everything() {
        let clause = Clause::new(Field::Id, Op::NotIn, Vec::<String>::new());
        assert!(clause.matches(&Value::Text("1")));
        assert!(clause.matches(&Value::None));
    }

    #[test]
    fn contains_ignores_case() {
        let clause = pattern_clause(Op::Contains, "jo");
        assert!(clause.matches(&Value::Text("John")));
        assert!(clause.matches(&Value::Text("MOJO")));
        assert!(!clause.matches(&Value::Text("Ada")));
    }

    #[test]
    fn starts_with_is_anchored() {
        let clause = pattern_clause(Op::StartsWith, "John");
        assert!(clause.matches(&Value::Text("Johnson")));
        assert!(clause.matches(&Value::Text("johnny")));
        assert!(!clause.matches(&Value::Text("AJohnson")));
    }

    #[test]
    fn pattern_input_is_literal() {
        let clause = pattern_clause(Op::Contains, "a.c");
        assert!(clause.matches(&Value::Text("xa.cx")));
        assert!(!clause.matches(&Value::Text("abc")));

        let clause = pattern_clause(Op::StartsWith, "(x");
        assert!(clause.matches(&Value::Text("(xyz")));
    }

    #[test]
    fn list_values_use_any_semantics() {
        let titles = vec!["Spring Gala".to_string(), "Board meeting".to_string()];
        let value = Value::list(&titles);

        assert!(pattern_clause(Op::Contains, "gala").matches(&value));
        assert!(Clause::new(Field::AdminFor, Op::Eq, "Board meeting").matches(&value));
        assert!(!Clause::new(Field::AdminFor, Op::Ne, "Board meeting").matches(&value));
    }

    #[test]
    fn operator_value_mismatch_doesnt_match() {
        let clause = Clause::new(Field::Id, Op::In, "1");
        assert!(!clause.matches(&Value::Text("1")));
    }

    #[test]
    fn pattern_equality_uses_source() {
        assert_eq!(Pattern::contains("jo").unwrap(), Pattern::contains("jo").unwrap());
        assert_ne!(Pattern::contains("jo").unwrap(), Pattern::starts_with("jo").unwrap());
        assert_eq!(Pattern::starts_with("a+b").unwrap().source(), r"^a\+b");
    }
}
