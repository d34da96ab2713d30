//! Runtime value types for field comparison.
//!
//! The [`Value`] enum represents the value of a member field at evaluation
//! time. Relation fields (`adminFor`, `registeredEvents.title`) hold several
//! values at once and are represented as [`Value::List`].

use std::cmp::Ordering;

/// Runtime value for comparison, borrowed from the source record.
///
/// # Example
///
/// ```
/// use roster_seeker::{Field, Value};
///
/// struct Member {
///     first_name: String,
///     admin_for: Vec<String>,
/// }
///
/// fn accessor(member: &Member, field: Field) -> Value<'_> {
///     match field {
///         Field::FirstName => Value::Text(&member.first_name),
///         Field::AdminFor => Value::list(&member.admin_for),
///         _ => Value::None,
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// Single text value (borrowed).
    Text(&'a str),
    /// Several text values, e.g. the ids of a to-many relation.
    List(Vec<&'a str>),
    /// Timestamp value.
    Timestamp(Timestamp),
    /// Field not present or null.
    None,
}

impl<'a> Value<'a> {
    /// Builds a [`Value::List`] from owned strings.
    pub fn list<S: AsRef<str>>(items: &'a [S]) -> Self {
        Value::List(items.iter().map(AsRef::as_ref).collect())
    }

    /// Builds a [`Value::Text`] from an optional string.
    pub fn optional(value: Option<&'a str>) -> Self {
        value.map(Value::Text).unwrap_or(Value::None)
    }

    /// Returns `true` if this is a `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Iterates the text values held by this value.
    ///
    /// A single text yields itself, a list yields its elements, anything else
    /// yields nothing.
    pub fn texts(&self) -> Box<dyn Iterator<Item = &'a str> + '_> {
        match self {
            Value::Text(s) => Box::new(std::iter::once(*s)),
            Value::List(items) => Box::new(items.iter().copied()),
            _ => Box::new(std::iter::empty()),
        }
    }
}

/// Timestamp value represented as milliseconds since Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

/// Compares two values of the same kind.
///
/// Lists compare by their first element. `None` sorts last. Returns `None`
/// on a kind mismatch.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Option<Ordering> {
    match (a, b) {
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        (Value::Timestamp(a), Value::Timestamp(b)) => Some(a.cmp(b)),
        (Value::List(a), Value::List(b)) => Some(a.first().cmp(&b.first())),

        (Value::None, Value::None) => Some(Ordering::Equal),
        (Value::None, _) => Some(Ordering::Greater),
        (_, Value::None) => Some(Ordering::Less),

        _ => None,
    }
}
