//! Field access for evaluating predicates and orderings.

use crate::field::Field;
use crate::value::Value;

/// Trait for records that predicates and orderings can be evaluated against.
///
/// # Example
///
/// ```
/// use roster_seeker::{Field, Seekable, Value};
///
/// struct Member {
///     email: String,
///     image: Option<String>,
/// }
///
/// impl Seekable for Member {
///     fn seeker_field_value(&self, field: Field) -> Value<'_> {
///         match field {
///             Field::Email => Value::Text(&self.email),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
pub trait Seekable {
    /// Returns the value of a field for comparison.
    ///
    /// Returns [`Value::None`] if the record has no value for `field`.
    fn seeker_field_value(&self, field: Field) -> Value<'_>;
}
