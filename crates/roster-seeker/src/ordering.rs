//! Ordering types for sorting listings.
//!
//! Provides [`Dir`] for sort direction and [`OrderBy`] for field-based
//! ordering. A listing's ordering description is a `Vec<OrderBy>`, primary
//! key first.

use std::cmp::Ordering;

use serde::Serialize;

use crate::field::Field;
use crate::traits::Seekable;
use crate::value::{compare_values, Value};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Applies this direction to an ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single ordering clause specifying a field and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderBy {
    /// The field to sort by.
    pub field: Field,
    /// The sort direction.
    pub dir: Dir,
}

impl OrderBy {
    /// Creates a new ascending ordering for the given field.
    pub fn asc(field: Field) -> Self {
        OrderBy {
            field,
            dir: Dir::Asc,
        }
    }

    /// Creates a new descending ordering for the given field.
    pub fn desc(field: Field) -> Self {
        OrderBy {
            field,
            dir: Dir::Desc,
        }
    }

    /// Compares two values according to this ordering.
    ///
    /// Returns `None` if the values cannot be compared. Missing values sort
    /// last in both directions.
    pub fn compare(&self, a: &Value<'_>, b: &Value<'_>) -> Option<Ordering> {
        match (a.is_none(), b.is_none()) {
            (true, false) => Some(Ordering::Greater),
            (false, true) => Some(Ordering::Less),
            _ => compare_values(a, b).map(|ordering| self.dir.apply(ordering)),
        }
    }
}

/// Compares two items using a list of ordering clauses.
///
/// Uses the first clause as the primary sort key, the second to break ties,
/// and so on. If all clauses compare equal, returns `Equal`.
pub fn compare_by_orderings<T: Seekable>(a: &T, b: &T, orderings: &[OrderBy]) -> Ordering {
    for order_by in orderings {
        let val_a = a.seeker_field_value(order_by.field);
        let val_b = b.seeker_field_value(order_by.field);

        if let Some(ordering) = order_by.compare(&val_a, &val_b) {
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
    }
    Ordering::Equal
}

/// Stable-sorts `items` by `orderings`.
pub fn sort_by_orderings<T: Seekable>(items: &mut [T], orderings: &[OrderBy]) {
    items.sort_by(|a, b| compare_by_orderings(a, b, orderings));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Timestamp;

    #[derive(Debug)]
    struct Item {
        id: &'static str,
        name: Option<&'static str>,
        created: i64,
    }

    impl Seekable for Item {
        fn seeker_field_value(&self, field: Field) -> Value<'_> {
            match field {
                Field::Id => Value::Text(self.id),
                Field::FirstName => Value::optional(self.name),
                Field::CreatedAt => Value::Timestamp(Timestamp(self.created)),
                _ => Value::None,
            }
        }
    }

    fn item(id: &'static str, name: Option<&'static str>, created: i64) -> Item {
        Item { id, name, created }
    }

    #[test]
    fn dir_apply() {
        assert_eq!(Dir::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(Dir::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(Dir::Desc.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn dir_display() {
        assert_eq!(Dir::Asc.to_string(), "asc");
        assert_eq!(Dir::Desc.to_string(), "desc");
    }

    #[test]
    fn missing_values_sort_last_in_both_directions() {
        let some = Value::Text("a");
        let none = Value::None;
        assert_eq!(OrderBy::asc(Field::FirstName).compare(&none, &some), Some(Ordering::Greater));
        assert_eq!(OrderBy::desc(Field::FirstName).compare(&none, &some), Some(Ordering::Greater));
    }

    #[test]
    fn compare_by_multiple_orderings() {
        let a = item("1", Some("Ada"), 10);
        let b = item("2", Some("Ada"), 20);
        let orderings = [OrderBy::asc(Field::FirstName), OrderBy::desc(Field::CreatedAt)];

        assert_eq!(compare_by_orderings(&a, &b, &orderings), Ordering::Greater);
        assert_eq!(compare_by_orderings(&a, &b, &[]), Ordering::Equal);
    }

    #[test]
    fn sort_is_stable() {
        let mut items = vec![
            item("3", Some("Bea"), 1),
            item("1", None, 1),
            item("2", Some("Ada"), 1),
            item("4", Some("Ada"), 1),
        ];
        sort_by_orderings(&mut items, &[OrderBy::asc(Field::FirstName)]);
        let ids: Vec<_> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["2", "4", "3", "1"]);
    }
}
