//! Predicate tree and its in-memory evaluation.
//!
//! A [`Predicate`] is a conjunction of [`Clause`]s. Stores either evaluate
//! it directly against their records ([`Predicate::matches`],
//! [`Predicate::filter`]) or translate it into their own query language;
//! [`Predicate::to_document`] renders the document-store form.

use serde::Serialize;
use serde_json::{json, Value as Json};

use crate::clause::{Clause, ClauseValue};
use crate::field::Field;
use crate::op::Op;
use crate::traits::Seekable;

/// A conjunction of field clauses.
///
/// An empty predicate matches every item. Clauses are kept in insertion
/// order, so two predicates built from the same input compare equal.
///
/// # Example
///
/// ```
/// use roster_seeker::{Field, Predicate};
///
/// let predicate = Predicate::new()
///     .and_eq(Field::JoinedOrganizations, "org-1")
///     .and_not_in(Field::Id, vec!["u1".to_string()]);
/// assert_eq!(predicate.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Predicate {
    clauses: Vec<Clause>,
}

impl Predicate {
    /// Creates a new empty predicate.
    pub fn new() -> Self {
        Predicate::default()
    }

    /// Adds a clause.
    pub fn and(mut self, field: Field, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.clauses.push(Clause::new(field, op, value));
        self
    }

    /// Adds an already-built clause.
    pub fn push(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    /// Adds an equality clause.
    pub fn and_eq(self, field: Field, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Eq, value)
    }

    /// Adds a not-equal clause.
    pub fn and_ne(self, field: Field, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Ne, value)
    }

    /// Adds an in-set clause.
    pub fn and_in<I>(self, field: Field, values: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.and(field, Op::In, values.into_iter().collect::<Vec<_>>())
    }

    /// Adds a not-in-set clause.
    pub fn and_not_in<I>(self, field: Field, values: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.and(field, Op::NotIn, values.into_iter().collect::<Vec<_>>())
    }

    /// Returns the clauses.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Returns the number of clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Returns `true` if this predicate has no clauses (matches everything).
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Tests if a single item matches every clause.
    pub fn matches<T: Seekable>(&self, item: &T) -> bool {
        self.clauses
            .iter()
            .all(|clause| clause.matches(&item.seeker_field_value(clause.field)))
    }

    /// Returns the matching items, preserving input order.
    pub fn filter<'a, T: Seekable>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }

    /// Counts the matching items.
    pub fn count<T: Seekable>(&self, items: &[T]) -> usize {
        items.iter().filter(|item| self.matches(*item)).count()
    }

    /// Renders this predicate as a document-store filter.
    ///
    /// ```
    /// use roster_seeker::{Field, Predicate};
    /// use serde_json::json;
    ///
    /// let doc = Predicate::new().and_eq(Field::Email, "a@b.c").to_document();
    /// assert_eq!(doc, json!({ "$and": [{ "email": { "$eq": "a@b.c" } }] }));
    /// ```
    pub fn to_document(&self) -> Json {
        let terms: Vec<Json> = self.clauses.iter().map(clause_document).collect();
        json!({ "$and": terms })
    }
}

fn clause_document(clause: &Clause) -> Json {
    let condition = match (&clause.value, clause.op) {
        (ClauseValue::Pattern(pattern), _) => {
            json!({ "$regex": pattern.source(), "$options": "i" })
        }
        (value, Op::Eq) => json!({ "$eq": value }),
        (value, Op::Ne) => json!({ "$ne": value }),
        (value, Op::In) => json!({ "$in": value }),
        (value, Op::NotIn) => json!({ "$nin": value }),
        (value, Op::Contains | Op::StartsWith) => json!({ "$eq": value }),
    };
    let mut term = serde_json::Map::new();
    term.insert(clause.field.path().to_string(), condition);
    Json::Object(term)
}
