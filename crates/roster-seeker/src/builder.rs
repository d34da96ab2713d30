//! Filter specification to predicate translation.

use tracing::trace;

use crate::clause::{Clause, ClauseValue, Pattern};
use crate::error::{Result, SeekerError};
use crate::field::Field;
use crate::filter::{FilterArg, FilterRule, FilterSpec};
use crate::op::Op;
use crate::predicate::Predicate;

/// Builds the predicate selecting the members of `org_id` that satisfy
/// `filter`.
///
/// The result always starts with the organization membership clause,
/// followed by one clause per present filter entry in [`FILTER_RULES`]
/// order. Building is pure and deterministic.
///
/// Text operators escape their input: `firstName_contains: "a.b"` matches
/// the literal text `a.b`, never `axb`.
///
/// [`FILTER_RULES`]: crate::FILTER_RULES
///
/// # Example
///
/// ```
/// use roster_seeker::{build, Field, FilterSpec, Op};
///
/// let filter = FilterSpec {
///     first_name_starts_with: Some("Jo".into()),
///     ..FilterSpec::default()
/// };
/// let predicate = build("org-1", Some(&filter)).unwrap();
///
/// assert_eq!(predicate.len(), 2);
/// assert_eq!(predicate.clauses()[0].field, Field::JoinedOrganizations);
/// assert_eq!(predicate.clauses()[1].op, Op::StartsWith);
/// ```
pub fn build(org_id: &str, filter: Option<&FilterSpec>) -> Result<Predicate> {
    let mut predicate = membership(org_id);
    if let Some(spec) = filter {
        for (rule, arg) in spec.entries() {
            predicate = predicate.push(rule.clause(arg)?);
        }
    }
    trace!(org_id, clauses = predicate.len(), "built member predicate");
    Ok(predicate)
}

/// The base predicate: membership in the organization's roster.
pub fn membership(org_id: &str) -> Predicate {
    Predicate::new().and_eq(Field::JoinedOrganizations, org_id)
}

impl FilterRule {
    /// Builds the clause this rule contributes for `arg`.
    pub fn clause(&self, arg: FilterArg<'_>) -> Result<Clause> {
        let value = match (self.op, arg) {
            (Op::Contains, FilterArg::One(term)) => Pattern::contains(term).map(ClauseValue::from),
            (Op::StartsWith, FilterArg::One(term)) => {
                Pattern::starts_with(term).map(ClauseValue::from)
            }
            (_, FilterArg::One(value)) => Ok(ClauseValue::from(value)),
            (_, FilterArg::Many(values)) => Ok(ClauseValue::from(values)),
        }
        .map_err(|source| SeekerError::InvalidPattern {
            key: self.key,
            source,
        })?;
        Ok(Clause::new(self.field, self.op, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FILTER_RULES;

    fn rule(key: &str) -> &'static FilterRule {
        FILTER_RULES.iter().find(|r| r.key == key).unwrap()
    }

    #[test]
    fn no_filter_is_membership_only() {
        assert_eq!(build("org-1", None).unwrap(), membership("org-1"));
        assert_eq!(
            build("org-1", Some(&FilterSpec::default())).unwrap(),
            membership("org-1")
        );
    }

    #[test]
    fn rule_clauses() {
        let clause = rule("id_in")
            .clause(FilterArg::Many(&["a".to_string()]))
            .unwrap();
        assert_eq!(clause, Clause::new(Field::Id, Op::In, vec!["a".to_string()]));

        let clause = rule("admin_for").clause(FilterArg::One("org-9")).unwrap();
        assert_eq!(clause, Clause::new(Field::AdminFor, Op::Eq, "org-9"));

        let clause = rule("email_starts_with").clause(FilterArg::One("ada")).unwrap();
        assert_eq!(
            clause.value,
            ClauseValue::Pattern(Pattern::starts_with("ada").unwrap())
        );
    }

    #[test]
    fn several_operators_on_one_field() {
        let filter = FilterSpec {
            first_name_not: Some("Bob".into()),
            first_name_contains: Some("o".into()),
            ..FilterSpec::default()
        };
        let predicate = build("org-1", Some(&filter)).unwrap();
        let ops: Vec<_> = predicate.clauses().iter().map(|c| (c.field, c.op)).collect();
        assert_eq!(
            ops,
            vec![
                (Field::JoinedOrganizations, Op::Eq),
                (Field::FirstName, Op::Ne),
                (Field::FirstName, Op::Contains),
            ]
        );
    }

    #[test]
    fn empty_sets_are_accepted() {
        let filter = FilterSpec {
            id_in: Some(vec![]),
            email_not_in: Some(vec![]),
            ..FilterSpec::default()
        };
        let predicate = build("org-1", Some(&filter)).unwrap();
        assert_eq!(predicate.len(), 3);
    }

    #[test]
    fn oversized_pattern_is_rejected() {
        let filter = FilterSpec {
            first_name_contains: Some("k".repeat(200_000)),
            ..FilterSpec::default()
        };
        let err = build("org-1", Some(&filter)).unwrap_err();
        assert!(matches!(
            err,
            SeekerError::InvalidPattern {
                key: "firstName_contains",
                ..
            }
        ));
    }
}
