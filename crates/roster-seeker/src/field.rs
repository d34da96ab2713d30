//! Member fields addressable by filters and orderings.
//!
//! A [`Field`] has three names:
//! - its logical name (`firstName`), used in error messages and orderings
//! - its key stem (`firstName`, `admin_for`), used to build flat filter keys
//! - its store path (`firstName`, `registeredEvents.title`), used by store
//!   adapters that translate predicates into their own query language

use serde::Serialize;

use crate::op::Op;

/// A queryable member field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Id,
    FirstName,
    LastName,
    Email,
    AppLanguageCode,
    /// Organizations the member administers.
    AdminFor,
    /// Titles of the events the member registered for.
    EventTitle,
    /// Organizations the member belongs to. Only used by the base clause.
    JoinedOrganizations,
    /// Creation time. Only used by orderings.
    CreatedAt,
}

impl Field {
    /// Fields a caller may filter on.
    pub const FILTERABLE: [Field; 7] = [
        Field::Id,
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::AppLanguageCode,
        Field::AdminFor,
        Field::EventTitle,
    ];

    /// Returns the logical field name.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::AppLanguageCode => "appLanguageCode",
            Field::AdminFor => "adminFor",
            Field::EventTitle => "eventTitle",
            Field::JoinedOrganizations => "joinedOrganizations",
            Field::CreatedAt => "createdAt",
        }
    }

    /// Returns the dotted path of this field in a stored member document.
    pub fn path(self) -> &'static str {
        match self {
            Field::Id => "_id",
            Field::EventTitle => "registeredEvents.title",
            other => other.as_str(),
        }
    }

    /// Returns the stem used for flat filter keys.
    pub fn key_stem(self) -> &'static str {
        match self {
            Field::AdminFor => "admin_for",
            Field::EventTitle => "event_title",
            other => other.as_str(),
        }
    }

    /// Returns the flat filter key for this field and operator
    /// (`firstName_contains`, `id_not_in`, `admin_for`).
    pub fn key(self, op: Op) -> String {
        format!("{}{}", self.key_stem(), op.key_suffix())
    }

    /// Returns `true` if filters may apply `op` to this field.
    pub fn supports(self, op: Op) -> bool {
        match self {
            Field::Id => !op.is_text_op(),
            Field::FirstName | Field::LastName | Field::Email | Field::AppLanguageCode => true,
            Field::AdminFor => op == Op::Eq,
            Field::EventTitle => op == Op::Contains,
            Field::JoinedOrganizations | Field::CreatedAt => false,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys() {
        assert_eq!(Field::Id.key(Op::Eq), "id");
        assert_eq!(Field::Id.key(Op::NotIn), "id_not_in");
        assert_eq!(Field::FirstName.key(Op::StartsWith), "firstName_starts_with");
        assert_eq!(Field::AdminFor.key(Op::Eq), "admin_for");
        assert_eq!(Field::EventTitle.key(Op::Contains), "event_title_contains");
    }

    #[test]
    fn paths() {
        assert_eq!(Field::Id.path(), "_id");
        assert_eq!(Field::EventTitle.path(), "registeredEvents.title");
        assert_eq!(Field::Email.path(), "email");
    }

    #[test]
    fn restricted_fields() {
        assert!(!Field::Id.supports(Op::Contains));
        assert!(Field::Id.supports(Op::NotIn));
        assert!(Field::AdminFor.supports(Op::Eq));
        assert!(!Field::AdminFor.supports(Op::Ne));
        assert!(Field::EventTitle.supports(Op::Contains));
        assert!(!Field::EventTitle.supports(Op::StartsWith));
        assert!(!Field::JoinedOrganizations.supports(Op::Eq));
    }

    #[test]
    fn text_fields_support_everything() {
        for field in [Field::FirstName, Field::LastName, Field::Email, Field::AppLanguageCode] {
            assert!(Op::ALL.iter().all(|op| field.supports(*op)), "{field}");
        }
    }
}
