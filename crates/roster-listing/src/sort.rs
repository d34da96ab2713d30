//! Order-by specifications and their resolution into orderings.

use roster_seeker::{Dir, Field, OrderBy};
use serde::{Deserialize, Serialize};

/// Client-facing sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderByInput {
    #[serde(rename = "id_ASC")]
    IdAsc,
    #[serde(rename = "id_DESC")]
    IdDesc,
    #[serde(rename = "firstName_ASC")]
    FirstNameAsc,
    #[serde(rename = "firstName_DESC")]
    FirstNameDesc,
    #[serde(rename = "lastName_ASC")]
    LastNameAsc,
    #[serde(rename = "lastName_DESC")]
    LastNameDesc,
    #[serde(rename = "email_ASC")]
    EmailAsc,
    #[serde(rename = "email_DESC")]
    EmailDesc,
    #[serde(rename = "appLanguageCode_ASC")]
    AppLanguageCodeAsc,
    #[serde(rename = "appLanguageCode_DESC")]
    AppLanguageCodeDesc,
    #[serde(rename = "createdAt_ASC")]
    CreatedAtAsc,
    #[serde(rename = "createdAt_DESC")]
    CreatedAtDesc,
}

impl OrderByInput {
    /// Returns the field and direction this key sorts by.
    pub fn order_by(self) -> OrderBy {
        let (field, dir) = match self {
            OrderByInput::IdAsc => (Field::Id, Dir::Asc),
            OrderByInput::IdDesc => (Field::Id, Dir::Desc),
            OrderByInput::FirstNameAsc => (Field::FirstName, Dir::Asc),
            OrderByInput::FirstNameDesc => (Field::FirstName, Dir::Desc),
            OrderByInput::LastNameAsc => (Field::LastName, Dir::Asc),
            OrderByInput::LastNameDesc => (Field::LastName, Dir::Desc),
            OrderByInput::EmailAsc => (Field::Email, Dir::Asc),
            OrderByInput::EmailDesc => (Field::Email, Dir::Desc),
            OrderByInput::AppLanguageCodeAsc => (Field::AppLanguageCode, Dir::Asc),
            OrderByInput::AppLanguageCodeDesc => (Field::AppLanguageCode, Dir::Desc),
            OrderByInput::CreatedAtAsc => (Field::CreatedAt, Dir::Asc),
            OrderByInput::CreatedAtDesc => (Field::CreatedAt, Dir::Desc),
        };
        OrderBy { field, dir }
    }
}

impl std::str::FromStr for OrderByInput {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_value(serde_json::Value::String(s.to_string()))
    }
}

/// Turns a caller's order-by into the ordering handed to the store.
pub trait SortResolver: Send + Sync {
    fn resolve(&self, order_by: Option<&OrderByInput>) -> Vec<OrderBy>;
}

/// Sorts by the single requested key; no key leaves the store's natural
/// order.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSortResolver;

impl SortResolver for DefaultSortResolver {
    fn resolve(&self, order_by: Option<&OrderByInput>) -> Vec<OrderBy> {
        order_by.map(|key| vec![key.order_by()]).unwrap_or_default()
    }
}
