//! Member records as stored, and as returned to clients.

use roster_seeker::{Field, Seekable, Timestamp, Value};
use serde::{Deserialize, Serialize};

fn default_language() -> String {
    "en".to_string()
}

/// An event a member registered for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRef {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
}

/// A member as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRecord {
    #[serde(alias = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
    /// Path of the profile image, relative to the API root.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default = "default_language")]
    pub app_language_code: String,
    #[serde(default)]
    pub joined_organizations: Vec<String>,
    #[serde(default)]
    pub admin_for: Vec<String>,
    #[serde(default)]
    pub registered_events: Vec<EventRef>,
    /// Milliseconds since Unix epoch.
    #[serde(default)]
    pub created_at: Option<i64>,
}

impl Seekable for MemberRecord {
    fn seeker_field_value(&self, field: Field) -> Value<'_> {
        match field {
            Field::Id => Value::Text(&self.id),
            Field::FirstName => Value::Text(&self.first_name),
            Field::LastName => Value::Text(&self.last_name),
            Field::Email => Value::Text(&self.email),
            Field::AppLanguageCode => Value::Text(&self.app_language_code),
            Field::AdminFor => Value::list(&self.admin_for),
            Field::EventTitle => {
                Value::List(self.registered_events.iter().map(|e| e.title.as_str()).collect())
            }
            Field::JoinedOrganizations => Value::list(&self.joined_organizations),
            Field::CreatedAt => self
                .created_at
                .map(|millis| Value::Timestamp(Timestamp(millis)))
                .unwrap_or(Value::None),
        }
    }
}

/// A member as returned to clients.
///
/// `password` is always `None` and serializes as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicMember {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: Option<String>,
    /// Absolute image URL.
    pub image: Option<String>,
    pub app_language_code: String,
    pub joined_organizations: Vec<String>,
    pub admin_for: Vec<String>,
    pub registered_events: Vec<EventRef>,
    pub created_at: Option<i64>,
}

impl PublicMember {
    /// Reshapes a stored record for clients: drops the password and
    /// prefixes the image path with `api_root_url`.
    ///
    /// ```
    /// use roster_listing::{MemberRecord, PublicMember};
    ///
    /// let record: MemberRecord = serde_json::from_value(serde_json::json!({
    ///     "id": "u1", "firstName": "Ada", "lastName": "Lovelace",
    ///     "email": "ada@example.com", "password": "secret", "image": "/u1.png",
    /// }))
    /// .unwrap();
    ///
    /// let member = PublicMember::from_record(record, "https://api.example.com");
    /// assert_eq!(member.password, None);
    /// assert_eq!(member.image.as_deref(), Some("https://api.example.com/u1.png"));
    /// ```
    pub fn from_record(record: MemberRecord, api_root_url: &str) -> Self {
        PublicMember {
            id: record.id,
            first_name: record.first_name,
            last_name: record.last_name,
            email: record.email,
            password: None,
            image: record.image.map(|path| format!("{api_root_url}{path}")),
            app_language_code: record.app_language_code,
            joined_organizations: record.joined_organizations,
            admin_for: record.admin_for,
            registered_events: record.registered_events,
            created_at: record.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> MemberRecord {
        serde_json::from_value(json!({
            "_id": "u1",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "password": "hash",
            "joinedOrganizations": ["org-1"],
            "registeredEvents": [{ "_id": "e1", "title": "Gala" }],
        }))
        .unwrap()
    }

    #[test]
    fn record_defaults() {
        let record = record();
        assert_eq!(record.id, "u1");
        assert_eq!(record.app_language_code, "en");
        assert_eq!(record.image, None);
        assert!(record.admin_for.is_empty());
    }

    #[test]
    fn record_field_values() {
        let record = record();
        assert_eq!(record.seeker_field_value(Field::Id), Value::Text("u1"));
        assert_eq!(record.seeker_field_value(Field::EventTitle), Value::List(vec!["Gala"]));
        assert_eq!(
            record.seeker_field_value(Field::JoinedOrganizations),
            Value::List(vec!["org-1"])
        );
        assert_eq!(record.seeker_field_value(Field::CreatedAt), Value::None);
    }

    #[test]
    fn reshape_redacts_password() {
        let member = PublicMember::from_record(record(), "https://api.example.com");
        assert_eq!(member.password, None);
        assert_eq!(member.image, None);

        let json = serde_json::to_value(&member).unwrap();
        assert!(json["password"].is_null());
        assert!(json["image"].is_null());
    }

    #[test]
    fn reshape_rewrites_image() {
        let mut record = record();
        record.image = Some("/u1.png".to_string());
        let member = PublicMember::from_record(record, "https://api.example.com");
        assert_eq!(member.image.as_deref(), Some("https://api.example.com/u1.png"));
    }

    #[test]
    fn reshape_keeps_other_fields() {
        let record = record();
        let member = PublicMember::from_record(record.clone(), "");
        assert_eq!(member.first_name, record.first_name);
        assert_eq!(member.registered_events, record.registered_events);
        assert_eq!(member.joined_organizations, record.joined_organizations);
    }
}
