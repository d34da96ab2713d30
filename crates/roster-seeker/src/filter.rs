//! Member filter specification and its declarative rule table.
//!
//! A [`FilterSpec`] is the sparse, flat-keyed filter a client sends
//! (`firstName_contains`, `id_not_in`, `admin_for`, ...). [`FILTER_RULES`]
//! lists every supported `(key, field, operator)` triple together with the
//! accessor that reads the matching entry from a spec. The predicate
//! builder walks this table once, in declaration order.

use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::op::Op;

/// Sparse member filter.
///
/// Every entry is optional. Unknown keys are ignored when deserializing.
///
/// # Example
///
/// ```
/// use roster_seeker::FilterSpec;
///
/// let spec: FilterSpec = serde_json::from_value(serde_json::json!({
///     "firstName_contains": "jo",
///     "id_not_in": ["u3"],
/// }))
/// .unwrap();
/// assert_eq!(spec.first_name_contains.as_deref(), Some("jo"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    #[serde(rename = "id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "id_not", skip_serializing_if = "Option::is_none")]
    pub id_not: Option<String>,
    #[serde(rename = "id_in", skip_serializing_if = "Option::is_none")]
    pub id_in: Option<Vec<String>>,
    #[serde(rename = "id_not_in", skip_serializing_if = "Option::is_none")]
    pub id_not_in: Option<Vec<String>>,

    #[serde(rename = "firstName", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "firstName_not", skip_serializing_if = "Option::is_none")]
    pub first_name_not: Option<String>,
    #[serde(rename = "firstName_in", skip_serializing_if = "Option::is_none")]
    pub first_name_in: Option<Vec<String>>,
    #[serde(rename = "firstName_not_in", skip_serializing_if = "Option::is_none")]
    pub first_name_not_in: Option<Vec<String>>,
    #[serde(rename = "firstName_contains", skip_serializing_if = "Option::is_none")]
    pub first_name_contains: Option<String>,
    #[serde(rename = "firstName_starts_with", skip_serializing_if = "Option::is_none")]
    pub first_name_starts_with: Option<String>,

    #[serde(rename = "lastName", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(rename = "lastName_not", skip_serializing_if = "Option::is_none")]
    pub last_name_not: Option<String>,
    #[serde(rename = "lastName_in", skip_serializing_if = "Option::is_none")]
    pub last_name_in: Option<Vec<String>>,
    #[serde(rename = "lastName_not_in", skip_serializing_if = "Option::is_none")]
    pub last_name_not_in: Option<Vec<String>>,
    #[serde(rename = "lastName_contains", skip_serializing_if = "Option::is_none")]
    pub last_name_contains: Option<String>,
    #[serde(rename = "lastName_starts_with", skip_serializing_if = "Option::is_none")]
    pub last_name_starts_with: Option<String>,

    #[serde(rename = "email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "email_not", skip_serializing_if = "Option::is_none")]
    pub email_not: Option<String>,
    #[serde(rename = "email_in", skip_serializing_if = "Option::is_none")]
    pub email_in: Option<Vec<String>>,
    #[serde(rename = "email_not_in", skip_serializing_if = "Option::is_none")]
    pub email_not_in: Option<Vec<String>>,
    #[serde(rename = "email_contains", skip_serializing_if = "Option::is_none")]
    pub email_contains: Option<String>,
    #[serde(rename = "email_starts_with", skip_serializing_if = "Option::is_none")]
    pub email_starts_with: Option<String>,

    #[serde(rename = "appLanguageCode", skip_serializing_if = "Option::is_none")]
    pub app_language_code: Option<String>,
    #[serde(rename = "appLanguageCode_not", skip_serializing_if = "Option::is_none")]
    pub app_language_code_not: Option<String>,
    #[serde(rename = "appLanguageCode_in", skip_serializing_if = "Option::is_none")]
    pub app_language_code_in: Option<Vec<String>>,
    #[serde(rename = "appLanguageCode_not_in", skip_serializing_if = "Option::is_none")]
    pub app_language_code_not_in: Option<Vec<String>>,
    #[serde(rename = "appLanguageCode_contains", skip_serializing_if = "Option::is_none")]
    pub app_language_code_contains: Option<String>,
    #[serde(rename = "appLanguageCode_starts_with", skip_serializing_if = "Option::is_none")]
    pub app_language_code_starts_with: Option<String>,

    #[serde(rename = "admin_for", skip_serializing_if = "Option::is_none")]
    pub admin_for: Option<String>,
    #[serde(rename = "event_title_contains", skip_serializing_if = "Option::is_none")]
    pub event_title_contains: Option<String>,
}

impl FilterSpec {
    /// Creates an empty filter.
    pub fn new() -> Self {
        FilterSpec::default()
    }

    /// Returns `true` if no entry is set.
    pub fn is_empty(&self) -> bool {
        FILTER_RULES.iter().all(|rule| (rule.arg)(self).is_none())
    }

    /// Iterates the rules whose entry is present in this spec, paired with
    /// the entry's argument, in table order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static FilterRule, FilterArg<'_>)> + '_ {
        FILTER_RULES
            .iter()
            .filter_map(move |rule| (rule.arg)(self).map(|arg| (rule, arg)))
    }
}

/// Argument read from a filter entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterArg<'a> {
    /// A single value (`eq`, `ne`, `contains`, `startsWith`).
    One(&'a str),
    /// A set of values (`in`, `notIn`).
    Many(&'a [String]),
}

/// One row of the filter table.
#[derive(Debug, Clone, Copy)]
pub struct FilterRule {
    /// Flat filter key, as it appears on the wire.
    pub key: &'static str,
    /// Field the entry constrains.
    pub field: Field,
    /// Operator the entry applies.
    pub op: Op,
    /// Reads the entry from a spec.
    pub arg: for<'a> fn(&'a FilterSpec) -> Option<FilterArg<'a>>,
}

macro_rules! filter_rules {
    (@one $spec:ident . $member:ident) => {
        $spec.$member.as_deref().map(FilterArg::One)
    };
    (@many $spec:ident . $member:ident) => {
        $spec.$member.as_deref().map(FilterArg::Many)
    };
    ($( $key:literal => $field:ident $op:ident $kind:ident $member:ident ),* $(,)?) => {
        /// Every supported `(key, field, operator)` triple, in evaluation order.
        pub static FILTER_RULES: &[FilterRule] = &[
            $(
                FilterRule {
                    key: $key,
                    field: Field::$field,
                    op: Op::$op,
                    arg: {
                        fn arg(spec: &FilterSpec) -> Option<FilterArg<'_>> {
                            filter_rules!(@$kind spec.$member)
                        }
                        arg
                    },
                },
            )*
        ];
    };
}

filter_rules! {
    "id" => Id Eq one id,
    "id_not" => Id Ne one id_not,
    "id_in" => Id In many id_in,
    "id_not_in" => Id NotIn many id_not_in,

    "firstName" => FirstName Eq one first_name,
    "firstName_not" => FirstName Ne one first_name_not,
    "firstName_in" => FirstName In many first_name_in,
    "firstName_not_in" => FirstName NotIn many first_name_not_in,
    "firstName_contains" => FirstName Contains one first_name_contains,
    "firstName_starts_with" => FirstName StartsWith one first_name_starts_with,

    "lastName" => LastName Eq one last_name,
    "lastName_not" => LastName Ne one last_name_not,
    "lastName_in" => LastName In many last_name_in,
    "lastName_not_in" => LastName NotIn many last_name_not_in,
    "lastName_contains" => LastName Contains one last_name_contains,
    "lastName_starts_with" => LastName StartsWith one last_name_starts_with,

    "email" => Email Eq one email,
    "email_not" => Email Ne one email_not,
    "email_in" => Email In many email_in,
    "email_not_in" => Email NotIn many email_not_in,
    "email_contains" => Email Contains one email_contains,
    "email_starts_with" => Email StartsWith one email_starts_with,

    "appLanguageCode" => AppLanguageCode Eq one app_language_code,
    "appLanguageCode_not" => AppLanguageCode Ne one app_language_code_not,
    "appLanguageCode_in" => AppLanguageCode In many app_language_code_in,
    "appLanguageCode_not_in" => AppLanguageCode NotIn many app_language_code_not_in,
    "appLanguageCode_contains" => AppLanguageCode Contains one app_language_code_contains,
    "appLanguageCode_starts_with" => AppLanguageCode StartsWith one app_language_code_starts_with,

    "admin_for" => AdminFor Eq one admin_for,
    "event_title_contains" => EventTitle Contains one event_title_contains,
}
