//! Roster Seeker - filter specifications to member predicates.
//!
//! Seeker turns the sparse filter a client sends with a member listing into a
//! predicate tree a store can execute. It provides:
//!
//! - The filter vocabulary: fields, operators and the flat wire keys
//!   (`firstName_contains`, `id_not_in`, `admin_for`, ...)
//! - A declarative rule table mapping each key to a `(field, operator)` pair
//! - The predicate tree, with in-memory evaluation and a document-store form
//! - Ordering primitives for sorting listings
//!
//! # Quick Start
//!
//! ```rust
//! use roster_seeker::{build, Field, FilterSpec, Seekable, Value};
//!
//! struct Member {
//!     first_name: String,
//!     orgs: Vec<String>,
//! }
//!
//! impl Seekable for Member {
//!     fn seeker_field_value(&self, field: Field) -> Value<'_> {
//!         match field {
//!             Field::FirstName => Value::Text(&self.first_name),
//!             Field::JoinedOrganizations => Value::list(&self.orgs),
//!             _ => Value::None,
//!         }
//!     }
//! }
//!
//! let members = vec![
//!     Member { first_name: "Johnson".into(), orgs: vec!["org-1".into()] },
//!     Member { first_name: "AJohnson".into(), orgs: vec!["org-1".into()] },
//!     Member { first_name: "Johnny".into(), orgs: vec!["org-2".into()] },
//! ];
//!
//! let filter = FilterSpec {
//!     first_name_starts_with: Some("john".into()),
//!     ..FilterSpec::default()
//! };
//! let predicate = build("org-1", Some(&filter)).unwrap();
//!
//! let results = predicate.filter(&members);
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].first_name, "Johnson");
//! ```
//!
//! # Predicate Semantics
//!
//! A predicate is a conjunction. The organization membership clause is
//! always present; every filter entry adds one more clause, including
//! several entries on the same field.
//!
//! | Operator | Value | Holds when |
//! |----------|-------|------------|
//! | `Eq` | text | some field value equals it |
//! | `Ne` | text | no field value equals it |
//! | `In` | set | some field value is in the set (never for `[]`) |
//! | `NotIn` | set | no field value is in the set (always for `[]`) |
//! | `Contains` | pattern | some field value contains the term, ignoring case |
//! | `StartsWith` | pattern | some field value starts with the term, ignoring case |

mod builder;
mod clause;
mod error;
mod field;
mod filter;
mod op;
mod ordering;
mod predicate;
mod traits;
mod value;

pub use builder::{build, membership};
pub use clause::{Clause, ClauseValue, Pattern};
pub use error::{Result, SeekerError};
pub use field::Field;
pub use filter::{FilterArg, FilterRule, FilterSpec, FILTER_RULES};
pub use op::Op;
pub use ordering::{compare_by_orderings, sort_by_orderings, Dir, OrderBy};
pub use predicate::Predicate;
pub use traits::Seekable;
pub use value::{compare_values, Timestamp, Value};
