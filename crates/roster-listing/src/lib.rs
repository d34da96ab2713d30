//! Roster Listing - paginated member listings for an organization.
//!
//! A listing validates the caller's pagination arguments, resolves the sort
//! order, builds a predicate with [`roster_seeker::build`], asks a
//! [`MemberStore`] for matching records and reshapes them for clients.
//!
//! # Quick Start
//!
//! ```rust
//! use roster_listing::{InMemoryMemberStore, ListMembersRequest, ListingService};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let store = InMemoryMemberStore::from_json(r#"[
//!     { "id": "u1", "firstName": "Ada", "lastName": "Lovelace",
//!       "email": "ada@example.com", "password": "secret", "image": "/u1.png",
//!       "joinedOrganizations": ["org-1"] },
//!     { "id": "u2", "firstName": "Alan", "lastName": "Turing",
//!       "email": "alan@example.com", "joinedOrganizations": ["org-2"] }
//! ]"#).unwrap();
//!
//! let service = ListingService::new(store);
//! let request = ListMembersRequest::new("org-1", "https://api.example.com");
//! let page = service.list(&request).await.unwrap();
//!
//! assert_eq!(page.total_count, 1);
//! assert_eq!(page.items[0].password, None);
//! assert_eq!(page.items[0].image.as_deref(), Some("https://api.example.com/u1.png"));
//! # });
//! ```
//!
//! # Pagination
//!
//! | `first` | `skip` | Result |
//! |---------|--------|--------|
//! | absent | any | every match, no page numbers |
//! | `>= 1` | absent | `MISSING_PAGINATION_CURSOR` |
//! | `< 1` | any | `INVALID_PAGE_SIZE` |
//! | `>= 1` | `< 0` | `INVALID_PAGE_NUMBER` |
//! | `>= 1` | `0` or `1` | first page |
//! | `>= 1` | `n` | page `n` |

mod config;
mod error;
mod member;
mod memory;
mod pagination;
mod response;
mod service;
mod sort;
mod store;

pub use config::{ConfigError, ListingConfig, DEFAULT_STORE_TIMEOUT_MS};
pub use error::{ClientErrorCode, ClientInputError, ListingError, StoreError};
pub use member::{EventRef, MemberRecord, PublicMember};
pub use memory::InMemoryMemberStore;
pub use pagination::{Page, PageMeta, PaginationRequest};
pub use response::{Aggregate, MembersConnection, PageInfo};
pub use service::{ListMembersRequest, ListingService};
pub use sort::{DefaultSortResolver, OrderByInput, SortResolver};
pub use store::{MemberStore, Relation, StorePage, StoreQuery, PASSWORD_FIELD};

pub use roster_seeker::FilterSpec;
