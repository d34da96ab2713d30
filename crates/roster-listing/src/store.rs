//! The member store capability.
//!
//! A [`MemberStore`] executes a predicate with an ordering and a pagination
//! mode, and returns the matching records plus, when paged, the page's
//! position metadata. Stores are expected to honor the field exclusions and
//! relation expansions carried by the query.

use std::sync::Arc;

use async_trait::async_trait;
use roster_seeker::{OrderBy, Predicate};

use crate::error::StoreError;
use crate::member::MemberRecord;
use crate::pagination::{Page, PageMeta, PaginationRequest};

/// Name of the field stores must never return.
pub const PASSWORD_FIELD: &str = "password";

/// Relations a store can expand into the records it returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// The events a member registered for.
    RegisteredEvents,
}

/// Everything a store needs to answer one listing.
#[derive(Debug, Clone, Copy)]
pub struct StoreQuery<'a> {
    pub predicate: &'a Predicate,
    pub ordering: &'a [OrderBy],
    pub pagination: PaginationRequest,
    /// Fields to leave out of returned records.
    pub exclude: &'a [&'a str],
    /// Relations to populate in returned records.
    pub expand: &'a [Relation],
}

impl StoreQuery<'_> {
    /// Returns `true` if `field` must be left out of returned records.
    pub fn excludes(&self, field: &str) -> bool {
        self.exclude.iter().any(|excluded| *excluded == field)
    }

    /// Returns `true` if `relation` must be populated.
    pub fn expands(&self, relation: Relation) -> bool {
        self.expand.contains(&relation)
    }
}

/// A store's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorePage {
    /// Every matching record, in order.
    Unpaged {
        records: Vec<MemberRecord>,
        total_count: u64,
    },
    /// One page of matching records.
    Paged {
        records: Vec<MemberRecord>,
        meta: PageMeta,
    },
}

impl StorePage {
    /// Checks this answer against the pagination that was asked for and
    /// turns it into a [`Page`].
    ///
    /// A mode mismatch, a total count that disagrees with the records, a
    /// page larger than requested, or page metadata that does not follow
    /// from the total count is reported as [`StoreError::Malformed`].
    pub fn into_page(self, pagination: PaginationRequest) -> Result<Page<MemberRecord>, StoreError> {
        match (self, pagination) {
            (
                StorePage::Unpaged {
                    records,
                    total_count,
                },
                PaginationRequest::Unpaged,
            ) => {
                if records.len() as u64 != total_count {
                    return Err(StoreError::Malformed(format!(
                        "unpaged result holds {} records but reports {total_count}",
                        records.len()
                    )));
                }
                Ok(Page::unpaged(records, total_count))
            }
            (
                StorePage::Paged { records, meta },
                PaginationRequest::Paged {
                    page_number,
                    page_size,
                },
            ) => {
                if records.len() as u64 > page_size {
                    return Err(StoreError::Malformed(format!(
                        "page holds {} records, more than the page size {page_size}",
                        records.len()
                    )));
                }
                if meta.current_page != page_number {
                    return Err(StoreError::Malformed(format!(
                        "asked for page {page_number}, got page {}",
                        meta.current_page
                    )));
                }
                let expected = PageMeta::compute(meta.total_count, page_number, page_size);
                if meta != expected {
                    return Err(StoreError::Malformed(format!(
                        "page metadata {meta:?} disagrees with {expected:?}"
                    )));
                }
                Ok(Page::paged(records, meta))
            }
            (page, pagination) => Err(StoreError::Malformed(format!(
                "{} result for a {} request",
                page.mode(),
                pagination.mode()
            ))),
        }
    }

    fn mode(&self) -> &'static str {
        match self {
            StorePage::Unpaged { .. } => "unpaged",
            StorePage::Paged { .. } => "paged",
        }
    }
}

/// A source of member records.
#[async_trait]
pub trait MemberStore: Send + Sync {
    /// Runs one listing query.
    async fn find_members(&self, query: StoreQuery<'_>) -> Result<StorePage, StoreError>;
}

#[async_trait]
impl<S: MemberStore + ?Sized> MemberStore for Arc<S> {
    async fn find_members(&self, query: StoreQuery<'_>) -> Result<StorePage, StoreError> {
        (**self).find_members(query).await
    }
}
