//! In-memory member store.

use async_trait::async_trait;
use roster_seeker::{sort_by_orderings, Field, OrderBy};
use tracing::trace;

use crate::error::StoreError;
use crate::member::MemberRecord;
use crate::pagination::{PageMeta, PaginationRequest};
use crate::store::{MemberStore, Relation, StorePage, StoreQuery, PASSWORD_FIELD};

/// A [`MemberStore`] over a vector of records.
///
/// Evaluates predicates with [`roster_seeker::Predicate::filter`], sorts by
/// the requested ordering with `id` as the final tie-breaker, and slices
/// pages with the shared page math.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMemberStore {
    members: Vec<MemberRecord>,
}

impl InMemoryMemberStore {
    pub fn new(members: Vec<MemberRecord>) -> Self {
        InMemoryMemberStore { members }
    }

    /// Loads records from a JSON array.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn project(record: &mut MemberRecord, query: &StoreQuery<'_>) {
        if query.excludes(PASSWORD_FIELD) {
            record.password = None;
        }
        if !query.expands(Relation::RegisteredEvents) {
            record.registered_events.clear();
        }
    }
}

#[async_trait]
impl MemberStore for InMemoryMemberStore {
    async fn find_members(&self, query: StoreQuery<'_>) -> Result<StorePage, StoreError> {
        let mut matched: Vec<MemberRecord> = query
            .predicate
            .filter(&self.members)
            .into_iter()
            .cloned()
            .collect();

        let mut ordering = query.ordering.to_vec();
        if !ordering.iter().any(|order| order.field == Field::Id) {
            ordering.push(OrderBy::asc(Field::Id));
        }
        sort_by_orderings(&mut matched, &ordering);

        for record in &mut matched {
            Self::project(record, &query);
        }

        let total_count = matched.len() as u64;
        trace!(total_count, mode = query.pagination.mode(), "in-memory query");

        match query.pagination {
            PaginationRequest::Unpaged => Ok(StorePage::Unpaged {
                records: matched,
                total_count,
            }),
            PaginationRequest::Paged {
                page_number,
                page_size,
            } => {
                let meta = PageMeta::compute(total_count, page_number, page_size);
                let start = page_number.saturating_sub(1).saturating_mul(page_size);
                let records = matched
                    .into_iter()
                    .skip(usize::try_from(start).unwrap_or(usize::MAX))
                    .take(usize::try_from(page_size).unwrap_or(usize::MAX))
                    .collect();
                Ok(StorePage::Paged { records, meta })
            }
        }
    }
}
