//! The member listing service.
//!
//! One call runs a fixed sequence:
//! validate pagination → resolve sort → build predicate → query the store →
//! reshape records → assemble the page.
//! Validation and predicate errors abort before the store is touched.

use roster_seeker::{build, FilterSpec};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::config::ListingConfig;
use crate::error::{ClientInputError, ListingError, StoreError};
use crate::member::PublicMember;
use crate::pagination::{Page, PaginationRequest};
use crate::response::MembersConnection;
use crate::sort::{DefaultSortResolver, OrderByInput, SortResolver};
use crate::store::{MemberStore, Relation, StoreQuery, PASSWORD_FIELD};

const EXCLUDED_FIELDS: &[&str] = &[PASSWORD_FIELD];
const EXPANSIONS: &[Relation] = &[Relation::RegisteredEvents];

/// Arguments of one listing call.
///
/// ```
/// use roster_listing::ListMembersRequest;
///
/// let request = ListMembersRequest::new("org-1", "https://api.example.com")
///     .first(10)
///     .skip(2);
/// assert_eq!(request.first, Some(10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMembersRequest {
    pub org_id: String,
    #[serde(default, rename = "where")]
    pub filter: Option<FilterSpec>,
    #[serde(default)]
    pub order_by: Option<OrderByInput>,
    /// Page size.
    #[serde(default)]
    pub first: Option<i64>,
    /// Page number, 1-based.
    #[serde(default)]
    pub skip: Option<i64>,
    /// Prefix for member image paths.
    pub api_root_url: String,
}

impl ListMembersRequest {
    pub fn new(org_id: impl Into<String>, api_root_url: impl Into<String>) -> Self {
        ListMembersRequest {
            org_id: org_id.into(),
            filter: None,
            order_by: None,
            first: None,
            skip: None,
            api_root_url: api_root_url.into(),
        }
    }

    pub fn filter(mut self, filter: FilterSpec) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn order_by(mut self, order_by: OrderByInput) -> Self {
        self.order_by = Some(order_by);
        self
    }

    pub fn first(mut self, first: i64) -> Self {
        self.first = Some(first);
        self
    }

    pub fn skip(mut self, skip: i64) -> Self {
        self.skip = Some(skip);
        self
    }
}

/// Lists the members of an organization.
///
/// The service holds no per-request state; share it behind an `Arc` to
/// serve concurrent requests.
#[derive(Debug, Clone)]
pub struct ListingService<S, R = DefaultSortResolver> {
    store: S,
    resolver: R,
    config: ListingConfig,
}

impl<S: MemberStore> ListingService<S> {
    /// Creates a service with the default sort resolver and configuration.
    pub fn new(store: S) -> Self {
        Self::with_resolver(store, DefaultSortResolver)
    }
}

impl<S: MemberStore, R: SortResolver> ListingService<S, R> {
    pub fn with_resolver(store: S, resolver: R) -> Self {
        ListingService {
            store,
            resolver,
            config: ListingConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ListingConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ListingConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Runs one listing and returns the page of public members.
    ///
    /// Either a complete page or an error is returned, never a partial page.
    #[instrument(skip_all, fields(org_id = %request.org_id, mode = tracing::field::Empty))]
    pub async fn list(&self, request: &ListMembersRequest) -> Result<Page<PublicMember>, ListingError> {
        let pagination = PaginationRequest::from_args(request.first, request.skip)
            .map_err(|err| {
                debug!(code = %err.code, "rejected pagination arguments");
                err
            })?
            .clamped(self.config.max_page_size);
        tracing::Span::current().record("mode", pagination.mode());

        let ordering = self.resolver.resolve(request.order_by.as_ref());

        let predicate = build(&request.org_id, request.filter.as_ref()).map_err(|err| {
            debug!(error = %err, "rejected filter");
            ClientInputError::from(err)
        })?;

        let query = StoreQuery {
            predicate: &predicate,
            ordering: &ordering,
            pagination,
            exclude: EXCLUDED_FIELDS,
            expand: EXPANSIONS,
        };
        let deadline = self.config.store_timeout();
        let answer = match tokio::time::timeout(deadline, self.store.find_members(query)).await {
            Ok(answer) => answer,
            Err(_) => Err(StoreError::Timeout(deadline)),
        };
        let page = answer
            .and_then(|answer| answer.into_page(pagination))
            .map_err(|err| {
                warn!(error = %err, "member store failed");
                err
            })?;

        let page = page.map(|record| PublicMember::from_record(record, &request.api_root_url));
        debug!(
            items = page.len(),
            total_count = page.total_count,
            "listed members"
        );
        Ok(page)
    }

    /// Runs one listing and returns the public response shape.
    pub async fn list_connection(
        &self,
        request: &ListMembersRequest,
    ) -> Result<MembersConnection, ListingError> {
        self.list(request).await.map(MembersConnection::from)
    }
}
