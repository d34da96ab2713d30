//! The public response shape of a member listing.

use serde::{Deserialize, Serialize};

use crate::member::PublicMember;
use crate::pagination::Page;

/// Page position as reported to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub total_pages: u64,
    pub next_page_no: Option<u64>,
    pub prev_page_no: Option<u64>,
    pub curr_page_no: Option<u64>,
}

/// Aggregates over the whole match set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregate {
    pub count: u64,
}

/// `{ pageInfo, edges, aggregate }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembersConnection {
    pub page_info: PageInfo,
    pub edges: Vec<PublicMember>,
    pub aggregate: Aggregate,
}

impl From<Page<PublicMember>> for MembersConnection {
    fn from(page: Page<PublicMember>) -> Self {
        MembersConnection {
            page_info: PageInfo {
                has_next_page: page.has_next,
                has_previous_page: page.has_prev,
                total_pages: page.total_pages,
                next_page_no: page.next_page,
                prev_page_no: page.prev_page,
                curr_page_no: page.current_page,
            },
            edges: page.items,
            aggregate: Aggregate {
                count: page.total_count,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::PageMeta;
    use serde_json::json;

    #[test]
    fn wire_shape() {
        let page: Page<PublicMember> = Page::paged(vec![], PageMeta::compute(25, 1, 10));
        let connection = MembersConnection::from(page);

        assert_eq!(
            serde_json::to_value(&connection).unwrap(),
            json!({
                "pageInfo": {
                    "hasNextPage": true,
                    "hasPreviousPage": false,
                    "totalPages": 3,
                    "nextPageNo": 2,
                    "prevPageNo": null,
                    "currPageNo": 1,
                },
                "edges": [],
                "aggregate": { "count": 25 },
            })
        );
    }

    #[test]
    fn unpaged_wire_shape() {
        let connection = MembersConnection::from(Page::<PublicMember>::unpaged(vec![], 0));
        let json = serde_json::to_value(&connection).unwrap();
        assert_eq!(json["pageInfo"]["currPageNo"], serde_json::Value::Null);
        assert_eq!(json["pageInfo"]["nextPageNo"], serde_json::Value::Null);
        assert_eq!(json["aggregate"]["count"], 0);
    }
}
