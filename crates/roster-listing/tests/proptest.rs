//! Property tests for page math and pagination validation.

use proptest::prelude::*;
use roster_listing::{ClientErrorCode, Page, PageMeta, PaginationRequest};

proptest! {
    #[test]
    fn total_pages_covers_every_record(total in 0u64..10_000, size in 1u64..500) {
        let meta = PageMeta::compute(total, 1, size);
        prop_assert!(meta.total_pages * size >= total);
        if meta.total_pages > 0 {
            prop_assert!((meta.total_pages - 1) * size < total);
        }
    }

    #[test]
    fn neighbours_are_consistent(total in 0u64..10_000, page in 1u64..100, size in 1u64..500) {
        let meta = PageMeta::compute(total, page, size);
        prop_assert_eq!(meta.has_next, page < meta.total_pages);
        prop_assert_eq!(meta.has_prev, page > 1);
        prop_assert_eq!(meta.next_page, meta.has_next.then(|| page + 1));
        prop_assert_eq!(meta.prev_page, meta.has_prev.then(|| page - 1));
    }

    #[test]
    fn valid_arguments_are_paged(first in 1i64..1_000, skip in 0i64..1_000) {
        let pagination = PaginationRequest::from_args(Some(first), Some(skip)).unwrap();
        prop_assert_eq!(
            pagination,
            PaginationRequest::Paged {
                page_number: skip.max(1) as u64,
                page_size: first as u64,
            }
        );
    }

    #[test]
    fn page_size_below_one_is_rejected(first in i64::MIN..1, skip in proptest::option::of(any::<i64>())) {
        let result = PaginationRequest::from_args(Some(first), skip);
        let code = result.unwrap_err().code;
        if skip.is_some() {
            prop_assert_eq!(code, ClientErrorCode::InvalidPageSize);
        } else {
            prop_assert_eq!(code, ClientErrorCode::MissingPaginationCursor);
        }
    }

    #[test]
    fn without_first_skip_is_ignored(skip in proptest::option::of(any::<i64>())) {
        prop_assert_eq!(PaginationRequest::from_args(None, skip), Ok(PaginationRequest::Unpaged));
    }

    #[test]
    fn clamping_never_grows(size in 1u64..10_000, max in proptest::option::of(1u64..1_000)) {
        let pagination = PaginationRequest::Paged { page_number: 1, page_size: size };
        let PaginationRequest::Paged { page_size, .. } = pagination.clamped(max) else {
            unreachable!("clamping keeps the mode");
        };
        prop_assert!(page_size <= size);
        prop_assert!(page_size >= 1);
        if let Some(max) = max {
            prop_assert!(page_size <= max);
        }
    }

    #[test]
    fn unpaged_page_is_a_single_page(count in 0usize..200) {
        let page = Page::unpaged(vec![(); count], count as u64);
        prop_assert!(!page.has_next);
        prop_assert!(!page.has_prev);
        prop_assert_eq!(page.current_page, None);
        prop_assert_eq!(page.total_pages, u64::from(count > 0));
    }
}
