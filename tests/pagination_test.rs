use std::cell::RefCell;

use deezex::deezer::{ApiError, PAGE_SIZE, fetch_all};
use deezex::types::Page;

// Helper function to create a full page of sequential items
fn full_page(start: u64) -> Page<u64> {
    Page {
        data: (start..start + PAGE_SIZE).collect(),
        total: None,
        next: None,
    }
}

// Helper function to create the empty page that ends pagination
fn empty_page() -> Page<u64> {
    Page {
        data: Vec::new(),
        total: None,
        next: None,
    }
}

#[tokio::test]
async fn test_full_pages_then_empty_page() {
    let requests = RefCell::new(Vec::new());

    let items = fetch_all(|index| {
        requests.borrow_mut().push(index);
        async move {
            if index < 3 * PAGE_SIZE {
                Ok(full_page(index))
            } else {
                Ok(empty_page())
            }
        }
    })
    .await;

    // Three full pages plus the terminating empty page: exactly N+1 requests
    assert_eq!(requests.borrow().as_slice(), &[0, 25, 50, 75]);

    // 25 x N records, in original per-page order
    assert_eq!(items.len(), 75);
    assert_eq!(items, (0..75).collect::<Vec<u64>>());
}

#[tokio::test]
async fn test_empty_first_page() {
    let requests = RefCell::new(0u32);

    let items: Vec<u64> = fetch_all(|_index| {
        *requests.borrow_mut() += 1;
        async move { Ok(empty_page()) }
    })
    .await;

    // A single request and zero records
    assert_eq!(*requests.borrow(), 1);
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_terminal_error_keeps_prior_pages() {
    let requests = RefCell::new(Vec::new());

    let items = fetch_all(|index| {
        requests.borrow_mut().push(index);
        async move {
            if index < 2 * PAGE_SIZE {
                Ok(full_page(index))
            } else {
                Err(ApiError::Status(
                    reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                ))
            }
        }
    })
    .await;

    // The failing third page is discarded, the walk is not retried
    assert_eq!(requests.borrow().as_slice(), &[0, 25, 50]);

    // Output equals exactly the records of the first two pages
    assert_eq!(items, (0..50).collect::<Vec<u64>>());
}

#[tokio::test]
async fn test_index_advances_by_page_size_not_item_count() {
    let requests = RefCell::new(Vec::new());

    let items = fetch_all(|index| {
        requests.borrow_mut().push(index);
        async move {
            if index == 0 {
                // A short page: fewer items than the page size
                Ok(Page {
                    data: (0u64..10).collect(),
                    total: None,
                    next: None,
                })
            } else {
                Ok(empty_page())
            }
        }
    })
    .await;

    // The cursor still advances by the full page size after the short page
    assert_eq!(requests.borrow().as_slice(), &[0, PAGE_SIZE]);
    assert_eq!(items, (0..10).collect::<Vec<u64>>());
}

#[tokio::test]
async fn test_duplicate_upstream_items_are_kept() {
    let items = fetch_all(|index| async move {
        if index == 0 {
            Ok(Page {
                data: vec![7u64, 7, 7],
                total: None,
                next: None,
            })
        } else {
            Ok(empty_page())
        }
    })
    .await;

    // No deduplication: duplicate upstream entries appear as duplicate rows
    assert_eq!(items, vec![7, 7, 7]);
}
