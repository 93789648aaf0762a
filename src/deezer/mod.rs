//! # Deezer Integration Module
//!
//! This module provides the interface to the public Deezer API: a reusable
//! HTTP client with a bounded retry policy, the cursor-pagination loop
//! shared by every list endpoint, and the per-resource fetch functions. It
//! is the only layer that talks to the network; the CLI layer above it
//! deals purely in the data structures from [`crate::types`].
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI)
//!          ↓
//! Deezer Integration Layer
//!     ├── Client (timeout, bounded retry with backoff)
//!     ├── Pagination (index/limit cursor walk)
//!     ├── Playlists (a user's playlist list)
//!     ├── Tracks (playlist and album track lists)
//!     └── Albums (per-track enrichment lookup)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Deezer API
//! ```
//!
//! ## Pagination
//!
//! Every list endpoint is paginated with `index`/`limit` query parameters
//! at a fixed page size of 25. [`fetch_all`] owns the loop: it walks pages
//! starting at index 0 and stops on the first empty `data` array. The index
//! always advances by the full page size after a non-empty page, never by
//! the number of items the page actually contained — that is the paging
//! contract the upstream API expects.
//!
//! ## Error Handling Philosophy
//!
//! Transient server-side failures (500, 502, 503, 504) and request
//! timeouts are retried inside the client with exponential backoff and are
//! invisible to callers. Everything that survives the retry budget is a
//! terminal [`ApiError`]; the pagination loop reacts to it by stopping
//! early and handing back whatever full pages were already collected, so a
//! mid-run network failure still produces a usable partial export.
//!
//! The album enrichment lookup is special-cased: its failures degrade to
//! `"Unknown"` placeholder fields and are never surfaced at all.
//!
//! ## API Coverage
//!
//! - `GET /user/{id}/playlists` - a user's playlists, paginated
//! - `GET /playlist/{id}/tracks` - a playlist's tracks, paginated
//! - `GET /album/{id}/tracks` - an album's tracks, paginated
//! - `GET /album/{id}` - album details for enrichment
//!
//! ## Dependencies
//!
//! - **reqwest** - HTTP client with async support
//! - **serde / serde_json** - JSON deserialization into typed models
//! - **tokio** - async runtime and backoff sleeps

use std::{fmt, future::Future};

use crate::{types::Page, warning};

pub mod albums;
pub mod client;
pub mod playlists;
pub mod tracks;

pub use client::ApiClient;

/// Fixed page size of the Deezer list endpoints.
pub const PAGE_SIZE: u64 = 25;

/// A terminal API failure: transport errors and timeouts that exhausted the
/// retry budget, non-success statuses, or an unparseable response body.
#[derive(Debug)]
pub enum ApiError {
    Transport(reqwest::Error),
    Status(reqwest::StatusCode),
    Parse(serde_json::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(e) => write!(f, "transport error: {e}"),
            ApiError::Status(status) => write!(f, "unexpected status: {status}"),
            ApiError::Parse(e) => write!(f, "malformed response: {e}"),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Parse(e)
    }
}

/// Walks a paginated list endpoint and accumulates every returned item.
///
/// `fetch_page` is called with the current index (0, 25, 50, ...) and
/// returns one [`Page`]. The walk stops on the first empty page or on a
/// terminal error; in the latter case the in-flight page is discarded with
/// a warning and all items from prior pages are returned.
///
/// Items keep the API's return order and are not deduplicated.
///
/// # Example
///
/// ```
/// let tracks = fetch_all(|index| client.get_page::<Track>("playlist/908622995/tracks", index)).await;
/// ```
pub async fn fetch_all<T, F, Fut>(fetch_page: F) -> Vec<T>
where
    F: Fn(u64) -> Fut,
    Fut: Future<Output = Result<Page<T>, ApiError>>,
{
    let mut items = Vec::new();
    let mut index: u64 = 0;

    loop {
        let page = match fetch_page(index).await {
            Ok(page) => page,
            Err(e) => {
                warning!("Fetch stopped at index {}. Err: {}", index, e);
                break;
            }
        };

        if page.data.is_empty() {
            break;
        }

        items.extend(page.data);
        index += PAGE_SIZE;
    }

    items
}
