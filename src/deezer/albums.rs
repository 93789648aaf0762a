use std::{collections::HashMap, future::Future};

use crate::types::{AlbumDetailResponse, AlbumDetails};

use super::ApiClient;

/// Fetches album details (release date and primary genre) for enrichment.
///
/// At most one genre is reported, the first in the album's genre list. Any
/// failure — transport, parse, a missing release date or an album with zero
/// genre entries — degrades to the `"Unknown"` placeholder record. The
/// lookup never fails the enclosing export and is not reported to the user.
pub async fn get_album_details(client: &ApiClient, album_id: u64) -> AlbumDetails {
    let path = format!("album/{album_id}");
    match client.get_json::<AlbumDetailResponse>(&path, &[]).await {
        Ok(response) => AlbumDetails::from(response),
        Err(_) => AlbumDetails::unknown(),
    }
}

/// In-memory memoization of album detail lookups, keyed by album id.
///
/// Many tracks of one playlist share an album; the cache makes sure each
/// album is fetched at most once per run. Cached results are byte-identical
/// to uncached ones.
#[derive(Debug, Default)]
pub struct AlbumDetailCache {
    entries: HashMap<u64, AlbumDetails>,
}

impl AlbumDetailCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached details for `album_id` or resolves them through
    /// `fetch` and remembers the result.
    pub async fn get_or_fetch<F, Fut>(&mut self, album_id: u64, fetch: F) -> AlbumDetails
    where
        F: FnOnce(u64) -> Fut,
        Fut: Future<Output = AlbumDetails>,
    {
        if let Some(hit) = self.entries.get(&album_id) {
            return hit.clone();
        }

        let details = fetch(album_id).await;
        self.entries.insert(album_id, details.clone());
        details
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
