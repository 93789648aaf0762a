use std::fmt;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Placeholder written for enrichment fields that could not be resolved.
pub const UNKNOWN_FIELD: &str = "Unknown";

/// The three fetchable root kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Playlist,
    Album,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::User => write!(f, "user"),
            EntityKind::Playlist => write!(f, "playlist"),
            EntityKind::Album => write!(f, "album"),
        }
    }
}

/// A resolved root entity: its kind plus the numeric id as given or as
/// extracted from a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRef {
    pub kind: EntityKind,
    pub id: String,
}

/// One page of a cursor-paginated Deezer list response. An empty `data`
/// array signals the end of pagination for that resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: Option<u64>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistSummary {
    pub id: u64,
    pub title: String,
    pub tracklist: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    pub title_short: String,
    pub link: String,
    pub duration: u64,
    pub artist: Option<TrackArtist>,
    pub album: Option<TrackAlbum>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAlbum {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub tracklist: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumDetailResponse {
    pub release_date: Option<String>,
    pub genres: Option<GenreList>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreList {
    pub data: Vec<Genre>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    pub name: String,
}

/// Album enrichment result: release date plus the first genre of the album,
/// both `"Unknown"` when the lookup failed or the album carries no genre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumDetails {
    pub release_date: String,
    pub genre: String,
}

impl AlbumDetails {
    pub fn unknown() -> Self {
        Self {
            release_date: UNKNOWN_FIELD.to_string(),
            genre: UNKNOWN_FIELD.to_string(),
        }
    }
}

impl From<AlbumDetailResponse> for AlbumDetails {
    fn from(response: AlbumDetailResponse) -> Self {
        let release_date = response
            .release_date
            .filter(|date| !date.is_empty())
            .unwrap_or_else(|| UNKNOWN_FIELD.to_string());
        let genre = response
            .genres
            .and_then(|genres| genres.data.into_iter().next())
            .map(|genre| genre.name)
            .unwrap_or_else(|| UNKNOWN_FIELD.to_string());
        Self {
            release_date,
            genre,
        }
    }
}

/// A single flat output row. Fields that were absent in the source payload
/// are empty; enrichment fields are only populated in the enriched mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRecord {
    pub title: String,
    pub title_short: String,
    pub link: String,
    pub duration: u64,
    pub artist: String,
    pub artist_link: String,
    pub album: String,
    pub album_link: String,
    pub release_date: String,
    pub genre: String,
}

impl TrackRecord {
    /// Projects a raw API track into a flat record. A missing nested artist
    /// or album never aborts the projection; the affected fields stay empty.
    pub fn from_track(track: &Track, details: Option<&AlbumDetails>) -> Self {
        let artist = track.artist.as_ref();
        let album = track.album.as_ref();
        Self {
            title: track.title.clone(),
            title_short: track.title_short.clone(),
            link: track.link.clone(),
            duration: track.duration,
            artist: artist.and_then(|a| a.name.clone()).unwrap_or_default(),
            artist_link: artist.and_then(|a| a.link.clone()).unwrap_or_default(),
            album: album.and_then(|a| a.title.clone()).unwrap_or_default(),
            album_link: album.and_then(|a| a.tracklist.clone()).unwrap_or_default(),
            release_date: details
                .map(|d| d.release_date.clone())
                .unwrap_or_default(),
            genre: details.map(|d| d.genre.clone()).unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub title: String,
    pub tracks: usize,
    pub file: String,
}
