use crate::types::Track;

use super::{ApiClient, fetch_all};

/// Retrieves all tracks of a playlist.
///
/// Pages through `GET /playlist/{id}/tracks` until the API returns an empty
/// page, preserving the playlist order. A terminal transport failure stops
/// the walk early and yields the tracks collected so far.
///
/// # Example
///
/// ```
/// let tracks = get_playlist_tracks(&client, "908622995").await;
/// println!("{} tracks", tracks.len());
/// ```
pub async fn get_playlist_tracks(client: &ApiClient, playlist_id: &str) -> Vec<Track> {
    let path = format!("playlist/{playlist_id}/tracks");
    fetch_all(|index| client.get_page::<Track>(&path, index)).await
}

/// Retrieves all tracks of an album.
///
/// Same page walk as [`get_playlist_tracks`] against
/// `GET /album/{id}/tracks`. Album track objects carry no embedded album,
/// so the resulting records stay without album columns.
pub async fn get_album_tracks(client: &ApiClient, album_id: &str) -> Vec<Track> {
    let path = format!("album/{album_id}/tracks");
    fetch_all(|index| client.get_page::<Track>(&path, index)).await
}
