use crate::types::PlaylistSummary;

use super::{ApiClient, fetch_all};

/// Retrieves the complete playlist list of a user.
///
/// Pages through `GET /user/{id}/playlists` with the fixed page size until
/// the API returns an empty page. A terminal transport failure stops the
/// walk early; the playlists discovered up to that point are still
/// returned.
///
/// # Example
///
/// ```
/// let playlists = get_user_playlists(&client, "2529").await;
/// for playlist in &playlists {
///     println!("{}: {}", playlist.id, playlist.title);
/// }
/// ```
pub async fn get_user_playlists(client: &ApiClient, user_id: &str) -> Vec<PlaylistSummary> {
    let path = format!("user/{user_id}/playlists");
    fetch_all(|index| client.get_page::<PlaylistSummary>(&path, index)).await
}
