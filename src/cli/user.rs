use std::path::PathBuf;

use tabled::Table;

use crate::{
    config, deezer,
    deezer::{ApiClient, albums::AlbumDetailCache},
    error, info, output, success,
    types::{EntityKind, PlaylistTableRow},
    utils, warning,
};

use super::playlist::{collect_records, export_mode};

pub async fn export_user(
    client: &ApiClient,
    input: &str,
    skip_album_details: bool,
    output_dir: Option<PathBuf>,
) {
    let entity = match utils::resolve(input, EntityKind::User) {
        Ok(entity) => entity,
        Err(e) => error!("{}", e),
    };
    let out_dir = output_dir.unwrap_or_else(config::output_dir);

    let pb = super::spinner(format!("Fetching playlists for user {}...", entity.id));
    let playlists = deezer::playlists::get_user_playlists(client, &entity.id).await;
    pb.finish_and_clear();

    if playlists.is_empty() {
        warning!("No playlists found for user {}.", entity.id);
        return;
    }
    info!("Found {} playlists.", playlists.len());

    let mode = export_mode(skip_album_details);
    // One cache for the whole run: sibling playlists share albums too.
    let mut cache = AlbumDetailCache::new();
    let mut summary: Vec<PlaylistTableRow> = Vec::new();

    for playlist in &playlists {
        let pb = super::spinner(format!("Exporting playlist \"{}\"...", playlist.title));
        let tracks = deezer::tracks::get_playlist_tracks(client, &playlist.id.to_string()).await;
        let records =
            collect_records(client, &mut cache, &tracks, !skip_album_details, &pb).await;
        pb.finish_and_clear();

        let file = out_dir.join(format!("{}.csv", utils::sanitize_filename(&playlist.title)));
        match output::write_tracks(&file, mode, &records) {
            Ok(_) => {
                success!(
                    "Playlist \"{}\" saved to {} ({} tracks).",
                    playlist.title,
                    file.display(),
                    records.len()
                );
                summary.push(PlaylistTableRow {
                    title: playlist.title.clone(),
                    tracks: records.len(),
                    file: file.display().to_string(),
                });
            }
            Err(e) => warning!("Cannot write playlist \"{}\". Err: {}", playlist.title, e),
        }
    }

    if !summary.is_empty() {
        let table = Table::new(summary);
        println!("{}", table);
    }
    success!("All playlists have been saved.");
}
