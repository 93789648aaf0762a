use std::path::PathBuf;

use crate::{
    config, deezer,
    deezer::ApiClient,
    error,
    output::{self, ExportMode},
    success,
    types::{EntityKind, TrackRecord},
    utils, warning,
};

pub async fn export_album(client: &ApiClient, input: &str, output_dir: Option<PathBuf>) {
    let entity = match utils::resolve(input, EntityKind::Album) {
        Ok(entity) => entity,
        Err(e) => error!("{}", e),
    };
    let out_dir = output_dir.unwrap_or_else(config::output_dir);

    let pb = super::spinner(format!("Fetching tracks for album {}...", entity.id));
    let tracks = deezer::tracks::get_album_tracks(client, &entity.id).await;
    pb.finish_and_clear();

    if tracks.is_empty() {
        warning!("No tracks found in this album.");
        return;
    }

    let records: Vec<TrackRecord> = tracks
        .iter()
        .map(|track| TrackRecord::from_track(track, None))
        .collect();

    let file = out_dir.join(format!("album_{}.csv", entity.id));
    match output::write_tracks(&file, ExportMode::AlbumTracks, &records) {
        Ok(_) => success!(
            "Album \"{}\" saved to {} ({} tracks).",
            entity.id,
            file.display(),
            records.len()
        ),
        Err(e) => error!("Cannot write {}. Err: {}", file.display(), e),
    }
}
