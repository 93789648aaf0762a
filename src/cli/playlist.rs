use std::path::PathBuf;

use indicatif::ProgressBar;

use crate::{
    config, deezer,
    deezer::{ApiClient, albums::AlbumDetailCache},
    error,
    output::{self, ExportMode},
    success,
    types::{AlbumDetails, EntityKind, Track, TrackRecord},
    utils,
};

pub async fn export_playlist(
    client: &ApiClient,
    input: &str,
    skip_album_details: bool,
    output_dir: Option<PathBuf>,
) {
    let entity = match utils::resolve(input, EntityKind::Playlist) {
        Ok(entity) => entity,
        Err(e) => error!("{}", e),
    };
    let out_dir = output_dir.unwrap_or_else(config::output_dir);

    let pb = super::spinner(format!("Fetching tracks for playlist {}...", entity.id));
    let tracks = deezer::tracks::get_playlist_tracks(client, &entity.id).await;

    let mut cache = AlbumDetailCache::new();
    let records = collect_records(client, &mut cache, &tracks, !skip_album_details, &pb).await;
    pb.finish_and_clear();

    let file = out_dir.join(format!("playlist_{}.csv", entity.id));
    match output::write_tracks(&file, export_mode(skip_album_details), &records) {
        Ok(_) => success!(
            "Playlist \"{}\" saved to {} ({} tracks).",
            entity.id,
            file.display(),
            records.len()
        ),
        Err(e) => error!("Cannot write {}. Err: {}", file.display(), e),
    }
}

pub(super) fn export_mode(skip_album_details: bool) -> ExportMode {
    if skip_album_details {
        ExportMode::Playlist
    } else {
        ExportMode::PlaylistEnriched
    }
}

/// Projects fetched tracks into flat records, resolving album details per
/// track when enrichment is enabled. Lookups are memoized by album id; a
/// track without an embedded album gets the `"Unknown"` placeholders.
pub(super) async fn collect_records(
    client: &ApiClient,
    cache: &mut AlbumDetailCache,
    tracks: &[Track],
    enrich: bool,
    pb: &ProgressBar,
) -> Vec<TrackRecord> {
    let mut records = Vec::with_capacity(tracks.len());

    for (position, track) in tracks.iter().enumerate() {
        let details = if enrich {
            pb.set_message(format!(
                "Resolving album details... ({}/{})",
                position + 1,
                tracks.len()
            ));

            let details = match track.album.as_ref().and_then(|album| album.id) {
                Some(album_id) => {
                    cache
                        .get_or_fetch(album_id, |id| deezer::albums::get_album_details(client, id))
                        .await
                }
                None => AlbumDetails::unknown(),
            };
            Some(details)
        } else {
            None
        };

        records.push(TrackRecord::from_track(track, details.as_ref()));
    }

    records
}
