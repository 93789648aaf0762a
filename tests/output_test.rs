use deezex::output::{ExportMode, write_tracks};
use deezex::types::TrackRecord;
use tempfile::tempdir;

// Helper function to create a numbered record with every field populated
fn record(n: u64) -> TrackRecord {
    TrackRecord {
        title: format!("Track {n}"),
        title_short: format!("T{n}"),
        link: format!("https://www.deezer.com/track/{n}"),
        duration: 180 + n,
        artist: format!("Artist {n}"),
        artist_link: format!("https://www.deezer.com/artist/{n}"),
        album: format!("Album {n}"),
        album_link: format!("https://api.deezer.com/album/{n}/tracks"),
        release_date: format!("2020-01-{:02}", n + 1),
        genre: "Rock".to_string(),
    }
}

fn read_back(path: &std::path::Path) -> (csv::StringRecord, Vec<csv::StringRecord>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let header = reader.headers().unwrap().clone();
    let rows = reader.records().map(|row| row.unwrap()).collect();
    (header, rows)
}

#[test]
fn test_round_trip_enriched_mode() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("playlist_1.csv");

    let records: Vec<TrackRecord> = (0..3).map(record).collect();
    write_tracks(&path, ExportMode::PlaylistEnriched, &records).unwrap();

    let (header, rows) = read_back(&path);

    // One header row with the documented column order
    assert_eq!(
        header,
        csv::StringRecord::from(vec![
            "Title",
            "Title Short",
            "Link",
            "Duration",
            "Artist",
            "Artist Link",
            "Album",
            "Album Link",
            "Album Release Date",
            "Album Genre",
        ])
    );

    // N data rows, in write order
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].get(0), Some("Track 0"));
    assert_eq!(rows[0].get(3), Some("180"));
    assert_eq!(rows[2].get(8), Some("2020-01-03"));
    assert_eq!(rows[2].get(9), Some("Rock"));
}

#[test]
fn test_playlist_base_mode_omits_enrichment_columns() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("playlist_2.csv");

    write_tracks(&path, ExportMode::Playlist, &[record(1)]).unwrap();

    let (header, rows) = read_back(&path);
    assert_eq!(header.len(), 8);
    assert_eq!(header.get(6), Some("Album"));
    assert_eq!(header.get(7), Some("Album Link"));
    assert_eq!(rows[0].len(), 8);
}

#[test]
fn test_album_mode_omits_album_columns() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("album_302127.csv");

    write_tracks(&path, ExportMode::AlbumTracks, &[record(1)]).unwrap();

    let (header, rows) = read_back(&path);
    assert_eq!(
        header,
        csv::StringRecord::from(vec![
            "Title",
            "Title Short",
            "Link",
            "Duration",
            "Artist",
            "Artist Link",
        ])
    );
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get(4), Some("Artist 1"));
}

#[test]
fn test_existing_file_is_overwritten() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("playlist_3.csv");

    let first: Vec<TrackRecord> = (0..5).map(record).collect();
    write_tracks(&path, ExportMode::PlaylistEnriched, &first).unwrap();

    let second: Vec<TrackRecord> = (10..12).map(record).collect();
    write_tracks(&path, ExportMode::PlaylistEnriched, &second).unwrap();

    let (_, rows) = read_back(&path);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get(0), Some("Track 10"));
}

#[test]
fn test_missing_output_directory_is_created() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested/playlists/album_1.csv");

    write_tracks(&path, ExportMode::AlbumTracks, &[record(1)]).unwrap();
    assert!(path.is_file());
}

#[test]
fn test_empty_accumulation_writes_header_only_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("playlist_empty.csv");

    write_tracks(&path, ExportMode::PlaylistEnriched, &[]).unwrap();

    let (header, rows) = read_back(&path);
    assert_eq!(header.len(), 10);
    assert!(rows.is_empty());
}

#[test]
fn test_fields_with_delimiters_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("playlist_4.csv");

    let mut tricky = record(1);
    tricky.title = "Comma, \"quote\" and\nnewline".to_string();
    write_tracks(&path, ExportMode::Playlist, &[tricky.clone()]).unwrap();

    let (_, rows) = read_back(&path);
    assert_eq!(rows[0].get(0), Some(tricky.title.as_str()));
}
