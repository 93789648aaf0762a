//! CSV projection and file writing.
//!
//! One file per exported playlist or album, written in a single pass after
//! the accumulation for that entity is complete: a fixed header row for the
//! active mode followed by one row per track, in fetch order. An existing
//! file of the same name is overwritten.

use std::{fmt, fs, io, path::Path};

use crate::types::TrackRecord;

const ALBUM_HEADER: [&str; 6] = [
    "Title",
    "Title Short",
    "Link",
    "Duration",
    "Artist",
    "Artist Link",
];

const PLAYLIST_HEADER: [&str; 8] = [
    "Title",
    "Title Short",
    "Link",
    "Duration",
    "Artist",
    "Artist Link",
    "Album",
    "Album Link",
];

const ENRICHED_HEADER: [&str; 10] = [
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
];

/// Selects the column set of an export file.
///
/// Album track payloads carry no embedded album, playlist payloads do, and
/// the enriched mode adds the two album detail columns on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportMode {
    AlbumTracks,
    Playlist,
    PlaylistEnriched,
}

impl ExportMode {
    pub fn header(&self) -> &'static [&'static str] {
        match self {
            ExportMode::AlbumTracks => &ALBUM_HEADER,
            ExportMode::Playlist => &PLAYLIST_HEADER,
            ExportMode::PlaylistEnriched => &ENRICHED_HEADER,
        }
    }
}

#[derive(Debug)]
pub enum OutputError {
    Io(io::Error),
    Csv(csv::Error),
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::Io(e) => write!(f, "io error: {e}"),
            OutputError::Csv(e) => write!(f, "csv error: {e}"),
        }
    }
}

impl From<io::Error> for OutputError {
    fn from(e: io::Error) -> Self {
        OutputError::Io(e)
    }
}

impl From<csv::Error> for OutputError {
    fn from(e: csv::Error) -> Self {
        OutputError::Csv(e)
    }
}

/// Writes the accumulated records to `path` as CSV.
///
/// Creates the parent directory if missing, writes the header of the given
/// mode plus one row per record, and flushes. Column order is stable and
/// matches [`ExportMode::header`] exactly.
pub fn write_tracks(
    path: &Path,
    mode: ExportMode,
    records: &[TrackRecord],
) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(mode.header())?;
    for record in records {
        writer.write_record(row(record, mode))?;
    }
    writer.flush()?;

    Ok(())
}

fn row(record: &TrackRecord, mode: ExportMode) -> Vec<String> {
    let mut fields = vec![
        record.title.clone(),
        record.title_short.clone(),
        record.link.clone(),
        record.duration.to_string(),
        record.artist.clone(),
        record.artist_link.clone(),
    ];

    if mode != ExportMode::AlbumTracks {
        fields.push(record.album.clone());
        fields.push(record.album_link.clone());
    }
    if mode == ExportMode::PlaylistEnriched {
        fields.push(record.release_date.clone());
        fields.push(record.genre.clone());
    }

    fields
}
