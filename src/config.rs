//! Configuration management for the Deezer CSV exporter.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and an optional `.env` file. The Deezer API that
//! deezex consumes is public and unauthenticated, so every value has a
//! sensible default; the configuration system follows a hierarchical
//! approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf};

use dotenv;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and, when a
/// `.env` file is present under the platform-specific local data directory
/// (`deezex/.env`), loads it. A missing file is not an error since all
/// configuration values have defaults.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/deezex/.env`
/// - macOS: `~/Library/Application Support/deezex/.env`
/// - Windows: `%LOCALAPPDATA%/deezex/.env`
///
/// # Errors
///
/// Returns an error string if the parent directory cannot be created or an
/// existing `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("deezex/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the Deezer API base URL.
///
/// Retrieves the `DEEZEX_API_URL` environment variable, falling back to the
/// public endpoint when unset.
///
/// # Example
///
/// ```
/// let api_url = api_url(); // e.g., "https://api.deezer.com"
/// ```
pub fn api_url() -> String {
    env::var("DEEZEX_API_URL").unwrap_or_else(|_| "https://api.deezer.com".to_string())
}

/// Returns the directory CSV files are written to.
///
/// Retrieves the `DEEZEX_OUTPUT_DIR` environment variable, falling back to
/// the relative `playlists` directory. The directory is created on demand by
/// the output writer.
///
/// # Example
///
/// ```
/// let out_dir = output_dir(); // e.g., PathBuf::from("playlists")
/// ```
pub fn output_dir() -> PathBuf {
    env::var("DEEZEX_OUTPUT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("playlists"))
}
