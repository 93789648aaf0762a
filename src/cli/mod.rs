//! # CLI Module
//!
//! This module implements the user-facing export commands of deezex. Each
//! command handles exactly one root entity end-to-end: resolve the input,
//! walk the paginated endpoints, project every track into a flat record,
//! and write the CSV file(s).
//!
//! ## Commands
//!
//! - [`export_album`] - an album's track list, 6 columns, no enrichment
//! - [`export_playlist`] - a single playlist, with per-track album details
//!   unless `--skip-album-details` is given
//! - [`export_user`] - every playlist of a user, one file per playlist,
//!   with a summary table at the end
//!
//! ## Data Flow
//!
//! ```text
//! CLI Layer (input resolution, progress feedback)
//!     ↓
//! Deezer API Layer (pagination, enrichment)
//!     ↓
//! Output Layer (CSV projection and writing)
//! ```
//!
//! ## Error Handling Philosophy
//!
//! Input that cannot be resolved aborts before any network call. A page
//! loop that dies mid-run degrades to a partial export with a warning.
//! Enrichment failures degrade silently to `"Unknown"` placeholder fields.
//! In the whole-user case a playlist whose file cannot be written is
//! skipped with a warning so its siblings still get exported.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

mod album;
mod playlist;
mod user;

pub use album::export_album;
pub use playlist::export_playlist;
pub use user::export_user;

pub(crate) fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
