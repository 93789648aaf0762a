//! Deezer CSV Exporter Library
//!
//! This library backs the `deezex` command-line tool, which walks the public
//! Deezer API (a user's playlists, a single playlist, or an album), flattens
//! every track it finds into a tabular record, and writes one CSV file per
//! playlist or album.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations (one export routine per entity kind)
//! - `config` - Configuration management and environment variables
//! - `deezer` - Deezer API client, pagination, and enrichment
//! - `output` - CSV projection and file writing
//! - `types` - Data structures and type definitions
//! - `utils` - Input resolution and filename helpers
//!
//! # Example
//!
//! ```
//! use deezex::{config, cli};
//!
//! #[tokio::main]
//! async fn main() {
//!     config::load_env().await.ok();
//!     // Dispatch to one of the cli export functions...
//! }
//! ```

pub mod cli;
pub mod config;
pub mod deezer;
pub mod output;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a blue "o" indicator followed by
/// the provided message. Used for general status updates while an export
/// is running.
///
/// # Example
///
/// ```
/// info!("Found {} playlists.", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Used to confirm that an export step completed, most prominently after a
/// CSV file has been written.
///
/// # Example
///
/// ```
/// success!("Playlist \"{}\" saved.", title);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the process with exit code 1 immediately after printing.
/// Reserved for unrecoverable situations such as unresolvable input or a
/// CSV file that cannot be written; anything the run can survive goes
/// through `warning!` instead.
///
/// # Example
///
/// ```
/// error!("Invalid input. Could not extract an id from {}", input);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues: an aborted page loop whose partial results
/// are still written, a playlist whose file could not be created, an empty
/// album.
///
/// # Example
///
/// ```
/// warning!("No tracks found in this album.");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
