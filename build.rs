//! Build script for the Deezer CSV exporter.
//!
//! Copies the configuration template from the crate root into the user's
//! local data directory so that a ready-to-edit `.env.example` is available
//! at the location where the application looks for its `.env` file.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` into the platform-specific local data directory.
///
/// The destination is `deezex/.env.example` under the local data directory:
/// - Linux: `~/.local/share/deezex/.env.example`
/// - macOS: `~/Library/Application Support/deezex/.env.example`
/// - Windows: `%LOCALAPPDATA%/deezex/.env.example`
///
/// A missing template only produces a cargo warning; directory creation or
/// copy failures abort the build.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Re-run if the template changes
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("deezex");
    fs::create_dir_all(&out_dir)?;

    // Only copy if the source exists; otherwise warn instead of failing
    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
