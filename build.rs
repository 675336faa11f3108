//! Build script for spot2yt.
//!
//! Copies the `.env.example` template next to the settings file in the
//! per-user config directory, so users find an annotated list of the
//! supported environment overrides where the application looks for `.env`:
//! - Linux: `~/.config/SpotifyToYouTube/.env.example`
//! - macOS: `~/Library/Application Support/SpotifyToYouTube/.env.example`
//! - Windows: `%APPDATA%/SpotifyToYouTube/.env.example`
//!
//! Nothing here is required for the build, so every failure is reported as a
//! cargo warning instead of an error.

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    if !env_example_path.is_file() {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
        return Ok(());
    }

    let mut out_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("SpotifyToYouTube");

    let copied = fs::create_dir_all(&out_dir)
        .and_then(|_| fs::copy(&env_example_path, out_dir.join(".env.example")));
    if let Err(e) = copied {
        println!(
            "cargo:warning=could not copy .env.example to {}: {}",
            out_dir.display(),
            e
        );
    }

    Ok(())
}
