//! Utility functions for directory management
//!
//! Follows the XDG Base Directory specification for portable configuration
//! and log storage.
//!
//! # Directory Structure
//!
//! - Data: `~/.local/share/gallery/` - Persisted configuration
//! - State: `~/.local/state/gallery/` - Log file
//!
//! # Example
//!
//! ```no_run
//! use gallery::utils::{ensure_dirs, get_data_dir};
//!
//! ensure_dirs().expect("Failed to create directories");
//!
//! if let Some(data_path) = get_data_dir() {
//!     // Load configuration from data_path
//! }
//! ```

use directories::ProjectDirs;
use std::path::PathBuf;

const APP_NAME: &str = "gallery";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", APP_NAME, APP_NAME)
}

/// Directory holding `config.json`. `None` when no home directory is known.
pub fn get_data_dir() -> Option<PathBuf> {
    project_dirs().map(|pd| pd.data_dir().to_path_buf())
}

/// Directory holding `gallery.log`.
///
/// Only some platforms define a state directory (XDG does, macOS and
/// Windows do not); the log then goes to stderr instead.
pub fn get_state_dir() -> Option<PathBuf> {
    project_dirs().and_then(|pd| pd.state_dir().map(std::path::Path::to_path_buf))
}

/// Creates the data and state directories if missing.
///
/// # Errors
///
/// Returns `Err` if a directory cannot be created.
pub fn ensure_dirs() -> std::io::Result<()> {
    let dirs = [get_data_dir(), get_state_dir()];

    #[cfg(unix)]
    {
        use std::fs::DirBuilder;
        use std::os::unix::fs::DirBuilderExt;

        let mut builder = DirBuilder::new();
        builder.mode(0o700); // Owner only
        builder.recursive(true);
        for dir in dirs.iter().flatten() {
            builder.create(dir)?;
        }
    }

    #[cfg(not(unix))]
    for dir in dirs.iter().flatten() {
        std::fs::create_dir_all(dir)?;
    }

    Ok(())
}

/// Formats a glyph code point the way resource dictionaries spell it (`&#xE721;`).
pub fn glyph_entity(glyph: char) -> String {
    format!("&#x{:X};", u32::from(glyph))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_are_app_specific() {
        // No home directory in some CI sandboxes
        if let Some(dir) = get_data_dir() {
            assert!(dir.to_string_lossy().contains(APP_NAME));
        }
        if let Some(dir) = get_state_dir() {
            assert!(dir.to_string_lossy().contains(APP_NAME));
        }
    }

    #[test]
    fn test_glyph_entity() {
        assert_eq!(glyph_entity('\u{E721}'), "&#xE721;");
        assert_eq!(glyph_entity('A'), "&#x41;");
    }
}
