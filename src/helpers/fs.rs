//! File System Utilities
//!
//! Configuration and data directory management.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use home::home_dir;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "goldwind", "common-button").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Get or create the configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/common-button/` or `$XDG_CONFIG_HOME/common-button/`
/// - **macOS**: `~/Library/Application Support/com.goldwind.common-button/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\goldwind\common-button\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let config_dir = project_dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    if let Some(home) = home_dir() {
        migrate_legacy_dir(&home.join(".common-button"), config_dir);
    }

    Ok(config_dir.to_path_buf())
}

/// Move files from the old dotfile location into `config_dir`
///
/// The old directory is removed only after every file was copied.
fn migrate_legacy_dir(old_dir: &Path, config_dir: &Path) {
    if !old_dir.is_dir() {
        return;
    }

    match copy_dir_files(old_dir, config_dir) {
        Ok(()) => {
            info!(from = ?old_dir, to = ?config_dir, "Migrated legacy config directory");
            if let Err(e) = fs::remove_dir_all(old_dir) {
                warn!(error = %e, path = ?old_dir, "Failed to remove legacy config directory");
            }
        }
        Err(e) => {
            warn!(error = %e, path = ?old_dir, "Legacy config migration failed; keeping old directory");
        }
    }
}

/// Copy files (not directories) from source to destination
///
/// Files already present in the destination are left untouched.
fn copy_dir_files(src: &Path, dst: &Path) -> Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            continue;
        }
        let target = dst.join(entry.file_name());
        if target.exists() {
            continue;
        }
        fs::copy(entry.path(), target)?;
    }
    Ok(())
}

/// Get or create the data directory, where log files go
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/common-button/`
/// - **macOS**: `~/Library/Application Support/com.goldwind.common-button/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\goldwind\common-button\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let data_dir = project_dirs.data_dir();

    if !data_dir.exists() {
        fs::create_dir_all(data_dir)?;
    }

    Ok(data_dir.to_path_buf())
}
