use std::path::{Path, PathBuf};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use thiserror::Error;
use tracing::warn;
use walkdir::WalkDir;

/// File extensions treated as music, matched case-insensitively
pub const MEDIA_EXTENSIONS: &[&str] = &["mp3", "flac", "wav", "m4a", "aac", "ogg"];

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("directory not found: {path}")]
    NotADirectory { path: String },
}

/// Recursively walk `root`, returning every music file found under it.
///
/// Entries the walker cannot read are logged and skipped rather than
/// aborting the whole scan.
pub fn collect_media_files(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::NotADirectory {
            path: root.to_string_lossy().to_string(),
        });
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}").expect("Invalid spinner template"),
    );
    spinner.set_message("Scanning for music files…");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        let path = entry.path();
        if path.is_file() && !is_dot_name(path) {
            if let Some(ext) = path.extension().and_then(|s| s.to_str()) {
                if MEDIA_EXTENSIONS.contains(&ext.to_lowercase().as_str()) {
                    files.push(path.to_path_buf());
                }
            }
        }
        spinner.tick();
    }
    spinner.finish_with_message("Scan complete");
    Ok(files)
}

/// Names like `..mp3` are dotfiles, not music files: everything before
/// the final dot is itself dots, so there is no stem to take words from.
fn is_dot_name(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.chars().all(|c| c == '.'))
}
