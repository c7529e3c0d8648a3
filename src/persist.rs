//! Plain-text URL files: one URL per line, no header.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("Failed to read URLs from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write URLs to {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Trimmed, non-blank lines of `text`
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read a URL file
pub fn read_urls(path: &Path) -> Result<Vec<String>, PersistError> {
    let content = fs::read_to_string(path).map_err(|source| PersistError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let urls = parse_lines(&content);
    info!("Loaded {} URLs from {:?}", urls.len(), path);
    Ok(urls)
}

/// Write `lines` to `path`, one per line, and return how many were written.
///
/// The content goes to a hidden temp file next to `path` and is renamed into place,
/// so a failed write never leaves a half-written target behind.
pub fn write_urls<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<usize, PersistError> {
    let write_err = |source: io::Error| PersistError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut content = String::new();
    let mut written = 0;
    for line in lines {
        let line = line.as_ref();
        if line.is_empty() {
            continue;
        }
        content.push_str(line);
        content.push('\n');
        written += 1;
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let tmp_path = temp_path_for(path);
    if let Err(e) = fs::write(&tmp_path, content).and_then(|()| fs::rename(&tmp_path, path)) {
        let _ = fs::remove_file(&tmp_path);
        return Err(write_err(e));
    }

    debug!("Wrote {} URLs to {:?}", written, path);
    Ok(written)
}

/// `dir/.links.txt.<pid>.tmp` for `dir/links.txt`, never a name the user might own
fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "urls".to_string());
    path.with_file_name(format!(".{}.{}.tmp", file_name, std::process::id()))
}
