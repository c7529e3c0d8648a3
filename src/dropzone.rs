//! Routing for dropped and pasted payloads
use std::path::{Path, PathBuf};
use url::Url;

const FILE_SCHEME: &str = "file://";
const WEB_SCHEMES: [&str; 2] = ["http://", "https://"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropAction {
    /// Replace the store with the URLs listed in this file
    LoadFile(PathBuf),
    AddUrl(String),
    Ignore,
}

pub fn classify(payload: &str) -> DropAction {
    let payload = payload.trim();

    if payload.starts_with(FILE_SCHEME) {
        return DropAction::LoadFile(file_url_to_path(payload));
    }

    if WEB_SCHEMES.iter().any(|scheme| payload.starts_with(scheme)) {
        return DropAction::AddUrl(payload.to_string());
    }

    DropAction::Ignore
}

/// Classify every line of a multi-line payload, skipping ignored ones
pub fn classify_all(payload: &str) -> Vec<DropAction> {
    payload
        .lines()
        .map(classify)
        .filter(|action| *action != DropAction::Ignore)
        .collect()
}

/// A dropped local file is always a load request
pub fn classify_path(path: &Path) -> DropAction {
    DropAction::LoadFile(path.to_path_buf())
}

fn file_url_to_path(payload: &str) -> PathBuf {
    Url::parse(payload)
        .ok()
        .and_then(|url| url.to_file_path().ok())
        .unwrap_or_else(|| PathBuf::from(&payload[FILE_SCHEME.len()..]))
}
