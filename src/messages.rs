use std::path::PathBuf;

/// Response messages from background operations
pub enum ResponseMessage {
    UrlsLoaded(Result<(PathBuf, Vec<String>), String>), // (source, lines), error
    UrlsSaved(Result<(PathBuf, usize), String>),        // (destination, written), error
}
