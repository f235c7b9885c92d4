use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed input: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses a JSON document such as `[3, 1, 2]` or `[[0, 0], [0, 1]]`.
pub fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T, LoadError> {
    Ok(serde_json::from_str(text)?)
}

/// Reads and parses a JSON file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "loaded input file");
    parse_json(&text)
}
