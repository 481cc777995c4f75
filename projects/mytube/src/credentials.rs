use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// The fields we read from the token storage file. Refreshing the token is
/// left to whatever wrote the file.
#[derive(Debug, Deserialize)]
struct StoredCredentials {
    access_token: Option<String>,
}

#[derive(Debug, Error)]
pub enum LoadAccessTokenError {
    #[error("ReadTokenFile: {path}: {source}")]
    ReadTokenFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("ParseTokenFile: {path}: {source}")]
    ParseTokenFile {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("AccessTokenMissing: {path}")]
    AccessTokenMissing { path: PathBuf },
}

pub fn load_access_token(path: &Path) -> Result<String, LoadAccessTokenError> {
    let raw = std::fs::read_to_string(path).map_err(|source| LoadAccessTokenError::ReadTokenFile {
        path: path.to_path_buf(),
        source,
    })?;

    let stored: StoredCredentials =
        serde_json::from_str(&raw).map_err(|source| LoadAccessTokenError::ParseTokenFile {
            path: path.to_path_buf(),
            source,
        })?;

    let token = stored
        .access_token
        .filter(|token| !token.is_empty())
        .ok_or_else(|| LoadAccessTokenError::AccessTokenMissing {
            path: path.to_path_buf(),
        })?;

    debug!(path = %path.display(), "loaded access token");

    Ok(token)
}
