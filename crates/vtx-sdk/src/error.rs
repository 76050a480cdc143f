// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Typed errors for loading and converting keys and proofs.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("verifying key: {0}")]
    Key(vtx_types::Error),

    #[error("proof: {0}")]
    Proof(vtx_types::Error),

    #[error("config: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SdkResult<T> = Result<T, SdkError>;

pub(crate) fn read_file(path: &std::path::Path) -> SdkResult<String> {
    std::fs::read_to_string(path).map_err(|source| SdkError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn read_bytes(path: &std::path::Path) -> SdkResult<Vec<u8>> {
    std::fs::read(path).map_err(|source| SdkError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn write_file(path: &std::path::Path, contents: String) -> SdkResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| SdkError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, contents).map_err(|source| SdkError::Io {
        path: path.to_path_buf(),
        source,
    })
}
