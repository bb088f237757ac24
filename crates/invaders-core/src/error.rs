//! Error types for scene construction and persistence.

use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the scene layer. None of them are fatal to a frame.
#[derive(Debug, Error)]
pub enum SceneError {
    /// A removal or lookup named an entity that no longer exists.
    #[error("entity not found: {0}")]
    EntityNotFound(String),
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed scene data in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A scene refers to an asset the manifest does not declare.
    #[error("unknown asset: {0}")]
    UnknownAsset(String),
    /// The current scene was loaded without an asset manifest.
    #[error("no asset manifest for the current scene")]
    NoManifest,
    #[error("unsupported scene file version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

impl SceneError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
