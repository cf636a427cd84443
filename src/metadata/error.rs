use std::path::PathBuf;

use thiserror::Error;

/// Why a version lookup did not produce a version.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("No package metadata was found for {0}")]
    NotInstalled(String),

    #[error("A distribution name is required.")]
    EmptyName,

    #[error("metadata file not found in {}", .0.display())]
    MissingMetadata(PathBuf),

    #[error("no Version field in {}", .0.display())]
    MissingVersion(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("package metadata is unavailable: {0}")]
    Unavailable(String),
}

/// Failures while asking a Python interpreter for its search path.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("failed to run {interpreter}: {source}")]
    Spawn {
        interpreter: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{interpreter} exited with {status}: {stderr}")]
    Status {
        interpreter: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("unexpected output from {interpreter}: {source}")]
    Decode {
        interpreter: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no Python interpreter found (tried {0})")]
    NoInterpreter(String),
}
