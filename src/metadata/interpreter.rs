//! Search path discovery through a Python interpreter

use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Command;

use serde::Deserialize;
use tracing::{debug, info};

use crate::metadata::error::DiscoveryError;

/// Prints the interpreter's executable and `sys.path` as one JSON object
const PROBE_SCRIPT: &str =
    "import json, sys; json.dump({'executable': sys.executable, 'path': sys.path}, sys.stdout)";

/// What a Python interpreter reports about itself
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InterpreterInfo {
    /// Absolute path of the interpreter binary (may be empty when Python cannot tell)
    pub executable: String,
    /// `sys.path`, in import order
    pub path: Vec<String>,
}

impl InterpreterInfo {
    /// Directories to search for installed distributions.
    /// An empty `sys.path` entry means the current directory.
    pub fn search_path(&self) -> Vec<PathBuf> {
        self.path
            .iter()
            .map(|entry| {
                if entry.is_empty() {
                    PathBuf::from(".")
                } else {
                    PathBuf::from(entry)
                }
            })
            .collect()
    }
}

/// Runs `interpreter` and reads its search path.
pub fn probe(interpreter: &str) -> Result<InterpreterInfo, DiscoveryError> {
    debug!("Probing interpreter {}", interpreter);

    let output = Command::new(interpreter)
        .args(["-c", PROBE_SCRIPT])
        .output()
        .map_err(|source| DiscoveryError::Spawn {
            interpreter: interpreter.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(DiscoveryError::Status {
            interpreter: interpreter.to_string(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    decode(interpreter, &output.stdout)
}

/// Probes each candidate in order and returns the first interpreter that answers.
///
/// A candidate that does not exist is skipped; any other failure is returned as is.
pub fn discover(candidates: &[&str]) -> Result<InterpreterInfo, DiscoveryError> {
    for candidate in candidates {
        match probe(candidate) {
            Ok(info) => {
                info!(
                    "Using interpreter {} ({}) with {} search path entries",
                    candidate,
                    info.executable,
                    info.path.len()
                );
                return Ok(info);
            }
            Err(DiscoveryError::Spawn { source, .. }) if source.kind() == ErrorKind::NotFound => {
                debug!("Interpreter {} not found", candidate);
            }
            Err(e) => return Err(e),
        }
    }

    Err(DiscoveryError::NoInterpreter(candidates.join(", ")))
}

fn decode(interpreter: &str, stdout: &[u8]) -> Result<InterpreterInfo, DiscoveryError> {
    serde_json::from_slice(stdout).map_err(|source| DiscoveryError::Decode {
        interpreter: interpreter.to_string(),
        source,
    })
}
