//! Common types for version lookups

use crate::metadata::error::LookupError;

/// Result of looking up one package
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The package is installed at this version
    Found(String),
    /// No installed distribution matches the name
    NotInstalled,
    /// The lookup failed; holds the error description
    Error(String),
}

impl LookupOutcome {
    /// Consumes the outcome, returning the version if one was found
    pub fn into_version(self) -> Option<String> {
        match self {
            LookupOutcome::Found(version) => Some(version),
            _ => None,
        }
    }
}

impl From<Result<String, LookupError>> for LookupOutcome {
    fn from(result: Result<String, LookupError>) -> Self {
        match result {
            Ok(version) => LookupOutcome::Found(version),
            Err(LookupError::NotInstalled(_)) => LookupOutcome::NotInstalled,
            Err(e) => LookupOutcome::Error(e.to_string()),
        }
    }
}
