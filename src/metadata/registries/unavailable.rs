use tracing::debug;

use crate::metadata::error::LookupError;
use crate::metadata::registry::MetadataRegistry;

/// Registry used when no search path could be discovered.
/// Every lookup fails with the discovery error, so each package is still reported.
#[derive(Debug, Clone)]
pub struct UnavailableRegistry {
    reason: String,
}

impl UnavailableRegistry {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl MetadataRegistry for UnavailableRegistry {
    fn resolve_version(&self, package_name: &str) -> Result<String, LookupError> {
        debug!("Skipping lookup of {}: registry unavailable", package_name);
        Err(LookupError::Unavailable(self.reason.clone()))
    }
}
