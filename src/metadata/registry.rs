//! Registry trait for looking up installed package versions

use crate::metadata::error::LookupError;

/// Trait for resolving the installed version of a distribution
pub trait MetadataRegistry {
    /// Looks up the installed version of a package
    ///
    /// # Arguments
    /// * `package_name` - The distribution name as the user wrote it (e.g., "PyYAML")
    ///
    /// # Returns
    /// * `Ok(String)` - The version string recorded in the package metadata
    /// * `Err(LookupError::NotInstalled)` - If no installed distribution matches
    /// * `Err(LookupError)` - If the metadata exists but cannot be read
    fn resolve_version(&self, package_name: &str) -> Result<String, LookupError>;
}

impl<R: MetadataRegistry + ?Sized> MetadataRegistry for &R {
    fn resolve_version(&self, package_name: &str) -> Result<String, LookupError> {
        (**self).resolve_version(package_name)
    }
}

impl<R: MetadataRegistry + ?Sized> MetadataRegistry for Box<R> {
    fn resolve_version(&self, package_name: &str) -> Result<String, LookupError> {
        (**self).resolve_version(package_name)
    }
}
