#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use dist_version::metadata::{LookupError, MetadataRegistry};
use tempfile::TempDir;

/// In-memory registry returning canned results per package name
#[derive(Default)]
pub struct FakeRegistry {
    versions: HashMap<String, String>,
    failures: HashMap<String, String>,
}

impl FakeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_version(mut self, package_name: &str, version: &str) -> Self {
        self.versions
            .insert(package_name.to_string(), version.to_string());
        self
    }

    pub fn with_failure(mut self, package_name: &str, message: &str) -> Self {
        self.failures
            .insert(package_name.to_string(), message.to_string());
        self
    }
}

impl MetadataRegistry for FakeRegistry {
    fn resolve_version(&self, package_name: &str) -> Result<String, LookupError> {
        if let Some(message) = self.failures.get(package_name) {
            return Err(LookupError::Unavailable(message.clone()));
        }
        self.versions
            .get(package_name)
            .cloned()
            .ok_or_else(|| LookupError::NotInstalled(package_name.to_string()))
    }
}

/// Builds a throwaway site-packages directory
pub struct SiteDir {
    dir: TempDir,
}

impl SiteDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Adds `<dir_name>/METADATA` with the given name and version
    pub fn dist_info(self, dir_name: &str, name: &str, version: &str) -> Self {
        let metadata = format!("Metadata-Version: 2.1\nName: {}\nVersion: {}\n\nLong description.\n", name, version);
        self.file(&format!("{}/METADATA", dir_name), &metadata)
    }

    /// Writes an arbitrary file, creating parent directories
    pub fn file(self, relative: &str, content: &str) -> Self {
        let path = self.dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
        self
    }

    pub fn empty_dir(self, relative: &str) -> Self {
        fs::create_dir_all(self.dir.path().join(relative)).unwrap();
        self
    }

    pub fn to_path_buf(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }
}
