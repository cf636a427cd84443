//! Installed distributions on a Python search path
//!
//! Mirrors `importlib.metadata.version`: every directory of the search path
//! is scanned in order for `<name>-<version>.dist-info` directories and
//! `<name>[-<version>...].egg-info` directories or files. The first entry
//! whose normalized name matches wins, and its version is the `Version`
//! header of the core metadata.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use indexmap::IndexSet;
use pep508_rs::PackageName;
use tracing::{debug, trace};

use crate::metadata::error::LookupError;
use crate::metadata::registry::MetadataRegistry;

const DIST_INFO_SUFFIX: &str = ".dist-info";
const EGG_INFO_SUFFIX: &str = ".egg-info";

/// Core metadata file names inside an info directory, in lookup order
const METADATA_FILES: &[&str] = &["METADATA", "PKG-INFO"];

/// Registry implementation backed by `.dist-info` / `.egg-info` entries on disk
#[derive(Debug, Clone)]
pub struct SitePackagesRegistry {
    search_path: Vec<PathBuf>,
}

impl SitePackagesRegistry {
    /// Creates a registry searching the given directories, earliest first.
    /// Repeated directories are only searched at their first position.
    pub fn new<I, P>(search_path: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let search_path: IndexSet<PathBuf> = search_path.into_iter().map(Into::into).collect();
        Self {
            search_path: search_path.into_iter().collect(),
        }
    }

    pub fn search_path(&self) -> &[PathBuf] {
        &self.search_path
    }

    fn find_distribution(&self, name: &PackageName) -> Option<InstalledDistribution> {
        self.search_path
            .iter()
            .find_map(|dir| find_in_directory(dir, name))
    }
}

impl MetadataRegistry for SitePackagesRegistry {
    fn resolve_version(&self, package_name: &str) -> Result<String, LookupError> {
        if package_name.is_empty() {
            return Err(LookupError::EmptyName);
        }

        // An invalid name cannot belong to any installed distribution
        let name = PackageName::from_str(package_name).map_err(|e| {
            debug!("{:?} is not a valid distribution name: {}", package_name, e);
            LookupError::NotInstalled(package_name.to_string())
        })?;

        let distribution = self
            .find_distribution(&name)
            .ok_or_else(|| LookupError::NotInstalled(package_name.to_string()))?;

        debug!("Resolved {} to {:?}", name, distribution.path);
        distribution.read_version()
    }
}

/// A matching `.dist-info` or `.egg-info` entry
#[derive(Debug)]
struct InstalledDistribution {
    path: PathBuf,
}

impl InstalledDistribution {
    fn read_version(&self) -> Result<String, LookupError> {
        let (metadata_path, content) = self.read_metadata()?;
        parse_version(&content).ok_or(LookupError::MissingVersion(metadata_path))
    }

    /// Reads the first non-empty metadata file. An `.egg-info` file is its own metadata.
    fn read_metadata(&self) -> Result<(PathBuf, String), LookupError> {
        let candidates: Vec<PathBuf> = if self.path.is_dir() {
            METADATA_FILES.iter().map(|f| self.path.join(f)).collect()
        } else {
            vec![self.path.clone()]
        };

        for candidate in candidates {
            match fs::read(&candidate) {
                Ok(bytes) if bytes.is_empty() => {
                    debug!("Skipping empty metadata file {:?}", candidate);
                }
                Ok(bytes) => {
                    let content = String::from_utf8_lossy(&bytes).into_owned();
                    return Ok((candidate, content));
                }
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(source) => {
                    return Err(LookupError::Io {
                        path: candidate,
                        source,
                    });
                }
            }
        }

        Err(LookupError::MissingMetadata(self.path.clone()))
    }
}

fn find_in_directory(dir: &Path, name: &PackageName) -> Option<InstalledDistribution> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            trace!("Skipping search path entry {:?}: {}", dir, e);
            return None;
        }
    };

    let mut file_names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    file_names.sort();

    file_names
        .into_iter()
        .find(|file_name| distribution_name(file_name).as_ref() == Some(name))
        .map(|file_name| InstalledDistribution {
            path: dir.join(file_name),
        })
}

/// Extracts the normalized distribution name from an info entry's file name.
///
/// `foo_bar-1.0.dist-info` and `Foo.Bar-1.0-py3.12.egg-info` both yield `foo-bar`.
fn distribution_name(file_name: &str) -> Option<PackageName> {
    let lower = file_name.to_ascii_lowercase();
    let suffix_len = if lower.ends_with(DIST_INFO_SUFFIX) {
        DIST_INFO_SUFFIX.len()
    } else if lower.ends_with(EGG_INFO_SUFFIX) {
        EGG_INFO_SUFFIX.len()
    } else {
        return None;
    };

    let stem = &file_name[..file_name.len() - suffix_len];
    let name = stem.split('-').next().filter(|name| !name.is_empty())?;
    PackageName::from_str(name).ok()
}

/// Returns the first `Version` header of an RFC 822 style metadata document.
fn parse_version(metadata: &str) -> Option<String> {
    metadata
        .lines()
        .take_while(|line| !line.trim().is_empty())
        .filter(|line| !line.starts_with([' ', '\t']))
        .filter_map(|line| line.split_once(':'))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("version"))
        .map(|(_, value)| value.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("fsspec-2024.6.1.dist-info", Some("fsspec"))]
    #[case("typing_extensions-4.12.2.dist-info", Some("typing-extensions"))]
    #[case("PyYAML-6.0.1.dist-info", Some("pyyaml"))]
    #[case("zope.interface-6.4.dist-info", Some("zope-interface"))]
    #[case("Foo-1.0-py3.12.egg-info", Some("foo"))]
    #[case("foo.egg-info", Some("foo"))]
    #[case("FOO-1.0.DIST-INFO", Some("foo"))]
    #[case("fsspec", None)]
    #[case("fsspec-2024.6.1.data", None)]
    #[case("__pycache__", None)]
    #[case("-1.0.dist-info", None)]
    fn distribution_name_from_file_name(#[case] file_name: &str, #[case] expected: Option<&str>) {
        let expected = expected.map(|name| PackageName::from_str(name).unwrap());
        assert_eq!(distribution_name(file_name), expected);
    }

    #[test]
    fn parse_version_reads_version_header() {
        let metadata = "Metadata-Version: 2.1\nName: fsspec\nVersion: 2024.6.1\nSummary: File-system specification\n";
        assert_eq!(parse_version(metadata), Some("2024.6.1".to_string()));
    }

    #[test]
    fn parse_version_ignores_case_and_whitespace() {
        let metadata = "Name: foo\nversion:   1.2.3  \n";
        assert_eq!(parse_version(metadata), Some("1.2.3".to_string()));
    }

    #[test]
    fn parse_version_stops_at_body() {
        let metadata = "Metadata-Version: 2.1\nName: foo\n\nVersion: 9.9.9 appears in the description\n";
        assert_eq!(parse_version(metadata), None);
    }

    #[test]
    fn parse_version_skips_continuation_lines() {
        let metadata = "Name: foo\nSummary: first line\n Version: not a header\nVersion: 0.3\n";
        assert_eq!(parse_version(metadata), Some("0.3".to_string()));
    }

    #[test]
    fn parse_version_takes_first_header() {
        let metadata = "Version: 1.0\nVersion: 2.0\n";
        assert_eq!(parse_version(metadata), Some("1.0".to_string()));
    }

    #[test]
    fn new_deduplicates_search_path_keeping_first_position() {
        let registry = SitePackagesRegistry::new(["/a", "/b", "/a", "/c"]);
        assert_eq!(
            registry.search_path(),
            &[
                PathBuf::from("/a"),
                PathBuf::from("/b"),
                PathBuf::from("/c")
            ]
        );
    }

    #[test]
    fn resolve_version_rejects_empty_name() {
        let registry = SitePackagesRegistry::new(Vec::<PathBuf>::new());
        let result = registry.resolve_version("");
        assert!(matches!(result, Err(LookupError::EmptyName)));
    }

    #[test]
    fn resolve_version_treats_invalid_name_as_not_installed() {
        let registry = SitePackagesRegistry::new(Vec::<PathBuf>::new());
        let result = registry.resolve_version("not a name!");
        assert!(matches!(result, Err(LookupError::NotInstalled(name)) if name == "not a name!"));
    }
}
