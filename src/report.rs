//! Per-package status lines

use std::io::{self, Write};

use tracing::{debug, info, warn};

use crate::config::VERSION_TYPE_NAME;
use crate::metadata::{LookupOutcome, MetadataRegistry};

/// Looks packages up in a registry and writes one status line per package.
pub struct VersionReporter<R, W> {
    registry: R,
    out: W,
}

impl<R: MetadataRegistry, W: Write> VersionReporter<R, W> {
    pub fn new(registry: R, out: W) -> Self {
        Self { registry, out }
    }

    /// Reports a single package and returns its version when installed.
    ///
    /// Lookup failures are written as a status line and never returned; the
    /// only error is failing to write to the output.
    pub fn check(&mut self, package_name: &str) -> io::Result<Option<String>> {
        let outcome = self.lookup(package_name);
        writeln!(self.out, "{}", format_outcome(package_name, &outcome))?;
        Ok(outcome.into_version())
    }

    /// Reports every package in order, without stopping at failed lookups.
    pub fn check_all<'a, I>(&mut self, package_names: I) -> io::Result<Vec<Option<String>>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        package_names
            .into_iter()
            .map(|name| self.check(name))
            .collect()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn lookup(&self, package_name: &str) -> LookupOutcome {
        let outcome = LookupOutcome::from(self.registry.resolve_version(package_name));
        match &outcome {
            LookupOutcome::Found(version) => debug!("{} is installed at {}", package_name, version),
            LookupOutcome::NotInstalled => info!("{} is not installed", package_name),
            LookupOutcome::Error(message) => {
                warn!("Failed to check version for {}: {}", package_name, message)
            }
        }
        outcome
    }
}

/// Renders the status line for one lookup.
pub fn format_outcome(package_name: &str, outcome: &LookupOutcome) -> String {
    match outcome {
        LookupOutcome::Found(version) => {
            format!(
                "{} version: {} (type: {})",
                package_name, version, VERSION_TYPE_NAME
            )
        }
        LookupOutcome::NotInstalled => format!("Package {} is not installed.", package_name),
        LookupOutcome::Error(message) => {
            format!("Error checking version for {}: {}", package_name, message)
        }
    }
}
