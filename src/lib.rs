pub mod cli;
pub mod config;
pub mod log;
pub mod metadata;
pub mod report;

use std::io::{self, Write};

use crate::metadata::MetadataRegistry;
use crate::report::VersionReporter;

/// Reports every package of [`config::DEFAULT_PACKAGES`], in order.
pub fn run<R: MetadataRegistry, W: Write>(registry: R, out: W) -> io::Result<()> {
    let mut reporter = VersionReporter::new(registry, out);
    reporter.check_all(config::DEFAULT_PACKAGES.iter().copied())?;
    reporter.into_inner().flush()
}
