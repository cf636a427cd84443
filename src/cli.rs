use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use crate::config::DEFAULT_INTERPRETERS;
use crate::metadata::interpreter;
use crate::metadata::registries::{SitePackagesRegistry, UnavailableRegistry};
use crate::metadata::MetadataRegistry;

/// Print the installed versions of fsspec, datasets, boto3, mteb and packaging.
#[derive(Debug, Parser)]
#[command(name = "dist-version", version, about)]
pub struct Cli {
    /// Python interpreter whose sys.path is searched [default: python3, then python]
    #[arg(long, value_name = "PATH")]
    pub python: Option<String>,

    /// Search these directories instead of asking an interpreter (repeatable)
    #[arg(long = "path", value_name = "DIR", conflicts_with = "python")]
    pub paths: Vec<PathBuf>,
}

impl Cli {
    /// Builds the registry the packages are looked up in.
    ///
    /// A failed interpreter probe does not abort the run; it yields a registry
    /// whose lookups all report the failure.
    pub fn registry(&self) -> Box<dyn MetadataRegistry> {
        if !self.paths.is_empty() {
            info!("Searching {} explicit directories", self.paths.len());
            return Box::new(SitePackagesRegistry::new(self.paths.iter().cloned()));
        }

        let discovered = match &self.python {
            Some(python) => interpreter::probe(python),
            None => interpreter::discover(DEFAULT_INTERPRETERS),
        };

        match discovered {
            Ok(info) => Box::new(SitePackagesRegistry::new(info.search_path())),
            Err(e) => {
                error!("Failed to discover the Python search path: {}", e);
                Box::new(UnavailableRegistry::new(e.to_string()))
            }
        }
    }
}
