//! Installed package metadata
//! - registry.rs: MetadataRegistry trait definition
//! - types.rs: LookupOutcome
//! - interpreter.rs: sys.path discovery through a Python interpreter
//! - registries/: MetadataRegistry implementations
//!   - site_packages.rs: dist-info / egg-info scanning
//!   - unavailable.rs: stand-in when no search path could be discovered

pub mod error;
pub mod interpreter;
pub mod registries;
pub mod registry;
pub mod types;

pub use error::{DiscoveryError, LookupError};
pub use registry::MetadataRegistry;
pub use types::LookupOutcome;
