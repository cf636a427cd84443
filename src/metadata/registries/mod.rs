//! Registry implementations for looking up installed versions

pub mod site_packages;
pub mod unavailable;

pub use site_packages::SitePackagesRegistry;
pub use unavailable::UnavailableRegistry;
