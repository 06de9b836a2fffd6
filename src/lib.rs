pub mod config;
pub mod error;
pub mod facade;
pub mod format;
pub mod probe;
pub mod resolver;
pub mod semver;
pub mod ui;

pub use error::{Result, VersionError};
