pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod registry;
pub mod scan;
pub mod ui;

pub use domain::{bump, evaluate, BumpCategory, DiffResult, RegistrySnapshot};
pub use error::{RegistryVersionError, Result};
