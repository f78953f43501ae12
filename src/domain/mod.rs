//! Domain logic - pure version decision rules, no I/O

pub mod diff;
pub mod identifier;
pub mod snapshot;
pub mod version;

pub use diff::{evaluate, removed_identifiers, DiffResult};
pub use identifier::normalize_identifier;
pub use snapshot::{RegistrySnapshot, SnapshotRecord, TemplateEntry};
pub use version::{bump, BumpCategory, INITIAL_VERSION};
