//! Access to the previously published registry (remote or cached)

pub mod cache;
pub mod fetch;
pub mod source;

pub use cache::{load_cached_snapshot, write_snapshot};
pub use fetch::{HttpFetcher, SnapshotFetcher};
pub use source::{resolve_previous, ResolvedSnapshot, SnapshotOrigin, SourceOptions};
