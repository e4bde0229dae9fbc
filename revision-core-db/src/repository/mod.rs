pub mod create_revision;
pub mod find_by_id;
pub mod load_revisions;
pub mod pagination;

// Re-exports
pub use create_revision::*;
pub use find_by_id::*;
pub use load_revisions::*;
pub use pagination::*;

/// Bundle of the store capabilities the tracker needs: appending entries and
/// reading an entity's history back.
pub trait RevisionStore: CreateRevision + LoadRevisions {}

impl<T: CreateRevision + LoadRevisions> RevisionStore for T {}
