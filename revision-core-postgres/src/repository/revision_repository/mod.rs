pub mod create;
pub mod find_by_id;
pub mod load_revisions;
pub mod repo_impl;

pub use repo_impl::RevisionRepositoryImpl;
