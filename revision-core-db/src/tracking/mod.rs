pub mod revision_tracker;

// Re-exports
pub use revision_tracker::*;
