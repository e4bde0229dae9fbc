pub mod identifiable;
pub mod revision;
pub mod revisionable;

// Re-exports
pub use identifiable::*;
pub use revision::*;
pub use revisionable::*;
