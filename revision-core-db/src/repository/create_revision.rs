use async_trait::async_trait;

use crate::models::revision::RevisionModel;

/// Repository trait for appending a single revision entry
///
/// Entries are immutable and independently keyed, so writes need no
/// coordination with each other. Emission performs one call per changed
/// field; a failed call propagates to the saver while entries already
/// written stay in place.
///
/// # Example
/// ```ignore
/// #[async_trait]
/// impl CreateRevision for RevisionRepositoryImpl {
///     async fn create(&self, revision: &RevisionModel) -> Result<RevisionModel, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait CreateRevision: Send + Sync {
    /// Persist one revision entry
    ///
    /// # Arguments
    /// * `revision` - The fully constructed entry to append
    ///
    /// # Returns
    /// * `Ok(RevisionModel)` - The entry as stored
    /// * `Err` - An error if the write could not be executed
    async fn create(
        &self,
        revision: &RevisionModel,
    ) -> Result<RevisionModel, Box<dyn std::error::Error + Send + Sync>>;
}
