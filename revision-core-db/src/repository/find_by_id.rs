use async_trait::async_trait;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for finding a record by its ID
///
/// Returns an Option to keep "does not exist" distinct from a failed query.
///
/// # Example
/// ```ignore
/// #[async_trait]
/// impl FindById<RevisionModel> for RevisionRepositoryImpl {
///     async fn find_by_id(&self, id: Uuid) -> Result<Option<RevisionModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait FindById<T: Identifiable>: Send + Sync {
    /// Find a record by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(T))` - The found record
    /// * `Ok(None)` - If the record does not exist
    /// * `Err` - An error if the query could not be executed
    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>;
}
