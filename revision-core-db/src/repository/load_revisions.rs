use async_trait::async_trait;
use uuid::Uuid;

use crate::models::revision::RevisionModel;
use crate::repository::pagination::{Page, PageRequest};

/// Repository trait for reading an entity's revision history with pagination
///
/// The history is the reverse-navigation accessor of the revisions store:
/// all entries whose type tag and entity id match, most recent first.
///
/// # Example
/// ```ignore
/// use revision_core_db::repository::pagination::PageRequest;
///
/// let page = repo.load_revisions("Article", article_id, PageRequest::new(20, 0)).await?;
/// println!("Page {} of {}", page.page_number(), page.total_pages());
/// ```
#[async_trait]
pub trait LoadRevisions: Send + Sync {
    /// Load paginated revision entries for one tracked entity
    ///
    /// # Arguments
    /// * `revisionable_type` - Type tag of the tracked entity
    /// * `revisionable_id` - The UUID of the tracked entity
    /// * `page` - The pagination parameters (limit and offset)
    ///
    /// # Returns
    /// * `Ok(Page<RevisionModel>)` - A page of entries ordered by recency
    /// * `Err` - An error if the entries could not be loaded
    async fn load_revisions(
        &self,
        revisionable_type: &str,
        revisionable_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<RevisionModel>, Box<dyn std::error::Error + Send + Sync>>;
}
