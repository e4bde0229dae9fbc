use async_trait::async_trait;
use revision_core_db::models::revision::RevisionModel;
use revision_core_db::repository::load_revisions::LoadRevisions;
use revision_core_db::repository::pagination::{Page, PageRequest};
use std::error::Error;
use uuid::Uuid;

use crate::utils::TryFromRow;

use super::repo_impl::RevisionRepositoryImpl;

impl RevisionRepositoryImpl {
    pub(super) async fn load_revisions_impl(
        repo: &RevisionRepositoryImpl,
        revisionable_type: &str,
        revisionable_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<RevisionModel>, Box<dyn Error + Send + Sync>> {
        // total first, so the page carries full pagination metadata
        let count_query = r#"
            SELECT COUNT(*) FROM revisions
            WHERE revisionable_type = $1 AND revisionable_id = $2
        "#;
        let total: i64 = sqlx::query_scalar(count_query)
            .bind(revisionable_type)
            .bind(revisionable_id)
            .fetch_one(&*repo.pool)
            .await?;

        // most recent first
        let query = r#"
            SELECT * FROM revisions
            WHERE revisionable_type = $1 AND revisionable_id = $2
            ORDER BY created_at DESC, id DESC
            LIMIT $3 OFFSET $4
        "#;
        let rows = sqlx::query(query)
            .bind(revisionable_type)
            .bind(revisionable_id)
            .bind(page.limit as i64)
            .bind(page.offset as i64)
            .fetch_all(&*repo.pool)
            .await?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(RevisionModel::try_from_row(&row)?);
        }

        Ok(Page::new(items, total as usize, page.limit, page.offset))
    }
}

#[async_trait]
impl LoadRevisions for RevisionRepositoryImpl {
    async fn load_revisions(
        &self,
        revisionable_type: &str,
        revisionable_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<RevisionModel>, Box<dyn Error + Send + Sync>> {
        Self::load_revisions_impl(self, revisionable_type, revisionable_id, page).await
    }
}
