use async_trait::async_trait;
use revision_core_db::models::revision::RevisionModel;
use revision_core_db::repository::create_revision::CreateRevision;
use std::error::Error;

use super::repo_impl::RevisionRepositoryImpl;

impl RevisionRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &RevisionRepositoryImpl,
        revision: &RevisionModel,
    ) -> Result<RevisionModel, Box<dyn Error + Send + Sync>> {
        let query = r#"
            INSERT INTO revisions
                (id, revisionable_type, revisionable_id, key, old_value, new_value, actor_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#;

        sqlx::query(query)
            .bind(revision.id)
            .bind(revision.revisionable_type.as_str())
            .bind(revision.revisionable_id)
            .bind(revision.key.as_str())
            .bind(revision.old_value.as_deref())
            .bind(revision.new_value.as_deref())
            .bind(revision.actor_id)
            .bind(revision.created_at)
            .execute(&*repo.pool)
            .await?;

        Ok(revision.clone())
    }
}

#[async_trait]
impl CreateRevision for RevisionRepositoryImpl {
    async fn create(
        &self,
        revision: &RevisionModel,
    ) -> Result<RevisionModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, revision).await
    }
}
