use async_trait::async_trait;
use revision_core_db::models::revision::RevisionModel;
use revision_core_db::repository::find_by_id::FindById;
use std::error::Error;
use uuid::Uuid;

use crate::utils::TryFromRow;

use super::repo_impl::RevisionRepositoryImpl;

impl RevisionRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &RevisionRepositoryImpl,
        id: Uuid,
    ) -> Result<Option<RevisionModel>, Box<dyn Error + Send + Sync>> {
        let query = r#"SELECT * FROM revisions WHERE id = $1"#;

        let row = sqlx::query(query)
            .bind(id)
            .fetch_optional(&*repo.pool)
            .await?;

        row.map(|row| RevisionModel::try_from_row(&row)).transpose()
    }
}

#[async_trait]
impl FindById<RevisionModel> for RevisionRepositoryImpl {
    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<RevisionModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_id_impl(self, id).await
    }
}
