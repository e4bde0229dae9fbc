use revision_core_db::models::revision::RevisionModel;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::error::Error;
use std::sync::Arc;

use crate::utils::{get_heapless_string, TryFromRow};

pub struct RevisionRepositoryImpl {
    pub pool: Arc<PgPool>,
}

impl RevisionRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for RevisionModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(RevisionModel {
            id: row.try_get("id")?,
            revisionable_type: get_heapless_string(row, "revisionable_type")?,
            revisionable_id: row.try_get("revisionable_id")?,
            key: get_heapless_string(row, "key")?,
            old_value: row.try_get("old_value")?,
            new_value: row.try_get("new_value")?,
            actor_id: row.try_get("actor_id")?,
            created_at: row.try_get("created_at")?,
        })
    }
}
