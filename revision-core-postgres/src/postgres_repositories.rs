use sqlx::PgPool;
use std::sync::Arc;

use crate::repository::revision_repository::RevisionRepositoryImpl;

/// Factory wiring the sqlx-backed repositories to one shared pool
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub fn revision_repositories(&self) -> RevisionRepositories {
        RevisionRepositories {
            revision_repository: Arc::new(RevisionRepositoryImpl::new(self.pool.clone())),
        }
    }
}

pub struct RevisionRepositories {
    pub revision_repository: Arc<RevisionRepositoryImpl>,
}
