use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::revision::RevisionModel;
use crate::registry::{EntityLookup, EntityRecord, LookupOutcome};
use crate::repository::create_revision::CreateRevision;
use crate::repository::load_revisions::LoadRevisions;
use crate::repository::pagination::{Page, PageRequest};

/// In-memory revision store for hosts without a database and for testing.
///
/// Entries live in insertion order; recency is the reverse of that order,
/// which stays deterministic even when created_at values collide.
#[derive(Default)]
pub struct InMemoryRevisionStore {
    revisions: RwLock<Vec<RevisionModel>>,
}

impl InMemoryRevisionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries held, across all entities
    pub fn len(&self) -> usize {
        self.revisions.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CreateRevision for InMemoryRevisionStore {
    async fn create(
        &self,
        revision: &RevisionModel,
    ) -> Result<RevisionModel, Box<dyn std::error::Error + Send + Sync>> {
        let mut revisions = self
            .revisions
            .write()
            .map_err(|_| "revision store lock poisoned")?;
        revisions.push(revision.clone());
        Ok(revision.clone())
    }
}

#[async_trait]
impl LoadRevisions for InMemoryRevisionStore {
    async fn load_revisions(
        &self,
        revisionable_type: &str,
        revisionable_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<RevisionModel>, Box<dyn std::error::Error + Send + Sync>> {
        let revisions = self
            .revisions
            .read()
            .map_err(|_| "revision store lock poisoned")?;

        let matching: Vec<&RevisionModel> = revisions
            .iter()
            .rev()
            .filter(|r| {
                r.revisionable_type.as_str() == revisionable_type
                    && r.revisionable_id == revisionable_id
            })
            .collect();

        let total = matching.len();
        let items = matching
            .into_iter()
            .skip(page.offset)
            .take(page.limit)
            .cloned()
            .collect();

        Ok(Page::new(items, total, page.limit, page.offset))
    }
}

/// Map-backed lookup capability for registering entity types in tests and
/// in hosts that keep their records in memory.
#[derive(Default)]
pub struct MemoryEntityLookup {
    records: RwLock<HashMap<Uuid, Arc<dyn EntityRecord>>>,
}

impl MemoryEntityLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, record: Arc<dyn EntityRecord>) {
        if let Ok(mut records) = self.records.write() {
            records.insert(record.record_id(), record);
        }
    }
}

#[async_trait]
impl EntityLookup for MemoryEntityLookup {
    async fn find_by_id(&self, id: Uuid) -> LookupOutcome {
        let records = match self.records.read() {
            Ok(records) => records,
            Err(_) => return LookupOutcome::Error("entity lookup lock poisoned".into()),
        };
        match records.get(&id) {
            Some(record) => LookupOutcome::Found(Arc::clone(record)),
            None => LookupOutcome::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use heapless::String as HeaplessString;

    fn revision_for(entity_id: Uuid, new_value: &str) -> RevisionModel {
        RevisionModel {
            id: Uuid::new_v4(),
            revisionable_type: HeaplessString::try_from("Article").unwrap(),
            revisionable_id: entity_id,
            key: HeaplessString::try_from("status").unwrap(),
            old_value: None,
            new_value: Some(new_value.to_string()),
            actor_id: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn history_is_most_recent_first_and_paginated() {
        let store = InMemoryRevisionStore::new();
        let entity_id = Uuid::new_v4();
        for i in 0..5 {
            store
                .create(&revision_for(entity_id, &format!("v{i}")))
                .await
                .unwrap();
        }

        let page = store
            .load_revisions("Article", entity_id, PageRequest::new(2, 0))
            .await
            .unwrap();
        assert_eq!(page.total, 5);
        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.items[0].new_value.as_deref(), Some("v4"));
        assert_eq!(page.items[1].new_value.as_deref(), Some("v3"));

        let last = store
            .load_revisions("Article", entity_id, PageRequest::new(2, 4))
            .await
            .unwrap();
        assert_eq!(last.items.len(), 1);
        assert_eq!(last.items[0].new_value.as_deref(), Some("v0"));
        assert!(!last.has_more());
    }

    #[tokio::test]
    async fn history_is_scoped_to_one_entity() {
        let store = InMemoryRevisionStore::new();
        let ours = Uuid::new_v4();
        store.create(&revision_for(ours, "live")).await.unwrap();
        store
            .create(&revision_for(Uuid::new_v4(), "other"))
            .await
            .unwrap();

        let page = store
            .load_revisions("Article", ours, PageRequest::default())
            .await
            .unwrap();
        assert_eq!(page.total, 1);

        let none = store
            .load_revisions("Comment", ours, PageRequest::default())
            .await
            .unwrap();
        assert_eq!(none.total, 0);
    }
}
