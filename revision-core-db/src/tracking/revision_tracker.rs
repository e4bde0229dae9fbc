use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use chrono::Utc;
use heapless::String as HeaplessString;
use serde_json::Value;
use uuid::Uuid;

use crate::models::revision::RevisionModel;
use crate::models::revisionable::{RevisionPolicy, Revisionable};
use crate::repository::pagination::{Page, PageRequest};
use crate::repository::RevisionStore;

/// Transient state captured at save start and discarded after emission.
///
/// Holds the persisted and pending value snapshots (scalars only), the
/// dirty-field set, and whether the save updates an existing entity. Never
/// persisted, never shared across savers.
pub struct SaveCapture {
    original: BTreeMap<String, Value>,
    pending: BTreeMap<String, Value>,
    dirty: BTreeSet<String>,
    is_updating: bool,
}

impl SaveCapture {
    /// Whether the captured save updates an already persisted entity
    pub fn is_updating(&self) -> bool {
        self.is_updating
    }
}

/// Revisioning component invoked by the host save pipeline.
///
/// The host calls `capture_before_save`, runs its own persistence
/// operation, and on success hands the capture back to `record_after_save`.
/// A failed save simply never reaches the second hook, so no entries are
/// emitted for it.
pub struct RevisionTracker {
    store: Arc<dyn RevisionStore>,
}

impl RevisionTracker {
    pub fn new(store: Arc<dyn RevisionStore>) -> Self {
        Self { store }
    }

    /// Pre-save hook. Returns `None` when tracking is disabled for the
    /// entity; otherwise snapshots persisted and pending values, keeping
    /// only scalars. Complex values cannot be safely compared or
    /// stringified and are never revisioned.
    pub fn capture_before_save<E: Revisionable>(&self, entity: &E) -> Option<SaveCapture> {
        if !entity.revision_policy().enabled {
            return None;
        }

        let mut original = entity.persisted_values();
        let mut pending = entity.pending_values();
        original.retain(|_, value| is_comparable(value));
        pending.retain(|_, value| is_comparable(value));

        Some(SaveCapture {
            original,
            pending,
            dirty: entity.dirty_fields(),
            is_updating: entity.is_persisted(),
        })
    }

    /// Post-save hook. Emits one revision entry per changed, trackable
    /// field. Initial creations emit nothing. Writes are independent; a
    /// failure propagates immediately and entries already written stay.
    ///
    /// The responsible actor is passed explicitly rather than read from
    /// ambient session state.
    pub async fn record_after_save<E: Revisionable>(
        &self,
        entity: &E,
        capture: &SaveCapture,
        actor_id: Option<Uuid>,
    ) -> Result<Vec<RevisionModel>, Box<dyn std::error::Error + Send + Sync>> {
        if !entity.revision_policy().enabled || !capture.is_updating {
            return Ok(Vec::new());
        }

        let changes = changed_revisionable_fields(capture, entity.revision_policy());
        let mut written = Vec::with_capacity(changes.len());
        for key in changes {
            let revision = RevisionModel {
                id: Uuid::new_v4(),
                revisionable_type: bounded(entity.revisionable_type())?,
                revisionable_id: entity.get_id(),
                key: bounded(key)?,
                old_value: capture.original.get(key).and_then(scalar_to_text),
                new_value: capture.pending.get(key).and_then(scalar_to_text),
                actor_id,
                created_at: Utc::now(),
            };
            written.push(self.store.create(&revision).await?);
        }

        tracing::debug!(
            entity_type = entity.revisionable_type(),
            entries = written.len(),
            "recorded field revisions"
        );
        Ok(written)
    }

    /// Reverse navigation: the entity's revision entries, most recent first
    pub async fn revision_history<E: Revisionable>(
        &self,
        entity: &E,
        page: PageRequest,
    ) -> Result<Page<RevisionModel>, Box<dyn std::error::Error + Send + Sync>> {
        self.store
            .load_revisions(entity.revisionable_type(), entity.get_id(), page)
            .await
    }
}

/// Dirty fields that survive the policy filter and still have a comparable
/// pending value. BTreeSet iteration keeps emission order stable.
fn changed_revisionable_fields<'a>(
    capture: &'a SaveCapture,
    policy: &RevisionPolicy,
) -> Vec<&'a String> {
    capture
        .dirty
        .iter()
        .filter(|key| policy.is_revisionable(key.as_str()) && capture.pending.contains_key(key.as_str()))
        .collect()
}

fn is_comparable(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

/// Raw storage text for a scalar snapshot value. Null stays null rather
/// than becoming the string "null".
fn scalar_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::String(text) => Some(text.clone()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn bounded<const N: usize>(
    value: &str,
) -> Result<HeaplessString<N>, Box<dyn std::error::Error + Send + Sync>> {
    HeaplessString::try_from(value)
        .map_err(|_| format!("value `{value}` exceeds {N} characters").into())
}
