use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// # Documentation
/// One immutable field-level change record.
///
/// Created only by the tracker's post-save hook, one entry per changed and
/// trackable field per save. All fields are set at construction; entries are
/// never updated afterwards. Retention is the host's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevisionModel {
    pub id: Uuid,

    /// Type tag of the tracked entity
    pub revisionable_type: HeaplessString<100>,

    /// Identifier of the tracked entity instance
    pub revisionable_id: Uuid,

    /// Name of the changed field, as stored
    pub key: HeaplessString<100>,

    /// Raw stored value before the change, None for null
    pub old_value: Option<String>,

    /// Raw stored value after the change, None for null
    pub new_value: Option<String>,

    /// Responsible actor, None when unknown
    pub actor_id: Option<Uuid>,

    /// Assigned when the entry is constructed for persistence
    pub created_at: DateTime<Utc>,
}

impl RevisionModel {
    /// Whether the key denotes a reference to another entity.
    ///
    /// This is a substring test, not a suffix test: `_id` anywhere in the
    /// key counts. A key such as `session_id_hash` is therefore classified
    /// as a reference key too; its lookup resolves to nothing and display
    /// falls back to the unknown placeholder.
    pub fn is_reference_key(&self) -> bool {
        self.key.contains("_id")
    }

    /// The field name with every `_id` occurrence removed. For reference
    /// keys this yields the name of the related entity type.
    pub fn field_name(&self) -> String {
        if self.is_reference_key() {
            self.key.replace("_id", "")
        } else {
            self.key.to_string()
        }
    }
}

impl Identifiable for RevisionModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
