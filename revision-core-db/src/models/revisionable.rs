use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::identifiable::Identifiable;

/// Dirty-tracking facility of the host persistence framework.
///
/// The tracker never inspects entity fields itself; it works from the value
/// maps the host exposes here. Values are JSON scalars; anything the host
/// reports as an array or object is treated as non-comparable and dropped
/// from tracking.
pub trait DirtyTracked {
    /// Field values as last persisted
    fn persisted_values(&self) -> BTreeMap<String, Value>;

    /// Field values as currently held in memory, about to be saved
    fn pending_values(&self) -> BTreeMap<String, Value>;

    /// Names of fields changed since the entity was loaded
    fn dirty_fields(&self) -> BTreeSet<String>;

    /// Whether the entity already exists in storage (a save is an update)
    fn is_persisted(&self) -> bool;
}

/// Per-type tracking policy: enable flag plus inclusion/exclusion lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionPolicy {
    pub enabled: bool,
    pub keep_revision_of: Vec<String>,
    pub dont_keep_revision_of: Vec<String>,
}

impl Default for RevisionPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            keep_revision_of: Vec::new(),
            dont_keep_revision_of: Vec::new(),
        }
    }
}

impl RevisionPolicy {
    /// Policy that tracks every comparable field
    pub fn track_all() -> Self {
        Self::default()
    }

    /// Policy restricted to the given fields
    pub fn keeping<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keep_revision_of: fields.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Policy tracking everything except the given fields
    pub fn ignoring<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dont_keep_revision_of: fields.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Whether a revision should be kept for `key`.
    ///
    /// An explicit inclusion wins, then an explicit exclusion; otherwise a
    /// field is tracked only while the inclusion list is empty. A non-empty
    /// inclusion list therefore excludes every field it does not name.
    pub fn is_revisionable(&self, key: &str) -> bool {
        if self.keep_revision_of.iter().any(|f| f == key) {
            return true;
        }
        if self.dont_keep_revision_of.iter().any(|f| f == key) {
            return false;
        }
        self.keep_revision_of.is_empty()
    }

    /// Merge a single field into the exclusion list. Duplicates are
    /// harmless, membership is all that matters.
    pub fn disable_field(&mut self, field: impl Into<String>) {
        self.dont_keep_revision_of.push(field.into());
    }

    /// Merge several fields into the exclusion list
    pub fn disable_fields<I, S>(&mut self, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dont_keep_revision_of
            .extend(fields.into_iter().map(Into::into));
    }
}

/// Role of a tracked entity: identified, dirty-tracked, and carrying its
/// revision policy and type tag.
pub trait Revisionable: Identifiable + DirtyTracked {
    /// Type tag stored on every revision entry and used as the registry key
    fn revisionable_type(&self) -> &str;

    fn revision_policy(&self) -> &RevisionPolicy;

    fn revision_policy_mut(&mut self) -> &mut RevisionPolicy;

    /// Display name shown when this entity is the target of a resolved
    /// foreign-key revision. Falls back to the raw id.
    fn identifiable_name(&self) -> String {
        self.get_id().to_string()
    }

    /// Runtime policy override: stop keeping revisions of `field`
    fn disable_revision_field(&mut self, field: impl Into<String>) {
        self.revision_policy_mut().disable_field(field);
    }

    /// Runtime policy override for several fields at once
    fn disable_revision_fields<I, S>(&mut self, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.revision_policy_mut().disable_fields(fields);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_lists_track_everything() {
        let policy = RevisionPolicy::track_all();
        assert!(policy.is_revisionable("status"));
        assert!(policy.is_revisionable("name"));
    }

    #[test]
    fn inclusion_list_excludes_absent_fields() {
        let policy = RevisionPolicy::keeping(["status"]);
        assert!(policy.is_revisionable("status"));
        assert!(!policy.is_revisionable("name"));
    }

    #[test]
    fn exclusion_list_only_drops_its_members() {
        let policy = RevisionPolicy::ignoring(["name"]);
        assert!(policy.is_revisionable("status"));
        assert!(!policy.is_revisionable("name"));
    }

    #[test]
    fn inclusion_wins_over_exclusion_for_the_same_field() {
        let mut policy = RevisionPolicy::keeping(["status"]);
        policy.disable_field("status");
        assert!(policy.is_revisionable("status"));
    }

    #[test]
    fn disable_fields_merges_without_deduplication() {
        let mut policy = RevisionPolicy::ignoring(["name"]);
        policy.disable_fields(["name", "body"]);
        assert!(!policy.is_revisionable("name"));
        assert!(!policy.is_revisionable("body"));
        assert_eq!(policy.dont_keep_revision_of.len(), 3);
    }
}
