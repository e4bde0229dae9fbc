use std::str::FromStr;
use std::sync::Arc;

use revision_core_api::domain::RevisionConfig;
use revision_core_api::error::{RevisionError, RevisionResult};
use uuid::Uuid;

use crate::display::field_formatter::format_field;
use crate::models::revision::RevisionModel;
use crate::registry::{EntityRecord, EntityRegistry, LookupOutcome};

/// Read-time resolution of revision entries into display strings.
///
/// Resolution is lazy and failure-tolerant: a revision row holds raw stored
/// values, and only here do foreign-key ids turn into identifiable names.
/// Display never propagates a lookup failure; it degrades to the configured
/// unknown placeholder.
pub struct RevisionResolver {
    registry: Arc<EntityRegistry>,
    config: RevisionConfig,
}

impl RevisionResolver {
    pub fn new(registry: Arc<EntityRegistry>, config: RevisionConfig) -> Self {
        Self { registry, config }
    }

    pub fn with_defaults(registry: Arc<EntityRegistry>) -> Self {
        Self::new(registry, RevisionConfig::default())
    }

    /// Display string for the value before the change
    pub async fn old_value(&self, revision: &RevisionModel) -> String {
        self.resolve_value(revision, revision.old_value.as_deref())
            .await
    }

    /// Display string for the value after the change
    pub async fn new_value(&self, revision: &RevisionModel) -> String {
        self.resolve_value(revision, revision.new_value.as_deref())
            .await
    }

    /// Apply the owning entity type's formatting configuration to a value
    pub fn format(&self, entity_type: &str, key: &str, value: &str) -> String {
        match self.registry.descriptor(entity_type) {
            Some(descriptor) => format_field(key, value, descriptor.formatted_fields()),
            None => value.to_string(),
        }
    }

    /// Resolve the responsible actor to a full record.
    ///
    /// An unregistered actor type is a configuration defect and is surfaced,
    /// unlike display resolution which degrades. A missing record is the
    /// expected outcome for e.g. a deleted account and yields `None`.
    pub async fn user_responsible(
        &self,
        revision: &RevisionModel,
    ) -> RevisionResult<Option<Arc<dyn EntityRecord>>> {
        let Some(actor_id) = revision.actor_id else {
            return Ok(None);
        };

        let descriptor = self.registry.descriptor(&self.config.actor_type).ok_or_else(|| {
            RevisionError::ConfigurationError(format!(
                "actor type `{}` is not registered",
                self.config.actor_type
            ))
        })?;

        match descriptor.lookup().find_by_id(actor_id).await {
            LookupOutcome::Found(record) => Ok(Some(record)),
            LookupOutcome::NotFound => Ok(None),
            LookupOutcome::Error(cause) => Err(RevisionError::StorageError(cause.to_string())),
        }
    }

    async fn resolve_value(&self, revision: &RevisionModel, raw: Option<&str>) -> String {
        let raw = match raw {
            Some(value) if !value.is_empty() => value,
            _ => return self.config.null_string.clone(),
        };

        if revision.is_reference_key() {
            let display = self.resolve_reference(revision, raw).await;
            return self.format(&revision.revisionable_type, &revision.key, &display);
        }

        self.format(&revision.revisionable_type, &revision.key, raw)
    }

    /// Turn a foreign-key raw value into an identifiable name, degrading to
    /// the unknown placeholder on every miss or failure.
    async fn resolve_reference(&self, revision: &RevisionModel, raw: &str) -> String {
        let related_type = revision.field_name();

        let Some(descriptor) = self.registry.descriptor(&related_type) else {
            tracing::warn!(
                related_type = %related_type,
                key = %revision.key,
                "related type is not registered, rendering unknown"
            );
            return self.config.unknown_string.clone();
        };

        // a raw value that is not a uuid cannot match any record
        let Ok(id) = Uuid::from_str(raw) else {
            return self.config.unknown_string.clone();
        };

        match descriptor.lookup().find_by_id(id).await {
            LookupOutcome::Found(record) => record.identifiable_name(),
            LookupOutcome::NotFound => self.config.unknown_string.clone(),
            LookupOutcome::Error(cause) => {
                tracing::warn!(
                    related_type = %related_type,
                    error = %cause,
                    "lookup failed while resolving revision display, rendering unknown"
                );
                self.config.unknown_string.clone()
            }
        }
    }
}
