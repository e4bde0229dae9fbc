use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::display::field_formatter::FormatRule;

/// A resolved related record, as much of it as display needs
pub trait EntityRecord: Send + Sync + std::fmt::Debug {
    /// Identifier of the resolved record
    fn record_id(&self) -> Uuid;

    /// Human-readable name shown instead of the raw foreign-key id
    fn identifiable_name(&self) -> String;
}

/// Tagged outcome of a by-id lookup.
///
/// `NotFound` is the expected miss (stale or dangling reference) and maps to
/// the unknown placeholder at display time. `Error` is an infrastructure
/// failure and is kept distinguishable so callers can log or surface it
/// instead of conflating it with a missing record.
pub enum LookupOutcome {
    Found(Arc<dyn EntityRecord>),
    NotFound,
    Error(Box<dyn std::error::Error + Send + Sync>),
}

/// Find-by-id capability a registered entity type exposes
///
/// # Example
/// ```ignore
/// #[async_trait]
/// impl EntityLookup for AuthorLookup {
///     async fn find_by_id(&self, id: Uuid) -> LookupOutcome {
///         match self.repository.find_by_id(id).await {
///             Ok(Some(author)) => LookupOutcome::Found(Arc::new(author)),
///             Ok(None) => LookupOutcome::NotFound,
///             Err(e) => LookupOutcome::Error(e),
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait EntityLookup: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> LookupOutcome;
}

/// Everything the registry knows about one entity type: how to resolve an
/// instance by id, and how its fields are formatted for display.
pub struct EntityDescriptor {
    lookup: Arc<dyn EntityLookup>,
    formatted_fields: HashMap<String, FormatRule>,
}

impl EntityDescriptor {
    pub fn new(lookup: Arc<dyn EntityLookup>) -> Self {
        Self {
            lookup,
            formatted_fields: HashMap::new(),
        }
    }

    /// Attach a formatting rule for one field key
    pub fn with_formatted_field(mut self, key: impl Into<String>, rule: FormatRule) -> Self {
        self.formatted_fields.insert(key.into(), rule);
        self
    }

    pub fn lookup(&self) -> &Arc<dyn EntityLookup> {
        &self.lookup
    }

    pub fn formatted_fields(&self) -> &HashMap<String, FormatRule> {
        &self.formatted_fields
    }
}

/// Explicit type-name to capability map, populated at process startup.
///
/// Replaces by-name class resolution: foreign-key and actor lookups consult
/// this registry instead of constructing types from strings at runtime.
#[derive(Default)]
pub struct EntityRegistry {
    entries: HashMap<String, EntityDescriptor>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, type_name: impl Into<String>, descriptor: EntityDescriptor) {
        self.entries.insert(type_name.into(), descriptor);
    }

    pub fn descriptor(&self, type_name: &str) -> Option<&EntityDescriptor> {
        self.entries.get(type_name)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryEntityLookup;

    #[derive(Debug)]
    struct Plain {
        id: Uuid,
    }

    impl EntityRecord for Plain {
        fn record_id(&self) -> Uuid {
            self.id
        }

        fn identifiable_name(&self) -> String {
            self.id.to_string()
        }
    }

    #[tokio::test]
    async fn registered_type_resolves_records() {
        let id = Uuid::new_v4();
        let lookup = MemoryEntityLookup::new();
        lookup.insert(Arc::new(Plain { id }));

        let mut registry = EntityRegistry::new();
        registry.register("Author", EntityDescriptor::new(Arc::new(lookup)));

        assert!(registry.contains("Author"));
        let descriptor = registry.descriptor("Author").unwrap();
        match descriptor.lookup().find_by_id(id).await {
            LookupOutcome::Found(record) => assert_eq!(record.record_id(), id),
            _ => panic!("expected the registered record"),
        }
    }

    #[tokio::test]
    async fn unregistered_type_has_no_descriptor() {
        let registry = EntityRegistry::new();
        assert!(registry.descriptor("Ghost").is_none());
    }
}
