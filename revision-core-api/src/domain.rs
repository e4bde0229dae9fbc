use serde::{Deserialize, Serialize};

/// Display-side configuration for revision resolution.
///
/// The actor type names the registry entry used to resolve the responsible
/// actor of a revision. The two placeholder strings are what `oldValue` /
/// `newValue` render for absent and unresolvable values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RevisionConfig {
    /// Registry type name of the actor entity
    pub actor_type: String,
    /// Shown when a stored value is null or empty
    pub null_string: String,
    /// Shown when a referenced entity cannot be resolved
    pub unknown_string: String,
}

impl Default for RevisionConfig {
    fn default() -> Self {
        Self {
            actor_type: "User".to_string(),
            null_string: "nothing".to_string(),
            unknown_string: "unknown".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_actor_type_is_user() {
        let config = RevisionConfig::default();
        assert_eq!(config.actor_type, "User");
        assert_eq!(config.null_string, "nothing");
        assert_eq!(config.unknown_string, "unknown");
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: RevisionConfig =
            serde_json::from_str(r#"{"actor_type": "Operator"}"#).unwrap();
        assert_eq!(config.actor_type, "Operator");
        assert_eq!(config.unknown_string, "unknown");
    }
}
