//! Plugin instances.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

static NO_OPTIONS: Value = Value::Null;

/// A plugin instance, tagged by its owner with an explicit type identity.
///
/// The type name is the only attribute lookups interpret; `options` and any
/// other keys are opaque and free for callers to edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plugin {
    /// Type identity (e.g. "StartServerPlugin").
    #[serde(rename = "type")]
    pub type_name: String,

    /// Plugin options. `Some(Null)` records an explicit `null`.
    #[serde(
        default,
        deserialize_with = "crate::de::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub options: Option<Value>,

    /// Any other keys, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Plugin {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            options: None,
            extra: Map::new(),
        }
    }

    pub fn with_options(mut self, options: Value) -> Self {
        self.options = Some(options);
        self
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Options, or `Null` when the plugin has none.
    pub fn options(&self) -> &Value {
        self.options.as_ref().unwrap_or(&NO_OPTIONS)
    }

    /// Mutable options, created as `Null` if absent. Indexing a `Null` value
    /// by key turns it into an object.
    pub fn options_mut(&mut self) -> &mut Value {
        self.options.get_or_insert(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialization_uses_type_key() {
        let plugin = Plugin::new("DefinePlugin").with_options(json!({"DEBUG": true}));
        let value = serde_json::to_value(&plugin).unwrap();
        assert_eq!(value, json!({"type": "DefinePlugin", "options": {"DEBUG": true}}));
    }

    #[test]
    fn test_options_default_to_none() {
        let plugin: Plugin =
            serde_json::from_value(json!({"type": "NoEmitOnErrorsPlugin"})).unwrap();
        assert_eq!(plugin.type_name(), "NoEmitOnErrorsPlugin");
        assert!(plugin.options.is_none());
        assert!(plugin.options().is_null());
    }

    #[test]
    fn test_unknown_keys_round_trip() {
        let value = json!({"type": "DefinePlugin", "definitions": {"DEBUG": true}});
        let plugin: Plugin = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(plugin.extra["definitions"], json!({"DEBUG": true}));
        assert_eq!(serde_json::to_value(&plugin).unwrap(), value);
    }

    #[test]
    fn test_explicit_null_options_round_trip() {
        let value = json!({"type": "IgnorePlugin", "options": null});
        let plugin: Plugin = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(plugin.options, Some(Value::Null));
        assert_eq!(serde_json::to_value(&plugin).unwrap(), value);
    }

    #[test]
    fn test_options_mut_creates_object() {
        let mut plugin = Plugin::new("StartServerPlugin");
        plugin.options_mut()["nodeArgs"] = json!(["--inspect"]);
        assert_eq!(plugin.options()["nodeArgs"][0], "--inspect");
    }
}
