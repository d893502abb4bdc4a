//! The configuration object
//!
//! Holds the two slices the utilities operate on (plugins and module rules)
//! and keeps every other key untouched. Sections absent from the source stay
//! absent on the way back out unless something was added to them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ModelError;
use crate::plugin::Plugin;
use crate::rule::Rule;

/// The `module` section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleOptions {
    pub rules: Vec<Rule>,

    /// Other `module` keys (`noParse`, ...), preserved as-is.
    pub extra: Map<String, Value>,
}

/// A bundler configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawConfiguration", into = "RawConfiguration")]
pub struct Configuration {
    pub plugins: Vec<Plugin>,

    pub module: ModuleOptions,

    /// Other top-level keys (`entry`, `output`, ...), preserved as-is.
    pub extra: Map<String, Value>,

    sections: Sections,
}

/// Which sections the source spelled out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Sections {
    plugins: bool,
    module: bool,
    rules: bool,
}

#[derive(Serialize, Deserialize)]
struct RawConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    plugins: Option<Vec<Plugin>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    module: Option<RawModule>,

    #[serde(flatten)]
    extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize)]
struct RawModule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rules: Option<Vec<Rule>>,

    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl From<RawConfiguration> for Configuration {
    fn from(raw: RawConfiguration) -> Self {
        let mut sections = Sections {
            plugins: raw.plugins.is_some(),
            module: raw.module.is_some(),
            rules: false,
        };

        let module = match raw.module {
            Some(module) => {
                sections.rules = module.rules.is_some();
                ModuleOptions {
                    rules: module.rules.unwrap_or_default(),
                    extra: module.extra,
                }
            }
            None => ModuleOptions::default(),
        };

        Self {
            plugins: raw.plugins.unwrap_or_default(),
            module,
            extra: raw.extra,
            sections,
        }
    }
}

impl From<Configuration> for RawConfiguration {
    fn from(config: Configuration) -> Self {
        let Configuration {
            plugins,
            module,
            extra,
            sections,
        } = config;

        let rules = (sections.rules || !module.rules.is_empty()).then_some(module.rules);
        let module = (sections.module || rules.is_some() || !module.extra.is_empty()).then(|| {
            RawModule {
                rules,
                extra: module.extra,
            }
        });

        Self {
            plugins: (sections.plugins || !plugins.is_empty()).then_some(plugins),
            module,
            extra,
        }
    }
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_plugins(mut self, plugins: Vec<Plugin>) -> Self {
        self.plugins = plugins;
        self
    }

    pub fn with_rules(mut self, rules: Vec<Rule>) -> Self {
        self.module.rules = rules;
        self
    }

    /// Parse a configuration from JSON text.
    pub fn from_json_str(s: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Convert a JSON value into a configuration.
    pub fn from_json_value(value: Value) -> Result<Self, ModelError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Convert back to a JSON value.
    pub fn to_json_value(&self) -> Result<Value, ModelError> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.module.rules
    }

    pub fn rules_mut(&mut self) -> &mut Vec<Rule> {
        &mut self.module.rules
    }
}
