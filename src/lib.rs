//! Pack Config Utils
//!
//! Helpers for editing a bundler configuration by identity instead of by
//! hand-written index: plugins are found by type name, rules by their test
//! criterion or by the loader they apply. Everything is synchronous and in
//! place on the caller's [`Configuration`].
//!
//! ```
//! use pack_config_utils::{ignore_file_extension, is_plugin_loaded, Configuration, TestCriterion};
//!
//! let mut config = Configuration::from_json_str(r#"{
//!     "plugins": [{"type": "StartServerPlugin"}],
//!     "module": {"rules": [
//!         {"loader": "/app/node_modules/file-loader/lib/index.js", "exclude": [{"regex": "\\.html$"}]}
//!     ]}
//! }"#).unwrap();
//!
//! assert!(is_plugin_loaded(&config, "StartServerPlugin"));
//! ignore_file_extension(&mut config, TestCriterion::regex(r"\.hbs$").unwrap()).unwrap();
//! assert_eq!(config.module.rules[0].exclude().len(), 2);
//! ```

pub mod error;
pub mod plugins;
pub mod rules;

pub use error::{ConfigUtilsError, ErrorCode, Result, Target, REMEDIATION_HINT};
pub use plugins::{is_plugin_loaded, modify_plugin, plugin_index, replace_plugin};
pub use rules::{
    ignore_file_extension, ignore_file_extension_with, loader_matches, modify_rule, replace_rule,
    rule_index_by_loader, rule_index_by_test, rule_uses_loader, rules_matching_resource,
    RuleSelector, FILE_LOADER, PATH_SEPARATOR,
};

pub use pack_config_model::{
    Configuration, LoaderEntry, LoaderRef, ModelError, ModuleOptions, Pattern, PatternError,
    Plugin, Rule, TestCriterion, WrappedLoader,
};
