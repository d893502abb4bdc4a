//! Module rules.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::criterion::TestCriterion;
use crate::loader::{LoaderEntry, LoaderRef};

/// A module rule: which files a set of loaders applies to.
///
/// The loader reference may sit in `use`, `loaders` or `loader`; see
/// [`Rule::loader_candidates`] for the precedence between them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Exact-match criterion selecting files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test: Option<TestCriterion>,

    #[serde(rename = "use", default, skip_serializing_if = "Option::is_none")]
    pub use_entries: Option<LoaderRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loaders: Option<LoaderRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loader: Option<LoaderEntry>,

    /// Excluded patterns. A single criterion in the source is read as a
    /// one-element list; an explicit empty list stays `Some`.
    #[serde(
        default,
        deserialize_with = "one_or_many",
        skip_serializing_if = "Option::is_none"
    )]
    pub exclude: Option<Vec<TestCriterion>>,

    /// Rule options. `Some(Null)` records an explicit `null`.
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

impl Rule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_test(mut self, test: impl Into<TestCriterion>) -> Self {
        self.test = Some(test.into());
        self
    }

    pub fn with_use(mut self, entries: impl Into<LoaderRef>) -> Self {
        self.use_entries = Some(entries.into());
        self
    }

    pub fn with_loader(mut self, loader: impl Into<LoaderEntry>) -> Self {
        self.loader = Some(loader.into());
        self
    }

    pub fn with_exclude(mut self, exclude: Vec<TestCriterion>) -> Self {
        self.exclude = Some(exclude);
        self
    }

    /// Excluded patterns, empty when the rule has none.
    pub fn exclude(&self) -> &[TestCriterion] {
        self.exclude.as_deref().unwrap_or(&[])
    }

    /// Mutable excluded patterns, created empty if absent.
    pub fn exclude_mut(&mut self) -> &mut Vec<TestCriterion> {
        self.exclude.get_or_insert_with(Vec::new)
    }

    /// Loader identifiers this rule applies, in order.
    ///
    /// Taken from `use` if present, else `loaders`, else `loader`; empty when
    /// the rule names no loader. Wrapped records contribute their inner
    /// identifier.
    pub fn loader_candidates(&self) -> Vec<&str> {
        let entries: &[LoaderEntry] = if let Some(entries) = &self.use_entries {
            entries.entries()
        } else if let Some(entries) = &self.loaders {
            entries.entries()
        } else if let Some(entry) = &self.loader {
            std::slice::from_ref(entry)
        } else {
            &[]
        };

        entries.iter().map(LoaderEntry::identifier).collect()
    }
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Option<Vec<TestCriterion>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<TestCriterion>),
        One(TestCriterion),
    }

    Ok(Some(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::Many(list) => list,
        OneOrMany::One(single) => vec![single],
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_candidates_prefer_use() {
        let rule = Rule::new()
            .with_use(vec![
                LoaderEntry::from("style-loader"),
                LoaderEntry::wrapped("css-loader", None),
            ])
            .with_loader("ignored-loader");
        assert_eq!(rule.loader_candidates(), vec!["style-loader", "css-loader"]);
    }

    #[test]
    fn test_candidates_fall_back_to_loaders_then_loader() {
        let rule: Rule = serde_json::from_value(json!({
            "loaders": ["babel-loader"],
            "loader": "other-loader"
        }))
        .unwrap();
        assert_eq!(rule.loader_candidates(), vec!["babel-loader"]);

        let rule = Rule::new().with_loader("/abs/node_modules/file-loader/lib/index.js");
        assert_eq!(
            rule.loader_candidates(),
            vec!["/abs/node_modules/file-loader/lib/index.js"]
        );
    }

    #[test]
    fn test_candidates_empty_without_loader() {
        let rule = Rule::new().with_test("src");
        assert!(rule.loader_candidates().is_empty());
    }

    #[test]
    fn test_single_exclude_read_as_list() {
        let rule: Rule = serde_json::from_value(json!({
            "exclude": {"regex": "node_modules"},
            "loader": "babel-loader"
        }))
        .unwrap();
        assert_eq!(rule.exclude().len(), 1);
        assert_eq!(rule.exclude()[0].canonical(), "/node_modules/");
    }

    #[test]
    fn test_unknown_keys_round_trip() {
        let value = json!({
            "test": {"regex": "\\.js$"},
            "include": "/app/src",
            "enforce": "pre",
            "use": [{"loader": "eslint-loader", "options": {"cache": true}}]
        });
        let rule: Rule = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(rule.extra["enforce"], "pre");
        assert_eq!(serde_json::to_value(&rule).unwrap(), value);
    }

    #[test]
    fn test_empty_exclude_and_null_options_round_trip() {
        let value = json!({
            "loader": "file-loader",
            "exclude": [],
            "options": null
        });
        let rule: Rule = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(rule.exclude, Some(Vec::new()));
        assert_eq!(rule.options, Some(Value::Null));
        assert_eq!(serde_json::to_value(&rule).unwrap(), value);
    }

    #[test]
    fn test_exclude_mut_creates_list() {
        let mut rule = Rule::new().with_loader("file-loader");
        assert!(rule.exclude().is_empty());
        rule.exclude_mut().push(TestCriterion::from("/app/static"));
        assert_eq!(rule.exclude().len(), 1);
    }
}
