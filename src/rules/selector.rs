//! Rule selectors
//!
//! A selector names a rule by exactly one of its test criterion or a loader
//! identifier. Both fields are public so callers can build a selector from
//! whatever they have; the conflict is caught before any scan.

use pack_config_model::{Configuration, TestCriterion};

use super::{rule_index_by_loader, rule_index_by_test};
use crate::error::{ConfigUtilsError, Result};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSelector {
    pub test: Option<TestCriterion>,
    pub loader: Option<String>,
}

impl RuleSelector {
    pub fn by_test(test: impl Into<TestCriterion>) -> Self {
        Self {
            test: Some(test.into()),
            loader: None,
        }
    }

    pub fn by_loader(loader: impl Into<String>) -> Self {
        Self {
            test: None,
            loader: Some(loader.into()),
        }
    }

    /// Resolve to a single lookup key, rejecting conflicting or empty
    /// selectors.
    pub(crate) fn key(&self) -> Result<RuleKey<'_>> {
        match (&self.test, &self.loader) {
            (Some(test), None) => Ok(RuleKey::Test(test)),
            (None, Some(loader)) => Ok(RuleKey::Loader(loader)),
            (test, loader) => Err(ConfigUtilsError::InvalidUsage {
                test: test.as_ref().map(TestCriterion::canonical),
                loader: loader.clone(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum RuleKey<'a> {
    Test(&'a TestCriterion),
    Loader(&'a str),
}

impl RuleKey<'_> {
    pub(crate) fn locate(&self, config: &Configuration) -> Option<usize> {
        match self {
            RuleKey::Test(test) => rule_index_by_test(config, test),
            RuleKey::Loader(loader) => rule_index_by_loader(config, loader),
        }
    }

    /// The criterion value, as named in errors and logs.
    pub(crate) fn describe(&self) -> String {
        match self {
            RuleKey::Test(test) => test.canonical(),
            RuleKey::Loader(loader) => loader.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_single_criterion_resolves() {
        let selector = RuleSelector::by_loader("css-loader");
        assert!(matches!(selector.key(), Ok(RuleKey::Loader("css-loader"))));

        let selector = RuleSelector::by_test(TestCriterion::regex(r"\.css$").unwrap());
        let key = selector.key().unwrap();
        assert_eq!(key.describe(), r"/\.css$/");
    }

    #[test]
    fn test_both_criteria_rejected() {
        let selector = RuleSelector {
            test: Some(TestCriterion::regex(r"\.css$").unwrap()),
            loader: Some("css-loader".to_string()),
        };
        let err = selector.key().unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidUsage);
        assert!(err.to_string().contains("css-loader"));
        assert!(err.to_string().contains(r"/\.css$/"));
        match err {
            ConfigUtilsError::InvalidUsage { test, loader } => {
                assert_eq!(test.as_deref(), Some(r"/\.css$/"));
                assert_eq!(loader.as_deref(), Some("css-loader"));
            }
            other => panic!("expected invalid usage, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_selector_rejected() {
        let err = RuleSelector::default().key().unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidUsage);
        assert!(matches!(
            err,
            ConfigUtilsError::InvalidUsage {
                test: None,
                loader: None
            }
        ));
    }
}
