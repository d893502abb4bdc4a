//! Rule lookup and mutation
//!
//! Rules are found either by their test criterion, compared by canonical text,
//! or by a loader identifier (see [`loader`] for the matching rules). As with
//! plugins, `modify_rule` fails when its target is missing while
//! `replace_rule` reports absence as `None`.

pub mod loader;
mod selector;

pub use loader::{loader_matches, rule_uses_loader, PATH_SEPARATOR};
pub use selector::RuleSelector;

use pack_config_model::{Configuration, Rule, TestCriterion};
use tracing::{debug, info};

use crate::error::{ConfigUtilsError, Result, Target};

/// Loader every well-formed configuration routes static files through.
pub const FILE_LOADER: &str = "file-loader";

/// Index of the first rule whose test criterion has the same canonical form
/// as `test`.
pub fn rule_index_by_test(config: &Configuration, test: &TestCriterion) -> Option<usize> {
    let wanted = test.canonical();
    let index = config.rules().iter().position(|rule| {
        rule.test
            .as_ref()
            .is_some_and(|candidate| candidate.canonical() == wanted)
    });
    debug!(test = %wanted, ?index, "rule lookup by test");
    index
}

/// Index of the first rule that applies the loader `loader`.
pub fn rule_index_by_loader(config: &Configuration, loader: &str) -> Option<usize> {
    let index = config
        .rules()
        .iter()
        .position(|rule| rule_uses_loader(rule, loader));
    debug!(loader, ?index, "rule lookup by loader");
    index
}

/// Indices of every rule whose test criterion selects `resource`.
pub fn rules_matching_resource(config: &Configuration, resource: &str) -> Vec<usize> {
    config
        .rules()
        .iter()
        .enumerate()
        .filter(|(_, rule)| rule.test.as_ref().is_some_and(|test| test.is_match(resource)))
        .map(|(index, _)| index)
        .collect()
}

/// Modify a rule in place.
///
/// The selector must carry exactly one of `test` or `loader`, otherwise this
/// fails with [`ConfigUtilsError::InvalidUsage`] before looking at any rule.
/// A selector matching nothing fails with [`ConfigUtilsError::NotFound`] and
/// `f` is not called.
///
/// ```
/// use pack_config_utils::{modify_rule, Configuration, Rule, RuleSelector, TestCriterion};
///
/// let css = TestCriterion::regex(r"\.css$").unwrap();
/// let mut config = Configuration::new()
///     .with_rules(vec![Rule::new().with_test(css.clone()).with_use("css-loader")]);
///
/// modify_rule(&mut config, &RuleSelector::by_test(css), |rule, _| {
///     rule.test = Some(TestCriterion::regex(r"\.s?css$").unwrap());
/// })
/// .unwrap();
/// assert_eq!(config.module.rules[0].test.as_ref().unwrap().canonical(), r"/\.s?css$/");
/// ```
pub fn modify_rule<F, R>(config: &mut Configuration, selector: &RuleSelector, f: F) -> Result<R>
where
    F: FnOnce(&mut Rule, usize) -> R,
{
    let key = selector.key()?;
    let index = key
        .locate(config)
        .ok_or_else(|| ConfigUtilsError::not_found(Target::Rule, key.describe()))?;

    info!(criterion = %key.describe(), index, "modifying rule");
    Ok(f(&mut config.rules_mut()[index], index))
}

/// Replace the rule named by `selector` with `rule`.
///
/// Conflicting selectors fail as in [`modify_rule`]. When nothing matches the
/// configuration is left untouched and `Ok(None)` is returned.
pub fn replace_rule<'a>(
    config: &'a mut Configuration,
    selector: &RuleSelector,
    rule: Rule,
) -> Result<Option<&'a mut Rule>> {
    let key = selector.key()?;
    let Some(index) = key.locate(config) else {
        return Ok(None);
    };

    info!(criterion = %key.describe(), index, "replacing rule");
    let slot = &mut config.rules_mut()[index];
    *slot = rule;
    Ok(Some(slot))
}

/// Exclude files matching `pattern` from the default file-loader rule.
///
/// Useful when adding support for a file type the file-loader would otherwise
/// swallow. The rule is expected in every well-formed configuration; its
/// absence is [`ConfigUtilsError::InvariantViolation`].
pub fn ignore_file_extension(
    config: &mut Configuration,
    pattern: impl Into<TestCriterion>,
) -> Result<()> {
    ignore_file_extension_with(config, FILE_LOADER, pattern)
}

/// [`ignore_file_extension`] for a file loader known by another name.
pub fn ignore_file_extension_with(
    config: &mut Configuration,
    loader: &str,
    pattern: impl Into<TestCriterion>,
) -> Result<()> {
    let index = rule_index_by_loader(config, loader).ok_or_else(|| {
        ConfigUtilsError::InvariantViolation {
            loader: loader.to_string(),
        }
    })?;

    let pattern = pattern.into();
    info!(loader, index, pattern = %pattern, "ignoring file extension");
    config.rules_mut()[index].exclude_mut().push(pattern);
    Ok(())
}
