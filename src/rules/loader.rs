//! Loader matching
//!
//! A rule's loader candidates are either short names (`css-loader`) or fully
//! resolved module paths (`/app/node_modules/css-loader/dist/cjs.js`). A
//! short identifier matches a candidate exactly, or as a substring when the
//! candidate is an absolute path. The path branch keys off the candidate
//! only, so an ordinary short name never acts as a wildcard.
//!
//! The substring test is loose: an identifier that happens to appear in an
//! unrelated path segment also matches. Existing configurations rely on it.

use pack_config_model::Rule;

/// Leading character that marks a candidate as a resolved path.
pub const PATH_SEPARATOR: char = '/';

/// Whether `candidate` names the loader `identifier`.
pub fn loader_matches(candidate: &str, identifier: &str) -> bool {
    candidate == identifier
        || (candidate.starts_with(PATH_SEPARATOR) && candidate.contains(identifier))
}

/// Whether any of the rule's loader candidates names `identifier`.
pub fn rule_uses_loader(rule: &Rule, identifier: &str) -> bool {
    rule.loader_candidates()
        .into_iter()
        .any(|candidate| loader_matches(candidate, identifier))
}
