//! Test criteria
//!
//! A rule's `test` selects the files it applies to. Two criteria are the same
//! when their canonical textual forms are equal, so a pattern built twice from
//! the same source and flags compares equal even though the compiled
//! expressions are distinct values.

use regex_lite::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PatternError;

/// Flags accepted on a pattern. Only `i`, `m` and `s` change matching; the
/// others are carried through so the canonical form stays faithful.
const SUPPORTED_FLAGS: &[char] = &['g', 'i', 'm', 's', 'u', 'y'];

/// A compiled regular expression together with the source and flags it was
/// written with.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    flags: String,
    regex: Regex,
}

impl Pattern {
    /// Compile a pattern with no flags.
    pub fn new(source: impl Into<String>) -> Result<Self, PatternError> {
        Self::with_flags(source, "")
    }

    /// Compile a pattern with flags (e.g. `"i"` for case-insensitive).
    pub fn with_flags(
        source: impl Into<String>,
        flags: impl Into<String>,
    ) -> Result<Self, PatternError> {
        let source = source.into();
        let flags = flags.into();

        if let Some(flag) = flags.chars().find(|c| !SUPPORTED_FLAGS.contains(c)) {
            return Err(PatternError::UnsupportedFlag {
                flag,
                pattern: source,
            });
        }

        let regex = RegexBuilder::new(&source)
            .case_insensitive(flags.contains('i'))
            .multi_line(flags.contains('m'))
            .dot_matches_new_line(flags.contains('s'))
            .build()
            .map_err(|error| PatternError::InvalidRegex {
                pattern: source.clone(),
                error,
            })?;

        Ok(Self {
            source,
            flags,
            regex,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Whether the pattern matches anywhere in `haystack`.
    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.flags == other.flags
    }
}

impl Eq for Pattern {}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

/// The exact-match key a rule selects files by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCriterion", into = "RawCriterion")]
pub enum TestCriterion {
    /// A regular expression, written `/source/flags` in canonical form.
    Pattern(Pattern),
    /// A plain string, which is its own canonical form.
    Literal(String),
}

impl TestCriterion {
    /// Build a pattern criterion with no flags.
    pub fn regex(source: impl Into<String>) -> Result<Self, PatternError> {
        Pattern::new(source).map(Self::Pattern)
    }

    /// Canonical textual form used for equality lookups.
    pub fn canonical(&self) -> String {
        self.to_string()
    }

    /// Whether the criterion would select `resource`.
    ///
    /// Patterns match anywhere in the path; literals match as a path prefix.
    pub fn is_match(&self, resource: &str) -> bool {
        match self {
            Self::Pattern(pattern) => pattern.is_match(resource),
            Self::Literal(prefix) => resource.starts_with(prefix.as_str()),
        }
    }
}

impl fmt::Display for TestCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern(pattern) => fmt::Display::fmt(pattern, f),
            Self::Literal(text) => f.write_str(text),
        }
    }
}

impl From<Pattern> for TestCriterion {
    fn from(pattern: Pattern) -> Self {
        Self::Pattern(pattern)
    }
}

impl From<&str> for TestCriterion {
    fn from(text: &str) -> Self {
        Self::Literal(text.to_string())
    }
}

impl From<String> for TestCriterion {
    fn from(text: String) -> Self {
        Self::Literal(text)
    }
}

/// Serialized shape: a bare string for literals, `{ "regex", "flags" }` for
/// patterns.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawCriterion {
    Literal(String),
    Pattern {
        regex: String,
        #[serde(default, skip_serializing_if = "String::is_empty")]
        flags: String,
    },
}

impl TryFrom<RawCriterion> for TestCriterion {
    type Error = PatternError;

    fn try_from(raw: RawCriterion) -> Result<Self, Self::Error> {
        match raw {
            RawCriterion::Literal(text) => Ok(Self::Literal(text)),
            RawCriterion::Pattern { regex, flags } => {
                Pattern::with_flags(regex, flags).map(Self::Pattern)
            }
        }
    }
}

impl From<TestCriterion> for RawCriterion {
    fn from(criterion: TestCriterion) -> Self {
        match criterion {
            TestCriterion::Literal(text) => RawCriterion::Literal(text),
            TestCriterion::Pattern(pattern) => RawCriterion::Pattern {
                regex: pattern.source,
                flags: pattern.flags,
            },
        }
    }
}
