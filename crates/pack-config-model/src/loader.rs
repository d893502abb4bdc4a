//! Loader references
//!
//! A rule names the loaders it applies in one of several shapes: a bare
//! identifier, a wrapped record `{ "loader": ..., "options": ... }`, or a list
//! mixing both. Identifiers are either short names (`css-loader`) or fully
//! resolved module paths.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Wrapped loader record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WrappedLoader {
    /// Loader identifier (name or resolved path).
    pub loader: String,

    /// Options handed to the loader. `Some(Null)` records an explicit `null`.
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

/// One loader in a rule's loader reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LoaderEntry {
    Name(String),
    Wrapped(WrappedLoader),
}

impl LoaderEntry {
    /// Wrap a loader identifier with options.
    pub fn wrapped(loader: impl Into<String>, options: Option<Value>) -> Self {
        Self::Wrapped(WrappedLoader {
            loader: loader.into(),
            options,
            extra: Map::new(),
        })
    }

    /// The loader identifier, unwrapped if necessary.
    pub fn identifier(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Wrapped(wrapped) => &wrapped.loader,
        }
    }
}

impl From<&str> for LoaderEntry {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for LoaderEntry {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// A rule's loader reference: one entry or an ordered list of entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LoaderRef {
    Single(LoaderEntry),
    List(Vec<LoaderEntry>),
}

impl LoaderRef {
    /// Entries in declaration order.
    pub fn entries(&self) -> &[LoaderEntry] {
        match self {
            Self::Single(entry) => std::slice::from_ref(entry),
            Self::List(entries) => entries,
        }
    }

    /// Entries in declaration order, for in-place edits.
    pub fn entries_mut(&mut self) -> &mut [LoaderEntry] {
        match self {
            Self::Single(entry) => std::slice::from_mut(entry),
            Self::List(entries) => entries,
        }
    }

    /// Append an entry, promoting a single entry to a list.
    pub fn push(&mut self, entry: LoaderEntry) {
        let mut entries = match std::mem::replace(self, Self::List(Vec::new())) {
            Self::Single(first) => vec![first],
            Self::List(entries) => entries,
        };
        entries.push(entry);
        *self = Self::List(entries);
    }
}

impl From<LoaderEntry> for LoaderRef {
    fn from(entry: LoaderEntry) -> Self {
        Self::Single(entry)
    }
}

impl From<&str> for LoaderRef {
    fn from(name: &str) -> Self {
        Self::Single(name.into())
    }
}

impl From<Vec<LoaderEntry>> for LoaderRef {
    fn from(entries: Vec<LoaderEntry>) -> Self {
        Self::List(entries)
    }
}
