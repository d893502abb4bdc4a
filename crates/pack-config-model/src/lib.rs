//! Pack Config Model
//!
//! Typed model of a bundler configuration: the ordered plugin list and the
//! ordered module rule list, plus the loader references and test criteria
//! rules are built from. Keys the model does not interpret are preserved so a
//! configuration round-trips through JSON without loss.

pub mod config;
pub mod criterion;
mod de;
pub mod error;
pub mod loader;
pub mod plugin;
pub mod rule;

pub use config::{Configuration, ModuleOptions};
pub use criterion::{Pattern, TestCriterion};
pub use error::{ModelError, PatternError};
pub use loader::{LoaderEntry, LoaderRef, WrappedLoader};
pub use plugin::Plugin;
pub use rule::Rule;
