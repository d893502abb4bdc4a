//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use pack_config_utils::{Configuration, TestCriterion};
use std::path::{Path, PathBuf};

/// Path to the application configuration fixture
pub fn app_config_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/app_config.json")
}

/// Load the application configuration fixture
pub fn app_config() -> Configuration {
    let contents = std::fs::read_to_string(app_config_path()).expect("read app_config.json");
    Configuration::from_json_str(&contents).expect("parse app_config.json")
}

/// Pattern criterion shorthand
pub fn regex(source: &str) -> TestCriterion {
    TestCriterion::regex(source).expect("valid pattern")
}

/// Route library logs to the test harness; set RUST_LOG to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
