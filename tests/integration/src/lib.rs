//! Integration test utilities for domchain
//!
//! Shared fixtures for tests that exercise the component crates through the
//! `domchain` facade.

use domchain::ajax::DomchainConfig;
use domchain::params::Params;
use rstest::fixture;
use serde_json::json;

/// Configuration of a page that marks its requests and protects writes.
#[fixture]
pub fn client_config() -> DomchainConfig {
	DomchainConfig::default()
		.with_default_header("X-Requested-With", "XMLHttpRequest")
		.with_csrf_header("X-CSRFToken")
}

/// Search parameters covering scalars, a list and a nested object.
#[fixture]
pub fn search_params() -> Params {
	Params::new()
		.insert("q", "test")
		.insert("tags", vec!["x", "y"])
		.insert("filter", json!({"state": "open", "label": null}))
}
