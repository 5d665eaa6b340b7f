//! Request helper configuration.
//!
//! A [`DomchainConfig`] is installed once at startup with [`init_config`]
//! and read by every request through [`config`]. Without an explicit
//! initialization the defaults apply.
//!
//! ## Example
//!
//! ```ignore
//! use domchain_dom::config::{DomchainConfig, init_config};
//!
//! init_config(
//!     DomchainConfig::default()
//!         .with_csrf_header("X-CSRF-Token")
//!         .with_default_header("X-Client", "dashboard"),
//! )
//! .expect("configured twice");
//! ```

use std::cell::RefCell;

use crate::ajax::ContentType;
use crate::info_log;

/// The cookie the CSRF token is read from by default.
pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";

/// The header the CSRF token is sent in by default.
pub const DEFAULT_CSRF_HEADER: &str = "X-CSRFToken";

thread_local! {
	static CONFIG: RefCell<Option<DomchainConfig>> = const { RefCell::new(None) };
}

/// Settings shared by every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomchainConfig {
	/// Whether non-GET requests carry the CSRF token.
	pub csrf_protection: bool,
	/// Header name for the CSRF token.
	pub csrf_header: String,
	/// Cookie name the CSRF token is read from.
	pub csrf_cookie: String,
	/// Headers added to every same-origin request before the per-request
	/// headers. Empty by default.
	pub default_headers: Vec<(String, String)>,
	/// Content type used when a request does not set one.
	pub default_content_type: ContentType,
}

impl Default for DomchainConfig {
	fn default() -> Self {
		Self {
			csrf_protection: true,
			csrf_header: DEFAULT_CSRF_HEADER.to_string(),
			csrf_cookie: DEFAULT_CSRF_COOKIE.to_string(),
			default_headers: Vec::new(),
			default_content_type: ContentType::default(),
		}
	}
}

impl DomchainConfig {
	/// Turns CSRF token injection on or off.
	pub fn with_csrf_protection(mut self, enabled: bool) -> Self {
		self.csrf_protection = enabled;
		self
	}

	/// Sets the CSRF header name.
	pub fn with_csrf_header(mut self, header: impl Into<String>) -> Self {
		self.csrf_header = header.into();
		self
	}

	/// Sets the CSRF cookie name.
	pub fn with_csrf_cookie(mut self, cookie: impl Into<String>) -> Self {
		self.csrf_cookie = cookie.into();
		self
	}

	/// Adds a default header, replacing any default with the same name.
	pub fn with_default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		let name = name.into();
		self.default_headers
			.retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
		self.default_headers.push((name, value.into()));
		self
	}

	/// Drops every default header.
	pub fn without_default_headers(mut self) -> Self {
		self.default_headers.clear();
		self
	}

	/// Sets the default content type.
	pub fn with_default_content_type(mut self, content_type: impl Into<ContentType>) -> Self {
		self.default_content_type = content_type.into();
		self
	}
}

/// Installs the configuration.
///
/// # Errors
///
/// Returns `Err` with the provided configuration if one is already installed.
pub fn init_config(config: DomchainConfig) -> Result<(), DomchainConfig> {
	CONFIG.with(|slot| {
		let mut slot = slot.borrow_mut();
		if slot.is_some() {
			return Err(config);
		}
		info_log!(
			"request configuration installed ({} default header(s), CSRF {})",
			config.default_headers.len(),
			if config.csrf_protection { "on" } else { "off" }
		);
		*slot = Some(config);
		Ok(())
	})
}

/// Returns the installed configuration, or the defaults.
pub fn config() -> DomchainConfig {
	CONFIG.with(|slot| slot.borrow().clone().unwrap_or_default())
}

/// Returns true if [`init_config`] has been called.
pub fn is_configured() -> bool {
	CONFIG.with(|slot| slot.borrow().is_some())
}

/// Removes the installed configuration so defaults apply again.
pub fn reset_config() {
	CONFIG.with(|slot| slot.borrow_mut().take());
}
