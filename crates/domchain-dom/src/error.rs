//! Error types for DOM operations

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Error type for element, collection and event operations.
///
/// Most variants carry the message of the exception thrown by the browser;
/// the helpers do not validate input up front and leave that to the platform.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
	/// Window object not available.
	#[error("Window object not available")]
	NoWindow,

	/// Document object not available.
	#[error("Document object not available")]
	NoDocument,

	/// The browser rejected the element creation (e.g. an invalid tag name).
	#[error("Failed to create <{tag}> element: {reason}")]
	CreateElement {
		/// The requested tag name
		tag: String,
		/// The platform's message
		reason: String,
	},

	/// The browser rejected a selector.
	#[error("Invalid selector '{selector}': {reason}")]
	InvalidSelector {
		/// The selector that failed to parse
		selector: String,
		/// The platform's message
		reason: String,
	},

	/// Any other exception thrown by a DOM call.
	#[error("DOM operation failed: {0}")]
	Js(String),
}

impl DomError {
	pub(crate) fn selector(selector: &str, err: JsValue) -> Self {
		Self::InvalidSelector {
			selector: selector.to_string(),
			reason: js_error_message(&err),
		}
	}

	pub(crate) fn create(tag: &str, err: JsValue) -> Self {
		Self::CreateElement {
			tag: tag.to_string(),
			reason: js_error_message(&err),
		}
	}
}

impl From<JsValue> for DomError {
	fn from(err: JsValue) -> Self {
		Self::Js(js_error_message(&err))
	}
}

/// Result type for DOM operations
pub type Result<T> = std::result::Result<T, DomError>;

/// Extracts a readable message from a thrown JS value.
pub(crate) fn js_error_message(value: &JsValue) -> String {
	if let Some(message) = value.as_string() {
		return message;
	}
	if let Some(error) = value.dyn_ref::<js_sys::Error>() {
		return String::from(error.message());
	}
	format!("{value:?}")
}
