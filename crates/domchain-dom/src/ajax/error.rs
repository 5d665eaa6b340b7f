//! Request helper errors.

use thiserror::Error;

/// Why a request did not succeed.
///
/// Delivered through the future's `Err` or the `on_error` callback; the
/// request helper never panics on a failed request.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AjaxError {
	/// The server answered with a non-2xx status.
	#[error("HTTP {status}: {status_text}")]
	Status {
		/// HTTP status code
		status: u16,
		/// Status text sent by the server
		status_text: String,
	},

	/// The request never got an HTTP answer (connection refused, aborted, CORS).
	#[error("Network error: {0}")]
	Network(String),

	/// Opening or sending the request threw.
	#[error("Transport error: {0}")]
	Transport(String),

	/// The payload could not be encoded for the chosen method and content type.
	#[error("Serialization error: {0}")]
	Serialization(String),

	/// A JSON response body could not be parsed.
	#[error("Deserialization error: {0}")]
	Deserialization(String),

	/// No window to issue the request from.
	#[error("Window object not available")]
	NoWindow,
}

impl AjaxError {
	/// Creates a network error
	pub fn network(msg: impl Into<String>) -> Self {
		Self::Network(msg.into())
	}

	/// Creates a serialization error
	pub fn serialization(msg: impl Into<String>) -> Self {
		Self::Serialization(msg.into())
	}

	/// Creates a deserialization error
	pub fn deserialization(msg: impl Into<String>) -> Self {
		Self::Deserialization(msg.into())
	}

	/// The text handed to error callbacks: the server's status text for a
	/// status error, the message otherwise.
	pub fn status_text(&self) -> String {
		match self {
			Self::Status { status_text, .. } => status_text.clone(),
			other => other.to_string(),
		}
	}

	/// The HTTP status, when the server answered.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Status { status, .. } => Some(*status),
			_ => None,
		}
	}
}

impl From<domchain_params::ParamsError> for AjaxError {
	fn from(err: domchain_params::ParamsError) -> Self {
		Self::Serialization(err.to_string())
	}
}
