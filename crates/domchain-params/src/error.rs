//! Error types for domchain-params

use thiserror::Error;

/// Error type for building [`Params`](crate::Params) from arbitrary values
#[derive(Debug, Error)]
pub enum ParamsError {
	/// The top-level value was not a key/value mapping
	#[error("Parameters must be a key/value mapping, got {0}")]
	NotAnObject(&'static str),

	/// The value could not be converted through serde
	#[error("Failed to convert parameters: {0}")]
	Serde(#[from] serde_json::Error),
}

/// Result type for parameter operations
pub type Result<T> = std::result::Result<T, ParamsError>;
