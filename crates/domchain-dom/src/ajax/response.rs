//! Completed responses.

use serde::de::DeserializeOwned;
use serde_json::Value;
use web_sys::XmlHttpRequest;

use super::error::AjaxError;

/// A parsed response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
	/// The response declared a JSON content type.
	Json(Value),
	/// Any other response, as text.
	Text(String),
}

impl ResponseBody {
	/// The JSON value, if the body was JSON.
	pub fn as_json(&self) -> Option<&Value> {
		match self {
			Self::Json(value) => Some(value),
			Self::Text(_) => None,
		}
	}

	/// The text, if the body was not JSON.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Text(text) => Some(text),
			Self::Json(_) => None,
		}
	}

	/// Deserializes a JSON body into `T`.
	///
	/// # Errors
	///
	/// Returns [`AjaxError::Deserialization`] for text bodies or when the
	/// value does not match `T`.
	pub fn into_json<T: DeserializeOwned>(self) -> Result<T, AjaxError> {
		match self {
			Self::Json(value) => {
				serde_json::from_value(value).map_err(|e| AjaxError::deserialization(e.to_string()))
			}
			Self::Text(_) => Err(AjaxError::deserialization("response body is not JSON")),
		}
	}
}

/// A successful response.
#[derive(Debug, Clone)]
pub struct Response {
	/// HTTP status code (always 2xx)
	pub status: u16,
	/// Status text sent by the server
	pub status_text: String,
	/// Parsed body
	pub body: ResponseBody,
	/// The request object, for headers and other raw access
	pub xhr: XmlHttpRequest,
}

/// Returns true for a 2xx status.
pub fn is_success(status: u16) -> bool {
	(200..300).contains(&status)
}

/// Parses a response body according to its declared content type.
///
/// A content type mentioning `json` parses the text as JSON; an empty JSON
/// body yields `null`. Anything else is returned as text.
///
/// # Errors
///
/// Returns [`AjaxError::Deserialization`] when a JSON body does not parse.
pub fn parse_response_body(
	content_type: Option<&str>,
	text: String,
) -> Result<ResponseBody, AjaxError> {
	let is_json = content_type.is_some_and(|value| value.to_ascii_lowercase().contains("json"));
	if !is_json {
		return Ok(ResponseBody::Text(text));
	}
	if text.trim().is_empty() {
		return Ok(ResponseBody::Json(Value::Null));
	}
	serde_json::from_str(&text)
		.map(ResponseBody::Json)
		.map_err(|e| AjaxError::deserialization(e.to_string()))
}
