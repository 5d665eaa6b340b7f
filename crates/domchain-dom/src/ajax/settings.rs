//! Request settings and request construction.
//!
//! [`RequestSettings::prepare`] turns the settings into a [`PreparedRequest`]
//! (final URL, header list, body) without touching the network, so the
//! encoding rules can be checked on any target.

use domchain_params::{Params, append_query};
use http::Method;
use serde_json::Value;
use web_sys::FormData;

use super::error::AjaxError;
use super::response::Response;
use crate::Callback;
use crate::config::{DomchainConfig, config};
use crate::csrf::{csrf_header, is_same_origin};

/// The content type of `application/x-www-form-urlencoded` request bodies.
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// The content type of JSON request bodies.
pub const APPLICATION_JSON: &str = "application/json";

/// The `Content-Type` a request declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentType {
	/// Send this header value.
	Header(String),
	/// Send no `Content-Type` header; the browser fills it in for
	/// multipart bodies.
	Suppressed,
}

impl Default for ContentType {
	fn default() -> Self {
		Self::Header(FORM_URLENCODED.to_string())
	}
}

impl ContentType {
	/// `application/json`.
	pub fn json() -> Self {
		Self::Header(APPLICATION_JSON.to_string())
	}

	/// Returns true if the header value mentions JSON.
	pub fn is_json(&self) -> bool {
		match self {
			Self::Header(value) => value.to_ascii_lowercase().contains("json"),
			Self::Suppressed => false,
		}
	}

	/// The header value, unless suppressed.
	pub fn header_value(&self) -> Option<&str> {
		match self {
			Self::Header(value) => Some(value),
			Self::Suppressed => None,
		}
	}
}

impl From<&str> for ContentType {
	fn from(value: &str) -> Self {
		if value == "false" {
			Self::Suppressed
		} else {
			Self::Header(value.to_string())
		}
	}
}

impl From<String> for ContentType {
	fn from(value: String) -> Self {
		Self::from(value.as_str())
	}
}

impl From<bool> for ContentType {
	/// `false` suppresses the header, `true` keeps the default.
	fn from(send: bool) -> Self {
		if send { Self::default() } else { Self::Suppressed }
	}
}

/// What a request carries.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
	/// Parameters, encoded as a query string or a form body.
	Params(Params),
	/// An arbitrary JSON value.
	Json(Value),
	/// A multipart form, sent unmodified.
	Form(FormData),
}

impl From<Params> for Payload {
	fn from(params: Params) -> Self {
		Self::Params(params)
	}
}

impl From<Value> for Payload {
	fn from(value: Value) -> Self {
		Self::Json(value)
	}
}

impl From<FormData> for Payload {
	fn from(form: FormData) -> Self {
		Self::Form(form)
	}
}

/// A request body ready to hand to the transport.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
	/// No body.
	Empty,
	/// A text body (URL-encoded form or JSON).
	Text(String),
	/// A multipart form.
	Form(FormData),
}

/// The concrete request derived from [`RequestSettings`].
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
	/// HTTP method
	pub method: Method,
	/// Final URL, including the query string for GET
	pub url: String,
	/// Request headers, in the order they are set
	pub headers: Vec<(String, String)>,
	/// Request body
	pub body: Body,
}

impl PreparedRequest {
	/// Looks up a header, ignoring ASCII case.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(existing, _)| existing.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}
}

/// Settings for one request.
///
/// ## Example
///
/// ```ignore
/// use domchain_dom::ajax::{RequestSettings, ajax};
/// use domchain_params::Params;
///
/// ajax(
///     RequestSettings::get("/search")
///         .params(Params::new().insert("q", "test"))
///         .on_success(|response| render(response.body))
///         .on_error(|err| show_error(err.status_text())),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RequestSettings {
	/// HTTP method (GET by default)
	pub method: Method,
	/// Target URL
	pub url: String,
	/// Content type; the configured default when `None`
	pub content_type: Option<ContentType>,
	/// Payload, if any
	pub payload: Option<Payload>,
	/// Extra headers, applied last
	pub headers: Vec<(String, String)>,
	/// Called with the response on a 2xx status
	pub on_success: Option<Callback<Response>>,
	/// Called with the failure otherwise
	pub on_error: Option<Callback<AjaxError>>,
}

impl RequestSettings {
	/// Creates GET settings for `url`.
	pub fn new(url: impl Into<String>) -> Self {
		Self {
			method: Method::GET,
			url: url.into(),
			content_type: None,
			payload: None,
			headers: Vec::new(),
			on_success: None,
			on_error: None,
		}
	}

	/// Creates GET settings for `url`.
	pub fn get(url: impl Into<String>) -> Self {
		Self::new(url)
	}

	/// Creates POST settings for `url`.
	pub fn post(url: impl Into<String>) -> Self {
		Self::new(url).method(Method::POST)
	}

	/// Sets the HTTP method.
	pub fn method(mut self, method: Method) -> Self {
		self.method = method;
		self
	}

	/// Sets the content type; `"false"` or `false` suppresses the header.
	pub fn content_type(mut self, content_type: impl Into<ContentType>) -> Self {
		self.content_type = Some(content_type.into());
		self
	}

	/// Sets the payload.
	pub fn payload(mut self, payload: impl Into<Payload>) -> Self {
		self.payload = Some(payload.into());
		self
	}

	/// Sets a parameter payload.
	pub fn params(self, params: Params) -> Self {
		self.payload(Payload::Params(params))
	}

	/// Sets a JSON payload and the `application/json` content type.
	pub fn json(self, value: Value) -> Self {
		self.payload(Payload::Json(value)).content_type(ContentType::json())
	}

	/// Sets a multipart payload and suppresses the `Content-Type` header.
	pub fn form(self, form: FormData) -> Self {
		self.payload(Payload::Form(form))
			.content_type(ContentType::Suppressed)
	}

	/// Adds a header, replacing an earlier one with the same name.
	pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		set_header(&mut self.headers, name.into(), value.into());
		self
	}

	/// Sets the success callback.
	pub fn on_success<F>(mut self, f: F) -> Self
	where
		F: Fn(Response) + 'static,
	{
		self.on_success = Some(Callback::new(f));
		self
	}

	/// Sets the error callback.
	pub fn on_error<F>(mut self, f: F) -> Self
	where
		F: Fn(AjaxError) + 'static,
	{
		self.on_error = Some(Callback::new(f));
		self
	}

	/// Builds the request with the installed configuration.
	///
	/// # Errors
	///
	/// Returns [`AjaxError::Serialization`] when the payload cannot be
	/// encoded for the method (a multipart form on GET, or a non-object
	/// JSON value where parameters are expected).
	pub fn prepare(&self) -> Result<PreparedRequest, AjaxError> {
		self.prepare_with(&config())
	}

	/// Builds the request with an explicit configuration.
	///
	/// The configured default headers and the CSRF token are only added when
	/// the URL has the page's origin, so cross-origin requests carry nothing
	/// but what the settings ask for.
	pub fn prepare_with(&self, config: &DomchainConfig) -> Result<PreparedRequest, AjaxError> {
		let content_type = self.effective_content_type(config);
		let query_only = carries_query(&self.method);

		let (url, body) = if query_only {
			let query = match &self.payload {
				None => String::new(),
				Some(Payload::Params(params)) => params.to_query_string(),
				Some(Payload::Json(value)) => Params::from_value(value.clone())?.to_query_string(),
				Some(Payload::Form(_)) => {
					return Err(AjaxError::serialization(format!(
						"multipart form data cannot be sent with {}",
						self.method
					)));
				}
			};
			(append_query(&self.url, &query), Body::Empty)
		} else {
			(self.url.clone(), encode_body(self.payload.as_ref(), &content_type)?)
		};

		let same_origin = is_same_origin(&self.url);
		let mut headers = if same_origin {
			config.default_headers.clone()
		} else {
			Vec::new()
		};
		if let Some(value) = content_type.header_value() {
			set_header(&mut headers, "Content-Type".to_string(), value.to_string());
		}
		if same_origin
			&& !query_only
			&& let Some((name, token)) = csrf_header(config)
		{
			set_header(&mut headers, name, token);
		}
		for (name, value) in &self.headers {
			set_header(&mut headers, name.clone(), value.clone());
		}

		Ok(PreparedRequest {
			method: self.method.clone(),
			url,
			headers,
			body,
		})
	}

	// A multipart payload without an explicit content type drops the
	// default header so the browser can add the boundary.
	fn effective_content_type(&self, config: &DomchainConfig) -> ContentType {
		match (&self.content_type, &self.payload) {
			(Some(content_type), _) => content_type.clone(),
			(None, Some(Payload::Form(_))) => ContentType::Suppressed,
			(None, _) => config.default_content_type.clone(),
		}
	}
}

fn carries_query(method: &Method) -> bool {
	*method == Method::GET || *method == Method::HEAD
}

fn encode_body(payload: Option<&Payload>, content_type: &ContentType) -> Result<Body, AjaxError> {
	let Some(payload) = payload else {
		return Ok(Body::Empty);
	};
	match payload {
		Payload::Form(form) => Ok(Body::Form(form.clone())),
		Payload::Json(value) if content_type.is_json() => Ok(Body::Text(value.to_string())),
		Payload::Params(params) if content_type.is_json() => {
			Ok(Body::Text(params.to_value().to_string()))
		}
		Payload::Json(value) => Ok(Body::Text(
			Params::from_value(value.clone())?.to_query_string(),
		)),
		Payload::Params(params) => Ok(Body::Text(params.to_query_string())),
	}
}

fn set_header(headers: &mut Vec<(String, String)>, name: String, value: String) {
	headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
	headers.push((name, value));
}
