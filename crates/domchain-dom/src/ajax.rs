//! Request helper.
//!
//! Issues one asynchronous HTTP request through `XMLHttpRequest` and routes
//! the outcome either to a future ([`send`]) or to callbacks ([`ajax`]).
//!
//! - GET requests carry their parameters in the query string.
//! - Other methods send a multipart form unmodified, JSON text when the
//!   content type mentions JSON, and a URL-encoded form otherwise.
//! - A 2xx status is a success; the body is parsed as JSON when the
//!   response declares a JSON content type.
//! - Non-GET requests carry the page's CSRF token when configured.
//!
//! There is no retry, timeout or cancellation.
//!
//! ## Example
//!
//! ```ignore
//! use domchain_dom::ajax::{get, post_json};
//! use domchain_params::Params;
//! use serde_json::json;
//!
//! let response = get("/search", Params::new().insert("q", "test")).await?;
//! let created = post_json("/api/items", json!({"name": "Widget"})).await?;
//! ```

pub mod error;
pub mod response;
pub mod settings;
pub mod transport;

pub use error::AjaxError;
pub use response::{Response, ResponseBody, is_success, parse_response_body};
pub use settings::{
	APPLICATION_JSON, Body, ContentType, FORM_URLENCODED, Payload, PreparedRequest, RequestSettings,
};
pub use transport::{ajax, get, post, post_json, send};
