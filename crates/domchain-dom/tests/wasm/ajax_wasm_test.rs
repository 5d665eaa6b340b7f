//! Request Helper WASM Tests
//!
//! Browser tests for request construction, CSRF lookup, response parsing and
//! callback routing. These tests do not depend on a test server: successful
//! responses come from blob URLs, failures from unreachable URLs.
//!
//! **Run with**: `wasm-pack test --headless --firefox crates/domchain-dom`

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::{Blob, BlobPropertyBag, Url};

wasm_bindgen_test_configure!(run_in_browser);

use domchain_dom::ajax::{AjaxError, Body, RequestSettings, Response, ResponseBody, ajax, get, send};
use domchain_dom::config::{DomchainConfig, reset_config};
use domchain_dom::{Chainable, Doc, input};
use domchain_params::Params;
use serde_json::json;

/// Serves `body` with the given content type from a blob URL
fn blob_url(body: &str, content_type: &str) -> String {
	let options = BlobPropertyBag::new();
	options.set_type(content_type);
	let parts = js_sys::Array::of1(&JsValue::from_str(body));
	let blob = Blob::new_with_str_sequence_and_options(&parts, &options).unwrap();
	Url::create_object_url_with_blob(&blob).unwrap()
}

/// Appends a hidden CSRF input to the body
fn csrf_input(token: &str) -> domchain_dom::El {
	let field = input().unwrap();
	field
		.set_attr("name", "csrfmiddlewaretoken")
		.unwrap()
		.set_val(token)
		.unwrap();
	Doc::global()
		.unwrap()
		.body()
		.unwrap()
		.append(&field)
		.unwrap();
	field
}

// ============================================================================
// Request Construction Tests
// ============================================================================

/// GET parameters end up in the query string
#[wasm_bindgen_test]
fn test_prepare_get_query_string() {
	let request = RequestSettings::get("/search")
		.params(
			Params::new()
				.insert("q", "test")
				.insert("tags", vec!["x", "y"]),
		)
		.prepare()
		.unwrap();

	assert_eq!(request.url, "/search?q=test&tags%5B%5D=x&tags%5B%5D=y");
	assert_eq!(request.body, Body::Empty);
}

/// POST requests pick up the CSRF token from a hidden input
#[wasm_bindgen_test]
fn test_prepare_post_includes_csrf_token_from_input() {
	reset_config();
	let field = csrf_input("tok-123");

	let request = RequestSettings::post("/api")
		.json(json!({"a": 1}))
		.prepare()
		.unwrap();
	let without_csrf = RequestSettings::post("/api")
		.prepare_with(&DomchainConfig::default().with_csrf_protection(false))
		.unwrap();

	field.remove();
	assert_eq!(request.header("X-CSRFToken"), Some("tok-123"));
	assert_eq!(request.header("Content-Type"), Some("application/json"));
	assert_eq!(request.body, Body::Text(r#"{"a":1}"#.to_string()));
	assert_eq!(without_csrf.header("X-CSRFToken"), None);
}

/// A multipart form keeps the browser-generated content type
#[wasm_bindgen_test]
fn test_prepare_form_data() {
	let form = web_sys::FormData::new().unwrap();
	form.append_with_str("name", "file").unwrap();

	let request = RequestSettings::post("/upload")
		.form(form.clone())
		.prepare()
		.unwrap();

	assert_eq!(request.header("Content-Type"), None);
	assert_eq!(request.body, Body::Form(form.clone()));

	let get = RequestSettings::get("/upload").payload(form).prepare();
	assert!(matches!(get, Err(AjaxError::Serialization(_))));
}

/// Cross-origin requests carry neither default headers nor the CSRF token
#[wasm_bindgen_test]
fn test_prepare_cross_origin_skips_default_headers_and_csrf() {
	reset_config();
	let field = csrf_input("tok-456");
	let config = DomchainConfig::default().with_default_header("X-Requested-With", "XMLHttpRequest");

	let cross = RequestSettings::post("https://api.other-origin.example/items")
		.json(json!({"a": 1}))
		.prepare_with(&config)
		.unwrap();
	let same = RequestSettings::post("/api/items")
		.json(json!({"a": 1}))
		.prepare_with(&config)
		.unwrap();

	field.remove();
	assert_eq!(cross.header("X-CSRFToken"), None);
	assert_eq!(cross.header("X-Requested-With"), None);
	assert_eq!(cross.header("Content-Type"), Some("application/json"));
	assert_eq!(same.header("X-CSRFToken"), Some("tok-456"));
	assert_eq!(same.header("X-Requested-With"), Some("XMLHttpRequest"));
}

// ============================================================================
// Response Tests
// ============================================================================

/// A JSON response is parsed and handed over with the request object
#[wasm_bindgen_test]
async fn test_send_parses_json_response() {
	let text = r#"{"id":7,"tags":["a","b"]}"#;
	let url = blob_url(text, "application/json");

	let response = send(&RequestSettings::get(url.as_str())).await.unwrap();
	Url::revoke_object_url(&url).unwrap();

	assert_eq!(response.status, 200);
	assert_eq!(
		response.body,
		ResponseBody::Json(json!({"id": 7, "tags": ["a", "b"]}))
	);
	assert_eq!(response.xhr.response_text().unwrap().as_deref(), Some(text));
}

/// A non-JSON response is returned as text
#[wasm_bindgen_test]
async fn test_send_returns_text_response() {
	let url = blob_url("plain body", "text/plain");

	let response = get(&url, Params::new()).await.unwrap();
	Url::revoke_object_url(&url).unwrap();

	assert_eq!(response.status, 200);
	assert_eq!(response.body, ResponseBody::Text("plain body".to_string()));
}

/// A JSON content type with a malformed body fails to deserialize
#[wasm_bindgen_test]
async fn test_send_malformed_json_is_deserialization_error() {
	let url = blob_url("{not json", "application/json");

	let result = send(&RequestSettings::get(url.as_str())).await;
	Url::revoke_object_url(&url).unwrap();

	assert!(matches!(result, Err(AjaxError::Deserialization(_))));
}

/// ajax hands a successful response to the success callback only
#[wasm_bindgen_test]
async fn test_ajax_calls_success_callback_once() {
	let url = blob_url(r#"{"ok":true}"#, "application/json");
	let (sender, receiver) = futures::channel::oneshot::channel::<Response>();
	let sender = Rc::new(RefCell::new(Some(sender)));
	let successes = Rc::new(RefCell::new(0));
	let errors = Rc::new(RefCell::new(0));

	ajax(
		RequestSettings::get(url.as_str())
			.on_success({
				let successes = Rc::clone(&successes);
				move |response: Response| {
					*successes.borrow_mut() += 1;
					if let Some(sender) = sender.borrow_mut().take() {
						let _ = sender.send(response);
					}
				}
			})
			.on_error({
				let errors = Rc::clone(&errors);
				move |_| *errors.borrow_mut() += 1
			}),
	);

	let response = receiver.await.unwrap();
	Url::revoke_object_url(&url).unwrap();

	assert_eq!(response.body.as_json(), Some(&json!({"ok": true})));
	assert_eq!(response.xhr.status().unwrap(), 200);
	assert_eq!(*successes.borrow(), 1);
	assert_eq!(*errors.borrow(), 0);
}

/// ajax delivers a text response to the success callback
#[wasm_bindgen_test]
async fn test_ajax_text_response_reaches_success_callback() {
	let url = blob_url("pong", "text/plain");
	let (sender, receiver) = futures::channel::oneshot::channel::<String>();
	let sender = Rc::new(RefCell::new(Some(sender)));
	let errors = Rc::new(RefCell::new(0));

	ajax(
		RequestSettings::get(url.as_str())
			.on_success(move |response: Response| {
				if let Some(sender) = sender.borrow_mut().take() {
					let _ = sender.send(response.body.as_text().unwrap_or_default().to_string());
				}
			})
			.on_error({
				let errors = Rc::clone(&errors);
				move |_| *errors.borrow_mut() += 1
			}),
	);

	assert_eq!(receiver.await.unwrap(), "pong");
	Url::revoke_object_url(&url).unwrap();
	assert_eq!(*errors.borrow(), 0);
}

// ============================================================================
// Failure Tests
// ============================================================================

/// An unreachable host produces a network error
#[wasm_bindgen_test]
async fn test_send_network_failure() {
	let result = send(&RequestSettings::get("http://127.0.0.1:9/unreachable")).await;
	assert!(matches!(result, Err(AjaxError::Network(_))));
}

/// ajax routes the failure to the error callback, exactly once
#[wasm_bindgen_test]
async fn test_ajax_calls_error_callback_once() {
	let (sender, receiver) = futures::channel::oneshot::channel::<String>();
	let sender = Rc::new(RefCell::new(Some(sender)));
	let successes = Rc::new(RefCell::new(0));

	ajax(
		RequestSettings::post("http://127.0.0.1:9/unreachable")
			.params(Params::new().insert("a", 1))
			.on_success({
				let successes = Rc::clone(&successes);
				move |_| *successes.borrow_mut() += 1
			})
			.on_error(move |err| {
				if let Some(sender) = sender.borrow_mut().take() {
					let _ = sender.send(err.status_text());
				}
			}),
	);

	let message = receiver.await.unwrap();
	assert!(message.starts_with("Network error"));
	assert_eq!(*successes.borrow(), 0);
}
