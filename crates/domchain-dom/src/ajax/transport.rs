//! XMLHttpRequest transport.
//!
//! [`send`] issues one request and resolves exactly once: the load, error
//! and abort handlers share a single oneshot sender, and the first one to
//! fire takes it. [`ajax`] is the callback-style wrapper around it.

use http::Method;
use serde_json::Value;

use domchain_params::Params;

use super::error::AjaxError;
use super::response::Response;
use super::settings::RequestSettings;
use crate::{debug_log, warn_log};

#[cfg(target_arch = "wasm32")]
mod browser {
	use std::cell::RefCell;
	use std::rc::Rc;

	use futures::channel::oneshot;
	use wasm_bindgen::JsCast;
	use wasm_bindgen::JsValue;
	use wasm_bindgen::closure::Closure;
	use web_sys::{Event, XmlHttpRequest};

	use super::super::error::AjaxError;
	use super::super::response::{Response, is_success, parse_response_body};
	use super::super::settings::{Body, PreparedRequest};
	use crate::error::js_error_message;

	/// How the request ended, as seen by the event handlers.
	enum Outcome {
		Loaded,
		Failed(&'static str),
	}

	type Sender = Rc<RefCell<Option<oneshot::Sender<Outcome>>>>;

	/// Keeps the handler closures alive while the request is in flight and
	/// detaches them from the request when dropped.
	struct Handlers {
		xhr: XmlHttpRequest,
		_closures: Vec<Closure<dyn FnMut(Event)>>,
	}

	impl Handlers {
		fn install(xhr: &XmlHttpRequest, sender: oneshot::Sender<Outcome>) -> Self {
			let sender: Sender = Rc::new(RefCell::new(Some(sender)));
			let handler = |outcome: fn() -> Outcome| {
				let sender = Rc::clone(&sender);
				Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
					if let Some(sender) = sender.borrow_mut().take() {
						let _ = sender.send(outcome());
					}
				})
			};

			let onload = handler(|| Outcome::Loaded);
			let onerror = handler(|| Outcome::Failed("request failed"));
			let onabort = handler(|| Outcome::Failed("request aborted"));
			xhr.set_onload(Some(onload.as_ref().unchecked_ref()));
			xhr.set_onerror(Some(onerror.as_ref().unchecked_ref()));
			xhr.set_onabort(Some(onabort.as_ref().unchecked_ref()));

			Self {
				xhr: xhr.clone(),
				_closures: vec![onload, onerror, onabort],
			}
		}
	}

	impl Drop for Handlers {
		fn drop(&mut self) {
			self.xhr.set_onload(None);
			self.xhr.set_onerror(None);
			self.xhr.set_onabort(None);
		}
	}

	fn transport(err: JsValue) -> AjaxError {
		AjaxError::Transport(js_error_message(&err))
	}

	pub(super) async fn perform(request: PreparedRequest) -> Result<Response, AjaxError> {
		let xhr = XmlHttpRequest::new().map_err(transport)?;
		xhr.open_with_async(request.method.as_str(), &request.url, true)
			.map_err(transport)?;
		for (name, value) in &request.headers {
			xhr.set_request_header(name, value).map_err(transport)?;
		}

		let (sender, receiver) = oneshot::channel();
		let _handlers = Handlers::install(&xhr, sender);

		let sent = match &request.body {
			Body::Empty => xhr.send(),
			Body::Text(text) => xhr.send_with_opt_str(Some(text)),
			Body::Form(form) => xhr.send_with_opt_form_data(Some(form)),
		};
		sent.map_err(transport)?;

		match receiver.await {
			Ok(Outcome::Loaded) => complete(xhr),
			Ok(Outcome::Failed(reason)) => Err(AjaxError::network(reason)),
			Err(_) => Err(AjaxError::network("request dropped before completion")),
		}
	}

	fn complete(xhr: XmlHttpRequest) -> Result<Response, AjaxError> {
		let status = xhr.status().map_err(transport)?;
		// Status 0 after load means the browser blocked the response.
		if status == 0 {
			return Err(AjaxError::network("request failed"));
		}
		let status_text = xhr.status_text().unwrap_or_default();
		if !is_success(status) {
			return Err(AjaxError::Status {
				status,
				status_text,
			});
		}

		let content_type = xhr.get_response_header("Content-Type").ok().flatten();
		let text = xhr.response_text().ok().flatten().unwrap_or_default();
		let body = parse_response_body(content_type.as_deref(), text)?;
		Ok(Response {
			status,
			status_text,
			body,
			xhr,
		})
	}
}

/// Issues the request described by `settings`.
///
/// Resolves once, with the response on a 2xx status or the failure
/// otherwise. The settings' callbacks are not called; see [`ajax`].
#[cfg(target_arch = "wasm32")]
pub async fn send(settings: &RequestSettings) -> Result<Response, AjaxError> {
	let request = settings.prepare()?;
	debug_log!("{} {}", request.method, request.url);
	browser::perform(request).await
}

/// Issues the request (non-WASM stub).
///
/// The request is still prepared, so encoding errors surface the same way;
/// everything else fails with [`AjaxError::NoWindow`].
#[cfg(not(target_arch = "wasm32"))]
pub async fn send(settings: &RequestSettings) -> Result<Response, AjaxError> {
	settings.prepare()?;
	debug_log!("{} {} (no browser)", settings.method, settings.url);
	Err(AjaxError::NoWindow)
}

/// Issues the request in the background and reports the outcome to the
/// settings' `on_success` or `on_error` callback, exactly one of them once.
pub fn ajax(settings: RequestSettings) {
	#[cfg(target_arch = "wasm32")]
	wasm_bindgen_futures::spawn_local(async move {
		let outcome = send(&settings).await;
		deliver(&settings, outcome);
	});

	#[cfg(not(target_arch = "wasm32"))]
	{
		let outcome = futures::executor::block_on(send(&settings));
		deliver(&settings, outcome);
	}
}

fn deliver(settings: &RequestSettings, outcome: Result<Response, AjaxError>) {
	match outcome {
		Ok(response) => {
			if let Some(on_success) = &settings.on_success {
				on_success.call(response);
			}
		}
		Err(err) => match &settings.on_error {
			Some(on_error) => on_error.call(err),
			None => warn_log!("{} {} failed: {}", settings.method, settings.url, err),
		},
	}
}

/// Sends a GET request with `params` as the query string.
pub async fn get(url: &str, params: Params) -> Result<Response, AjaxError> {
	send(&RequestSettings::get(url).params(params)).await
}

/// Sends a POST request with `params` as a URL-encoded form body.
pub async fn post(url: &str, params: Params) -> Result<Response, AjaxError> {
	send(&RequestSettings::post(url).params(params)).await
}

/// Sends a POST request with `value` as a JSON body.
pub async fn post_json(url: &str, value: Value) -> Result<Response, AjaxError> {
	send(&RequestSettings::new(url).method(Method::POST).json(value)).await
}
