//! CSRF token lookup for the request helper.
//!
//! Non-GET requests to the page's own origin carry the page's CSRF token when
//! [`DomchainConfig::csrf_protection`] is on; see [`is_same_origin`]. The
//! token is looked up in this order:
//! 1. **Cookie**: the configured cookie (`csrftoken` by default)
//! 2. **Meta tag**: `<meta name="csrf-token" content="...">`
//! 3. **Hidden input**: `<input name="csrfmiddlewaretoken">`

use crate::config::DomchainConfig;

/// The meta tag name for CSRF tokens.
pub const CSRF_META_NAME: &str = "csrf-token";

/// The form field name for CSRF tokens.
pub const CSRF_FORM_FIELD: &str = "csrfmiddlewaretoken";

/// Retrieves the CSRF token from the page.
///
/// Returns `None` if no source holds a token.
#[cfg(target_arch = "wasm32")]
pub fn csrf_token(cookie_name: &str) -> Option<String> {
	token_from_cookie(cookie_name)
		.or_else(token_from_meta)
		.or_else(token_from_input)
}

/// Retrieves the CSRF token (non-WASM stub).
#[cfg(not(target_arch = "wasm32"))]
pub fn csrf_token(_cookie_name: &str) -> Option<String> {
	None
}

#[cfg(target_arch = "wasm32")]
fn token_from_cookie(cookie_name: &str) -> Option<String> {
	use wasm_bindgen::JsCast;
	use web_sys::HtmlDocument;

	let document = web_sys::window()?.document()?;
	let html_doc = document.dyn_ref::<HtmlDocument>()?;
	let cookie_str = html_doc.cookie().ok()?;
	parse_cookie_value(&cookie_str, cookie_name)
}

#[cfg(target_arch = "wasm32")]
fn token_from_meta() -> Option<String> {
	let document = web_sys::window()?.document()?;
	let selector = format!("meta[name=\"{}\"]", CSRF_META_NAME);
	let meta = document.query_selector(&selector).ok()??;
	meta.get_attribute("content")
}

#[cfg(target_arch = "wasm32")]
fn token_from_input() -> Option<String> {
	use wasm_bindgen::JsCast;
	use web_sys::HtmlInputElement;

	let document = web_sys::window()?.document()?;
	let selector = format!("input[name=\"{}\"]", CSRF_FORM_FIELD);
	let input = document.query_selector(&selector).ok()??;
	let input: HtmlInputElement = input.dyn_into().ok()?;
	Some(input.value())
}

/// Parses a cookie value from a `document.cookie` string.
///
/// The cookie string format is: "name1=value1; name2=value2; ..."
pub fn parse_cookie_value(cookie_str: &str, name: &str) -> Option<String> {
	cookie_str
		.split(';')
		.filter_map(|part| part.split_once('='))
		.find(|(key, _)| key.trim() == name)
		.map(|(_, value)| value.trim().to_string())
}

/// Returns the `(header, token)` pair to send, if protection is on and a
/// token is available.
pub fn csrf_header(config: &DomchainConfig) -> Option<(String, String)> {
	if !config.csrf_protection {
		return None;
	}
	csrf_token(&config.csrf_cookie).map(|token| (config.csrf_header.clone(), token))
}

/// Returns true when `url`, resolved against the page address, has the
/// page's origin.
///
/// Default headers and the CSRF token are only sent to such URLs.
#[cfg(target_arch = "wasm32")]
pub fn is_same_origin(url: &str) -> bool {
	let Some(location) = web_sys::window().map(|window| window.location()) else {
		return false;
	};
	let (Ok(href), Ok(origin)) = (location.href(), location.origin()) else {
		return false;
	};
	web_sys::Url::new_with_base(url, &href).is_ok_and(|resolved| resolved.origin() == origin)
}

/// Returns true when `url` has the page's origin (non-WASM stub).
///
/// Without a page there is no origin to compare with, so only relative URLs
/// count as same-origin.
#[cfg(not(target_arch = "wasm32"))]
pub fn is_same_origin(url: &str) -> bool {
	!is_absolute_url(url)
}

/// Returns true if `url` names its own scheme or host (`https://...`,
/// `mailto:...`, `//host/...`).
pub fn is_absolute_url(url: &str) -> bool {
	let url = url.trim_start();
	if url.starts_with("//") {
		return true;
	}
	let Some((scheme, _)) = url.split_once(':') else {
		return false;
	};
	let mut chars = scheme.chars();
	chars.next().is_some_and(|first| first.is_ascii_alphabetic())
		&& chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
