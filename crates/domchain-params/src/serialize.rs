//! Parameter serialization.
//!
//! Converts a [`Params`] mapping into the flat `(key, value)` pair list sent
//! as a query string or form body.
//!
//! | Value | Pairs produced |
//! |-------|----------------|
//! | `null` | none |
//! | scalar | `key=value` |
//! | array | `key[]=item` per item, in order |
//! | object | `key[sub]=value` per member |
//!
//! Containers nested deeper than one level have no dedicated encoding; such
//! values are written as their compact JSON text.

use serde_json::Value;

use crate::Params;

/// Returns the unencoded `(key, value)` pairs for `params`.
///
/// ```
/// use domchain_params::{Params, pairs};
/// use serde_json::json;
///
/// let params = Params::new().insert("user", json!({"name": "ann", "age": 7}));
/// assert_eq!(
///     pairs(&params),
///     vec![
///         ("user[name]".to_string(), "ann".to_string()),
///         ("user[age]".to_string(), "7".to_string()),
///     ]
/// );
/// ```
pub fn pairs(params: &Params) -> Vec<(String, String)> {
	let mut out = Vec::with_capacity(params.len());

	for (key, value) in params.iter() {
		match value {
			Value::Object(members) => {
				for (sub_key, member) in members {
					if let Some(text) = scalar_text(member) {
						out.push((format!("{key}[{sub_key}]"), text));
					}
				}
			}
			Value::Array(items) => {
				for item in items {
					if let Some(text) = scalar_text(item) {
						out.push((format!("{key}[]"), text));
					}
				}
			}
			other => {
				if let Some(text) = scalar_text(other) {
					out.push((key.clone(), text));
				}
			}
		}
	}

	out
}

/// Serializes `params` into a URL-encoded string such as
/// `q=test&tags%5B%5D=x&tags%5B%5D=y`.
///
/// Keys and values are percent-encoded independently.
pub fn serialize(params: &Params) -> String {
	pairs(params)
		.iter()
		.map(|(key, value)| {
			format!(
				"{}={}",
				urlencoding::encode(key),
				urlencoding::encode(value)
			)
		})
		.collect::<Vec<_>>()
		.join("&")
}

/// Appends an encoded query string to `url`.
///
/// Uses `&` when the URL already carries a query and leaves the URL untouched
/// when `query` is empty.
///
/// ```
/// use domchain_params::append_query;
///
/// assert_eq!(append_query("/search", "q=a"), "/search?q=a");
/// assert_eq!(append_query("/search?page=2", "q=a"), "/search?page=2&q=a");
/// assert_eq!(append_query("/search", ""), "/search");
/// assert_eq!(append_query("/page#top", "q=a"), "/page?q=a#top");
/// ```
pub fn append_query(url: &str, query: &str) -> String {
	if query.is_empty() {
		return url.to_string();
	}

	// The fragment stays last; the query goes in front of it.
	let (base, fragment) = match url.find('#') {
		Some(pos) => url.split_at(pos),
		None => (url, ""),
	};
	match base.find('?') {
		Some(pos) if pos + 1 == base.len() => format!("{base}{query}{fragment}"),
		Some(_) if base.ends_with('&') => format!("{base}{query}{fragment}"),
		Some(_) => format!("{base}&{query}{fragment}"),
		None => format!("{base}?{query}{fragment}"),
	}
}

fn scalar_text(value: &Value) -> Option<String> {
	match value {
		Value::Null => None,
		Value::String(s) => Some(s.clone()),
		Value::Bool(b) => Some(b.to_string()),
		Value::Number(n) => Some(n.to_string()),
		nested => Some(nested.to_string()),
	}
}
