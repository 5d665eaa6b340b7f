//! The [`Params`] mapping handed to the serializer.
//!
//! `Params` keeps keys in insertion order so that the generated query string
//! follows the order in which the caller declared the parameters.
//!
//! ## Example
//!
//! ```
//! use domchain_params::Params;
//!
//! let params = Params::new()
//!     .insert("q", "test")
//!     .insert("tags", vec!["x", "y"]);
//!
//! assert_eq!(params.to_query_string(), "q=test&tags%5B%5D=x&tags%5B%5D=y");
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ParamsError, Result};

/// An insertion-ordered mapping of parameter names to values.
///
/// Values may be scalars, arrays of scalars, or a single level of nested
/// mapping. `null` values (including `None` passed to [`Params::insert`])
/// are kept in the mapping but never serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);

impl Params {
	/// Creates an empty parameter mapping.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds or replaces a parameter and returns the mapping for chaining.
	///
	/// ```
	/// use domchain_params::Params;
	///
	/// let params = Params::new()
	///     .insert("page", 2)
	///     .insert("filter", None::<&str>);
	///
	/// assert_eq!(params.to_query_string(), "page=2");
	/// ```
	pub fn insert(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.set(key, value);
		self
	}

	/// Adds or replaces a parameter in place.
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
		self.0.insert(key.into(), value.into());
	}

	/// Removes a parameter, returning its previous value.
	pub fn remove(&mut self, key: &str) -> Option<Value> {
		self.0.shift_remove(key)
	}

	/// Returns the value stored for `key`.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	/// Returns the number of stored keys, including `null` ones.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true when no keys are stored.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates over the stored keys and values in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
		self.0.iter()
	}

	/// Builds parameters from any serializable value whose serde
	/// representation is a map or struct.
	///
	/// # Errors
	///
	/// Returns [`ParamsError::NotAnObject`] for sequences and scalars, and
	/// [`ParamsError::Serde`] when serialization itself fails.
	pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
		Self::from_value(serde_json::to_value(value)?)
	}

	/// Builds parameters from a JSON value, which must be an object.
	///
	/// `null` is accepted and yields an empty mapping, so "no data" and
	/// "empty data" serialize identically.
	pub fn from_value(value: Value) -> Result<Self> {
		match value {
			Value::Object(map) => Ok(Self(map)),
			Value::Null => Ok(Self::new()),
			Value::Bool(_) => Err(ParamsError::NotAnObject("a boolean")),
			Value::Number(_) => Err(ParamsError::NotAnObject("a number")),
			Value::String(_) => Err(ParamsError::NotAnObject("a string")),
			Value::Array(_) => Err(ParamsError::NotAnObject("an array")),
		}
	}

	/// Serializes the mapping into a URL-encoded query string.
	pub fn to_query_string(&self) -> String {
		crate::serialize::serialize(self)
	}

	/// Returns the mapping as a JSON object value.
	pub fn to_value(&self) -> Value {
		Value::Object(self.0.clone())
	}

	/// Consumes the mapping and returns it as a JSON object value.
	pub fn into_value(self) -> Value {
		Value::Object(self.0)
	}
}

impl TryFrom<Value> for Params {
	type Error = ParamsError;

	fn try_from(value: Value) -> Result<Self> {
		Self::from_value(value)
	}
}

impl From<Map<String, Value>> for Params {
	fn from(map: Map<String, Value>) -> Self {
		Self(map)
	}
}

impl<K, V> FromIterator<(K, V)> for Params
where
	K: Into<String>,
	V: Into<Value>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(
			iter.into_iter()
				.map(|(key, value)| (key.into(), value.into()))
				.collect(),
		)
	}
}
