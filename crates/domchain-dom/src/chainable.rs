//! The [`Chainable`] capability shared by [`El`](crate::El) and
//! [`Els`](crate::Els).
//!
//! Setters return the receiver so calls can be chained; getters are separate
//! methods returning the value. On a collection, setters apply to every
//! member and getters read the first member.

use crate::content::Content;
use crate::error::Result;

/// Class, attribute, value and content operations.
pub trait Chainable {
	/// Adds each whitespace-separated class name.
	fn add_class(&self, names: &str) -> Result<&Self>;

	/// Removes each whitespace-separated class name.
	fn remove_class(&self, names: &str) -> Result<&Self>;

	/// Toggles each whitespace-separated class name.
	fn toggle_class(&self, names: &str) -> Result<&Self>;

	/// Returns true if the (first) element carries `name`.
	fn has_class(&self, name: &str) -> bool;

	/// Returns an attribute value.
	fn attr(&self, name: &str) -> Option<String>;

	/// Sets an attribute value.
	fn set_attr(&self, name: &str, value: &str) -> Result<&Self>;

	/// Removes an attribute.
	fn remove_attr(&self, name: &str) -> Result<&Self>;

	/// Returns the form value (input, select, textarea) or the `value` attribute.
	fn val(&self) -> Option<String>;

	/// Sets the form value, or the `value` attribute on other elements.
	fn set_val(&self, value: &str) -> Result<&Self>;

	/// Returns the inner HTML.
	fn html(&self) -> Option<String>;

	/// Replaces the inner HTML.
	fn set_html(&self, html: &str) -> &Self;

	/// Returns the text content.
	fn text(&self) -> Option<String>;

	/// Replaces the content with a single text node.
	fn set_text(&self, text: &str) -> &Self;

	/// Appends content as the last child.
	///
	/// Strings and numbers are appended as text; elements and nodes are
	/// appended as child nodes.
	fn append(&self, content: impl Into<Content>) -> Result<&Self>;

	/// Inserts content as the first child, with the same rules as [`append`](Self::append).
	fn prepend(&self, content: impl Into<Content>) -> Result<&Self>;

	/// Removes every child node.
	fn empty(&self) -> &Self;

	/// Detaches the element(s) from the document.
	fn remove(&self) -> &Self;
}

/// Splits a class list argument into individual names.
pub(crate) fn class_names(names: &str) -> impl Iterator<Item = &str> {
	names.split_whitespace()
}
