//! Element creation and query dispatch.
//!
//! [`dom`] turns a descriptor into elements. A descriptor is either an
//! element that is already wrapped or a string, which is read as a selector
//! or as a tag name depending on its shape and on whether a scope is given:
//!
//! | Descriptor | Scope | Result |
//! |------------|-------|--------|
//! | element | any | that element |
//! | `#id` / `.class` | none | query against the whole document |
//! | any string | `Some(el)` | query inside `el` |
//! | other string | none | a new element of that tag |
//!
//! A query that matches nothing yields a new element when the string is a
//! bare tag name, and an empty collection otherwise.
//!
//! ## Example
//!
//! ```ignore
//! use domchain_dom::{dom, Chainable};
//!
//! let items = dom(".item", None)?.into_els();
//! items.add_class("seen")?;
//!
//! let fresh = dom("section", None)?;
//! assert!(fresh.is_created());
//! ```

use web_sys::Element;

use crate::error::Result;
use crate::{Doc, El, Els};

/// What to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Descriptor<'a> {
	/// A selector or tag name.
	Selector(&'a str),
	/// An existing element.
	Element(El),
}

impl<'a> From<&'a str> for Descriptor<'a> {
	fn from(selector: &'a str) -> Self {
		Self::Selector(selector)
	}
}

impl<'a> From<&'a String> for Descriptor<'a> {
	fn from(selector: &'a String) -> Self {
		Self::Selector(selector.as_str())
	}
}

impl From<El> for Descriptor<'_> {
	fn from(el: El) -> Self {
		Self::Element(el)
	}
}

impl From<&El> for Descriptor<'_> {
	fn from(el: &El) -> Self {
		Self::Element(el.clone())
	}
}

impl From<Element> for Descriptor<'_> {
	fn from(element: Element) -> Self {
		Self::Element(El::new(element))
	}
}

/// Outcome of [`dom`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
	/// Exactly one existing element.
	One(El),
	/// Zero or several existing elements.
	Many(Els),
	/// A newly created, detached element.
	Created(El),
}

impl Resolved {
	/// Returns true if a new element was created.
	pub fn is_created(&self) -> bool {
		matches!(self, Self::Created(_))
	}

	/// Number of elements resolved.
	pub fn len(&self) -> usize {
		match self {
			Self::One(_) | Self::Created(_) => 1,
			Self::Many(els) => els.len(),
		}
	}

	/// Returns true if nothing was resolved.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// The first element, if any.
	pub fn first(&self) -> Option<&El> {
		match self {
			Self::One(el) | Self::Created(el) => Some(el),
			Self::Many(els) => els.first(),
		}
	}

	/// Converts into a single element, dropping any others.
	pub fn into_el(self) -> Option<El> {
		match self {
			Self::One(el) | Self::Created(el) => Some(el),
			Self::Many(els) => els.into_iter().next(),
		}
	}

	/// Converts into a collection.
	pub fn into_els(self) -> Els {
		match self {
			Self::One(el) | Self::Created(el) => Els::from(el),
			Self::Many(els) => els,
		}
	}
}

/// Where a string descriptor is looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lookup {
	Document,
	Scope,
	Create,
}

fn lookup(selector: &str, scoped: bool) -> Lookup {
	if scoped {
		Lookup::Scope
	} else if selector.starts_with('#') || selector.starts_with('.') {
		Lookup::Document
	} else {
		Lookup::Create
	}
}

/// Returns true for a bare tag name: an ASCII letter followed by letters,
/// digits or hyphens.
pub fn is_tag_like(s: &str) -> bool {
	let mut chars = s.chars();
	chars.next().is_some_and(|c| c.is_ascii_alphabetic())
		&& chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

fn from_matches(selector: &str, found: Els) -> Result<Resolved> {
	if found.is_empty() && is_tag_like(selector) {
		return create(selector).map(Resolved::Created);
	}
	let mut items = found.into_vec();
	if items.len() == 1
		&& let Some(el) = items.pop()
	{
		return Ok(Resolved::One(el));
	}
	Ok(Resolved::Many(Els::new(items)))
}

/// Resolves `descriptor`, optionally inside `scope`.
///
/// # Errors
///
/// Fails when the browser rejects the selector or the tag name.
pub fn dom<'a>(descriptor: impl Into<Descriptor<'a>>, scope: Option<&El>) -> Result<Resolved> {
	let selector = match descriptor.into() {
		Descriptor::Element(el) => return Ok(Resolved::One(el)),
		Descriptor::Selector(selector) => selector,
	};

	match (lookup(selector, scope.is_some()), scope) {
		(Lookup::Scope, Some(scope)) => from_matches(selector, scope.find(selector)?),
		(Lookup::Document, _) => from_matches(selector, query_all(selector)?),
		_ => create(selector).map(Resolved::Created),
	}
}

/// Creates a detached element in the current document.
pub fn create(tag: &str) -> Result<El> {
	Doc::global()?.create(tag)
}

/// Returns the first element in the document matching `selector`.
pub fn query(selector: &str) -> Result<Option<El>> {
	Doc::global()?.find_one(selector)
}

/// Returns every element in the document matching `selector`.
pub fn query_all(selector: &str) -> Result<Els> {
	Doc::global()?.find(selector)
}
