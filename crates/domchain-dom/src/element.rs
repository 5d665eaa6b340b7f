//! Element wrapper.
//!
//! [`El`] owns a `web_sys::Element` handle and adds the chainable helpers of
//! [`Chainable`] and [`Evented`] on top of it. Cloning an `El` clones the
//! handle, not the element.
//!
//! ## Example
//!
//! ```ignore
//! use domchain_dom::{Chainable, El, div};
//!
//! let card = div()?;
//! card.add_class("card shadow")?
//!     .set_attr("data-id", "7")?
//!     .append("Hello")?;
//!
//! assert!(card.has_class("shadow"));
//! assert_eq!(card.text().as_deref(), Some("Hello"));
//! ```

use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::chainable::{Chainable, class_names};
use crate::content::Content;
use crate::error::{DomError, Result};
use crate::{Els, Evented};

/// A chainable handle to one DOM element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct El {
	inner: Element,
}

impl El {
	/// Wraps a native element.
	pub fn new(inner: Element) -> Self {
		Self { inner }
	}

	/// Returns the native element.
	pub fn inner(&self) -> &Element {
		&self.inner
	}

	/// Returns the native element, consuming the wrapper.
	pub fn into_inner(self) -> Element {
		self.inner
	}

	/// Returns the lower-cased tag name.
	pub fn tag_name(&self) -> String {
		self.inner.tag_name().to_lowercase()
	}

	/// Returns every descendant matching `selector`.
	pub fn find(&self, selector: &str) -> Result<Els> {
		let nodes = self
			.inner
			.query_selector_all(selector)
			.map_err(|err| DomError::selector(selector, err))?;
		Ok(Els::from_node_list(&nodes))
	}

	/// Returns the first descendant matching `selector`.
	pub fn find_one(&self, selector: &str) -> Result<Option<El>> {
		let found = self
			.inner
			.query_selector(selector)
			.map_err(|err| DomError::selector(selector, err))?;
		Ok(found.map(El::new))
	}

	/// Returns the closest ancestor (or self) matching `selector`.
	pub fn closest(&self, selector: &str) -> Result<Option<El>> {
		let found = self
			.inner
			.closest(selector)
			.map_err(|err| DomError::selector(selector, err))?;
		Ok(found.map(El::new))
	}

	/// Returns the parent element.
	pub fn parent(&self) -> Option<El> {
		self.inner.parent_element().map(El::new)
	}

	/// Returns the child elements (text nodes are skipped).
	pub fn children(&self) -> Els {
		Els::from_html_collection(&self.inner.children())
	}

	fn value_control(&self) -> ValueControl<'_> {
		if let Some(input) = self.inner.dyn_ref::<HtmlInputElement>() {
			ValueControl::Input(input)
		} else if let Some(select) = self.inner.dyn_ref::<HtmlSelectElement>() {
			ValueControl::Select(select)
		} else if let Some(textarea) = self.inner.dyn_ref::<HtmlTextAreaElement>() {
			ValueControl::TextArea(textarea)
		} else {
			ValueControl::Attribute
		}
	}
}

enum ValueControl<'a> {
	Input(&'a HtmlInputElement),
	Select(&'a HtmlSelectElement),
	TextArea(&'a HtmlTextAreaElement),
	Attribute,
}

impl Chainable for El {
	fn add_class(&self, names: &str) -> Result<&Self> {
		let list = self.inner.class_list();
		for name in class_names(names) {
			list.add_1(name)?;
		}
		Ok(self)
	}

	fn remove_class(&self, names: &str) -> Result<&Self> {
		let list = self.inner.class_list();
		for name in class_names(names) {
			list.remove_1(name)?;
		}
		Ok(self)
	}

	fn toggle_class(&self, names: &str) -> Result<&Self> {
		let list = self.inner.class_list();
		for name in class_names(names) {
			list.toggle(name)?;
		}
		Ok(self)
	}

	fn has_class(&self, name: &str) -> bool {
		self.inner.class_list().contains(name)
	}

	fn attr(&self, name: &str) -> Option<String> {
		self.inner.get_attribute(name)
	}

	fn set_attr(&self, name: &str, value: &str) -> Result<&Self> {
		self.inner.set_attribute(name, value)?;
		Ok(self)
	}

	fn remove_attr(&self, name: &str) -> Result<&Self> {
		self.inner.remove_attribute(name)?;
		Ok(self)
	}

	fn val(&self) -> Option<String> {
		match self.value_control() {
			ValueControl::Input(input) => Some(input.value()),
			ValueControl::Select(select) => Some(select.value()),
			ValueControl::TextArea(textarea) => Some(textarea.value()),
			ValueControl::Attribute => self.inner.get_attribute("value"),
		}
	}

	fn set_val(&self, value: &str) -> Result<&Self> {
		match self.value_control() {
			ValueControl::Input(input) => input.set_value(value),
			ValueControl::Select(select) => select.set_value(value),
			ValueControl::TextArea(textarea) => textarea.set_value(value),
			ValueControl::Attribute => self.inner.set_attribute("value", value)?,
		}
		Ok(self)
	}

	fn html(&self) -> Option<String> {
		Some(self.inner.inner_html())
	}

	fn set_html(&self, html: &str) -> &Self {
		self.inner.set_inner_html(html);
		self
	}

	fn text(&self) -> Option<String> {
		self.inner.text_content()
	}

	fn set_text(&self, text: &str) -> &Self {
		self.inner.set_text_content(Some(text));
		self
	}

	fn append(&self, content: impl Into<Content>) -> Result<&Self> {
		match content.into() {
			Content::Text(text) => self.inner.append_with_str_1(&text)?,
			Content::Node(node) => self.inner.append_with_node_1(&node)?,
		}
		Ok(self)
	}

	fn prepend(&self, content: impl Into<Content>) -> Result<&Self> {
		match content.into() {
			Content::Text(text) => self.inner.prepend_with_str_1(&text)?,
			Content::Node(node) => self.inner.prepend_with_node_1(&node)?,
		}
		Ok(self)
	}

	fn empty(&self) -> &Self {
		self.inner.set_text_content(None);
		self
	}

	fn remove(&self) -> &Self {
		self.inner.remove();
		self
	}
}

impl Evented for El {
	fn event_targets(&self) -> Vec<&EventTarget> {
		let target: &EventTarget = self.inner.as_ref();
		vec![target]
	}
}

impl From<Element> for El {
	fn from(inner: Element) -> Self {
		Self::new(inner)
	}
}

impl From<El> for Element {
	fn from(el: El) -> Self {
		el.into_inner()
	}
}

impl AsRef<Element> for El {
	fn as_ref(&self) -> &Element {
		&self.inner
	}
}
