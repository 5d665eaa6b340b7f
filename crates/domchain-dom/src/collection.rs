//! Collection wrapper.
//!
//! [`Els`] is an ordered list of [`El`] handles, usually the result of a
//! selector query. Setters broadcast to every member; getters read the first
//! member and return `None` on an empty collection.

use web_sys::{EventTarget, HtmlCollection, NodeList};
use wasm_bindgen::JsCast;

use crate::chainable::Chainable;
use crate::content::Content;
use crate::error::Result;
use crate::{El, Evented};

/// A chainable list of elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Els {
	items: Vec<El>,
}

impl Els {
	/// Creates a collection from already wrapped elements.
	pub fn new(items: Vec<El>) -> Self {
		Self { items }
	}

	/// Collects the element nodes of a `NodeList`, in document order.
	pub fn from_node_list(nodes: &NodeList) -> Self {
		(0..nodes.length())
			.filter_map(|index| nodes.item(index))
			.filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
			.map(El::new)
			.collect()
	}

	/// Collects the members of an `HTMLCollection`.
	pub fn from_html_collection(collection: &HtmlCollection) -> Self {
		(0..collection.length())
			.filter_map(|index| collection.item(index))
			.map(El::new)
			.collect()
	}

	/// Number of elements.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns true if the collection holds no element.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// The first element, if any.
	pub fn first(&self) -> Option<&El> {
		self.items.first()
	}

	/// The element at `index`, if any.
	pub fn get(&self, index: usize) -> Option<&El> {
		self.items.get(index)
	}

	/// Iterates over the elements.
	pub fn iter(&self) -> std::slice::Iter<'_, El> {
		self.items.iter()
	}

	/// Unwraps into the element list.
	pub fn into_vec(self) -> Vec<El> {
		self.items
	}

	/// Returns every descendant of any member matching `selector`.
	///
	/// An element reachable from several members is listed once.
	pub fn find(&self, selector: &str) -> Result<Els> {
		let mut found: Vec<El> = Vec::new();
		for item in &self.items {
			for el in item.find(selector)? {
				if !found.contains(&el) {
					found.push(el);
				}
			}
		}
		Ok(Self::new(found))
	}

	fn each(&self, mut f: impl FnMut(&El) -> Result<()>) -> Result<&Self> {
		for item in &self.items {
			f(item)?;
		}
		Ok(self)
	}
}

impl Chainable for Els {
	fn add_class(&self, names: &str) -> Result<&Self> {
		self.each(|el| el.add_class(names).map(|_| ()))
	}

	fn remove_class(&self, names: &str) -> Result<&Self> {
		self.each(|el| el.remove_class(names).map(|_| ()))
	}

	fn toggle_class(&self, names: &str) -> Result<&Self> {
		self.each(|el| el.toggle_class(names).map(|_| ()))
	}

	fn has_class(&self, name: &str) -> bool {
		self.first().is_some_and(|el| el.has_class(name))
	}

	fn attr(&self, name: &str) -> Option<String> {
		self.first().and_then(|el| el.attr(name))
	}

	fn set_attr(&self, name: &str, value: &str) -> Result<&Self> {
		self.each(|el| el.set_attr(name, value).map(|_| ()))
	}

	fn remove_attr(&self, name: &str) -> Result<&Self> {
		self.each(|el| el.remove_attr(name).map(|_| ()))
	}

	fn val(&self) -> Option<String> {
		self.first().and_then(Chainable::val)
	}

	fn set_val(&self, value: &str) -> Result<&Self> {
		self.each(|el| el.set_val(value).map(|_| ()))
	}

	fn html(&self) -> Option<String> {
		self.first().and_then(Chainable::html)
	}

	fn set_html(&self, html: &str) -> &Self {
		for item in &self.items {
			item.set_html(html);
		}
		self
	}

	fn text(&self) -> Option<String> {
		self.first().and_then(Chainable::text)
	}

	fn set_text(&self, text: &str) -> &Self {
		for item in &self.items {
			item.set_text(text);
		}
		self
	}

	// A node can only live in one place: every member but the last receives
	// a deep clone, the last one receives the node itself.
	fn append(&self, content: impl Into<Content>) -> Result<&Self> {
		let content = content.into();
		let last = self.items.len().saturating_sub(1);
		for (index, item) in self.items.iter().enumerate() {
			item.append(content_for(&content, index == last)?)?;
		}
		Ok(self)
	}

	fn prepend(&self, content: impl Into<Content>) -> Result<&Self> {
		let content = content.into();
		let last = self.items.len().saturating_sub(1);
		for (index, item) in self.items.iter().enumerate() {
			item.prepend(content_for(&content, index == last)?)?;
		}
		Ok(self)
	}

	fn empty(&self) -> &Self {
		for item in &self.items {
			item.empty();
		}
		self
	}

	fn remove(&self) -> &Self {
		for item in &self.items {
			item.remove();
		}
		self
	}
}

fn content_for(content: &Content, is_last: bool) -> Result<Content> {
	match content {
		Content::Node(node) if !is_last => Ok(Content::Node(node.clone_node_with_deep(true)?)),
		other => Ok(other.clone()),
	}
}

impl Evented for Els {
	fn event_targets(&self) -> Vec<&EventTarget> {
		self.items
			.iter()
			.map(|el| -> &EventTarget { el.inner().as_ref() })
			.collect()
	}
}

impl From<Vec<El>> for Els {
	fn from(items: Vec<El>) -> Self {
		Self::new(items)
	}
}

impl From<El> for Els {
	fn from(el: El) -> Self {
		Self::new(vec![el])
	}
}

impl FromIterator<El> for Els {
	fn from_iter<I: IntoIterator<Item = El>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}

impl IntoIterator for Els {
	type Item = El;
	type IntoIter = std::vec::IntoIter<El>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.into_iter()
	}
}

impl<'a> IntoIterator for &'a Els {
	type Item = &'a El;
	type IntoIter = std::slice::Iter<'a, El>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}
