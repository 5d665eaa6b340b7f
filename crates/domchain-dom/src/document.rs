//! Document wrapper.

use web_sys::{Document, EventTarget};

use crate::error::{DomError, Result};
use crate::{Callback, El, Els, Evented, Win};

/// A chainable handle to a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doc {
	inner: Document,
}

impl Doc {
	/// Returns the current window's document.
	pub fn global() -> Result<Self> {
		Win::global()?.document()
	}

	/// Wraps a native document.
	pub fn new(inner: Document) -> Self {
		Self { inner }
	}

	/// Returns the native document.
	pub fn inner(&self) -> &Document {
		&self.inner
	}

	/// Returns the `<body>` element, if the document has one.
	pub fn body(&self) -> Option<El> {
		self.inner.body().map(|body| El::new(body.into()))
	}

	/// Returns every element matching `selector`.
	pub fn find(&self, selector: &str) -> Result<Els> {
		let nodes = self
			.inner
			.query_selector_all(selector)
			.map_err(|err| DomError::selector(selector, err))?;
		Ok(Els::from_node_list(&nodes))
	}

	/// Returns the first element matching `selector`.
	pub fn find_one(&self, selector: &str) -> Result<Option<El>> {
		let found = self
			.inner
			.query_selector(selector)
			.map_err(|err| DomError::selector(selector, err))?;
		Ok(found.map(El::new))
	}

	/// Creates a detached element owned by this document.
	pub fn create(&self, tag: &str) -> Result<El> {
		self.inner
			.create_element(tag)
			.map(El::new)
			.map_err(|err| DomError::create(tag, err))
	}

	/// Runs `callback` once the document has been parsed.
	///
	/// Runs it right away when parsing is already done; otherwise binds it to
	/// `DOMContentLoaded` through the event registry, so `off` can cancel it.
	pub fn ready(&self, callback: Callback<()>) -> Result<&Self> {
		if self.inner.ready_state() != "loading" {
			callback.call(());
			return Ok(self);
		}
		self.on(
			"DOMContentLoaded",
			&Callback::new(move |_event: web_sys::Event| callback.call(())),
		)
	}
}

impl Evented for Doc {
	fn event_targets(&self) -> Vec<&EventTarget> {
		let target: &EventTarget = self.inner.as_ref();
		vec![target]
	}
}

impl From<Document> for Doc {
	fn from(inner: Document) -> Self {
		Self::new(inner)
	}
}

impl AsRef<Document> for Doc {
	fn as_ref(&self) -> &Document {
		&self.inner
	}
}
