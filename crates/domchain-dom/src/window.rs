//! Window wrapper.

use web_sys::{EventTarget, Window};

use crate::error::{DomError, Result};
use crate::{Doc, Evented};

/// A chainable handle to a browser window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Win {
	inner: Window,
}

impl Win {
	/// Returns the global window.
	///
	/// # Errors
	///
	/// Returns [`DomError::NoWindow`] outside a browser context (workers,
	/// native targets).
	pub fn global() -> Result<Self> {
		web_sys::window().map(Self::new).ok_or(DomError::NoWindow)
	}

	/// Wraps a native window.
	pub fn new(inner: Window) -> Self {
		Self { inner }
	}

	/// Returns the native window.
	pub fn inner(&self) -> &Window {
		&self.inner
	}

	/// Returns the window's document.
	pub fn document(&self) -> Result<Doc> {
		self.inner.document().map(Doc::new).ok_or(DomError::NoDocument)
	}
}

impl Evented for Win {
	fn event_targets(&self) -> Vec<&EventTarget> {
		let target: &EventTarget = self.inner.as_ref();
		vec![target]
	}
}

impl From<Window> for Win {
	fn from(inner: Window) -> Self {
		Self::new(inner)
	}
}
