//! Event registration, unbinding and dispatch.
//!
//! Every wrapper that implements [`Evented`] can bind handlers by event
//! name, remove them by name (or all at once), and fire custom events:
//!
//! ```ignore
//! use domchain_dom::{Callback, Evented, EventInit, query};
//!
//! let button = query("#save")?.expect("button exists");
//! button.on("click keyup", &Callback::new(|_| save()))?;
//! button.trigger("click", None, EventInit::default())?;
//!
//! // No handler references needed to clean up
//! button.off(Some("click"), None);
//! ```

pub mod listener;
pub mod registry;

use serde_json::Value;
use web_sys::EventTarget;

pub use listener::{Listener, bind, dispatch, handler_count, has_registry, unbind};
pub use registry::{EventRegistry, HandlerKey, ListenerHost};

use crate::Handler;
use crate::error::Result;

/// Flags for synthesized events.
///
/// `None` leaves the platform default in place (all three default to `false`
/// in browsers).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventInit {
	/// Whether the event bubbles.
	pub bubbles: Option<bool>,
	/// Whether the event can be cancelled.
	pub cancelable: Option<bool>,
	/// Whether the event crosses shadow DOM boundaries.
	pub composed: Option<bool>,
}

impl EventInit {
	/// Creates an init with every flag left at the platform default.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the bubbles flag.
	pub fn bubbles(mut self, bubbles: bool) -> Self {
		self.bubbles = Some(bubbles);
		self
	}

	/// Sets the cancelable flag.
	pub fn cancelable(mut self, cancelable: bool) -> Self {
		self.cancelable = Some(cancelable);
		self
	}

	/// Sets the composed flag.
	pub fn composed(mut self, composed: bool) -> Self {
		self.composed = Some(composed);
		self
	}
}

/// Event operations shared by elements, collections, the document and the window.
///
/// Implementors only list their native targets; collections list every member,
/// so each operation is broadcast.
pub trait Evented {
	/// The native targets this wrapper stands for.
	fn event_targets(&self) -> Vec<&EventTarget>;

	/// Binds `handler` to each whitespace-separated name in `actions`.
	fn on(&self, actions: &str, handler: &Handler) -> Result<&Self> {
		for target in self.event_targets() {
			bind(target, actions, handler)?;
		}
		Ok(self)
	}

	/// Unbinds handlers.
	///
	/// - `off(Some(action), Some(&handler))` removes that handler for that action
	/// - `off(Some(action), None)` removes every handler for that action
	/// - `off(None, Some(&handler))` removes that handler everywhere
	/// - `off(None, None)` removes everything bound through this crate
	///
	/// A blank `action` (empty or only whitespace) is treated as `None`.
	fn off(&self, action: Option<&str>, handler: Option<&Handler>) -> &Self {
		for target in self.event_targets() {
			unbind(target, action, handler);
		}
		self
	}

	/// Fires a custom event named `action` carrying `detail`.
	fn trigger(&self, action: &str, detail: Option<&Value>, init: EventInit) -> Result<&Self> {
		for target in self.event_targets() {
			dispatch(target, action, detail, &init)?;
		}
		Ok(self)
	}

	/// Returns how many handlers are bound to `action` across all targets.
	fn handler_count(&self, action: &str) -> usize {
		self.event_targets()
			.into_iter()
			.map(|target| handler_count(target, action))
			.sum()
	}
}
