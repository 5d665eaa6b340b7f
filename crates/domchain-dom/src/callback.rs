//! Callback wrapper used for event handlers and request completion.
//!
//! [`Callback`] wraps a closure in an `Rc`, so clones share the same closure
//! and compare equal under [`Callback::ptr_eq`]. That identity is what lets
//! the event registry remove a specific handler later without the caller
//! keeping any native listener reference around.
//!
//! ## Example
//!
//! ```
//! use domchain_dom::Callback;
//!
//! let on_click = Callback::new(|count: u32| count + 1);
//! let same = on_click.clone();
//!
//! assert_eq!(on_click.call(1), 2);
//! assert!(on_click.ptr_eq(&same));
//! ```

use std::rc::Rc;

/// A cloneable, identity-comparable callback.
///
/// ## Type Parameters
///
/// - `Args`: the argument the callback receives (defaults to `web_sys::Event`)
/// - `Ret`: the return type (defaults to `()`)
pub struct Callback<Args = web_sys::Event, Ret = ()> {
	inner: Rc<dyn Fn(Args) -> Ret + 'static>,
}

/// Event handler callback as accepted by [`Evented::on`](crate::Evented::on).
pub type Handler = Callback<web_sys::Event>;

impl<Args, Ret> Callback<Args, Ret> {
	/// Creates a new Callback from a function or closure.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + 'static,
	{
		Self { inner: Rc::new(f) }
	}

	/// Calls the callback with the given arguments.
	pub fn call(&self, args: Args) -> Ret {
		(self.inner)(args)
	}

	/// Returns true when both callbacks wrap the same closure allocation.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		std::ptr::addr_eq(Rc::as_ptr(&self.inner), Rc::as_ptr(&other.inner))
	}

	/// Returns the identity [`ptr_eq`](Self::ptr_eq) compares, as a number.
	///
	/// Stays unique while any clone of this callback is alive.
	pub fn key(&self) -> usize {
		Rc::as_ptr(&self.inner).cast::<()>() as usize
	}
}

impl<Args, Ret> Clone for Callback<Args, Ret> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<Args, Ret> std::fmt::Debug for Callback<Args, Ret> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Callback")
			.field("inner", &"<function>")
			.finish()
	}
}
