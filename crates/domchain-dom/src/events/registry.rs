//! Per-host event registry.
//!
//! An [`EventRegistry`] remembers which handlers were bound to which event
//! names on one host object, together with the native subscription created
//! for each of them. This lets callers unbind by event name, or unbind
//! everything, without holding on to the handlers themselves.
//!
//! Handlers are recorded by [`HandlerKey`] only. The registry never owns a
//! handler, so whatever the subscription keeps alive is decided by the host:
//! the browser host stores its registry on the JS object it belongs to and
//! rebuilds it per operation (see [`listener`](super::listener)).
//!
//! The registry is generic over a [`ListenerHost`], the seam to the native
//! listener mechanism. Tests drive it with an in-memory host.

use std::collections::HashMap;
use std::marker::PhantomData;

use crate::Callback;

/// Identity of a handler, equal for every clone of one [`Callback`].
pub type HandlerKey = usize;

/// Native listener mechanism a registry subscribes handlers to.
pub trait ListenerHost<Args> {
	/// Token kept per registration, needed to unsubscribe later.
	type Subscription;
	/// Error raised when the host refuses a subscription.
	type Error;

	/// Attaches `handler` to `action` on the host.
	fn subscribe(
		&self,
		action: &str,
		handler: &Callback<Args>,
	) -> Result<Self::Subscription, Self::Error>;

	/// Detaches a subscription previously returned by [`subscribe`](Self::subscribe).
	fn unsubscribe(&self, action: &str, subscription: Self::Subscription);
}

struct Registration<S> {
	key: HandlerKey,
	subscription: S,
}

/// Event name to handler bookkeeping for a single host object.
///
/// Every recorded handler is attached natively; every removal through the
/// registry detaches natively and drops the record.
pub struct EventRegistry<Args, S> {
	actions: HashMap<String, Vec<Registration<S>>>,
	_args: PhantomData<fn(Args)>,
}

impl<Args, S> Default for EventRegistry<Args, S> {
	fn default() -> Self {
		Self {
			actions: HashMap::new(),
			_args: PhantomData,
		}
	}
}

impl<Args, S> std::fmt::Debug for EventRegistry<Args, S> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let counts: HashMap<&str, usize> = self
			.actions
			.iter()
			.map(|(action, list)| (action.as_str(), list.len()))
			.collect();
		f.debug_struct("EventRegistry")
			.field("actions", &counts)
			.finish()
	}
}

impl<Args, S> EventRegistry<Args, S> {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Rebuilds a registry from `(action, key, subscription)` records, as
	/// produced by [`into_entries`](Self::into_entries). Records keep their
	/// order within an action.
	pub fn from_entries<I>(entries: I) -> Self
	where
		I: IntoIterator<Item = (String, HandlerKey, S)>,
	{
		let mut registry = Self::new();
		for (action, key, subscription) in entries {
			registry
				.actions
				.entry(action)
				.or_default()
				.push(Registration { key, subscription });
		}
		registry
	}

	/// Consumes the registry into `(action, key, subscription)` records.
	pub fn into_entries(self) -> impl Iterator<Item = (String, HandlerKey, S)> {
		self.actions.into_iter().flat_map(|(action, list)| {
			list.into_iter().map(move |registration| {
				(action.clone(), registration.key, registration.subscription)
			})
		})
	}

	/// Binds `handler` to every whitespace-separated name in `actions`.
	///
	/// The same handler bound twice is recorded (and fires) twice.
	///
	/// # Errors
	///
	/// Stops at the first name the host refuses; names bound before the
	/// failure stay bound and recorded.
	pub fn register<H>(
		&mut self,
		host: &H,
		actions: &str,
		handler: &Callback<Args>,
	) -> Result<usize, H::Error>
	where
		H: ListenerHost<Args, Subscription = S>,
	{
		let mut bound = 0;
		for action in actions.split_whitespace() {
			let subscription = host.subscribe(action, handler)?;
			self.actions
				.entry(action.to_string())
				.or_default()
				.push(Registration {
					key: handler.key(),
					subscription,
				});
			bound += 1;
		}
		Ok(bound)
	}

	/// Unbinds according to which arguments are given:
	///
	/// | `action` | `handler` | Effect |
	/// |----------|-----------|--------|
	/// | some | some | that handler, for those names |
	/// | some | none | every handler for those names |
	/// | none | some | that handler, for every name |
	/// | none | none | everything |
	///
	/// `action` may list several whitespace-separated names; a blank `action`
	/// counts as none. Returns the number of native subscriptions removed;
	/// unknown names remove nothing.
	pub fn unbind<H>(
		&mut self,
		host: &H,
		action: Option<&str>,
		handler: Option<&Callback<Args>>,
	) -> usize
	where
		H: ListenerHost<Args, Subscription = S>,
	{
		let action = action.filter(|actions| !actions.trim().is_empty());
		match (action, handler) {
			(Some(actions), Some(handler)) => actions
				.split_whitespace()
				.map(|action| self.unbind_handler(host, action, handler))
				.sum(),
			(Some(actions), None) => actions
				.split_whitespace()
				.map(|action| self.unbind_action(host, action))
				.sum(),
			(None, Some(handler)) => self.unbind_handler_everywhere(host, handler),
			(None, None) => self.unbind_all(host),
		}
	}

	/// Removes every registration of `handler` under `action`.
	pub fn unbind_handler<H>(&mut self, host: &H, action: &str, handler: &Callback<Args>) -> usize
	where
		H: ListenerHost<Args, Subscription = S>,
	{
		let Some(list) = self.actions.get_mut(action) else {
			return 0;
		};

		let key = handler.key();
		let (removed, kept): (Vec<_>, Vec<_>) = list
			.drain(..)
			.partition(|registration| registration.key == key);
		*list = kept;
		if list.is_empty() {
			self.actions.remove(action);
		}

		let count = removed.len();
		for registration in removed {
			host.unsubscribe(action, registration.subscription);
		}
		count
	}

	/// Removes every handler recorded for `action`.
	pub fn unbind_action<H>(&mut self, host: &H, action: &str) -> usize
	where
		H: ListenerHost<Args, Subscription = S>,
	{
		let Some(list) = self.actions.remove(action) else {
			return 0;
		};

		let count = list.len();
		for registration in list {
			host.unsubscribe(action, registration.subscription);
		}
		count
	}

	/// Removes `handler` from every recorded action.
	pub fn unbind_handler_everywhere<H>(&mut self, host: &H, handler: &Callback<Args>) -> usize
	where
		H: ListenerHost<Args, Subscription = S>,
	{
		let actions: Vec<String> = self.actions.keys().cloned().collect();
		actions
			.iter()
			.map(|action| self.unbind_handler(host, action, handler))
			.sum()
	}

	/// Removes every recorded handler and resets the registry.
	pub fn unbind_all<H>(&mut self, host: &H) -> usize
	where
		H: ListenerHost<Args, Subscription = S>,
	{
		let mut count = 0;
		for (action, list) in self.actions.drain() {
			count += list.len();
			for registration in list {
				host.unsubscribe(&action, registration.subscription);
			}
		}
		count
	}

	/// Returns the number of handlers recorded for `action`.
	pub fn handler_count(&self, action: &str) -> usize {
		self.actions.get(action).map_or(0, Vec::len)
	}

	/// Returns true when `handler` is recorded for `action`.
	pub fn contains(&self, action: &str, handler: &Callback<Args>) -> bool {
		let key = handler.key();
		self.actions
			.get(action)
			.is_some_and(|list| list.iter().any(|r| r.key == key))
	}

	/// Iterates over the names that currently have handlers.
	pub fn actions(&self) -> impl Iterator<Item = &str> {
		self.actions.keys().map(String::as_str)
	}

	/// Returns the number of names that currently have handlers.
	pub fn len(&self) -> usize {
		self.actions.len()
	}

	/// Returns true if no handlers are recorded.
	pub fn is_empty(&self) -> bool {
		self.actions.is_empty()
	}
}
