//! Browser side of the event registry.
//!
//! A host object's registry is stored on the JS object itself, under a hidden
//! property holding an array of `[action, key, function]` records. Every
//! operation rebuilds an [`EventRegistry`] from those records, applies the
//! change and writes the records back, so every wrapper around the same
//! native object shares one registry and nothing outlives the host on the
//! Rust side.
//!
//! Listener functions are handed to JS with `Closure::into_js_value`. The
//! host's records and its native listeners are their only owners, so they are
//! collected together with the host.
//!
//! A host's registry is created on its first binding and removed again once
//! an unbind leaves it empty.

use js_sys::{Array, Function, Object, Reflect};
use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{CustomEvent, CustomEventInit, Event, EventTarget};

use super::EventInit;
use super::registry::{EventRegistry, HandlerKey, ListenerHost};
use crate::error::{DomError, Result};
use crate::{Callback, Handler, debug_log, error_log};

/// Hidden property holding a host object's registry records.
const REGISTRY_KEY: &str = "__domchainEvents";

type BrowserRegistry = EventRegistry<Event, Listener>;

/// A native listener subscription.
///
/// Wraps the JS function handed to `addEventListener`. The function owns the
/// Rust closure, which is freed once the function is garbage collected.
#[derive(Debug, Clone)]
pub struct Listener {
	function: Function,
}

impl ListenerHost<Event> for EventTarget {
	type Subscription = Listener;
	type Error = DomError;

	fn subscribe(&self, action: &str, handler: &Callback<Event>) -> Result<Listener> {
		let handler = handler.clone();
		let function: Function =
			Closure::<dyn FnMut(Event)>::new(move |event: Event| handler.call(event))
				.into_js_value()
				.unchecked_into();
		self.add_event_listener_with_callback(action, &function)?;
		Ok(Listener { function })
	}

	fn unsubscribe(&self, action: &str, subscription: Listener) {
		// Removing an unknown listener is not an error in the DOM.
		let _ = self.remove_event_listener_with_callback(action, &subscription.function);
	}
}

fn registry_key() -> JsValue {
	JsValue::from_str(REGISTRY_KEY)
}

/// Returns true when `target` carries registry records.
pub fn has_registry(target: &EventTarget) -> bool {
	Reflect::has(target, &registry_key()).unwrap_or(false)
}

fn load(target: &EventTarget) -> Option<BrowserRegistry> {
	let stored = Reflect::get(target, &registry_key()).ok()?;
	let records = stored.dyn_ref::<Array>()?;
	let entries = records.iter().filter_map(|record| {
		let record = record.dyn_into::<Array>().ok()?;
		let action = record.get(0).as_string()?;
		let key = record.get(1).as_f64()? as HandlerKey;
		let function = record.get(2).dyn_into::<Function>().ok()?;
		Some((action, key, Listener { function }))
	});
	Some(BrowserRegistry::from_entries(entries))
}

fn store(target: &EventTarget, registry: BrowserRegistry) -> Result<()> {
	if registry.is_empty() {
		let object: &Object = target.as_ref();
		Reflect::delete_property(object, &registry_key())?;
		return Ok(());
	}

	let records = Array::new();
	for (action, key, listener) in registry.into_entries() {
		records.push(&Array::of3(
			&JsValue::from_str(&action),
			&JsValue::from_f64(key as f64),
			&listener.function,
		));
	}
	Reflect::set(target, &registry_key(), &records)?;
	Ok(())
}

/// Binds `handler` to each whitespace-separated name in `actions` on `target`.
///
/// Returns the number of names bound.
pub fn bind(target: &EventTarget, actions: &str, handler: &Handler) -> Result<usize> {
	let mut registry = load(target).unwrap_or_default();
	let bound = registry.register(target, actions, handler);
	store(target, registry)?;
	let bound = bound?;
	debug_log!("bound {} listener(s) for '{}'", bound, actions);
	Ok(bound)
}

/// Unbinds handlers from `target`; see [`EventRegistry::unbind`] for how the
/// optional arguments select what is removed.
///
/// Returns the number of native listeners removed. Hosts that never had a
/// handler bound are left untouched.
pub fn unbind(target: &EventTarget, action: Option<&str>, handler: Option<&Handler>) -> usize {
	let Some(mut registry) = load(target) else {
		return 0;
	};

	let removed = registry.unbind(target, action, handler);
	if let Err(err) = store(target, registry) {
		error_log!("could not store event registry: {}", err);
	}
	debug_log!("removed {} listener(s)", removed);
	removed
}

/// Returns how many handlers are recorded for `action` on `target`.
pub fn handler_count(target: &EventTarget, action: &str) -> usize {
	load(target).map_or(0, |registry| registry.handler_count(action))
}

/// Fires a `CustomEvent` named `action` at `target`.
///
/// `detail` defaults to an empty object. Returns `false` when a handler
/// cancelled the event.
pub fn dispatch(
	target: &EventTarget,
	action: &str,
	detail: Option<&Value>,
	init: &EventInit,
) -> Result<bool> {
	let event = custom_event(action, detail, init)?;
	Ok(target.dispatch_event(&event)?)
}

fn custom_event(action: &str, detail: Option<&Value>, init: &EventInit) -> Result<CustomEvent> {
	let event_init = CustomEventInit::new();
	event_init.set_detail(&detail_to_js(detail)?);
	if let Some(bubbles) = init.bubbles {
		event_init.set_bubbles(bubbles);
	}
	if let Some(cancelable) = init.cancelable {
		event_init.set_cancelable(cancelable);
	}
	if let Some(composed) = init.composed {
		event_init.set_composed(composed);
	}
	Ok(CustomEvent::new_with_event_init_dict(action, &event_init)?)
}

fn detail_to_js(detail: Option<&Value>) -> Result<JsValue> {
	match detail {
		None => Ok(js_sys::Object::new().into()),
		Some(value) => js_sys::JSON::parse(&value.to_string()).map_err(DomError::from),
	}
}
