//! Event Registry WASM Tests
//!
//! Browser tests for `on` / `off` / `trigger` through the event registry.
//!
//! **Run with**: `wasm-pack test --headless --firefox crates/domchain-dom`

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use domchain_dom::events::has_registry;
use domchain_dom::{Callback, Chainable, Doc, El, Els, EventInit, Evented, Handler, Win, div};
use serde_json::json;

fn counter() -> (Rc<RefCell<Vec<String>>>, impl Fn(&str) -> Handler) {
	let log = Rc::new(RefCell::new(Vec::new()));
	let make = {
		let log = Rc::clone(&log);
		move |label: &str| {
			let log = Rc::clone(&log);
			let label = label.to_string();
			Callback::new(move |_event: web_sys::Event| log.borrow_mut().push(label.clone()))
		}
	};
	(log, make)
}

fn fire(el: &El, action: &str) {
	el.trigger(action, None, EventInit::default()).unwrap();
}

// ============================================================================
// Registration Tests
// ============================================================================

/// A bound handler fires on trigger
#[wasm_bindgen_test]
fn test_on_then_trigger_fires() {
	let (log, handler) = counter();
	let el = div().unwrap();

	el.on("click", &handler("a")).unwrap();
	fire(&el, "click");

	assert_eq!(*log.borrow(), vec!["a"]);
	assert_eq!(el.handler_count("click"), 1);
}

/// Whitespace-separated names bind each one
#[wasm_bindgen_test]
fn test_on_multiple_actions() {
	let (log, handler) = counter();
	let el = div().unwrap();

	el.on("focus  custom:ping", &handler("h")).unwrap();
	fire(&el, "focus");
	fire(&el, "custom:ping");

	assert_eq!(log.borrow().len(), 2);
}

/// The same handler registered twice fires twice
#[wasm_bindgen_test]
fn test_duplicate_registration_fires_twice() {
	let (log, handler) = counter();
	let el = div().unwrap();
	let h = handler("dup");

	el.on("click", &h).unwrap().on("click", &h).unwrap();
	fire(&el, "click");

	assert_eq!(log.borrow().len(), 2);
}

// ============================================================================
// Unbind Tests
// ============================================================================

/// Unbinding by name removes every handler for it
#[wasm_bindgen_test]
fn test_unbind_by_action_removes_all() {
	let (log, handler) = counter();
	let el = div().unwrap();

	el.on("click", &handler("a"))
		.unwrap()
		.on("click", &handler("b"))
		.unwrap()
		.on("click", &handler("c"))
		.unwrap();
	el.off(Some("click"), None);
	fire(&el, "click");

	assert!(log.borrow().is_empty());
	assert_eq!(el.handler_count("click"), 0);
}

/// Unbinding everything removes every name
#[wasm_bindgen_test]
fn test_unbind_all_removes_every_action() {
	let (log, handler) = counter();
	let el = div().unwrap();

	el.on("click", &handler("a")).unwrap();
	el.on("keyup", &handler("b")).unwrap();
	el.off(None, None);
	fire(&el, "click");
	fire(&el, "keyup");

	assert!(log.borrow().is_empty());
}

/// Unbinding one handler keeps the others
#[wasm_bindgen_test]
fn test_unbind_single_handler() {
	let (log, handler) = counter();
	let el = div().unwrap();
	let keep = handler("keep");
	let drop = handler("drop");

	el.on("click", &keep).unwrap().on("click", &drop).unwrap();
	el.off(Some("click"), Some(&drop));
	fire(&el, "click");

	assert_eq!(*log.borrow(), vec!["keep"]);
	assert_eq!(el.handler_count("click"), 1);
}

/// Unbinding a handler without a name removes it from every name
#[wasm_bindgen_test]
fn test_unbind_handler_everywhere() {
	let (log, handler) = counter();
	let el = div().unwrap();
	let h = handler("h");

	el.on("click keyup", &h).unwrap();
	el.off(None, Some(&h));
	fire(&el, "click");
	fire(&el, "keyup");

	assert!(log.borrow().is_empty());
}

/// Unbinding where nothing was bound is a no-op, and so is a second unbind
#[wasm_bindgen_test]
fn test_unbind_is_idempotent() {
	let el = div().unwrap();
	el.off(Some("click"), None).off(None, None);

	let (log, handler) = counter();
	el.on("click", &handler("a")).unwrap();
	el.off(Some("click"), None).off(Some("click"), None);
	fire(&el, "click");
	assert!(log.borrow().is_empty());
}

/// Two wrappers around the same node share one registry
#[wasm_bindgen_test]
fn test_registry_is_shared_per_node() {
	let (log, handler) = counter();
	let el = div().unwrap();
	let same = El::new(el.inner().clone());

	el.on("click", &handler("a")).unwrap();
	same.off(Some("click"), None);
	fire(&el, "click");

	assert!(log.borrow().is_empty());
}

/// Registry records travel with the node, not with the wrapper
#[wasm_bindgen_test]
fn test_registry_is_stored_on_the_node() {
	let (log, handler) = counter();
	let node: web_sys::Element = {
		let el = div().unwrap();
		el.on("click", &handler("a")).unwrap();
		el.into_inner()
	};
	assert!(has_registry(&node));

	let again = El::new(node);
	assert_eq!(again.handler_count("click"), 1);
	again.off(None, None);
	fire(&again, "click");

	assert!(!has_registry(again.inner()));
	assert!(log.borrow().is_empty());
}

/// A node that never had a handler carries no registry
#[wasm_bindgen_test]
fn test_untouched_node_has_no_registry() {
	let el = div().unwrap();
	el.off(None, None);
	assert!(!has_registry(el.inner()));
}

/// A blank action name unbinds like no name at all
#[wasm_bindgen_test]
fn test_blank_action_unbinds_everything() {
	let (log, handler) = counter();
	let el = div().unwrap();

	el.on("click focus", &handler("a")).unwrap();
	el.off(Some("  "), None);
	fire(&el, "click");
	fire(&el, "focus");

	assert!(log.borrow().is_empty());
	assert_eq!(el.handler_count("click"), 0);
}

// ============================================================================
// Dispatch Tests
// ============================================================================

/// Trigger carries the detail and the requested flags
#[wasm_bindgen_test]
fn test_trigger_detail_and_flags() {
	let seen = Rc::new(RefCell::new(None));
	let el = div().unwrap();
	el.on(
		"saved",
		&Callback::new({
			let seen = Rc::clone(&seen);
			move |event: web_sys::Event| {
				let event: web_sys::CustomEvent = event.unchecked_into();
				let id = js_sys::Reflect::get(&event.detail(), &"id".into())
					.ok()
					.and_then(|v| v.as_f64());
				*seen.borrow_mut() = Some((id, event.bubbles(), event.cancelable()));
			}
		}),
	)
	.unwrap();

	el.trigger(
		"saved",
		Some(&json!({"id": 5})),
		EventInit::new().bubbles(true).cancelable(true),
	)
	.unwrap();

	assert_eq!(*seen.borrow(), Some((Some(5.0), true, true)));
}

/// Detail defaults to an empty object
#[wasm_bindgen_test]
fn test_trigger_default_detail_is_object() {
	let is_object = Rc::new(RefCell::new(false));
	let el = div().unwrap();
	el.on(
		"ping",
		&Callback::new({
			let is_object = Rc::clone(&is_object);
			move |event: web_sys::Event| {
				let event: web_sys::CustomEvent = event.unchecked_into();
				*is_object.borrow_mut() = event.detail().is_object();
			}
		}),
	)
	.unwrap();

	fire(&el, "ping");
	assert!(*is_object.borrow());
}

/// Bubbling events reach handlers on ancestors
#[wasm_bindgen_test]
fn test_bubbling_reaches_parent() {
	let (log, handler) = counter();
	let parent = div().unwrap();
	let child = div().unwrap();
	parent.append(&child).unwrap();

	parent.on("custom", &handler("parent")).unwrap();
	child
		.trigger("custom", None, EventInit::new().bubbles(true))
		.unwrap();
	child.trigger("custom", None, EventInit::default()).unwrap();

	assert_eq!(*log.borrow(), vec!["parent"]);
}

// ============================================================================
// Collection, Document and Window Tests
// ============================================================================

/// Collections bind and unbind on every member
#[wasm_bindgen_test]
fn test_collection_events_broadcast() {
	let (log, handler) = counter();
	let els = Els::new(vec![div().unwrap(), div().unwrap()]);

	els.on("click", &handler("x")).unwrap();
	assert_eq!(els.handler_count("click"), 2);
	els.trigger("click", None, EventInit::default()).unwrap();
	assert_eq!(log.borrow().len(), 2);

	els.off(None, None);
	els.trigger("click", None, EventInit::default()).unwrap();
	assert_eq!(log.borrow().len(), 2);
}

/// Document and window take part in the registry
#[wasm_bindgen_test]
fn test_document_and_window_events() {
	let (log, handler) = counter();
	let doc = Doc::global().unwrap();
	let win = Win::global().unwrap();

	doc.on("app:doc", &handler("doc")).unwrap();
	win.on("app:win", &handler("win")).unwrap();
	doc.trigger("app:doc", None, EventInit::default()).unwrap();
	win.trigger("app:win", None, EventInit::default()).unwrap();
	doc.off(Some("app:doc"), None);
	win.off(Some("app:win"), None);
	doc.trigger("app:doc", None, EventInit::default()).unwrap();

	assert_eq!(*log.borrow(), vec!["doc", "win"]);
}

/// ready runs at once when the document is already parsed
#[wasm_bindgen_test]
fn test_ready_runs_immediately_after_load() {
	let ran = Rc::new(RefCell::new(false));
	Doc::global()
		.unwrap()
		.ready(Callback::new({
			let ran = Rc::clone(&ran);
			move |()| *ran.borrow_mut() = true
		}))
		.unwrap();
	assert!(*ran.borrow());
}

/// A handler may unbind itself while running
#[wasm_bindgen_test]
fn test_handler_can_unbind_itself() {
	let count = Rc::new(RefCell::new(0));
	let el = div().unwrap();
	let target = el.clone();
	el.on(
		"once",
		&Callback::new({
			let count = Rc::clone(&count);
			move |_event: web_sys::Event| {
				*count.borrow_mut() += 1;
				target.off(Some("once"), None);
			}
		}),
	)
	.unwrap();

	fire(&el, "once");
	fire(&el, "once");
	assert_eq!(*count.borrow(), 1);
	assert_eq!(el.handler_count("once"), 0);
}
