//! Factory WASM Tests
//!
//! Browser tests for `dom`, `create`, `query`, `query_all` and the tag
//! shorthands.
//!
//! **Run with**: `wasm-pack test --headless --firefox crates/domchain-dom`

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use domchain_dom::{
	Chainable, Doc, DomError, El, Resolved, create, div, dom, h2, option, query, query_all,
};

fn mounted(id: &str, html: &str) -> El {
	let root = div().unwrap();
	root.set_attr("id", id).unwrap().set_html(html);
	Doc::global()
		.unwrap()
		.body()
		.unwrap()
		.append(&root)
		.unwrap();
	root
}

/// An id selector with one match resolves to that element
#[wasm_bindgen_test]
fn test_id_selector_resolves_one() {
	let root = mounted("factory-one", "<span>x</span>");

	let resolved = dom("#factory-one", None).unwrap();
	assert_eq!(resolved, Resolved::One(root.clone()));
	root.remove();
}

/// A class selector with several matches resolves to a collection
#[wasm_bindgen_test]
fn test_class_selector_resolves_many() {
	let root = mounted(
		"factory-many",
		r#"<i class="factory-item"></i><i class="factory-item"></i>"#,
	);

	let resolved = dom(".factory-item", None).unwrap();
	assert!(matches!(resolved, Resolved::Many(ref els) if els.len() == 2));
	root.remove();
}

/// A selector without matches resolves to an empty collection
#[wasm_bindgen_test]
fn test_selector_without_match_is_empty() {
	let resolved = dom(".factory-none", None).unwrap();
	assert!(resolved.is_empty());
	assert!(!resolved.is_created());
}

/// A bare tag without a scope creates a detached element
#[wasm_bindgen_test]
fn test_tag_without_scope_creates() {
	let resolved = dom("section", None).unwrap();
	assert!(resolved.is_created());

	let el = resolved.into_el().unwrap();
	assert_eq!(el.tag_name(), "section");
	assert!(el.parent().is_none());
}

/// A scoped query looks inside the scope only
#[wasm_bindgen_test]
fn test_scoped_query() {
	let root = mounted("factory-scope", "<p>in</p><p>also</p>");
	let outside = mounted("factory-outside", "<p>out</p>");

	let resolved = dom("p", Some(&root)).unwrap();
	assert_eq!(resolved.len(), 2);
	for el in resolved.into_els() {
		assert_eq!(el.parent(), Some(root.clone()));
	}

	root.remove();
	outside.remove();
}

/// A scoped tag query with no match creates the element
#[wasm_bindgen_test]
fn test_scoped_tag_without_match_creates() {
	let root = div().unwrap();
	let resolved = dom("article", Some(&root)).unwrap();
	assert!(resolved.is_created());
	assert_eq!(resolved.first().map(El::tag_name).as_deref(), Some("article"));
}

/// An existing element resolves to itself
#[wasm_bindgen_test]
fn test_existing_element_passes_through() {
	let el = div().unwrap();
	assert_eq!(dom(&el, None).unwrap(), Resolved::One(el.clone()));
	assert_eq!(dom(el.inner().clone(), None).unwrap(), Resolved::One(el));
}

/// Invalid selectors and tag names surface browser errors
#[wasm_bindgen_test]
fn test_invalid_inputs_are_errors() {
	assert!(matches!(
		dom("#[bad", None),
		Err(DomError::InvalidSelector { .. })
	));
	assert!(matches!(
		create("not a tag"),
		Err(DomError::CreateElement { .. })
	));
}

/// query and query_all search the whole document
#[wasm_bindgen_test]
fn test_query_and_query_all() {
	let root = mounted("factory-query", r#"<b class="q"></b><b class="q"></b>"#);

	assert!(query("#factory-query .q").unwrap().is_some());
	assert_eq!(query_all("#factory-query .q").unwrap().len(), 2);
	assert!(query("#factory-absent").unwrap().is_none());
	root.remove();
}

/// Tag shorthands create the matching element
#[wasm_bindgen_test]
fn test_tag_shorthands() {
	assert_eq!(div().unwrap().tag_name(), "div");
	assert_eq!(h2().unwrap().tag_name(), "h2");
	assert_eq!(option().unwrap().tag_name(), "option");
}
