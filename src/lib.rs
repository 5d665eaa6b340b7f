//! # domchain
//!
//! Chainable helpers over the browser DOM for Rust and WebAssembly.
//!
//! domchain wraps native elements, collections, the document and the window
//! so that class, attribute, content and event operations can be chained,
//! keeps a per-object event registry so handlers can be removed by event
//! name, and ships a small `XMLHttpRequest` helper with a nested parameter
//! serializer.
//!
//! ## Feature Flags
//!
//! - `dom` (default) - element wrappers, event registry and request helper
//! - `debug-log` - verbose internal logging through `debug_log!`
//!
//! Without `dom` only the [`params`] serializer is available, which has no
//! browser dependency.
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use domchain::prelude::*;
//!
//! let button = button()?;
//! button
//!     .add_class("btn btn-primary")?
//!     .set_text("Save")
//!     .on("click", &Callback::new(|_| save()))?;
//! Doc::global()?.body().expect("body").append(&button)?;
//!
//! ajax(
//!     RequestSettings::get("/search")
//!         .params(Params::new().insert("q", "test").insert("tags", vec!["x", "y"]))
//!         .on_success(|response| render(response.body))
//!         .on_error(|err| show_error(err.status_text())),
//! );
//! ```

pub mod params;

#[cfg(feature = "dom")]
pub mod ajax;

pub use domchain_params::{Params, ParamsError};

#[cfg(feature = "dom")]
pub use domchain_dom::{
	Callback, Chainable, Content, Descriptor, Doc, DomError, DomchainConfig, El, Els, EventInit,
	Evented, Handler, Resolved, Win, config, create, dom, init_config, query, query_all,
};

#[cfg(feature = "dom")]
pub use domchain_dom::{debug_log, error_log, info_log, warn_log};

/// Tag shorthands (`div()`, `span()`, ...).
#[cfg(feature = "dom")]
pub mod tags {
	pub use domchain_dom::tags::*;
}

/// Commonly used items.
pub mod prelude {
	pub use crate::params::{Params, append_query, serialize};

	#[cfg(feature = "dom")]
	pub use crate::ajax::{AjaxError, RequestSettings, Response, ResponseBody, ajax, send};
	#[cfg(feature = "dom")]
	pub use crate::tags::*;
	#[cfg(feature = "dom")]
	pub use crate::{
		Callback, Chainable, Doc, DomError, El, Els, EventInit, Evented, Handler, Resolved, Win,
		create, dom, query, query_all,
	};
}
