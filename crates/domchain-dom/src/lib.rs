//! domchain-dom - chainable DOM helpers over web-sys
//!
//! Thin wrappers around native elements, collections, the document and the
//! window, with jQuery-style chaining, an event registry that can unbind by
//! name, and an `XMLHttpRequest` helper.
//!
//! ## Architecture
//!
//! - [`El`], [`Els`], [`Doc`], [`Win`]: wrappers owning native handles
//! - [`Chainable`]: class, attribute, value and content operations
//! - [`Evented`]: `on` / `off` / `trigger`, backed by [`events`]
//! - [`factory`]: [`dom`] dispatcher, [`create`], [`query`], [`query_all`]
//! - [`tags`]: `div()`, `span()` and other shorthands
//! - [`ajax`]: request helper, built on [`domchain_params`]
//! - [`config`]: request defaults and CSRF settings
//!
//! ## Example
//!
//! ```ignore
//! use domchain_dom::{Callback, Chainable, Evented, dom};
//!
//! let list = dom("#todo", None)?.into_els();
//! list.append(li()?.set_text("Write docs"))?
//!     .on("click", &Callback::new(|_| toggle()))?;
//! ```
//!
//! DOM calls only work on `wasm32` inside a browser. On other targets the
//! crate compiles so that pure helpers (request preparation, parameter
//! encoding, registry bookkeeping) can be used and tested natively.

#![warn(missing_docs)]

pub mod ajax;
pub mod callback;
pub mod chainable;
pub mod collection;
pub mod config;
pub mod content;
pub mod csrf;
pub mod document;
pub mod element;
pub mod error;
pub mod events;
pub mod factory;
pub mod logging;
pub mod tags;
pub mod window;

pub use ajax::{AjaxError, RequestSettings, Response, ResponseBody, ajax, send};
pub use callback::{Callback, Handler};
pub use chainable::Chainable;
pub use collection::Els;
pub use config::{DomchainConfig, config, init_config};
pub use content::Content;
pub use document::Doc;
pub use element::El;
pub use error::{DomError, Result};
pub use events::{EventInit, Evented};
pub use factory::{Descriptor, Resolved, create, dom, query, query_all};
pub use tags::{
	a, button, div, form, h1, h2, h3, img, input, label, li, option, p, select, span, textarea, ul,
};
pub use window::Win;

// Logging macros are exported at the crate root via #[macro_export]

#[doc(hidden)]
pub mod __private {
	pub use tracing;
	pub use web_sys;
}
