//! Asynchronous HTTP requests through `XMLHttpRequest`
//!
//! Re-exports [`domchain_dom::ajax`] and the configuration it reads.

pub use domchain_dom::ajax::*;
pub use domchain_dom::config::{DomchainConfig, config, init_config, is_configured, reset_config};
pub use domchain_dom::csrf::{csrf_header, csrf_token, is_same_origin, parse_cookie_value};
