//! # domchain-params
//!
//! Query-string serializer used by the domchain request helper.
//!
//! Turns a mapping of parameter names to values into the URL-encoded form
//! understood by most server frameworks:
//!
//! - scalars become `key=value`
//! - arrays become repeated `key[]=item` pairs
//! - one level of nested mapping becomes `key[sub]=value` pairs
//! - `null` values are dropped
//!
//! ## Example
//!
//! ```
//! use domchain_params::{Params, append_query};
//!
//! let params = Params::new()
//!     .insert("q", "test")
//!     .insert("tags", vec!["x", "y"]);
//!
//! let url = append_query("/search", &params.to_query_string());
//! assert_eq!(url, "/search?q=test&tags%5B%5D=x&tags%5B%5D=y");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod params;
pub mod serialize;

pub use error::{ParamsError, Result};
pub use params::Params;
pub use serialize::{append_query, pairs, serialize};
