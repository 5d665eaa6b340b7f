//! Query-string serialization of nested parameters
//!
//! Re-exports [`domchain_params`].
//!
//! ## Example
//!
//! ```rust
//! use domchain::params::{Params, pairs};
//!
//! let params = Params::new()
//!     .insert("user", serde_json::json!({"name": "ann", "age": 3}))
//!     .insert("missing", None::<String>);
//!
//! assert_eq!(
//!     pairs(&params),
//!     vec![
//!         ("user[name]".to_string(), "ann".to_string()),
//!         ("user[age]".to_string(), "3".to_string()),
//!     ]
//! );
//! ```

pub use domchain_params::*;
