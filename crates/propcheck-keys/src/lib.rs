//! Checker combinator validating every key of an object-valued field.
//!
//! [`keys_of`] wraps a checker for a single key and returns a [`KeyChecker`]
//! that applies it to each key of an object, in insertion order. The values
//! stored under those keys are never inspected.
//!
//! ```
//! use propcheck_core::{one_of, singleton, CheckContext, Checker};
//! use propcheck_keys::keys_of;
//! use serde_json::json;
//!
//! let sizes = keys_of(one_of(["small", "large"]));
//! let props = singleton("widths", json!({ "small": 10, "large": 40 }));
//! assert!(sizes.check(&props, "widths", &CheckContext::new("Grid")).is_ok());
//! ```

pub mod key_checker;
pub mod shape;

pub use key_checker::{keys_of, KeyChecker};
pub use shape::Shape;
