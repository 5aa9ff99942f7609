//! Composable prop checkers for component input contracts.
//!
//! # Crate Structure
//!
//! - [`checker`] — Checker protocol, props container and base checkers
//! - [`keys`] — `keys_of`, validating every key of an object-valued prop
//! - [`contract`] — Declarative contracts compiled from JSON

/// Re-export checker protocol types.
pub mod checker {
    pub use propcheck_core::*;
}

/// Re-export key checker types.
pub mod keys {
    pub use propcheck_keys::*;
}

/// Re-export contract types.
pub mod contract {
    pub use propcheck_contract::*;
}

pub use propcheck_core::{CheckContext, CheckError, Checker, Props};
pub use propcheck_keys::keys_of;
