//! Declarative component contracts.
//!
//! A contract names the props a component accepts and the checker each one
//! must pass. Contracts can be built in code or compiled from JSON
//! declarations:
//!
//! ```json
//! {
//!   "component": "Grid",
//!   "props": {
//!     "columns": { "isRequired": "number" },
//!     "widths": { "keysOf": { "oneOf": ["small", "large"] } }
//!   }
//! }
//! ```
//!
//! Malformed declarations fail when the contract is compiled, never when
//! props are validated.

pub mod config;
pub mod contract;
pub mod decl;
pub mod error;

pub use config::ContractConfig;
pub use contract::{Contract, ContractReport, Failure};
pub use decl::{compile, PropType};
pub use error::{ConfigError, Result};
