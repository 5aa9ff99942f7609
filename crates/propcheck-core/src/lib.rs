//! Checker protocol and base field checkers.
//!
//! A checker validates one named field of a [`Props`] container and reports
//! the outcome in-band: `Ok(())` when the field is acceptable, a
//! [`CheckError`] describing the component, field and reason otherwise.
//! Checkers never panic on bad input and never mutate the props they inspect.
//!
//! The base checkers in [`base`] are the building blocks combinators such as
//! `propcheck-keys` compose with. They are plain values, passed explicitly to
//! whatever needs them.

pub mod base;
pub mod checker;
pub mod error;
pub mod props;

pub use base::{any, array, bool, number, object, one_of, string, OneOf, Primitive, TypeChecker};
pub use checker::{CheckContext, Checker, Location, SharedChecker};
pub use error::{CheckError, Result};
pub use props::{singleton, Props, ValueKind};
