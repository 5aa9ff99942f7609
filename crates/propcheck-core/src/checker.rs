use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::error::Result;
use crate::props::Props;

/// Where the checked field comes from. Only affects error wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    #[default]
    Prop,
    Context,
    ChildContext,
    PropKey,
}

impl Location {
    pub fn as_str(self) -> &'static str {
        match self {
            Location::Prop => "prop",
            Location::Context => "context",
            Location::ChildContext => "child context",
            Location::PropKey => "prop key",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Labels threaded through a check for error messages.
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    /// Display name of the component whose props are checked.
    pub component: &'a str,
    pub location: Location,
    /// Overrides the prop name in messages (e.g. ``prop key `foo` ``).
    pub prop_full_name: Option<&'a str>,
}

impl<'a> CheckContext<'a> {
    pub fn new(component: &'a str) -> Self {
        Self {
            component,
            location: Location::Prop,
            prop_full_name: None,
        }
    }

    pub fn with_location(self, location: Location) -> Self {
        Self { location, ..self }
    }

    pub fn with_full_name(self, prop_full_name: &'a str) -> Self {
        Self {
            prop_full_name: Some(prop_full_name),
            ..self
        }
    }

    /// Name used for `prop_name` in messages.
    pub fn full_name<'b>(&'b self, prop_name: &'b str) -> &'b str {
        self.prop_full_name.unwrap_or(prop_name)
    }
}

/// Validates one named field of a props container.
///
/// Implementations must be pure: the same inputs always give the same
/// result and `props` is never modified.
pub trait Checker: Send + Sync + fmt::Debug {
    fn check(&self, props: &Props, prop_name: &str, ctx: &CheckContext<'_>) -> Result<()>;
}

/// Type-erased checker shared between combinators and contracts.
pub type SharedChecker = Arc<dyn Checker>;

impl<C: Checker + ?Sized> Checker for Arc<C> {
    fn check(&self, props: &Props, prop_name: &str, ctx: &CheckContext<'_>) -> Result<()> {
        (**self).check(props, prop_name, ctx)
    }
}

impl<C: Checker + ?Sized> Checker for Box<C> {
    fn check(&self, props: &Props, prop_name: &str, ctx: &CheckContext<'_>) -> Result<()> {
        (**self).check(props, prop_name, ctx)
    }
}
