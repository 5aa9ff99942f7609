//! Base checkers supplied to combinators.
//!
//! Every base checker treats an absent field and an explicit `null` the same
//! way: accepted when optional, [`CheckError::RequiredPropMissing`] when
//! required.

use std::sync::Arc;

use serde_json::Value;

use crate::checker::{CheckContext, Checker};
use crate::error::{CheckError, Result};
use crate::props::{Props, ValueKind};

/// JSON type a [`TypeChecker`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Any,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl Primitive {
    pub fn as_str(self) -> &'static str {
        match self {
            Primitive::Any => "any",
            Primitive::Bool => "bool",
            Primitive::Number => "number",
            Primitive::String => "string",
            Primitive::Array => "array",
            Primitive::Object => "object",
        }
    }

    fn accepts(self, value: &Value) -> bool {
        match self {
            Primitive::Any => true,
            Primitive::Bool => value.is_boolean(),
            Primitive::Number => value.is_number(),
            Primitive::String => value.is_string(),
            Primitive::Array => value.is_array(),
            Primitive::Object => value.is_object(),
        }
    }
}

/// Accepts values of one JSON type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeChecker {
    expected: Primitive,
    required: bool,
}

impl TypeChecker {
    pub const fn new(expected: Primitive) -> Self {
        Self {
            expected,
            required: false,
        }
    }

    /// Same checker, failing when the field is absent.
    pub const fn is_required(&self) -> Self {
        Self {
            expected: self.expected,
            required: true,
        }
    }

    pub fn expected(&self) -> Primitive {
        self.expected
    }

    pub fn required(&self) -> bool {
        self.required
    }
}

impl Checker for TypeChecker {
    fn check(&self, props: &Props, prop_name: &str, ctx: &CheckContext<'_>) -> Result<()> {
        let Some(value) = present_value(props, prop_name, ctx, self.required)? else {
            return Ok(());
        };

        if self.expected.accepts(value) {
            return Ok(());
        }

        tracing::trace!(prop = prop_name, expected = self.expected.as_str(), "type check failed");
        Err(CheckError::InvalidType {
            location: ctx.location,
            prop: ctx.full_name(prop_name).to_string(),
            component: ctx.component.to_string(),
            expected: self.expected.as_str(),
            actual: ValueKind::of(value),
        })
    }
}

pub const fn any() -> TypeChecker {
    TypeChecker::new(Primitive::Any)
}

pub const fn bool() -> TypeChecker {
    TypeChecker::new(Primitive::Bool)
}

pub const fn number() -> TypeChecker {
    TypeChecker::new(Primitive::Number)
}

pub const fn string() -> TypeChecker {
    TypeChecker::new(Primitive::String)
}

pub const fn array() -> TypeChecker {
    TypeChecker::new(Primitive::Array)
}

pub const fn object() -> TypeChecker {
    TypeChecker::new(Primitive::Object)
}

/// Accepts values equal to one of a fixed set.
#[derive(Debug, Clone, PartialEq)]
pub struct OneOf {
    allowed: Arc<[Value]>,
    required: bool,
}

impl OneOf {
    pub fn new(allowed: Vec<Value>) -> Self {
        Self {
            allowed: allowed.into(),
            required: false,
        }
    }

    pub fn is_required(&self) -> Self {
        Self {
            allowed: Arc::clone(&self.allowed),
            required: true,
        }
    }

    pub fn allowed(&self) -> &[Value] {
        &self.allowed
    }

    pub fn required(&self) -> bool {
        self.required
    }
}

impl Checker for OneOf {
    fn check(&self, props: &Props, prop_name: &str, ctx: &CheckContext<'_>) -> Result<()> {
        let Some(value) = present_value(props, prop_name, ctx, self.required)? else {
            return Ok(());
        };

        if self.allowed.contains(value) {
            return Ok(());
        }

        tracing::trace!(prop = prop_name, "value not in allowed set");
        Err(CheckError::NotOneOf {
            location: ctx.location,
            prop: ctx.full_name(prop_name).to_string(),
            component: ctx.component.to_string(),
            value: value.to_string(),
            expected: Value::Array(self.allowed.to_vec()).to_string(),
        })
    }
}

/// Checker accepting only the given values.
pub fn one_of<I, V>(values: I) -> OneOf
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    OneOf::new(values.into_iter().map(Into::into).collect())
}

/// Look up a field, treating `null` as absent and enforcing `required`.
fn present_value<'p>(
    props: &'p Props,
    prop_name: &str,
    ctx: &CheckContext<'_>,
    required: bool,
) -> Result<Option<&'p Value>> {
    match props.get(prop_name) {
        Some(Value::Null) | None if required => Err(CheckError::RequiredPropMissing {
            location: ctx.location,
            prop: ctx.full_name(prop_name).to_string(),
            component: ctx.component.to_string(),
        }),
        Some(Value::Null) | None => Ok(None),
        Some(value) => Ok(Some(value)),
    }
}
