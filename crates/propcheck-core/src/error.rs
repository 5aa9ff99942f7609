use crate::checker::Location;
use crate::props::ValueKind;

/// Reasons a checker rejects a field.
///
/// These are returned, never raised. Callers decide whether to surface them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    /// A required field is absent from the props.
    #[error("required {location} `{prop}` was not specified in `{component}`")]
    RequiredPropMissing {
        location: Location,
        prop: String,
        component: String,
    },

    /// The field is present but is not a plain object.
    #[error(
        "invalid {location} `{prop}` of type `{actual}` supplied to `{component}`, expected a plain object"
    )]
    InvalidShape {
        location: Location,
        prop: String,
        component: String,
        actual: ValueKind,
    },

    /// The field has the wrong JSON type.
    #[error(
        "invalid {location} `{prop}` of type `{actual}` supplied to `{component}`, expected `{expected}`"
    )]
    InvalidType {
        location: Location,
        prop: String,
        component: String,
        expected: &'static str,
        actual: ValueKind,
    },

    /// The field value is not in the allowed set.
    #[error(
        "invalid {location} `{prop}` of value `{value}` supplied to `{component}`, expected one of {expected}"
    )]
    NotOneOf {
        location: Location,
        prop: String,
        component: String,
        value: String,
        expected: String,
    },

    /// A key of an object-valued field failed its key checker.
    #[error("invalid key `{key}` in prop `{prop}` supplied to `{component}`: {source}")]
    KeyValidationFailed {
        key: String,
        prop: String,
        component: String,
        source: Box<CheckError>,
    },
}

impl CheckError {
    /// Full name of the field the error refers to.
    pub fn prop(&self) -> &str {
        match self {
            CheckError::RequiredPropMissing { prop, .. }
            | CheckError::InvalidShape { prop, .. }
            | CheckError::InvalidType { prop, .. }
            | CheckError::NotOneOf { prop, .. }
            | CheckError::KeyValidationFailed { prop, .. } => prop,
        }
    }

    /// Stable machine-readable identifier for the error variant.
    pub fn code(&self) -> &'static str {
        match self {
            CheckError::RequiredPropMissing { .. } => "required_prop_missing",
            CheckError::InvalidShape { .. } => "invalid_shape",
            CheckError::InvalidType { .. } => "invalid_type",
            CheckError::NotOneOf { .. } => "not_one_of",
            CheckError::KeyValidationFailed { .. } => "key_validation_failed",
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
