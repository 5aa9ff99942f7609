use std::sync::Arc;

use propcheck_core::{
    any, array, bool, number, object, string, CheckContext, Checker, OneOf, Props, TypeChecker,
};
use propcheck_keys::KeyChecker;
use serde_json::{Map, Value};

use crate::error::{ConfigError, Result};

const ONE_OF: &str = "oneOf";
const KEYS_OF: &str = "keysOf";
const IS_REQUIRED: &str = "isRequired";

/// A compiled checker declaration.
#[derive(Debug, Clone)]
pub enum PropType {
    Type(TypeChecker),
    OneOf(OneOf),
    KeysOf(KeyChecker),
}

impl PropType {
    /// Same checker with the required flag set.
    pub fn is_required(&self) -> Self {
        match self {
            PropType::Type(checker) => PropType::Type(checker.is_required()),
            PropType::OneOf(checker) => PropType::OneOf(checker.is_required()),
            PropType::KeysOf(checker) => PropType::KeysOf(checker.is_required()),
        }
    }

    pub fn required(&self) -> bool {
        match self {
            PropType::Type(checker) => checker.required(),
            PropType::OneOf(checker) => checker.required(),
            PropType::KeysOf(checker) => checker.required(),
        }
    }
}

impl Checker for PropType {
    fn check(
        &self,
        props: &Props,
        prop_name: &str,
        ctx: &CheckContext<'_>,
    ) -> propcheck_core::Result<()> {
        match self {
            PropType::Type(checker) => checker.check(props, prop_name, ctx),
            PropType::OneOf(checker) => checker.check(props, prop_name, ctx),
            PropType::KeysOf(checker) => checker.check(props, prop_name, ctx),
        }
    }
}

impl From<TypeChecker> for PropType {
    fn from(checker: TypeChecker) -> Self {
        PropType::Type(checker)
    }
}

impl From<OneOf> for PropType {
    fn from(checker: OneOf) -> Self {
        PropType::OneOf(checker)
    }
}

impl From<KeyChecker> for PropType {
    fn from(checker: KeyChecker) -> Self {
        PropType::KeysOf(checker)
    }
}

/// Compile a JSON checker declaration.
///
/// Accepted forms:
/// - `"any"`, `"bool"`, `"number"`, `"string"`, `"array"`, `"object"`
/// - `{"oneOf": [values...]}`
/// - `{"keysOf": <declaration>}`
/// - `{"isRequired": <declaration>}`
pub fn compile(decl: &Value) -> Result<PropType> {
    match decl {
        Value::String(name) => compile_named(name),
        Value::Object(map) => compile_object(map),
        other => Err(ConfigError::NotAChecker {
            combinator: "declaration",
            found: describe(Some(other)),
        }),
    }
}

fn compile_named(name: &str) -> Result<PropType> {
    let checker = match name {
        "any" => any(),
        "bool" => bool(),
        "number" => number(),
        "string" => string(),
        "array" => array(),
        "object" => object(),
        KEYS_OF => {
            return Err(ConfigError::NotAChecker {
                combinator: KEYS_OF,
                found: describe(None),
            })
        }
        IS_REQUIRED => {
            return Err(ConfigError::NotAChecker {
                combinator: IS_REQUIRED,
                found: describe(None),
            })
        }
        ONE_OF => {
            return Err(ConfigError::InvalidArgument {
                checker: ONE_OF,
                message: "expected an array of allowed values".to_string(),
            })
        }
        other => return Err(ConfigError::UnknownChecker(other.to_string())),
    };
    Ok(PropType::Type(checker))
}

fn compile_object(map: &Map<String, Value>) -> Result<PropType> {
    let mut entries = map.iter();
    let (name, arg) = match (entries.next(), entries.next()) {
        (Some(entry), None) => entry,
        (None, _) => {
            return Err(ConfigError::NotAChecker {
                combinator: "declaration",
                found: describe(Some(&Value::Object(Map::new()))),
            })
        }
        (Some(_), Some(_)) => {
            return Err(ConfigError::InvalidArgument {
                checker: "declaration",
                message: format!("expected exactly one checker name, got {}", map.len()),
            })
        }
    };

    match name.as_str() {
        ONE_OF => match arg {
            Value::Array(values) => Ok(PropType::OneOf(OneOf::new(values.clone()))),
            other => Err(ConfigError::InvalidArgument {
                checker: ONE_OF,
                message: format!(
                    "expected an array of allowed values, got {}",
                    describe(Some(other))
                ),
            }),
        },
        KEYS_OF => {
            let sub = compile_sub_checker(KEYS_OF, arg)?;
            Ok(PropType::KeysOf(KeyChecker::from_shared(Arc::new(sub))))
        }
        IS_REQUIRED => Ok(compile_sub_checker(IS_REQUIRED, arg)?.is_required()),
        other => Err(ConfigError::UnknownChecker(other.to_string())),
    }
}

/// Compile the argument of a combinator, rejecting anything that is not
/// itself a checker declaration.
fn compile_sub_checker(combinator: &'static str, arg: &Value) -> Result<PropType> {
    match arg {
        Value::String(_) => compile(arg),
        Value::Object(map) if !map.is_empty() => compile(arg),
        other => Err(ConfigError::NotAChecker {
            combinator,
            found: describe(Some(other)),
        }),
    }
}

fn describe(value: Option<&Value>) -> &'static str {
    match value {
        None => "nothing",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "a boolean",
        Some(Value::Number(_)) => "a number",
        Some(Value::String(_)) => "a string",
        Some(Value::Array(_)) => "an array",
        Some(Value::Object(map)) if map.is_empty() => "an empty object",
        Some(Value::Object(_)) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use propcheck_core::{singleton, CheckError};
    use serde_json::json;

    use super::*;

    fn check(prop_type: &PropType, props: &Props) -> propcheck_core::Result<()> {
        prop_type.check(props, "a", &CheckContext::new("decl test"))
    }

    #[test]
    fn keys_of_rejects_non_checkers() {
        let cases = [
            (json!("keysOf"), "nothing"),
            (json!({ "keysOf": null }), "null"),
            (json!({ "keysOf": {} }), "an empty object"),
            (json!({ "keysOf": [] }), "an array"),
            (json!({ "keysOf": 7 }), "a number"),
        ];

        for (decl, expected) in cases {
            match compile(&decl) {
                Err(ConfigError::NotAChecker {
                    combinator: KEYS_OF,
                    found,
                }) => assert_eq!(found, expected),
                other => panic!("expected NotAChecker for {decl}, got {other:?}"),
            }
        }
    }

    #[test]
    fn keys_of_compiles_nested_declaration() {
        let prop_type = compile(&json!({ "keysOf": { "oneOf": ["foo", "bar"] } })).unwrap();
        assert!(matches!(prop_type, PropType::KeysOf(_)));
        assert!(!prop_type.required());

        assert!(check(&prop_type, &singleton("a", json!({ "foo": 1, "bar": "qoob" }))).is_ok());
        assert!(matches!(
            check(&prop_type, &singleton("a", json!({ "foo": 1, "not_validated": "qoob" }))),
            Err(CheckError::KeyValidationFailed { ref key, .. }) if key == "not_validated"
        ));
    }

    #[test]
    fn is_required_wraps_any_declaration() {
        for decl in [
            json!({ "isRequired": "number" }),
            json!({ "isRequired": { "oneOf": [1, 2] } }),
            json!({ "isRequired": { "keysOf": "string" } }),
            json!({ "isRequired": { "isRequired": "any" } }),
        ] {
            let prop_type = compile(&decl).unwrap();
            assert!(prop_type.required(), "{decl} should be required");
            assert!(matches!(
                check(&prop_type, &Props::new()),
                Err(CheckError::RequiredPropMissing { .. })
            ));
        }
    }

    #[test]
    fn is_required_rejects_non_checkers() {
        assert!(matches!(
            compile(&json!({ "isRequired": null })),
            Err(ConfigError::NotAChecker {
                combinator: IS_REQUIRED,
                ..
            })
        ));
        assert!(matches!(
            compile(&json!("isRequired")),
            Err(ConfigError::NotAChecker { .. })
        ));
    }

    #[test]
    fn named_checkers_compile() {
        for name in ["any", "bool", "number", "string", "array", "object"] {
            let prop_type = compile(&json!(name)).unwrap();
            assert!(matches!(
                prop_type,
                PropType::Type(checker) if checker.expected().as_str() == name
            ));
        }
    }

    #[test]
    fn rejects_unknown_and_malformed_declarations() {
        assert!(matches!(
            compile(&json!("float")),
            Err(ConfigError::UnknownChecker(name)) if name == "float"
        ));
        assert!(matches!(
            compile(&json!({ "shape": {} })),
            Err(ConfigError::UnknownChecker(_))
        ));
        assert!(matches!(
            compile(&json!({ "oneOf": "foo" })),
            Err(ConfigError::InvalidArgument { checker: ONE_OF, .. })
        ));
        assert!(matches!(
            compile(&json!("oneOf")),
            Err(ConfigError::InvalidArgument { .. })
        ));
        assert!(matches!(
            compile(&json!({ "oneOf": [], "keysOf": "any" })),
            Err(ConfigError::InvalidArgument { .. })
        ));
        assert!(matches!(
            compile(&json!({})),
            Err(ConfigError::NotAChecker { .. })
        ));
        assert!(matches!(
            compile(&json!(null)),
            Err(ConfigError::NotAChecker { .. })
        ));
    }

    #[test]
    fn from_impls_wrap_typed_checkers() {
        let prop_type: PropType = propcheck_keys::keys_of(number()).into();
        assert!(matches!(prop_type, PropType::KeysOf(_)));
        assert!(prop_type.is_required().required());
    }
}
