use std::sync::Arc;

use propcheck_core::{
    singleton, CheckContext, CheckError, Checker, Location, Props, Result, SharedChecker,
};

use crate::shape::Shape;

/// Checker for an object-valued prop whose keys must each pass `sub`.
///
/// Each key `k` is checked by calling `sub` on the single-entry props
/// `{k: k}` under prop name `k` at [`Location::PropKey`], with full name
/// `(<prop>).k` so nested messages locate the key. The first key to
/// fail, in insertion order, is reported as
/// [`CheckError::KeyValidationFailed`].
///
/// Panics raised by `sub` are not caught.
#[derive(Debug, Clone)]
pub struct KeyChecker {
    sub: SharedChecker,
    required: bool,
}

/// Build an optional [`KeyChecker`] around `sub`.
pub fn keys_of<C: Checker + 'static>(sub: C) -> KeyChecker {
    KeyChecker::from_shared(Arc::new(sub))
}

impl KeyChecker {
    /// Build an optional key checker from an already shared checker.
    pub fn from_shared(sub: SharedChecker) -> Self {
        Self {
            sub,
            required: false,
        }
    }

    /// Same key validation, but an absent prop is an error.
    pub fn is_required(&self) -> Self {
        Self {
            sub: Arc::clone(&self.sub),
            required: true,
        }
    }

    /// Same key validation, with an absent prop accepted.
    pub fn is_optional(&self) -> Self {
        Self {
            sub: Arc::clone(&self.sub),
            required: false,
        }
    }

    pub fn required(&self) -> bool {
        self.required
    }

    pub fn sub_checker(&self) -> &SharedChecker {
        &self.sub
    }
}

impl Checker for KeyChecker {
    fn check(&self, props: &Props, prop_name: &str, ctx: &CheckContext<'_>) -> Result<()> {
        let full_name = ctx.full_name(prop_name);

        let map = match Shape::resolve(props, prop_name) {
            Shape::Absent if self.required => {
                return Err(CheckError::RequiredPropMissing {
                    location: ctx.location,
                    prop: full_name.to_string(),
                    component: ctx.component.to_string(),
                });
            }
            Shape::Absent => return Ok(()),
            Shape::Invalid(actual) => {
                return Err(CheckError::InvalidShape {
                    location: ctx.location,
                    prop: full_name.to_string(),
                    component: ctx.component.to_string(),
                    actual,
                });
            }
            Shape::Mapping(map) => map,
        };

        for key in map.keys() {
            let key_full_name = format!("({full_name}).{key}");
            let key_ctx = CheckContext::new(ctx.component)
                .with_location(Location::PropKey)
                .with_full_name(&key_full_name);
            let key_props = singleton(key, key.as_str());
            if let Err(err) = self.sub.check(&key_props, key, &key_ctx) {
                tracing::debug!(
                    component = ctx.component,
                    prop = full_name,
                    key = key.as_str(),
                    error = %err,
                    "key check failed"
                );
                return Err(CheckError::KeyValidationFailed {
                    key: key.clone(),
                    prop: full_name.to_string(),
                    component: ctx.component.to_string(),
                    source: Box::new(err),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use propcheck_core::{any, number, one_of, string, ValueKind};
    use serde_json::{json, Value};

    use super::*;

    const LABEL: &str = "\"keysOf\" test";

    fn props_with(prop_name: &str, value: Value) -> Props {
        singleton(prop_name, value)
    }

    fn run(checker: &KeyChecker, props: &Props, prop_name: &str) -> Result<()> {
        checker.check(props, prop_name, &CheckContext::new(LABEL))
    }

    fn foo_or_bar() -> KeyChecker {
        keys_of(one_of(["foo", "bar"]))
    }

    #[test]
    fn passes_with_an_object_with_no_keys() {
        let props = props_with("a", json!({}));
        assert!(run(&keys_of(number()), &props, "a").is_ok());
    }

    #[test]
    fn passes_when_keys_match_the_checker() {
        let props = props_with("a", json!({ "foo": 1, "bar": "qoob" }));
        assert!(run(&foo_or_bar(), &props, "a").is_ok());
    }

    #[test]
    fn fails_when_keys_do_not_match_the_checker() {
        let props = props_with("a", json!({ "foo": 1, "not_validated": "qoob" }));
        let err = run(&foo_or_bar(), &props, "a").unwrap_err();

        match err {
            CheckError::KeyValidationFailed {
                key,
                prop,
                component,
                source,
            } => {
                assert_eq!(key, "not_validated");
                assert_eq!(prop, "a");
                assert_eq!(component, LABEL);
                assert!(matches!(
                    *source,
                    CheckError::NotOneOf {
                        location: Location::PropKey,
                        ..
                    }
                ));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn passes_when_the_prop_is_not_defined() {
        assert!(run(&keys_of(number()), &Props::new(), "a").is_ok());
    }

    #[test]
    fn is_required_rejects_missing_prop() {
        let err = run(&keys_of(number()).is_required(), &Props::new(), "a").unwrap_err();
        assert!(matches!(
            err,
            CheckError::RequiredPropMissing { ref prop, .. } if prop == "a"
        ));
    }

    #[test]
    fn is_required_still_passes_with_valid_props() {
        let props = props_with("a", json!({ "foo": 1, "bar": "qoob" }));
        assert!(run(&foo_or_bar().is_required(), &props, "a").is_ok());
    }

    #[test]
    fn values_are_never_inspected() {
        let props = props_with("a", json!({ "foo": null, "bar": [1, { "deep": true }] }));
        assert!(run(&foo_or_bar(), &props, "a").is_ok());
    }

    #[test]
    fn keys_are_checked_as_strings() {
        let props = props_with("a", json!({ "1": true }));
        let err = run(&keys_of(number()), &props, "a").unwrap_err();
        assert!(matches!(
            err,
            CheckError::KeyValidationFailed { ref source, .. }
                if matches!(**source, CheckError::InvalidType { actual: ValueKind::String, .. })
        ));

        assert!(run(&keys_of(string()), &props, "a").is_ok());
    }

    #[test]
    fn null_and_non_objects_are_invalid_shapes() {
        let cases = [
            (Value::Null, ValueKind::Null),
            (json!(["foo"]), ValueKind::Array),
            (json!("foo"), ValueKind::String),
            (json!(3), ValueKind::Number),
            (json!(false), ValueKind::Bool),
        ];

        for (value, kind) in cases {
            let props = props_with("a", value);
            for checker in [keys_of(any()), keys_of(any()).is_required()] {
                let err = run(&checker, &props, "a").unwrap_err();
                assert!(
                    matches!(err, CheckError::InvalidShape { actual, .. } if actual == kind),
                    "expected invalid shape for {kind}"
                );
            }
        }
    }

    #[test]
    fn reports_first_failing_key_in_insertion_order() {
        let props: Props =
            serde_json::from_str(r#"{"a":{"foo":0,"zzz":0,"bar":0,"aaa":0}}"#).unwrap();
        let err = run(&foo_or_bar(), &props, "a").unwrap_err();
        assert!(matches!(err, CheckError::KeyValidationFailed { ref key, .. } if key == "zzz"));
    }

    #[test]
    fn uses_full_name_and_location_from_context() {
        let ctx = CheckContext::new("Card")
            .with_location(Location::Context)
            .with_full_name("theme.sizes");
        let err = keys_of(number())
            .is_required()
            .check(&Props::new(), "sizes", &ctx)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "required context `theme.sizes` was not specified in `Card`"
        );
    }

    #[test]
    fn key_errors_are_located_under_the_outer_full_name() {
        let ctx = CheckContext::new("Card").with_full_name("outer.a");
        let props = props_with("a", json!({ "foo": 1, "zz": 2 }));
        let err = foo_or_bar().check(&props, "a", &ctx).unwrap_err();

        let CheckError::KeyValidationFailed { prop, source, .. } = err else {
            panic!("expected key validation failure");
        };
        assert_eq!(prop, "outer.a");
        assert_eq!(source.prop(), "(outer.a).zz");
        assert!(source
            .to_string()
            .starts_with("invalid prop key `(outer.a).zz` of value `\"zz\"`"));
    }

    #[test]
    fn does_not_mutate_props_and_is_stable() {
        let props = props_with("a", json!({ "foo": 1, "nope": 2 }));
        let before = props.clone();
        let checker = foo_or_bar();

        let first = run(&checker, &props, "a");
        let second = run(&checker, &props, "a");

        assert_eq!(first, second);
        assert_eq!(props, before);
    }

    #[test]
    fn required_flag_round_trips() {
        let checker = keys_of(any());
        assert!(!checker.required());
        assert!(checker.is_required().required());
        assert!(!checker.is_required().is_optional().required());
        assert!(Arc::ptr_eq(
            checker.sub_checker(),
            checker.is_required().sub_checker()
        ));
    }

    #[test]
    fn key_checkers_nest() {
        let nested = keys_of(keys_of(any()));
        let props = props_with("a", json!({ "foo": 1 }));
        let err = run(&nested, &props, "a").unwrap_err();
        assert!(matches!(
            err,
            CheckError::KeyValidationFailed { ref source, .. }
                if matches!(**source, CheckError::InvalidShape { actual: ValueKind::String, .. })
        ));
    }

    #[derive(Debug)]
    struct Exploding;

    impl Checker for Exploding {
        fn check(&self, _: &Props, _: &str, _: &CheckContext<'_>) -> Result<()> {
            panic!("sub-checker exploded");
        }
    }

    #[test]
    #[should_panic(expected = "sub-checker exploded")]
    fn sub_checker_panics_propagate() {
        let props = props_with("a", json!({ "foo": 1 }));
        let _ = run(&keys_of(Exploding), &props, "a");
    }

    #[test]
    fn shared_across_threads() {
        let checker = foo_or_bar().is_required();
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let checker = checker.clone();
                thread::spawn(move || {
                    let value = if i % 2 == 0 {
                        json!({ "foo": i })
                    } else {
                        json!({ "baz": i })
                    };
                    run(&checker, &props_with("a", value), "a").is_ok()
                })
            })
            .collect();

        let results: Vec<bool> = handles
            .into_iter()
            .map(|handle| handle.join().expect("thread should not panic"))
            .collect();
        assert_eq!(results, [true, false, true, false]);
    }
}
