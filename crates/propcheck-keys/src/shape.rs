use propcheck_core::{Props, ValueKind};
use serde_json::{Map, Value};

/// What a key checker finds under the inspected prop name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<'a> {
    /// The prop name is not present.
    Absent,
    /// Present, but not a plain object. `null` lands here too.
    Invalid(ValueKind),
    /// A plain object whose keys are to be checked.
    Mapping(&'a Map<String, Value>),
}

impl<'a> Shape<'a> {
    pub fn resolve(props: &'a Props, prop_name: &str) -> Self {
        match props.get(prop_name) {
            None => Shape::Absent,
            Some(Value::Object(map)) => Shape::Mapping(map),
            Some(other) => Shape::Invalid(ValueKind::of(other)),
        }
    }
}
