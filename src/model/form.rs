use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Lookup of a form input by element id.
///
/// The outer `Option` says whether the element exists at all, the inner one
/// whether it currently carries a value. An empty string is a value.
pub trait Form {
    fn element(&self, id: &str) -> Option<Option<String>>;
}

impl Form for BTreeMap<String, Option<String>> {
    fn element(&self, id: &str) -> Option<Option<String>> {
        self.get(id).cloned()
    }
}

/// Fields as they arrive in a protocol payload: a missing key is a missing
/// element. Input values are text, so only strings carry a value; numbers are
/// accepted for the id input. Anything else (`null`, booleans, arrays,
/// objects) is an absent value.
impl Form for Map<String, Value> {
    fn element(&self, id: &str) -> Option<Option<String>> {
        let v = self.get(id)?;
        Some(match v {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
        })
    }
}
