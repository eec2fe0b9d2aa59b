//! Value folding for composed matches
//!
//! When siblings in a sequence each contribute a value, the contributions are
//! folded left to right into a single result value. Object contributions
//! (which is what id-wrapped values always are) merge key by key with later
//! entries winning, and an object never loses its entries to a bare scalar.
//! Bare scalars replace each other, last one wins.

use serde_json::{Map, Value};

/// Folds the next contribution into the accumulated value.
pub(crate) fn merge_values(acc: Option<Value>, next: Option<Value>) -> Option<Value> {
    match (acc, next) {
        (acc, None) => acc,
        (None, next) => next,
        (Some(Value::Object(mut left)), Some(Value::Object(right))) => {
            for (key, value) in right {
                left.insert(key, value);
            }
            Some(Value::Object(left))
        }
        // Keyed entries outrank a bare scalar
        (Some(Value::Object(left)), Some(_)) => Some(Value::Object(left)),
        (Some(_), next) => next,
    }
}

/// Nests a value under a single key, or nothing when there is no value.
pub(crate) fn wrap_in_id(id: &str, value: Option<Value>) -> Option<Value> {
    value.map(|value| {
        let mut entries = Map::new();
        entries.insert(id.to_string(), value);
        Value::Object(entries)
    })
}
