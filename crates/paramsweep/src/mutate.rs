//! Nested-path mutation over JSON documents.
//!
//! `set_value` writes a value at a dotted path, creating intermediate
//! mapping nodes for segments that do not exist yet. A non-mapping value
//! occupying an intermediate position is silently replaced by an empty
//! mapping; this is the accepted overwrite policy, not an error.

use crate::KeyPath;
use serde_json::{Map, Value};

/// Set `value` at `path`, creating intermediate objects as needed.
///
/// The final key is set unconditionally, overwriting any prior value or
/// subtree. Setting through an empty path is a no-op. This function never
/// fails; malformed paths simply produce unexpected tree shapes.
///
/// # Examples
///
/// ```
/// use paramsweep::{set_value, KeyPath};
/// use serde_json::json;
///
/// let mut doc = json!({"a": {"b": 1}});
/// set_value(&mut doc, &KeyPath::parse("a.c.d"), json!(2.0));
/// assert_eq!(doc, json!({"a": {"b": 1, "c": {"d": 2.0}}}));
/// ```
pub fn set_value(doc: &mut Value, path: &KeyPath, value: Value) {
    let Some((last, walk)) = path.segments().split_last() else {
        return;
    };

    let mut current = doc;
    for key in walk {
        if !current.is_object() {
            *current = Value::Object(Map::new());
        }
        current = current
            .as_object_mut()
            .unwrap()
            .entry(key.clone())
            .or_insert(Value::Null);
    }

    if !current.is_object() {
        *current = Value::Object(Map::new());
    }
    current.as_object_mut().unwrap().insert(last.clone(), value);
}

/// Get a reference to the value at `path`, or `None` if absent.
pub fn get_value<'a>(doc: &'a Value, path: &KeyPath) -> Option<&'a Value> {
    let mut current = doc;
    for key in path.iter() {
        current = current.get(key)?;
    }
    Some(current)
}
