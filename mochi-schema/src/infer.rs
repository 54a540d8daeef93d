//! Type inference over JSON values.

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Ordered mapping of field names to Python type annotations.
///
/// Insertion order comes from the input JSON object and determines
/// declaration order in generated code.
pub type FieldSchema = IndexMap<String, String>;

/// Infer a Python type annotation from a JSON value.
///
/// Total and pure: every value maps to some annotation. Containers are
/// sampled shallowly, the first element (or first key/value pair in
/// insertion order) decides the parameter type; heterogeneous
/// containers are not unified.
///
/// # Example
///
/// ```
/// use serde_json::json;
///
/// assert_eq!(mochi_schema::infer_type(&json!(42)), "int");
/// assert_eq!(mochi_schema::infer_type(&json!([1, 2, 3])), "list[int]");
/// assert_eq!(mochi_schema::infer_type(&json!({"a": 1})), "dict[str, int]");
/// ```
pub fn infer_type(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        // Checked before Number so booleans never classify as int.
        Value::Bool(_) => "bool".to_string(),
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int".to_string()
            } else if n.is_f64() {
                "float".to_string()
            } else {
                "Any".to_string()
            }
        }
        Value::String(_) => "str".to_string(),
        Value::Array(items) => match items.first() {
            Some(first) => format!("list[{}]", infer_type(first)),
            None => "list[Any]".to_string(),
        },
        Value::Object(entries) => match entries.iter().next() {
            // JSON object keys are always strings, so the key side of
            // the annotation is fixed.
            Some((_, first)) => format!("dict[str, {}]", infer_type(first)),
            None => "dict[str, Any]".to_string(),
        },
    }
}

/// Infer a [`FieldSchema`] from a JSON object.
///
/// Applies [`infer_type`] to each value, preserving insertion order.
/// Empty input yields an empty schema.
///
/// # Example
///
/// ```
/// use serde_json::json;
///
/// let data = json!({"user_id": 123, "username": "ada"});
/// let fields = mochi_schema::infer_fields(data.as_object().unwrap());
/// assert_eq!(fields["user_id"], "int");
/// assert_eq!(fields["username"], "str");
/// ```
pub fn infer_fields(data: &Map<String, Value>) -> FieldSchema {
    data.iter()
        .map(|(key, value)| (key.clone(), infer_type(value)))
        .collect()
}
