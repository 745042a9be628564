use serde_json::Value;

/// A required text field counts as supplied only when it is non-empty.
pub fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

pub fn all_present(values: &[&Option<String>]) -> bool {
    values.iter().all(|v| is_present(v))
}

/// Loose JSON truthiness: `null`, `false`, `0` and `""` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Keeps an optional update field only when it is truthy. Absent or falsy
/// values mean "leave the stored value alone".
pub fn truthy(value: Option<Value>) -> Option<Value> {
    value.filter(is_truthy)
}
