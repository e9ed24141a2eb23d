//! Result records and dynamic field access.

use serde_json::{Map, Value};

/// One JSON object returned by an endpoint. The shape is caller-defined via
/// the configuration's field-name mappings; no validation is performed.
pub type Record = Map<String, Value>;

/// Display text of a runtime-named field of a record.
///
/// Strings render as-is, numbers and booleans render naturally, missing and
/// null fields render as the empty string. Nested arrays and objects fall
/// back to their compact JSON form.
pub fn field_text(record: &Record, field: &str) -> String {
    match record.get(field) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(Value::Number(number)) => number.to_string(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().expect("object literal").clone()
    }

    #[test]
    fn reads_fields_by_runtime_name() {
        let item = record(json!({"Value": "no", "Text": "Norway", "Rank": 3, "Active": true}));
        assert_eq!(field_text(&item, "Value"), "no");
        assert_eq!(field_text(&item, "Text"), "Norway");
        assert_eq!(field_text(&item, "Rank"), "3");
        assert_eq!(field_text(&item, "Active"), "true");
    }

    #[test]
    fn missing_and_null_fields_render_empty() {
        let item = record(json!({"Text": null}));
        assert_eq!(field_text(&item, "Text"), "");
        assert_eq!(field_text(&item, "Absent"), "");
    }
}
