use crate::core::Suggestion;
use crate::utils::error::{Result, SuggestError};
use serde_json::{Map, Value};

pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Renders one JSON scalar as a CSV cell. Strings are double-quoted with
/// every literal `"` doubled (RFC 4180); numbers and booleans keep their
/// plain, locale-independent form; null or absent becomes the empty cell.
///
/// Callers must only pass scalars; anything else is a caller bug, not a
/// recoverable condition.
pub fn format_field(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => {
            let mut cell = String::with_capacity(s.len() + 2);
            cell.push('"');
            for c in s.chars() {
                cell.push(c);
                if c == '"' {
                    cell.push('"');
                }
            }
            cell.push('"');
            cell
        }
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => unreachable!("scalar formatter received a {}", json_type_name(other)),
    }
}

/// Optimistic lookup that still refuses to feed a non-scalar into the
/// field formatter.
fn scalar_field<'a>(fields: &'a Map<String, Value>, key: &str) -> Result<Option<&'a Value>> {
    match fields.get(key) {
        Some(value @ (Value::Array(_) | Value::Object(_))) => Err(SuggestError::SchemaError {
            context: format!("field '{key}'"),
            expected: "scalar",
            found: json_type_name(value),
        }),
        value => Ok(value),
    }
}

/// Renders one suggestion as the CSV line `_id,name,latitude,longitude`,
/// the last two read from the nested `geo_position` object. Lines end
/// with CRLF as RFC 4180 requires.
pub fn format_record(suggestion: &Suggestion) -> Result<String> {
    let id = scalar_field(&suggestion.fields, "_id")?;
    let name = scalar_field(&suggestion.fields, "name")?;

    let position = match suggestion.fields.get("geo_position") {
        Some(Value::Object(position)) => position,
        Some(other) => {
            return Err(SuggestError::SchemaError {
                context: "field 'geo_position'".to_string(),
                expected: "object",
                found: json_type_name(other),
            })
        }
        None => {
            return Err(SuggestError::SchemaError {
                context: "field 'geo_position'".to_string(),
                expected: "object",
                found: "nothing",
            })
        }
    };
    let latitude = scalar_field(position, "latitude")?;
    let longitude = scalar_field(position, "longitude")?;

    Ok(format!(
        "{},{},{},{}\r\n",
        format_field(id),
        format_field(name),
        format_field(latitude),
        format_field(longitude)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn suggestion(value: serde_json::Value) -> Suggestion {
        match value {
            Value::Object(fields) => Suggestion { fields },
            _ => panic!("test input must be an object"),
        }
    }

    fn unquote(cell: &str) -> String {
        let inner = cell
            .strip_prefix('"')
            .and_then(|c| c.strip_suffix('"'))
            .unwrap();
        inner.replace("\"\"", "\"")
    }

    #[test]
    fn test_string_cells_round_trip() {
        for s in [
            "Berlin",
            "He said \"hi\"",
            "\"\"",
            "",
            "commas, stay, put",
            "Zürich",
        ] {
            let cell = format_field(Some(&json!(s)));
            assert_eq!(unquote(&cell), s);
        }
    }

    #[test]
    fn test_quotes_are_doubled() {
        let cell = format_field(Some(&json!("He said \"hi\"")));
        assert_eq!(cell, "\"He said \"\"hi\"\"\"");
    }

    #[test]
    fn test_null_and_absent_are_empty_cells() {
        assert_eq!(format_field(None), "");
        assert_eq!(format_field(Some(&Value::Null)), "");
    }

    #[test]
    fn test_numbers_and_booleans_are_unquoted() {
        assert_eq!(format_field(Some(&json!(52.52))), "52.52");
        assert_eq!(format_field(Some(&json!(-2))), "-2");
        assert_eq!(format_field(Some(&json!(true))), "true");
        assert_eq!(format_field(Some(&json!(false))), "false");
    }

    #[test]
    fn test_record_without_id_has_leading_empty_cell() {
        let line = format_record(&suggestion(json!({
            "name": "Berlin",
            "geo_position": {"latitude": 52.52, "longitude": 13.405}
        })))
        .unwrap();
        assert_eq!(line, ",\"Berlin\",52.52,13.405\r\n");
    }

    #[test]
    fn test_record_with_all_fields() {
        let line = format_record(&suggestion(json!({
            "_id": "berlin_1",
            "name": "He said \"hi\"",
            "geo_position": {"latitude": 1, "longitude": -2}
        })))
        .unwrap();
        assert_eq!(line, "\"berlin_1\",\"He said \"\"hi\"\"\",1,-2\r\n");
    }

    #[test]
    fn test_missing_position_coordinates_become_empty_cells() {
        let line = format_record(&suggestion(json!({
            "_id": "x_9",
            "name": "Nowhere",
            "geo_position": {}
        })))
        .unwrap();
        assert_eq!(line, "\"x_9\",\"Nowhere\",,\r\n");
    }

    #[test]
    fn test_non_object_geo_position_is_a_schema_error() {
        let err = format_record(&suggestion(json!({
            "name": "Berlin",
            "geo_position": [52.52, 13.405]
        })))
        .unwrap_err();
        assert!(matches!(err, SuggestError::SchemaError { found: "array", .. }));
    }

    #[test]
    fn test_missing_geo_position_is_a_schema_error() {
        let err = format_record(&suggestion(json!({"name": "Berlin"}))).unwrap_err();
        assert!(matches!(
            err,
            SuggestError::SchemaError { found: "nothing", .. }
        ));
    }

    #[test]
    fn test_non_scalar_leaf_field_is_a_schema_error() {
        let err = format_record(&suggestion(json!({
            "_id": {"oid": 1},
            "name": "Berlin",
            "geo_position": {"latitude": 52.52, "longitude": 13.405}
        })))
        .unwrap_err();
        assert!(matches!(err, SuggestError::SchemaError { found: "object", .. }));
    }
}
