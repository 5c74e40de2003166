use serde_json::{Map, Value};

/// One place match from the API's response array, kept as the raw JSON
/// object so field lookup stays optimistic (`_id` may be absent).
#[derive(Debug, Clone)]
pub struct Suggestion {
    pub fields: Map<String, Value>,
}

/// The formatted CSV output: one CRLF-terminated line per suggestion,
/// in response-array order.
#[derive(Debug, Clone)]
pub struct CsvDocument {
    pub lines: Vec<String>,
}

impl CsvDocument {
    pub fn to_bytes(&self) -> Vec<u8> {
        self.lines.concat().into_bytes()
    }
}
