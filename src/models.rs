use serde::{Deserialize, Serialize};
use serde_json::Value;

// One line of the output file: a received payload element
// wrapped with the receipt timestamp.
#[derive(Debug, Deserialize, Serialize)]
pub struct StoredEntry {
    pub received_at: String,
    pub data: Value
}

// Borrowing form of the same line shape, used on the write path so
// payload elements are serialized in place instead of copied.
#[derive(Debug, Serialize)]
pub struct StoredEntryRef<'a> {
    pub received_at: &'a str,
    pub data: &'a Value
}

#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub status: String,
    pub message: String
}

impl IngestResponse {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
            message: "Logs ingested successfully".to_string()
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String
}

impl ErrorResponse {
    pub fn new(error: &str) -> Self {
        Self { error: error.to_string() }
    }
}
