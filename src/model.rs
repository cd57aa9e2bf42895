//! Item entity and the validated write payload.

use serde::Serialize;
use serde_json::Value;

/// Create response. `title` and `body` are echoed as the client sent them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: u64,
    pub title: Value,
    pub body: Value,
}

/// Title and body as bound to the statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemInput {
    pub title: String,
    pub body: String,
}

/// A payload that passed presence validation: the text to store plus the raw JSON to echo.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidPayload {
    pub input: ItemInput,
    pub title: Value,
    pub body: Value,
}

/// Update response: echoes the path id exactly as it arrived.
#[derive(Debug, Serialize)]
pub struct UpdatedItem {
    pub id: String,
    pub title: Value,
    pub body: Value,
}
