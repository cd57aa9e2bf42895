//! Presence validation for item write payloads.

use crate::error::AppError;
use crate::model::{ItemInput, ValidPayload};
use serde_json::{Map, Value};

pub struct RequestValidator;

impl RequestValidator {
    /// Require non-falsy `title` and `body`. Absent, null, "", false and 0 all count as missing.
    pub fn validate(payload: &Map<String, Value>) -> Result<ValidPayload, AppError> {
        let (Some(title), Some(body)) = (payload.get("title"), payload.get("body")) else {
            return Err(AppError::Validation);
        };
        let (Some(title_text), Some(body_text)) = (required_text(title), required_text(body)) else {
            return Err(AppError::Validation);
        };
        Ok(ValidPayload {
            input: ItemInput {
                title: title_text,
                body: body_text,
            },
            title: title.clone(),
            body: body.clone(),
        })
    }
}

/// Text to bind for a field, or None if the value is falsy or cannot be stored in a text column.
fn required_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
        _ => None,
    }
}
