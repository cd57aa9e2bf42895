//! In-process store with auto-increment ids. Used by tests and for running without MySQL.

use super::ItemStore;
use crate::error::StoreError;
use crate::model::ItemInput;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;

struct Row {
    id: u64,
    title: String,
    body: String,
}

impl Row {
    fn matches(&self, id: f64) -> bool {
        self.id as f64 == id
    }
}

#[derive(Default)]
struct Table {
    next_id: u64,
    rows: Vec<Row>,
}

#[derive(Default)]
pub struct MemoryItemStore {
    table: Mutex<Table>,
    failing: bool,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails, for exercising the 500 paths.
    pub fn failing() -> Self {
        Self {
            table: Mutex::default(),
            failing: true,
        }
    }

    fn table(&self) -> Result<std::sync::MutexGuard<'_, Table>, StoreError> {
        if self.failing {
            return Err(StoreError::Unavailable("memory store configured to fail".into()));
        }
        self.table
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".into()))
    }
}

/// MySQL's string-to-number coercion when a text parameter meets the integer `id`
/// column: leading whitespace is skipped, the longest numeric prefix is used, and
/// text with no numeric prefix becomes 0. So "1abc" is 1 and "abc" matches no id.
fn coerce_id(id: &str) -> f64 {
    let s = id.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut num_end = int_end;
    if bytes.get(int_end) == Some(&b'.') {
        num_end = digits_from(int_end + 1);
    }
    if num_end > end && matches!(bytes.get(num_end), Some(b'e' | b'E')) {
        let mut exp = num_end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            num_end = exp_end;
        }
    }
    s[..num_end].parse().unwrap_or(0.0)
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn list(&self) -> Result<Vec<Value>, StoreError> {
        let table = self.table()?;
        Ok(table
            .rows
            .iter()
            .map(|item| serde_json::json!({ "id": item.id, "title": item.title, "body": item.body }))
            .collect())
    }

    async fn insert(&self, input: &ItemInput) -> Result<u64, StoreError> {
        let mut table = self.table()?;
        table.next_id += 1;
        let id = table.next_id;
        table.rows.push(Row {
            id,
            title: input.title.clone(),
            body: input.body.clone(),
        });
        Ok(id)
    }

    async fn update(&self, id: &str, input: &ItemInput) -> Result<u64, StoreError> {
        let mut table = self.table()?;
        let id = coerce_id(id);
        match table.rows.iter_mut().find(|row| row.matches(id)) {
            Some(item) => {
                item.title = input.title.clone();
                item.body = input.body.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: &str) -> Result<u64, StoreError> {
        let mut table = self.table()?;
        let id = coerce_id(id);
        let before = table.rows.len();
        table.rows.retain(|row| !row.matches(id));
        Ok((before - table.rows.len()) as u64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.table().map(|_| ())
    }
}
