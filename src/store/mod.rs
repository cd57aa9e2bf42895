//! Data access for the items table.
//!
//! Handlers talk to an [`ItemStore`] trait object held in `AppState`, so the
//! MySQL implementation can be swapped for [`MemoryItemStore`] or a mock.

mod memory;
mod mysql;

pub use memory::MemoryItemStore;
pub use mysql::{connect, MySqlItemStore};

use crate::error::StoreError;
use crate::model::ItemInput;
use async_trait::async_trait;
use serde_json::Value;

/// One call per operation; each maps to a single parameterized statement.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Every row, all columns, in whatever order the store yields them.
    async fn list(&self) -> Result<Vec<Value>, StoreError>;

    /// Insert a row and return the id the store assigned.
    async fn insert(&self, input: &ItemInput) -> Result<u64, StoreError>;

    /// Overwrite title and body of the row matching `id`. Returns affected-row count.
    async fn update(&self, id: &str, input: &ItemInput) -> Result<u64, StoreError>;

    /// Remove the row matching `id`. Returns affected-row count.
    async fn delete(&self, id: &str) -> Result<u64, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}
