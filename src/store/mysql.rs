//! MySQL-backed store using a sqlx pool created once at startup.

use super::ItemStore;
use crate::config::Settings;
use crate::error::StoreError;
use crate::model::ItemInput;
use crate::sql::{row_to_json, DELETE_ITEM, INSERT_ITEM, PING, SELECT_ALL_ITEMS, UPDATE_ITEM};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};

/// Open the process-wide connection handle described by `settings`.
pub async fn connect(settings: &Settings) -> Result<MySqlPool, StoreError> {
    let opts = MySqlConnectOptions::new()
        .host(&settings.db_host)
        .port(settings.db_port)
        .username(&settings.db_user)
        .password(&settings.db_password)
        .database(&settings.db_name);
    let pool = MySqlPoolOptions::new()
        .max_connections(settings.db_max_connections)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

#[derive(Clone)]
pub struct MySqlItemStore {
    pool: MySqlPool,
}

impl MySqlItemStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemStore for MySqlItemStore {
    async fn list(&self) -> Result<Vec<Value>, StoreError> {
        tracing::debug!(sql = %SELECT_ALL_ITEMS, "query");
        let rows = sqlx::query(SELECT_ALL_ITEMS).fetch_all(&self.pool).await?;
        Ok(rows.iter().map(row_to_json).collect())
    }

    async fn insert(&self, input: &ItemInput) -> Result<u64, StoreError> {
        tracing::debug!(sql = %INSERT_ITEM, "query");
        let result = sqlx::query(INSERT_ITEM)
            .bind(&input.title)
            .bind(&input.body)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_id())
    }

    async fn update(&self, id: &str, input: &ItemInput) -> Result<u64, StoreError> {
        tracing::debug!(sql = %UPDATE_ITEM, id = %id, "query");
        let result = sqlx::query(UPDATE_ITEM)
            .bind(&input.title)
            .bind(&input.body)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: &str) -> Result<u64, StoreError> {
        tracing::debug!(sql = %DELETE_ITEM, id = %id, "query");
        let result = sqlx::query(DELETE_ITEM).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query(PING).fetch_optional(&self.pool).await?;
        Ok(())
    }
}
