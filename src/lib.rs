//! Items API: HTTP JSON CRUD over a MySQL `items` table.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError, StoreAction, StoreError};
pub use model::{Item, ItemInput, ValidPayload};
pub use routes::{app, common_routes, item_routes};
pub use service::RequestValidator;
pub use state::AppState;
pub use store::{ItemStore, MemoryItemStore, MySqlItemStore};
