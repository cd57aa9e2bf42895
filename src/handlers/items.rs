//! Item handlers: list, create, update, delete. One store call per request.

use crate::error::{AppError, StoreAction};
use crate::model::{Item, UpdatedItem, ValidPayload};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::{Map, Value};

/// Missing, mistyped, malformed or non-object bodies validate as an empty payload.
/// A body that could not be read at all is rejected as too large.
fn validated_payload(body: Result<Json<Value>, JsonRejection>) -> Result<ValidPayload, AppError> {
    let map = match body {
        Ok(Json(Value::Object(m))) => m,
        Ok(_) => Map::new(),
        Err(JsonRejection::BytesRejection(rejection)) => {
            tracing::debug!(%rejection, "request body unreadable");
            return Err(AppError::PayloadTooLarge);
        }
        Err(rejection) => {
            tracing::debug!(%rejection, "request body ignored");
            Map::new()
        }
    };
    RequestValidator::validate(&map)
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.store.list().await.map_err(AppError::store(StoreAction::Fetch))?;
    Ok(Json(rows))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = validated_payload(body)?;
    let id = state
        .store
        .insert(&payload.input)
        .await
        .map_err(AppError::store(StoreAction::Add))?;
    let item = Item {
        id,
        title: payload.title,
        body: payload.body,
    };
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = validated_payload(body)?;
    let affected = state
        .store
        .update(&id, &payload.input)
        .await
        .map_err(AppError::store(StoreAction::Update))?;
    if affected == 0 {
        return Err(AppError::NotFound);
    }
    Ok(Json(UpdatedItem {
        id,
        title: payload.title,
        body: payload.body,
    }))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let affected = state
        .store
        .delete(&id)
        .await
        .map_err(AppError::store(StoreAction::Delete))?;
    if affected == 0 {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
