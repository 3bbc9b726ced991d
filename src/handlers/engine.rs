//! Engine CRUD handlers.

use crate::error::AppError;
use crate::handlers::parse_v4_id;
use crate::models::EngineInput;
use crate::response;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Map, Value};

fn decode_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    body.map(|Json(v)| v)
        .map_err(|_| AppError::BadRequest("Value type is incorrect".into()))
}

fn decode_object(body: Result<Json<Value>, JsonRejection>) -> Result<Map<String, Value>, AppError> {
    match decode_body(body)? {
        Value::Object(map) => Ok(map),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_v4_id(&id, "engine")?;
    let record = state
        .engines
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No engine found for ID {}", id)))?;
    Ok(response::with_data(StatusCode::OK, vec![record]))
}

pub async fn get_all(State(state): State<AppState>) -> Result<Response, AppError> {
    let records = state.engines.get_all().await?;
    Ok(response::with_data(StatusCode::OK, records))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<EngineInput>, JsonRejection>,
) -> Result<Response, AppError> {
    let input = decode_body(body)?;
    let (rows, id) = state.engines.create(&input).await?;
    if rows == 0 {
        return Err(AppError::NoOp(
            "No rows inserted - possibly data already exists".into(),
        ));
    }
    tracing::info!(engine_id = %id, "engine created");
    Ok(response::with_message_and_data(
        StatusCode::CREATED,
        "engine data inserted successfully",
        json!([{ "id": id }]),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<EngineInput>, JsonRejection>,
) -> Result<Response, AppError> {
    let id = parse_v4_id(&id, "engine")?;
    let input = decode_body(body)?;
    let rows = state.engines.update_full(id, &input).await?;
    refetch(&state, id, rows).await
}

pub async fn update_partial(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Response, AppError> {
    let id = parse_v4_id(&id, "engine")?;
    let map = decode_object(body)?;
    let rows = state.engines.update_partial(id, map).await?;
    refetch(&state, id, rows).await
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_v4_id(&id, "engine")?;
    let rows = state.engines.delete(id).await?;
    if rows == 0 {
        return Err(AppError::NoOp(
            "No data present for provided engine ID or data already deleted".into(),
        ));
    }
    tracing::info!(engine_id = %id, "engine deleted");
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Successful updates answer with the fresh record; zero rows affected is a
/// client error (missing row and no-op write are indistinguishable here).
async fn refetch(state: &AppState, id: uuid::Uuid, rows: u64) -> Result<Response, AppError> {
    if rows == 0 {
        return Err(AppError::NoOp(
            "No data present for provided engine ID".into(),
        ));
    }
    let record = state
        .engines
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No engine found for ID {}", id)))?;
    Ok(response::with_data(StatusCode::OK, vec![record]))
}
