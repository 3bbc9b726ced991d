//! Van CRUD handlers. The list route honors `?category=` and `?brand=`
//! filters; category wins when both are supplied.

use crate::error::AppError;
use crate::handlers::parse_v4_id;
use crate::models::VanInput;
use crate::response;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Map, Value};

#[derive(Debug, Default, Deserialize)]
pub struct VanListQuery {
    pub category: Option<String>,
    pub brand: Option<String>,
}

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
    let id = parse_v4_id(&id, "van")?;
    let record = state
        .vans
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No van found for ID {}", id)))?;
    Ok(response::with_data(StatusCode::OK, vec![record]))
}

pub async fn get_all(
    State(state): State<AppState>,
    Query(query): Query<VanListQuery>,
) -> Result<Response, AppError> {
    let records = match (&query.category, &query.brand) {
        (Some(category), _) => state.vans.get_by_category(category).await?,
        (None, Some(brand)) => state.vans.get_by_brand(brand).await?,
        (None, None) => state.vans.get_all().await?,
    };
    Ok(response::with_data(StatusCode::OK, records))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<VanInput>, JsonRejection>,
) -> Result<Response, AppError> {
    let input = decode_body(body)?;
    let (rows, id) = state.vans.create(&input).await?;
    if rows == 0 {
        return Err(AppError::NoOp(
            "No rows inserted - possibly data already exists".into(),
        ));
    }
    tracing::info!(van_id = %id, "van created");
    Ok(response::with_message_and_data(
        StatusCode::CREATED,
        "van data inserted successfully",
        json!([{ "van-id": id }]),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<VanInput>, JsonRejection>,
) -> Result<Response, AppError> {
    let id = parse_v4_id(&id, "van")?;
    let input = decode_body(body)?;
    let rows = state.vans.update_full(id, &input).await?;
    refetch(&state, id, rows).await
}

pub async fn update_partial(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Response, AppError> {
    let id = parse_v4_id(&id, "van")?;
    let map = decode_object(body)?;
    let rows = state.vans.update_partial(id, map).await?;
    refetch(&state, id, rows).await
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_v4_id(&id, "van")?;
    let rows = state.vans.delete(id).await?;
    if rows == 0 {
        return Err(AppError::NoOp(
            "No data present for provided van ID or data already deleted".into(),
        ));
    }
    tracing::info!(van_id = %id, "van deleted");
    Ok(StatusCode::NO_CONTENT.into_response())
}

async fn refetch(state: &AppState, id: uuid::Uuid, rows: u64) -> Result<Response, AppError> {
    if rows == 0 {
        return Err(AppError::NoOp("No data present for provided van ID".into()));
    }
    let record = state
        .vans
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No van found for ID {}", id)))?;
    Ok(response::with_data(StatusCode::OK, vec![record]))
}
