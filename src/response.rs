//! Standard `{code, message?, data?}` response envelope helpers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

pub fn envelope<T: Serialize>(
    status: StatusCode,
    message: Option<String>,
    data: Option<T>,
) -> Response {
    (
        status,
        Json(ApiResponse {
            code: status.as_u16(),
            message,
            data,
        }),
    )
        .into_response()
}

/// Success with payload only, e.g. `{"code": 200, "data": [...]}`.
pub fn with_data<T: Serialize>(status: StatusCode, data: T) -> Response {
    envelope(status, None, Some(data))
}

/// Status plus human-readable message, no payload.
pub fn with_message(status: StatusCode, message: impl Into<String>) -> Response {
    envelope::<serde_json::Value>(status, Some(message.into()), None)
}

/// Message and payload together, used by create and login.
pub fn with_message_and_data<T: Serialize>(
    status: StatusCode,
    message: impl Into<String>,
    data: T,
) -> Response {
    envelope(status, Some(message.into()), Some(data))
}
