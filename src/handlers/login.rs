//! Login: single hard-coded credential check issuing a bearer token.

use crate::auth::{issue_token, TOKEN_TTL_MINUTES};
use crate::error::AppError;
use crate::response;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Response,
    Json,
};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<Credentials>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(credentials) = body
        .map_err(|_| AppError::BadRequest("Invalid request body for authorization".into()))?;

    if credentials.username != state.config.auth_user
        || credentials.password != state.config.auth_pass
    {
        tracing::warn!(username = %credentials.username, "login rejected");
        return Err(AppError::BadRequest(
            "Incorrect username or password for authorization".into(),
        ));
    }

    let token = issue_token(&credentials.username, &state.config.jwt_key)?;
    tracing::info!(username = %credentials.username, "login token issued");
    Ok(response::with_message_and_data(
        StatusCode::CREATED,
        format!(
            "Authorization token generated successfully. Valid for the next {} minutes",
            TOKEN_TTL_MINUTES
        ),
        json!([{ "token": token }]),
    ))
}
