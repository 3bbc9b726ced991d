//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("nothing to update")]
    NothingToUpdate,
    /// A mutating statement affected zero rows. Surfaced as 400, not 404:
    /// the store cannot tell "doesn't exist" apart from a no-op write.
    #[error("{0}")]
    NoOp(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("config: {0}")]
    Config(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_)
            | AppError::BadRequest(_)
            | AppError::NothingToUpdate
            | AppError::NoOp(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Db(_) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            // Never leak driver or config detail to the client.
            AppError::Db(e) => {
                tracing::error!(error = %e, "database error");
                "Error occurred while accessing data".to_string()
            }
            AppError::Config(e) => {
                tracing::error!(error = %e, "config error");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        crate::response::with_message(status, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_op_and_validation_map_to_400() {
        assert_eq!(AppError::NoOp("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::Validation("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::NothingToUpdate.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn db_errors_map_to_500() {
        assert_eq!(
            AppError::Db(sqlx::Error::PoolTimedOut).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn unauthorized_maps_to_401() {
        assert_eq!(
            AppError::Unauthorized("x".into()).status(),
            StatusCode::UNAUTHORIZED
        );
    }
}
