//! Router wiring under /api/v1, bearer-token guard on mutating routes, and
//! the process-wide panic boundary.

use crate::auth::require_bearer;
use crate::handlers::{engine, login, van};
use crate::response;
use crate::state::AppState;
use axum::{
    http::StatusCode,
    middleware,
    response::Response,
    routing::{delete, get, patch, post, put},
    Router,
};
use std::any::Any;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

/// Full application router. GET routes and login are public; every mutating
/// route requires a bearer token.
pub fn api_routes(state: AppState) -> Router {
    let public = Router::new()
        .route("/login", post(login::login))
        .route("/engine/:id", get(engine::get_by_id))
        .route("/engines", get(engine::get_all))
        .route("/van/:id", get(van::get_by_id))
        .route("/vans", get(van::get_all));

    let protected = Router::new()
        .route("/engine", post(engine::create))
        .route("/engine/:id", put(engine::update))
        .route("/engine/:id", patch(engine::update_partial))
        .route("/engine/:id", delete(engine::delete))
        .route("/van", post(van::create))
        .route("/van/:id", put(van::update))
        .route("/van/:id", patch(van::update_partial))
        .route("/van/:id", delete(van::delete))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer,
        ));

    Router::new()
        .nest("/api/v1", public.merge(protected))
        .route("/", get(home))
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

async fn home() -> Response {
    response::with_message(StatusCode::OK, "Server is functioning")
}

/// Last-resort boundary: a panicking handler still answers with a 500
/// envelope instead of dropping the connection.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!(panic = %detail, "request handler panicked");
    response::with_message(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Unexpected server error",
    )
}
