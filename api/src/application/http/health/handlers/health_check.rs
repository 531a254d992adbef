use axum::extract::State;
use recipe_chat_core::domain::health::{entities::HealthStatus, ports::HealthCheckService};

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Liveness check",
    responses(
        (status = 200, body = HealthStatus)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Response<HealthStatus> {
    Response::OK(state.service.health())
}
