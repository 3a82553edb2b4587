use axum::{http::StatusCode, response::IntoResponse};

/// GET /healthz - Liveness probe
#[cfg_attr(
    feature = "swagger",
    utoipa::path(get, path = "/healthz", responses((status = 200, description = "Service is running")))
)]
pub async fn healthz() -> impl IntoResponse {
    StatusCode::OK
}
