use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    api::error::ApiError,
    domain::{ChargingWindow, MixReport},
    service::AppState,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/energy-mix", get(get_energy_mix))
        .route("/optimal-window", get(get_optimal_window))
        .with_state(state)
}

/// GET /api/carbon-intensity/energy-mix - Average mix for today and the next two days
#[cfg_attr(
    feature = "swagger",
    utoipa::path(
        get,
        path = "/api/carbon-intensity/energy-mix",
        tag = "carbon-intensity",
        responses(
            (status = 200, body = MixReport),
            (status = 500, body = crate::api::error::ErrorResponse),
        )
    )
)]
pub async fn get_energy_mix(State(st): State<AppState>) -> Result<Json<MixReport>, ApiError> {
    Ok(Json(st.service.average_energy_mix().await?))
}

#[cfg_attr(feature = "swagger", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "swagger", into_params(parameter_in = Query))]
#[derive(Debug, Deserialize, Validate)]
pub struct WindowQuery {
    /// Charging duration in whole hours (1 - 6)
    #[serde(default)]
    #[validate(range(min = 1, max = 6, message = "Hours must be between 1 and 6"))]
    pub hours: i64,
}

/// GET /api/carbon-intensity/optimal-window?hours=N - Cleanest N-hour charging window
#[cfg_attr(
    feature = "swagger",
    utoipa::path(
        get,
        path = "/api/carbon-intensity/optimal-window",
        tag = "carbon-intensity",
        params(WindowQuery),
        responses(
            (status = 200, body = ChargingWindow),
            (status = 400, body = crate::api::error::ErrorResponse),
            (status = 500, body = crate::api::error::ErrorResponse),
        )
    )
)]
pub async fn get_optimal_window(
    State(st): State<AppState>,
    query: Result<Query<WindowQuery>, QueryRejection>,
) -> Result<Json<ChargingWindow>, ApiError> {
    let Query(q) = query?;
    q.validate()?;
    let hours = u32::try_from(q.hours)
        .map_err(|_| ApiError::BadRequest(format!("invalid hours: {}", q.hours)))?;
    Ok(Json(st.service.optimal_window(hours).await?))
}
