use utoipa::OpenApi;

use crate::api::error::ErrorResponse;
use crate::domain::{ChargingWindow, DayMix, MixReport};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::carbon_intensity::get_energy_mix,
        crate::api::carbon_intensity::get_optimal_window,
        crate::api::health::healthz,
    ),
    components(schemas(MixReport, DayMix, ChargingWindow, ErrorResponse)),
    tags((name = "carbon-intensity", description = "GB generation mix and charging windows"))
)]
pub struct ApiDoc;
