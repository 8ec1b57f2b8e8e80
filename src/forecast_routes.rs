use crate::clock::ClockHandle;
use crate::error::{ApiError, ErrorResponse};
use crate::forecast::{ForecastRecord, generate};
use axum::extract::rejection::QueryRejection;
use axum::{
    Router,
    extract::{Json, Query, State},
    routing::get,
};
use serde::Deserialize;
use utoipa::IntoParams;

pub fn routes(clock: ClockHandle) -> Router {
    Router::new()
        .route("/WeatherForecast", get(get_forecast))
        .with_state(clock)
}

#[derive(Deserialize, IntoParams, Debug)]
#[into_params(parameter_in = Query)]
pub struct ForecastQuery {
    /// Accepted and ignored.
    nothing: Option<String>,
}

/// Retrieves a 5-day weather forecast.
///
/// Returns randomly generated weather data including date, temperature, and summary.
#[utoipa::path(
    get,
    path = "/WeatherForecast",
    tag = "WeatherForecast",
    params(ForecastQuery),
    responses(
        (status = 200, description = "Forecast for the next five days", body = [ForecastRecord]),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
pub(crate) async fn get_forecast(
    State(clock): State<ClockHandle>,
    query: Result<Query<ForecastQuery>, QueryRejection>,
) -> Result<Json<Vec<ForecastRecord>>, ApiError> {
    let Query(ForecastQuery { nothing }) = query?;
    if let Some(nothing) = nothing {
        log::trace!("Ignoring query parameter nothing={}", nothing);
    }
    let today = clock.today();
    let forecast = generate(today, &mut rand::rng());
    log::debug!(
        "Generated {} forecast records following {}",
        forecast.len(),
        today
    );
    for record in &forecast {
        log::trace!("{}: {}", record.date, record.summary);
    }
    Ok(Json(forecast))
}
