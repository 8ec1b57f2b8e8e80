use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::forecast::{ForecastRecord, Summary};
use crate::forecast_routes;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Weather Forecast API",
        description = "Randomly generated weather forecasts for the coming days."
    ),
    paths(forecast_routes::get_forecast),
    components(schemas(ForecastRecord, Summary, ErrorResponse)),
    tags(
        (name = "WeatherForecast", description = "Five day weather forecasts")
    )
)]
pub struct ApiDoc;
