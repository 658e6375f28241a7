pub mod weatherapi;

pub use weatherapi::WeatherApiClient;

use crate::error::Result;
use crate::models::ForecastDocument;

/// Outcome of a forecast lookup. An unresolved location is a normal value,
/// not an error; transport and parse failures surface as `Err`.
#[derive(Debug, Clone)]
pub enum FetchResult {
    Found(ForecastDocument),
    UnknownLocation,
}

/// Seam between the orchestrator and the concrete weather API.
pub trait ForecastProvider {
    async fn fetch(&self, location: &str) -> Result<FetchResult>;
}
