use crate::models::{AdvisorySet, Alert, CurrentConditions, DayForecast, ForecastLocation};
use serde::Serialize;

/// Everything the city screen needs, derived once per successful fetch.
#[derive(Debug, Clone, Serialize)]
pub struct CityView {
    pub location: ForecastLocation,
    pub current: CurrentConditions,
    pub advisories: AdvisorySet,
    /// (time label, temp °C) pairs for the hourly chart, provider order.
    pub hourly: Vec<(String, f64)>,
    /// One entry per forecast day, chronological.
    pub daily: Vec<DayForecast>,
    pub alerts: Vec<Alert>,
}

/// Minimal per-side snapshot for the comparison screen.
#[derive(Debug, Clone, Serialize)]
pub struct CitySnapshot {
    pub name: String,
    pub country: String,
    pub temp_c: f64,
    pub condition_text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompareView {
    pub left: CitySnapshot,
    pub right: CitySnapshot,
}
