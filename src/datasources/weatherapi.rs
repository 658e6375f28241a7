use crate::config::WeatherApiConfig;
use crate::datasources::{FetchResult, ForecastProvider};
use crate::error::{Result, SkycastError};
use crate::models::{
    AirQuality, Alert, CurrentConditions, DayForecast, ForecastDocument, ForecastLocation,
    HourSample,
};
use chrono::NaiveDate;
use serde::Deserialize;

/// WeatherAPI.com error code for "no matching location found".
const NO_MATCHING_LOCATION: u32 = 1006;

pub struct WeatherApiClient {
    client: reqwest::Client,
    config: WeatherApiConfig,
}

// WeatherAPI.com forecast.json response structures
#[derive(Debug, Deserialize)]
struct WapiForecastResponse {
    location: WapiLocation,
    current: WapiCurrent,
    forecast: WapiForecast,
    #[serde(default)]
    alerts: WapiAlerts,
}

#[derive(Debug, Deserialize)]
struct WapiLocation {
    name: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct WapiCurrent {
    temp_c: f64,
    feelslike_c: f64,
    humidity: f64,
    wind_kph: f64,
    condition: WapiCondition,
    #[serde(default)]
    air_quality: Option<WapiAirQuality>,
}

#[derive(Debug, Deserialize)]
struct WapiCondition {
    text: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct WapiAirQuality {
    #[serde(default)]
    pm2_5: f64,
    #[serde(default)]
    pm10: f64,
    #[serde(default)]
    co: f64,
}

#[derive(Debug, Deserialize)]
struct WapiForecast {
    forecastday: Vec<WapiForecastDay>,
}

#[derive(Debug, Deserialize)]
struct WapiForecastDay {
    date: NaiveDate,
    day: WapiDay,
    #[serde(default)]
    hour: Vec<WapiHour>,
}

#[derive(Debug, Deserialize)]
struct WapiDay {
    maxtemp_c: f64,
    mintemp_c: f64,
    daily_chance_of_rain: u8,
    condition: WapiCondition,
}

#[derive(Debug, Deserialize)]
struct WapiHour {
    /// "YYYY-MM-DD HH:MM"
    time: String,
    temp_c: f64,
}

#[derive(Debug, Default, Deserialize)]
struct WapiAlerts {
    #[serde(default)]
    alert: Vec<WapiAlert>,
}

#[derive(Debug, Deserialize)]
struct WapiAlert {
    headline: String,
}

#[derive(Debug, Deserialize)]
struct WapiErrorEnvelope {
    error: WapiError,
}

#[derive(Debug, Deserialize)]
struct WapiError {
    code: u32,
    message: String,
}

impl WeatherApiClient {
    pub fn new(config: WeatherApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn forecast_url(&self, location: &str) -> String {
        format!(
            "{}/forecast.json?key={}&q={}&days={}&aqi=yes&alerts=yes",
            self.config.base_url, self.config.api_key, location, self.config.lookahead_days
        )
    }

    /// Test connection to the WeatherAPI endpoint
    pub async fn test_connection(&self) -> Result<bool> {
        let url = format!(
            "{}/current.json?key={}&q=London",
            self.config.base_url, self.config.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SkycastError::DataSourceUnavailable(format!("WeatherAPI: {}", e)))?;

        Ok(response.status().is_success())
    }

    fn convert_response(response: WapiForecastResponse) -> ForecastDocument {
        let location = ForecastLocation {
            name: response.location.name,
            country: response.location.country,
        };

        let air_quality = response
            .current
            .air_quality
            .map(|aq| AirQuality {
                pm2_5: aq.pm2_5,
                pm10: aq.pm10,
                co: aq.co,
            })
            .unwrap_or_default();

        let current = CurrentConditions {
            temp_c: response.current.temp_c,
            feelslike_c: response.current.feelslike_c,
            humidity: response.current.humidity,
            wind_kph: response.current.wind_kph,
            condition_text: response.current.condition.text,
            condition_icon: response.current.condition.icon,
            air_quality,
        };

        let daily: Vec<DayForecast> = response
            .forecast
            .forecastday
            .into_iter()
            .enumerate()
            .map(|(i, day)| Self::convert_day(day, i == 0))
            .collect();

        let alerts = response
            .alerts
            .alert
            .into_iter()
            .map(|a| Alert {
                headline: a.headline,
            })
            .collect();

        ForecastDocument {
            location,
            current,
            daily,
            alerts,
        }
    }

    fn convert_day(day: WapiForecastDay, is_today: bool) -> DayForecast {
        // Only today carries the hourly breakdown
        let hourly = if is_today {
            day.hour.into_iter().map(Self::convert_hour).collect()
        } else {
            Vec::new()
        };

        DayForecast {
            date: day.date,
            max_temp_c: day.day.maxtemp_c,
            min_temp_c: day.day.mintemp_c,
            chance_of_rain_percent: day.day.daily_chance_of_rain.min(100),
            condition_icon_url: day.day.condition.icon,
            hourly,
        }
    }

    fn convert_hour(hour: WapiHour) -> HourSample {
        // Provider timestamps are "YYYY-MM-DD HH:MM"; keep the clock part
        let time_label = hour
            .time
            .split(' ')
            .nth(1)
            .unwrap_or(hour.time.as_str())
            .to_string();

        HourSample {
            time_label,
            temp_c: hour.temp_c,
        }
    }
}

impl ForecastProvider for WeatherApiClient {
    /// Fetch a multi-day forecast. Exactly one outbound request per call;
    /// no retries, no caching.
    async fn fetch(&self, location: &str) -> Result<FetchResult> {
        let url = self.forecast_url(location);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SkycastError::DataSourceUnavailable(format!("WeatherAPI: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if let Ok(envelope) = serde_json::from_str::<WapiErrorEnvelope>(&body) {
                if envelope.error.code == NO_MATCHING_LOCATION {
                    tracing::debug!("no location match for {:?}", location);
                    return Ok(FetchResult::UnknownLocation);
                }
                return Err(SkycastError::DataSourceUnavailable(format!(
                    "WeatherAPI error {}: {}",
                    envelope.error.code, envelope.error.message
                )));
            }
            return Err(SkycastError::DataSourceUnavailable(format!(
                "WeatherAPI returned {}: {}",
                status, body
            )));
        }

        let wapi_response: WapiForecastResponse = response.json().await.map_err(|e| {
            SkycastError::DataSourceUnavailable(format!(
                "Failed to parse WeatherAPI response: {}",
                e
            ))
        })?;

        Ok(FetchResult::Found(Self::convert_response(wapi_response)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESPONSE: &str = r#"{
        "location": {"name": "Paris", "country": "France"},
        "current": {
            "temp_c": 30.0,
            "feelslike_c": 31.5,
            "humidity": 40,
            "wind_kph": 10.0,
            "condition": {"text": "Sunny", "icon": "//cdn.weatherapi.com/64x64/day/113.png"},
            "air_quality": {"pm2_5": 8.4, "pm10": 12.1, "co": 230.3}
        },
        "forecast": {"forecastday": [
            {
                "date": "2026-08-26",
                "day": {
                    "maxtemp_c": 32.0,
                    "mintemp_c": 19.0,
                    "daily_chance_of_rain": 20,
                    "condition": {"text": "Sunny", "icon": "//cdn.weatherapi.com/64x64/day/113.png"}
                },
                "hour": [
                    {"time": "2026-08-26 00:00", "temp_c": 20.0},
                    {"time": "2026-08-26 01:00", "temp_c": 19.5}
                ]
            },
            {
                "date": "2026-08-27",
                "day": {
                    "maxtemp_c": 28.0,
                    "mintemp_c": 17.0,
                    "daily_chance_of_rain": 65,
                    "condition": {"text": "Light rain", "icon": "//cdn.weatherapi.com/64x64/day/296.png"}
                },
                "hour": [
                    {"time": "2026-08-27 00:00", "temp_c": 18.0}
                ]
            }
        ]},
        "alerts": {"alert": [{"headline": "Heat advisory in effect"}]}
    }"#;

    #[test]
    fn convert_sample_response() {
        let raw: WapiForecastResponse = serde_json::from_str(SAMPLE_RESPONSE).unwrap();
        let doc = WeatherApiClient::convert_response(raw);

        assert_eq!(doc.location.name, "Paris");
        assert_eq!(doc.location.country, "France");
        assert_eq!(doc.current.temp_c, 30.0);
        assert_eq!(doc.current.condition_text, "Sunny");
        assert_eq!(doc.current.air_quality.pm2_5, 8.4);

        assert_eq!(doc.daily.len(), 2);
        assert_eq!(doc.daily[0].chance_of_rain_percent, 20);
        assert_eq!(doc.daily[1].chance_of_rain_percent, 65);

        // Hourly only on today, with clock-only labels
        assert_eq!(doc.daily[0].hourly.len(), 2);
        assert_eq!(doc.daily[0].hourly[0].time_label, "00:00");
        assert_eq!(doc.daily[0].hourly[1].temp_c, 19.5);
        assert!(doc.daily[1].hourly.is_empty());

        assert_eq!(doc.alerts.len(), 1);
        assert_eq!(doc.alerts[0].headline, "Heat advisory in effect");
    }

    #[test]
    fn missing_air_quality_defaults_to_zero() {
        let trimmed = SAMPLE_RESPONSE.replace(
            r#""air_quality": {"pm2_5": 8.4, "pm10": 12.1, "co": 230.3}"#,
            r#""air_quality": null"#,
        );
        let raw: WapiForecastResponse = serde_json::from_str(&trimmed).unwrap();
        let doc = WeatherApiClient::convert_response(raw);
        assert_eq!(doc.current.air_quality.pm2_5, 0.0);
    }

    #[test]
    fn error_envelope_parses_not_found_code() {
        let body = r#"{"error": {"code": 1006, "message": "No matching location found."}}"#;
        let envelope: WapiErrorEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.error.code, NO_MATCHING_LOCATION);
    }

    #[test]
    fn forecast_url_includes_configured_window() {
        let client = WeatherApiClient::new(WeatherApiConfig {
            api_key: "test_key".into(),
            base_url: "https://api.weatherapi.com/v1".into(),
            lookahead_days: 3,
        });
        let url = client.forecast_url("Paris");
        assert!(url.contains("days=3"));
        assert!(url.contains("q=Paris"));
        assert!(url.contains("aqi=yes"));
        assert!(url.contains("alerts=yes"));
    }
}
