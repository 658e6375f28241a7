use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Normalized forecast for one location.
///
/// Built fresh for every query and never mutated afterwards: advisories and
/// series are derived from it, then the document is discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastDocument {
    pub location: ForecastLocation,
    pub current: CurrentConditions,
    /// Chronological, `daily[0]` is today. Never empty for a valid document.
    pub daily: Vec<DayForecast>,
    pub alerts: Vec<Alert>,
}

impl ForecastDocument {
    /// Today's forecast. Only today carries hourly samples.
    pub fn today(&self) -> Option<&DayForecast> {
        self.daily.first()
    }

    pub fn today_rain_chance(&self) -> u8 {
        self.today().map(|d| d.chance_of_rain_percent).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastLocation {
    pub name: String,
    pub country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temp_c: f64,
    pub feelslike_c: f64,
    pub humidity: f64,
    pub wind_kph: f64,
    pub condition_text: String,
    pub condition_icon: String,
    pub air_quality: AirQuality,
}

/// Pollutant readings as reported by the provider (µg/m³, CO in mg/m³).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AirQuality {
    pub pm2_5: f64,
    pub pm10: f64,
    pub co: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayForecast {
    pub date: NaiveDate,
    pub max_temp_c: f64,
    pub min_temp_c: f64,
    /// 0-100 as the provider reports it.
    pub chance_of_rain_percent: u8,
    pub condition_icon_url: String,
    /// One sample per hour; populated for the first day only.
    pub hourly: Vec<HourSample>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourSample {
    /// "HH:MM" wall-clock label.
    pub time_label: String,
    pub temp_c: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub headline: String,
}

/// Terminal stand-in for the provider's condition icons.
pub fn condition_symbol(condition_text: &str) -> &'static str {
    let text = condition_text.to_lowercase();
    if text.contains("thunder") {
        "⛈"
    } else if text.contains("snow") || text.contains("sleet") || text.contains("blizzard") {
        "❄"
    } else if text.contains("rain") || text.contains("drizzle") || text.contains("shower") {
        "🌧"
    } else if text.contains("fog") || text.contains("mist") {
        "🌫"
    } else if text.contains("cloud") || text.contains("overcast") {
        "☁"
    } else if text.contains("sun") || text.contains("clear") {
        "☀"
    } else {
        "·"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_symbol_matches_common_descriptions() {
        assert_eq!(condition_symbol("Sunny"), "☀");
        assert_eq!(condition_symbol("Partly cloudy"), "☁");
        assert_eq!(condition_symbol("Light rain shower"), "🌧");
        assert_eq!(condition_symbol("Moderate or heavy snow"), "❄");
        assert_eq!(condition_symbol("Thundery outbreaks possible"), "⛈");
        assert_eq!(condition_symbol("Haze"), "·");
    }

    #[test]
    fn today_is_first_daily_entry() {
        let doc = sample_document();
        assert_eq!(
            doc.today().map(|d| d.date),
            Some(NaiveDate::from_ymd_opt(2026, 8, 26).unwrap())
        );
        assert_eq!(doc.today_rain_chance(), 20);
    }

    fn sample_document() -> ForecastDocument {
        ForecastDocument {
            location: ForecastLocation {
                name: "Paris".into(),
                country: "France".into(),
            },
            current: CurrentConditions {
                temp_c: 22.0,
                feelslike_c: 21.0,
                humidity: 55.0,
                wind_kph: 10.0,
                condition_text: "Sunny".into(),
                condition_icon: String::new(),
                air_quality: AirQuality::default(),
            },
            daily: vec![DayForecast {
                date: NaiveDate::from_ymd_opt(2026, 8, 26).unwrap(),
                max_temp_c: 25.0,
                min_temp_c: 15.0,
                chance_of_rain_percent: 20,
                condition_icon_url: String::new(),
                hourly: Vec::new(),
            }],
            alerts: Vec::new(),
        }
    }
}
