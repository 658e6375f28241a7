//! Flattens the nested forecast structure into ordered sequences for the
//! chart and grid renderers. Order is preserved exactly as the provider
//! supplied it; nothing is sorted or filtered.

use crate::models::{DayForecast, ForecastDocument};

/// (time label, temp °C) pairs for today's hourly breakdown. Mirrors
/// whatever sample count the document carries; empty if the document has no
/// days.
pub fn hourly_series(doc: &ForecastDocument) -> Vec<(String, f64)> {
    doc.today()
        .map(|day| {
            day.hourly
                .iter()
                .map(|h| (h.time_label.clone(), h.temp_c))
                .collect()
        })
        .unwrap_or_default()
}

/// The per-day forecast in chronological order, for the grid renderer.
pub fn daily_series(doc: &ForecastDocument) -> &[DayForecast] {
    &doc.daily
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        AirQuality, CurrentConditions, ForecastLocation, HourSample,
    };
    use chrono::NaiveDate;

    fn document(days: usize, hours: &[(&str, f64)]) -> ForecastDocument {
        let daily = (0..days)
            .map(|i| DayForecast {
                date: NaiveDate::from_ymd_opt(2026, 8, 26).unwrap() + chrono::Days::new(i as u64),
                max_temp_c: 20.0,
                min_temp_c: 10.0,
                chance_of_rain_percent: 0,
                condition_icon_url: String::new(),
                hourly: if i == 0 {
                    hours
                        .iter()
                        .map(|(label, temp)| HourSample {
                            time_label: (*label).into(),
                            temp_c: *temp,
                        })
                        .collect()
                } else {
                    Vec::new()
                },
            })
            .collect();

        ForecastDocument {
            location: ForecastLocation {
                name: "Paris".into(),
                country: "France".into(),
            },
            current: CurrentConditions {
                temp_c: 20.0,
                feelslike_c: 20.0,
                humidity: 50.0,
                wind_kph: 5.0,
                condition_text: "Clear".into(),
                condition_icon: String::new(),
                air_quality: AirQuality::default(),
            },
            daily,
            alerts: Vec::new(),
        }
    }

    #[test]
    fn hourly_series_preserves_order_and_length() {
        let doc = document(1, &[("00:00", 10.0), ("01:00", 9.0)]);
        let series = hourly_series(&doc);
        assert_eq!(
            series,
            vec![("00:00".to_string(), 10.0), ("01:00".to_string(), 9.0)]
        );
    }

    #[test]
    fn hourly_series_mirrors_whatever_count_the_document_has() {
        // Not fixed at 24; a short document gives a short series
        let doc = document(1, &[("06:00", 12.0)]);
        assert_eq!(hourly_series(&doc).len(), 1);
        assert!(hourly_series(&document(1, &[])).is_empty());
    }

    #[test]
    fn daily_series_is_a_length_preserving_passthrough() {
        let doc = document(7, &[]);
        let days = daily_series(&doc);
        assert_eq!(days.len(), 7);
        // Chronological order exactly as received
        for pair in days.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }
}
