pub mod activity;
pub mod clothing;
pub mod summary;

pub use activity::activity_advice;
pub use clothing::clothing_advice;
pub use summary::weather_summary;

use crate::models::{Advisory, AdvisoryKind, AdvisorySet, ForecastDocument};

/// Derive all three advisories from a valid forecast document.
///
/// Each classifier is total: a default message always exists, so this never
/// fails. Callers must not invoke it on a not-found lookup.
pub fn derive(doc: &ForecastDocument) -> AdvisorySet {
    let current = &doc.current;
    AdvisorySet {
        summary: Advisory::new(
            AdvisoryKind::Summary,
            weather_summary(current.temp_c, doc.today_rain_chance(), current.wind_kph),
        ),
        clothing: Advisory::new(AdvisoryKind::Clothing, clothing_advice(current.temp_c)),
        activity: Advisory::new(AdvisoryKind::Activity, activity_advice(&current.condition_text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        AirQuality, CurrentConditions, DayForecast, ForecastLocation,
    };
    use chrono::NaiveDate;

    fn document(temp_c: f64, rain_chance: u8, wind_kph: f64, condition: &str) -> ForecastDocument {
        ForecastDocument {
            location: ForecastLocation {
                name: "Paris".into(),
                country: "France".into(),
            },
            current: CurrentConditions {
                temp_c,
                feelslike_c: temp_c,
                humidity: 50.0,
                wind_kph,
                condition_text: condition.into(),
                condition_icon: String::new(),
                air_quality: AirQuality::default(),
            },
            daily: vec![DayForecast {
                date: NaiveDate::from_ymd_opt(2026, 8, 26).unwrap(),
                max_temp_c: temp_c,
                min_temp_c: temp_c - 8.0,
                chance_of_rain_percent: rain_chance,
                condition_icon_url: String::new(),
                hourly: Vec::new(),
            }],
            alerts: Vec::new(),
        }
    }

    #[test]
    fn warm_sunny_day_end_to_end() {
        // 30°C, 20% rain, 10 kph, "Sunny"
        let set = derive(&document(30.0, 20, 10.0, "Sunny"));
        assert_eq!(set.summary.message, summary::MSG_WARM);
        assert_eq!(set.clothing.message, clothing::MSG_SHORTS);
        assert_eq!(set.activity.message, activity::MSG_OUTDOOR);
    }

    #[test]
    fn advisory_set_iterates_in_fixed_order() {
        let set = derive(&document(10.0, 0, 5.0, "Cloudy"));
        let kinds: Vec<_> = set.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![
                AdvisoryKind::Summary,
                AdvisoryKind::Clothing,
                AdvisoryKind::Activity
            ]
        );
    }
}
