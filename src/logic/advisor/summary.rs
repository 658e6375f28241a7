//! Daily weather narrative.
//!
//! An ordered first-match rule chain: precipitation outranks temperature
//! extremes, which outrank wind, which outranks the neutral default. The
//! order is load-bearing; rules are not commutative.

pub const MSG_RAIN: &str = "High chance of rain today - bring an umbrella!";
pub const MSG_WARM: &str = "It's warm and sunny - stay hydrated!";
pub const MSG_COLD: &str = "Cold conditions - dress warmly!";
pub const MSG_WINDY: &str = "Windy today - hold onto your hat!";
pub const MSG_PLEASANT: &str = "Pleasant weather today";

#[derive(Debug, Clone, Copy)]
struct SummaryInputs {
    temp_c: f64,
    rain_chance: u8,
    wind_kph: f64,
}

type Predicate = fn(&SummaryInputs) -> bool;

const RULES: &[(Predicate, &str)] = &[
    (|i| i.rain_chance > 60, MSG_RAIN),
    (|i| i.temp_c > 25.0, MSG_WARM),
    (|i| i.temp_c < 5.0, MSG_COLD),
    (|i| i.wind_kph > 30.0, MSG_WINDY),
];

/// Select the narrative for current conditions. Total: always returns
/// exactly one message.
pub fn weather_summary(temp_c: f64, rain_chance: u8, wind_kph: f64) -> &'static str {
    let inputs = SummaryInputs {
        temp_c,
        rain_chance,
        wind_kph,
    };
    RULES
        .iter()
        .find(|(matches, _)| matches(&inputs))
        .map(|(_, message)| *message)
        .unwrap_or(MSG_PLEASANT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rain_outranks_everything() {
        // Warm AND windy, but rain chance wins
        assert_eq!(weather_summary(30.0, 61, 40.0), MSG_RAIN);
        assert_eq!(weather_summary(-2.0, 80, 0.0), MSG_RAIN);
    }

    #[test]
    fn rain_threshold_is_exclusive() {
        assert_eq!(weather_summary(10.0, 60, 0.0), MSG_PLEASANT);
        assert_eq!(weather_summary(10.0, 61, 0.0), MSG_RAIN);
    }

    #[test]
    fn warm_outranks_wind() {
        assert_eq!(weather_summary(26.0, 0, 40.0), MSG_WARM);
    }

    #[test]
    fn cold_outranks_wind() {
        assert_eq!(weather_summary(4.0, 0, 40.0), MSG_COLD);
    }

    #[test]
    fn wind_when_temperature_is_mild() {
        assert_eq!(weather_summary(15.0, 0, 31.0), MSG_WINDY);
        assert_eq!(weather_summary(15.0, 0, 30.0), MSG_PLEASANT);
    }

    #[test]
    fn default_is_pleasant() {
        assert_eq!(weather_summary(18.0, 10, 5.0), MSG_PLEASANT);
    }
}
