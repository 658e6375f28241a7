//! Activity suggestion from the current condition description.
//!
//! Case-insensitive substring match, first match wins.

pub const MSG_INDOOR: &str = "Good day for indoor activities";
pub const MSG_OUTDOOR: &str = "Perfect for outdoor sports";
pub const MSG_WINTER: &str = "Great for winter fun";
pub const MSG_WALK: &str = "Nice for a walk";

const RULES: &[(&str, &str)] = &[
    ("rain", MSG_INDOOR),
    ("sun", MSG_OUTDOOR),
    ("snow", MSG_WINTER),
];

pub fn activity_advice(condition_text: &str) -> &'static str {
    let text = condition_text.to_lowercase();
    RULES
        .iter()
        .find(|(needle, _)| text.contains(needle))
        .map(|(_, message)| *message)
        .unwrap_or(MSG_WALK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rain_suggests_indoor() {
        assert_eq!(activity_advice("Light Rain"), MSG_INDOOR);
        assert_eq!(activity_advice("RAIN"), MSG_INDOOR);
    }

    #[test]
    fn sun_suggests_outdoor() {
        assert_eq!(activity_advice("Sunny"), MSG_OUTDOOR);
        assert_eq!(activity_advice("sunny intervals"), MSG_OUTDOOR);
    }

    #[test]
    fn snow_suggests_winter_fun() {
        assert_eq!(activity_advice("Heavy Snow"), MSG_WINTER);
    }

    #[test]
    fn rain_outranks_sun_and_snow() {
        // "rain" is checked first, so a mixed description goes indoor
        assert_eq!(activity_advice("Sunny with rain showers"), MSG_INDOOR);
        assert_eq!(activity_advice("Snow turning to rain"), MSG_INDOOR);
    }

    #[test]
    fn anything_else_suggests_a_walk() {
        assert_eq!(activity_advice("Cloudy"), MSG_WALK);
        assert_eq!(activity_advice(""), MSG_WALK);
    }
}
