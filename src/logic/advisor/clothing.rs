//! Clothing suggestion from current temperature.
//!
//! Non-overlapping bands, closed on the lower bound and open on the upper:
//! 15.0°C falls in the "comfortable" band, not "light jacket".

pub const MSG_HEAVY_JACKET: &str = "Heavy jacket recommended";
pub const MSG_LIGHT_JACKET: &str = "Light jacket suggested";
pub const MSG_COMFORTABLE: &str = "Comfortable clothes";
pub const MSG_SHORTS: &str = "Shorts & sunscreen!";

/// Upper bound (exclusive) per band, low to high.
const BANDS: &[(f64, &str)] = &[
    (5.0, MSG_HEAVY_JACKET),
    (15.0, MSG_LIGHT_JACKET),
    (25.0, MSG_COMFORTABLE),
];

pub fn clothing_advice(temp_c: f64) -> &'static str {
    BANDS
        .iter()
        .find(|(upper, _)| temp_c < *upper)
        .map(|(_, message)| *message)
        .unwrap_or(MSG_SHORTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_five_is_heavy_jacket() {
        assert_eq!(clothing_advice(-10.0), MSG_HEAVY_JACKET);
        assert_eq!(clothing_advice(4.9), MSG_HEAVY_JACKET);
    }

    #[test]
    fn five_to_fifteen_is_light_jacket() {
        assert_eq!(clothing_advice(5.0), MSG_LIGHT_JACKET);
        assert_eq!(clothing_advice(14.9), MSG_LIGHT_JACKET);
    }

    #[test]
    fn fifteen_to_twentyfive_is_comfortable() {
        // Boundary belongs to the upper band
        assert_eq!(clothing_advice(15.0), MSG_COMFORTABLE);
        assert_eq!(clothing_advice(24.9), MSG_COMFORTABLE);
    }

    #[test]
    fn twentyfive_and_up_is_shorts() {
        assert_eq!(clothing_advice(25.0), MSG_SHORTS);
        assert_eq!(clothing_advice(40.0), MSG_SHORTS);
    }
}
