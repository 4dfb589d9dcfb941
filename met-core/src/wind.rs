//! Wind direction nomenclature.

/// Compass labels at the eight multiples of 45°.
const PRIMARY: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Labels for the half-open bands between two adjacent compass points.
const BETWEEN: [&str; 8] = [
    "N-NE", "NE-E", "E-SE", "SE-S", "S-SW", "SW-W", "W-NW", "NW-N",
];

/// Compass label for a wind direction in whole degrees.
///
/// Angles on a multiple of 45° map to the primary compass point; every other
/// angle falls into the band between its two neighbours (1–44 → "N-NE",
/// 46–89 → "NE-E", and so on). Angles outside `[0, 359]` have no label and
/// return `None`; callers normalize before asking.
pub fn wind_nomenclature(degrees: i32) -> Option<&'static str> {
    if !(0..=359).contains(&degrees) {
        return None;
    }
    let sector = (degrees / 45) as usize;
    if degrees % 45 == 0 {
        Some(PRIMARY[sector])
    } else {
        Some(BETWEEN[sector])
    }
}

#[cfg(test)]
mod tests {
    use super::wind_nomenclature;

    #[test]
    fn test_primary_points() {
        assert_eq!(wind_nomenclature(0), Some("N"));
        assert_eq!(wind_nomenclature(45), Some("NE"));
        assert_eq!(wind_nomenclature(90), Some("E"));
        assert_eq!(wind_nomenclature(135), Some("SE"));
        assert_eq!(wind_nomenclature(180), Some("S"));
        assert_eq!(wind_nomenclature(225), Some("SW"));
        assert_eq!(wind_nomenclature(270), Some("W"));
        assert_eq!(wind_nomenclature(315), Some("NW"));
    }

    #[test]
    fn test_between_bands() {
        assert_eq!(wind_nomenclature(1), Some("N-NE"));
        assert_eq!(wind_nomenclature(44), Some("N-NE"));
        assert_eq!(wind_nomenclature(46), Some("NE-E"));
        assert_eq!(wind_nomenclature(134), Some("E-SE"));
        assert_eq!(wind_nomenclature(316), Some("NW-N"));
        assert_eq!(wind_nomenclature(359), Some("NW-N"));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(wind_nomenclature(360), None);
        assert_eq!(wind_nomenclature(-1), None);
        assert_eq!(wind_nomenclature(720), None);
    }

    #[test]
    fn test_every_angle_has_a_label() {
        for deg in 0..360 {
            assert!(wind_nomenclature(deg).is_some(), "no label for {}", deg);
        }
    }
}
