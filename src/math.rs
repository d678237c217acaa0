//! Math utility functions.

/// Normalize a hue in degrees into the range [0, 360).
pub fn normalize_hue(hue: i32) -> u16 {
    hue.rem_euclid(360) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_into_range() {
        assert_eq!(normalize_hue(0), 0);
        assert_eq!(normalize_hue(359), 359);
        assert_eq!(normalize_hue(360), 0);
        assert_eq!(normalize_hue(540), 180);
        assert_eq!(normalize_hue(-30), 330);
        assert_eq!(normalize_hue(-360), 0);
    }
}
