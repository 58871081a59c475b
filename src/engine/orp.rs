/// ORP (Optimal Reading Position) calculation.
///
/// The ORP is the character the eye fixates on while a word is flashed,
/// sitting slightly left of center. Positions are 1-indexed:
/// - words shorter than 3 characters anchor on their last character
/// - longer words anchor at 35% of their length, rounded up, capped at 5
///
/// So a 3-char word anchors on its 2nd character, an 8-char word on its
/// 3rd, and nothing ever anchors past the 5th no matter how long.
pub fn optimal_reading_position(len: usize) -> usize {
    if len < 3 {
        return len;
    }
    let orp = (len as f64 * 0.35).ceil() as usize;
    orp.min(5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orp_below_three_is_identity() {
        assert_eq!(optimal_reading_position(0), 0);
        assert_eq!(optimal_reading_position(1), 1);
        assert_eq!(optimal_reading_position(2), 2);
    }

    #[test]
    fn test_orp_three_char_word() {
        // ceil(3 * 0.35) = ceil(1.05) = 2
        assert_eq!(optimal_reading_position(3), 2);
    }

    #[test]
    fn test_orp_five_char_word() {
        // ceil(5 * 0.35) = ceil(1.75) = 2
        assert_eq!(optimal_reading_position(5), 2);
    }

    #[test]
    fn test_orp_eight_char_word() {
        // ceil(8 * 0.35) = ceil(2.8) = 3
        assert_eq!(optimal_reading_position(8), 3);
    }

    #[test]
    fn test_orp_twelve_char_word() {
        // ceil(12 * 0.35) = ceil(4.2) = 5
        assert_eq!(optimal_reading_position(12), 5);
    }

    #[test]
    fn test_orp_caps_at_five() {
        assert_eq!(optimal_reading_position(15), 5);
        assert_eq!(optimal_reading_position(40), 5);
        assert_eq!(optimal_reading_position(100), 5);
    }

    #[test]
    fn test_orp_is_monotonic_and_bounded() {
        let mut prev = 0;
        for len in 0..200 {
            let orp = optimal_reading_position(len);
            assert!(orp >= prev, "orp decreased at length {len}");
            if len >= 3 {
                assert!((1..=5).contains(&orp), "orp {orp} out of range at length {len}");
            }
            prev = orp;
        }
    }
}
