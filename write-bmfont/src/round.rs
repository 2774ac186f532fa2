//! Rounding from font units into whole pixels.

/// Round to the nearest whole pixel, with halfway cases rounded away from
/// zero (so 2.5 becomes 3 and -1.5 becomes -2).
///
/// Values outside the range of the target type saturate, and NaN becomes 0.
pub trait PixelRound<U, T = Self> {
    fn pixel_round(self) -> U;
}

impl PixelRound<i32> for f64 {
    #[inline]
    fn pixel_round(self) -> i32 {
        self.round() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::PixelRound;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0)]
    #[case(0.49, 0)]
    #[case(0.5, 1)]
    #[case(1.5, 2)]
    #[case(2.5, 3)]
    #[case(-0.5, -1)]
    #[case(-1.5, -2)]
    #[case(-1.6, -2)]
    #[case(-25.6, -26)]
    #[case(19.2, 19)]
    fn away_from_zero(#[case] value: f64, #[case] expected: i32) {
        assert_eq!(value.pixel_round(), expected);
    }

    #[test]
    fn saturates() {
        let big: i32 = 1e12_f64.pixel_round();
        assert_eq!(big, i32::MAX);
        let nan: i32 = f64::NAN.pixel_round();
        assert_eq!(nan, 0);
    }
}
