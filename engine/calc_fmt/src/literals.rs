//! Operand literal text.

use std::fmt::Write;

/// Text of a pushed number.
///
/// Shortest representation that parses back to the same `f64`: whole
/// numbers print without a fraction (`3`), others as needed (`0.1`,
/// `-2.25`). Non-finite values print as `NaN`, `inf`, `-inf`.
pub fn operand_text(value: f64) -> String {
    let mut buf = String::new();
    // Writing to a String is infallible
    let _ = write!(buf, "{value}");
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_have_no_fraction() {
        assert_eq!(operand_text(3.0), "3");
        assert_eq!(operand_text(-12.0), "-12");
        assert_eq!(operand_text(0.0), "0");
    }

    #[test]
    fn fractions_round_trip() {
        assert_eq!(operand_text(0.1), "0.1");
        assert_eq!(operand_text(-2.25), "-2.25");
        let third = 1.0 / 3.0;
        assert_eq!(operand_text(third).parse::<f64>().ok(), Some(third));
    }

    #[test]
    fn non_finite() {
        assert_eq!(operand_text(f64::NAN), "NaN");
        assert_eq!(operand_text(f64::INFINITY), "inf");
        assert_eq!(operand_text(f64::NEG_INFINITY), "-inf");
    }
}
