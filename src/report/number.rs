//! Number rendering
//!
//! Capability values are shown the way a default C++ output stream prints a
//! `double`: `%g` with six significant digits. Integral values carry no decimal
//! point (`2400`), trailing zeros are dropped (`61.44`) and very large or very small
//! magnitudes switch to exponent notation (`1.23457e+06`, `1e-05`).

use alloc::format;
use core::fmt;

/// Significant digits kept when rendering.
const PRECISION: usize = 6;

/// Displays an `f64` in `%g` notation with six significant digits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct General(pub f64);

impl fmt::Display for General {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;

        if value.is_nan() {
            return f.write_str("nan");
        }
        if value.is_infinite() {
            return f.write_str(if value < 0.0 { "-inf" } else { "inf" });
        }
        if value == 0.0 {
            return f.write_str(if value.is_sign_negative() { "-0" } else { "0" });
        }

        // The decimal exponent must be taken after rounding to PRECISION digits,
        // 999999.7 rounds up to 1e+06.
        let scientific = format!("{:.*e}", PRECISION - 1, value);
        let (mantissa, exponent) = scientific.split_once('e').ok_or(fmt::Error)?;
        let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;

        if exponent < -4 || exponent >= PRECISION as i32 {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(
                f,
                "{}e{}{:02}",
                trim_fraction(mantissa),
                sign,
                exponent.unsigned_abs()
            )
        } else {
            let decimals = (PRECISION as i32 - 1 - exponent) as usize;
            let fixed = format!("{:.*}", decimals, value);
            f.write_str(trim_fraction(&fixed))
        }
    }
}

/// Strips trailing zeros of a fractional part, and the point itself if nothing is left.
fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn g(value: f64) -> alloc::string::String {
        General(value).to_string()
    }

    #[test]
    fn integral_values_have_no_point() {
        assert_eq!(g(1.0), "1");
        assert_eq!(g(2400.0), "2400");
        assert_eq!(g(-10.0), "-10");
        assert_eq!(g(100000.0), "100000");
    }

    #[test]
    fn fractions_drop_trailing_zeros() {
        assert_eq!(g(61.44), "61.44");
        assert_eq!(g(0.25), "0.25");
        assert_eq!(g(-9.5), "-9.5");
        assert_eq!(g(0.0001), "0.0001");
    }

    #[test]
    fn six_significant_digits() {
        assert_eq!(g(0.225001), "0.225001");
        assert_eq!(g(3.14159265), "3.14159");
        assert_eq!(g(0.1 + 0.2), "0.3");
    }

    #[test]
    fn exponent_notation() {
        assert_eq!(g(1e6), "1e+06");
        assert_eq!(g(1234567.0), "1.23457e+06");
        assert_eq!(g(6e9), "6e+09");
        assert_eq!(g(1e-5), "1e-05");
        assert_eq!(g(-2.5e-7), "-2.5e-07");
        assert_eq!(g(999999.7), "1e+06");
        assert_eq!(g(1e100), "1e+100");
    }

    #[test]
    fn special_values() {
        assert_eq!(g(0.0), "0");
        assert_eq!(g(-0.0), "-0");
        assert_eq!(g(f64::NAN), "nan");
        assert_eq!(g(f64::INFINITY), "inf");
        assert_eq!(g(f64::NEG_INFINITY), "-inf");
    }
}
