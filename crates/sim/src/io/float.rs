//! Float text for the generated files.
//!
//! Whole values keep one decimal place (`5.0`, not `5`) so grid values read
//! the same in batch files, manifests and CSVs as in the sweep definitions.
//! Everything else uses the shortest text that parses back to the same
//! value. A zero introgression proportion is therefore written `0.0`.

use std::fmt;

/// `Display` wrapper for a grid value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatText(pub f64);

impl fmt::Display for FloatText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e16 {
            write!(f, "{v:.1}")
        } else {
            write!(f, "{v}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_values_keep_a_decimal() {
        assert_eq!(FloatText(5.0).to_string(), "5.0");
        assert_eq!(FloatText(25.0).to_string(), "25.0");
        assert_eq!(FloatText(0.0).to_string(), "0.0");
        assert_eq!(FloatText(-2.0).to_string(), "-2.0");
    }

    #[test]
    fn test_fractions_are_shortest() {
        assert_eq!(FloatText(2.5).to_string(), "2.5");
        assert_eq!(FloatText(0.00025).to_string(), "0.00025");
        assert_eq!(FloatText(0.031).to_string(), "0.031");
        assert_eq!(FloatText(0.0625).to_string(), "0.0625");
    }

    #[test]
    fn test_text_parses_back() {
        for v in [0.0001, 7.5, 10.0, 0.125, 1e20] {
            assert_eq!(FloatText(v).to_string().parse::<f64>().unwrap(), v);
        }
    }
}
