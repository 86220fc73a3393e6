use serde::{Deserialize, Serialize};

/// The two measurement inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    /// Floor to kneecap, inches.
    A,
    /// Mid-thigh circumference, inches.
    B,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::A => "Measurement A (floor to kneecap)",
            Field::B => "Measurement B (mid-thigh circumference)",
        }
    }
}

/// Parses raw field text. Anything that is not a finite positive decimal
/// (empty, garbage, `0`, `-3`, `inf`) reads as absent.
pub fn parse_measurement(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Some(v),
        _ => None,
    }
}

/// Text written back into a field when restoring cached values.
pub fn format_measurement(v: f64) -> String {
    v.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_reads_as_absent() {
        for raw in ["", "   ", "abc", "19in", "0", "-2", "NaN", "inf", "1e999"] {
            assert_eq!(parse_measurement(raw), None, "{raw:?}");
        }
    }

    #[test]
    fn accepts_plain_decimals() {
        assert_eq!(parse_measurement(" 18.5 "), Some(18.5));
        assert_eq!(parse_measurement("21"), Some(21.0));
        assert_eq!(parse_measurement(".5"), Some(0.5));
        assert_eq!(format_measurement(19.0), "19");
        assert_eq!(format_measurement(18.51), "18.51");
    }
}
