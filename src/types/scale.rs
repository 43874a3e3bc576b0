//! Export scales.

use std::fmt;

use crate::error::{FigsliceError, Result};

/// Ordered list of positive export scales.
///
/// Always holds at least one value. Duplicates are kept; they render the same
/// files twice.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleSet(Vec<f64>);

impl ScaleSet {
    /// Parse a comma-separated list such as `"2,3"`.
    ///
    /// Entries that do not parse as numbers, are not finite or are not
    /// positive are dropped. Fails when nothing survives.
    pub fn parse(raw: &str) -> Result<Self> {
        let values = raw
            .split(',')
            .filter_map(|part| part.trim().parse::<f64>().ok())
            .collect();
        Self::from_values(values).map_err(|_| invalid_scales(raw))
    }

    /// Build from already-numeric values, applying the same filter as `parse`.
    pub fn from_values(values: Vec<f64>) -> Result<Self> {
        let values: Vec<f64> = values
            .into_iter()
            .filter(|v| v.is_finite() && *v > 0.0)
            .collect();

        if values.is_empty() {
            return Err(invalid_scales(""));
        }

        Ok(Self(values))
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl fmt::Display for ScaleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|s| format_scale(*s)).collect();
        write!(f, "{}", parts.join(","))
    }
}

fn invalid_scales(raw: &str) -> FigsliceError {
    FigsliceError::Config {
        message: if raw.is_empty() {
            "Invalid scales".to_string()
        } else {
            format!("Invalid scales '{}'", raw)
        },
        help: Some("Use positive numbers, for example: --scales 2,3".to_string()),
    }
}

/// Shortest decimal form of a scale, as used in filenames: `2`, `1.5`.
pub fn format_scale(scale: f64) -> String {
    format!("{}", scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        assert_eq!(ScaleSet::parse("2,3").unwrap().as_slice(), &[2.0, 3.0]);
    }

    #[test]
    fn test_parse_single() {
        assert_eq!(ScaleSet::parse("3").unwrap().as_slice(), &[3.0]);
    }

    #[test]
    fn test_parse_all_invalid() {
        let err = ScaleSet::parse("0,-1,abc").unwrap_err();
        assert!(err.to_string().contains("Invalid scales '0,-1,abc'"));
    }

    #[test]
    fn test_parse_drops_invalid_entries() {
        assert_eq!(ScaleSet::parse("1, x ,0,1.5").unwrap().as_slice(), &[1.0, 1.5]);
    }

    #[test]
    fn test_parse_rejects_infinity() {
        assert!(ScaleSet::parse("inf,NaN").is_err());
    }

    #[test]
    fn test_parse_keeps_order_and_duplicates() {
        assert_eq!(ScaleSet::parse("3,1,3").unwrap().as_slice(), &[3.0, 1.0, 3.0]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(ScaleSet::parse("").is_err());
        assert!(ScaleSet::parse(" , ").is_err());
    }

    #[test]
    fn test_from_values() {
        assert_eq!(ScaleSet::from_values(vec![-2.0, 4.0]).unwrap().as_slice(), &[4.0]);
        assert!(ScaleSet::from_values(vec![]).is_err());
    }

    #[test]
    fn test_format_scale() {
        assert_eq!(format_scale(2.0), "2");
        assert_eq!(format_scale(1.5), "1.5");
        assert_eq!(format_scale(0.25), "0.25");
    }

    #[test]
    fn test_display() {
        assert_eq!(ScaleSet::parse("1,1.5,2").unwrap().to_string(), "1,1.5,2");
    }
}
