use crate::core::clamp::clamp;
use crate::utils::error::Result;
use crate::utils::validation::{validate_bound_order, validate_finite, Validate};
use serde::{Deserialize, Serialize};

/// A closed interval `[lower, upper]` with finite, ordered edges.
///
/// `Bounds::new` enforces the invariant. Values deserialized from config must
/// go through [`Validate::validate`] before use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        let bounds = Self { lower, upper };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Builds bounds from an unordered pair.
    pub fn from_unordered(a: f64, b: f64) -> Result<Self> {
        if a <= b {
            Self::new(a, b)
        } else {
            Self::new(b, a)
        }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        clamp(value, self.lower, self.upper)
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Where `value` sits relative to the interval. NaN counts as `Within`
    /// because clamping leaves it untouched.
    pub fn position(&self, value: f64) -> Position {
        if value < self.lower {
            Position::Below
        } else if value > self.upper {
            Position::Above
        } else {
            Position::Within
        }
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

impl Validate for Bounds {
    fn validate(&self) -> Result<()> {
        validate_finite("lower", self.lower)?;
        validate_finite("upper", self.upper)?;
        validate_bound_order(self.lower, self.upper)
    }
}

impl std::fmt::Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Below,
    Within,
    Above,
}

/// One clamped row of batch output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClampRecord {
    pub value: f64,
    pub result: f64,
    pub position: Position,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub below: usize,
    pub within: usize,
    pub above: usize,
    pub min_result: Option<f64>,
    pub max_result: Option<f64>,
}

impl BatchSummary {
    pub fn record(&mut self, record: &ClampRecord) {
        self.total += 1;
        match record.position {
            Position::Below => self.below += 1,
            Position::Within => self.within += 1,
            Position::Above => self.above += 1,
        }
        if record.result.is_nan() {
            return;
        }
        self.min_result = Some(match self.min_result {
            Some(min) => min.min(record.result),
            None => record.result,
        });
        self.max_result = Some(match self.max_result {
            Some(max) => max.max(record.result),
            None => record.result,
        });
    }

    /// Number of values that were moved onto a bound.
    pub fn adjusted(&self) -> usize {
        self.below + self.above
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_new_rejects_bad_input() {
        assert!(Bounds::new(0.0, 100.0).is_ok());
        assert!(Bounds::new(10.0, 10.0).is_ok());
        assert!(Bounds::new(100.0, 0.0).is_err());
        assert!(Bounds::new(f64::NAN, 1.0).is_err());
        assert!(Bounds::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_bounds_from_unordered() {
        let bounds = Bounds::from_unordered(100.0, 0.0).unwrap();
        assert_eq!(bounds, Bounds { lower: 0.0, upper: 100.0 });
        assert_eq!(bounds.width(), 100.0);
        assert_eq!(bounds.to_string(), "[0, 100]");
    }

    #[test]
    fn test_position_and_contains() {
        let bounds = Bounds::new(0.0, 100.0).unwrap();
        assert_eq!(bounds.position(-5.0), Position::Below);
        assert_eq!(bounds.position(0.0), Position::Within);
        assert_eq!(bounds.position(100.0), Position::Within);
        assert_eq!(bounds.position(150.0), Position::Above);
        assert!(bounds.contains(50.0));
        assert!(!bounds.contains(100.5));
        assert_eq!(bounds.clamp(150.0), 100.0);
    }

    #[test]
    fn test_summary_counts() {
        let mut summary = BatchSummary::default();
        for (value, result, position) in [
            (-5.0, 0.0, Position::Below),
            (50.0, 50.0, Position::Within),
            (150.0, 100.0, Position::Above),
            (120.0, 100.0, Position::Above),
        ] {
            summary.record(&ClampRecord { value, result, position });
        }
        assert_eq!(summary.total, 4);
        assert_eq!(summary.below, 1);
        assert_eq!(summary.within, 1);
        assert_eq!(summary.above, 2);
        assert_eq!(summary.adjusted(), 3);
        assert_eq!(summary.min_result, Some(0.0));
        assert_eq!(summary.max_result, Some(100.0));
    }
}
