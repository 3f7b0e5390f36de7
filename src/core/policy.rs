use crate::core::clamp::clamp;
use crate::domain::model::Bounds;
use crate::utils::error::{ClampError, Result};
use crate::utils::validation::{validate_bound_order, validate_finite};
use serde::{Deserialize, Serialize};

/// What to do when `lower > upper`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvertedBounds {
    #[default]
    Reject,
    Swap,
}

/// What to do with a non-finite value. Bounds must always be finite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NonFinite {
    #[default]
    Reject,
    /// Infinities are clamped onto the bounds, NaN is returned unchanged.
    Propagate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClampPolicy {
    #[serde(default)]
    pub inverted_bounds: InvertedBounds,
    #[serde(default)]
    pub non_finite: NonFinite,
}

impl ClampPolicy {
    pub fn strict() -> Self {
        Self::default()
    }

    pub fn lenient() -> Self {
        Self {
            inverted_bounds: InvertedBounds::Swap,
            non_finite: NonFinite::Propagate,
        }
    }
}

/// Checked clamp driven by a [`ClampPolicy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Clamper {
    policy: ClampPolicy,
}

impl Clamper {
    pub fn new(policy: ClampPolicy) -> Self {
        Self { policy }
    }

    /// Resolves a raw bound pair into [`Bounds`] under this policy.
    pub fn resolve_bounds(&self, lower: f64, upper: f64) -> Result<Bounds> {
        validate_finite("lower", lower)?;
        validate_finite("upper", upper)?;
        match self.policy.inverted_bounds {
            InvertedBounds::Reject => {
                validate_bound_order(lower, upper)?;
                Bounds::new(lower, upper)
            }
            InvertedBounds::Swap => {
                if lower > upper {
                    tracing::debug!("Swapping inverted bounds ({}, {})", lower, upper);
                }
                Bounds::from_unordered(lower, upper)
            }
        }
    }

    pub fn apply(&self, value: f64, lower: f64, upper: f64) -> Result<f64> {
        let bounds = self.resolve_bounds(lower, upper)?;
        self.apply_bounds(value, &bounds)
    }

    pub fn apply_bounds(&self, value: f64, bounds: &Bounds) -> Result<f64> {
        if !value.is_finite() {
            match self.policy.non_finite {
                NonFinite::Reject => {
                    return Err(ClampError::invalid_argument(
                        "value",
                        value,
                        "Value must be a finite number",
                    ))
                }
                NonFinite::Propagate => {
                    tracing::debug!("Propagating non-finite value {}", value);
                }
            }
        }
        Ok(clamp(value, bounds.lower, bounds.upper))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_policy_rejects() {
        let clamper = Clamper::new(ClampPolicy::strict());
        assert_eq!(clamper.apply(150.0, 0.0, 100.0).unwrap(), 100.0);
        assert!(clamper.apply(5.0, 100.0, 0.0).is_err());
        assert!(clamper.apply(f64::NAN, 0.0, 100.0).is_err());
        assert!(clamper.apply(f64::INFINITY, 0.0, 100.0).is_err());
    }

    #[test]
    fn test_swap_matches_ordered_call() {
        let clamper = Clamper::new(ClampPolicy {
            inverted_bounds: InvertedBounds::Swap,
            non_finite: NonFinite::Reject,
        });
        for value in [-5.0, 0.0, 42.0, 100.0, 150.0] {
            assert_eq!(
                clamper.apply(value, 100.0, 0.0).unwrap(),
                clamper.apply(value, 0.0, 100.0).unwrap()
            );
        }
    }

    #[test]
    fn test_propagate_non_finite() {
        let clamper = Clamper::new(ClampPolicy::lenient());
        assert_eq!(clamper.apply(f64::INFINITY, 0.0, 100.0).unwrap(), 100.0);
        assert_eq!(clamper.apply(f64::NEG_INFINITY, 0.0, 100.0).unwrap(), 0.0);
        assert!(clamper.apply(f64::NAN, 0.0, 100.0).unwrap().is_nan());
    }

    #[test]
    fn test_non_finite_bounds_always_rejected() {
        let clamper = Clamper::new(ClampPolicy::lenient());
        assert!(clamper.apply(1.0, f64::NEG_INFINITY, 100.0).is_err());
        assert!(clamper.apply(1.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_policy_deserializes_lowercase() {
        let policy: ClampPolicy =
            toml::from_str("inverted_bounds = \"swap\"\nnon_finite = \"propagate\"").unwrap();
        assert_eq!(policy, ClampPolicy::lenient());

        let defaults: ClampPolicy = toml::from_str("").unwrap();
        assert_eq!(defaults, ClampPolicy::strict());
    }
}
