use crate::utils::error::Result;
use crate::utils::validation::{validate_bound_order, validate_finite};

/// Restricts `value` to the closed interval `[lower, upper]`.
///
/// Returns `lower` when `value < lower`, `upper` when `value > upper`, and
/// `value` otherwise. The caller must ensure `lower <= upper`; if it does not,
/// the lower check wins and the result is not guaranteed to lie between the
/// bounds. Unordered values (NaN) fail both comparisons and come back as-is.
///
/// Use [`try_clamp`] when the inputs are not already known to be valid.
///
/// # Examples
/// ```
/// use bounded_clamp::clamp;
///
/// assert_eq!(clamp(50, 0, 100), 50);
/// assert_eq!(clamp(-5, 0, 100), 0);
/// assert_eq!(clamp(150, 0, 100), 100);
/// assert_eq!(clamp(5, 10, 10), 10);
/// ```
pub fn clamp<T: PartialOrd>(value: T, lower: T, upper: T) -> T {
    if value < lower {
        lower
    } else if value > upper {
        upper
    } else {
        value
    }
}

/// Checked clamp: rejects non-finite inputs and `lower > upper` with
/// `ClampError::InvalidArgument`.
///
/// # Examples
/// ```
/// use bounded_clamp::try_clamp;
///
/// assert_eq!(try_clamp(150.0, 0.0, 100.0).unwrap(), 100.0);
/// assert!(try_clamp(1.0, 10.0, 0.0).is_err());
/// assert!(try_clamp(f64::NAN, 0.0, 1.0).is_err());
/// ```
pub fn try_clamp(value: f64, lower: f64, upper: f64) -> Result<f64> {
    validate_finite("value", value)?;
    validate_finite("lower", lower)?;
    validate_finite("upper", upper)?;
    validate_bound_order(lower, upper)?;
    Ok(clamp(value, lower, upper))
}
