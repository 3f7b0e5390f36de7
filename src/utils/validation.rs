use crate::utils::error::{ClampError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ClampError::invalid_argument(
            field_name,
            value,
            "Value must be a finite number",
        ));
    }
    Ok(())
}

/// Rejects `lower > upper`. Unordered pairs (NaN) are left to `validate_finite`.
pub fn validate_bound_order(lower: f64, upper: f64) -> Result<()> {
    if lower > upper {
        return Err(ClampError::invalid_argument(
            "lower",
            lower,
            format!("Lower bound must not exceed upper bound {}", upper),
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ClampError::invalid_argument(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ClampError::MissingConfigError {
        field: field_name.to_string(),
    })
}

/// Parses a textual number, naming the field in the error.
pub fn parse_number(field_name: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| ClampError::invalid_argument(field_name, raw, format!("Not a number: {}", e)))
}
