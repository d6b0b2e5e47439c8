use crate::limits::FieldLimits;
use crate::request::EncodingRequest;
use crate::{ErrorCode, PixError};

/// Validate a request against the standard BR Code limits.
///
/// Checks run in a fixed order and the first failure is returned:
/// key, name and city presence, then name and city length, then amount finiteness.
///
/// # Errors
///
/// Returns a validation error describing the first violated constraint.
pub fn validate(request: &EncodingRequest) -> Result<(), PixError> {
    validate_with_limits(request, &FieldLimits::STANDARD)
}

/// Validate a request against explicit limits.
///
/// # Errors
///
/// Returns a validation error describing the first violated constraint.
pub fn validate_with_limits(
    request: &EncodingRequest,
    limits: &FieldLimits,
) -> Result<(), PixError> {
    if request.key.is_empty() {
        return Err(PixError::validate(ErrorCode::KeyEmpty, 0));
    }
    if request.name.is_empty() {
        return Err(PixError::validate(ErrorCode::NameEmpty, 0));
    }
    if request.city.is_empty() {
        return Err(PixError::validate(ErrorCode::CityEmpty, 0));
    }

    // Limits count code points, not bytes.
    if request.name.chars().count() > limits.max_name_chars {
        return Err(PixError::validate(
            ErrorCode::NameTooLong,
            limits.max_name_chars,
        ));
    }
    if request.city.chars().count() > limits.max_city_chars {
        return Err(PixError::validate(
            ErrorCode::CityTooLong,
            limits.max_city_chars,
        ));
    }

    if let Some(amount) = request.amount {
        if !amount.is_finite() {
            return Err(PixError::validate(ErrorCode::AmountNotFinite, 0));
        }
    }

    Ok(())
}
