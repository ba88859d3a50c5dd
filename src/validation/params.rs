use crate::core::error::ValidationError;

/// Parse a path-supplied user id.
///
/// Accepts only a non-empty run of ASCII digits that fits in a `u64`. Signs,
/// whitespace and fractional values are rejected rather than coerced.
pub fn parse_user_id(raw: &str) -> Result<u64, ValidationError> {
    let invalid = || ValidationError::InvalidId { raw: raw.to_string() };

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    raw.parse::<u64>().map_err(|_| invalid())
}
