//! Turning typed text into a factor the engine will accept.

use crate::error::FactorParseError;
use crate::game::FACTORS;

/// Longest input buffer worth keeping; anything longer is out of range anyway.
pub const MAX_INPUT_LEN: usize = 3;

pub fn parse_factor(input: &str) -> Result<u8, FactorParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FactorParseError::Empty);
    }
    if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(FactorParseError::NotANumber);
    }
    let value: u32 = trimmed.parse().map_err(|_| FactorParseError::OutOfRange)?;
    u8::try_from(value)
        .ok()
        .filter(|f| FACTORS.contains(f))
        .ok_or(FactorParseError::OutOfRange)
}
