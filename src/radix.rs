use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use crate::error::{Error, Result};

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

/// Decode a digit string written in `base` (2..=36) into an integer.
///
/// Digits are "0"-"9" followed by "a"-"z", case-insensitive, and only the
/// first `base` of them are accepted. There is no sign, whitespace or
/// separator handling: the caller trims its input.
pub fn decode(digits: &str, base: u32) -> Result<BigInt> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(Error::InvalidBase { base });
    }
    if digits.is_empty() {
        return Err(Error::InvalidDigit { found: None, base });
    }

    let mut value = BigUint::zero();
    for c in digits.chars() {
        let digit = c
            .to_digit(base)
            .ok_or(Error::InvalidDigit { found: Some(c), base })?;
        value = value * base + digit;
    }

    Ok(BigInt::from(value))
}
