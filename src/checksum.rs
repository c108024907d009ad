//! Check digit computation and validation of EAN-13 values.

use crate::{Ean13, Error};

/// Exclusive upper bound of a 12-digit payload.
pub const PAYLOAD_LIMIT: u64 = 1_000_000_000_000;
/// Exclusive upper bound of a full 13-digit code.
pub const CODE_LIMIT: u64 = 10 * PAYLOAD_LIMIT;

const WEIGHTS: [u64; 2] = [3, 1];

/// Computes the check digit of a 12-digit payload. Positions are numbered
/// from the right starting at 1; odd positions weigh 3, even positions 1.
/// Digits above the 12th position are ignored.
pub const fn checksum(payload: u64) -> u8 {
    let mut sum = 0;
    let mut rest = payload % PAYLOAD_LIMIT;
    let mut i = 0;
    while rest > 0 {
        sum = (sum + (rest % 10) * WEIGHTS[i % 2]) % 10;
        rest /= 10;
        i += 1;
    }
    ((10 - sum) % 10) as u8
}

impl Ean13 {
    /// Builds a code from a payload without its check digit.
    pub const fn from_payload(code12: u64) -> Result<Self, Error> {
        if code12 >= PAYLOAD_LIMIT {
            return Err(Error::OutOfRange { value: code12, limit: PAYLOAD_LIMIT });
        }
        Ok(Self(code12 * 10 + checksum(code12) as u64))
    }

    /// Validates a full code whose last digit is the check digit.
    pub const fn from_full(code13: u64) -> Result<Self, Error> {
        if code13 >= CODE_LIMIT {
            return Err(Error::OutOfRange { value: code13, limit: CODE_LIMIT });
        }
        let expected = checksum(code13 / 10);
        let found = (code13 % 10) as u8;
        if expected != found {
            return Err(Error::ChecksumMismatch { expected, found });
        }
        Ok(Self(code13))
    }

    /// Parses 12 digits (check digit appended) or 13 digits (check digit
    /// validated). Leading zeros are significant.
    pub fn parse(code: &str) -> Result<Self, Error> {
        let bytes = code.as_bytes();
        if !matches!(bytes.len(), 12 | 13) || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(Error::MalformedInput);
        }
        let value = bytes.iter().fold(0u64, |acc, b| acc * 10 + u64::from(b - b'0'));
        if bytes.len() == 12 {
            Self::from_payload(value)
        } else {
            Self::from_full(value)
        }
    }
}

impl core::str::FromStr for Ean13 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
