//! Routines for parsing values into BigInts

#[cfg(feature = "std")]
use crate::stdlib::{string::String, Vec};

use crate::bigdigit::{BigDigitVec, MAX_DIGITS_PER_BIGDIGIT};
use crate::{ParseBigIntError, Sign};


/// Split decimal string into sign and little-endian bigdigits
///
/// A leading run of '+' and '-' characters sets the sign, each '-'
/// toggling it. Everything after the run must be an ASCII digit.
///
pub(crate) fn parse_decimal_digits(s: &str) -> Result<(Sign, BigDigitVec), ParseBigIntError> {
    let bytes = s.as_bytes();

    let mut sign = Sign::Plus;
    let mut sign_len = 0;
    for &b in bytes {
        match b {
            b'-' => sign = -sign,
            b'+' => {}
            _ => break,
        }
        sign_len += 1;
    }

    let digits = &bytes[sign_len..];
    if digits.is_empty() {
        return Err(ParseBigIntError::Empty);
    }
    if !digits.iter().all(u8::is_ascii_digit) {
        return Err(ParseBigIntError::InvalidDigit);
    }

    let mut result = BigDigitVec::with_capacity(digits.len() / MAX_DIGITS_PER_BIGDIGIT + 1);
    for chunk in digits.rchunks(MAX_DIGITS_PER_BIGDIGIT) {
        let value = chunk.iter().fold(0u32, |acc, &d| acc * 10 + (d - b'0') as u32);
        result.push_significant_digit(value);
    }
    result.strip_significant_zeros();

    Ok((sign, result))
}


/// Read the next token delimited by ASCII whitespace
///
/// Leading whitespace is consumed; reading stops after the first
/// whitespace byte following the token, or at end of input.
///
#[cfg(feature = "std")]
pub(crate) fn read_whitespace_delimited_token<R: std::io::BufRead>(
    reader: &mut R,
) -> Result<String, ParseBigIntError> {
    let mut token = Vec::new();

    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }

        let mut used = 0;
        let mut done = false;
        for &b in buf {
            used += 1;
            if b.is_ascii_whitespace() {
                if !token.is_empty() {
                    done = true;
                    break;
                }
            } else {
                token.push(b);
            }
        }
        reader.consume(used);

        if done {
            break;
        }
    }

    if token.is_empty() {
        return Err(ParseBigIntError::Io(std::io::ErrorKind::UnexpectedEof));
    }

    String::from_utf8(token).map_err(|_| ParseBigIntError::InvalidDigit)
}
