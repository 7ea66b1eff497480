//! Implementation of std::fmt traits & other stringification functions
//!

use crate::*;
use crate::stdlib::fmt::Write;


impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let abs_int = format_abs_digits(self.digits.as_slice());
        f.pad_integral(self.sign == Sign::Plus, "", &abs_int)
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigInt(\"{}\")", self)
    }
}


/// Write little-endian bigdigits as a decimal string
///
/// The most significant bigdigit is written without padding, the rest
/// are zero-padded to the full width of a bigdigit.
///
fn format_abs_digits(digits: &[u32]) -> String {
    let mut result = String::with_capacity(digits.len() * MAX_DIGITS_PER_BIGDIGIT);

    let mut iter = digits.iter().rev();
    match iter.next() {
        None => {
            result.push('0');
        }
        Some(leading) => {
            // writing into a String never fails
            let _ = write!(result, "{}", leading);
            for digit in iter {
                let _ = write!(result, "{:09}", digit);
            }
        }
    }
    result
}
