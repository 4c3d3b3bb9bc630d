//! Conversions between [`BigInt`], primitive integers and digit strings.
//!
//! Decimal text goes through divide-and-conquer on both sides: parsing splits
//! the digit string in half and recombines as `hi * 10^k + lo`, rendering
//! divides by `10^m` and renders both halves. `10^k` is built as `5^k << k`.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::str::FromStr;

use crate::{BigInt, BigIntError, ConversionError, Digit, DIGIT_BITS};

const DIGIT_CHARS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Returns the largest power of `radix` that fits in a digit, plus the exponent.
fn big_radix(radix: u32) -> (Digit, usize) {
    let radix = radix as Digit;
    let mut power = radix;
    let mut exponent = 1;
    while let Some(next) = power.checked_mul(radix) {
        power = next;
        exponent += 1;
    }
    (power, exponent)
}

fn check_radix(radix: u32) -> Result<(), BigIntError> {
    if (2..=36).contains(&radix) {
        Ok(())
    } else {
        Err(BigIntError::InvalidRadix(radix))
    }
}

/// Splits off an optional leading `-` and maps every remaining character to
/// its digit value.
fn digit_values(src: &str, radix: u32) -> Result<(bool, Vec<u8>), ConversionError> {
    let (negative, body, offset) = match src.strip_prefix('-') {
        Some(rest) => (true, rest, 1),
        None => (false, src, 0),
    };
    if body.is_empty() {
        return Err(ConversionError::Empty);
    }
    let digits = body
        .char_indices()
        .map(|(i, c)| match c.to_digit(radix) {
            Some(d) => Ok(d as u8),
            None => Err(ConversionError::InvalidDigit { index: i + offset, found: c }),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok((negative, digits))
}

/// Returns `10^k`.
pub(crate) fn ten_exp(k: usize) -> BigInt {
    BigInt::from_small(5).pow_usize(k) << k
}

/// Parses decimal digit values, most significant first.
fn parse_decimal(digits: &[u8]) -> BigInt {
    if digits.len() <= BigInt::DECIMAL_CHUNK_DIGITS {
        let v = digits.iter().fold(0, |acc: Digit, &d| acc * 10 + d as Digit);
        return BigInt::from_small(v);
    }
    let m = (digits.len() + 1) / 2;
    let (hi, lo) = digits.split_at(m);
    let mut res = parse_decimal(hi);
    res *= &ten_exp(lo.len());
    res += &parse_decimal(lo);
    res
}

/// Upper estimate of the decimal digit count of a `bits`-bit magnitude.
fn decimal_digits_estimate(bits: usize) -> usize {
    // log10(2) ~ 0.30103
    bits * 30103 / 100000 + 1
}

/// Appends the decimal digits of a non-negative `mag`, left-padded with
/// zeros to at least `width` digits.
fn write_decimal(mag: &BigInt, out: &mut String, width: usize) {
    if mag.base.len() == 1 {
        out.push_str(&format!("{:0width$}", mag.base[0], width = width));
        return;
    }
    let m = (decimal_digits_estimate(mag.bit_length()) + 1) / 2;
    log::trace!("decimal render: {} bits split at 10^{}", mag.bit_length(), m);
    let mut lo = mag.clone();
    let hi = lo.div_rem_magnitude(&ten_exp(m));
    if hi.is_zero() {
        write_decimal(&lo, out, width);
    } else {
        write_decimal(&hi, out, width.saturating_sub(m));
        write_decimal(&lo, out, m);
    }
}

impl BigInt {
    /// Largest number of decimal digits that always fits in one word.
    pub const DECIMAL_CHUNK_DIGITS: usize = 19;

    /// Parses an optional leading `-` followed by one or more decimal digits.
    ///
    /// ```
    /// use bigint::{BigInt, ConversionError};
    ///
    /// assert_eq!(BigInt::from_decimal_str("-0042").unwrap(), BigInt::from(-42));
    /// assert_eq!(
    ///     BigInt::from_decimal_str("12a"),
    ///     Err(ConversionError::InvalidDigit { index: 2, found: 'a' })
    /// );
    /// ```
    pub fn from_decimal_str(src: &str) -> Result<BigInt, ConversionError> {
        let (negative, digits) = digit_values(src, 10)?;
        let mut res = parse_decimal(&digits);
        if negative {
            res.negate();
        }
        Ok(res)
    }

    /// Parses an optional leading `-` followed by digits in `radix`
    /// (`2..=36`, letters in either case).
    pub fn from_str_radix(src: &str, radix: u32) -> Result<BigInt, BigIntError> {
        check_radix(radix)?;
        if radix == 10 {
            return Ok(BigInt::from_decimal_str(src)?);
        }
        let (negative, digits) = digit_values(src, radix)?;
        let (_, chunk_len) = big_radix(radix);
        let mut res = BigInt::zero();
        for chunk in digits.chunks(chunk_len) {
            let mut power: Digit = 1;
            let mut value: Digit = 0;
            for &d in chunk {
                value = value * radix as Digit + d as Digit;
                power *= radix as Digit;
            }
            res.mul_small(power);
            res.add_small(value);
        }
        if negative {
            res.negate();
        }
        Ok(res)
    }

    /// Renders the value in decimal, with a leading `-` when negative.
    pub fn to_decimal_string(&self) -> String {
        let mut out = String::new();
        if self.sign_ext {
            out.push('-');
        }
        write_decimal(&self.magnitude(), &mut out, 0);
        out
    }

    /// Renders the magnitude in binary, with a leading `-` when negative.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// assert_eq!(BigInt::from(-6).to_binary_string(), "-110");
    /// assert_eq!(BigInt::from(0).to_binary_string(), "0");
    /// ```
    pub fn to_binary_string(&self) -> String {
        let mut out = String::new();
        if self.sign_ext {
            out.push('-');
        }
        out.push_str(&self.render_magnitude(2));
        out
    }

    /// Renders the value in `radix` (`2..=36`, lowercase letters).
    pub fn to_str_radix(&self, radix: u32) -> Result<String, BigIntError> {
        check_radix(radix)?;
        let mut out = String::new();
        if self.sign_ext {
            out.push('-');
        }
        out.push_str(&self.render_magnitude(radix));
        Ok(out)
    }

    /// Renders the digits of the absolute value in a radix already known to
    /// be in `2..=36`.
    pub(crate) fn render_magnitude(&self, radix: u32) -> String {
        let mut mag = self.magnitude().into_owned();
        if radix == 10 {
            let mut out = String::new();
            write_decimal(&mag, &mut out, 0);
            return out;
        }

        let (big, chunk_len) = big_radix(radix);
        let radix = radix as Digit;
        // least significant first
        let mut digits: Vec<u8> = Vec::new();
        loop {
            let mut r = mag.div_rem_small(big);
            let last = mag.is_zero();
            let mut n = 0;
            while r > 0 || (!last && n < chunk_len) {
                digits.push(DIGIT_CHARS[(r % radix) as usize]);
                r /= radix;
                n += 1;
            }
            if last {
                break;
            }
        }
        if digits.is_empty() {
            digits.push(b'0');
        }
        digits.iter().rev().map(|&c| c as char).collect()
    }

    fn from_i128(v: i128) -> BigInt {
        let bits = v as u128;
        BigInt::from_words(&[bits as Digit, (bits >> DIGIT_BITS) as Digit], v < 0)
    }

    fn from_u128(v: u128) -> BigInt {
        BigInt::from_words(&[v as Digit, (v >> DIGIT_BITS) as Digit], false)
    }

    /// Returns the value as an `i128` if it fits.
    pub fn to_i128(&self) -> Option<i128> {
        if self.base.len() > 2 {
            return None;
        }
        let lo = self.base[0];
        let hi = self.base.get(1).copied().unwrap_or(self.fill());
        let v = (((hi as u128) << DIGIT_BITS) | lo as u128) as i128;
        if (v < 0) == self.sign_ext {
            Some(v)
        } else {
            None
        }
    }

    /// Returns the value as a `u128` if it fits.
    pub fn to_u128(&self) -> Option<u128> {
        if self.sign_ext || self.base.len() > 2 {
            return None;
        }
        let hi = self.base.get(1).copied().unwrap_or(0);
        Some(((hi as u128) << DIGIT_BITS) | self.base[0] as u128)
    }

    /// Returns the value as an `i64` if it fits.
    pub fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|v| i64::try_from(v).ok())
    }

    /// Returns the value as a `u64` if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|v| u64::try_from(v).ok())
    }
}

impl FromStr for BigInt {
    type Err = ConversionError;

    fn from_str(src: &str) -> Result<BigInt, ConversionError> {
        BigInt::from_decimal_str(src)
    }
}

// Conversion traits for primitive integer types
macro_rules! impl_from_primitive {
    ($($Small:ty => $via:ident($Wide:ty),)*) => {$(
        impl From<$Small> for BigInt {
            #[inline]
            fn from(small: $Small) -> BigInt {
                BigInt::$via(small as $Wide)
            }
        }
    )*}
}

impl_from_primitive! {
    i8 => from_i128(i128),
    i16 => from_i128(i128),
    i32 => from_i128(i128),
    i64 => from_i128(i128),
    i128 => from_i128(i128),
    isize => from_i128(i128),
    u8 => from_u128(u128),
    u16 => from_u128(u128),
    u32 => from_u128(u128),
    u64 => from_u128(u128),
    u128 => from_u128(u128),
    usize => from_u128(u128),
}
