//! Arbitrary-precision signed integers.
//!
//! A [`BigInt`] is an unbounded two's-complement bit vector. It is stored as a
//! little-endian sequence of 64-bit words plus a single sign fill bit that is
//! conceptually repeated forever above the top word, so bitwise operators and
//! shifts behave on negative values exactly as they do on `i64`.
//!
//! ```
//! use bigint::BigInt;
//!
//! let a: BigInt = "123456789012345678901234567890".parse().unwrap();
//! let b = &a + BigInt::from(1);
//! assert_eq!(b.to_decimal_string(), "123456789012345678901234567891");
//!
//! let (q, r) = BigInt::from(-7).div_rem(&BigInt::from(2)).unwrap();
//! assert_eq!((q, r), (BigInt::from(-3), BigInt::from(-1)));
//! ```

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

use alloc::vec;
use alloc::vec::Vec;

/// Implements the by-value and by-reference forms of a binary operator on
/// top of the `OpAssign<&BigInt>` impl written by hand in each module.
macro_rules! impl_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl $Op<BigInt> for BigInt {
            type Output = BigInt;

            fn $op(mut self, other: BigInt) -> BigInt {
                $OpAssign::$op_assign(&mut self, &other);
                self
            }
        }

        impl<'a> $Op<&'a BigInt> for BigInt {
            type Output = BigInt;

            fn $op(mut self, other: &BigInt) -> BigInt {
                $OpAssign::$op_assign(&mut self, other);
                self
            }
        }

        impl<'a> $Op<BigInt> for &'a BigInt {
            type Output = BigInt;

            fn $op(self, other: BigInt) -> BigInt {
                let mut self_clone = self.clone();
                $OpAssign::$op_assign(&mut self_clone, &other);
                self_clone
            }
        }

        impl<'a, 'b> $Op<&'b BigInt> for &'a BigInt {
            type Output = BigInt;

            fn $op(self, other: &BigInt) -> BigInt {
                let mut self_clone = self.clone();
                $OpAssign::$op_assign(&mut self_clone, other);
                self_clone
            }
        }

        impl $OpAssign<BigInt> for BigInt {
            fn $op_assign(&mut self, other: BigInt) {
                $OpAssign::$op_assign(self, &other);
            }
        }

        impl $Op<i64> for BigInt {
            type Output = BigInt;

            fn $op(mut self, other: i64) -> BigInt {
                $OpAssign::$op_assign(&mut self, &BigInt::from(other));
                self
            }
        }

        impl $OpAssign<i64> for BigInt {
            fn $op_assign(&mut self, other: i64) {
                $OpAssign::$op_assign(self, &BigInt::from(other));
            }
        }
    };
}

mod arith;
mod bits;
mod cmp;
mod convert;
mod error;
mod fmt;
#[cfg(feature = "std")]
pub mod io;

pub use error::{BigIntError, ConversionError};

/// A single storage word.
pub type Digit = u64;
type DoubleDigit = u128;

/// Number of bits in a [`Digit`].
pub const DIGIT_BITS: usize = Digit::BITS as usize;

pub trait NumberTheory {
    fn is_zero(&self) -> bool;
    fn is_even(&self) -> bool;
    fn is_odd(&self) -> bool;

    /// Raises `self` to `exponent` by binary exponentiation.
    fn pow(&self, exponent: u32) -> Self;
}

/// Arithmetic operations required by bignums.
trait FullOps: Sized {
    /// Returns `(carry', v')` such that `carry' * 2^W + v' = self + other + carry`,
    /// where `W` is the number of bits in `Self`.
    fn full_add(self, other: Self, carry: bool) -> (bool /* carry */, Self);

    /// Returns `(carry', v')` such that `carry' * 2^W + v' = self * other + carry`,
    /// where `W` is the number of bits in `Self`.
    fn full_mul(self, other: Self, carry: Self) -> (Self /* carry */, Self);

    /// Returns `(carry', v')` such that `carry' * 2^W + v' = self * other + other2 + carry`,
    /// where `W` is the number of bits in `Self`.
    fn full_mul_add(self, other: Self, other2: Self, carry: Self) -> (Self /* carry */, Self);

    /// Returns `(quo, rem)` such that `borrow * 2^W + self = quo * other + rem`
    /// and `0 <= rem < other`, where `W` is the number of bits in `Self`.
    fn full_div_rem(self, other: Self, borrow: Self) -> (Self /* quotient */, Self /* remainder */);
}

impl FullOps for Digit {
    fn full_add(self, other: Digit, carry: bool) -> (bool, Digit) {
        // this cannot overflow, the output is between 0 and 2*2^nbits - 1
        let (v, carry1) = self.overflowing_add(other);
        let (v, carry2) = v.overflowing_add(carry as Digit);
        (carry1 || carry2, v)
    }

    fn full_mul(self, other: Digit, carry: Digit) -> (Digit, Digit) {
        // this cannot overflow, the output is between 0 and 2^nbits * (2^nbits - 1)
        let v = (self as DoubleDigit) * (other as DoubleDigit) + (carry as DoubleDigit);
        ((v >> DIGIT_BITS) as Digit, v as Digit)
    }

    fn full_mul_add(self, other: Digit, other2: Digit, carry: Digit) -> (Digit, Digit) {
        // this cannot overflow, the output is between 0 and 2^(2*nbits) - 1
        let v = (self as DoubleDigit) * (other as DoubleDigit)
            + (other2 as DoubleDigit)
            + (carry as DoubleDigit);
        ((v >> DIGIT_BITS) as Digit, v as Digit)
    }

    fn full_div_rem(self, other: Digit, borrow: Digit) -> (Digit, Digit) {
        debug_assert!(borrow < other);
        // this cannot overflow, the dividend is between 0 and other * 2^nbits - 1
        let lhs = ((borrow as DoubleDigit) << DIGIT_BITS) | (self as DoubleDigit);
        let rhs = other as DoubleDigit;
        ((lhs / rhs) as Digit, (lhs % rhs) as Digit)
    }
}

/// Heap-allocated arbitrary-precision signed integer.
///
/// The value is the infinite two's-complement bit string
/// `base[0] + base[1] * 2^W + ... + fill * 2^(len*W) * (1 + 2^W + ...)`,
/// where `W` is [`DIGIT_BITS`] and `fill` is all ones when `sign_ext` is set.
///
/// Every value observed outside this crate is canonical: `base` is never
/// empty, and its top word differs from the fill pattern unless it is the only
/// word. Equality is therefore plain structural equality.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    /// Words, least significant first.
    base: Vec<Digit>,
    /// The sign fill bit: `false` for non-negative values, `true` for negative.
    sign_ext: bool,
}

impl BigInt {
    /// Returns zero.
    pub fn zero() -> BigInt {
        BigInt { base: vec![0], sign_ext: false }
    }

    /// Returns one.
    pub fn one() -> BigInt {
        BigInt::from_small(1)
    }

    /// Returns minus one: a single all-ones word with a negative fill.
    pub fn minus_one() -> BigInt {
        BigInt { base: vec![Digit::MAX], sign_ext: true }
    }

    /// Makes a non-negative bignum from one digit.
    pub(crate) fn from_small(v: Digit) -> BigInt {
        BigInt { base: vec![v], sign_ext: false }
    }

    /// Makes a bignum from raw two's-complement words, least significant
    /// first, with `negative_fill` as the sign extension above them.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// assert_eq!(BigInt::from_words(&[u64::MAX, u64::MAX], true), BigInt::from(-1));
    /// assert_eq!(BigInt::from_words(&[], false), BigInt::from(0));
    /// ```
    pub fn from_words(words: &[Digit], negative_fill: bool) -> BigInt {
        let mut value = BigInt { base: words.to_vec(), sign_ext: negative_fill };
        value.trim();
        value
    }

    /// Returns the canonical two's-complement words, least significant first.
    pub fn words(&self) -> &[Digit] {
        &self.base
    }

    /// Returns `true` if the value is below zero.
    pub fn is_negative(&self) -> bool {
        self.sign_ext
    }

    /// Returns `true` if the value is above zero.
    pub fn is_positive(&self) -> bool {
        !self.sign_ext && !self.is_zero()
    }

    /// The word replicated above `base`.
    #[inline]
    pub(crate) fn fill(&self) -> Digit {
        if self.sign_ext {
            Digit::MAX
        } else {
            0
        }
    }

    /// Drops every leading word equal to the fill pattern, keeping at least one.
    ///
    /// Every mutation ends with a call to this.
    pub(crate) fn trim(&mut self) {
        let fill = self.fill();
        while self.base.len() > 1 && self.base[self.base.len() - 1] == fill {
            self.base.pop();
        }
        if self.base.is_empty() {
            self.base.push(fill);
        }
    }

    pub(crate) fn is_canonical(&self) -> bool {
        match self.base.split_last() {
            None => false,
            Some((_, rest)) if rest.is_empty() => true,
            Some((&top, _)) => top != self.fill(),
        }
    }

    /// Returns the number of bits necessary to represent this value, not
    /// counting the sign: the position of the highest bit that differs from the
    /// fill, plus one.
    ///
    /// Zero and minus one both need 0 bits.
    pub fn bit_length(&self) -> usize {
        debug_assert!(self.is_canonical());
        let top = self.base[self.base.len() - 1] ^ self.fill();
        (self.base.len() - 1) * DIGIT_BITS + (DIGIT_BITS - top.leading_zeros() as usize)
    }
}

impl Default for BigInt {
    fn default() -> BigInt {
        BigInt::zero()
    }
}

impl NumberTheory for BigInt {
    fn is_zero(&self) -> bool {
        !self.sign_ext && self.base.len() == 1 && self.base[0] == 0
    }

    // Two's complement keeps the parity of the value in bit 0.
    fn is_even(&self) -> bool {
        self.base[0] & 1 == 0
    }

    fn is_odd(&self) -> bool {
        !self.is_even()
    }

    fn pow(&self, exponent: u32) -> BigInt {
        self.pow_usize(exponent as usize)
    }
}

impl BigInt {
    /// Shorthand for [`NumberTheory::is_zero`] so callers need not import the trait.
    pub fn is_zero(&self) -> bool {
        NumberTheory::is_zero(self)
    }

    pub(crate) fn pow_usize(&self, mut exponent: usize) -> BigInt {
        let mut square = self.clone();
        let mut res = BigInt::one();
        while exponent > 0 {
            if exponent & 1 == 1 {
                res *= &square;
            }
            exponent >>= 1;
            if exponent > 0 {
                square = &square * &square;
            }
        }
        res
    }
}
