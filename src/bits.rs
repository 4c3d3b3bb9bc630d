//! Bitwise operators over the infinite two's-complement encoding.

use core::iter;
use core::ops::{
    BitAnd, BitAndAssign,
    BitOr, BitOrAssign,
    BitXor, BitXorAssign,
    Not,
    Shl, ShlAssign,
    Shr, ShrAssign,
};

use crate::{BigInt, Digit, DIGIT_BITS};

impl BigInt {
    /// Combines `self` and `other` word by word, extending the shorter operand
    /// with its own fill. The result's fill is `op` applied to both fills.
    fn bitwise_assign<F>(&mut self, other: &BigInt, op: F)
    where
        F: Fn(Digit, Digit) -> Digit,
    {
        let self_fill = self.fill();
        let other_fill = other.fill();
        if self.base.len() < other.base.len() {
            self.base.resize(other.base.len(), self_fill);
        }
        for (i, a) in self.base.iter_mut().enumerate() {
            let b = other.base.get(i).copied().unwrap_or(other_fill);
            *a = op(*a, b);
        }
        self.sign_ext = op(self_fill, other_fill) != 0;
        self.trim();
    }

    /// Flips every bit in place, including the fill.
    pub(crate) fn not_assign(&mut self) {
        for d in self.base.iter_mut() {
            *d = !*d;
        }
        self.sign_ext = !self.sign_ext;
        // top != fill still holds after flipping both
        debug_assert!(self.is_canonical());
    }

    /// Multiplies itself by `2^bits`.
    pub(crate) fn shl_assign_bits(&mut self, bits: usize) {
        if self.is_zero() {
            return;
        }
        let digits = bits / DIGIT_BITS;
        let bits = bits % DIGIT_BITS;

        // shift by `bits` bits; the word carried out of the top absorbs the fill
        if bits > 0 {
            let fill = self.fill();
            let mut carry = 0;
            for d in self.base.iter_mut() {
                let overflow = *d >> (DIGIT_BITS - bits);
                *d = (*d << bits) | carry;
                carry = overflow;
            }
            self.base.push(carry | (fill << bits));
        }

        // shift by `digits * digitbits` bits
        if digits > 0 {
            self.base.splice(0..0, iter::repeat(0).take(digits));
        }
        self.trim();
    }

    /// Divides itself by `2^bits`, rounding toward negative infinity.
    pub(crate) fn shr_assign_bits(&mut self, bits: usize) {
        let digits = bits / DIGIT_BITS;
        let bits = bits % DIGIT_BITS;
        let fill = self.fill();

        if digits >= self.base.len() {
            self.base.clear();
            self.base.push(fill);
            return;
        }
        self.base.drain(..digits);

        if bits > 0 {
            let len = self.base.len();
            for i in 0..len {
                let above = if i + 1 < len { self.base[i + 1] } else { fill };
                self.base[i] = (self.base[i] >> bits) | (above << (DIGIT_BITS - bits));
            }
        }
        self.trim();
    }

    /// Returns the `i`-th bit of the two's-complement encoding, where bit 0 is
    /// the least significant one. Bits above the stored words read as the sign.
    pub fn bit(&self, i: usize) -> bool {
        match self.base.get(i / DIGIT_BITS) {
            Some(&d) => (d >> (i % DIGIT_BITS)) & 1 == 1,
            None => self.sign_ext,
        }
    }

    /// Sets bit `i` of a non-negative value.
    pub(crate) fn set_bit(&mut self, i: usize) {
        debug_assert!(!self.sign_ext);
        let d = i / DIGIT_BITS;
        if self.base.len() <= d {
            self.base.resize(d + 1, 0);
        }
        self.base[d] |= 1 << (i % DIGIT_BITS);
    }

    /// Returns the number of one bits, or `None` for negative values, which
    /// have infinitely many.
    pub fn count_ones(&self) -> Option<u64> {
        if self.sign_ext {
            return None;
        }
        Some(self.base.iter().map(|d| d.count_ones() as u64).sum())
    }
}

impl<'a> BitAndAssign<&'a BigInt> for BigInt {
    fn bitand_assign(&mut self, other: &BigInt) {
        self.bitwise_assign(other, |a, b| a & b);
    }
}

impl<'a> BitOrAssign<&'a BigInt> for BigInt {
    fn bitor_assign(&mut self, other: &BigInt) {
        self.bitwise_assign(other, |a, b| a | b);
    }
}

impl<'a> BitXorAssign<&'a BigInt> for BigInt {
    fn bitxor_assign(&mut self, other: &BigInt) {
        self.bitwise_assign(other, |a, b| a ^ b);
    }
}

impl_binop!(BitAnd, bitand, BitAndAssign, bitand_assign);
impl_binop!(BitOr, bitor, BitOrAssign, bitor_assign);
impl_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign);

impl Not for BigInt {
    type Output = BigInt;

    fn not(mut self) -> BigInt {
        self.not_assign();
        self
    }
}

impl<'a> Not for &'a BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        !self.clone()
    }
}

impl ShlAssign<usize> for BigInt {
    fn shl_assign(&mut self, bits: usize) {
        self.shl_assign_bits(bits);
    }
}

impl ShrAssign<usize> for BigInt {
    fn shr_assign(&mut self, bits: usize) {
        self.shr_assign_bits(bits);
    }
}

impl Shl<usize> for BigInt {
    type Output = BigInt;

    fn shl(mut self, bits: usize) -> BigInt {
        self <<= bits;
        self
    }
}

impl<'a> Shl<usize> for &'a BigInt {
    type Output = BigInt;

    fn shl(self, bits: usize) -> BigInt {
        self.clone() << bits
    }
}

impl Shr<usize> for BigInt {
    type Output = BigInt;

    fn shr(mut self, bits: usize) -> BigInt {
        self >>= bits;
        self
    }
}

impl<'a> Shr<usize> for &'a BigInt {
    type Output = BigInt;

    fn shr(self, bits: usize) -> BigInt {
        self.clone() >> bits
    }
}
