//! Addition, subtraction, multiplication and division.
//!
//! Every routine here reduces its operands to non-negative magnitudes first;
//! the word loops at the bottom never see a negative fill.

use alloc::borrow::Cow;
use alloc::vec;
use core::cmp;
use core::iter::{Product, Sum};
use core::mem;
use core::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Neg,
};

use crate::{BigInt, BigIntError, Digit, FullOps, DIGIT_BITS};

impl BigInt {
    /// Operand size, in words, below which multiplication falls back to the
    /// schoolbook loop instead of recursing.
    pub const KARATSUBA_THRESHOLD: usize = 32;

    /// Negates itself in place: `!x + 1`.
    pub fn negate(&mut self) {
        self.not_assign();
        self.increment();
    }

    /// Returns the absolute value.
    pub fn abs(&self) -> BigInt {
        if self.sign_ext {
            -self
        } else {
            self.clone()
        }
    }

    /// Returns `-1`, `0` or `1` according to the sign of the value.
    pub fn signum(&self) -> BigInt {
        if self.sign_ext {
            BigInt::minus_one()
        } else if self.is_zero() {
            BigInt::zero()
        } else {
            BigInt::one()
        }
    }

    /// Borrows the magnitude when the value is already non-negative.
    pub(crate) fn magnitude(&self) -> Cow<'_, BigInt> {
        if self.sign_ext {
            Cow::Owned(-self)
        } else {
            Cow::Borrowed(self)
        }
    }

    /// Adds one, rippling the carry up into the fill.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let mut x = BigInt::from(-1);
    /// x.increment();
    /// assert_eq!(x, BigInt::from(0));
    /// ```
    pub fn increment(&mut self) -> &mut BigInt {
        let mut carry = true;
        for d in self.base.iter_mut() {
            let (c, v) = d.full_add(0, carry);
            *d = v;
            carry = c;
            if !carry {
                break;
            }
        }
        if carry {
            // every word was all ones; the carry lands in the fill
            if self.sign_ext {
                self.sign_ext = false;
            } else {
                self.base.push(1);
            }
        }
        self.trim();
        self
    }

    /// Subtracts one, rippling the borrow up into the fill.
    pub fn decrement(&mut self) -> &mut BigInt {
        let mut borrow = true;
        for d in self.base.iter_mut() {
            let (v, b) = d.overflowing_sub(1);
            *d = v;
            borrow = b;
            if !borrow {
                break;
            }
        }
        if borrow {
            // every word was zero; the borrow comes out of the fill
            if self.sign_ext {
                self.base.push(Digit::MAX - 1);
            } else {
                self.sign_ext = true;
            }
        }
        self.trim();
        self
    }

    /// Increments and returns the value held before.
    pub fn post_increment(&mut self) -> BigInt {
        let old = self.clone();
        self.increment();
        old
    }

    /// Decrements and returns the value held before.
    pub fn post_decrement(&mut self) -> BigInt {
        let old = self.clone();
        self.decrement();
        old
    }

    /// Adds a non-negative `other` to a non-negative `self`.
    fn add_magnitude(&mut self, other: &BigInt) {
        debug_assert!(!self.sign_ext && !other.sign_ext);
        if self.base.len() < other.base.len() {
            self.base.resize(other.base.len(), 0);
        }
        let mut carry = false;
        for (i, a) in self.base.iter_mut().enumerate() {
            let b = match other.base.get(i) {
                Some(&b) => b,
                None if carry => 0,
                None => break,
            };
            let (c, v) = (*a).full_add(b, carry);
            *a = v;
            carry = c;
        }
        if carry {
            self.base.push(1);
        }
        self.trim();
    }

    /// Subtracts `other` from `self`, where `self >= other >= 0`.
    fn sub_magnitude(&mut self, other: &BigInt) {
        debug_assert!(!self.sign_ext && !other.sign_ext);
        debug_assert!(self.base.len() >= other.base.len());
        let mut noborrow = true;
        for (i, a) in self.base.iter_mut().enumerate() {
            let b = match other.base.get(i) {
                Some(&b) => b,
                None if noborrow => break,
                None => 0,
            };
            let (c, v) = (*a).full_add(!b, noborrow);
            *a = v;
            noborrow = c;
        }
        debug_assert!(noborrow);
        self.trim();
    }

    /// Adds a digit-sized `other` to a non-negative `self`.
    pub(crate) fn add_small(&mut self, other: Digit) {
        debug_assert!(!self.sign_ext);
        let (mut carry, v) = self.base[0].full_add(other, false);
        self.base[0] = v;
        let mut i = 1;
        while carry {
            if i == self.base.len() {
                self.base.push(1);
                break;
            }
            let (c, v) = self.base[i].full_add(0, carry);
            self.base[i] = v;
            carry = c;
            i += 1;
        }
    }

    /// Multiplies a non-negative `self` by a digit-sized `other`.
    pub(crate) fn mul_small(&mut self, other: Digit) {
        debug_assert!(!self.sign_ext);
        if other == 0 {
            *self = BigInt::zero();
            return;
        }
        let mut carry = 0;
        for a in self.base.iter_mut() {
            let (c, v) = (*a).full_mul(other, carry);
            *a = v;
            carry = c;
        }
        if carry > 0 {
            self.base.push(carry);
        }
        self.trim();
    }

    /// Divides a non-negative `self` by a non-zero digit-sized `other` in place
    /// and returns the remainder.
    pub(crate) fn div_rem_small(&mut self, other: Digit) -> Digit {
        debug_assert!(!self.sign_ext);
        debug_assert!(other > 0);
        let mut borrow = 0;
        for a in self.base.iter_mut().rev() {
            let (q, r) = (*a).full_div_rem(other, borrow);
            *a = q;
            borrow = r;
        }
        self.trim();
        borrow
    }

    /// Splits a non-negative value into its low `at` words and the rest.
    fn split_words(&self, at: usize) -> (BigInt, BigInt) {
        if self.base.len() <= at {
            return (self.clone(), BigInt::zero());
        }
        let (lo, hi) = self.base.split_at(at);
        (BigInt::from_words(lo, false), BigInt::from_words(hi, false))
    }

    /// Multiplies two non-negative values.
    fn mul_magnitude(x: &BigInt, y: &BigInt) -> BigInt {
        debug_assert!(!x.sign_ext && !y.sign_ext);
        let (xl, yl) = (x.base.len(), y.base.len());
        if xl == 1 {
            let mut res = y.clone();
            res.mul_small(x.base[0]);
            return res;
        }
        if yl == 1 {
            let mut res = x.clone();
            res.mul_small(y.base[0]);
            return res;
        }
        if cmp::min(xl, yl) < BigInt::KARATSUBA_THRESHOLD {
            return BigInt::mul_schoolbook(&x.base, &y.base);
        }

        let half = (cmp::max(xl, yl) + 1) / 2;
        log::trace!("karatsuba: {} x {} words, split at {}", xl, yl, half);

        // one operand fits in the low half: split the other one only
        if cmp::min(xl, yl) <= half {
            let (short, long) = if xl <= half { (x, y) } else { (y, x) };
            let (lo, hi) = long.split_words(half);
            let mut res = BigInt::mul_magnitude(short, &lo);
            res.add_magnitude(&(BigInt::mul_magnitude(short, &hi) << (half * DIGIT_BITS)));
            return res;
        }

        let (a, b) = x.split_words(half);
        let (c, d) = y.split_words(half);
        let ac = BigInt::mul_magnitude(&a, &c);
        let bd = BigInt::mul_magnitude(&b, &d);
        let mut abcd = BigInt::mul_magnitude(&(&a + &b), &(&c + &d));
        abcd.sub_magnitude(&ac);
        abcd.sub_magnitude(&bd);

        let mut res = ac;
        res.add_magnitude(&(abcd << (half * DIGIT_BITS)));
        res.add_magnitude(&(bd << (2 * half * DIGIT_BITS)));
        res
    }

    /// Multiplies the digit sequences `aa` and `bb` word by word.
    fn mul_schoolbook(aa: &[Digit], bb: &[Digit]) -> BigInt {
        // the internal routine. works best when aa.len() <= bb.len().
        fn mul_inner(ret: &mut [Digit], aa: &[Digit], bb: &[Digit]) {
            for (i, &a) in aa.iter().enumerate() {
                if a == 0 {
                    continue;
                }
                let mut carry = 0;
                for (j, &b) in bb.iter().enumerate() {
                    let (c, v) = a.full_mul_add(b, ret[i + j], carry);
                    ret[i + j] = v;
                    carry = c;
                }
                ret[i + bb.len()] = carry;
            }
        }

        let mut ret = vec![0; aa.len() + bb.len()];
        if aa.len() < bb.len() {
            mul_inner(&mut ret, aa, bb);
        } else {
            mul_inner(&mut ret, bb, aa);
        }
        let mut res = BigInt { base: ret, sign_ext: false };
        res.trim();
        res
    }

    /// Divides a non-negative `self` by a non-zero non-negative `divisor`,
    /// leaving the remainder in `self` and returning the quotient.
    pub(crate) fn div_rem_magnitude(&mut self, divisor: &BigInt) -> BigInt {
        debug_assert!(!self.sign_ext && !divisor.sign_ext);
        debug_assert!(!divisor.is_zero());

        if divisor.base.len() == 1 {
            let r = self.div_rem_small(divisor.base[0]);
            return mem::replace(self, BigInt::from_small(r));
        }

        let mut quo = BigInt::zero();
        if *self < *divisor {
            return quo;
        }
        log::trace!(
            "binary long division: {} bits by {} bits",
            self.bit_length(),
            divisor.bit_length()
        );

        // Double the divisor until it exceeds the dividend, counting the
        // doublings, then walk back down one bit at a time.
        let mut shift = self.bit_length() - divisor.bit_length();
        let mut d = divisor << shift;
        while *self >= d {
            d.shl_assign_bits(1);
            shift += 1;
        }
        while shift > 0 {
            shift -= 1;
            d.shr_assign_bits(1);
            if *self >= d {
                self.sub_magnitude(&d);
                quo.set_bit(shift);
            }
        }
        quo.trim();
        quo
    }

    /// Divides by `other`, returning the quotient rounded toward zero and the
    /// remainder, which carries the sign of `self`.
    ///
    /// ```
    /// use bigint::{BigInt, BigIntError};
    ///
    /// let (q, r) = BigInt::from(7).div_rem(&BigInt::from(-2)).unwrap();
    /// assert_eq!((q, r), (BigInt::from(-3), BigInt::from(1)));
    /// assert_eq!(BigInt::from(7).div_rem(&BigInt::from(0)), Err(BigIntError::DivisionByZero));
    /// ```
    pub fn div_rem(&self, other: &BigInt) -> Result<(BigInt, BigInt), BigIntError> {
        if other.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        let mut rem = self.magnitude().into_owned();
        let mut quo = rem.div_rem_magnitude(&other.magnitude());
        if self.sign_ext != other.sign_ext {
            quo.negate();
        }
        if self.sign_ext {
            rem.negate();
        }
        Ok((quo, rem))
    }

    /// Truncating division, or `DivisionByZero`.
    pub fn checked_div(&self, other: &BigInt) -> Result<BigInt, BigIntError> {
        self.div_rem(other).map(|(q, _)| q)
    }

    /// Truncating remainder, or `DivisionByZero`.
    pub fn checked_rem(&self, other: &BigInt) -> Result<BigInt, BigIntError> {
        self.div_rem(other).map(|(_, r)| r)
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> BigInt {
        self.negate();
        self
    }
}

impl<'a> Neg for &'a BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        -self.clone()
    }
}

impl<'a> AddAssign<&'a BigInt> for BigInt {
    fn add_assign(&mut self, other: &BigInt) {
        if other.sign_ext {
            // x + -y = x - y
            *self -= &-other;
        } else if self.sign_ext {
            // -x + y = -(x - y)
            self.negate();
            *self -= other;
            self.negate();
        } else {
            self.add_magnitude(other);
        }
    }
}

impl<'a> SubAssign<&'a BigInt> for BigInt {
    fn sub_assign(&mut self, other: &BigInt) {
        if other.sign_ext {
            // x - (-y) = x + y
            *self += &-other;
        } else if self.sign_ext {
            // -x - y = -(x + y)
            self.negate();
            self.add_magnitude(other);
            self.negate();
        } else if *self < *other {
            // x - y = -(y - x)
            let mut res = other.clone();
            res.sub_magnitude(self);
            res.negate();
            *self = res;
        } else {
            self.sub_magnitude(other);
        }
    }
}

impl<'a> MulAssign<&'a BigInt> for BigInt {
    fn mul_assign(&mut self, other: &BigInt) {
        let negative = self.sign_ext != other.sign_ext;
        let mut lhs = mem::take(self);
        if lhs.sign_ext {
            lhs.negate();
        }
        let mut res = BigInt::mul_magnitude(&lhs, &other.magnitude());
        if negative {
            res.negate();
        }
        *self = res;
    }
}

impl<'a> DivAssign<&'a BigInt> for BigInt {
    fn div_assign(&mut self, other: &BigInt) {
        match self.div_rem(other) {
            Ok((q, _)) => *self = q,
            Err(_) => panic!("attempt to divide by zero"),
        }
    }
}

impl<'a> RemAssign<&'a BigInt> for BigInt {
    fn rem_assign(&mut self, other: &BigInt) {
        match self.div_rem(other) {
            Ok((_, r)) => *self = r,
            Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
        }
    }
}

impl_binop!(Add, add, AddAssign, add_assign);
impl_binop!(Sub, sub, SubAssign, sub_assign);
impl_binop!(Mul, mul, MulAssign, mul_assign);
impl_binop!(Div, div, DivAssign, div_assign);
impl_binop!(Rem, rem, RemAssign, rem_assign);

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::zero(), |acc, x| acc + x)
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::one(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::one(), |acc, x| acc * x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NumberTheory;

    fn big(v: i128) -> BigInt {
        BigInt::from(v)
    }

    fn dec(s: &str) -> BigInt {
        match s.parse() {
            Ok(v) => v,
            Err(e) => panic!("bad literal {s:?}: {e}"),
        }
    }

    #[test]
    fn test_add() {
        assert_eq!(big(1) + big(2), big(3));
        assert_eq!(big(-5) + big(3), big(-2));
        assert_eq!(big(5) + big(-7), big(-2));
        assert_eq!(big(-5) + big(-7), big(-12));
        assert_eq!(big(u64::MAX as i128) + big(1), big(1 << 64));
        assert_eq!(
            dec("123456789012345678901234567890") + big(1),
            dec("123456789012345678901234567891")
        );
    }

    #[test]
    fn test_sub() {
        assert_eq!(big(10) - big(2), big(8));
        assert_eq!(big(2) - big(10), big(-8));
        assert_eq!(big(-2) - big(10), big(-12));
        assert_eq!(big(-2) - big(-10), big(8));
        assert_eq!(big(1 << 64) - big(1), big(u64::MAX as i128));
        assert_eq!(
            dec("1000000000000000000000000000000") - big(1),
            dec("999999999999999999999999999999")
        );
    }

    #[test]
    fn test_negate() {
        assert_eq!(-big(0), big(0));
        assert!(!(-big(0)).is_negative());
        assert_eq!(-big(5), big(-5));
        assert_eq!(-big(i64::MIN as i128), big(1 << 63));
        assert_eq!(-big(-(1 << 64)), big(1 << 64));
        assert_eq!(big(-9).abs(), big(9));
        assert_eq!(big(-9).signum(), big(-1));
        assert_eq!(big(0).signum(), big(0));
    }

    #[test]
    fn test_increment_decrement_wrap() {
        let mut x = big(0);
        x.decrement();
        assert_eq!(x, BigInt::minus_one());
        x.increment();
        assert_eq!(x, big(0));

        let mut y = big(u64::MAX as i128);
        y.increment();
        assert_eq!(y, big(1 << 64));
        y.decrement();
        assert_eq!(y, big(u64::MAX as i128));

        let mut z = big(-(1 << 64));
        assert_eq!(z.post_decrement(), big(-(1 << 64)));
        assert_eq!(z, big(-(1 << 64) - 1));
        assert_eq!(z.post_increment(), big(-(1 << 64) - 1));
        assert_eq!(z, big(-(1 << 64)));
    }

    #[test]
    fn test_mul() {
        assert_eq!(big(10) * big(2), big(20));
        assert_eq!(big(-10) * big(2), big(-20));
        assert_eq!(big(-10) * big(-2), big(20));
        assert_eq!(big(0) * big(-2), big(0));
        assert_eq!(
            dec("99999999999999999999") * dec("99999999999999999999"),
            dec("9999999999999999999800000000000000000001")
        );
    }

    #[test]
    fn test_karatsuba_matches_schoolbook() {
        let words: alloc::vec::Vec<Digit> = (0..90u64)
            .map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ (i << 7))
            .collect();
        let x = BigInt::from_words(&words[..75], false);
        let y = BigInt::from_words(&words[20..], false);
        assert_eq!(BigInt::mul_magnitude(&x, &y), BigInt::mul_schoolbook(&x.base, &y.base));

        // unbalanced operands take the single-split path
        let z = BigInt::from_words(&words[..33], false);
        let w = BigInt::from_words(&(0..200u64).collect::<alloc::vec::Vec<_>>(), false);
        assert_eq!(BigInt::mul_magnitude(&z, &w), BigInt::mul_schoolbook(&z.base, &w.base));
    }

    #[test]
    fn test_div_rem() {
        assert_eq!(big(10) / big(2), big(5));
        assert_eq!(big(10) % big(2), big(0));
        assert_eq!(big(-7) / big(2), big(-3));
        assert_eq!(big(-7) % big(2), big(-1));
        assert_eq!(big(7) / big(-2), big(-3));
        assert_eq!(big(7) % big(-2), big(1));
        assert_eq!(big(-7) / big(-2), big(3));
        assert_eq!(big(-7) % big(-2), big(-1));
        assert_eq!(big(3) / big(1 << 70), big(0));
        assert_eq!(big(3) % big(-(1 << 70)), big(3));
    }

    #[test]
    fn test_div_rem_multi_word() {
        let x = dec("9999999999999999999800000000000000000001");
        let y = dec("99999999999999999999");
        assert_eq!(x.div_rem(&y), Ok((y.clone(), big(0))));
        let (q, r) = (&x + big(17)).div_rem(&-&y).unwrap();
        assert_eq!(q, -&y);
        assert_eq!(r, big(17));
        let (q, r) = big(-(1 << 120) - 5).div_rem(&big(1 << 64)).unwrap();
        assert_eq!(q, big(-(1 << 56)));
        assert_eq!(r, big(-5));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(big(1).div_rem(&big(0)), Err(BigIntError::DivisionByZero));
        assert_eq!(big(1).checked_div(&big(0)), Err(BigIntError::DivisionByZero));
        assert_eq!(big(1).checked_rem(&big(0)), Err(BigIntError::DivisionByZero));
        assert_eq!(big(9).checked_rem(&big(4)), Ok(big(1)));
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_div_operator_panics_on_zero() {
        let _ = big(1) / big(0);
    }

    #[test]
    fn test_sum_product() {
        let xs = [big(3), big(-4), big(5)];
        assert_eq!(xs.iter().sum::<BigInt>(), big(4));
        assert_eq!(xs.iter().product::<BigInt>(), big(-60));
        assert!(xs.iter().product::<BigInt>().is_even());
    }

    #[test]
    fn test_primitive_rhs() {
        assert_eq!(big(5) + 3, big(8));
        assert_eq!(big(5) * -3, big(-15));
        let mut x = big(100);
        x %= 7;
        assert_eq!(x, big(2));
    }
}
