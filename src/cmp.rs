use core::cmp::{self, Ordering};

use crate::BigInt;

impl cmp::PartialOrd for BigInt {
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Negative values sort below non-negative ones. Within a sign, canonical
/// values with more words lie further from zero, and equal-length values
/// compare as unsigned words from the top down.
impl cmp::Ord for BigInt {
    fn cmp(&self, other: &BigInt) -> Ordering {
        match (self.sign_ext, other.sign_ext) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (negative, _) => {
                let by_len = self.base.len().cmp(&other.base.len());
                let by_len = if negative { by_len.reverse() } else { by_len };
                by_len.then_with(|| {
                    let lhs = self.base.iter().rev();
                    let rhs = other.base.iter().rev();
                    lhs.cmp(rhs)
                })
            }
        }
    }
}

impl PartialEq<i64> for BigInt {
    fn eq(&self, other: &i64) -> bool {
        *self == BigInt::from(*other)
    }
}

impl PartialOrd<i64> for BigInt {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.cmp(&BigInt::from(*other)))
    }
}
