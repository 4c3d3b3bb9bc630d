use core::fmt;

use crate::BigInt;

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(!self.sign_ext, "", &self.render_magnitude(10))
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigInt({}, sign_ext: {}, base: [", self, self.sign_ext)?;
        for (i, v) in self.base.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:#018x}", v)?;
        }
        f.write_str("])")
    }
}

// The radix formats print sign and magnitude, like `num_bigint::BigInt`,
// rather than the infinite two's-complement pattern.
impl fmt::Binary for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(!self.sign_ext, "0b", &self.render_magnitude(2))
    }
}

impl fmt::Octal for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(!self.sign_ext, "0o", &self.render_magnitude(8))
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(!self.sign_ext, "0x", &self.render_magnitude(16))
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut digits = self.render_magnitude(16);
        digits.make_ascii_uppercase();
        f.pad_integral(!self.sign_ext, "0x", &digits)
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use crate::BigInt;

    #[test]
    fn test_display() {
        let x = BigInt::from(-1234);
        assert_eq!(format!("{}", x), "-1234");
        assert_eq!(format!("{:>8}", x), "   -1234");
        assert_eq!(format!("{:08}", x), "-0001234");
        assert_eq!(format!("{:+}", BigInt::from(5)), "+5");
        assert_eq!(format!("{}", BigInt::from(1u128 << 100)), "1267650600228229401496703205376");
    }

    #[test]
    fn test_radix_formats() {
        let x = BigInt::from(-255);
        assert_eq!(format!("{:x}", x), "-ff");
        assert_eq!(format!("{:#X}", x), "-0xFF");
        assert_eq!(format!("{:#b}", BigInt::from(5)), "0b101");
        assert_eq!(format!("{:o}", BigInt::from(8)), "10");
        assert_eq!(format!("{:x}", BigInt::from(1) << 64), "10000000000000000");
    }

    #[test]
    fn test_debug_shows_words() {
        assert_eq!(
            format!("{:?}", BigInt::from(-1)),
            "BigInt(-1, sign_ext: true, base: [0xffffffffffffffff])"
        );
    }
}
