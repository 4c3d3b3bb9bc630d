use bigint::{BigInt, BigIntError, ConversionError};

fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn test_add_carries_across_words() {
    let sum = big("123456789012345678901234567890") + big("1");
    assert_eq!(sum.to_decimal_string(), "123456789012345678901234567891");
}

#[test]
fn test_truncating_division() {
    let (q, r) = big("-7").div_rem(&big("2")).unwrap();
    assert_eq!(q.to_decimal_string(), "-3");
    assert_eq!(r.to_decimal_string(), "-1");
}

#[test]
fn test_sub_borrows_across_words() {
    let diff = big("1000000000000000000000000000000") - big("1");
    assert_eq!(diff.to_decimal_string(), "999999999999999999999999999999");
}

#[test]
fn test_square_of_twenty_nines() {
    let x = big("99999999999999999999");
    assert_eq!((&x * &x).to_decimal_string(), "9999999999999999999800000000000000000001");
}

#[test]
fn test_zero_renders_without_sign() {
    assert_eq!(BigInt::from(0).to_decimal_string(), "0");
    assert_eq!((-BigInt::from(0)).to_decimal_string(), "0");
    assert_eq!(big("-0000").to_decimal_string(), "0");
}

#[test]
fn test_errors_are_distinct() {
    assert_eq!("12x".parse::<BigInt>(), Err(ConversionError::InvalidDigit { index: 2, found: 'x' }));
    assert_eq!(big("5").checked_div(&big("0")), Err(BigIntError::DivisionByZero));
    assert_eq!(big("5").to_str_radix(0), Err(BigIntError::InvalidRadix(0)));
    assert_eq!(
        BigInt::from_str_radix("", 16),
        Err(BigIntError::Conversion(ConversionError::Empty))
    );
}

#[test]
fn test_failed_division_leaves_operands_untouched() {
    let x = big("123456789012345678901234567890");
    let zero = BigInt::from(0);
    assert!(x.div_rem(&zero).is_err());
    assert_eq!(x.to_decimal_string(), "123456789012345678901234567890");
}

#[test]
fn test_compound_assignment() {
    let mut x = big("100000000000000000000");
    x += big("1");
    x -= &big("2");
    x *= big("-3");
    assert_eq!(x.to_decimal_string(), "-299999999999999999997");
    x /= big("7");
    assert_eq!(x.to_decimal_string(), "-42857142857142857142");
    x %= big("1000");
    assert_eq!(x.to_decimal_string(), "-142");
    x <<= 70;
    x >>= 69;
    assert_eq!(x, BigInt::from(-284));
    x &= BigInt::from(0xff);
    x |= BigInt::from(0x100);
    x ^= BigInt::from(1);
    assert_eq!(x, BigInt::from((-284i64 & 0xff) | 0x100 ^ 1));
}

#[test]
fn test_pre_and_post_increment() {
    let mut x = BigInt::from(u64::MAX);
    assert_eq!(x.post_increment(), BigInt::from(u64::MAX));
    assert_eq!(x.to_decimal_string(), "18446744073709551616");
    assert_eq!(x.decrement().to_decimal_string(), "18446744073709551615");

    let mut zero = BigInt::from(0);
    zero.decrement();
    assert_eq!(zero, BigInt::minus_one());
    assert_eq!(zero.words(), &[u64::MAX]);
    assert!(zero.is_negative());
}

#[test]
fn test_large_decimal_round_trip() {
    let digits: String = (0..2000).map(|i| char::from(b'0' + ((i * 7 + 3) % 10) as u8)).collect();
    let s = format!("-{}", digits);
    assert_eq!(big(&s).to_decimal_string(), s);
}
