use std::io::Cursor;

use bigint::io::{write_bigint, IoError, TokenReader};
use bigint::{BigInt, ConversionError};

#[test]
fn test_reads_tokens_across_lines() {
    let input = "  1 -2\n\n\t340282366920938463463374607431768211456   \n-0\n";
    let values: Vec<BigInt> = TokenReader::new(Cursor::new(input))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(
        values,
        vec![
            BigInt::from(1),
            BigInt::from(-2),
            BigInt::from(1u128 << 64) * BigInt::from(1u128 << 64),
            BigInt::from(0),
        ]
    );
}

#[test]
fn test_empty_input_yields_nothing() {
    let mut reader = TokenReader::new(Cursor::new("   \n \n"));
    assert!(reader.next_bigint().unwrap().is_none());
    assert!(reader.next_token().unwrap().is_none());
}

#[test]
fn test_malformed_token_reports_token() {
    let mut reader = TokenReader::new(Cursor::new("12 3x4 5"));
    assert_eq!(reader.next_bigint().unwrap(), Some(BigInt::from(12)));
    match reader.next_bigint() {
        Err(IoError::Parse { token, source }) => {
            assert_eq!(token, "3x4");
            assert_eq!(source, ConversionError::InvalidDigit { index: 1, found: 'x' });
        }
        other => panic!("expected a parse error, got {:?}", other),
    }
    assert_eq!(reader.next_bigint().unwrap(), Some(BigInt::from(5)));
}

#[test]
fn test_write_decimal() {
    let mut out = Vec::new();
    write_bigint(&mut out, &BigInt::from(-12345)).unwrap();
    out.push(b' ');
    write_bigint(&mut out, &(BigInt::from(1) << 100)).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "-12345 1267650600228229401496703205376");
}
