//! Reads two integers `x y` from standard input and prints the result of
//! every operator on them, one per line, in a format a Python script can
//! compare against its own integers.

use std::io::{self, BufWriter, Write};

use bigint::io::{write_bigint, IoError, TokenReader};
use bigint::{BigInt, BigIntError};

#[derive(Debug, thiserror::Error)]
enum RunnerError {
    #[error(transparent)]
    Read(#[from] IoError),
    #[error("expected two integers on standard input")]
    MissingOperand,
    #[error(transparent)]
    Arithmetic(#[from] BigIntError),
    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),
}

fn python_bool(b: bool) -> &'static str {
    if b {
        "True"
    } else {
        "False"
    }
}

fn main() -> Result<(), RunnerError> {
    let stdin = io::stdin();
    let mut reader = TokenReader::new(stdin.lock());
    let x = reader.next_bigint()?.ok_or(RunnerError::MissingOperand)?;
    let y = reader.next_bigint()?.ok_or(RunnerError::MissingOperand)?;

    let quotient = x.checked_div(&y)?;
    // Python's `%` floors, so shift the truncated remainder into y's sign.
    let modulo = (x.checked_rem(&y)? + &y).checked_rem(&y)?;

    let values: [BigInt; 12] = [
        x.clone(),
        y.clone(),
        !&x,
        !&y,
        &x & &y,
        &x | &y,
        &x ^ &y,
        &x + &y,
        &x - &y,
        &x * &y,
        quotient,
        modulo,
    ];

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for v in &values {
        write_bigint(&mut out, v)?;
        writeln!(out)?;
    }
    for b in [x > y, x < y, x >= y, x <= y] {
        writeln!(out, "{}", python_bool(b))?;
    }
    out.flush()?;
    Ok(())
}
