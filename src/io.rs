//! Whitespace-delimited text adapters over `std::io`.

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{BigInt, ConversionError};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed integer token {token:?}: {source}")]
    Parse {
        token: String,
        #[source]
        source: ConversionError,
    },
}

/// Reads whitespace-delimited decimal tokens from a buffered reader, one
/// line at a time.
///
/// ```
/// use bigint::{io::TokenReader, BigInt};
///
/// let mut reader = TokenReader::new("12  -7\n 99999999999999999999\n".as_bytes());
/// assert_eq!(reader.next_bigint().unwrap(), Some(BigInt::from(12)));
/// assert_eq!(reader.next_bigint().unwrap(), Some(BigInt::from(-7)));
/// assert!(reader.next_bigint().unwrap().is_some());
/// assert_eq!(reader.next_bigint().unwrap(), None);
/// ```
pub struct TokenReader<R> {
    reader: R,
    line: String,
    pos: usize,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> TokenReader<R> {
        TokenReader { reader, line: String::new(), pos: 0 }
    }

    /// Returns the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<String>, io::Error> {
        loop {
            let rest = &self.line[self.pos..];
            if let Some(start) = rest.find(|c: char| !c.is_whitespace()) {
                let token = &rest[start..];
                let len = token.find(char::is_whitespace).unwrap_or(token.len());
                self.pos += start + len;
                return Ok(Some(String::from(&token[..len])));
            }
            self.line.clear();
            self.pos = 0;
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
        }
    }

    /// Reads the next token and parses it as a decimal integer.
    pub fn next_bigint(&mut self) -> Result<Option<BigInt>, IoError> {
        match self.next_token()? {
            None => Ok(None),
            Some(token) => match BigInt::from_decimal_str(&token) {
                Ok(v) => Ok(Some(v)),
                Err(source) => Err(IoError::Parse { token, source }),
            },
        }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> Iterator for TokenReader<R> {
    type Item = Result<BigInt, IoError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_bigint().transpose()
    }
}

/// Writes `value` as its decimal string.
pub fn write_bigint<W: Write>(writer: &mut W, value: &BigInt) -> io::Result<()> {
    writer.write_all(value.to_decimal_string().as_bytes())
}
