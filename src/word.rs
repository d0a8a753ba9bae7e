//! Conversion between integer literals and little-endian 32-bit words.

use std::convert::TryFrom;
use std::io::{Read, Write};

use byteorder::{ByteOrder, LittleEndian};

use crate::errors::*;

pub const WORD_LEN: usize = 4;

fn out_of_range(literal: &str) -> Error {
    ErrorKind::OutOfRange(literal.to_string()).into()
}

/// Parses a `0x`/`0X` hexadecimal or plain decimal literal, with an optional
/// leading sign, into a signed value.
///
/// Leading zeros in decimal literals are not treated as octal. A literal
/// whose magnitude does not fit in 64 bits is reported as out of range,
/// not as a parse error.
pub fn parse_literal(literal: &str) -> Result<i64> {
    let trimmed = literal.trim_matches(|c: char| c.is_ascii_whitespace());
    let (negative, unsigned) = if let Some(rest) = trimmed.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = trimmed.strip_prefix('+') {
        (false, rest)
    } else {
        (false, trimmed)
    };

    let (digits, radix) = if unsigned.starts_with("0x") || unsigned.starts_with("0X") {
        (&unsigned[2..], 16)
    } else {
        (unsigned, 10)
    };

    // from_str_radix takes its own sign, so the digits must be bare
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        bail!(ErrorKind::ParseError(literal.to_string()));
    }

    let magnitude = u64::from_str_radix(digits, radix).map_err(|_| out_of_range(literal))?;
    let value = i64::try_from(magnitude).map_err(|_| out_of_range(literal))?;
    let value = if negative { -value } else { value };

    debug!("parsed literal {:?} as {}", literal, value);
    Ok(value)
}

pub fn check_range(value: i64, literal: &str) -> Result<u32> {
    u32::try_from(value).map_err(|_| out_of_range(literal))
}

pub fn encode_word(word: u32) -> [u8; WORD_LEN] {
    let mut buf = [0; WORD_LEN];
    LittleEndian::write_u32(&mut buf, word);
    buf
}

pub fn decode_word(bytes: &[u8; WORD_LEN]) -> u32 {
    LittleEndian::read_u32(bytes)
}

pub fn encode(literal: &str) -> Result<[u8; WORD_LEN]> {
    let value = parse_literal(literal)?;
    let word = check_range(value, literal)?;
    Ok(encode_word(word))
}

/// Same as [`encode`], but fails with `MissingArgument` when no literal was
/// given on the command line.
pub fn encode_arg(program: &str, arg: Option<&str>) -> Result<[u8; WORD_LEN]> {
    match arg {
        Some(literal) => encode(literal),
        None => bail!(ErrorKind::MissingArgument(program.to_string())),
    }
}

pub fn write_word<W: Write>(out: &mut W, bytes: &[u8; WORD_LEN]) -> Result<()> {
    out.write_all(bytes)?;
    out.flush()?;
    Ok(())
}

pub fn print_word<W: Write>(out: &mut W, word: u32) -> Result<()> {
    writeln!(out, "{:#010x}", word)?;
    out.flush()?;
    Ok(())
}

pub fn read_word<R: Read>(input: &mut R) -> Result<u32> {
    let mut bytes = Vec::with_capacity(WORD_LEN);
    input.take(WORD_LEN as u64).read_to_end(&mut bytes)?;

    if bytes.len() != WORD_LEN {
        bail!(ErrorKind::ShortInput(bytes.len()));
    }

    let mut buf = [0; WORD_LEN];
    buf.copy_from_slice(&bytes);
    Ok(decode_word(&buf))
}
