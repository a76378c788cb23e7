//! Number lexeme scanning and value decoding.
//!
//! Grounded in the RFC 8259 grammar as restated in the specification and
//! in `tests/test_lexer.c`'s exhaustive `lex_number_*` cases (shape
//! rejections, the `u64`/`i64` overflow boundaries, locale independence).
//! The reference `core/lexer.c` never implements this (it is a `TODO`
//! stub), so the algorithm below is original to this port, built directly
//! from the grammar rather than adapted from working C.

use crate::error::ErrorCode;

/// The decoded value of a `Number` token, pre-computed during lexing so
/// consumers never need to re-parse the source slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberValue {
    UInt(u64),
    Int(i64),
    Float(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberToken {
    pub is_integer: bool,
    pub is_negative: bool,
    pub value: NumberValue,
    /// Byte length of the matched lexeme.
    pub length: usize,
}

/// Magnitude of `i64::MIN`, i.e. 2^63.
const INT64_MIN_MAGNITUDE: u64 = 1u64 << 63;

/// Exponent magnitude beyond which the result is unconditionally ±infinity
/// or 0; clamping here keeps the exponent accumulator from overflowing on
/// pathological inputs like `1e999999999999999999`.
const EXPONENT_CLAMP: i32 = 309;

fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Scans a number lexeme starting at `src[0]` (which must be `-` or an
/// ASCII digit) and decodes its value. Returns the token plus byte length
/// on success, or the `ErrorCode` for any grammar violation.
pub fn scan(src: &[u8]) -> Result<NumberToken, ErrorCode> {
    let mut pos = 0usize;
    let is_negative = src[pos] == b'-';
    if is_negative {
        pos += 1;
    }

    let int_start = pos;
    if src.get(pos) == Some(&b'0') {
        pos += 1;
        if src.get(pos).is_some_and(|&b| is_digit(b)) {
            return Err(ErrorCode::InvalidNumber); // "01", "-00", ...
        }
    } else if src.get(pos).is_some_and(|&b| is_digit(b)) {
        while src.get(pos).is_some_and(|&b| is_digit(b)) {
            pos += 1;
        }
    } else {
        return Err(ErrorCode::InvalidNumber); // bare "-"
    }
    let int_digits = &src[int_start..pos];

    let mut has_fraction = false;
    let mut frac_digits: &[u8] = &[];
    if src.get(pos) == Some(&b'.') {
        let dot = pos;
        pos += 1;
        let frac_start = pos;
        while src.get(pos).is_some_and(|&b| is_digit(b)) {
            pos += 1;
        }
        if pos == frac_start {
            return Err(ErrorCode::InvalidNumber); // "1." with nothing after the dot
        }
        has_fraction = true;
        frac_digits = &src[frac_start..pos];
        let _ = dot;
    }

    let mut has_exponent = false;
    let mut exp_negative = false;
    let mut exp_digits: &[u8] = &[];
    if matches!(src.get(pos), Some(&b'e') | Some(&b'E')) {
        pos += 1;
        if matches!(src.get(pos), Some(&b'+') | Some(&b'-')) {
            exp_negative = src[pos] == b'-';
            pos += 1;
        }
        let exp_start = pos;
        while src.get(pos).is_some_and(|&b| is_digit(b)) {
            pos += 1;
        }
        if pos == exp_start {
            return Err(ErrorCode::InvalidNumber); // "1e", "1e+", "1e--1" (second '-' isn't a digit)
        }
        has_exponent = true;
        exp_digits = &src[exp_start..pos];
    }

    let is_integer = !has_fraction && !has_exponent;
    let length = pos;

    let value = if is_integer {
        decode_integer(int_digits, is_negative)?
    } else {
        NumberValue::Float(decode_float(int_digits, frac_digits, exp_digits, exp_negative, is_negative))
    };

    Ok(NumberToken { is_integer, is_negative, value, length })
}

fn decode_integer(digits: &[u8], is_negative: bool) -> Result<NumberValue, ErrorCode> {
    let mut magnitude: u64 = 0;
    for &d in digits {
        let digit = (d - b'0') as u64;
        magnitude = magnitude
            .checked_mul(10)
            .and_then(|m| m.checked_add(digit))
            .ok_or(ErrorCode::NumberOverflow)?;
    }

    if is_negative {
        if magnitude > INT64_MIN_MAGNITUDE {
            return Err(ErrorCode::NumberOverflow);
        }
        // Two's-complement negation; magnitude == 2^63 maps to i64::MIN.
        let value = (magnitude as i128).wrapping_neg() as i64;
        Ok(NumberValue::Int(value))
    } else {
        Ok(NumberValue::UInt(magnitude))
    }
}

fn decode_float(
    int_digits: &[u8],
    frac_digits: &[u8],
    exp_digits: &[u8],
    exp_negative: bool,
    is_negative: bool,
) -> f64 {
    let mut whole = 0f64;
    for &d in int_digits {
        whole = whole * 10.0 + (d - b'0') as f64;
    }

    let mut frac = 0f64;
    let mut scale = 1f64;
    for &d in frac_digits {
        scale /= 10.0;
        frac += (d - b'0') as f64 * scale;
    }

    let mut exponent: i32 = 0;
    for &d in exp_digits {
        exponent = exponent.saturating_mul(10).saturating_add((d - b'0') as i32);
        if exponent > EXPONENT_CLAMP {
            exponent = EXPONENT_CLAMP;
        }
    }
    if exp_negative {
        exponent = -exponent;
    }

    let mantissa = whole + frac;
    let mut value = mantissa * 10f64.powi(exponent);
    if is_negative {
        value = -value;
    }
    value
}
