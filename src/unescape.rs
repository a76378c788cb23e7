//! Arena-backed JSON string unescaping.
//!
//! Turns a raw JSON string slice (as scanned, unvalidated, by the lexer —
//! see `lexer::scan_string`) into decoded bytes written into an [`Arena`]
//! allocation. Ported from the escape-handling half of `serdec`'s string
//! support; there is no single reference C function this corresponds to
//! one-to-one (the reference's lexer stub never implements escape
//! decoding), so the rule table is grounded directly in the specification
//! and in `tests/test_lexer.c`'s string-escape cases.
//!
//! Equivalent (by contract, not by file) to `string_unescape` in §6.

use crate::arena::Arena;
use crate::error::ErrorCode;
use crate::utf8;

fn hex_value(byte: u8) -> Option<u32> {
    match byte {
        b'0'..=b'9' => Some((byte - b'0') as u32),
        b'a'..=b'f' => Some((byte - b'a' + 10) as u32),
        b'A'..=b'F' => Some((byte - b'A' + 10) as u32),
        _ => None,
    }
}

fn parse_hex4(src: &[u8]) -> Option<u32> {
    if src.len() < 4 {
        return None;
    }
    let mut value = 0u32;
    for &b in &src[..4] {
        value = (value << 4) | hex_value(b)?;
    }
    Some(value)
}

fn is_high_surrogate(v: u32) -> bool {
    (0xD800..=0xDBFF).contains(&v)
}

fn is_low_surrogate(v: u32) -> bool {
    (0xDC00..=0xDFFF).contains(&v)
}

/// Decodes the escapes in `src` (a string token's span, quotes already
/// excluded) into arena-owned bytes. The output allocation is always sized
/// to `src.len()` since every escape either shrinks or preserves the byte
/// count; the returned slice is trimmed to the bytes actually written.
///
/// Returns [`ErrorCode::InvalidEscape`] for any malformed escape: an
/// unrecognized `\<c>`, truncated or non-hex `\uXXXX`, a lone surrogate, or
/// a trailing `\` with nothing left to escape.
pub fn unescape<'a>(arena: &'a Arena, src: &[u8]) -> Result<&'a [u8], ErrorCode> {
    if src.is_empty() {
        return Ok(&[]);
    }

    let out = arena.alloc(src.len())?;
    let mut written = 0usize;
    let mut i = 0usize;

    while i < src.len() {
        let c = src[i];
        if c != b'\\' {
            out[written] = c;
            written += 1;
            i += 1;
            continue;
        }

        i += 1;
        let Some(&esc) = src.get(i) else {
            return Err(ErrorCode::InvalidEscape);
        };

        match esc {
            b'"' | b'\\' | b'/' => {
                out[written] = esc;
                written += 1;
                i += 1;
            }
            b'b' => {
                out[written] = 0x08;
                written += 1;
                i += 1;
            }
            b'f' => {
                out[written] = 0x0C;
                written += 1;
                i += 1;
            }
            b'n' => {
                out[written] = b'\n';
                written += 1;
                i += 1;
            }
            b'r' => {
                out[written] = b'\r';
                written += 1;
                i += 1;
            }
            b't' => {
                out[written] = b'\t';
                written += 1;
                i += 1;
            }
            b'u' => {
                i += 1;
                let first = parse_hex4(&src[i..]).ok_or(ErrorCode::InvalidEscape)?;
                i += 4;

                let cp = if is_high_surrogate(first) {
                    if src.get(i) != Some(&b'\\') || src.get(i + 1) != Some(&b'u') {
                        return Err(ErrorCode::InvalidEscape);
                    }
                    let second = parse_hex4(&src[i + 2..]).ok_or(ErrorCode::InvalidEscape)?;
                    if !is_low_surrogate(second) {
                        return Err(ErrorCode::InvalidEscape);
                    }
                    i += 6;
                    0x10000 + ((first - 0xD800) << 10) + (second - 0xDC00)
                } else if is_low_surrogate(first) {
                    return Err(ErrorCode::InvalidEscape); // lone low surrogate
                } else {
                    first
                };

                let mut cp_bytes = [0u8; 4];
                let n = utf8::encode(cp, &mut cp_bytes);
                debug_assert!(n > 0, "surrogate pairs above always combine into a valid codepoint");
                out[written..written + n].copy_from_slice(&cp_bytes[..n]);
                written += n;
            }
            _ => return Err(ErrorCode::InvalidEscape),
        }
    }

    Ok(&out[..written])
}
