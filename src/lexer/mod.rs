//! Streaming tokenizer: whitespace skip, structural tokens, keywords,
//! string boundary scanning, and number value decoding, with source
//! position tracking and a sticky error.
//!
//! The reference `core/lexer.c` is a dispatch-only `TODO` stub — every
//! behavior below is built from the specification and cross-checked
//! against `tests/test_lexer.c`'s ~150 cases, not adapted from working C.
//!
//! | Rust item           | C equivalent             |
//! |----------------------|-----------------------------|
//! | [`Lexer::new`]        | `serdec_lexer_create`      |
//! | [`Lexer::next`]       | `serdec_lexer_next`        |
//! | [`Lexer::peek`]       | `serdec_lexer_peek`        |
//! | [`Lexer::error`]      | `serdec_lexer_get_error`   |

pub mod number;

use crate::buffer::Buffer;
use crate::error::{ErrorCode, ErrorInfo};
use number::{scan as scan_number, NumberToken};

/// What kind of token this is, with variant-specific payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    OpenObj,
    CloseObj,
    OpenArr,
    CloseArr,
    Colon,
    Comma,
    /// Span excludes the surrounding quotes. `has_escapes` is set whenever
    /// a `\` was seen; escape payload validation is deferred to
    /// [`crate::unescape::unescape`].
    String { has_escapes: bool },
    Number(NumberToken),
    True,
    False,
    Null,
    Eof,
    /// The lexer's error is sticky: once this is returned, every
    /// subsequent call returns `Error` again without advancing.
    Error,
}

/// A lexed token: its kind, its byte offset in the source buffer, and its
/// span (the token's bytes — for strings, with quotes excluded).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub offset: usize,
    pub length: usize,
    pub span: &'a [u8],
}

struct Position {
    offset: usize,
    line: usize,
    column: usize,
}

/// Streaming lexer over a borrowed byte slice. Holds a `&'a [u8]` rather
/// than owning a [`Buffer`], so every [`Token`] it yields carries the
/// caller's own lifetime `'a` — the borrow checker, not a runtime
/// invariant, keeps the buffer alive at least as long as any token
/// derived from it.
pub struct Lexer<'a> {
    data: &'a [u8],
    offset: usize,
    line: usize,
    column: usize,
    error: ErrorInfo,
    peeked: Option<(Token<'a>, Position)>,
}

impl<'a> Lexer<'a> {
    /// Borrows `buf`'s bytes and starts at the beginning of the input.
    /// Equivalent to `serdec_lexer_create`.
    pub fn new(buf: &'a Buffer) -> Self {
        Lexer {
            data: buf.data(),
            offset: 0,
            line: 1,
            column: 1,
            error: ErrorInfo::new(),
            peeked: None,
        }
    }

    /// A stable reference to the recorded error, if any.
    /// Equivalent to `serdec_lexer_get_error`.
    pub fn error(&self) -> &ErrorInfo {
        &self.error
    }

    /// Returns the next token without consuming it: a subsequent `peek`
    /// or `next` call returns an identical token (same kind, offset,
    /// length and payload).
    pub fn peek(&mut self) -> Token<'a> {
        if self.peeked.is_none() {
            let before = Position { offset: self.offset, line: self.line, column: self.column };
            let tok = self.lex_one();
            let after = Position { offset: self.offset, line: self.line, column: self.column };
            // Restore position: `next()` will redo the advance from `before`.
            self.offset = before.offset;
            self.line = before.line;
            self.column = before.column;
            self.peeked = Some((tok, after));
        }
        self.peeked.as_ref().unwrap().0
    }

    /// Returns the next token, advancing past it. Returns `Eof` once on
    /// reaching the end, then `Eof` forever after. Sticky on error: once
    /// an `Error` token is produced, every subsequent call returns
    /// `Error` again without advancing.
    pub fn next(&mut self) -> Token<'a> {
        if let Some((tok, after)) = self.peeked.take() {
            self.offset = after.offset;
            self.line = after.line;
            self.column = after.column;
            return tok;
        }
        self.lex_one()
    }

    fn data(&self) -> &'a [u8] {
        self.data
    }

    fn lex_one(&mut self) -> Token<'a> {
        if self.error.is_set() {
            return Token { kind: TokenKind::Error, offset: self.offset, length: 0, span: &[] };
        }

        self.skip_whitespace();

        let data = self.data();
        let start = self.offset;
        let Some(&byte) = data.get(start) else {
            return Token { kind: TokenKind::Eof, offset: start, length: 0, span: &[] };
        };

        let tok = match byte {
            b'{' => self.single_byte(TokenKind::OpenObj),
            b'}' => self.single_byte(TokenKind::CloseObj),
            b'[' => self.single_byte(TokenKind::OpenArr),
            b']' => self.single_byte(TokenKind::CloseArr),
            b':' => self.single_byte(TokenKind::Colon),
            b',' => self.single_byte(TokenKind::Comma),
            b'"' => self.lex_string(),
            b't' => self.lex_keyword(b"true", TokenKind::True),
            b'f' => self.lex_keyword(b"false", TokenKind::False),
            b'n' => self.lex_keyword(b"null", TokenKind::Null),
            b'-' | b'0'..=b'9' => self.lex_number(),
            _ => Err(ErrorCode::UnexpectedChar),
        };

        match tok {
            Ok(t) => t,
            Err(code) => {
                let (line, column) = (self.line, self.column);
                // `set` is a no-op past the first call, so this only ever
                // fires once per lexer (the `is_set()` guard at the top of
                // `lex_one` short-circuits every call after that).
                log::warn!("lexer: {code} at line {line}, column {column} (offset {start})");
                self.error.set(code, start, line, column);
                Token { kind: TokenKind::Error, offset: start, length: 0, span: &[] }
            }
        }
    }

    fn skip_whitespace(&mut self) {
        let data = self.data();
        loop {
            match data.get(self.offset) {
                Some(b' ') | Some(b'\t') => {
                    self.offset += 1;
                    self.column += 1;
                }
                Some(b'\n') => {
                    self.offset += 1;
                    self.line += 1;
                    self.column = 1;
                }
                Some(b'\r') => {
                    // A lone `\r` only advances the column; `\r\n` counts
                    // as one line break, attributed to the `\n`.
                    self.offset += 1;
                    self.column += 1;
                }
                _ => return,
            }
        }
    }

    fn single_byte(&mut self, kind: TokenKind) -> Result<Token<'a>, ErrorCode> {
        let start = self.offset;
        let span = &self.data()[start..start + 1];
        self.offset += 1;
        self.column += 1;
        Ok(Token { kind, offset: start, length: 1, span })
    }

    fn lex_keyword(&mut self, word: &'static [u8], kind: TokenKind) -> Result<Token<'a>, ErrorCode> {
        let data = self.data();
        let start = self.offset;
        if !data[start..].starts_with(word) {
            return Err(ErrorCode::UnexpectedChar);
        }
        let end = start + word.len();
        if data.get(end).is_some_and(|&b| b.is_ascii_alphanumeric()) {
            return Err(ErrorCode::InvalidValue);
        }
        self.offset = end;
        self.column += word.len();
        Ok(Token { kind, offset: start, length: word.len(), span: &data[start..end] })
    }

    fn lex_string(&mut self) -> Result<Token<'a>, ErrorCode> {
        let data = self.data();
        let quote_pos = self.offset;
        let content_start = quote_pos + 1;
        let mut i = content_start;
        let mut has_escapes = false;

        loop {
            match data.get(i) {
                None => return Err(ErrorCode::UnterminatedString),
                Some(&b'"') => break,
                Some(&b'\\') => {
                    if data.get(i + 1).is_none() {
                        return Err(ErrorCode::InvalidEscape);
                    }
                    has_escapes = true;
                    i += 2;
                }
                Some(&b) if b < 0x20 => return Err(ErrorCode::UnexpectedChar),
                Some(_) => i += 1,
            }
        }

        let span = &data[content_start..i];
        let consumed = i + 1 - quote_pos; // include both quotes
        self.offset = i + 1;
        self.column += consumed;
        Ok(Token {
            kind: TokenKind::String { has_escapes },
            offset: content_start,
            length: span.len(),
            span,
        })
    }

    fn lex_number(&mut self) -> Result<Token<'a>, ErrorCode> {
        let data = self.data();
        let start = self.offset;
        let parsed = scan_number(&data[start..])?;
        self.offset = start + parsed.length;
        self.column += parsed.length;
        let span = &data[start..self.offset];
        Ok(Token {
            kind: TokenKind::Number(parsed),
            offset: start,
            length: parsed.length,
            span,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::number::NumberValue;

    fn make_buffer(json: &str) -> Buffer {
        Buffer::from_string(json.as_bytes()).unwrap()
    }

    #[test]
    fn structural_tokens_and_eof() {
        let buf = make_buffer("{}[],:");
        let mut lex = Lexer::new(&buf);
        assert!(matches!(lex.next().kind, TokenKind::OpenObj));
        assert!(matches!(lex.next().kind, TokenKind::CloseObj));
        assert!(matches!(lex.next().kind, TokenKind::OpenArr));
        assert!(matches!(lex.next().kind, TokenKind::CloseArr));
        assert!(matches!(lex.next().kind, TokenKind::Comma));
        assert!(matches!(lex.next().kind, TokenKind::Colon));
        assert!(matches!(lex.next().kind, TokenKind::Eof));
    }

    #[test]
    fn structural_token_span_and_length() {
        let buf = make_buffer("{");
        let mut lex = Lexer::new(&buf);
        let tok = lex.next();
        assert_eq!(tok.length, 1);
        assert_eq!(tok.span, b"{");
    }

    #[test]
    fn whitespace_is_skipped() {
        let buf = make_buffer("  \t\n\r  true  ");
        let mut lex = Lexer::new(&buf);
        assert!(matches!(lex.next().kind, TokenKind::True));
        assert!(matches!(lex.next().kind, TokenKind::Eof));
    }

    #[test]
    fn keywords_case_sensitive_and_boundary_checked() {
        let buf = make_buffer("true false null");
        let mut lex = Lexer::new(&buf);
        assert!(matches!(lex.next().kind, TokenKind::True));
        assert!(matches!(lex.next().kind, TokenKind::False));
        assert!(matches!(lex.next().kind, TokenKind::Null));

        let buf = make_buffer("nullify");
        let mut lex = Lexer::new(&buf);
        assert!(matches!(lex.next().kind, TokenKind::Error));
        assert_eq!(lex.error().code, Some(ErrorCode::InvalidValue));

        let buf = make_buffer("True");
        let mut lex = Lexer::new(&buf);
        assert!(matches!(lex.next().kind, TokenKind::Error));
        assert_eq!(lex.error().code, Some(ErrorCode::UnexpectedChar));
    }

    #[test]
    fn string_scans_to_matching_quote_and_flags_escapes() {
        let buf = make_buffer(r#""hello""#);
        let mut lex = Lexer::new(&buf);
        let tok = lex.next();
        assert_eq!(tok.span, b"hello");
        assert!(matches!(tok.kind, TokenKind::String { has_escapes: false }));

        let buf = make_buffer(r#""a\"b""#);
        let mut lex = Lexer::new(&buf);
        let tok = lex.next();
        assert!(matches!(tok.kind, TokenKind::String { has_escapes: true }));
        assert_eq!(tok.span, br#"a\"b"#);
    }

    #[test]
    fn string_rejects_raw_control_bytes() {
        let buf = make_buffer("\"a\nb\"");
        let mut lex = Lexer::new(&buf);
        assert!(matches!(lex.next().kind, TokenKind::Error));
        assert_eq!(lex.error().code, Some(ErrorCode::UnexpectedChar));
    }

    #[test]
    fn unterminated_string() {
        let buf = make_buffer("\"abc");
        let mut lex = Lexer::new(&buf);
        assert!(matches!(lex.next().kind, TokenKind::Error));
        assert_eq!(lex.error().code, Some(ErrorCode::UnterminatedString));
    }

    #[test]
    fn trailing_backslash_is_invalid_escape_not_unterminated() {
        let buf = make_buffer("\"abc\\");
        let mut lex = Lexer::new(&buf);
        assert!(matches!(lex.next().kind, TokenKind::Error));
        assert_eq!(lex.error().code, Some(ErrorCode::InvalidEscape));
    }

    #[test]
    fn numbers_decode_values() {
        let buf = make_buffer("99]");
        let mut lex = Lexer::new(&buf);
        let tok = lex.next();
        assert!(matches!(tok.kind, TokenKind::Number(NumberToken { value: NumberValue::UInt(99), .. })));
        assert!(matches!(lex.next().kind, TokenKind::CloseArr));
    }

    #[test]
    fn peek_is_idempotent() {
        let buf = make_buffer("42");
        let mut lex = Lexer::new(&buf);
        let p1 = lex.peek();
        let p2 = lex.peek();
        let n = lex.next();
        assert_eq!(p1.offset, p2.offset);
        assert_eq!(p1.length, p2.length);
        assert_eq!(p1.span, n.span);
        assert!(matches!(p1.kind, TokenKind::Number(_)));
        assert!(matches!(n.kind, TokenKind::Number(_)));
    }

    #[test]
    fn peek_next_alternating_over_an_array() {
        let buf = make_buffer("[1,2,3]");
        let mut lex = Lexer::new(&buf);
        assert!(matches!(lex.peek().kind, TokenKind::OpenArr));
        assert!(matches!(lex.next().kind, TokenKind::OpenArr));
        assert!(matches!(lex.peek().kind, TokenKind::Number(_)));
        assert!(matches!(lex.next().kind, TokenKind::Number(_)));
    }

    #[test]
    fn error_is_sticky() {
        let buf = make_buffer("@@");
        let mut lex = Lexer::new(&buf);
        assert!(matches!(lex.next().kind, TokenKind::Error));
        let first = lex.error().clone();
        assert!(matches!(lex.next().kind, TokenKind::Error));
        assert!(matches!(lex.next().kind, TokenKind::Error));
        assert_eq!(lex.error(), &first);
    }

    #[test]
    fn eof_is_repeatable() {
        let buf = make_buffer("1");
        let mut lex = Lexer::new(&buf);
        assert!(matches!(lex.next().kind, TokenKind::Number(_)));
        assert!(matches!(lex.next().kind, TokenKind::Eof));
        assert!(matches!(lex.next().kind, TokenKind::Eof));
    }

    #[test]
    fn crlf_and_lone_cr_line_tracking() {
        let buf = make_buffer("{\r\n  @");
        let mut lex = Lexer::new(&buf);
        assert!(matches!(lex.next().kind, TokenKind::OpenObj));
        assert!(matches!(lex.next().kind, TokenKind::Error));
        assert_eq!(lex.error().line, 2);
        assert_eq!(lex.error().column, 3);

        let buf = make_buffer("{\r@");
        let mut lex = Lexer::new(&buf);
        assert!(matches!(lex.next().kind, TokenKind::OpenObj));
        assert!(matches!(lex.next().kind, TokenKind::Error));
        assert_eq!(lex.error().line, 1);
        assert_eq!(lex.error().column, 3);
    }

    #[test]
    fn error_offset_at_first_bad_byte() {
        let buf = make_buffer("@");
        let mut lex = Lexer::new(&buf);
        assert!(matches!(lex.next().kind, TokenKind::Error));
        assert_eq!(lex.error().offset, 0);
    }

    #[test]
    fn nested_json_token_sequence() {
        let buf = make_buffer(r#"{"a":{"b":[1,2,{"c":true}]}}"#);
        let mut lex = Lexer::new(&buf);
        let expected = [
            std::mem::discriminant(&TokenKind::OpenObj),
            std::mem::discriminant(&TokenKind::String { has_escapes: false }),
            std::mem::discriminant(&TokenKind::Colon),
            std::mem::discriminant(&TokenKind::OpenObj),
            std::mem::discriminant(&TokenKind::String { has_escapes: false }),
            std::mem::discriminant(&TokenKind::Colon),
            std::mem::discriminant(&TokenKind::OpenArr),
        ];
        for expect in expected {
            assert_eq!(std::mem::discriminant(&lex.next().kind), expect);
        }
    }
}
