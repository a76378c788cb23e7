//! Integration tests driving `Lexer` through its public API.

use serdec_json::lexer::TokenKind;
use serdec_json::{Buffer, Lexer};

fn make_buffer(json: &str) -> Buffer {
    Buffer::from_string(json.as_bytes()).unwrap()
}

#[test]
fn tokenizes_every_structural_byte() {
    let buf = make_buffer("{}[]:,");
    let mut lex = Lexer::new(&buf);
    let kinds = [
        TokenKind::OpenObj,
        TokenKind::CloseObj,
        TokenKind::OpenArr,
        TokenKind::CloseArr,
        TokenKind::Colon,
        TokenKind::Comma,
    ];
    for expected in kinds {
        assert_eq!(lex.next().kind, expected);
    }
    assert_eq!(lex.next().kind, TokenKind::Eof);
}

#[test]
fn keyword_prefix_collision_is_invalid_value() {
    let buf = make_buffer("falsehood");
    let mut lex = Lexer::new(&buf);
    assert_eq!(lex.next().kind, TokenKind::Error);
    assert_eq!(lex.error().code, Some(serdec_json::ErrorCode::InvalidValue));
}

#[test]
fn peek_does_not_advance_the_stream() {
    let buf = make_buffer("1 2 3");
    let mut lex = Lexer::new(&buf);
    let first_peek = lex.peek();
    assert_eq!(first_peek.span, b"1");
    assert_eq!(lex.next().span, b"1");
    assert_eq!(lex.next().span, b"2");
}

#[test]
fn string_token_excludes_surrounding_quotes() {
    let buf = make_buffer(r#""hello world""#);
    let mut lex = Lexer::new(&buf);
    let tok = lex.next();
    assert_eq!(tok.span, b"hello world");
    assert!(matches!(tok.kind, TokenKind::String { has_escapes: false }));
}
