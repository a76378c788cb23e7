//! E2E Test Suite: error handling and reporting
//!
//! Validates the end-to-end error path: a malformed document surfaces a
//! single `Error` event with the right `ErrorCode`, and `ErrorInfo::format`
//! produces a readable multi-line report including line/column/offset.

extern crate serdec_json;

use serdec_json::{Buffer, ErrorCode, Event, EventIterator};

#[test]
fn unexpected_char_at_document_start() {
    let buf = Buffer::from_string(b"@").unwrap();
    let mut it = EventIterator::new(&buf);
    assert_eq!(it.next(), Some(Event::Error(ErrorCode::UnexpectedChar)));
    assert_eq!(it.error().offset, 0);
    assert_eq!(it.error().line, 1);
    assert_eq!(it.error().column, 1);
    assert_eq!(it.next(), Some(Event::End));
    assert_eq!(it.next(), None);
}

#[test]
fn number_overflow_reports_number_overflow() {
    let buf = Buffer::from_string(b"18446744073709551616").unwrap();
    let mut it = EventIterator::new(&buf);
    assert_eq!(it.next(), Some(Event::Error(ErrorCode::NumberOverflow)));
}

#[test]
fn negative_overflow_reports_number_overflow() {
    let buf = Buffer::from_string(b"-9223372036854775809").unwrap();
    let mut it = EventIterator::new(&buf);
    assert_eq!(it.next(), Some(Event::Error(ErrorCode::NumberOverflow)));
}

#[test]
fn unterminated_string_mid_object() {
    let buf = Buffer::from_string(br#"{"name": "unterminated"#).unwrap();
    let mut it = EventIterator::new(&buf);
    assert_eq!(it.next(), Some(Event::StartObject));
    assert_eq!(it.next(), Some(Event::Key { span: b"name", has_escapes: false }));
    assert_eq!(it.next(), Some(Event::Error(ErrorCode::UnterminatedString)));
}

#[test]
fn error_position_tracks_newlines() {
    let buf = Buffer::from_string(b"{\n  @").unwrap();
    let mut it = EventIterator::new(&buf);
    assert_eq!(it.next(), Some(Event::StartObject));
    assert_eq!(it.next(), Some(Event::Error(ErrorCode::UnexpectedChar)));
    assert_eq!(it.error().line, 2);
    assert_eq!(it.error().column, 3);
}

#[test]
fn error_info_format_includes_code_and_position() {
    let buf = Buffer::from_string(b"[1, @]").unwrap();
    let mut it = EventIterator::new(&buf);
    assert_eq!(it.next(), Some(Event::StartArray));
    assert_eq!(it.next(), Some(Event::Number(_number_one())));
    let Some(Event::Error(_)) = it.next() else { panic!("expected error event") };

    let report = it.error().to_report_string();
    assert!(report.contains("Unexpected Character"));
    assert!(report.contains("line 1"));
    assert!(report.contains(&format!("offset {}", it.error().offset)));
}

#[test]
fn first_error_wins_even_after_further_reads() {
    let buf = Buffer::from_string(b"@@@@").unwrap();
    let mut it = EventIterator::new(&buf);
    assert_eq!(it.next(), Some(Event::Error(ErrorCode::UnexpectedChar)));
    let first = it.error().clone();
    assert_eq!(it.next(), Some(Event::End));
    assert_eq!(it.next(), None);
    assert_eq!(it.error(), &first);
}

fn _number_one() -> serdec_json::lexer::number::NumberToken {
    serdec_json::lexer::number::NumberToken {
        is_integer: true,
        is_negative: false,
        value: serdec_json::lexer::number::NumberValue::UInt(1),
        length: 1,
    }
}
