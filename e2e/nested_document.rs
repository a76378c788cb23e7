//! E2E Test Suite: nested document traversal and string unescaping
//!
//! Validates the full pipeline — buffer, lexer, event iterator, and arena
//! unescaper working together — against realistic nested JSON documents.

extern crate serdec_json;

use serdec_json::lexer::number::NumberValue;
use serdec_json::{Arena, ArenaConfig, Buffer, Event, EventIterator};

fn make_buffer(json: &str) -> Buffer {
    Buffer::from_string(json.as_bytes()).unwrap()
}

fn collect<'a>(buf: &'a Buffer) -> Vec<Event<'a>> {
    EventIterator::new(buf).collect()
}

#[test]
fn flat_object_named_fields_roundtrip() {
    let buf = make_buffer(r#"{"name":"Alice","age":30}"#);
    let evs = collect(&buf);
    assert_eq!(evs.len(), 7);
    assert_eq!(evs[0], Event::StartObject);
    assert_eq!(evs[1], Event::Key { span: b"name", has_escapes: false });
    assert_eq!(evs[2], Event::String { span: b"Alice", has_escapes: false });
    assert_eq!(evs[3], Event::Key { span: b"age", has_escapes: false });
    assert!(matches!(evs[4], Event::Number(n) if n.value == NumberValue::UInt(30) && n.is_integer));
    assert_eq!(evs[5], Event::EndObject);
    assert_eq!(evs[6], Event::End);
}

#[test]
fn deeply_nested_object_array_mix_balances() {
    let buf = make_buffer(r#"{"a":{"b":[1,2,{"c":true}]}}"#);
    let evs = collect(&buf);
    let mut depth = 0i32;
    let mut max_depth = 0i32;
    for e in &evs {
        match e {
            Event::StartObject | Event::StartArray => {
                depth += 1;
                max_depth = max_depth.max(depth);
            }
            Event::EndObject | Event::EndArray => depth -= 1,
            _ => {}
        }
    }
    assert_eq!(depth, 0, "every container must close");
    assert_eq!(max_depth, 3);
    assert_eq!(evs.last(), Some(&Event::End));
}

#[test]
fn array_of_mixed_value_types() {
    let buf = make_buffer(r#"[1, true, "hi", null]"#);
    let evs = collect(&buf);
    assert_eq!(evs[0], Event::StartArray);
    assert!(matches!(evs[1], Event::Number(_)));
    assert_eq!(evs[2], Event::Bool(true));
    assert_eq!(evs[3], Event::String { span: b"hi", has_escapes: false });
    assert_eq!(evs[4], Event::Null);
    assert_eq!(evs[5], Event::EndArray);
}

#[test]
fn escaped_unicode_string_value_unescapes_to_expected_utf8() {
    // `é` is e-acute (BMP); `😀` is a surrogate pair for the
    // grinning-face emoji (astral plane). Both appear here as literal JSON
    // escapes, so this exercises `has_escapes` plus the unescaper's
    // surrogate-pair combination path end to end.
    let buf = make_buffer("{\"s\":\"\\u00E9\\uD83D\\uDE00\"}");
    let evs = collect(&buf);
    let Event::String { span, has_escapes } = evs[2] else { panic!("expected string event") };
    assert!(has_escapes);

    let arena = Arena::new(ArenaConfig::default());
    let decoded = serdec_json::unescape::unescape(&arena, span).unwrap();
    assert_eq!(decoded, [0xC3, 0xA9, 0xF0, 0x9F, 0x98, 0x80]);
}

#[test]
fn array_of_objects_shares_one_arena_across_keys() {
    let buf = make_buffer(r#"[{"k":"a\tb"},{"k":"c\td"}]"#);
    let evs = collect(&buf);
    let arena = Arena::new(ArenaConfig::default());
    let mut decoded_values = Vec::new();
    for e in &evs {
        if let Event::String { span, has_escapes: true } = e {
            decoded_values.push(serdec_json::unescape::unescape(&arena, span).unwrap().to_vec());
        }
    }
    assert_eq!(decoded_values, vec![b"a\tb".to_vec(), b"c\td".to_vec()]);
}

#[test]
fn empty_object_and_array_produce_no_inner_events() {
    let buf = make_buffer("{}");
    let evs = collect(&buf);
    assert_eq!(evs, vec![Event::StartObject, Event::EndObject, Event::End]);

    let buf = make_buffer("[]");
    let evs = collect(&buf);
    assert_eq!(evs, vec![Event::StartArray, Event::EndArray, Event::End]);
}
