//! Integration tests for `Buffer` construction and sharing.

use serdec_json::Buffer;
use std::io::Cursor;

#[test]
fn from_string_exposes_exact_bytes() {
    let buf = Buffer::from_string(br#"{"k":1}"#).unwrap();
    assert_eq!(buf.data(), br#"{"k":1}"#);
    assert_eq!(buf.size(), 7);
}

#[test]
fn from_stream_reads_an_in_memory_cursor() {
    let cursor = Cursor::new(b"hello stream".to_vec());
    let buf = Buffer::from_stream(cursor, 0).unwrap();
    assert_eq!(buf.data(), b"hello stream");
}

#[test]
fn retained_clones_see_the_same_bytes() {
    let buf = Buffer::from_string(b"shared").unwrap();
    let clone = buf.retain();
    drop(buf);
    assert_eq!(clone.data(), b"shared");
}

#[test]
fn capacity_always_exceeds_size_by_the_padding_margin() {
    for input in [&b""[..], b"x", b"a longer piece of input text"] {
        let buf = Buffer::from_string(input).unwrap();
        assert!(buf.capacity() >= buf.size() + 64);
    }
}
