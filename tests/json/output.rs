//! Integration tests for `OutputBuffer`'s public API.

use core::fmt::Write as _;
use serdec_json::OutputBuffer;

#[test]
fn builds_up_mixed_content_then_takes_it() {
    let mut buf = OutputBuffer::new(8);
    buf.append_str("count=");
    write!(buf, "{}", 42).unwrap();
    buf.put_char(b';');
    assert_eq!(buf.take(), b"count=42;\0");
}

#[test]
fn length_reflects_bytes_written_not_capacity() {
    let mut buf = OutputBuffer::new(256);
    buf.append(b"abc");
    assert_eq!(buf.length(), 3);
}

#[test]
fn reused_after_take_starts_fresh() {
    let mut buf = OutputBuffer::new(0);
    buf.append(b"first");
    let _ = buf.take();
    buf.append(b"second");
    assert_eq!(buf.take(), b"second\0");
}

#[test]
fn clear_then_append_produces_only_new_bytes() {
    let mut buf = OutputBuffer::new(0);
    buf.append(b"stale");
    buf.clear();
    buf.append(b"fresh");
    assert_eq!(buf.take(), b"fresh\0");
}
