//! Integration tests for `EventIterator` as a standard `Iterator`.

use serdec_json::{Buffer, Event, EventIterator};

#[test]
fn implements_standard_iterator_adapters() {
    let buf = Buffer::from_string(b"[1,2,3,4,5]").unwrap();
    let count = EventIterator::new(&buf)
        .filter(|e| matches!(e, Event::Number(_)))
        .count();
    assert_eq!(count, 5);
}

#[test]
fn collect_into_vec_ends_with_end_event() {
    let buf = Buffer::from_string(b"null").unwrap();
    let evs: Vec<_> = EventIterator::new(&buf).collect();
    assert_eq!(evs, vec![Event::Null, Event::End]);
}

#[test]
fn object_keys_alternate_with_values_in_document_order() {
    let buf = Buffer::from_string(br#"{"x":1,"y":2,"z":3}"#).unwrap();
    let keys: Vec<&[u8]> = EventIterator::new(&buf)
        .filter_map(|e| match e {
            Event::Key { span, .. } => Some(span),
            _ => None,
        })
        .collect();
    assert_eq!(keys, vec![b"x".as_slice(), b"y".as_slice(), b"z".as_slice()]);
}
