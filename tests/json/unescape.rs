//! Integration tests combining `Arena` with `unescape`, as a parser would.

use serdec_json::unescape::unescape;
use serdec_json::{Arena, ArenaConfig};

#[test]
fn decodes_mixed_escape_and_plain_bytes_into_arena() {
    let arena = Arena::new(ArenaConfig::default());
    let decoded = unescape(&arena, br#"line one\nline two"#).unwrap();
    assert_eq!(decoded, b"line one\nline two");
}

#[test]
fn surrogate_pair_decodes_into_four_utf8_bytes() {
    let arena = Arena::new(ArenaConfig::default());
    let decoded = unescape(&arena, b"\\uD83D\\uDE00").unwrap();
    assert_eq!(decoded, [0xF0, 0x9F, 0x98, 0x80]);
}

#[test]
fn successive_unescape_calls_share_one_arena_without_clobbering() {
    let arena = Arena::new(ArenaConfig::default());
    let first = unescape(&arena, br"a\tb").unwrap();
    let second = unescape(&arena, br"c\td").unwrap();
    assert_eq!(first, b"a\tb");
    assert_eq!(second, b"c\td");
}

#[test]
fn malformed_escape_surfaces_invalid_escape_without_panicking() {
    let arena = Arena::new(ArenaConfig::default());
    assert_eq!(
        unescape(&arena, br"\x41"),
        Err(serdec_json::ErrorCode::InvalidEscape)
    );
}

#[test]
fn tight_memory_budget_surfaces_memory_limit_not_invalid_escape() {
    let arena = Arena::new(ArenaConfig { block_size: 2, max_memory: 2 });
    assert_eq!(
        unescape(&arena, b"hello"),
        Err(serdec_json::ErrorCode::MemoryLimit)
    );
}
