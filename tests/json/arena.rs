//! Integration tests for the arena allocator's public surface.

use serdec_json::{Arena, ArenaConfig};

#[test]
fn custom_config_is_honored() {
    let arena = Arena::new(ArenaConfig { block_size: 256, max_memory: 1024 });
    assert!(arena.alloc(200).is_ok());
    assert_eq!(arena.alloc(1024), Err(serdec_json::ErrorCode::MemoryLimit));
}

#[test]
fn many_strdups_stay_independent() {
    let arena = Arena::new(ArenaConfig::default());
    let a = arena.strdup(b"first").unwrap();
    let b = arena.strdup(b"second").unwrap();
    assert_eq!(a, b"first");
    assert_eq!(b, b"second");
}

#[test]
fn reset_allows_reuse_within_memory_budget() {
    let arena = Arena::new(ArenaConfig { block_size: 64, max_memory: 256 });
    for _ in 0..4 {
        arena.alloc(64).unwrap();
    }
    assert_eq!(arena.alloc(64), Err(serdec_json::ErrorCode::MemoryLimit));
    arena.reset();
    assert!(arena.alloc(64).is_ok());
}
