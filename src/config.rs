// config.rs — Compile-time / construction-time configuration constants.
//
// Migrated from serdec/arena.h, serdec/buffer.h and serdec_vector.h defaults.
// Unlike the reference C headers, these aren't preprocessor macros: the
// arena and buffer constructors take a config struct with `Default` set to
// these values, so a caller can override any one of them without redefining
// the rest.

/// Size of an arena's first (and each subsequently allocated standard)
/// block, in bytes. Corresponds to the reference's default block size.
pub const ARENA_DEFAULT_BLOCK_SIZE: usize = 16 * 1024;

/// Hard cap on an arena's total allocated bytes across all blocks.
/// Corresponds to the reference's default `max_memory`.
pub const ARENA_DEFAULT_MAX_MEMORY: usize = 256 * 1024 * 1024;

/// Minimum capacity `Buffer::from_string` reserves even for small inputs.
pub const BUFFER_DEFAULT_CAP: usize = 256;

/// Guaranteed-zero padding appended after every buffer's logical size,
/// and the buffer's minimum alignment in bytes.
pub const BUFFER_PADDING: usize = 64;

/// Geometric growth factor for the arena-backed vector / dynamic output
/// buffer. Corresponds to `SERDEC_VECTOR_GROWTH_FACTOR`.
pub const BUFFER_GROWTH_FACTOR: usize = 2;

/// Construction-time tunables for [`crate::arena::Arena`].
///
/// Equivalent to the config struct passed to `serdec_arena_create`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Size of each standard block, in bytes.
    pub block_size: usize,
    /// Hard cap on total bytes allocated across all blocks.
    pub max_memory: usize,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            block_size: ARENA_DEFAULT_BLOCK_SIZE,
            max_memory: ARENA_DEFAULT_MAX_MEMORY,
        }
    }
}
