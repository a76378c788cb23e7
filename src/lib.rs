//! Zero-copy JSON lexing: a reference-counted byte buffer, a bounded-growth
//! arena allocator, a UTF-8 codec, a string unescaper, a streaming lexer and
//! an event-iterator façade over it.
//!
//! The value-tree builder, stringifier, and any CLI/file-I/O layer on top of
//! this crate are external collaborators — this crate ships the input-side
//! pipeline only.

pub mod arena;
pub mod buffer;
pub mod config;
pub mod error;
pub mod event;
pub mod lexer;
pub mod output;
pub mod unescape;
pub mod utf8;

/// 64-byte-aligned, reference-counted view over JSON source bytes.
/// Equivalent to `serdec_buffer_t`.
pub use buffer::Buffer;
/// Bump-allocating arena backing unescaped strings and other parse-time
/// allocations. Equivalent to `serdec_arena_t`.
pub use arena::Arena;
/// Arena sizing knobs. Equivalent to `serdec_arena_config_t`.
pub use config::ArenaConfig;
/// The error taxonomy shared by every component. Equivalent to `SerdecError`.
pub use error::ErrorCode;
/// A structured, sticky error report. Equivalent to `SerdecErrorInfo`.
pub use error::ErrorInfo;
/// Streaming tokenizer. Equivalent to `serdec_lexer_t`.
pub use lexer::Lexer;
/// A single lexed token. Equivalent to `SerdecToken`.
pub use lexer::Token;
/// Parse events produced by [`EventIterator`]. Equivalent to `SerdecEvent`.
pub use event::Event;
/// Translates a token stream into balanced start/end/value events.
/// Equivalent to `serdec_parser_t`.
pub use event::EventIterator;
/// Growable output byte buffer. Equivalent to `serdec_vector_t`.
pub use output::OutputBuffer;
