//! Structured error taxonomy and report formatting.
//!
//! Mirrors the reference implementation's error model (`serdec/error.h`,
//! `core/error.c`): a fixed, numerically-banded set of codes plus a
//! `ErrorInfo` report that every component fills in once and never
//! overwrites (sticky / first-wins).
//!
//! | Rust item            | C equivalent               |
//! |-----------------------|-----------------------------|
//! | [`ErrorCode`]          | `SerdecError`               |
//! | [`ErrorInfo`]          | `SerdecErrorInfo`            |
//! | [`ErrorCode::label`]   | `serdec_error_string`       |
//! | [`ErrorInfo::format`]  | `serdec_error_format`       |

use core::fmt;

/// Numerically-banded error taxonomy: syntax 100s, string 200s, number 300s,
/// resource 400s, I/O 500s, internal 600.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    /// No error.
    Ok = 0,

    /// Dispatcher saw a byte that cannot start any token.
    UnexpectedChar = 100,
    /// Input ended mid-token.
    UnexpectedEof = 101,
    /// A keyword-shaped token did not match `true`/`false`/`null` exactly.
    InvalidValue = 102,
    /// Extra bytes after a complete top-level value.
    TrailingChars = 103,

    /// Malformed `\` escape inside a string.
    InvalidEscape = 200,
    /// Invalid UTF-8 byte sequence.
    InvalidUtf8 = 201,
    /// String ran off the end of the buffer without a closing quote.
    UnterminatedString = 202,

    /// Number token did not match the RFC 8259 grammar.
    InvalidNumber = 300,
    /// Decoded integer magnitude does not fit the target width.
    NumberOverflow = 301,

    /// Nesting depth exceeded a caller-configured limit.
    DepthLimit = 400,
    /// Arena's configured `max_memory` would be exceeded.
    MemoryLimit = 401,
    /// Allocation failed for a reason other than the memory cap.
    OutOfMemory = 402,

    /// Generic I/O failure reading a file or stream.
    Io = 500,
    /// The requested file does not exist.
    FileNotFound = 501,

    /// A handle crossed an FFI boundary in a state Rust's ownership model
    /// cannot otherwise rule out. Unused by the safe Rust API itself.
    InvalidHandle = 600,
}

impl ErrorCode {
    /// Stable human label for every code, including codes outside the
    /// known bands. Equivalent to `serdec_error_string`.
    pub fn label(self) -> &'static str {
        match self {
            ErrorCode::Ok => "OK",

            ErrorCode::UnexpectedChar => "Unexpected Character",
            ErrorCode::UnexpectedEof => "Unexpected EOF",
            ErrorCode::InvalidValue => "Invalid Value",
            ErrorCode::TrailingChars => "Trailing Characters",

            ErrorCode::InvalidEscape => "Invalid Escape",
            ErrorCode::InvalidUtf8 => "Invalid UTF-8",
            ErrorCode::UnterminatedString => "Unterminated String",

            ErrorCode::InvalidNumber => "Invalid Number",
            ErrorCode::NumberOverflow => "Number Overflow",

            ErrorCode::DepthLimit => "Depth Limit",
            ErrorCode::MemoryLimit => "Memory Limit",
            ErrorCode::OutOfMemory => "Out of Memory",

            ErrorCode::Io => "IO",
            ErrorCode::FileNotFound => "File Not Found",

            ErrorCode::InvalidHandle => "Invalid Handle",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::error::Error for ErrorCode {}

const PATH_CAP: usize = 256;
const MESSAGE_CAP: usize = 512;
const CONTEXT_CAP: usize = 128;

/// A structured error report. Owned by the producing component; once set,
/// its contents never change (sticky / first-wins — see [`ErrorCode`]).
///
/// `path`/`message`/`context` are bounded `String`s rather than raw
/// fixed-size buffers: callers on the safe side of the API have no need
/// for C's NUL-terminated-array representation, but the *capacity limits*
/// from the reference struct (`path[256]`, `message[512]`, `context[128]`)
/// are preserved so a report can never grow without bound.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorInfo {
    pub code: Option<ErrorCode>,
    pub offset: usize,
    pub line: usize,
    pub column: usize,
    pub path: String,
    pub message: String,
    pub context: String,
}

impl ErrorInfo {
    /// A fresh, empty report (no error recorded yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `code` at the given position, truncating `path` to
    /// [`PATH_CAP`] bytes. Does nothing if a code is already recorded —
    /// the first error wins.
    pub fn set(&mut self, code: ErrorCode, offset: usize, line: usize, column: usize) {
        if self.code.is_some() {
            return;
        }
        self.code = Some(code);
        self.offset = offset;
        self.line = line;
        self.column = column;
    }

    /// Attaches a free-form message, truncated to [`MESSAGE_CAP`] bytes.
    /// No-op once a message has already been set.
    pub fn set_message(&mut self, message: impl Into<String>) {
        if !self.message.is_empty() {
            return;
        }
        let mut message = message.into();
        message.truncate(MESSAGE_CAP);
        self.message = message;
    }

    /// Attaches a JSON-pointer-like path for the error location, truncated
    /// to [`PATH_CAP`] bytes.
    pub fn set_path(&mut self, path: impl Into<String>) {
        let mut path = path.into();
        path.truncate(PATH_CAP);
        self.path = path;
    }

    /// Attaches free-form context (e.g. the offending lexeme), truncated
    /// to [`CONTEXT_CAP`] bytes.
    pub fn set_context(&mut self, context: impl Into<String>) {
        let mut context = context.into();
        context.truncate(CONTEXT_CAP);
        self.context = context;
    }

    /// `true` once an error has been recorded.
    pub fn is_set(&self) -> bool {
        self.code.is_some()
    }

    /// Writes the exact multi-line report format:
    /// `Error: <label>\nAt: line L, column C (offset O)\n` followed by
    /// optional `Path:`/`Context:`/`Message:` sections.
    ///
    /// Truncates safely — a `Write` error (e.g. a fixed-capacity buffer
    /// running out of room) simply stops emitting further sections,
    /// matching the reference `bufsize` cutoff. No allocation beyond
    /// whatever the writer itself does.
    ///
    /// Equivalent to `serdec_error_format`.
    pub fn format(&self, w: &mut impl fmt::Write) -> fmt::Result {
        let code = self.code.unwrap_or(ErrorCode::Ok);
        write!(
            w,
            "Error: {}\nAt: line {}, column {} (offset {})\n",
            code.label(),
            self.line,
            self.column,
            self.offset
        )?;

        if !self.path.is_empty() {
            writeln!(w, "Path: {}", self.path)?;
        }
        if !self.context.is_empty() {
            writeln!(w, "Context: {}", self.context)?;
        }
        if !self.message.is_empty() {
            writeln!(w, "Message: {}", self.message)?;
        }
        Ok(())
    }

    /// Convenience wrapper around [`ErrorInfo::format`] that allocates a
    /// `String` instead of requiring the caller to supply a writer.
    pub fn to_report_string(&self) -> String {
        let mut s = String::new();
        // A `String`'s `Write` impl never fails.
        let _ = self.format(&mut s);
        s
    }
}
