//! Reference-counted, 64-byte-aligned byte container with a guaranteed
//! zero-padded tail.
//!
//! Ported from `serdec/buffer.h` / `core/buffer.c`. The reference keeps a
//! manual `ref_count: u32` and a magic tag; this port uses `Rc` for the
//! refcounting (retain/release collapse onto `Clone`/`Drop`) and relies on
//! ownership instead of a magic tag for validity.
//!
//! | Rust item              | C equivalent                |
//! |-------------------------|-------------------------------|
//! | [`Buffer::from_string`] | `serdec_buffer_from_string`   |
//! | [`Buffer::from_file`]   | `serdec_buffer_from_file`     |
//! | [`Buffer::from_stream`] | `serdec_buffer_from_stream`   |
//! | `Buffer::clone`         | `serdec_buffer_retain`        |
//! | `Drop for Inner`        | `serdec_buffer_release`       |
//! | [`Buffer::data`]        | `serdec_buffer_data`          |
//! | [`Buffer::size`]        | `serdec_buffer_size`          |
//! | [`Buffer::capacity`]    | `serdec_buffer_capacity`      |

use std::alloc::{alloc_zeroed, dealloc, Layout};
use std::fs::File;
use std::io::Read;
use std::rc::Rc;

use crate::config::{BUFFER_DEFAULT_CAP, BUFFER_PADDING};
use crate::error::ErrorCode;

struct Inner {
    data: *mut u8,
    layout: Layout,
    size: usize,
    capacity: usize,
}

impl Drop for Inner {
    fn drop(&mut self) {
        // SAFETY: `data`/`layout` were produced together by `alloc_zeroed`
        // in `Inner::with_capacity` and never reallocated.
        unsafe { dealloc(self.data, self.layout) };
    }
}

/// An immutable, reference-counted view over JSON source bytes.
///
/// Not `Send`/`Sync`: refcounting is plain `Rc`, matching the reference's
/// documented "not thread-safe, callers must serialize externally" policy
/// (§5) as a compile-time property rather than a comment.
#[derive(Clone)]
pub struct Buffer {
    inner: Rc<Inner>,
}

impl Inner {
    fn with_capacity(requested: usize) -> Result<Self, ErrorCode> {
        let capacity = requested.max(BUFFER_DEFAULT_CAP) + BUFFER_PADDING;
        let layout =
            Layout::from_size_align(capacity, BUFFER_PADDING).map_err(|_| ErrorCode::OutOfMemory)?;
        // SAFETY: `layout` has non-zero size (capacity >= PADDING > 0).
        let data = unsafe { alloc_zeroed(layout) };
        if data.is_null() {
            return Err(ErrorCode::OutOfMemory);
        }
        Ok(Inner { data, layout, size: 0, capacity })
    }
}

impl Buffer {
    /// Copies `bytes` into a freshly allocated, 64-byte-aligned buffer with
    /// at least [`BUFFER_PADDING`] bytes of guaranteed-zero tail.
    /// Equivalent to `serdec_buffer_from_string`.
    pub fn from_string(bytes: &[u8]) -> Result<Buffer, ErrorCode> {
        let mut inner = Inner::with_capacity(bytes.len())?;
        // SAFETY: `data` points at `capacity` zeroed bytes; `bytes.len() <=
        // capacity - PADDING < capacity`.
        unsafe {
            std::ptr::copy_nonoverlapping(bytes.as_ptr(), inner.data, bytes.len());
        }
        inner.size = bytes.len();
        Ok(Buffer { inner: Rc::new(inner) })
    }

    /// Reads up to `max` bytes from `path` (`0` means unbounded) into a
    /// buffer built the same way as [`Buffer::from_string`].
    ///
    /// The reference implementation stubs this out entirely (`TODO`,
    /// returns `NULL`); this port implements it for real, since a JSON
    /// library that cannot load a file from disk is not a complete one.
    /// Equivalent to `serdec_buffer_from_file`.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Buffer, ErrorCode> {
        Self::from_file_with_limit(path, 0)
    }

    /// As [`Buffer::from_file`], but stops reading after `max` bytes
    /// (`0` = unbounded).
    pub fn from_file_with_limit(
        path: impl AsRef<std::path::Path>,
        max: usize,
    ) -> Result<Buffer, ErrorCode> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ErrorCode::FileNotFound
            } else {
                ErrorCode::Io
            }
        })?;
        Self::from_stream(file, max)
    }

    /// Reads up to `max` bytes (`0` = unbounded) from any [`Read`] source
    /// into a buffer built the same way as [`Buffer::from_string`].
    /// Equivalent to `serdec_buffer_from_stream`.
    pub fn from_stream(mut reader: impl Read, max: usize) -> Result<Buffer, ErrorCode> {
        let mut bytes = Vec::new();
        let result = if max == 0 {
            reader.read_to_end(&mut bytes)
        } else {
            reader.by_ref().take(max as u64).read_to_end(&mut bytes)
        };
        result.map_err(|_| ErrorCode::Io)?;
        Self::from_string(&bytes)
    }

    /// Increments the reference count and returns a handle pointing at the
    /// same storage. Equivalent to `serdec_buffer_retain`.
    pub fn retain(&self) -> Buffer {
        self.clone()
    }

    /// Immutable view over the buffer's logical bytes (excludes padding).
    /// Equivalent to `serdec_buffer_data` + `serdec_buffer_size`.
    pub fn data(&self) -> &[u8] {
        // SAFETY: `[0, size)` was either copied from the caller's slice or
        // read from the source, and is part of the `capacity`-byte
        // allocation for the lifetime of `inner`.
        unsafe { std::slice::from_raw_parts(self.inner.data, self.inner.size) }
    }

    /// Logical byte count. Equivalent to `serdec_buffer_size`.
    pub fn size(&self) -> usize {
        self.inner.size
    }

    /// Allocated capacity, always `>= size() + 64`.
    /// Equivalent to `serdec_buffer_capacity`.
    pub fn capacity(&self) -> usize {
        self.inner.capacity
    }

    /// Address of the data pointer. Exposed only to let tests and callers
    /// verify the 64-byte alignment invariant; not part of the reference
    /// API surface (which works in terms of opaque pointers).
    pub fn data_addr(&self) -> usize {
        self.inner.data as usize
    }
}
