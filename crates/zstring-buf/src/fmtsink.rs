//! Two-pass formatted-write plumbing.
//!
//! Formatted output has no length until it is rendered, so growth-aware
//! writes render twice: once into a counter to learn the exact byte length,
//! then into a bounded slice covering exactly the reserved gap. The bounded
//! sink refuses to write past its slice, which keeps whatever follows the
//! gap intact.

use std::fmt::{self, Write};

use zstring_core::error::{Error, Result};

/// Exact byte length `args` renders to.
pub(crate) fn measure(args: fmt::Arguments<'_>) -> Result<usize> {
    let mut counter = ByteCounter(0);
    counter.write_fmt(args)?;
    Ok(counter.0)
}

/// Render `args` into exactly `dst`.
///
/// Errors if the rendition does not fill `dst` exactly, which only happens
/// when a `Display` impl emits different output than it did during the
/// measuring pass.
pub(crate) fn write_into(dst: &mut [u8], args: fmt::Arguments<'_>) -> Result<()> {
    let mut sink = SliceSink { dst, pos: 0 };
    sink.write_fmt(args)?;
    if sink.pos != sink.dst.len() {
        return Err(Error::Fmt(fmt::Error));
    }
    Ok(())
}

struct ByteCounter(usize);

impl Write for ByteCounter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.len();
        Ok(())
    }
}

struct SliceSink<'a> {
    dst: &'a mut [u8],
    pos: usize,
}

impl Write for SliceSink<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        let end = self.pos + bytes.len();
        if end > self.dst.len() {
            return Err(fmt::Error);
        }
        self.dst[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
        Ok(())
    }
}
