//! The `ZString` buffer: representation, growth engine, and mutation ops.
//!
//! Offsets are raw byte offsets and are trusted: every range argument must
//! satisfy `start <= end < len()` (or `at <= len()` for insertion points).
//! Out-of-contract offsets are caller bugs and surface as slice-index
//! panics, never as silent truncation or a recoverable error.

use std::fmt;
use std::ops::Deref;

use zeroize::Zeroize;
use zstring_core::alloc::{Allocator, SYSTEM};
use zstring_core::error::Result;

use crate::fmtsink;

/// Growable byte string with an always-present trailing zero terminator.
///
/// The byte at offset `len()` in the backing store is always `0`, so the
/// content can be handed to terminator-based consumers at any time. Content
/// is raw bytes; no encoding is assumed anywhere.
///
/// The allocator is borrowed for `'alloc`, which makes "the allocator must
/// outlive every buffer bound to it" a compile-time guarantee. Buffers built
/// without an explicit allocator borrow the `'static` host-heap default.
pub struct ZString<'alloc> {
    /// Backing block, always obtained from `alloc`. The empty boxed slice
    /// (no heap allocation) stands in for the not-yet-allocated state.
    storage: Box<[u8]>,
    /// Meaningful bytes, excluding the terminator.
    used: usize,
    alloc: &'alloc dyn Allocator,
}

impl<'alloc> ZString<'alloc> {
    /// Empty buffer on the host-heap allocator. Defers its first allocation
    /// until the first growth.
    pub fn new() -> ZString<'static> {
        ZString::new_in(&SYSTEM)
    }

    /// Empty buffer bound to `alloc` for its entire lifetime.
    pub fn new_in(alloc: &'alloc dyn Allocator) -> ZString<'alloc> {
        ZString {
            storage: Box::default(),
            used: 0,
            alloc,
        }
    }

    /// Buffer seeded with `bytes` on the host-heap allocator.
    pub fn from_slice(bytes: &[u8]) -> Result<ZString<'static>> {
        ZString::from_slice_in(bytes, &SYSTEM)
    }

    /// Buffer seeded with `bytes`, bound to `alloc`.
    pub fn from_slice_in(bytes: &[u8], alloc: &'alloc dyn Allocator) -> Result<ZString<'alloc>> {
        let mut s = ZString::new_in(alloc);
        s.append(bytes)?;
        Ok(s)
    }

    /// Meaningful bytes, excluding the terminator.
    pub fn len(&self) -> usize {
        self.used
    }

    pub fn is_empty(&self) -> bool {
        self.used == 0
    }

    /// Total bytes currently allocated for the backing store.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Content without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage[..self.used]
    }

    /// Content including the trailing zero terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        if self.storage.is_empty() {
            // Fresh buffers defer allocation; hand out a static terminator.
            return &[0];
        }
        &self.storage[..=self.used]
    }

    /// The allocator this buffer was bound to at construction.
    pub fn allocator(&self) -> &'alloc dyn Allocator {
        self.alloc
    }

    /// Independent copy of the whole content on the same allocator.
    pub fn try_clone(&self) -> Result<ZString<'alloc>> {
        ZString::from_slice_in(self.as_bytes(), self.alloc)
    }

    /// Pre-size the buffer: grow capacity by `pct` percent of the current
    /// content length, or by `pct` absolute bytes when the buffer is empty.
    /// Rounds toward zero; never shrinks. A computed delta of zero is a
    /// no-op and existing content is never disturbed.
    pub fn grow_by_percent(&mut self, pct: usize) -> Result<()> {
        let extra = if self.used == 0 {
            pct
        } else {
            self.used * pct / 100
        };
        if extra == 0 {
            return Ok(());
        }
        self.regrow(self.capacity() + extra)
    }

    /// Append `bytes` to the end of the content.
    pub fn append(&mut self, bytes: &[u8]) -> Result<()> {
        self.ensure_spare(bytes.len())?;
        let end = self.used + bytes.len();
        self.storage[self.used..end].copy_from_slice(bytes);
        self.used = end;
        self.storage[end] = 0;
        Ok(())
    }

    /// Append the inclusive sub-range `[start, end]` of `bytes`.
    /// Requires `start <= end < bytes.len()`.
    pub fn append_range(&mut self, bytes: &[u8], start: usize, end: usize) -> Result<()> {
        self.append(&bytes[start..=end])
    }

    /// Append formatted output.
    ///
    /// Renders `args` twice: a measuring pass to learn the exact byte
    /// length, then the real pass directly into the tail of the backing
    /// store. A format producing zero bytes leaves content and length
    /// untouched.
    pub fn append_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        let n = fmtsink::measure(args)?;
        self.ensure_spare(n)?;
        let end = self.used + n;
        fmtsink::write_into(&mut self.storage[self.used..end], args)?;
        self.used = end;
        self.storage[end] = 0;
        Ok(())
    }

    /// Insert `bytes` at offset `at`, shifting `[at, len())` rightward.
    ///
    /// `at == len()` behaves as append, `at == 0` as prepend.
    /// Requires `at <= len()`.
    pub fn insert(&mut self, at: usize, bytes: &[u8]) -> Result<()> {
        self.ensure_spare(bytes.len())?;
        let n = bytes.len();
        let end = self.used + n;
        self.storage.copy_within(at..self.used, at + n);
        self.storage[at..at + n].copy_from_slice(bytes);
        self.used = end;
        self.storage[end] = 0;
        Ok(())
    }

    /// Insert formatted output at offset `at`.
    ///
    /// Same two-pass scheme as [`append_fmt`](Self::append_fmt); the writing
    /// pass covers exactly the opened gap, so the shifted tail starting at
    /// `at + formatted_len` is preserved byte-for-byte.
    /// Requires `at <= len()`.
    pub fn insert_fmt(&mut self, at: usize, args: fmt::Arguments<'_>) -> Result<()> {
        let n = fmtsink::measure(args)?;
        self.ensure_spare(n)?;
        let end = self.used + n;
        self.storage.copy_within(at..self.used, at + n);
        fmtsink::write_into(&mut self.storage[at..at + n], args)?;
        self.used = end;
        self.storage[end] = 0;
        Ok(())
    }

    /// Remove the inclusive byte range `[start, end]`, shifting any bytes
    /// after `end` left to close the gap.
    ///
    /// Capacity is never released; only growth paths touch the allocator.
    /// Requires `start <= end < len()`.
    pub fn remove(&mut self, start: usize, end: usize) {
        let removed = end - start + 1;
        if end + 1 < self.used {
            self.storage.copy_within(end + 1..self.used, start);
        }
        self.used -= removed;
        self.storage[self.used] = 0;
    }

    /// Copy the inclusive range `[start, end]` into a fresh block from this
    /// buffer's allocator.
    ///
    /// The block is `end - start + 2` bytes: the content plus a zero
    /// terminator. Ownership transfers fully to the caller; return it via
    /// the same allocator's `deallocate`, or just drop it.
    /// Requires `start <= end < len()`.
    pub fn raw_substr(&self, start: usize, end: usize) -> Result<Box<[u8]>> {
        let n = end - start + 1;
        let mut out = self.alloc.allocate(n + 1)?;
        out[..n].copy_from_slice(&self.storage[start..=end]);
        out[n] = 0;
        Ok(out)
    }

    /// Standalone buffer holding the inclusive range `[start, end]`, bound
    /// to the same allocator as this one.
    ///
    /// The intermediate raw extraction is zeroized and returned to the
    /// allocator before this returns; the result has no ownership tie to
    /// the source. Requires `start <= end < len()`.
    pub fn substr(&self, start: usize, end: usize) -> Result<ZString<'alloc>> {
        let mut raw = self.raw_substr(start, end)?;
        let n = end - start + 1;
        let copy = ZString::from_slice_in(&raw[..n], self.alloc);
        raw.zeroize();
        self.alloc.deallocate(raw);
        copy
    }

    /// Grow the backing store so that `additional` more content bytes plus
    /// the terminator fit.
    ///
    /// Reallocates to 1.25x the strict requirement plus one terminator
    /// byte. The 1.25 factor (rather than 2x) trades more frequent
    /// reallocation for lower peak memory; growth stays geometric, which is
    /// what keeps repeated appends amortized O(1).
    fn ensure_spare(&mut self, additional: usize) -> Result<()> {
        if self.used + additional < self.capacity() {
            return Ok(());
        }
        let need = self.capacity() + additional;
        self.regrow(need + need / 4 + 1)
    }

    /// Reallocate the backing store to `new_cap` bytes. On failure the
    /// buffer is left byte-for-byte unmodified.
    fn regrow(&mut self, new_cap: usize) -> Result<()> {
        #[cfg(feature = "tracing")]
        tracing::trace!(old_cap = self.capacity(), new_cap, "regrow");
        if self.storage.is_empty() {
            self.storage = self.alloc.allocate(new_cap)?;
        } else {
            self.alloc.reallocate(&mut self.storage, new_cap)?;
        }
        Ok(())
    }
}

impl Drop for ZString<'_> {
    /// Infallible teardown: zeroize the backing block, then return it to
    /// the bound allocator.
    fn drop(&mut self) {
        let mut block = std::mem::take(&mut self.storage);
        if !block.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::trace!(cap = block.len(), "teardown");
            block.zeroize();
            self.alloc.deallocate(block);
        }
    }
}

impl Deref for ZString<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Default for ZString<'static> {
    fn default() -> Self {
        ZString::new()
    }
}

impl fmt::Debug for ZString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZString")
            .field("len", &self.used)
            .field("capacity", &self.capacity())
            .field("content", &String::from_utf8_lossy(self.as_bytes()))
            .finish()
    }
}
