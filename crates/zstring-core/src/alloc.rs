//! Abstract allocation capability.
//!
//! Every capacity change of a buffer flows through one of these three
//! operations, so a custom implementation sees every byte the buffer ever
//! holds. Implementations are policy layers (accounting, caps, failure
//! injection) over the host heap; the crate stays free of unsafe code.

use crate::error::{Error, Result};

/// Allocation capability bound to a buffer at construction time.
///
/// `reallocate` and `deallocate` have provided defaults that delegate to
/// `allocate`/drop, so a minimal implementation only supplies `allocate`.
/// The binding is fixed for the buffer's entire lifetime.
pub trait Allocator: Send + Sync {
    /// Allocate a zeroed block of exactly `size` bytes.
    fn allocate(&self, size: usize) -> Result<Box<[u8]>>;

    /// Resize `block` to `new_size` bytes, preserving the common prefix of
    /// its content (any new tail comes back zeroed).
    ///
    /// On failure `block` is left untouched.
    fn reallocate(&self, block: &mut Box<[u8]>, new_size: usize) -> Result<()> {
        let mut next = self.allocate(new_size)?;
        let keep = block.len().min(new_size);
        next[..keep].copy_from_slice(&block[..keep]);
        let old = std::mem::replace(block, next);
        self.deallocate(old);
        Ok(())
    }

    /// Release a block previously produced by this allocator.
    fn deallocate(&self, block: Box<[u8]>) {
        drop(block);
    }
}

/// Host-heap allocator used when no custom allocator is bound.
///
/// Exhaustion is reported as [`Error::AllocFailed`] instead of aborting the
/// process, so allocation failure stays a recoverable result all the way up.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemAlloc;

impl Allocator for SystemAlloc {
    fn allocate(&self, size: usize) -> Result<Box<[u8]>> {
        let mut block: Vec<u8> = Vec::new();
        block
            .try_reserve_exact(size)
            .map_err(|_| Error::AllocFailed { bytes: size })?;
        block.resize(size, 0);
        Ok(block.into_boxed_slice())
    }
}

/// The allocator buffers are bound to when none is supplied.
pub static SYSTEM: SystemAlloc = SystemAlloc;
