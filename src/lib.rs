//! zstring: growable, zero-terminated byte strings with pluggable
//! allocation.
//!
//! Facade crate re-exporting the public surface of the workspace members:
//! the [`ZString`] buffer from `zstring-buf` and the [`Allocator`]
//! capability from `zstring-core`.

pub use zstring_buf::ZString;
pub use zstring_core::alloc::{Allocator, SystemAlloc, SYSTEM};
pub use zstring_core::error::{Error, Result};
