#![forbid(unsafe_code)]
//! zstring-core: allocator capability trait and error taxonomy.
//!
//! The concrete buffer implementation lives in `zstring-buf`. Only the
//! `Allocator` capability, the host-heap default, and the shared error type
//! live here so any crate can depend on the API without pulling the buffer
//! logic.

pub mod alloc;
pub mod error;
pub mod prelude;

pub use alloc::{Allocator, SystemAlloc, SYSTEM};
pub use error::{Error, Result};
