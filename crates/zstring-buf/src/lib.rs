#![forbid(unsafe_code)]
//! zstring-buf: growable, zero-terminated byte strings.
//!
//! Concrete buffer implementation for the capability defined in
//! `zstring-core::alloc`. All capacity changes flow through the bound
//! allocator, so policy layers (caps, accounting, failure injection) observe
//! every byte the buffer ever holds.
//!
//! The buffer is single-threaded by design: no locks, no atomics. Callers
//! needing concurrent mutation must serialize externally.

mod fmtsink;
pub mod string;

pub use string::ZString;
