//! Convenient re-exports for downstream crates.

pub use crate::alloc::{Allocator, SystemAlloc, SYSTEM};
pub use crate::error::{Error, Result};
