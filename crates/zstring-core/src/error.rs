use thiserror::Error;

/// Canonical result for the zstring crates.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The bound allocator could not satisfy a (re)allocation request.
    ///
    /// This is the only failure a growth-dependent operation can report;
    /// the buffer's prior state is left valid and unmodified.
    #[error("allocation failed for {bytes} bytes")]
    AllocFailed { bytes: usize },

    /// A formatted write rendered a different length across its two passes.
    ///
    /// Only reachable with a `Display` impl that is not deterministic
    /// between the measuring pass and the writing pass.
    #[error("formatted write error: {0}")]
    Fmt(#[from] std::fmt::Error),
}
