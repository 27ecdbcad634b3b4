//! Fault values carried by [`Step::Fault`](crate::Step::Fault).
//!
//! A fault is anything that is *not* the end of the sequence: an I/O failure
//! in a line-backed source, or a failure inside a fallible transform. Faults
//! pass through every combinator unchanged and surface from the terminal
//! operation; nothing in this crate retries, swallows, or logs them.

use thiserror::Error;

/// Boxed error type accepted from fallible transforms.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error produced by a primitive source or a fallible transform.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying reader of an I/O-backed source failed.
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    /// A fallible transform rejected an element.
    #[error("transform failed: {0}")]
    Transform(#[source] BoxedError),
}

impl Error {
    /// Wrap an arbitrary error from a fallible transform.
    ///
    /// ```rust
    /// use pullseq::Error;
    ///
    /// let err = Error::transform("bad record".parse::<i32>().unwrap_err());
    /// assert!(err.to_string().starts_with("transform failed"));
    /// ```
    pub fn transform<E>(source: E) -> Error
    where
        E: Into<BoxedError>,
    {
        Error::Transform(source.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
