//! Element transforms: total ([`Map`]) and fallible ([`TryMap`]).

use crate::{error::Result, seq::Seq, step::Step};

/// Applies a function to every element pulled from the wrapped sequence.
///
/// Strictly 1:1 and lazy: one upstream pull per downstream pull, no
/// look-ahead. `Done` and `Fault` pass through without invoking the
/// function.
pub struct Map<S, F> {
    seq: S,
    f: F,
}

/// Create a sequence applying `f` to each element of `seq`.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let mut seq = map(range_from(1u32, 1), |v| v * v);
/// assert_eq!(seq.next().unwrap_item(), 1);
/// assert_eq!(seq.next().unwrap_item(), 4);
/// assert_eq!(seq.next().unwrap_item(), 9);
/// ```
pub fn map<S, B, F>(seq: S, f: F) -> Map<S, F>
where
    S: Seq,
    F: FnMut(S::Item) -> B,
{
    Map { seq, f }
}

impl<S, B, F> Seq for Map<S, F>
where
    S: Seq,
    F: FnMut(S::Item) -> B,
{
    type Item = B;

    fn next(&mut self) -> Step<B> {
        self.seq.next().map_item(&mut self.f)
    }
}

/// Applies a fallible function to every element pulled from the wrapped
/// sequence.
///
/// An `Err` from the function surfaces as a fault in place of the element;
/// upstream `Done` and `Fault` pass through without invoking the function.
pub struct TryMap<S, F> {
    seq: S,
    f: F,
}

/// Create a sequence applying the fallible `f` to each element of `seq`.
///
/// Use this when the transformation itself can fail, e.g. parsing a raw
/// line into a structured record:
///
/// ```rust
/// use std::io::Cursor;
/// use pullseq::prelude::*;
/// use pullseq::Error;
///
/// let mut seq = try_map(lines(Cursor::new(b"12\n34\n")), |line| {
///     std::str::from_utf8(&line)
///         .map_err(Error::transform)?
///         .parse::<u32>()
///         .map_err(Error::transform)
/// });
/// assert_eq!(seq.next().unwrap_item(), 12);
/// assert_eq!(seq.next().unwrap_item(), 34);
/// assert!(seq.next().is_done());
/// ```
pub fn try_map<S, B, F>(seq: S, f: F) -> TryMap<S, F>
where
    S: Seq,
    F: FnMut(S::Item) -> Result<B>,
{
    TryMap { seq, f }
}

impl<S, B, F> Seq for TryMap<S, F>
where
    S: Seq,
    F: FnMut(S::Item) -> Result<B>,
{
    type Item = B;

    fn next(&mut self) -> Step<B> {
        match self.seq.next() {
            Step::Item(item) => (self.f)(item).into(),
            Step::Done => Step::Done,
            Step::Fault(err) => Step::Fault(err),
        }
    }
}
