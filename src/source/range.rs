use num_traits::PrimInt;

use crate::{seq::Seq, step::Step};

/// Arithmetic progression over a primitive integer type.
///
/// Produces `start, start + inc, start + 2 * inc, …`. Without an upper bound
/// the sequence never signals end-of-data; wrap it in
/// [`take`](crate::Seq::take) to bound consumption.
pub struct Range<T> {
    v: T,
    inc: T,
    end: Option<T>,
}

impl<T> Seq for Range<T>
where
    T: PrimInt,
{
    type Item = T;

    fn next(&mut self) -> Step<T> {
        if let Some(end) = self.end {
            // The bound excludes the value the *next* pull would produce,
            // not the one produced now.
            if self.v + self.inc >= end {
                return Step::Done;
            }
        }

        let v = self.v;
        self.v = self.v + self.inc;
        Step::Item(v)
    }
}

/// Create an unbounded sequence counting from `start` in steps of `inc`.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let mut seq = range_from(10u32, 5);
/// assert_eq!(seq.next().unwrap_item(), 10);
/// assert_eq!(seq.next().unwrap_item(), 15);
/// // ...and so on, forever
/// ```
pub fn range_from<T>(start: T, inc: T) -> Range<T>
where
    T: PrimInt,
{
    Range {
        v: start,
        inc,
        end: None,
    }
}

/// Create a bounded sequence counting from `start` in steps of `inc`.
///
/// The sequence stops as soon as the value that would be produced *after*
/// the current one reaches `end`; `end` itself is never produced, and
/// neither is the last value whose successor would reach it.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let mut seq = range(0i32, 2, 6);
/// assert_eq!(seq.next().unwrap_item(), 0);
/// assert_eq!(seq.next().unwrap_item(), 2);
/// assert!(seq.next().is_done()); // 4 + 2 >= 6, so 4 is withheld
/// ```
pub fn range<T>(start: T, inc: T, end: T) -> Range<T>
where
    T: PrimInt,
{
    Range {
        v: start,
        inc,
        end: Some(end),
    }
}
