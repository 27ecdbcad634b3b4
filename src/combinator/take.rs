use crate::{seq::Seq, step::Step};

/// Yields at most a fixed number of elements from the wrapped sequence.
///
/// The emitted-count increments after every upstream pull attempt, element
/// or not, so a terminal signal observed under the limit still consumes one
/// unit. Once the upstream has signaled `Done` or `Fault` it is never
/// pulled again, and once the limit is reached the upstream is left
/// untouched exactly where the last pull left it.
pub struct Take<S> {
    seq: S,
    limit: usize,
    pulled: usize,
    finished: bool,
}

/// Create a sequence yielding at most `limit` elements of `seq`.
///
/// This is the usual way to bound consumption of an unbounded source:
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let mut out = Vec::new();
/// take(range_from(1u32, 1), 3).for_each(|v| out.push(v)).unwrap();
/// assert_eq!(out, [1, 2, 3]);
/// ```
pub fn take<S>(seq: S, limit: usize) -> Take<S>
where
    S: Seq,
{
    Take {
        seq,
        limit,
        pulled: 0,
        finished: false,
    }
}

impl<S> Seq for Take<S>
where
    S: Seq,
{
    type Item = S::Item;

    fn next(&mut self) -> Step<S::Item> {
        if self.finished || self.pulled >= self.limit {
            return Step::Done;
        }

        let step = self.seq.next();
        self.pulled += 1;
        if !step.is_item() {
            self.finished = true;
        }
        step
    }
}
