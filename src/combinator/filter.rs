use crate::{seq::Seq, step::Step};

/// Keeps only the elements of the wrapped sequence that satisfy a
/// predicate.
///
/// Rejected elements are discarded and never revisited; relative order of
/// the survivors is preserved. `Done` and `Fault` pass through.
pub struct Filter<S, P> {
    seq: S,
    predicate: P,
}

/// Create a sequence yielding only the elements of `seq` for which
/// `predicate` returns `true`.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let mut seq = filter(range_from(1u32, 1), |v| v % 3 == 0);
/// assert_eq!(seq.next().unwrap_item(), 3);
/// assert_eq!(seq.next().unwrap_item(), 6);
/// ```
pub fn filter<S, P>(seq: S, predicate: P) -> Filter<S, P>
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    Filter { seq, predicate }
}

impl<S, P> Seq for Filter<S, P>
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Step<S::Item> {
        // A loop, not recursion: a long run of rejected elements must not
        // grow the stack.
        loop {
            match self.seq.next() {
                Step::Item(item) => {
                    if (self.predicate)(&item) {
                        return Step::Item(item);
                    }
                }
                Step::Done => return Step::Done,
                Step::Fault(err) => return Step::Fault(err),
            }
        }
    }
}
