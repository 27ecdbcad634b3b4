//! Bridge from [`Seq`] to std [`Iterator`].
//!
//! The element channel and the fault channel collapse into
//! `Result<Item>`: an element becomes `Some(Ok(..))`, a fault becomes
//! `Some(Err(..))`, and end-of-data becomes `None`. The iterator is fused —
//! after yielding `None` or an `Err` it never pulls the sequence again.

use crate::{error::Result, seq::Seq, step::Step};

/// Iterator over the steps of a [`Seq`].
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let collected: pullseq::Result<Vec<u32>> =
///     take(range_from(1u32, 1), 4).into_iter().collect();
/// assert_eq!(collected.unwrap(), [1, 2, 3, 4]);
/// ```
pub struct SeqIter<S> {
    seq: S,
    finished: bool,
}

impl<S> SeqIter<S>
where
    S: Seq,
{
    pub(crate) fn new(seq: S) -> SeqIter<S> {
        SeqIter {
            seq,
            finished: false,
        }
    }
}

impl<S> Iterator for SeqIter<S>
where
    S: Seq,
{
    type Item = Result<S::Item>;

    fn next(&mut self) -> Option<Result<S::Item>> {
        if self.finished {
            return None;
        }

        match self.seq.next() {
            Step::Item(item) => Some(Ok(item)),
            Step::Done => {
                self.finished = true;
                None
            }
            Step::Fault(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::Error,
        seq::Seq,
        source::{from_slice, range_from},
    };

    #[test]
    fn test_collects_elements_until_done() {
        let items = [1, 2, 3];
        let collected: Result<Vec<i32>> = from_slice(&items).map(|v| *v).into_iter().collect();
        assert_eq!(collected.unwrap(), [1, 2, 3]);
    }

    #[test]
    fn test_fault_surfaces_as_err_then_fuses() {
        struct FaultOnce {
            fired: bool,
        }
        impl Seq for FaultOnce {
            type Item = i32;
            fn next(&mut self) -> crate::Step<i32> {
                if self.fired {
                    panic!("pulled after faulting");
                }
                self.fired = true;
                crate::Step::Fault(Error::transform("broken"))
            }
        }

        let mut iter = SeqIter::new(FaultOnce { fired: false });
        assert!(iter.next().unwrap().is_err());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_plays_with_std_adapters() {
        let sum: u64 = range_from(1u64, 1)
            .take(10)
            .into_iter()
            .map(|v| v.unwrap())
            .sum();
        assert_eq!(sum, 55);
    }
}
