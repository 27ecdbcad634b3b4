//! Terminal operations: drain a sequence to completion and produce a final,
//! non-sequence result.
//!
//! Both operations stop at the first terminal [`Step`]: end-of-data maps to
//! success, a fault is returned to the caller as-is with no further pulls
//! and no retry.

use crate::{error::Result, seq::Seq, step::Step};

/// Drain `seq`, applying `f` to each element in pull order.
///
/// Returns `Ok(())` once the sequence signals end-of-data, or the first
/// fault encountered. The closure is assumed infallible; a transformation
/// that can fail belongs in [`try_map`](crate::combinator::try_map)
/// upstream instead.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let mut printed = Vec::new();
/// for_each(take(range_from(1u32, 1), 3), |v| printed.push(v)).unwrap();
/// assert_eq!(printed, [1, 2, 3]);
/// ```
pub fn for_each<S, F>(mut seq: S, mut f: F) -> Result<()>
where
    S: Seq,
    F: FnMut(S::Item),
{
    loop {
        match seq.next() {
            Step::Item(item) => f(item),
            Step::Done => return Ok(()),
            Step::Fault(err) => return Err(err),
        }
    }
}

/// Fold `seq` left-to-right into an accumulator.
///
/// `initial` supplies the starting accumulator; `None` starts from
/// `R::default()`. The reducer runs once per successfully pulled element,
/// in pull order. On end-of-data the accumulator is returned; on a fault
/// the fault is returned and the partial accumulator is discarded.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let sum = reduce(take(range_from(1u64, 1), 10), None, |sum: u64, v| sum + v);
/// assert_eq!(sum.unwrap(), 55);
/// ```
pub fn reduce<S, R, F>(mut seq: S, initial: Option<R>, mut reducer: F) -> Result<R>
where
    S: Seq,
    R: Default,
    F: FnMut(R, S::Item) -> R,
{
    let mut acc = initial.unwrap_or_default();
    loop {
        match seq.next() {
            Step::Item(item) => acc = reducer(acc, item),
            Step::Done => return Ok(acc),
            Step::Fault(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        combinator::take,
        error::Error,
        source::{from_slice, range_from},
    };

    #[test]
    fn test_for_each_visits_in_order_and_succeeds() {
        let items = ["a", "b", "c"];
        let mut seen = Vec::new();
        for_each(from_slice(&items), |s| seen.push(*s)).unwrap();
        assert_eq!(seen, items);
    }

    #[test]
    fn test_for_each_stops_at_first_fault() {
        struct ItemThenFault {
            state: u8,
        }
        impl Seq for ItemThenFault {
            type Item = u8;
            fn next(&mut self) -> Step<u8> {
                self.state += 1;
                match self.state {
                    1 => Step::Item(1),
                    2 => Step::Fault(Error::transform("broken")),
                    _ => panic!("pulled past the fault"),
                }
            }
        }

        let mut seen = Vec::new();
        let err = for_each(ItemThenFault { state: 0 }, |v| seen.push(v)).unwrap_err();
        assert!(err.to_string().contains("broken"));
        assert_eq!(seen, [1]);
    }

    #[test]
    fn test_reduce_sums_in_pull_order() {
        let total = reduce(take(crate::source::range_from(1i64, 1), 10), None, |s: i64, v| {
            s + v
        });
        assert_eq!(total.unwrap(), 55);
    }

    #[test]
    fn test_reduce_empty_returns_default_without_invoking_reducer() {
        let items: [i32; 0] = [];
        let total = reduce(from_slice(&items), None, |_, _| -> i32 {
            panic!("reducer invoked on empty sequence")
        });
        assert_eq!(total.unwrap(), 0);
    }

    #[test]
    fn test_reduce_uses_supplied_initial_value() {
        let items = [1, 2, 3];
        let total = reduce(from_slice(&items), Some(100), |s, v| s + v).unwrap();
        assert_eq!(total, 106);
    }

    #[test]
    fn test_reduce_returns_fault_not_partial_accumulator() {
        let items = ["1", "x"];
        let seq = crate::combinator::try_map(from_slice(&items), |s| {
            s.parse::<i32>().map_err(Error::transform)
        });
        assert!(reduce(seq, None, |s: i32, v| s + v).is_err());
    }

    #[test]
    fn test_reduce_into_a_collection() {
        use std::collections::HashMap;

        let items = ["ant", "bee", "ant"];
        let counts: HashMap<&str, usize> = reduce(from_slice(&items), None, |mut acc: HashMap<&str, usize>, word| {
            *acc.entry(*word).or_insert(0) += 1;
            acc
        })
        .unwrap();
        assert_eq!(counts["ant"], 2);
        assert_eq!(counts["bee"], 1);
    }

    #[test]
    fn test_take_bounds_an_infinite_source() {
        let total = reduce(take(range_from(1u64, 1), 1000), None, |s: u64, v| s + v).unwrap();
        assert_eq!(total, 500_500);
    }
}
