//! Core trait for pull-based sequences.
//!
//! This module defines the [`Seq`] trait, the single contract every source,
//! combinator, and terminal operation in this crate speaks. A [`Seq`] is a
//! stateful, single-pass cursor: each call to [`next`](Seq::next) advances it
//! and returns a [`Step`] carrying the next element, the end-of-data signal,
//! or an upstream fault.
//!
//! # The Seq trait
//!
//! A `Seq<Item = T>`:
//! - produces elements of type `T`, one per pull;
//! - is exclusively owned by whatever pulls it — there is no shared or
//!   re-entrant traversal;
//! - signals exhaustion with [`Step::Done`] and keeps signaling it on every
//!   later pull.
//!
//! # Examples
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! let sum = range_from(1i64, 1)
//!     .map(|v| v * 3)
//!     .filter(|v| v % 2 == 0)
//!     .take(5)
//!     .reduce(None, |sum: i64, v| sum + v)
//!     .unwrap();
//! assert_eq!(sum, 6 + 12 + 18 + 24 + 30);
//! ```

use crate::{
    combinator::{Filter, Map, Take, TryMap, filter, map, take, try_map},
    error::Result,
    iter::SeqIter,
    run::{for_each, reduce},
    step::Step,
};

/// A pull-based, single-pass producer of elements of one type.
///
/// Implementors only provide [`next`](Seq::next); the adapter and terminal
/// methods are thin wrappers over the free functions in
/// [`combinator`](crate::combinator) and [`run`](crate::run).
pub trait Seq {
    /// Element type produced by this sequence.
    type Item;

    /// Pull the next element, advancing internal state.
    ///
    /// Returns [`Step::Item`] with the element, [`Step::Done`] once no
    /// further elements exist, or [`Step::Fault`] if the source or an
    /// upstream transform failed. Callers must stop pulling on `Done` and
    /// `Fault`; the fault is produced in place of an element, never
    /// alongside one.
    fn next(&mut self) -> Step<Self::Item>;

    /// Lazily transform every element with `f`.
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// let items = [1, 2, 3];
    /// let mut seq = from_slice(&items).map(|v| v * 10);
    /// assert_eq!(seq.next().unwrap_item(), 10);
    /// ```
    fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> B,
    {
        map(self, f)
    }

    /// Lazily transform every element with a fallible `f`; an `Err` becomes
    /// an upstream fault for downstream consumers.
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    /// use pullseq::Error;
    ///
    /// let lines = ["17", "not a number"];
    /// let mut seq = from_slice(&lines)
    ///     .try_map(|s| s.parse::<i32>().map_err(Error::transform));
    /// assert_eq!(seq.next().unwrap_item(), 17);
    /// assert!(seq.next().is_fault());
    /// ```
    fn try_map<B, F>(self, f: F) -> TryMap<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Result<B>,
    {
        try_map(self, f)
    }

    /// Keep only elements for which `predicate` returns `true`.
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// let items = [1, 2, 3, 4];
    /// let mut seq = from_slice(&items).filter(|v| **v % 2 == 0);
    /// assert_eq!(seq.next().unwrap_item(), &2);
    /// assert_eq!(seq.next().unwrap_item(), &4);
    /// assert!(seq.next().is_done());
    /// ```
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        filter(self, predicate)
    }

    /// Stop after at most `limit` elements.
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// let mut seq = range_from(0u32, 1).take(2);
    /// assert_eq!(seq.next().unwrap_item(), 0);
    /// assert_eq!(seq.next().unwrap_item(), 1);
    /// assert!(seq.next().is_done());
    /// ```
    fn take(self, limit: usize) -> Take<Self>
    where
        Self: Sized,
    {
        take(self, limit)
    }

    /// Drain the sequence, applying `f` to each element. See
    /// [`run::for_each`](crate::run::for_each).
    fn for_each<F>(self, f: F) -> Result<()>
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        for_each(self, f)
    }

    /// Fold the sequence left-to-right into an accumulator. See
    /// [`run::reduce`](crate::run::reduce).
    fn reduce<R, F>(self, initial: Option<R>, reducer: F) -> Result<R>
    where
        Self: Sized,
        R: Default,
        F: FnMut(R, Self::Item) -> R,
    {
        reduce(self, initial, reducer)
    }

    /// Bridge into a fused std [`Iterator`] over `Result<Item>`.
    fn into_iter(self) -> SeqIter<Self>
    where
        Self: Sized,
    {
        SeqIter::new(self)
    }

    /// Erase the concrete type behind a boxed trait object.
    fn boxed(self) -> Box<dyn Seq<Item = Self::Item>>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<S> Seq for &mut S
where
    S: Seq + ?Sized,
{
    type Item = S::Item;

    fn next(&mut self) -> Step<Self::Item> {
        (**self).next()
    }
}

impl<S> Seq for Box<S>
where
    S: Seq + ?Sized,
{
    type Item = S::Item;

    fn next(&mut self) -> Step<Self::Item> {
        (**self).next()
    }
}

/// `None` behaves as an already-exhausted sequence.
impl<S> Seq for Option<S>
where
    S: Seq,
{
    type Item = S::Item;

    fn next(&mut self) -> Step<Self::Item> {
        match self {
            Some(seq) => seq.next(),
            None => Step::Done,
        }
    }
}

/// Lets callers pick between two differently-typed sequences at run time
/// without boxing.
impl<L, R> Seq for either::Either<L, R>
where
    L: Seq,
    R: Seq<Item = L::Item>,
{
    type Item = L::Item;

    fn next(&mut self) -> Step<Self::Item> {
        match self {
            either::Either::Left(l) => l.next(),
            either::Either::Right(r) => r.next(),
        }
    }
}
