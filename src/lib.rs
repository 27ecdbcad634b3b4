//! # Pullseq: Composable Pull-Based Lazy Sequences
//!
//! Build data pipelines as chains of lazy combinators instead of
//! hand-written imperative loops.
//!
//! ## Core Pieces
//!
//! - **[`Seq`]**: the single-method pull contract every source and
//!   combinator implements
//! - **[`Step`]**: the result of one pull — an element, end-of-data, or an
//!   upstream fault
//!
//! ## Key Features
//!
//! - **Lazy**: nothing is computed until a terminal operation pulls
//! - **Composable**: chain `.map()`, `.try_map()`, `.filter()`, `.take()`
//! - **Fault-transparent**: errors pass through every combinator unchanged
//!   and surface from the terminal operation
//!
//! ## Example
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! // Sum the first 17 even multiples of 3 of 19, 20, 21, ...
//! let sum = range_from(19i64, 1)
//!     .map(|v| v * 3)
//!     .filter(|v| v % 2 == 0)
//!     .take(17)
//!     .reduce(None, |sum: i64, v| sum + v)
//!     .unwrap();
//! assert_eq!(sum, 1836);
//! ```
//!
//! ## Common Functions
//!
//! **Sources:**
//! - [`from_slice(items)`](source::from_slice) - borrow an existing slice
//! - [`lines(reader)`](source::lines) - one line per pull from a `BufRead`
//! - [`range_from(start, inc)`](source::range_from) - unbounded arithmetic
//!   progression
//!
//! **Terminal operations:**
//! - [`for_each(seq, f)`](run::for_each) - drain, applying a side effect
//! - [`reduce(seq, initial, f)`](run::reduce) - fold into an accumulator

pub mod combinator;
mod error;
pub mod iter;
pub mod record;
pub mod run;
mod seq;
pub mod source;
mod step;

pub mod prelude;

pub use error::{BoxedError, Error, Result};
pub use iter::SeqIter;
pub use seq::Seq;
pub use step::Step;
