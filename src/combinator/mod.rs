//! Transform combinators: each wraps exactly one upstream sequence and is
//! itself a sequence.

mod filter;
mod map;
mod take;

pub use filter::{Filter, filter};
pub use map::{Map, TryMap, map, try_map};
pub use take::{Take, take};
