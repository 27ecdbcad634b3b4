//! Commonly used imports
//!
//! Use `use pullseq::prelude::*;` for quick access to the most common types
//! and functions.

// Core types
pub use crate::{Error, Result, Seq, Step};

// Primitive sources
pub use crate::source::{from_slice, lines, range, range_from};

// Combinators
pub use crate::combinator::{filter, map, take, try_map};

// Terminal operations
pub use crate::run::{for_each, reduce};
