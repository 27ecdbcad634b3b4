use std::io::BufRead;

use crate::{seq::Seq, step::Step};

/// Sequence over the lines of a byte reader.
///
/// One line is read per pull. Line terminators (`\n`, `\r\n`) are stripped.
/// A read failure surfaces as a fault and takes priority over end-of-data.
pub struct Lines<R> {
    reader: R,
}

impl<R> Seq for Lines<R>
where
    R: BufRead,
{
    type Item = Vec<u8>;

    fn next(&mut self) -> Step<Vec<u8>> {
        let mut line = Vec::new();
        match self.reader.read_until(b'\n', &mut line) {
            Ok(0) => Step::Done,
            Ok(_) => {
                if line.last() == Some(&b'\n') {
                    line.pop();
                    if line.last() == Some(&b'\r') {
                        line.pop();
                    }
                }
                Step::Item(line)
            }
            Err(err) => Step::Fault(err.into()),
        }
    }
}

/// Create a sequence yielding the newline-delimited lines of `reader` as
/// byte vectors.
///
/// The reader (and any file handle behind it) stays owned by the caller's
/// scope; dropping the sequence releases it.
///
/// ```rust
/// use std::io::Cursor;
/// use pullseq::prelude::*;
///
/// let mut seq = lines(Cursor::new(b"one\ntwo\n"));
/// assert_eq!(seq.next().unwrap_item(), b"one");
/// assert_eq!(seq.next().unwrap_item(), b"two");
/// assert!(seq.next().is_done());
/// ```
pub fn lines<R>(reader: R) -> Lines<R>
where
    R: BufRead,
{
    Lines { reader }
}
