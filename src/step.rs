use crate::error::{Error, Result};

/// Result of one pull on a [`Seq`](crate::Seq): the next element, the end of
/// the sequence, or an upstream fault.
///
/// `Step` plays the role `Option` plays for iterators, with a third variant
/// so that a fault can never be mistaken for exhaustion. The discriminant is
/// authoritative; consumers must never infer "no more elements" from an
/// element value.
///
/// # Examples
///
/// ```rust
/// use pullseq::Step;
///
/// let item: Step<i32> = Step::Item(42);
/// assert!(item.is_item());
///
/// let doubled = item.map_item(|x| x * 2);
/// assert_eq!(doubled.unwrap_item(), 84);
/// ```
#[derive(Debug)]
pub enum Step<T> {
    /// The next element.
    Item(T),
    /// No further elements exist. Not an error.
    Done,
    /// The source or a fallible transform failed; no element was produced.
    Fault(Error),
}

impl<T> Step<T> {
    /// Returns `true` if the step carries an element.
    ///
    /// ```rust
    /// use pullseq::Step;
    ///
    /// let x: Step<i32> = Step::Item(42);
    /// assert!(x.is_item());
    ///
    /// let y: Step<i32> = Step::Done;
    /// assert!(!y.is_item());
    /// ```
    #[inline]
    pub const fn is_item(&self) -> bool {
        matches!(self, Step::Item(_))
    }

    /// Returns `true` if the step signals end-of-data.
    ///
    /// ```rust
    /// use pullseq::Step;
    ///
    /// let x: Step<i32> = Step::Done;
    /// assert!(x.is_done());
    /// ```
    #[inline]
    pub const fn is_done(&self) -> bool {
        matches!(self, Step::Done)
    }

    /// Returns `true` if the step carries a fault.
    ///
    /// ```rust
    /// use pullseq::{Error, Step};
    ///
    /// let x: Step<i32> = Step::Fault(Error::transform("boom"));
    /// assert!(x.is_fault());
    /// ```
    #[inline]
    pub const fn is_fault(&self) -> bool {
        matches!(self, Step::Fault(_))
    }

    /// Converts into `Option<T>`, discarding the termination signal if any.
    ///
    /// ```rust
    /// use pullseq::Step;
    ///
    /// let x: Step<i32> = Step::Item(42);
    /// assert_eq!(x.item(), Some(42));
    ///
    /// let y: Step<i32> = Step::Done;
    /// assert_eq!(y.item(), None);
    /// ```
    #[inline]
    pub fn item(self) -> Option<T> {
        match self {
            Step::Item(item) => Some(item),
            Step::Done | Step::Fault(_) => None,
        }
    }

    /// Converts into `Option<Error>`, discarding any element.
    ///
    /// ```rust
    /// use pullseq::{Error, Step};
    ///
    /// let x: Step<i32> = Step::Fault(Error::transform("boom"));
    /// assert!(x.fault().is_some());
    ///
    /// let y: Step<i32> = Step::Item(42);
    /// assert!(y.fault().is_none());
    /// ```
    #[inline]
    pub fn fault(self) -> Option<Error> {
        match self {
            Step::Fault(err) => Some(err),
            Step::Item(_) | Step::Done => None,
        }
    }

    /// Maps `Step<T>` to `Step<U>` by applying a function to a carried
    /// element, leaving `Done` and `Fault` untouched.
    ///
    /// ```rust
    /// use pullseq::Step;
    ///
    /// let x: Step<i32> = Step::Item(21);
    /// assert_eq!(x.map_item(|v| v * 2).unwrap_item(), 42);
    ///
    /// let y: Step<i32> = Step::Done;
    /// assert!(y.map_item(|v| v * 2).is_done());
    /// ```
    #[inline]
    pub fn map_item<U, F>(self, f: F) -> Step<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Step::Item(item) => Step::Item(f(item)),
            Step::Done => Step::Done,
            Step::Fault(err) => Step::Fault(err),
        }
    }

    /// Converts into the shape a std iterator over fallible values uses:
    /// `Item` becomes `Some(Ok(..))`, `Fault` becomes `Some(Err(..))`, and
    /// `Done` becomes `None`.
    ///
    /// ```rust
    /// use pullseq::Step;
    ///
    /// let x: Step<i32> = Step::Item(42);
    /// assert_eq!(x.into_result().unwrap().unwrap(), 42);
    ///
    /// let y: Step<i32> = Step::Done;
    /// assert!(y.into_result().is_none());
    /// ```
    #[inline]
    pub fn into_result(self) -> Option<Result<T>> {
        match self {
            Step::Item(item) => Some(Ok(item)),
            Step::Done => None,
            Step::Fault(err) => Some(Err(err)),
        }
    }

    /// Returns the contained element, consuming `self`.
    ///
    /// # Panics
    ///
    /// Panics if the step is `Done` or `Fault`.
    ///
    /// ```rust
    /// use pullseq::Step;
    ///
    /// let x: Step<i32> = Step::Item(42);
    /// assert_eq!(x.unwrap_item(), 42);
    /// ```
    ///
    /// ```should_panic
    /// use pullseq::Step;
    ///
    /// let x: Step<i32> = Step::Done;
    /// x.unwrap_item(); // panics
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_item(self) -> T {
        match self {
            Step::Item(item) => item,
            Step::Done => panic!("called `Step::unwrap_item()` on a `Done` value"),
            Step::Fault(err) => {
                panic!("called `Step::unwrap_item()` on a `Fault` value: {err}")
            }
        }
    }

    /// Returns the contained fault, consuming `self`.
    ///
    /// # Panics
    ///
    /// Panics if the step is `Item` or `Done`.
    ///
    /// ```rust
    /// use pullseq::{Error, Step};
    ///
    /// let x: Step<i32> = Step::Fault(Error::transform("boom"));
    /// assert!(x.unwrap_fault().to_string().contains("boom"));
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_fault(self) -> Error {
        match self {
            Step::Fault(err) => err,
            Step::Item(_) => panic!("called `Step::unwrap_fault()` on an `Item` value"),
            Step::Done => panic!("called `Step::unwrap_fault()` on a `Done` value"),
        }
    }

    /// Returns the contained element with a custom panic message.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the step is `Done` or `Fault`.
    #[inline]
    #[track_caller]
    pub fn expect_item(self, msg: &str) -> T {
        match self {
            Step::Item(item) => item,
            Step::Done | Step::Fault(_) => panic!("{}", msg),
        }
    }
}

/// `Ok` becomes `Item`, `Err` becomes `Fault`. This is how fallible
/// transforms feed their outcome back into the pull channel.
impl<T> From<Result<T>> for Step<T> {
    #[inline]
    fn from(result: Result<T>) -> Step<T> {
        match result {
            Ok(item) => Step::Item(item),
            Err(err) => Step::Fault(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        assert!(Step::Item(1).is_item());
        assert!(!Step::Item(1).is_done());
        assert!(Step::<i32>::Done.is_done());
        assert!(Step::<i32>::Fault(Error::transform("x")).is_fault());
    }

    #[test]
    fn test_item_and_fault_conversions() {
        assert_eq!(Step::Item(7).item(), Some(7));
        assert_eq!(Step::<i32>::Done.item(), None);
        assert!(Step::<i32>::Fault(Error::transform("x")).fault().is_some());
        assert!(Step::Item(7).fault().is_none());
    }

    #[test]
    fn test_map_item_leaves_terminal_steps_alone() {
        assert_eq!(Step::Item(3).map_item(|v| v + 1).unwrap_item(), 4);
        assert!(Step::<i32>::Done.map_item(|v| v + 1).is_done());
        assert!(
            Step::<i32>::Fault(Error::transform("x"))
                .map_item(|v| v + 1)
                .is_fault()
        );
    }

    #[test]
    fn test_into_result() {
        assert_eq!(Step::Item(5).into_result().unwrap().unwrap(), 5);
        assert!(Step::<i32>::Done.into_result().is_none());
        assert!(
            Step::<i32>::Fault(Error::transform("x"))
                .into_result()
                .unwrap()
                .is_err()
        );
    }

    #[test]
    fn test_from_result() {
        let ok: Step<i32> = Step::from(Ok(1));
        assert_eq!(ok.unwrap_item(), 1);

        let err: Step<i32> = Step::from(Err(Error::transform("x")));
        assert!(err.is_fault());
    }

    #[test]
    #[should_panic(expected = "called `Step::unwrap_item()` on a `Done` value")]
    fn test_unwrap_item_panics_on_done() {
        Step::<i32>::Done.unwrap_item();
    }

    #[test]
    #[should_panic(expected = "no element")]
    fn test_expect_item_panics_with_message() {
        Step::<i32>::Done.expect_item("no element");
    }
}
