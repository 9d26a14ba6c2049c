use std::iter::{Enumerate, FusedIterator};
use std::str::Split;

use crate::{Limits, Numeric, ParseError, Steps, Subsequence};

/// Produces the values of a sequence one at a time, validating each comma-separated subsequence
/// only when iteration reaches it.
///
/// Returned by [`SequenceParser::parse_lazy()`][crate::SequenceParser::parse_lazy]. Yields
/// `Ok(value)` for every value in textual order. If a subsequence is invalid, the values of the
/// subsequences before it are yielded first, followed by a single `Err` item, after which the
/// iterator is exhausted. To start over, call `parse_lazy()` again.
#[derive(Clone, Debug)]
pub struct LazySequence<'a, T> {
    tokens: Enumerate<Split<'a, char>>,
    limits: Limits<T>,
    current: Option<Steps<T>>,
    failed: bool,
}

impl<'a, T: Numeric> LazySequence<'a, T> {
    pub(crate) fn new(text: &'a str, limits: Limits<T>) -> Self {
        Self {
            tokens: text.split(',').enumerate(),
            limits,
            current: None,
            failed: false,
        }
    }
}

impl<T: Numeric> Iterator for LazySequence<'_, T> {
    type Item = Result<T, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.current.as_mut().and_then(Iterator::next) {
                return Some(Ok(value));
            }

            if self.failed {
                return None;
            }

            let (index, token) = self.tokens.next()?;

            match Subsequence::parse(token, index, &self.limits) {
                Ok(subsequence) => self.current = Some(subsequence.iter()),
                Err(error) => {
                    self.failed = true;
                    self.current = None;
                    return Some(Err(error));
                }
            }
        }
    }
}

impl<T: Numeric> FusedIterator for LazySequence<'_, T> {}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::ErrorTag;

    #[test]
    fn yields_in_textual_order() {
        let values: Vec<i64> = LazySequence::new("8-10,30,1", Limits::unbounded())
            .map(Result::unwrap)
            .collect();

        assert_eq!(values, vec![8, 9, 10, 30, 1]);
    }

    #[test]
    fn validates_only_when_reached() {
        let mut sequence = LazySequence::<i64>::new("1-3,10-5,7", Limits::unbounded());

        assert_eq!(sequence.next(), Some(Ok(1)));
        assert_eq!(sequence.next(), Some(Ok(2)));
        assert_eq!(sequence.next(), Some(Ok(3)));

        let error = sequence.next().unwrap().unwrap_err();
        assert_eq!(error.tag(), ErrorTag::UpperLessThanLower);
        assert_eq!(error.token(), "10-5");

        assert_eq!(sequence.next(), None);
        assert_eq!(sequence.next(), None);
    }

    #[test]
    fn does_not_materialize_large_ranges() {
        let mut sequence = LazySequence::<i64>::new("0-9223372036854775806", Limits::unbounded());

        assert_eq!(sequence.nth(1000), Some(Ok(1000)));
    }

    #[test]
    fn empty_input_is_an_error() {
        let mut sequence = LazySequence::<f64>::new("", Limits::unbounded());

        assert_eq!(
            sequence.next().unwrap().unwrap_err().tag(),
            ErrorTag::EmptySubsequence
        );
        assert_eq!(sequence.next(), None);
    }

    #[test]
    fn clone_restarts_from_same_position() {
        let mut sequence = LazySequence::<i64>::new("1-4", Limits::unbounded());
        sequence.next();

        let copy = sequence.clone();

        assert_eq!(
            sequence.map(Result::unwrap).collect::<Vec<_>>(),
            copy.map(Result::unwrap).collect::<Vec<_>>()
        );
    }
}
