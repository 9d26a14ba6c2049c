use std::fmt;

use crate::{LazySequence, Limits, Number, Numeric, NumericKind, Result, Subsequence, coerce};

/// Parses the compact sequence notation into the numbers it describes, tests numbers for
/// membership without expanding the notation and encodes numbers back into the notation.
///
/// The type parameter selects the numeric kind: `SequenceParser<i64>` parses integers and
/// `SequenceParser<f64>` parses floating-point numbers.
///
/// A parser holds only its configuration, so a single instance can be shared between threads and
/// reused for any number of inputs. Every call returns its own result.
///
/// See [package-level documentation][crate] for the grammar.
///
/// # Example
///
/// ```
/// use numseq::{ErrorTag, Limits, SequenceParser};
///
/// let parser = SequenceParser::new(Limits::<i64>::between(0, 100));
///
/// assert_eq!(parser.parse("8,10+3").unwrap(), vec![8, 10, 11, 12, 13]);
/// assert!(parser.contains("5-30/5", 25));
///
/// let error = parser.parse("90-110").unwrap_err();
/// assert_eq!(error.tag(), ErrorTag::UpperAboveMaximum);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SequenceParser<T> {
    limits: Limits<T>,
}

impl<T: Numeric> SequenceParser<T> {
    /// Creates a parser that enforces the given limits on every subsequence endpoint.
    #[must_use]
    pub fn new(limits: Limits<T>) -> Self {
        Self { limits }
    }

    /// Creates a parser that accepts any finite values.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::new(Limits::unbounded())
    }

    /// Returns a copy of the parser that enforces different limits.
    #[must_use]
    pub fn with_limits(self, limits: Limits<T>) -> Self {
        Self { limits }
    }

    /// The limits enforced on parsed endpoints.
    #[must_use]
    pub fn limits(&self) -> Limits<T> {
        self.limits
    }

    /// The numeric kind this parser works with.
    #[must_use]
    #[expect(
        clippy::unused_self,
        reason = "the kind is a property of the type but callers usually have an instance at hand"
    )]
    pub fn kind(&self) -> NumericKind {
        T::KIND
    }

    /// Parses `text` and returns every number it describes, in textual order.
    ///
    /// Neither sorting nor deduplication takes place. Parsing is all-or-nothing: the first
    /// invalid subsequence fails the whole call.
    ///
    /// # Errors
    ///
    /// Returns the error of the first comma-separated subsequence that violates a rule of the
    /// grammar, is of the wrong kind or lies outside the limits.
    pub fn parse(&self, text: &str) -> Result<Vec<T>> {
        self.parse_lazy(text).collect()
    }

    /// Returns an iterator over the numbers described by `text`, for callers that want to avoid
    /// materializing large ranges.
    ///
    /// The subsequences are validated one by one as iteration reaches them. See
    /// [`LazySequence`] for how errors are reported.
    #[must_use]
    pub fn parse_lazy<'a>(&self, text: &'a str) -> LazySequence<'a, T> {
        LazySequence::new(text, self.limits)
    }

    /// Validates every comma-separated subsequence of `text` without expanding any of them.
    ///
    /// # Errors
    ///
    /// Returns the same error as [`parse()`][Self::parse] would for the same input.
    pub fn subsequences<'a>(&self, text: &'a str) -> Result<Vec<Subsequence<'a, T>>> {
        text.split(',')
            .enumerate()
            .map(|(index, token)| Subsequence::parse(token, index, &self.limits))
            .collect()
    }

    /// Whether `value` is one of the numbers described by `text`.
    ///
    /// This does not expand the ranges in `text`. Endpoints of a range always count as members.
    /// Floating-point values that are within 10 parts per million of the step size from a
    /// member also count as members.
    ///
    /// Returns `false` if `text` is not valid or if `value` cannot be converted exactly into
    /// the numeric kind of the parser (integers are accepted by a floating-point parser). This
    /// includes wide integers such as `u64` or `usize` values that do not fit into `i64`.
    #[must_use]
    pub fn contains(&self, text: &str, value: impl TryInto<Number>) -> bool {
        let Some(value) = coerce::<T>(value) else {
            return false;
        };

        self.subsequences(text).is_ok_and(|subsequences| {
            subsequences
                .iter()
                .any(|subsequence| subsequence.contains(value))
        })
    }

    /// Applies [`contains()`][Self::contains] to each value, parsing `text` only once.
    #[must_use]
    pub fn contains_all(
        &self,
        text: &str,
        values: impl IntoIterator<Item: TryInto<Number>>,
    ) -> Vec<bool> {
        let subsequences = self.subsequences(text).unwrap_or_default();

        values
            .into_iter()
            .map(|value| {
                coerce::<T>(value).is_some_and(|value| {
                    subsequences
                        .iter()
                        .any(|subsequence| subsequence.contains(value))
                })
            })
            .collect()
    }

    /// Encodes `values` into the compact sequence notation. See [`encode()`][crate::encode()].
    #[must_use]
    #[cfg_attr(test, mutants::skip)] // Trivial forwarder.
    pub fn encode(values: impl IntoIterator<Item = T>) -> String {
        crate::encode(values)
    }
}

impl<T: Numeric> Default for SequenceParser<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T: Numeric> fmt::Display for SequenceParser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Sequence", T::KIND)?;

        if !self.limits.is_unbounded() {
            write!(f, " ({})", self.limits)?;
        }

        Ok(())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;
    use crate::ErrorTag;

    assert_impl_all!(SequenceParser<i64>: Send, Sync, Debug, Clone);
    assert_impl_all!(SequenceParser<f64>: Send, Sync, Debug, Clone);

    fn integers() -> SequenceParser<i64> {
        SequenceParser::unbounded()
    }

    fn floats() -> SequenceParser<f64> {
        SequenceParser::unbounded()
    }

    #[test]
    fn parse_smoke_test() {
        let parser = integers();

        assert_eq!(parser.parse("5").unwrap(), vec![5]);
        assert_eq!(parser.parse("1,3,8").unwrap(), vec![1, 3, 8]);
        assert_eq!(parser.parse("8-10,30").unwrap(), vec![8, 9, 10, 30]);
        assert_eq!(
            parser.parse("5-30/5,100").unwrap(),
            vec![5, 10, 15, 20, 25, 30, 100]
        );
        assert_eq!(parser.parse("8,10+3").unwrap(), vec![8, 10, 11, 12, 13]);
        assert_eq!(parser.parse("10-40/17,1+2").unwrap(), vec![10, 27, 1, 2, 3]);
        assert_eq!(parser.parse("-3--1").unwrap(), vec![-3, -2, -1]);
        assert_eq!(parser.parse("-20+2").unwrap(), vec![-20, -19, -18]);
    }

    #[test]
    fn order_and_duplicates_are_preserved() {
        assert_eq!(
            integers().parse("3,1-2,2,1").unwrap(),
            vec![3, 1, 2, 2, 1]
        );
    }

    #[test]
    fn first_error_wins() {
        let error = integers().parse("1,10-5,x").unwrap_err();

        assert_eq!(error.tag(), ErrorTag::UpperLessThanLower);
        assert_eq!(error.token(), "10-5");
    }

    #[test]
    fn empty_parts_are_errors() {
        assert_eq!(
            integers().parse("").unwrap_err().tag(),
            ErrorTag::EmptySubsequence
        );
        assert_eq!(
            integers().parse("1,,2").unwrap_err().tag(),
            ErrorTag::EmptySubsequence
        );
        assert_eq!(
            integers().parse("1,").unwrap_err().tag(),
            ErrorTag::EmptySubsequence
        );
    }

    #[test]
    fn limits_are_enforced() {
        let parser = SequenceParser::new(Limits::<i64>::between(0, 100));

        assert_eq!(parser.parse("0,100").unwrap(), vec![0, 100]);
        assert_eq!(
            parser.parse("-5-5").unwrap_err().tag(),
            ErrorTag::LowerBelowMinimum
        );
        assert_eq!(
            parser.parse("99-101").unwrap_err().tag(),
            ErrorTag::UpperAboveMaximum
        );
    }

    #[test]
    fn float_parsing() {
        let parser = floats();

        assert_eq!(parser.parse("0.5-2/0.5").unwrap(), vec![0.5, 1.0, 1.5, 2.0]);
        assert_eq!(parser.parse("-2e+2+1e02/100").unwrap(), vec![-200.0, -100.0]);
        assert_eq!(parser.parse("7").unwrap(), vec![7.0]);
    }

    #[test]
    fn lazy_and_eager_agree() {
        let parser = integers();
        let text = "1-10/3,-4--2,7+1";

        let lazy: Result<Vec<i64>> = parser.parse_lazy(text).collect();

        assert_eq!(lazy.unwrap(), parser.parse(text).unwrap());
    }

    #[test]
    fn subsequences_are_not_expanded() {
        let subsequences = integers().subsequences("0-9223372036854775806,5").unwrap();

        assert_eq!(subsequences.len(), 2);
        assert_eq!(subsequences[0].upper(), 9_223_372_036_854_775_806);
        assert_eq!(subsequences[1].text(), "5");
    }

    #[test]
    fn contains_integers() {
        let parser = integers();

        assert!(parser.contains("8-10,30", 9));
        assert!(parser.contains("8-10,30", 30));
        assert!(!parser.contains("8-10,30", 11));
        assert!(parser.contains("5-30/5", 25));
        assert!(!parser.contains("5-30/5", 7));
        assert!(parser.contains("5-30/5", 10.0));
        assert!(!parser.contains("5-30/5", 10.5));
    }

    #[test]
    fn contains_floats_within_tolerance() {
        let parser = floats();

        assert!(parser.contains("5-30/5", 5.00001));
        assert!(parser.contains("5-30/5", 20.00001));
        assert!(!parser.contains("5-30/5", 7));
        assert!(parser.contains("5-30/5", 15));
        assert!(!parser.contains("5-30/5", 30.1));
    }

    #[test]
    fn contains_never_fails() {
        assert!(!integers().contains("garbage", 1));
        assert!(!integers().contains("", 1));
        assert!(!floats().contains("1-5", i64::MAX));
        assert!(!integers().contains("0-5", u64::MAX));
    }

    #[test]
    fn contains_accepts_indexes() {
        assert!(integers().contains("0-5", 3_usize));
        assert!(floats().contains("0-5", 3_u64));
        assert_eq!(
            integers().contains_all("1,3", [1_usize, 2, 3]),
            vec![true, false, true]
        );
    }

    #[test]
    fn contains_spans_wider_than_the_type() {
        let full = "-9223372036854775808-9223372036854775807";

        assert!(integers().contains(full, 0));
        assert!(integers().contains(full, i64::MAX));
        assert!(integers().contains(&format!("{full}/3"), 1));
        assert!(!integers().contains(&format!("{full}/3"), 2));

        assert!(floats().contains("-1e308-1e308/1e307", 9e307));
        assert!(floats().contains("-1e308-1e308/1e307", 0));
        assert!(!floats().contains("-1e308-1e308/1e307", 9.5e307));
    }

    #[test]
    fn contains_all_is_element_wise() {
        assert_eq!(
            integers().contains_all("8-10,30", [7, 8, 9, 30, 31]),
            vec![false, true, true, true, false]
        );
        assert_eq!(
            integers().contains_all("bad", [1, 2]),
            vec![false, false]
        );
        assert_eq!(
            floats().contains_all("0-1/0.25", [0.5, 0.6]),
            vec![true, false]
        );
    }

    #[test]
    fn encode_round_trips() {
        let values = integers().parse("5-30/5").unwrap();
        let text = SequenceParser::encode(values.iter().copied());

        assert_eq!(text, "5-30/5");
        assert_eq!(integers().parse(&text).unwrap(), values);
    }

    #[test]
    fn display() {
        assert_eq!(integers().to_string(), "IntegerSequence");
        assert_eq!(
            SequenceParser::new(Limits::<i64>::between(0, 100)).to_string(),
            "IntegerSequence (from 0 to 100)"
        );
        assert_eq!(
            SequenceParser::new(Limits::at_least(1.5)).to_string(),
            "FloatSequence (at least 1.5)"
        );
        assert_eq!(integers().kind(), NumericKind::Integer);
        assert_eq!(floats().kind(), NumericKind::Float);
    }

    #[test]
    fn with_limits_replaces_limits() {
        let parser = integers().with_limits(Limits::at_most(3));

        assert_eq!(parser.limits().highest(), Some(3));
        assert_eq!(
            parser.parse("1-4").unwrap_err().tag(),
            ErrorTag::UpperAboveMaximum
        );
    }
}
