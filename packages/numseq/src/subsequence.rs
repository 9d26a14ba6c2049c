use std::iter::FusedIterator;

use crate::{ErrorTag, Limits, Numeric, ParseError, Result};

/// The operator between the two values of a range.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Operator {
    /// `A-B`: the range from `A` to `B`.
    Through,

    /// `A+B`: the range from `A` to `A + B`.
    Increment,
}

impl Operator {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '-' => Some(Self::Through),
            '+' => Some(Self::Increment),
            _ => None,
        }
    }
}

/// Whether a `+` or `-` directly after this character is part of the following literal
/// (a sign or an exponent sign) rather than a range operator.
fn absorbs_sign(c: char) -> bool {
    matches!(c, '+' | '-' | 'e' | 'E')
}

/// Splits `text` at its range operator, if it has one.
///
/// The operator is the last `+` or `-` that is neither the first character nor directly
/// preceded by another sign or an exponent marker. This classifies `-5` as a single value,
/// `-3--1` as the range `-3` through `-1` and `1e-5-1.001e-5` as a range between two values in
/// exponential form.
fn split_range(text: &str) -> Option<(&str, Operator, &str)> {
    let mut previous = None;
    let mut separator = None;

    for (index, c) in text.char_indices() {
        if let Some(operator) = Operator::from_char(c) {
            if previous.is_some_and(|previous| !absorbs_sign(previous)) {
                separator = Some((index, operator));
            }
        }

        previous = Some(c);
    }

    let (index, operator) = separator?;
    let (lower, rest) = text.split_at(index);

    // The operator is a single ASCII byte.
    Some((lower, operator, rest.get(1..).unwrap_or_default()))
}

/// One validated comma-separated part of a sequence, describing the arithmetic progression
/// `lower, lower + step, lower + 2 * step, ...` up to and including `upper`.
///
/// Obtain these from [`SequenceParser::subsequences()`][crate::SequenceParser::subsequences].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Subsequence<'a, T> {
    text: &'a str,
    lower: T,
    upper: T,
    step: T,
}

impl<'a, T: Numeric> Subsequence<'a, T> {
    /// Validates one comma-separated token. `index` is the zero-based position of the token in
    /// the whole input and is only used in diagnostics.
    ///
    /// The first failing rule wins.
    pub(crate) fn parse(text: &'a str, index: usize, limits: &Limits<T>) -> Result<Self> {
        if text.is_empty() {
            return Err(ParseError::new(
                ErrorTag::EmptySubsequence,
                text,
                format!("Subsequence #{index} is empty"),
            ));
        }

        let context = format!("Subsequence \"{text}\":");

        let (range_text, step_text) = match text.split_once('/') {
            Some((range_text, step_text)) => (range_text, Some(step_text)),
            None => (text, None),
        };

        let range = split_range(range_text);

        let step = match step_text {
            None => T::one(),
            Some(step_text) => {
                if range.is_none() {
                    return Err(ParseError::new(
                        ErrorTag::MissingUpper,
                        text,
                        format!("{context} STEP w/o UPPER (\"{text}\")"),
                    ));
                }

                let step = T::parse_literal(step_text).ok_or_else(|| {
                    ParseError::new(
                        ErrorTag::InvalidStep,
                        text,
                        format!("{context} Invalid STEP(\"{step_text}\")"),
                    )
                })?;

                if step <= T::zero() {
                    return Err(ParseError::new(
                        ErrorTag::StepNotPositive,
                        text,
                        format!("{context} STEP must be positive (\"{step}\")"),
                    ));
                }

                step
            }
        };

        let (lower, upper) = match range {
            Some((lower_text, operator, upper_text)) => {
                let lower = T::parse_literal(lower_text).ok_or_else(|| {
                    ParseError::new(
                        ErrorTag::InvalidLower,
                        text,
                        format!("{context} LOWER({lower_text}) is invalid"),
                    )
                })?;

                let upper = T::parse_literal(upper_text).ok_or_else(|| {
                    ParseError::new(
                        ErrorTag::InvalidUpper,
                        text,
                        format!("{context} UPPER({upper_text}) is invalid"),
                    )
                })?;

                let upper = match operator {
                    Operator::Through => upper,
                    Operator::Increment => lower.checked_add(upper).ok_or_else(|| {
                        ParseError::new(
                            ErrorTag::InvalidUpper,
                            text,
                            format!("{context} LOWER({lower}) + INCREMENT({upper}) overflows"),
                        )
                    })?,
                };

                if upper < lower {
                    return Err(ParseError::new(
                        ErrorTag::UpperLessThanLower,
                        text,
                        format!("{context} UPPER({upper}) is less than LOWER({lower})"),
                    ));
                }

                (lower, upper)
            }
            None => {
                let value = T::parse_literal(range_text).ok_or_else(|| {
                    ParseError::new(
                        ErrorTag::GenericParseError,
                        text,
                        format!("invalid {} value: '{range_text}'", T::KIND),
                    )
                })?;

                (value, value)
            }
        };

        if [lower, upper, step].into_iter().any(Numeric::is_infinite) {
            return Err(ParseError::new(
                ErrorTag::InfiniteValue,
                text,
                format!("{context} Numeric values cannot be infinite ({text})"),
            ));
        }

        if let Some(lowest) = limits.lowest_violated_by(lower) {
            return Err(ParseError::new(
                ErrorTag::LowerBelowMinimum,
                text,
                format!("{context} LOWER({lower}) cannot be less than ({lowest})"),
            ));
        }

        if let Some(highest) = limits.highest_violated_by(upper) {
            return Err(ParseError::new(
                ErrorTag::UpperAboveMaximum,
                text,
                format!("{context} UPPER({upper}) cannot be greater than ({highest})"),
            ));
        }

        tracing::trace!(%text, %lower, %upper, %step, "subsequence accepted");

        Ok(Self {
            text,
            lower,
            upper,
            step,
        })
    }

    /// The token this subsequence was parsed from.
    #[must_use]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// The first value of the progression.
    #[must_use]
    pub fn lower(&self) -> T {
        self.lower
    }

    /// The inclusive bound of the progression. This is only itself part of the progression if
    /// the step divides the range evenly.
    #[must_use]
    pub fn upper(&self) -> T {
        self.upper
    }

    /// The increment between consecutive values. Always positive.
    #[must_use]
    pub fn step(&self) -> T {
        self.step
    }

    /// Whether `value` is one of the endpoints or lies inside the range a whole number of steps
    /// above the lower endpoint.
    ///
    /// For floating-point values, the step test tolerates an error of 10 parts per million of
    /// the step size.
    #[must_use]
    pub fn contains(&self, value: T) -> bool {
        if value == self.lower || value == self.upper {
            return true;
        }

        value > self.lower
            && value < self.upper
            && T::is_whole_steps_from(self.lower, value, self.step)
    }

    /// Iterates over the values of the progression in ascending order.
    #[must_use]
    pub fn iter(&self) -> Steps<T> {
        Steps {
            next: Some(self.lower),
            upper: self.upper,
            step: self.step,
        }
    }
}

impl<T: Numeric> IntoIterator for Subsequence<'_, T> {
    type Item = T;
    type IntoIter = Steps<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Numeric> IntoIterator for &Subsequence<'_, T> {
    type Item = T;
    type IntoIter = Steps<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The values of one [`Subsequence`], from its lower endpoint up to at most its upper endpoint.
///
/// Iteration ends early if the next value is not representable (integer overflow) or if adding
/// the step no longer changes a floating-point value.
#[derive(Clone, Debug)]
pub struct Steps<T> {
    next: Option<T>,
    upper: T,
    step: T,
}

impl<T: Numeric> Iterator for Steps<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.next.take()?;

        if current > self.upper {
            return None;
        }

        self.next = current
            .checked_add(self.step)
            .filter(|next| *next > current);

        Some(current)
    }
}

impl<T: Numeric> FusedIterator for Steps<T> {}
