use std::fmt;

use crate::Numeric;

/// Optional inclusive bounds enforced on every parsed value.
///
/// Each bound is independent. The parsers do not check that `lowest <= highest`; if the bounds
/// are inverted, every value is simply rejected by one of them.
///
/// # Example
///
/// ```
/// use numseq::Limits;
///
/// let percent = Limits::<i64>::between(0, 100);
/// assert_eq!(percent.to_string(), "from 0 to 100");
///
/// let positive = Limits::at_least(1.0);
/// assert_eq!(positive.to_string(), "at least 1");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Limits<T> {
    lowest: Option<T>,
    highest: Option<T>,
}

impl<T: Numeric> Limits<T> {
    /// Creates limits from independently optional bounds.
    #[must_use]
    pub fn new(lowest: Option<T>, highest: Option<T>) -> Self {
        Self { lowest, highest }
    }

    /// Limits that accept every finite value.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::new(None, None)
    }

    /// Limits that only accept values `>= lowest`.
    #[must_use]
    pub fn at_least(lowest: T) -> Self {
        Self::new(Some(lowest), None)
    }

    /// Limits that only accept values `<= highest`.
    #[must_use]
    pub fn at_most(highest: T) -> Self {
        Self::new(None, Some(highest))
    }

    /// Limits that only accept values in `lowest..=highest`.
    #[must_use]
    pub fn between(lowest: T, highest: T) -> Self {
        Self::new(Some(lowest), Some(highest))
    }

    /// The inclusive lower bound, if any.
    #[must_use]
    pub fn lowest(&self) -> Option<T> {
        self.lowest
    }

    /// The inclusive upper bound, if any.
    #[must_use]
    pub fn highest(&self) -> Option<T> {
        self.highest
    }

    /// Returns the lower bound if `value` falls below it.
    pub(crate) fn lowest_violated_by(&self, value: T) -> Option<T> {
        self.lowest.filter(|lowest| value < *lowest)
    }

    /// Returns the upper bound if `value` rises above it.
    pub(crate) fn highest_violated_by(&self, value: T) -> Option<T> {
        self.highest.filter(|highest| value > *highest)
    }

    pub(crate) fn is_unbounded(&self) -> bool {
        self.lowest.is_none() && self.highest.is_none()
    }
}

impl<T: Numeric> Default for Limits<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T: Numeric> fmt::Display for Limits<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.lowest, self.highest) {
            (Some(lowest), Some(highest)) => write!(f, "from {lowest} to {highest}"),
            (Some(lowest), None) => write!(f, "at least {lowest}"),
            (None, Some(highest)) => write!(f, "not over {highest}"),
            (None, None) => Ok(()),
        }
    }
}
