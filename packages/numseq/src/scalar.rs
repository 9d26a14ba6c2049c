use std::fmt;

use crate::{ErrorTag, Limits, Number, Numeric, NumericKind, ParseError, Result};

/// Parses a single number and enforces optional limits on it.
///
/// This uses the same literal syntax and limit semantics as a single endpoint of a
/// [`SequenceParser`][crate::SequenceParser].
///
/// # Example
///
/// ```
/// use numseq::{ErrorTag, Limits, ScalarParser};
///
/// let percent = ScalarParser::new(Limits::<i64>::between(0, 100));
///
/// assert_eq!(percent.parse("100").unwrap(), 100);
/// assert_eq!(percent.parse("150").unwrap_err().tag(), ErrorTag::ValueTooHigh);
/// assert!(percent.contains(42));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarParser<T> {
    limits: Limits<T>,
}

impl<T: Numeric> ScalarParser<T> {
    /// Creates a parser that enforces the given limits.
    #[must_use]
    pub fn new(limits: Limits<T>) -> Self {
        Self { limits }
    }

    /// Creates a parser that accepts any finite value.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::new(Limits::unbounded())
    }

    /// Returns a copy of the parser that enforces different limits.
    #[must_use]
    pub fn with_limits(self, limits: Limits<T>) -> Self {
        Self { limits }
    }

    /// The limits enforced on parsed values.
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

    /// Parses `text` as a single number.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorTag::GenericParseError`] if the text is not a literal of the parser's
    /// kind, [`ErrorTag::InfiniteValue`] if it is infinite, and [`ErrorTag::ValueTooLow`] or
    /// [`ErrorTag::ValueTooHigh`] if it is outside the limits.
    pub fn parse(&self, text: &str) -> Result<T> {
        let value = T::parse_literal(text).ok_or_else(|| {
            ParseError::new(
                ErrorTag::GenericParseError,
                text,
                format!("invalid {} value: '{text}'", T::KIND),
            )
        })?;

        self.check(value, text)
    }

    /// Validates an already typed value.
    ///
    /// A floating-point parser accepts integers that convert exactly. An integer parser accepts
    /// no floating-point values, not even integral ones.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorTag::InvalidType`] if the value is not of the parser's kind, otherwise
    /// with the same errors as [`parse()`][Self::parse].
    pub fn validate(&self, value: impl Into<Number>) -> Result<T> {
        let number = value.into();

        let coerced = match (T::KIND, number) {
            (NumericKind::Integer, Number::Float(_)) => None,
            _ => T::from_number(number),
        };

        let Some(value) = coerced else {
            return Err(ParseError::new(
                ErrorTag::InvalidType,
                number.to_string(),
                format!(
                    "Invalid {} value ({number})",
                    T::KIND.to_string().to_lowercase()
                ),
            ));
        };

        self.check(value, &number.to_string())
    }

    /// Whether [`validate()`][Self::validate] would accept `value`.
    ///
    /// Wide integers such as `u64` or `usize` values that do not fit into `i64` are never
    /// accepted.
    #[must_use]
    pub fn contains(&self, value: impl TryInto<Number>) -> bool {
        value
            .try_into()
            .is_ok_and(|number: Number| self.validate(number).is_ok())
    }

    /// Applies [`contains()`][Self::contains] to each value.
    #[must_use]
    pub fn contains_all(&self, values: impl IntoIterator<Item: TryInto<Number>>) -> Vec<bool> {
        values
            .into_iter()
            .map(|value| self.contains(value))
            .collect()
    }

    fn check(&self, value: T, token: &str) -> Result<T> {
        if value.is_infinite() {
            return Err(ParseError::new(
                ErrorTag::InfiniteValue,
                token,
                format!("Numeric values cannot be infinite ({value})"),
            ));
        }

        if let Some(lowest) = self.limits.lowest_violated_by(value) {
            return Err(ParseError::new(
                ErrorTag::ValueTooLow,
                token,
                format!("Value ({value}) must not be less than {lowest}"),
            ));
        }

        if let Some(highest) = self.limits.highest_violated_by(value) {
            return Err(ParseError::new(
                ErrorTag::ValueTooHigh,
                token,
                format!("Value ({value}) must not be higher than {highest}"),
            ));
        }

        Ok(value)
    }
}

impl<T: Numeric> Default for ScalarParser<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T: Numeric> fmt::Display for ScalarParser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", T::KIND)?;

        if !self.limits.is_unbounded() {
            write!(f, " ({})", self.limits)?;
        }

        Ok(())
    }
}
