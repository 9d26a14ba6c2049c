use derive_more::derive::Display;
use thiserror::Error;

/// Identifies which validation rule rejected a piece of input.
///
/// Every rule checked by [`SequenceParser`][crate::SequenceParser] and
/// [`ScalarParser`][crate::ScalarParser] has exactly one tag. The `Display` form is a short
/// human-readable label suitable as a prefix for user-facing diagnostics.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "the set of validation rules is closed and callers are expected to match on it"
)]
pub enum ErrorTag {
    /// A comma-separated subsequence was empty (this includes entirely empty input).
    #[display("Empty subsequence")]
    EmptySubsequence,

    /// A `/STEP` suffix was given without a `-` or `+` range operator before it.
    #[display("Missing UPPER")]
    MissingUpper,

    /// The step could not be parsed as a number of the configured kind.
    #[display("Invalid STEP")]
    InvalidStep,

    /// The step was zero or negative.
    #[display("STEP must be positive")]
    StepNotPositive,

    /// The lower endpoint of a range could not be parsed.
    #[display("Invalid LOWER")]
    InvalidLower,

    /// The upper endpoint (or increment) of a range could not be parsed or computed.
    #[display("Invalid UPPER")]
    InvalidUpper,

    /// The upper endpoint of a range was below the lower endpoint.
    #[display("UPPER<LOWER")]
    UpperLessThanLower,

    /// An endpoint, step or scalar value was infinite.
    #[display("Infinite Value")]
    InfiniteValue,

    /// The lower endpoint of a range was below the configured lowest limit.
    #[display("LOWER too small")]
    LowerBelowMinimum,

    /// The upper endpoint of a range was above the configured highest limit.
    #[display("UPPER too large")]
    UpperAboveMaximum,

    /// A single value (not a range) could not be parsed.
    #[display("Parse Error")]
    GenericParseError,

    /// A typed probe value was not of the configured numeric kind.
    #[display("Invalid Type")]
    InvalidType,

    /// A scalar value was below the configured lowest limit.
    #[display("Too Low")]
    ValueTooLow,

    /// A scalar value was above the configured highest limit.
    #[display("Too High")]
    ValueTooHigh,
}

/// Describes why a piece of text was rejected by a parser.
///
/// Parsing is all-or-nothing: the first violated rule aborts the whole call and no partial
/// result is returned.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("{tag}: {message}")]
pub struct ParseError {
    tag: ErrorTag,
    message: String,
    token: String,
}

impl ParseError {
    pub(crate) fn new(tag: ErrorTag, token: impl Into<String>, message: impl Into<String>) -> Self {
        let error = Self {
            tag,
            message: message.into(),
            token: token.into(),
        };

        tracing::debug!(tag = %error.tag, token = %error.token, "input rejected");

        error
    }

    /// The rule that was violated.
    #[must_use]
    pub fn tag(&self) -> ErrorTag {
        self.tag
    }

    /// A human-readable description of the problem, without the tag prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The part of the input the problem was detected in. This is either a single
    /// comma-separated subsequence or the entire input of a scalar parser.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// A specialized `Result` type for parsing operations, returning the crate's
/// [`ParseError`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, ParseError>;
