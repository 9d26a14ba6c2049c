use std::fmt::{self, Debug, Display};
use std::num::TryFromIntError;

use derive_more::derive::Display;
use num_traits::{One, Zero};

/// Whether a parser works with integers or floating-point numbers.
///
/// The kind determines how literals are parsed and whether membership tests use exact modular
/// arithmetic or a relative tolerance.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "there are exactly two numeric kinds and no more will be added"
)]
pub enum NumericKind {
    /// Values are `i64`.
    #[display("Integer")]
    Integer,

    /// Values are `f64`.
    #[display("Float")]
    Float,
}

/// A dynamically typed number, used to ask a parser about a value that may or may not be of the
/// parser's numeric kind.
///
/// Conversions exist from the primitive integer and floating-point types, so most callers never
/// name this type and simply pass `5` or `5.0` to a `contains` method.
#[derive(Clone, Copy, Debug, PartialEq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "mirrors NumericKind, which is closed"
)]
pub enum Number {
    /// An integer value.
    Integer(i64),

    /// A floating-point value.
    Float(f64),
}

impl Number {
    /// The numeric kind of this value.
    #[must_use]
    pub fn kind(self) -> NumericKind {
        match self {
            Self::Integer(_) => NumericKind::Integer,
            Self::Float(_) => NumericKind::Float,
        }
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => Display::fmt(value, f),
            Self::Float(value) => Display::fmt(value, f),
        }
    }
}

macro_rules! number_from {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Number {
                fn from(value: $source) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

number_from!(Integer as i64: i8, i16, i32, i64, u8, u16, u32);
number_from!(Float as f64: f32, f64);

macro_rules! number_try_from {
    ($($source:ty),+) => {
        $(
            impl TryFrom<$source> for Number {
                type Error = TryFromIntError;

                fn try_from(value: $source) -> Result<Self, Self::Error> {
                    i64::try_from(value).map(Self::Integer)
                }
            }
        )+
    };
}

// Integer types that are only representable if the value fits into i64.
number_try_from!(i128, isize, u64, u128, usize);

/// Converts a probe value into the parser's numeric type, if the conversion is exact.
pub(crate) fn coerce<T: Numeric>(value: impl TryInto<Number>) -> Option<T> {
    value.try_into().ok().and_then(T::from_number)
}

trait Sealed {}

impl Sealed for i64 {}
impl Sealed for f64 {}

/// The numeric types a parser can produce: `i64` for [`NumericKind::Integer`] and `f64` for
/// [`NumericKind::Float`].
///
/// This trait is sealed. It exists so that the numeric kind of a parser is fixed at compile time
/// and the parsing, bounds checking and stride arithmetic can be shared between both kinds.
#[expect(private_bounds, reason = "intentional - sealed trait")]
pub trait Numeric:
    Copy + Debug + Display + PartialOrd + Zero + One + Send + Sync + 'static + Sealed
{
    /// The kind tag corresponding to this type.
    const KIND: NumericKind;

    /// Parses a single literal, ignoring surrounding whitespace.
    ///
    /// Returns `None` if the text is not a valid literal of this type. `NaN` is never a valid
    /// literal; infinities are returned as-is so that they can be reported separately.
    fn parse_literal(text: &str) -> Option<Self>;

    /// Converts a dynamically typed number into this type, if the conversion is exact.
    fn from_number(number: Number) -> Option<Self>;

    /// Whether the value is positive or negative infinity. Always `false` for integers.
    fn is_infinite(self) -> bool;

    /// Addition that reports overflow as `None` instead of wrapping or panicking.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Subtraction that reports overflow as `None` instead of wrapping or panicking.
    fn checked_sub(self, rhs: Self) -> Option<Self>;

    /// Whether `value` lies a whole number of `step`s above `origin`.
    ///
    /// The caller guarantees `origin <= value` and `step > 0`.
    fn is_whole_steps_from(origin: Self, value: Self, step: Self) -> bool;
}

/// Relative tolerance for floating-point stride membership, as a fraction of the step size
/// (10 parts per million).
const FLOAT_STEP_TOLERANCE_DIVISOR: f64 = 1e5;

/// Largest magnitude at which every integer is exactly representable as `f64`.
const MAX_EXACT_FLOAT_INTEGER: i64 = 1 << f64::MANTISSA_DIGITS;

/// The smallest `f64` that no longer fits into an `i64`.
const I64_UPPER_BOUND_AS_FLOAT: f64 = 9_223_372_036_854_775_808.0;

impl Numeric for i64 {
    const KIND: NumericKind = NumericKind::Integer;

    fn parse_literal(text: &str) -> Option<Self> {
        text.trim().parse().ok()
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "only applied to integral values within the i64 range"
    )]
    fn from_number(number: Number) -> Option<Self> {
        match number {
            Number::Integer(value) => Some(value),
            Number::Float(value) => {
                let integral = value.is_finite() && value.fract() == 0.0;
                let in_range =
                    (-I64_UPPER_BOUND_AS_FLOAT..I64_UPPER_BOUND_AS_FLOAT).contains(&value);

                (integral && in_range).then_some(value as Self)
            }
        }
    }

    fn is_infinite(self) -> bool {
        false
    }

    #[cfg_attr(test, mutants::skip)] // Trivial forwarder.
    fn checked_add(self, rhs: Self) -> Option<Self> {
        Self::checked_add(self, rhs)
    }

    #[cfg_attr(test, mutants::skip)] // Trivial forwarder.
    fn checked_sub(self, rhs: Self) -> Option<Self> {
        Self::checked_sub(self, rhs)
    }

    fn is_whole_steps_from(origin: Self, value: Self, step: Self) -> bool {
        // The distance between two i64 values always fits into u64.
        value
            .abs_diff(origin)
            .checked_rem(step.unsigned_abs())
            .is_some_and(|remainder| remainder == 0)
    }
}

impl Numeric for f64 {
    const KIND: NumericKind = NumericKind::Float;

    fn parse_literal(text: &str) -> Option<Self> {
        text.trim()
            .parse::<Self>()
            .ok()
            .filter(|value| !value.is_nan())
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "only applied to values within the exactly representable range"
    )]
    fn from_number(number: Number) -> Option<Self> {
        match number {
            Number::Float(value) => (!value.is_nan()).then_some(value),
            Number::Integer(value) => (-MAX_EXACT_FLOAT_INTEGER..=MAX_EXACT_FLOAT_INTEGER)
                .contains(&value)
                .then_some(value as Self),
        }
    }

    fn is_infinite(self) -> bool {
        Self::is_infinite(self)
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        Some(self - rhs)
    }

    #[expect(
        clippy::modulo_arithmetic,
        reason = "both operands are non-negative after the offset adjustment"
    )]
    fn is_whole_steps_from(origin: Self, value: Self, step: Self) -> bool {
        let mut offset = value - origin;
        let mut step = step;

        // Ranges wider than f64::MAX are measured in half units, which cannot overflow.
        if !offset.is_finite() {
            offset = value / 2.0 - origin / 2.0;
            step /= 2.0;
        }

        if offset % step == 0.0 {
            return true;
        }

        // Shifting by epsilon folds values just below a multiple onto the low side of it.
        let epsilon = step / FLOAT_STEP_TOLERANCE_DIVISOR;
        (offset + epsilon).abs() % step < 2.0 * epsilon
    }
}
