//! # Rational numbers
//!
//! Exact fractions of two machine integers, on top of `num_rational::Ratio`. All arithmetic is
//! exact, which is what allows the tableau to be pivoted without any rounding error.
//!
//! Besides the fractions there is a sentinel for "undefined", the result of dividing by zero. It
//! is never the result of a successful solve, but it can appear in intermediate computations. It
//! compares greater than every defined value and any arithmetic involving it is undefined too.
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use num_rational::Ratio;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Inv, One, Zero};

use crate::io::error::ParseError;

mod macros;

/// An exact fraction, or the undefined sentinel.
///
/// Defined values are a `Ratio<i64>`, which is always in lowest terms with a positive
/// denominator, such that structural equality is equality of values.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Rational {
    /// `None` is the result of a division by zero.
    value: Option<Ratio<i64>>,
}

impl Rational {
    /// The result of a division by zero.
    pub const UNDEFINED: Self = Self { value: None };

    /// Create a new rational number and bring it in lowest terms.
    ///
    /// # Arguments
    ///
    /// * `numerator`: Any integer.
    /// * `denominator`: Any integer; zero results in `Rational::UNDEFINED`.
    #[must_use]
    pub fn new(numerator: i64, denominator: i64) -> Self {
        if denominator == 0 {
            Self::UNDEFINED
        } else {
            Self { value: Some(Ratio::new(numerator, denominator)) }
        }
    }

    /// A rational with denominator one.
    #[must_use]
    pub const fn from_integer(value: i64) -> Self {
        Self { value: Some(Ratio::new_raw(value, 1)) }
    }

    /// Normalize in place: lowest terms and a positive denominator.
    ///
    /// Every constructor normalizes already, so this only matters for values that were assembled
    /// out of raw parts.
    pub fn reduce(&mut self) {
        if let Some(value) = &mut self.value {
            *value = value.reduced();
        }
    }

    /// Numerator in lowest terms, one for the undefined sentinel.
    pub fn numerator(&self) -> i64 {
        self.value.map_or(1, |value| *value.numer())
    }

    /// Always positive, except for the undefined sentinel where it is zero.
    pub fn denominator(&self) -> i64 {
        self.value.map_or(0, |value| *value.denom())
    }

    /// Whether this value is the result of a division by zero.
    pub fn is_undefined(&self) -> bool {
        self.value.is_none()
    }

    /// Strictly smaller than zero.
    ///
    /// Reads only the numerator, which is valid because the denominator is never negative.
    pub fn is_negative(&self) -> bool {
        self.value.is_some_and(|value| *value.numer() < 0)
    }

    /// Strictly larger than zero.
    pub fn is_positive(&self) -> bool {
        self.value.is_some_and(|value| *value.numer() > 0)
    }

    /// Render as a cell of a table.
    ///
    /// Non-negative values get a leading space so that they line up with negative values, after
    /// which the text is padded on the right up to `width` characters.
    ///
    /// # Arguments
    ///
    /// * `width`: Minimum number of characters of the result.
    ///
    /// # Return value
    ///
    /// A `String` of at least `width` characters.
    pub fn format(&self, width: usize) -> String {
        let text = if self.is_negative() {
            self.to_string()
        } else {
            format!(" {}", self)
        };

        format!("{:<width$}", text, width = width)
    }

    /// Wrap the result of a checked operation.
    ///
    /// # Panics
    ///
    /// When the operation overflowed `i64`.
    fn checked(value: Option<Ratio<i64>>, operation: &str) -> Self {
        match value {
            Some(value) => Self { value: Some(value) },
            None => panic!("rational {} overflows 64 bits", operation),
        }
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<Ratio<i64>> for Rational {
    fn from(value: Ratio<i64>) -> Self {
        Self { value: Some(value) }
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(0)
    }

    fn is_zero(&self) -> bool {
        self.value.is_some_and(|value| value.is_zero())
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(1)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Exact comparison of the fractions.
///
/// The undefined sentinel is larger than any other value.
impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.value, &other.value) {
            (Some(left), Some(right)) => left.cmp(right),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { value: self.value.map(Neg::neg) }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        -*self
    }
}

impl Inv for Rational {
    type Output = Self;

    fn inv(self) -> Self::Output {
        match self.value {
            Some(value) if !value.is_zero() => Self { value: Some(value.recip()) },
            _ => Self::UNDEFINED,
        }
    }
}

/// Operators on two values; any undefined operand makes the result undefined.
macro_rules! define_operation {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, |$left:ident, $right:ident| $result:expr) => {
        impl $op<Rational> for Rational {
            type Output = Rational;

            fn $op_fn(self, rhs: Rational) -> Self::Output {
                match (self.value, rhs.value) {
                    (Some($left), Some($right)) => $result,
                    _ => Rational::UNDEFINED,
                }
            }
        }

        impl $op<&Rational> for Rational {
            type Output = Rational;

            fn $op_fn(self, rhs: &Rational) -> Self::Output {
                $op::$op_fn(self, *rhs)
            }
        }

        impl $op<&Rational> for &Rational {
            type Output = Rational;

            fn $op_fn(self, rhs: &Rational) -> Self::Output {
                $op::$op_fn(*self, *rhs)
            }
        }

        impl $assign<Rational> for Rational {
            fn $assign_fn(&mut self, rhs: Rational) {
                *self = $op::$op_fn(*self, rhs);
            }
        }

        impl $assign<&Rational> for Rational {
            fn $assign_fn(&mut self, rhs: &Rational) {
                *self = $op::$op_fn(*self, *rhs);
            }
        }
    }
}

define_operation!(Add, add, AddAssign, add_assign, |left, right| {
    Rational::checked(left.checked_add(&right), "addition")
});
define_operation!(Sub, sub, SubAssign, sub_assign, |left, right| {
    Rational::checked(left.checked_sub(&right), "subtraction")
});
define_operation!(Mul, mul, MulAssign, mul_assign, |left, right| {
    Rational::checked(left.checked_mul(&right), "multiplication")
});
define_operation!(Div, div, DivAssign, div_assign, |left, right| {
    if right.is_zero() {
        Rational::UNDEFINED
    } else {
        Rational::checked(left.checked_div(&right), "division")
    }
});

impl fmt::Display for Rational {
    /// An integer when the denominator is one, `numerator/denominator` otherwise, and `1/0` for
    /// the undefined sentinel.
    ///
    /// Width and alignment flags of the formatter are respected.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => f.pad(&value.to_string()),
            None => f.pad("1/0"),
        }
    }
}

/// Read `"5"`, `"-5"`, `"3/4"` or `"-3/4"`.
///
/// The denominator is one when there is no slash. A zero denominator is rejected.
impl FromStr for Rational {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        let (numerator, denominator) = match text.split_once('/') {
            Some((numerator, denominator)) => (numerator, Some(denominator)),
            None => (text, None),
        };

        let numerator = parse_component(numerator, text)?;
        let denominator = match denominator {
            Some(denominator) => parse_component(denominator, text)?,
            None => 1,
        };
        if denominator == 0 {
            return Err(ParseError::with_token("Zero denominator", text));
        }

        Ok(Self::new(numerator, denominator))
    }
}

fn parse_component(component: &str, token: &str) -> Result<i64, ParseError> {
    component.trim()
        .parse()
        .map_err(|_| ParseError::with_token(format!("Invalid integer \"{}\"", component.trim()), token))
}
