//! Fixed-point money
//!
//! Amounts are kept as signed cents in an `i64`, so arithmetic never touches
//! floating point. Floats appear only at the edges, in percentage math and
//! in rendered output.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// An amount of kwanzas, stored as cents
///
/// `i64` cents cover roughly ±92 quadrillion units, far past anything a
/// personal ledger holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// An amount of whole kwanzas, e.g. `from_units(25)` is 25.00 Kz
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole-unit part, truncated toward zero (-10.50 Kz has -10 units)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Fractional part as 0..=99, sign dropped
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    pub const fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// This amount as a percentage of `whole`, unclamped and unrounded.
    ///
    /// Scales by 100 before dividing so that round ratios (40%, 70%) come
    /// out exact in f64. A zero `whole` yields 0 rather than infinity.
    pub fn percent_of(&self, whole: Money) -> f64 {
        if whole.0 == 0 {
            return 0.0;
        }
        self.0 as f64 * 100.0 / whole.0 as f64
    }

    /// Parse user input like "10.50", "10.5", "10", "-3.75" or "10.50 Kz".
    ///
    /// A third fraction digit is rejected outright, never rounded away.
    pub fn parse(input: &str) -> Result<Self, MoneyParseError> {
        let trimmed = input.trim();
        let invalid = || MoneyParseError::InvalidFormat(trimmed.to_string());

        let (sign, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, trimmed),
        };
        let body = body.strip_suffix("Kz").unwrap_or(body).trim();

        let (units_str, frac) = body.split_once('.').unwrap_or((body, ""));
        if !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if frac.len() > 2 {
            return Err(MoneyParseError::TooPrecise(trimmed.to_string()));
        }

        let units: i64 = units_str.parse().map_err(|_| invalid())?;
        let frac_cents: i64 = match frac.len() {
            0 => 0,
            len => {
                let digits: i64 = frac.parse().map_err(|_| invalid())?;
                if len == 1 {
                    digits * 10
                } else {
                    digits
                }
            }
        };

        Ok(Self(sign * (units * 100 + frac_cents)))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}{}.{:02} Kz", sign, self.units().abs(), self.cents_part())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_cents(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_cents(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_cents(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

/// What went wrong while parsing a money string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    TooPrecise(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::TooPrecise(s) => {
                write!(f, "At most two decimal places are supported: {}", s)
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}
