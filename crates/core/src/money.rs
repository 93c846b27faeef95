use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A dollar amount. Full `Decimal` precision is kept internally so that
/// uneven splits (e.g. $20.00 over three people) only round at display time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Money(Decimal);

impl Money {
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::from(cents) / Decimal::from(100))
    }

    pub fn to_cents(self) -> i64 {
        (self.0 * Decimal::from(100)).round().to_i64().unwrap()
    }

    pub fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Even split among `n` sharers. A share of nothing-among-nobody is
    /// defined as zero rather than a division by zero.
    pub fn split_among(self, n: usize) -> Money {
        if n == 0 {
            return Money::zero();
        }
        Money(self.0 / Decimal::from(n as u64))
    }
}

impl fmt::Display for Money {
    /// Currency rendering: `$` sign, thousands grouping, exactly two
    /// fractional digits (`$0.00`, `$1,234.50`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.0.round_dp(2).abs();
        let plain = format!("{rounded:.2}");
        let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, c) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        let sign = if self.0.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
        write!(f, "{sign}${grouped}.{frac_part}")
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Money(self.0 - rhs.0)
    }
}
