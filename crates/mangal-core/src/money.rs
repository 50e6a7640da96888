//! # Money Module
//!
//! Provides the `Money` type for storefront prices and totals.
//!
//! ## Whole Units Only
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  MENU PRICES ARE WHOLE RUBLES                                           │
//! │                                                                         │
//! │    Шашлык из свинины     450 ₽                                          │
//! │    Лаваш                 100 ₽                                          │
//! │                                                                         │
//! │  There are no kopecks on the menu, so the smallest unit IS the ruble.  │
//! │  Integer arithmetic keeps totals exact: 450 × 2 + 250 = 1150.          │
//! │  Arithmetic saturates at the i64 bounds instead of wrapping.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use mangal_core::money::Money;
//!
//! let price = Money::from_units(450);
//! let line = price * 2;
//! let total = line + Money::from_units(250);
//! assert_eq!(total.units(), 1150);
//! assert_eq!(total.to_string(), "1150 ₽");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

use crate::CURRENCY_SYMBOL;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole currency units.
///
/// Serialized as a bare number so the shell can render it directly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct Money(#[ts(type = "number")] i64);

impl Money {
    /// Creates a Money value from whole units.
    ///
    /// ## Example
    /// ```rust
    /// use mangal_core::money::Money;
    ///
    /// let price = Money::from_units(350);
    /// assert_eq!(price.units(), 350);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the value in whole units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (never true for catalog prices).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a cart quantity, saturating at the `i64` bounds.
    ///
    /// ## Example
    /// ```rust
    /// use mangal_core::money::Money;
    ///
    /// let sauce = Money::from_units(80);
    /// assert_eq!(sauce.multiply_quantity(3).units(), 240);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }

    /// Returns how much is left to reach `threshold`, or zero once reached.
    ///
    /// ## Example
    /// ```rust
    /// use mangal_core::money::Money;
    ///
    /// let threshold = Money::from_units(1000);
    /// assert_eq!(Money::from_units(700).remaining_until(threshold).units(), 300);
    /// assert!(Money::from_units(1150).remaining_until(threshold).is_zero());
    /// ```
    pub fn remaining_until(&self, threshold: Money) -> Money {
        if *self >= threshold {
            Money::zero()
        } else {
            threshold - *self
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as `"<units> ₽"`, matching the menu.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, CURRENCY_SYMBOL)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

/// Multiplication by a cart quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
