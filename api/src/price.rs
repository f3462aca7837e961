//! Provides a non-negative unit price type with storefront display formatting.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::currency::StoreCurrency;

/// Number of decimal places shown for every price.
pub const DISPLAY_DECIMALS: usize = 2;

/// An error that can occur when building a `Price` from a raw value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsePriceError {
    /// Prices can't go below zero.
    #[error("price must not be negative")]
    Negative,
    /// NaN and infinities are rejected.
    #[error("price must be a finite number")]
    NotFinite,
}

/// A monetary amount in the store currency's major unit (e.g., dollars).
///
/// The value is kept at full `f64` precision. Rounding only happens when the
/// price is formatted for display, so sums of line totals never accumulate
/// display rounding.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    pub const ZERO: Price = Price(0.0);

    /// Creates a price, rejecting negative and non-finite values.
    pub fn new(value: f64) -> Result<Self, ParsePriceError> {
        if !value.is_finite() {
            return Err(ParsePriceError::NotFinite);
        }
        if value < 0.0 {
            return Err(ParsePriceError::Negative);
        }
        // normalizes -0.0
        Ok(Self(value + 0.0))
    }

    /// Returns the price of `quantity` units, capped at `f64::MAX`.
    pub fn times(self, quantity: u32) -> Self {
        Self::saturating(self.0 * f64::from(quantity))
    }

    /// Adds two prices, capped at `f64::MAX`.
    fn saturating_add(self, rhs: Self) -> Self {
        Self::saturating(self.0 + rhs.0)
    }

    // Both operands are finite and non-negative, so the only way out of range
    // is overflow to +inf.
    fn saturating(value: f64) -> Self {
        Self(value.min(f64::MAX))
    }

    /// Formats the price with its currency symbol (e.g., "$25.00").
    pub fn to_string_with_symbol(&self, currency: StoreCurrency) -> String {
        format!("{}{}", currency.symbol(), self)
    }
}

/// Formats the price as a plain number rounded to two decimals (e.g., "25.00").
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*}", DISPLAY_DECIMALS, self.0)
    }
}

impl TryFrom<f64> for Price {
    type Error = ParsePriceError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.saturating_add(rhs)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
