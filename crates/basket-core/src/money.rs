//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The backend sends prices as JSON numbers:                             │
//! │    { "price": 12.5, "offerPrice": 9.99 }                               │
//! │                                                                         │
//! │  Sums of those numbers drift:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004                                     │
//! │                                                                         │
//! │  OUR SOLUTION: floor once, then integer cents                           │
//! │    raw total 10.005 ──► floor(1000.5) ──► 1000 cents ──► $10.00        │
//! │    Everything after that point is exact i64 arithmetic                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use basket_core::money::Money;
//!
//! let total = Money::floor_from_major(10.005).unwrap();
//! assert_eq!(total.cents(), 1000);
//! assert_eq!(total.format_with("$"), "$10.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Floors below zero stay representable
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serialized as cents**: `{"total": 1099}` is $10.99
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a major-unit float amount to money, flooring to whole cents.
    ///
    /// This is the only float entry point. Catalog prices arrive as JSON
    /// numbers; totals are accumulated in `f64` and floored here once.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// assert_eq!(Money::floor_from_major(10.005).unwrap().cents(), 1000);
    /// assert_eq!(Money::floor_from_major(3.999).unwrap().cents(), 399);
    /// assert!(Money::floor_from_major(f64::NAN).is_err());
    /// ```
    pub fn floor_from_major(amount: f64) -> CoreResult<Self> {
        if !amount.is_finite() {
            return Err(CoreError::UnrepresentableAmount(amount));
        }

        let cents = (amount * 100.0).floor();
        // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
        if cents < i64::MIN as f64 || cents >= i64::MAX as f64 {
            return Err(CoreError::UnrepresentableAmount(amount));
        }

        Ok(Money(cents as i64))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Formats the amount with the given currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).format_with("€"), "€10.99");
    /// assert_eq!(Money::from_cents(-5).format_with("$"), "-$0.05");
    /// ```
    pub fn format_with(&self, currency: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            currency,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money with a `$` symbol. Use [`Money::format_with`] for the
/// configured storefront currency.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with("$"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
