//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are shown in the Turkish locale: `.` groups thousands, `,` separates
//! the two fraction digits, and the ISO currency code follows after a space.
//!
//! ```
//! use carousel_core::{CurrencyCode, Price};
//! use rust_decimal::Decimal;
//!
//! let price = Price::new(Decimal::new(123_456_789, 2), CurrencyCode::TRY);
//! assert_eq!(price.display(), "1.234.567,89 TRY");
//! ```

use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`] amount.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input string is empty.
    #[error("price cannot be empty")]
    Empty,
    /// The input is not a decimal number.
    #[error("invalid price amount: {0}")]
    Invalid(String),
}

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (lira, not kuruş).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// A zero price in the default currency.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(Decimal::ZERO, CurrencyCode::TRY)
    }

    /// Parse an amount such as `"1000"`, `" 12.5 "` or `"1e3"` in the default
    /// currency.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Empty`] for blank input and
    /// [`PriceError::Invalid`] when the input is not a number.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PriceError::Empty);
        }

        let amount = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| PriceError::Invalid(trimmed.to_owned()))?;

        Ok(Self::new(amount, CurrencyCode::TRY))
    }

    /// Format for display, e.g. `"1.000,00 TRY"`.
    ///
    /// The amount is rounded half away from zero to two fraction digits.
    #[must_use]
    pub fn display(&self) -> String {
        let rounded = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        let digits = format!("{:.2}", rounded.abs());
        let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        format!(
            "{sign}{},{fraction} {}",
            group_thousands(integer, '.'),
            self.currency_code.code()
        )
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::zero()
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    /// Turkish lira.
    #[default]
    TRY,
}

impl CurrencyCode {
    /// The ISO code as shown after an amount.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::TRY => "TRY",
        }
    }
}

/// Insert `separator` between every group of three digits, counted from the
/// right.
fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
