//! Money and stock text conversion used by the product form and grid.

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult};

/// Non-negative price in euro cents.
///
/// Displayed with exactly two decimals and a trailing ` €`; serialized in the
/// same text form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Parse user input such as `"12.5"`, `"12,50 €"` or `""` (zero).
    pub fn parse(text: &str) -> DomainResult<Self> {
        let cleaned: String = text
            .chars()
            .filter(|c| *c != '€' && !c.is_whitespace())
            .collect();

        if cleaned.is_empty() {
            return Ok(Price::ZERO);
        }

        let (whole, fraction) = match cleaned.split_once(|c: char| c == '.' || c == ',') {
            Some((w, f)) => (w, f),
            None => (cleaned.as_str(), ""),
        };

        let invalid = || DomainError::validation(format!("'{}' is not a valid price", text.trim()));

        let digits_only = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if !digits_only(whole) || !digits_only(fraction) || fraction.len() > 2 {
            return Err(invalid());
        }
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let fraction: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction))
            .map(Price)
            .ok_or_else(invalid)
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02} €", self.0 / 100, self.0 % 100)
    }
}

impl TryFrom<String> for Price {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Price::parse(&value)
    }
}

impl From<Price> for String {
    fn from(value: Price) -> Self {
        value.to_string()
    }
}

/// Parse a stock count field. Anything that is not a non-negative integer
/// counts as zero.
pub fn parse_stock_count(text: &str) -> u32 {
    text.trim().parse::<u32>().unwrap_or(0)
}
