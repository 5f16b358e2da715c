//! Price type for catalog amounts.
//!
//! Prices are currency-agnostic and stored as integer minor units (cents) so
//! comparisons against filter bounds are exact. Catalog files carry them as a
//! decimal number of major units (`485`, `49.99`).

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minor units per major unit.
const CENTS_PER_UNIT: u64 = 100;

/// Largest distance from a whole cent still treated as float noise.
const CENT_TOLERANCE: f64 = 1e-6;

/// Display currencies.
///
/// A currency only affects how a [`Price`] is rendered; the catalog itself
/// never mixes or converts currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    AED,
    SAR,
}

impl Currency {
    /// Every display currency.
    pub const ALL: [Currency; 3] = [Currency::USD, Currency::AED, Currency::SAR];

    /// ISO code (e.g. "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::AED => "AED",
            Currency::SAR => "SAR",
        }
    }

    /// Prefix printed before an amount.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::AED => "AED ",
            Currency::SAR => "SAR ",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A non-negative catalog price in minor units.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price {
    amount_cents: u64,
}

impl Price {
    /// Zero price.
    pub const ZERO: Price = Price { amount_cents: 0 };

    /// Create a price from minor units.
    pub const fn from_cents(amount_cents: u64) -> Self {
        Self { amount_cents }
    }

    /// Create a price from whole major units.
    pub const fn from_major(units: u64) -> Self {
        Self {
            amount_cents: units * CENTS_PER_UNIT,
        }
    }

    /// Create a price from a decimal amount of major units.
    ///
    /// The amount must be a whole number of cents; `49.999` is rejected
    /// rather than rounded, so a filter bound never moves past a price it
    /// should exclude.
    ///
    /// ```
    /// use storefront_catalog::Price;
    /// let price = Price::from_decimal(49.99).unwrap();
    /// assert_eq!(price.amount_cents(), 4999);
    /// assert!(Price::from_decimal(49.999).is_err());
    /// ```
    pub fn from_decimal(amount: f64) -> Result<Self, CatalogError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(CatalogError::InvalidPrice(amount.to_string()));
        }
        let scaled = amount * CENTS_PER_UNIT as f64;
        let cents = scaled.round();
        // Tolerates binary representation error only (49.99 * 100 = 4998.999...).
        let tolerance = CENT_TOLERANCE.max(scaled * 4.0 * f64::EPSILON);
        if (scaled - cents).abs() > tolerance || cents > u64::MAX as f64 {
            return Err(CatalogError::InvalidPrice(amount.to_string()));
        }
        Ok(Self::from_cents(cents as u64))
    }

    /// Parse user input such as `485`, `485.50`, `1,200` or `$485`.
    ///
    /// Only a leading currency symbol is stripped. At most two fraction
    /// digits are accepted; the amount is converted without going through
    /// floating point.
    pub fn parse(input: &str) -> Result<Self, CatalogError> {
        let invalid = || CatalogError::InvalidPrice(input.to_string());

        let mut text = input.trim();
        for currency in Currency::ALL {
            if let Some(rest) = text.strip_prefix(currency.symbol().trim_end()) {
                text = rest.trim_start();
                break;
            }
        }
        let text = text.replace(',', "");

        let (whole, fraction) = match text.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (text.as_str(), ""),
        };
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty())
            || !all_digits(whole)
            || !all_digits(fraction)
            || fraction.len() > 2
        {
            return Err(invalid());
        }

        let units: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let cents: u64 = format!("{:0<2}", fraction).parse().map_err(|_| invalid())?;
        units
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|c| c.checked_add(cents))
            .map(Self::from_cents)
            .ok_or_else(invalid)
    }

    /// Amount in minor units.
    pub fn amount_cents(&self) -> u64 {
        self.amount_cents
    }

    /// Convert to a decimal amount of major units.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / CENTS_PER_UNIT as f64
    }

    /// Format with a currency symbol (e.g., "$485.00").
    pub fn display(&self, currency: Currency) -> String {
        format!("{}{}", currency.symbol(), self)
    }
}

impl TryFrom<f64> for Price {
    type Error = CatalogError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Price::from_decimal(amount)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> f64 {
        price.to_decimal()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.to_decimal())
    }
}

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceRange {
    /// Lowest price, inclusive.
    pub min: Price,
    /// Highest price, inclusive.
    pub max: Price,
}

impl PriceRange {
    /// Range reported for an empty product set.
    pub const DEFAULT: PriceRange = PriceRange {
        min: Price::ZERO,
        max: Price::from_major(1000),
    };

    /// Create a range.
    pub fn new(min: Price, max: Price) -> Self {
        Self { min, max }
    }

    /// Check whether a price falls inside the range.
    pub fn contains(&self, price: Price) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}
