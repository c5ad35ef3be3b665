//! Monetary amount value object.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::Currency;
use crate::entity::ValueObject;
use crate::error::ValidationError;
use crate::locale::{FormatError, to_fixed_2};

/// A non-negative amount in a given currency.
///
/// The currency is shared, not copied: results of arithmetic point at the
/// left operand's [`Currency`]. Compatibility between two amounts is decided
/// by currency code only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MoneyRecord", into = "MoneyRecord")]
pub struct Money {
    amount: f64,
    currency: Arc<Currency>,
}

impl Money {
    /// Creates a new amount.
    pub fn new(amount: f64, currency: impl Into<Arc<Currency>>) -> Result<Self, ValidationError> {
        if !amount.is_finite() {
            return Err(ValidationError::NonFiniteAmount(amount));
        }
        if amount < 0.0 {
            return Err(ValidationError::NegativeAmount(amount));
        }

        Ok(Self {
            // -0.0 becomes 0.0
            amount: amount + 0.0,
            currency: currency.into(),
        })
    }

    /// Returns zero in the given currency.
    pub fn zero(currency: impl Into<Arc<Currency>>) -> Self {
        Self {
            amount: 0.0,
            currency: currency.into(),
        }
    }

    /// Returns the amount.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns the shared currency.
    pub fn currency(&self) -> &Arc<Currency> {
        &self.currency
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0.0
    }

    /// Returns true if both amounts carry the same currency code.
    pub fn same_currency(&self, other: &Money) -> bool {
        self.currency.code() == other.currency.code()
    }

    /// Adds another amount of the same currency.
    pub fn add(&self, other: &Money) -> Result<Money, ValidationError> {
        if !self.same_currency(other) {
            return Err(ValidationError::CurrencyMismatch {
                left: self.currency.code().to_string(),
                right: other.currency.code().to_string(),
            });
        }

        Money::new(self.amount + other.amount, Arc::clone(&self.currency))
    }

    /// Multiplies by a non-negative factor.
    pub fn multiply(&self, factor: f64) -> Result<Money, ValidationError> {
        if !factor.is_finite() {
            return Err(ValidationError::NonFiniteFactor(factor));
        }
        if factor < 0.0 {
            return Err(ValidationError::NegativeFactor(factor));
        }

        Money::new(self.amount * factor, Arc::clone(&self.currency))
    }

    /// Renders the amount as currency text for `locale`.
    pub fn format(&self, locale: &str) -> Result<String, FormatError> {
        self.currency.format_amount(self.amount, locale)
    }

    /// Renders the amount as currency text for `en-US`.
    pub fn format_default(&self) -> Result<String, FormatError> {
        self.currency.format_amount_default(self.amount)
    }
}

impl ValueObject for Money {}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.currency, to_fixed_2(self.amount))
    }
}

/// Wire shape of [`Money`].
#[derive(Serialize, Deserialize)]
struct MoneyRecord {
    amount: f64,
    currency: Currency,
}

impl TryFrom<MoneyRecord> for Money {
    type Error = ValidationError;

    fn try_from(record: MoneyRecord) -> Result<Self, Self::Error> {
        Money::new(record.amount, record.currency)
    }
}

impl From<Money> for MoneyRecord {
    fn from(money: Money) -> Self {
        Self {
            amount: money.amount,
            currency: Arc::unwrap_or_clone(money.currency),
        }
    }
}
