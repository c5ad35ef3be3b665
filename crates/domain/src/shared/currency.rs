//! Currency code value object.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entity::ValueObject;
use crate::error::ValidationError;
use crate::locale::{FormatError, Locale};

/// A three-letter currency code such as `USD`.
///
/// The code is checked at runtime: exactly three ASCII letters `A`–`Z`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    /// Creates a currency from its code.
    pub fn new(code: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into();
        if !is_valid_code(&code) {
            return Err(ValidationError::InvalidCurrencyCode(code));
        }
        Ok(Self(code))
    }

    /// Returns the currency code.
    pub fn code(&self) -> &str {
        &self.0
    }

    /// Renders `amount` as currency text for `locale`, always with two
    /// fraction digits.
    ///
    /// Errors come straight from the formatting layer.
    pub fn format_amount(&self, amount: f64, locale: &str) -> Result<String, FormatError> {
        Locale::parse(locale)?.format_currency(&self.0, amount)
    }

    /// Same as [`Currency::format_amount`] with the `en-US` locale.
    pub fn format_amount_default(&self, amount: f64) -> Result<String, FormatError> {
        Locale::default().format_currency(&self.0, amount)
    }
}

impl ValueObject for Currency {}

fn is_valid_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Currency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = ValidationError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::new(code)
    }
}

impl TryFrom<&str> for Currency {
    type Error = ValidationError;

    fn try_from(code: &str) -> Result<Self, Self::Error> {
        Self::new(code)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.0
    }
}

impl AsRef<str> for Currency {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_codes() {
        for code in ["USD", "EUR", "JPY", "XYZ"] {
            let currency = Currency::new(code).unwrap();
            assert_eq!(currency.code(), code);
            assert_eq!(currency.to_string(), code);
        }
    }

    #[test]
    fn test_invalid_codes() {
        for code in ["", "US", "USDD", "usd", "Usd", "US1", "U D", "ÜSD", "US$"] {
            assert_eq!(
                Currency::new(code),
                Err(ValidationError::InvalidCurrencyCode(code.to_string())),
                "{code:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_equality_by_code() {
        assert_eq!(Currency::new("USD").unwrap(), Currency::new("USD").unwrap());
        assert_ne!(Currency::new("USD").unwrap(), Currency::new("EUR").unwrap());
    }

    #[test]
    fn test_format_amount() {
        let usd = Currency::new("USD").unwrap();
        assert_eq!(usd.format_amount(1234.56, "en-US").unwrap(), "$1,234.56");
        assert_eq!(usd.format_amount_default(0.0).unwrap(), "$0.00");
        assert_eq!(usd.format_amount(5.0, "de-DE").unwrap(), "5,00\u{a0}$");

        let eur = Currency::new("EUR").unwrap();
        assert_eq!(eur.format_amount(1234.5, "de-DE").unwrap(), "1.234,50\u{a0}€");
    }

    #[test]
    fn test_format_amount_without_symbol_uses_code() {
        let xyz = Currency::new("XYZ").unwrap();
        assert_eq!(xyz.format_amount_default(12.0).unwrap(), "XYZ\u{a0}12.00");
    }

    #[test]
    fn test_format_amount_surfaces_formatting_errors() {
        let usd = Currency::new("USD").unwrap();
        assert_eq!(
            usd.format_amount(1.0, "en_US"),
            Err(FormatError::InvalidLocale("en_US".into()))
        );
        assert!(matches!(
            usd.format_amount_default(f64::NAN),
            Err(FormatError::NonFiniteAmount(_))
        ));
    }

    #[test]
    fn test_parse_and_conversions() {
        let currency: Currency = "GBP".parse().unwrap();
        assert_eq!(currency.as_ref(), "GBP");
        assert!(Currency::try_from("gbp").is_err());
        assert_eq!(String::from(currency), "GBP");
    }

    #[test]
    fn test_serialization() {
        let currency = Currency::new("USD").unwrap();
        let json = serde_json::to_string(&currency).unwrap();
        assert_eq!(json, "\"USD\"");
        let deserialized: Currency = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, currency);
        assert!(serde_json::from_str::<Currency>("\"usd\"").is_err());
    }
}
