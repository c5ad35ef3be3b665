//! Locale-aware display conventions for amounts and instants.
//!
//! Only a handful of locales carry dedicated conventions. Any other
//! well-formed tag resolves to the `en-US` conventions, while a malformed tag
//! is rejected with [`FormatError::InvalidLocale`].

use std::str::FromStr;

use chrono::{DateTime, Utc};
use thiserror::Error;

/// The locale used when a caller does not name one.
pub const DEFAULT_LOCALE: &str = "en-US";

const NBSP: &str = "\u{a0}";
const NARROW_NBSP: &str = "\u{202f}";

/// Errors raised by the formatting layer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// The locale tag is not a well-formed language tag.
    #[error("Incorrect locale information provided: {0:?}")]
    InvalidLocale(String),

    /// NaN and infinities have no currency rendering.
    #[error("Cannot format non-finite amount: {0}")]
    NonFiniteAmount(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SymbolPosition {
    Prefix,
    Suffix,
}

#[derive(Debug, PartialEq, Eq)]
struct Conventions {
    name: &'static str,
    group_separator: &'static str,
    decimal_separator: char,
    symbol_position: SymbolPosition,
    date_time_pattern: &'static str,
    symbols: &'static [(&'static str, &'static str)],
}

static EN_US: Conventions = Conventions {
    name: "en-US",
    group_separator: ",",
    decimal_separator: '.',
    symbol_position: SymbolPosition::Prefix,
    date_time_pattern: "%m/%d/%Y, %I:%M:%S %p",
    symbols: &[
        ("USD", "$"),
        ("EUR", "€"),
        ("GBP", "£"),
        ("JPY", "¥"),
        ("CAD", "CA$"),
        ("AUD", "A$"),
        ("NZD", "NZ$"),
        ("HKD", "HK$"),
        ("MXN", "MX$"),
        ("BRL", "R$"),
        ("CNY", "CN¥"),
        ("INR", "₹"),
        ("KRW", "₩"),
        ("ILS", "₪"),
    ],
};

static EN_GB: Conventions = Conventions {
    name: "en-GB",
    group_separator: ",",
    decimal_separator: '.',
    symbol_position: SymbolPosition::Prefix,
    date_time_pattern: "%d/%m/%Y, %H:%M:%S",
    symbols: &[
        ("GBP", "£"),
        ("USD", "US$"),
        ("EUR", "€"),
        ("JPY", "JP¥"),
        ("CAD", "CA$"),
        ("AUD", "A$"),
        ("CNY", "CN¥"),
        ("INR", "₹"),
    ],
};

static DE_DE: Conventions = Conventions {
    name: "de-DE",
    group_separator: ".",
    decimal_separator: ',',
    symbol_position: SymbolPosition::Suffix,
    date_time_pattern: "%d.%m.%Y, %H:%M:%S",
    symbols: &[
        ("EUR", "€"),
        ("USD", "$"),
        ("GBP", "£"),
        ("JPY", "¥"),
        ("CAD", "CA$"),
        ("AUD", "AU$"),
        ("INR", "₹"),
    ],
};

static FR_FR: Conventions = Conventions {
    name: "fr-FR",
    group_separator: NARROW_NBSP,
    decimal_separator: ',',
    symbol_position: SymbolPosition::Suffix,
    date_time_pattern: "%d/%m/%Y %H:%M:%S",
    symbols: &[
        ("EUR", "€"),
        ("USD", "$US"),
        ("GBP", "£GB"),
        ("CAD", "$CA"),
        ("AUD", "$AU"),
        ("INR", "₹"),
    ],
};

static JA_JP: Conventions = Conventions {
    name: "ja-JP",
    group_separator: ",",
    decimal_separator: '.',
    symbol_position: SymbolPosition::Prefix,
    date_time_pattern: "%Y/%m/%d %H:%M:%S",
    symbols: &[
        ("JPY", "￥"),
        ("USD", "$"),
        ("EUR", "€"),
        ("GBP", "£"),
        ("CNY", "元"),
        ("KRW", "₩"),
        ("CAD", "CA$"),
        ("AUD", "A$"),
    ],
};

/// A validated locale tag together with the conventions it resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    tag: String,
    conventions: &'static Conventions,
}

impl Locale {
    /// Parses a BCP 47 style tag such as `en-US` or `de`.
    pub fn parse(tag: &str) -> Result<Self, FormatError> {
        let mut subtags = tag.split('-');
        let language = subtags.next().unwrap_or_default();
        if !is_language_subtag(language) {
            return Err(FormatError::InvalidLocale(tag.to_string()));
        }

        let mut region = None;
        for subtag in subtags {
            if subtag.is_empty()
                || subtag.len() > 8
                || !subtag.chars().all(|c| c.is_ascii_alphanumeric())
            {
                return Err(FormatError::InvalidLocale(tag.to_string()));
            }
            if region.is_none() && is_region_subtag(subtag) {
                region = Some(subtag.to_ascii_uppercase());
            }
        }

        let conventions = resolve(&language.to_ascii_lowercase(), region.as_deref());
        Ok(Self {
            tag: tag.to_string(),
            conventions,
        })
    }

    /// Returns the tag as given by the caller.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the name of the conventions this tag resolved to.
    pub fn resolved(&self) -> &'static str {
        self.conventions.name
    }

    /// Renders `amount` in `code` with exactly two fraction digits.
    pub fn format_currency(&self, code: &str, amount: f64) -> Result<String, FormatError> {
        if !amount.is_finite() {
            return Err(FormatError::NonFiniteAmount(amount));
        }

        let number = self.format_number(amount.abs());
        let sign = if amount < 0.0 && number.bytes().any(|b| (b'1'..=b'9').contains(&b)) {
            "-"
        } else {
            ""
        };
        let symbol = self.symbol_for(code);

        let text = match self.conventions.symbol_position {
            SymbolPosition::Prefix => match symbol {
                Some(symbol) => format!("{sign}{symbol}{number}"),
                None => format!("{sign}{code}{NBSP}{number}"),
            },
            SymbolPosition::Suffix => {
                format!("{sign}{number}{NBSP}{}", symbol.unwrap_or(code))
            }
        };
        Ok(text)
    }

    /// Renders an instant with numeric, zero-padded fields, in UTC.
    pub fn format_date_time(&self, instant: &DateTime<Utc>) -> String {
        instant
            .format(self.conventions.date_time_pattern)
            .to_string()
    }

    fn symbol_for(&self, code: &str) -> Option<&'static str> {
        self.conventions
            .symbols
            .iter()
            .find(|(known, _)| *known == code)
            .map(|(_, symbol)| *symbol)
    }

    fn format_number(&self, value: f64) -> String {
        let fixed = to_fixed_2(value);
        let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        format!(
            "{}{}{}",
            group_digits(integer, self.conventions.group_separator),
            self.conventions.decimal_separator,
            fraction
        )
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            tag: DEFAULT_LOCALE.to_string(),
            conventions: &EN_US,
        }
    }
}

impl FromStr for Locale {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag)
    }
}

/// Renders `value` with two decimals.
///
/// Rounds the exact binary value, so `0.015` (really `0.01499…`) gives
/// `0.01`. Exact halves such as `0.125` round away from zero.
pub(crate) fn to_fixed_2(value: f64) -> String {
    let magnitude = value.abs();
    let exact = format!("{magnitude:.30}");
    let fixed = match exact.split_once('.') {
        Some((integer, fraction)) if is_exact_half(fraction) => {
            round_up(integer, &fraction[..2])
        }
        _ => format!("{magnitude:.2}"),
    };

    // Avoid "-0.00".
    if value < 0.0 && fixed.bytes().any(|b| (b'1'..=b'9').contains(&b)) {
        format!("-{fixed}")
    } else {
        fixed
    }
}

/// True when the third fraction digit is 5 and nothing follows it.
fn is_exact_half(fraction: &str) -> bool {
    fraction.len() > 3
        && fraction.as_bytes()[2] == b'5'
        && fraction[3..].bytes().all(|b| b == b'0')
}

/// Adds one unit in the second decimal place to `integer.fraction`.
fn round_up(integer: &str, fraction: &str) -> String {
    let mut digits: Vec<u8> = integer.bytes().chain(fraction.bytes()).collect();
    let mut carry = true;
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            carry = false;
            break;
        }
    }
    if carry {
        digits.insert(0, b'1');
    }

    let text: String = digits.into_iter().map(char::from).collect();
    let split = text.len() - fraction.len();
    format!("{}.{}", &text[..split], &text[split..])
}

fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

fn is_language_subtag(subtag: &str) -> bool {
    matches!(subtag.len(), 2..=3 | 5..=8) && subtag.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_region_subtag(subtag: &str) -> bool {
    (subtag.len() == 2 && subtag.chars().all(|c| c.is_ascii_alphabetic()))
        || (subtag.len() == 3 && subtag.chars().all(|c| c.is_ascii_digit()))
}

fn resolve(language: &str, region: Option<&str>) -> &'static Conventions {
    match (language, region) {
        ("en", Some("GB")) => &EN_GB,
        ("de", _) => &DE_DE,
        ("fr", _) => &FR_FR,
        ("ja", _) => &JA_JP,
        _ => &EN_US,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn locale(tag: &str) -> Locale {
        Locale::parse(tag).unwrap()
    }

    #[test]
    fn test_parse_resolves_known_locales() {
        assert_eq!(locale("en-US").resolved(), "en-US");
        assert_eq!(locale("en-GB").resolved(), "en-GB");
        assert_eq!(locale("de").resolved(), "de-DE");
        assert_eq!(locale("de-AT").resolved(), "de-DE");
        assert_eq!(locale("FR-fr").resolved(), "fr-FR");
        assert_eq!(locale("ja-JP").resolved(), "ja-JP");
    }

    #[test]
    fn test_parse_falls_back_to_en_us() {
        assert_eq!(locale("pt-BR").resolved(), "en-US");
        assert_eq!(locale("en-AU").resolved(), "en-US");
        assert_eq!(locale("zh-Hant-TW").resolved(), "en-US");
        assert_eq!(locale("pt-BR").tag(), "pt-BR");
    }

    #[test]
    fn test_parse_rejects_malformed_tags() {
        for tag in ["", "e", "en_US", "en-", "-US", "en--US", "12-US", "en-toolongsubtag"] {
            assert_eq!(
                Locale::parse(tag),
                Err(FormatError::InvalidLocale(tag.to_string())),
                "tag {tag:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_default_is_en_us() {
        let locale = Locale::default();
        assert_eq!(locale.tag(), DEFAULT_LOCALE);
        assert_eq!(locale.resolved(), "en-US");
        assert_eq!(locale.to_string(), "en-US");
    }

    #[test]
    fn test_to_fixed_2() {
        assert_eq!(to_fixed_2(150.0), "150.00");
        assert_eq!(to_fixed_2(0.125), "0.13");
        assert_eq!(to_fixed_2(2.5), "2.50");
        assert_eq!(to_fixed_2(-0.0), "0.00");
        assert_eq!(to_fixed_2(-0.001), "0.00");
        assert_eq!(to_fixed_2(1234.567), "1234.57");
        assert_eq!(to_fixed_2(-12.0), "-12.00");
    }

    #[test]
    fn test_to_fixed_2_rounds_the_stored_value() {
        // Stored just below the half: round down.
        assert_eq!(to_fixed_2(0.015), "0.01");
        assert_eq!(to_fixed_2(0.045), "0.04");
        assert_eq!(to_fixed_2(0.105), "0.10");
        assert_eq!(to_fixed_2(1.005), "1.00");
        // Exact halves: away from zero.
        assert_eq!(to_fixed_2(0.125), "0.13");
        assert_eq!(to_fixed_2(0.375), "0.38");
        assert_eq!(to_fixed_2(-0.125), "-0.13");
        assert_eq!(to_fixed_2(1_000_000.625), "1000000.63");
    }

    #[test]
    fn test_round_up_carries() {
        assert_eq!(round_up("9", "99"), "10.00");
        assert_eq!(round_up("0", "12"), "0.13");
    }

    #[test]
    fn test_format_currency_rounds_the_stored_value() {
        let en = Locale::default();
        assert_eq!(en.format_currency("USD", 0.015).unwrap(), "$0.01");
        assert_eq!(en.format_currency("USD", 0.125).unwrap(), "$0.13");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("0", ","), "0");
        assert_eq!(group_digits("123", ","), "123");
        assert_eq!(group_digits("1234", ","), "1,234");
        assert_eq!(group_digits("1234567", "."), "1.234.567");
    }

    #[test]
    fn test_format_currency_en_us() {
        let en = locale("en-US");
        assert_eq!(en.format_currency("USD", 1234.56).unwrap(), "$1,234.56");
        assert_eq!(en.format_currency("EUR", 0.5).unwrap(), "€0.50");
        assert_eq!(en.format_currency("USD", -12.0).unwrap(), "-$12.00");
        assert_eq!(en.format_currency("CHF", 1234.56).unwrap(), "CHF\u{a0}1,234.56");
    }

    #[test]
    fn test_format_currency_other_locales() {
        assert_eq!(
            locale("de-DE").format_currency("EUR", 1234.56).unwrap(),
            "1.234,56\u{a0}€"
        );
        assert_eq!(
            locale("fr-FR").format_currency("EUR", 1234567.8).unwrap(),
            "1\u{202f}234\u{202f}567,80\u{a0}€"
        );
        assert_eq!(
            locale("en-GB").format_currency("USD", 10.0).unwrap(),
            "US$10.00"
        );
        assert_eq!(
            locale("ja-JP").format_currency("JPY", 1000.0).unwrap(),
            "￥1,000.00"
        );
    }

    #[test]
    fn test_format_currency_rejects_non_finite() {
        let en = Locale::default();
        assert!(matches!(
            en.format_currency("USD", f64::NAN),
            Err(FormatError::NonFiniteAmount(_))
        ));
        assert_eq!(
            en.format_currency("USD", f64::INFINITY),
            Err(FormatError::NonFiniteAmount(f64::INFINITY))
        );
    }

    #[test]
    fn test_format_date_time() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 5, 14, 7, 9).unwrap();
        assert_eq!(
            locale("en-US").format_date_time(&instant),
            "01/05/2024, 02:07:09 PM"
        );
        assert_eq!(
            locale("en-GB").format_date_time(&instant),
            "05/01/2024, 14:07:09"
        );
        assert_eq!(
            locale("de-DE").format_date_time(&instant),
            "05.01.2024, 14:07:09"
        );
        assert_eq!(
            locale("fr-FR").format_date_time(&instant),
            "05/01/2024 14:07:09"
        );
        assert_eq!(
            locale("ja-JP").format_date_time(&instant),
            "2024/01/05 14:07:09"
        );
    }
}
