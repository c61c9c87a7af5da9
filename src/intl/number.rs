//! Locale-aware currency formatting.
//!
//! Amounts are formatted in currency style with the currency symbol, rounded
//! half away from zero to at most two fraction digits. Whole values drop the
//! fraction entirely (`$10`), anything else always shows two digits
//! (`$25.50`).

use std::borrow::Cow;

use rust_decimal::{Decimal, RoundingStrategy};

use super::Locale;

// ============================================================================
// Constants
// ============================================================================

/// Maximum number of fraction digits in currency output.
pub const MAX_FRACTION_DIGITS: u32 = 2;

/// Non-breaking space between amount and trailing symbol.
const NBSP: &str = "\u{a0}";

/// Narrow non-breaking space used as the French grouping separator.
const NNBSP: &str = "\u{202f}";

// ============================================================================
// Locale Symbols
// ============================================================================

/// Separators and symbol placement for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NumberSymbols {
    group: &'static str,
    decimal: &'static str,
    symbol_first: bool,
}

const fn number_symbols(locale: Locale) -> NumberSymbols {
    match locale {
        Locale::EnUs => NumberSymbols {
            group: ",",
            decimal: ".",
            symbol_first: true,
        },
        Locale::FrFr => NumberSymbols {
            group: NNBSP,
            decimal: ",",
            symbol_first: false,
        },
        Locale::DeDe => NumberSymbols {
            group: ".",
            decimal: ",",
            symbol_first: false,
        },
    }
}

/// Returns the display symbol of `currency` in `locale`.
///
/// Currencies without a known symbol display their upper-cased ISO code.
#[must_use]
pub fn currency_symbol(locale: Locale, currency: &str) -> Cow<'static, str> {
    let code = currency.trim().to_ascii_uppercase();
    let symbol = match (locale, code.as_str()) {
        (_, "EUR") => Some("€"),
        (_, "INR") => Some("₹"),
        (Locale::FrFr, "USD") => Some("$US"),
        (Locale::FrFr, "GBP") => Some("£GB"),
        (Locale::FrFr, "CAD") => Some("$CA"),
        (Locale::FrFr, "AUD") => Some("$AU"),
        (Locale::FrFr, "MXN") => Some("$MX"),
        (Locale::FrFr, _) => None,
        (_, "USD") => Some("$"),
        (_, "GBP") => Some("£"),
        (_, "JPY") => Some("¥"),
        (_, "MXN") => Some("MX$"),
        (Locale::EnUs, "CAD") => Some("CA$"),
        (Locale::EnUs, "AUD") => Some("A$"),
        (Locale::DeDe, "CAD") => Some("CA$"),
        (Locale::DeDe, "AUD") => Some("AU$"),
        _ => None,
    };
    symbol.map_or(Cow::Owned(code), Cow::Borrowed)
}

// ============================================================================
// Formatting
// ============================================================================

/// Formats `amount` (major units) as currency in `locale`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_currency(Locale::EnUs, Decimal::new(2550, 2), "USD"), "$25.50");
/// assert_eq!(format_currency(Locale::EnUs, Decimal::new(1000, 2), "USD"), "$10");
/// ```
#[must_use]
pub fn format_currency(locale: Locale, amount: Decimal, currency: &str) -> String {
    let symbols = number_symbols(locale);
    let rounded =
        amount.round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let number = format_unsigned(rounded.abs(), symbols);
    let symbol = currency_symbol(locale, currency);
    let sign = if negative { "-" } else { "" };

    if symbols.symbol_first {
        // Alphabetic symbols (ISO codes) are separated from the digits.
        let separator = if symbol.chars().last().is_some_and(char::is_alphabetic) {
            NBSP
        } else {
            ""
        };
        format!("{sign}{symbol}{separator}{number}")
    } else {
        format!("{sign}{number}{NBSP}{symbol}")
    }
}

/// Formats a non-negative, already rounded value with grouping.
fn format_unsigned(value: Decimal, symbols: NumberSymbols) -> String {
    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS as usize, value);
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let grouped = group_digits(integer, symbols.group);

    if fraction.is_empty() || fraction.chars().all(|c| c == '0') {
        grouped
    } else {
        format!("{grouped}{}{fraction}", symbols.decimal)
    }
}

/// Inserts `separator` between every group of three digits.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(group_digits("1234567", ","), "1,234,567");
/// ```
#[must_use]
pub fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.chars().count();
    let mut result = String::with_capacity(len + len / 3 * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push_str(separator);
        }
        result.push(c);
    }
    result
}

// ============================================================================
// Tests
// ============================================================================
