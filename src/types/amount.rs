use crate::types::errors::AmountError;
use rust_decimal::Decimal;
use std::str::FromStr;

const THOUSANDS_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';

/// Largest difference between a declared and a recomputed balance that is still
/// considered a match (one cent).
pub fn balance_tolerance() -> Decimal {
    Decimal::new(1, 2)
}

/// Parses a locale formatted amount such as `1.234,56` or `-20,00`.
///
/// `.` is treated as a thousands separator and dropped, `,` is the decimal separator.
pub fn parse_amount(value: &str) -> Result<Decimal, AmountError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(AmountError::InvalidFormat("Value is an empty string".to_string()));
    }

    let normalized: String = value.chars().filter(|c| *c != THOUSANDS_SEPARATOR).collect();
    let parts: Vec<&str> = normalized.split(DECIMAL_SEPARATOR).collect();

    if parts.len() > 2 {
        return Err(AmountError::InvalidFormat(format!("Value [{value}] has more than one decimal separator")));
    }

    let (sign, integer) = match parts[0].strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", parts[0].strip_prefix('+').unwrap_or(parts[0]))
    };

    if integer.is_empty() || !integer.chars().all(|c| c.is_ascii_digit()) {
        return Err(AmountError::InvalidFormat(format!("Value [{value}] has an invalid integer part")));
    }

    let fraction = parts.get(1).copied().unwrap_or("");

    if !fraction.chars().all(|c| c.is_ascii_digit()) {
        return Err(AmountError::InvalidFormat(format!("Value [{value}] has an invalid fraction part")));
    }

    let canonical = if fraction.is_empty() {
        format!("{sign}{integer}")
    } else {
        format!("{sign}{integer}.{fraction}")
    };

    Decimal::from_str(&canonical).map_err(|error| {
        AmountError::InvalidFormat(format!("Value [{value}] is out of range: {error}"))
    })
}

/// Formats an amount with `,` as decimal separator and no thousands grouping.
pub fn format_amount(amount: Decimal) -> String {
    amount.to_string().replace('.', &DECIMAL_SEPARATOR.to_string())
}
