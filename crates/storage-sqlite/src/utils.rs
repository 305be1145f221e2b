//! Conversion helpers shared by the SQLite models.

use log::warn;
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a stored decimal string, accepting float notation and falling back to zero.
pub fn parse_decimal(value: &str, field_name: &str) -> Decimal {
    if let Ok(d) = Decimal::from_str(value) {
        return d;
    }
    match f64::from_str(value).ok().and_then(Decimal::from_f64) {
        Some(d) => d,
        None => {
            warn!(
                "Failed to parse {} '{}' as a decimal. Falling back to ZERO.",
                field_name, value
            );
            Decimal::ZERO
        }
    }
}

/// Parses a stored enum code, logging and substituting `fallback` on unknown values.
pub fn parse_code<T: FromStr>(value: &str, field_name: &str, fallback: T) -> T {
    value.parse().unwrap_or_else(|_| {
        warn!("Unknown {} '{}' in database", field_name, value);
        fallback
    })
}
