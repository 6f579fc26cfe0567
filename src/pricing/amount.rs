use super::QuoteError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;
use std::str::FromStr;

/// Coerce a JSON price or tax value into a decimal amount.
///
/// Accepts JSON numbers and strings holding a decimal number, with optional
/// surrounding whitespace and optional exponent (`"1.5e2"`).
///
/// Numbers beyond the 96-bit decimal range (magnitude above about 7.9e28, or
/// more than 28 fractional digits) are a [`QuoteError::OutOfRange`]. Anything
/// that is not a number at all is a [`QuoteError::Conversion`] naming `field`.
pub fn to_decimal(field: &str, value: &Value) -> Result<Decimal, QuoteError> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => String::new(),
    };
    if let Some(amount) = parse_decimal(&text) {
        return Ok(amount);
    }

    let field = field.to_string();
    let value = value.to_string();
    if text.parse::<f64>().is_ok_and(f64::is_finite) {
        Err(QuoteError::OutOfRange { field, value })
    } else {
        Err(QuoteError::Conversion { field, value })
    }
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

/// Round half-to-even to cents and render with exactly two decimals.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    format!("{:.2}", rounded)
}
