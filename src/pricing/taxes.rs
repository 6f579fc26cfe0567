use super::amount::to_decimal;
use super::QuoteError;
use rust_decimal::Decimal;
use serde_json::{Map, Value};

/// Sum the tax components held in a JSON-encoded object string.
///
/// An empty object sums to zero.
pub fn total_taxes(taxes_json: &str) -> Result<Decimal, QuoteError> {
    let taxes: Map<String, Value> =
        serde_json::from_str(taxes_json).map_err(|err| QuoteError::parse("ext_data.taxes", err))?;

    let mut total = Decimal::ZERO;
    for (name, value) in &taxes {
        let amount = to_decimal(&format!("tax '{name}'"), value)?;
        log::debug!("Tax component {}: {}", name, amount);
        total = total
            .checked_add(amount)
            .ok_or_else(|| QuoteError::OutOfRange {
                field: "tax total".to_string(),
                value: format!("{total} + {amount}"),
            })?;
    }

    log::info!("Summed {} tax component(s): {}", taxes.len(), total);
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn sums_string_and_numeric_components() {
        let total = total_taxes(r#"{"vat": "10", "service": "5", "city": 2.5}"#).unwrap();
        assert_eq!(total, dec!(17.5));
    }

    #[test]
    fn empty_object_is_zero() {
        assert_eq!(total_taxes("{}").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn non_numeric_component_is_a_conversion_error() {
        let err = total_taxes(r#"{"vat": "abc", "service": "5"}"#).unwrap_err();
        match err {
            QuoteError::Conversion { field, value } => {
                assert_eq!(field, "tax 'vat'");
                assert_eq!(value, r#""abc""#);
            }
            other => panic!("expected conversion error, got {other:?}"),
        }
    }

    #[test]
    fn sum_beyond_decimal_range_is_an_error() {
        let err = total_taxes(r#"{"a": "79228162514264337593543950335", "b": "1"}"#).unwrap_err();
        assert!(
            matches!(err, QuoteError::OutOfRange { ref field, .. } if field == "tax total"),
            "{err:?}"
        );
    }

    #[test]
    fn non_object_json_is_a_parse_error() {
        for input in ["[1, 2]", "12", "not json", ""] {
            let err = total_taxes(input).unwrap_err();
            assert!(matches!(err, QuoteError::Parse { .. }), "{input}: {err:?}");
        }
    }

    #[test]
    fn sum_is_exact_for_cents() {
        let total = total_taxes(r#"{"a": "0.1", "b": "0.2"}"#).unwrap();
        assert_eq!(total, dec!(0.3));
    }
}
