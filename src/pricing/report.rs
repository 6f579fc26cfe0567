use super::input::QuoteInput;
use super::rooms::{resolve_prices, PriceResolution};
use super::taxes::total_taxes;
use super::QuoteError;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::collections::BTreeMap;
use std::path::Path;

/// Output document written after pricing a quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct QuoteReport {
    pub cheapest_price_info: CheapestPriceInfo,
    /// Room type to tax-inclusive total, two decimals
    #[schemars(with = "BTreeMap<String, String>")]
    pub room_totals: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CheapestPriceInfo {
    pub room_type: String,
    pub number_of_guests: u32,
    /// Tax-inclusive total of the cheapest room, two decimals
    pub price: String,
}

/// Everything computed for a quote, before it is written out
#[derive(Debug, Clone)]
pub struct PricedQuote {
    pub total_taxes: Decimal,
    pub number_of_guests: u32,
    pub resolution: PriceResolution,
}

impl PricedQuote {
    pub fn report(&self) -> QuoteReport {
        let cheapest = self.resolution.cheapest();
        QuoteReport {
            cheapest_price_info: CheapestPriceInfo {
                room_type: cheapest.room_type.clone(),
                number_of_guests: self.number_of_guests,
                price: cheapest.display_total(),
            },
            room_totals: self.resolution.room_totals(),
        }
    }
}

/// Price the first assignment result of a quote.
pub fn price_quote(input: &QuoteInput) -> Result<PricedQuote, QuoteError> {
    let result = input.first_result()?;
    let total_taxes = total_taxes(&result.ext_data.taxes)?;
    let resolution = resolve_prices(&result.shown_price, total_taxes)?;
    Ok(PricedQuote {
        total_taxes,
        number_of_guests: result.number_of_guests,
        resolution,
    })
}

/// Serialize the report with four-space indentation, replacing any existing file.
pub fn write_report(report: &QuoteReport, path: &Path) -> Result<(), QuoteError> {
    write_json(report, path)
}

/// Nothing touches `path` unless serialization succeeds.
fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<(), QuoteError> {
    let write_error = |source: std::io::Error| QuoteError::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value
        .serialize(&mut ser)
        .map_err(|err| write_error(std::io::Error::from(err)))?;
    buf.push(b'\n');

    std::fs::write(path, &buf).map_err(write_error)?;
    log::info!("Wrote {} bytes to {}", buf.len(), path.display());
    Ok(())
}
