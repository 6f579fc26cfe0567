use super::QuoteError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

/// Input root for a hotel booking quote
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct QuoteInput {
    /// Quote records; only the first one is priced
    pub assignment_results: Vec<AssignmentResult>,
}

/// A single hotel/booking quote record
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AssignmentResult {
    /// Room type name to net (pre-tax) price, as a number or numeric string
    #[schemars(with = "BTreeMap<String, Value>")]
    pub shown_price: Map<String, Value>,
    /// Number of guests on the booking
    pub number_of_guests: u32,
    pub ext_data: ExtData,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExtData {
    /// JSON-encoded object of tax name to amount, e.g. `"{\"vat\": \"10\"}"`
    pub taxes: String,
}

impl QuoteInput {
    /// The record that gets priced. Extra records are ignored.
    pub fn first_result(&self) -> Result<&AssignmentResult, QuoteError> {
        let (first, rest) = self
            .assignment_results
            .split_first()
            .ok_or(QuoteError::EmptyInput("assignment_results"))?;
        if !rest.is_empty() {
            log::warn!(
                "Ignoring {} additional assignment result(s); only the first is priced",
                rest.len()
            );
        }
        Ok(first)
    }
}

/// Read and parse a quote document from disk.
pub fn load_quote(path: &Path) -> Result<QuoteInput, QuoteError> {
    let bytes = std::fs::read(path).map_err(|source| QuoteError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Read {} bytes from {}", bytes.len(), path.display());
    read_quote_json(&bytes)
}

/// Parse a quote document from JSON bytes.
pub fn read_quote_json(bytes: &[u8]) -> Result<QuoteInput, QuoteError> {
    serde_json::from_slice(bytes).map_err(|err| QuoteError::parse("input document", err))
}
