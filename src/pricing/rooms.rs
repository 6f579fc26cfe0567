use super::amount::{format_amount, to_decimal};
use super::QuoteError;
use rust_decimal::Decimal;
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Net and tax-inclusive price for one room type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomPrice {
    pub room_type: String,
    pub net_price: Decimal,
    pub total_price: Decimal,
}

impl RoomPrice {
    pub fn display_total(&self) -> String {
        format_amount(self.total_price)
    }
}

/// Priced rooms in input order plus the index of the cheapest one
#[derive(Debug, Clone)]
pub struct PriceResolution {
    pub rooms: Vec<RoomPrice>,
    cheapest: usize,
}

impl PriceResolution {
    /// Room with the lowest net price; the first one wins on ties.
    pub fn cheapest(&self) -> &RoomPrice {
        &self.rooms[self.cheapest]
    }

    /// Room type to two-decimal tax-inclusive total, in input order
    pub fn room_totals(&self) -> IndexMap<String, String> {
        self.rooms
            .iter()
            .map(|r| (r.room_type.clone(), r.display_total()))
            .collect()
    }
}

/// Add `total_taxes` to every net price and pick the cheapest room by net price.
pub fn resolve_prices(
    shown_price: &Map<String, Value>,
    total_taxes: Decimal,
) -> Result<PriceResolution, QuoteError> {
    let mut rooms: Vec<RoomPrice> = Vec::with_capacity(shown_price.len());
    let mut cheapest: Option<usize> = None;

    for (room_type, price) in shown_price {
        let field = format!("shown_price '{room_type}'");
        let net_price = to_decimal(&field, price)?;
        let total_price = net_price
            .checked_add(total_taxes)
            .ok_or_else(|| QuoteError::OutOfRange {
                field,
                value: format!("{net_price} + {total_taxes}"),
            })?;
        let is_cheaper = match cheapest {
            None => true,
            Some(i) => net_price < rooms[i].net_price,
        };
        if is_cheaper {
            cheapest = Some(rooms.len());
        }
        rooms.push(RoomPrice {
            room_type: room_type.clone(),
            net_price,
            total_price,
        });
    }

    let cheapest = cheapest.ok_or(QuoteError::EmptyInput("shown_price"))?;
    log::info!(
        "Cheapest of {} room type(s): {} at {} net",
        rooms.len(),
        rooms[cheapest].room_type,
        rooms[cheapest].net_price
    );
    Ok(PriceResolution { rooms, cheapest })
}
