pub mod amount;
pub mod error;
pub mod input;
pub mod report;
pub mod rooms;
pub mod taxes;

// Flat surface used by the commands.
pub use amount::format_amount;
pub use error::QuoteError;
pub use input::{load_quote, QuoteInput};
pub use report::{price_quote, write_report, PricedQuote, QuoteReport};
