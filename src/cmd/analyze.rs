//! Analyze command - price a quote and write the room totals report

use crate::pricing::{format_amount, load_quote, price_quote, write_report, PricedQuote, QuoteReport};
use clap::Args;
use std::path::PathBuf;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

pub const DEFAULT_INPUT: &str = "Python-task.json";
pub const DEFAULT_OUTPUT: &str = "hotel_price_analysis_output.json";

#[derive(Args, Debug)]
pub struct AnalyzeCommand {
    /// JSON file containing the booking quote
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Where to write the JSON report (overwritten)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Also print room prices as a table
    #[arg(long)]
    table: bool,
}

impl AnalyzeCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let input = load_quote(&self.input)?;
        let priced = price_quote(&input)?;
        let report = priced.report();
        write_report(&report, &self.output)?;

        print_summary(&report);
        if self.table {
            print_table(&priced);
        }
        Ok(())
    }
}

fn print_summary(report: &QuoteReport) {
    let info = &report.cheapest_price_info;
    println!("Cheapest Price: {}", info.price);
    println!(
        "Cheapest Price Info: room_type={} number_of_guests={} price={}",
        info.room_type, info.number_of_guests, info.price
    );
    let totals: Vec<String> = report
        .room_totals
        .iter()
        .map(|(room, total)| format!("{}={}", room, total))
        .collect();
    println!("Room Totals (Net Price + Taxes): {}", totals.join(", "));
}

fn print_table(priced: &PricedQuote) {
    let cheapest = &priced.resolution.cheapest().room_type;
    let rows: Vec<RoomRow> = priced
        .resolution
        .rooms
        .iter()
        .map(|r| RoomRow {
            room_type: r.room_type.clone(),
            net_price: format_amount(r.net_price),
            taxes: format_amount(priced.total_taxes),
            total: r.display_total(),
            cheapest: if &r.room_type == cheapest { "*" } else { "" }.to_string(),
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .to_string();
    println!();
    println!("{}", table);
}

#[derive(Debug, Clone, Tabled)]
struct RoomRow {
    #[tabled(rename = "Room Type")]
    room_type: String,
    #[tabled(rename = "Net")]
    net_price: String,
    #[tabled(rename = "Taxes")]
    taxes: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Cheapest")]
    cheapest: String,
}
