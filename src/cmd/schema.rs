//! Schema command - print the input and report JSON formats

use crate::pricing::{QuoteInput, QuoteReport};
use clap::Args;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Which document to describe
    #[arg(value_enum, default_value = "input")]
    document: SchemaDocument,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaDocument {
    /// The booking quote read by `analyze`
    Input,
    /// The report written by `analyze`
    Output,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let schema = match self.document {
            SchemaDocument::Input => schema_for!(QuoteInput),
            SchemaDocument::Output => schema_for!(QuoteReport),
        };
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }
}
