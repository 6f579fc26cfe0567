use clap::{Parser, Subcommand};

mod cmd;
mod pricing;

#[derive(Parser, Debug)]
#[command(version, about = "Tax-inclusive room pricing for hotel booking quotes")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    analyze: cmd::analyze::AnalyzeCommand,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Price a booking quote and write the room totals report (default)
    Analyze(cmd::analyze::AnalyzeCommand),
    /// Print the JSON Schema of the input or report document
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Analyze(analyze)) => analyze.exec(),
        Some(Commands::Schema(schema)) => schema.exec(),
        None => cli.analyze.exec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_runs_analyze_with_defaults() {
        let cli = Cli::try_parse_from(["hotel-quote"]).unwrap();
        assert!(cli.command.is_none());
        assert!(format!("{:?}", cli.analyze).contains("Python-task.json"));
    }

    #[test]
    fn schema_subcommand_parses() {
        let cli = Cli::try_parse_from(["hotel-quote", "schema", "output"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Schema(_))));
    }
}
