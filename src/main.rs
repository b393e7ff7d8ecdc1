use anyhow::Context;
use clap::Parser;
use search_constraints::config::cli::LogFormat;
use search_constraints::utils::logger;
use search_constraints::{CliArgs, QueryError};

fn main() {
    let args = CliArgs::parse();

    match args.log_format {
        LogFormat::Compact => logger::init_cli_logger(args.verbose),
        LogFormat::Json => logger::init_json_logger(args.verbose),
    }

    let result = args.run().context("search-query failed");

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("❌ {:#}", e);
            if let Some(query_error) = e.downcast_ref::<QueryError>() {
                eprintln!("💡 Suggestion: {}", query_error.recovery_suggestion());
            }
            std::process::exit(1);
        }
    }
}
