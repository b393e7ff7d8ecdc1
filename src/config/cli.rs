use crate::config::SearchConfig;
use crate::domain::model::SearchParameters;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand, ValueEnum};
use url::Url;

#[derive(Debug, Clone, Parser)]
#[command(name = "search-query")]
#[command(about = "Encode and decode search constraints as REST query strings")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Validate parameters and fail on problems")]
    pub strict: bool,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Encode a TOML or JSON search description into a query string
    Encode {
        /// Path to the search description (.toml or .json)
        #[arg(short, long)]
        config: String,

        /// Print a full URL on this base instead of the bare query string
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Decode a query string or URL into JSON
    Decode {
        /// Query string (with or without leading '?') or absolute URL
        input: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

impl CliArgs {
    /// Runs the selected command and returns what should go to stdout.
    pub fn run(&self) -> Result<String> {
        match &self.command {
            Command::Encode { config, base_url } => {
                encode(config, base_url.as_deref(), self.strict)
            }
            Command::Decode { input } => decode(input, self.strict),
        }
    }
}

/// Loads a search description and renders it as a query string, or as a
/// full URL when a base is given on the command line or in the file.
pub fn encode(config_path: &str, base_url: Option<&str>, strict: bool) -> Result<String> {
    tracing::info!("Loading search description from: {}", config_path);
    let config = SearchConfig::from_file(config_path)?;
    if strict {
        config.validate()?;
    }

    let params = config.to_search_parameters()?;
    tracing::debug!(
        "Encoding {} filters, {} sortings, paging: {:?}",
        params.filters().len(),
        params.sortings().len(),
        params.paging()
    );

    let base = match base_url {
        Some(raw) => Some(Url::parse(raw)?),
        None => config.base_url()?,
    };

    Ok(match base {
        Some(base) => params.to_url(&base).to_string(),
        None => params.to_query_string(),
    })
}

/// Decodes an absolute URL or a bare query string into pretty JSON.
///
/// Only input that parses as a URL with a host is read as a URL; anything
/// else, including values that merely contain `://`, is a query string.
pub fn decode(input: &str, strict: bool) -> Result<String> {
    let params = match Url::parse(input).ok().filter(|url| url.has_host()) {
        Some(url) => SearchParameters::from_url(&url),
        None => SearchParameters::from_query_string(input),
    };
    tracing::debug!(
        "Decoded {} filters, {} sortings",
        params.filters().len(),
        params.sortings().len()
    );

    if strict {
        params.validate()?;
    }

    Ok(serde_json::to_string_pretty(&params)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_encode_args() {
        let args = CliArgs::parse_from([
            "search-query",
            "encode",
            "--config",
            "search.toml",
            "--base-url",
            "https://api.example.com/items",
            "--strict",
        ]);

        assert!(args.strict);
        assert!(!args.verbose);
        assert_eq!(args.log_format, LogFormat::Compact);
        match args.command {
            Command::Encode { config, base_url } => {
                assert_eq!(config, "search.toml");
                assert_eq!(base_url.as_deref(), Some("https://api.example.com/items"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_decode_args() {
        let args = CliArgs::parse_from(["search-query", "-v", "decode", "skip=0&take=10"]);
        assert!(args.verbose);
        assert!(matches!(args.command, Command::Decode { ref input } if input == "skip=0&take=10"));
    }
}
