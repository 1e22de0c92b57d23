//! Command-line interface for the hosts converter binary.
//!
//! The CLI performs one conversion per invocation: it reads the YAML host
//! inventory and writes the JSON resource document consumed by the monitoring
//! discovery mechanism.

use std::{path::PathBuf, process};

use clap::Parser;
use hosts_converter::{convert, Error};
use tracing_subscriber::EnvFilter;

/// Command line interface for generating discovery resource documents.
#[derive(Debug, Parser)]
#[command(
    name = "hosts-converter",
    version,
    about = "Convert host inventory YAML into discovery resources"
)]
struct Cli {
    /// Path to the YAML inventory file describing monitored hosts.
    #[arg(long = "input", value_name = "PATH", default_value = "hosts.yaml")]
    input: PathBuf,

    /// Path of the JSON resource document to write.
    #[arg(long = "output", value_name = "PATH", default_value = "hosts.json")]
    output: PathBuf,
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(error) = run() {
        eprintln!("{}", error.to_display_string());
        process::exit(1);
    }
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates errors originating from inventory loading and conversion.
fn run() -> Result<(), Error> {
    let cli = Cli::parse();
    convert(&cli.input, &cli.output)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::Parser;

    use super::Cli;

    #[test]
    fn cli_defaults_to_conventional_paths() {
        let cli = Cli::try_parse_from(["hosts-converter"]).expect("failed to parse CLI");

        assert_eq!(cli.input, Path::new("hosts.yaml"));
        assert_eq!(cli.output, Path::new("hosts.json"));
    }

    #[test]
    fn cli_accepts_path_overrides() {
        let cli = Cli::try_parse_from([
            "hosts-converter",
            "--input",
            "inventory.yaml",
            "--output",
            "resources.json",
        ])
        .expect("failed to parse CLI");

        assert_eq!(cli.input, Path::new("inventory.yaml"));
        assert_eq!(cli.output, Path::new("resources.json"));
    }
}
