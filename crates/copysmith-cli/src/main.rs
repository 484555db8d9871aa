//! # Copysmith CLI
//!
//! Generate marketing copy from the command line.
//!
//! Provider credentials are read from the environment (`GROQ_API_KEY`,
//! `OPENROUTER_API_KEY`, `TOGETHER_API_KEY`, `MISTRAL_API_KEY`); with none
//! set, output comes from the local synthesis engine. Either way the command
//! prints copy and exits 0; the only startup failure is an invalid template
//! bank.

use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use copysmith_runtime::Gateway;

#[derive(Parser, Debug)]
#[command(name = "copysmith", version, about = "Always-answering marketing copy generator")]
struct Cli {
    /// The brief to generate copy from.
    prompt: String,

    /// Content category: ad-copy, email, social, landing, or general.
    #[arg(short, long, default_value = "general")]
    category: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli) {
        eprintln!("failed to initialise logging: {e}");
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let gateway = Gateway::from_env()?;
    debug!(providers = ?gateway.configured_providers(), "gateway ready");

    let content = gateway.generate(&cli.prompt, &cli.category).await;
    println!("{content}");
    Ok(())
}

/// Initialise the global tracing subscriber.
///
/// `RUST_LOG` overrides the verbosity flags when set. `try_init` tolerates a
/// subscriber already being registered, which happens in test binaries.
fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let level = derive_level(cli);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("copysmith={level},copysmith_runtime={level},copysmith_core={level}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    Ok(())
}

fn derive_level(cli: &Cli) -> &'static str {
    if cli.quiet {
        return "error";
    }
    match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn level_default_is_warn() {
        let cli = Cli::parse_from(["copysmith", "a brief"]);
        assert_eq!(derive_level(&cli), "warn");
    }

    #[test]
    fn level_verbose_counts_up() {
        let cli = Cli::parse_from(["copysmith", "-vv", "a brief"]);
        assert_eq!(derive_level(&cli), "debug");
    }

    #[test]
    fn level_quiet_wins() {
        let cli = Cli::parse_from(["copysmith", "--quiet", "a brief"]);
        assert_eq!(derive_level(&cli), "error");
    }

    #[test]
    fn category_defaults_to_general() {
        let cli = Cli::parse_from(["copysmith", "a brief"]);
        assert_eq!(cli.category, "general");
    }
}
