use std::time::Duration;

use anyhow::bail;
use clap::Parser;

use holly_api::SheetClient;
use holly_config::HollyConfig;

mod cli;
mod commands;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("holly error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();

    // The catalog is baked in; no endpoint needed.
    if let cli::Commands::Designs(args) = &cli.command {
        return commands::designs::handle(args, &flags);
    }

    let config = HollyConfig::load_with_dotenv()?;
    let base_url = flags
        .url
        .clone()
        .unwrap_or_else(|| config.sheet.url.clone());
    if base_url.is_empty() {
        bail!("no post store URL configured (set sheet.url or pass --url)");
    }
    let client = SheetClient::new(base_url, Duration::from_secs(config.sheet.timeout_secs));

    match &cli.command {
        cli::Commands::Place(args) => commands::place::handle(args, client, &flags).await,
        cli::Commands::Tree(args) => commands::tree::handle(args, client, &config, &flags).await,
        cli::Commands::Search(args) => commands::search::handle(args, client, &flags).await,
        cli::Commands::Ranking(args) => {
            commands::ranking::handle(args, &client, &config, &flags).await
        }
        cli::Commands::Posts => commands::posts::handle(&client, &config, &flags).await,
        cli::Commands::Comments(args) => {
            commands::comments::handle(args, &client, &config, &flags).await
        }
        cli::Commands::Comment(args) => commands::comment::handle(args, &client, &flags).await,
        cli::Commands::Designs(_) => unreachable!("handled above"),
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("HOLLY_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
