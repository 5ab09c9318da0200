use anyhow::Context as _;
use clap::Parser;
use poly_agent::cli::{Cli, Commands, Context};
use poly_agent::config::Config;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Missing file falls back to defaults, a broken one is fatal
    let config = Config::load_or_default(&cli.config)
        .with_context(|| format!("could not load config from {}", cli.config.display()))?;

    poly_agent::telemetry::init_telemetry(&config.telemetry, cli.verbose)?;

    let ctx = Context::from_config(&config, cli.data_dir.as_deref())?;

    match cli.command {
        Commands::FetchEvents(args) => {
            tracing::info!("Fetching events");
            args.execute(&ctx).await?;
        }
        Commands::Research(args) => {
            tracing::info!("Starting research run");
            args.execute(&ctx).await?;
        }
        Commands::Snapshot(args) => {
            tracing::info!("Taking snapshot");
            args.execute(&ctx).await?;
        }
        Commands::Actions(args) => {
            args.execute(&ctx).await?;
        }
        Commands::Export(args) => {
            tracing::info!("Exporting events");
            args.execute(&ctx).await?;
        }
    }

    Ok(())
}
