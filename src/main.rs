use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use space_traveling::app::AppContext;
use space_traveling::cli::{commands, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::new(cli.config.as_deref())?;

    match cli.command {
        Commands::List { pages, all } => {
            let pages = if all { None } else { Some(pages) };
            commands::list_posts(&ctx, pages).await?;
        }
        Commands::Post { uid, comments } => {
            commands::show_post(&ctx, &uid, comments).await?;
        }
        Commands::Paths { limit } => {
            commands::list_paths(&ctx, limit).await?;
        }
    }

    Ok(())
}
