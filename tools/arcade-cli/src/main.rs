//! Arcade CLI - drive the storefront page from a terminal.
//!
//! Commands:
//! - `arcade session` - Interactive page session (cart, carousel, search)
//! - `arcade catalog` - List the built-in games
//! - `arcade search` - Filter the catalog
//! - `arcade config` - Show or write configuration

mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CatalogArgs, ConfigArgs, SearchArgs, SessionArgs};

/// Arcade CLI - Play with the Arcade storefront from a terminal
#[derive(Parser)]
#[command(name = "arcade")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive storefront session
    Session(SessionArgs),

    /// List the games on sale
    Catalog(CatalogArgs),

    /// Search games by title or developer
    Search(SearchArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);
    let ctx = context::Context::load(cli.config.as_deref(), output)?;
    ctx.init_logging()?;

    let result = match cli.command {
        Commands::Session(args) => commands::session::run(args, &ctx).await,
        Commands::Catalog(args) => commands::catalog::list(args, &ctx),
        Commands::Search(args) => commands::catalog::search(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
