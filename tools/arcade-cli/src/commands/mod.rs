//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod session;

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Arguments for the session command.
#[derive(Args)]
pub struct SessionArgs {
    /// Persist the cart under this directory instead of in memory.
    #[arg(long)]
    pub storage_dir: Option<PathBuf>,

    /// Autoplay interval in milliseconds.
    #[arg(long)]
    pub autoplay_ms: Option<u64>,
}

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Show descriptions as well.
    #[arg(short, long)]
    pub long: bool,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for in titles and developers. Empty lists everything.
    #[arg(default_value = "")]
    pub query: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Write a default config file
    Init {
        /// Destination (.toml or .json)
        #[arg(default_value = "arcade.toml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
