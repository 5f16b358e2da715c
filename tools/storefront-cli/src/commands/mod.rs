//! CLI command implementations.

pub mod browse;
pub mod collections;
pub mod config;
pub mod facets;

use clap::{Args, Subcommand};

/// Arguments for the facets command.
#[derive(Args)]
pub struct FacetsArgs {
    /// Collection slug.
    pub slug: String,
}

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Collection slug.
    pub slug: String,

    /// Keep products offered in this size (repeatable).
    #[arg(short, long = "size")]
    pub sizes: Vec<String>,

    /// Keep products offered in this color, as hex (repeatable).
    #[arg(long = "color")]
    pub colors: Vec<String>,

    /// Lowest price to keep (inclusive).
    #[arg(long)]
    pub min_price: Option<String>,

    /// Highest price to keep (inclusive).
    #[arg(long)]
    pub max_price: Option<String>,

    /// Keep only products in stock.
    #[arg(long)]
    pub in_stock: bool,

    /// Case-insensitive name search.
    #[arg(short = 'q', long)]
    pub search: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
