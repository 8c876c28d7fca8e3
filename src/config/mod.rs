use crate::utils::error::Result;
use crate::utils::validation::{validate_bind_addr, validate_finnkode, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default cache lifetime for the serve mode, 23 hours.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 23 * 60 * 60;

#[derive(Debug, Parser)]
#[command(name = "finn-scraper")]
#[command(about = "Fetch real estate listings from finn.no and make them available as JSON")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scrape a single listing and print its record as JSON
    Ad {
        finnkode: String,

        #[arg(long, help = "Read the listing from a local HTML file instead of fetching")]
        html_file: Option<PathBuf>,
    },

    /// Print the ad URLs of a shared favorite list
    List { list_id: String },

    /// Run the cache-aside HTTP endpoint
    Serve {
        #[arg(long, default_value = "127.0.0.1:5000")]
        bind: String,

        #[arg(long, default_value_t = DEFAULT_CACHE_TTL_SECS, help = "Cache lifetime in seconds")]
        cache_ttl: u64,
    },
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Ad { finnkode, .. } => validate_finnkode("finnkode", finnkode),
            Command::List { .. } => Ok(()),
            Command::Serve { bind, .. } => validate_bind_addr("bind", bind),
        }
    }
}
