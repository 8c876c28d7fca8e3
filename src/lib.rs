pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::fetch::HttpFetcher;
pub use crate::core::scrape::Scraper;
pub use crate::domain::model::{FieldValue, Record};
pub use crate::domain::ports::Fetcher;
pub use crate::utils::error::{Result, ScrapeError};
