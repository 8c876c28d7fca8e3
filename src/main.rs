use clap::Parser;
use finn_scraper::config::{CliConfig, Command};
use finn_scraper::core::scrape::ad_url;
use finn_scraper::utils::{logger, validation::Validate};
use finn_scraper::{HttpFetcher, Scraper};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    match &config.command {
        Command::Serve { .. } => logger::init_server_logger(),
        _ => logger::init_cli_logger(config.verbose),
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(2);
    }

    if let Err(e) = run(config).await {
        tracing::error!("{}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run(config: CliConfig) -> finn_scraper::Result<()> {
    match config.command {
        Command::Ad {
            finnkode,
            html_file,
        } => {
            let scraper = Scraper::new(HttpFetcher::new()?);
            let record = match html_file {
                Some(path) => {
                    let html = std::fs::read_to_string(path)?;
                    scraper.scrape_ad(&html).await?
                }
                None => scraper.scrape_ad_by_code(&finnkode).await?,
            };

            if record.is_empty() {
                tracing::warn!("Could not find postal address element in HTML");
            }

            let mut out = serde_json::Map::new();
            out.insert(
                "url".to_string(),
                serde_json::Value::String(ad_url(&finnkode)),
            );
            if let serde_json::Value::Object(fields) = serde_json::to_value(&record)? {
                out.extend(fields);
            }
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::Value::Object(out))?
            );
        }
        Command::List { list_id } => {
            let scraper = Scraper::new(HttpFetcher::new()?);
            let urls = scraper.scrape_list(&list_id).await?;
            println!("{}", serde_json::to_string_pretty(&urls)?);
        }
        Command::Serve { bind, cache_ttl } => {
            finn_scraper::server::serve(&bind, cache_ttl).await?;
        }
    }

    Ok(())
}
