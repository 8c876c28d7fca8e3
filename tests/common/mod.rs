use async_trait::async_trait;
use finn_scraper::{Fetcher, Result};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Krogsveen-style price statistics page resolving to 85 000 kr/m².
pub const PRICE_PAGE: &str = "<html><body>\
    <div class=\"stats\">\
      <div class=\"card\">\
        <div>Kvadratmeterpris</div>\
        <h1>85 000</h1>\
      </div>\
    </div>\
    </body></html>";

/// Build a listing page from body fragments.
pub fn listing_page(body: &str) -> String {
    format!("<html><head></head><body>{}</body></html>", body)
}

pub const ADDRESS_BLOCK: &str =
    r#"<section data-testid="object-address">Eksempelveien 1, 0170 Oslo</section>"#;

/// Test double for the network port: listing pages for finn.no URLs,
/// the price page for krogsveen URLs, counting every request.
pub struct StubFetcher {
    pub listing: String,
    pub price_page: String,
    pub requests: AtomicUsize,
}

impl StubFetcher {
    pub fn new(listing: impl Into<String>) -> Self {
        Self {
            listing: listing.into(),
            price_page: PRICE_PAGE.to_string(),
            requests: AtomicUsize::new(0),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if url.contains("prisstatistikk") {
            Ok(self.price_page.clone())
        } else {
            Ok(self.listing.clone())
        }
    }
}
