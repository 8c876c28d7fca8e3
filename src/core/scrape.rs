use crate::core::area_price::resolve_area_price;
use crate::core::labels::parse_label_pairs;
use crate::core::normalize::element_text;
use crate::core::viewings::extract_viewings;
use crate::domain::model::{FieldValue, Record};
use crate::domain::ports::Fetcher;
use crate::utils::error::Result;
use indexmap::IndexMap;
use regex::Regex;
use scraper::{Html, Selector};

pub fn ad_url(finnkode: &str) -> String {
    format!(
        "https://www.finn.no/realestate/homes/ad.html?finnkode={}",
        finnkode
    )
}

pub fn favorite_list_url(list_id: &str) -> String {
    format!("https://www.finn.no/sharedfavoritelist/{}", list_id)
}

/// Everything we can pull out of the listing page without touching the
/// network. The price lookup happens afterwards so no parsed document
/// is held across an await.
struct ListingParts {
    address: String,
    area_name: String,
    postal_code: Option<String>,
    viewings: Vec<String>,
    labels: IndexMap<String, FieldValue>,
}

pub struct Scraper<F: Fetcher> {
    fetcher: F,
}

impl<F: Fetcher> Scraper<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetch a listing by its finnkode and extract its record.
    pub async fn scrape_ad_by_code(&self, finnkode: &str) -> Result<Record> {
        let html = self.fetcher.fetch(&ad_url(finnkode)).await?;
        self.scrape_ad(&html).await
    }

    /// Extract the normalized record from listing HTML. A page without
    /// the address element yields an empty record, the caller's
    /// "not found" signal; everything else either succeeds with
    /// defaults for absent optional fields or fails with one error.
    pub async fn scrape_ad(&self, html: &str) -> Result<Record> {
        let Some(parts) = parse_listing(html)? else {
            return Ok(Record::new());
        };

        let area_price = resolve_area_price(&self.fetcher, parts.postal_code.as_deref()).await?;
        Ok(assemble(parts, area_price))
    }

    /// Resolve a shared favorite list to the ad URLs it links to.
    /// A page without the expected grid yields an empty list.
    pub async fn scrape_list(&self, list_id: &str) -> Result<Vec<String>> {
        let html = self.fetcher.fetch(&favorite_list_url(list_id)).await?;
        Ok(parse_favorite_list(&html))
    }
}

fn parse_listing(html: &str) -> Result<Option<ListingParts>> {
    let document = Html::parse_document(html);

    let address_sel = Selector::parse(r#"[data-testid="object-address"]"#).unwrap();
    let Some(address_el) = document.select(&address_sel).next() else {
        return Ok(None);
    };
    let address = element_text(&address_el);

    let area_sel = Selector::parse(r#"[data-testid="local-area-name"]"#).unwrap();
    let area_name = document
        .select(&area_sel)
        .next()
        .map(|el| element_text(&el))
        .unwrap_or_default();

    let postal_code = Regex::new(r"\b\d{4}\b")
        .unwrap()
        .find(&address)
        .map(|m| m.as_str().to_string());

    Ok(Some(ListingParts {
        address,
        area_name,
        postal_code,
        viewings: extract_viewings(&document)?,
        labels: parse_label_pairs(&document),
    }))
}

/// Merge passes in fixed precedence: address and area fields, then
/// viewings, then label pairs, then the derived asking price.
fn assemble(parts: ListingParts, area_price: i64) -> Record {
    let mut record = Record::new();
    record.insert("Postadresse", parts.address);
    record.insert("Kvm/Omraade", area_price);
    record.insert("Område", parts.area_name);

    if !parts.viewings.is_empty() {
        record.insert("Visninger", parts.viewings.clone());
        for (i, slot) in parts.viewings.iter().enumerate() {
            record.insert(format!("Visning {}", i + 1), slot.as_str());
        }
    }

    for (label, value) in parts.labels {
        record.insert(label, value);
    }

    if let Some(total) = record.get_int("Totalpris") {
        let debt = record.get_int("Fellesgjeld").unwrap_or(0);
        let costs = record.get_int("Omkostninger").unwrap_or(0);
        record.insert("Prisantydning", total - debt - costs);
    }

    record
}

fn parse_favorite_list(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let banner_sel = Selector::parse("nav.banner").unwrap();
    let anchor_sel = Selector::parse("a").unwrap();

    let Some(grid) = document.select(&banner_sel).next() else {
        return Vec::new();
    };

    grid.select(&anchor_sel)
        .filter_map(|el| el.value().attr("href"))
        .filter(|href| !href.is_empty())
        .filter_map(|href| href.rsplit('/').next())
        .map(ad_url)
        .collect()
}
