mod common;

use common::{listing_page, StubFetcher, ADDRESS_BLOCK};
use finn_scraper::{FieldValue, Scraper};
use std::io::Write;

#[tokio::test]
async fn test_scenario_address_only() {
    let listing = listing_page(ADDRESS_BLOCK);
    let scraper = Scraper::new(StubFetcher::new(listing.as_str()));

    let record = scraper.scrape_ad(&listing).await.unwrap();

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "Postadresse": "Eksempelveien 1, 0170 Oslo",
            "Kvm/Omraade": 85_000,
            "Område": "",
        })
    );
}

#[tokio::test]
async fn test_scenario_missing_address() {
    let listing = listing_page("<h1>Beklager, annonsen finnes ikke</h1>");
    let scraper = Scraper::new(StubFetcher::new(listing.as_str()));

    let record = scraper.scrape_ad(&listing).await.unwrap();
    assert!(record.is_empty());
    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        serde_json::json!({})
    );
}

#[tokio::test]
async fn test_scenario_single_viewing() {
    let listing = listing_page(&format!(
        r#"{}<a href="https://cal.finn.no/export.ics?iCalendarFrom=20240610T170000Z&iCalendarTo=20240610T180000Z">kalender</a>"#,
        ADDRESS_BLOCK
    ));
    let scraper = Scraper::new(StubFetcher::new(listing.as_str()));

    let record = scraper.scrape_ad(&listing).await.unwrap();

    assert_eq!(
        record.get("Visninger"),
        Some(&FieldValue::DateTimes(vec![
            "10/06/2024 19:00".to_string()
        ]))
    );
    assert_eq!(
        record.get("Visning 1"),
        Some(&FieldValue::Text("10/06/2024 19:00".to_string()))
    );
}

#[tokio::test]
async fn test_full_listing() {
    let listing = listing_page(&format!(
        r#"{}
        <div data-testid="local-area-name">Bislett</div>
        <a href="https://cal.finn.no/a.ics?iCalendarFrom=20240612T160000Z">ons</a>
        <a href="https://cal.finn.no/b.ics?iCalendarFrom=20240610T170000Z">man</a>
        <dl>
          <dt>Totalpris</dt><dd>5 000 000 kr</dd>
          <dt>Fellesgjeld</dt><dd>200 000 kr</dd>
          <dt>Omkostninger</dt><dd>50 000 kr</dd>
          <dt>Bruksareal</dt><dd>98 m² (BRA-i)</dd>
          <dt>Boligtype</dt><dd>Leilighet</dd>
        </dl>
        <dl>
          <dt>Mobil</dt><dd>900 00 000</dd>
          <dt>Man.</dt><dd>17:00 - 18:00</dd>
        </dl>"#,
        ADDRESS_BLOCK
    ));
    let scraper = Scraper::new(StubFetcher::new(listing.as_str()));

    let record = scraper.scrape_ad(&listing).await.unwrap();

    assert_eq!(record.get_int("Kvm/Omraade"), Some(85_000));
    assert_eq!(
        record.get("Område"),
        Some(&FieldValue::Text("Bislett".to_string()))
    );
    assert_eq!(
        record.get("Visninger"),
        Some(&FieldValue::DateTimes(vec![
            "10/06/2024 19:00".to_string(),
            "12/06/2024 18:00".to_string(),
        ]))
    );
    assert_eq!(
        record.get("Visning 2"),
        Some(&FieldValue::Text("12/06/2024 18:00".to_string()))
    );
    assert_eq!(record.get_int("Totalpris"), Some(5_000_000));
    assert_eq!(record.get_int("Bruksareal"), Some(98));
    assert_eq!(
        record.get("Boligtype"),
        Some(&FieldValue::Text("Leilighet".to_string()))
    );
    assert_eq!(record.get_int("Prisantydning"), Some(4_750_000));
    assert!(!record.contains_key("Mobil"));
    assert!(!record.contains_key("Man."));
}

#[tokio::test]
async fn test_scrape_from_saved_html_file() {
    // The --html-file flow: the listing comes from disk, only the
    // price lookup goes over the network port.
    let listing = listing_page(ADDRESS_BLOCK);
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(listing.as_bytes()).unwrap();

    let html = std::fs::read_to_string(file.path()).unwrap();
    let fetcher = StubFetcher::new("unused");
    let scraper = Scraper::new(fetcher);

    let record = scraper.scrape_ad(&html).await.unwrap();

    assert_eq!(record.get_int("Kvm/Omraade"), Some(85_000));
}
