use crate::utils::error::{Result, ScrapeError};
use chrono::{Duration, NaiveDateTime};
use scraper::{Html, Selector};
use std::collections::BTreeSet;

const ICAL_FROM_PARAM: &str = "iCalendarFrom";

/// Fixed offset applied to the UTC timestamps in the calendar links.
/// Hard-coded to Oslo summer time; winter viewings come out one hour
/// late. Known limitation carried over from the original behavior.
const OSLO_SUMMER_OFFSET_HOURS: i64 = 2;

/// Reconstruct the viewing schedule from the calendar-export links.
/// Returns formatted "DD/MM/YYYY HH:MM" slots, deduplicated and sorted
/// ascending by the underlying date-time.
///
/// Links without an `iCalendarFrom` parameter are skipped; a link that
/// has one we cannot parse fails the whole document.
pub fn extract_viewings(document: &Html) -> Result<Vec<String>> {
    let anchor_sel = Selector::parse(r#"a[href*=".ics"]"#).unwrap();

    let mut slots: BTreeSet<NaiveDateTime> = BTreeSet::new();
    for anchor in document.select(&anchor_sel) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let Some((_, query)) = href.split_once('?') else {
            continue;
        };
        let Some(raw) = url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == ICAL_FROM_PARAM)
            .map(|(_, value)| value.into_owned())
        else {
            continue;
        };

        // Drop the trailing UTC "Z" designator.
        let mut chars = raw.chars();
        chars.next_back();
        let trimmed = chars.as_str();
        let dt = NaiveDateTime::parse_from_str(trimmed, "%Y%m%dT%H%M%S").map_err(|source| {
            ScrapeError::ViewingTimestampError {
                value: raw.clone(),
                source,
            }
        })?;

        slots.insert(dt + Duration::hours(OSLO_SUMMER_OFFSET_HOURS));
    }

    Ok(slots
        .into_iter()
        .map(|dt| dt.format("%d/%m/%Y %H:%M").to_string())
        .collect())
}
