use crate::core::normalize::element_text;
use crate::domain::ports::Fetcher;
use crate::utils::error::{Result, ScrapeError};
use scraper::{ElementRef, Html, Selector};

pub fn price_stats_url(postal_code: &str) -> String {
    format!(
        "https://www.krogsveen.no/prisstatistikk?zipCode={}",
        postal_code
    )
}

/// Look up the average price per square meter for a postal code.
///
/// No postal code means no lookup and a 0 figure, which is a
/// legitimate state. With a postal code present, a price page that
/// does not carry the expected markup is a hard error rather than a
/// silent 0.
pub async fn resolve_area_price<F: Fetcher>(
    fetcher: &F,
    postal_code: Option<&str>,
) -> Result<i64> {
    let Some(code) = postal_code else {
        return Ok(0);
    };

    tracing::debug!("Resolving area price for postal code {}", code);
    let body = fetcher.fetch(&price_stats_url(code)).await?;
    let document = Html::parse_document(&body);
    parse_area_price(&document, code)
}

/// Find the container labeled "Kvadratmeterpris" and read the figure
/// from the first heading in its nearest ancestor div.
pub fn parse_area_price(document: &Html, postal_code: &str) -> Result<i64> {
    let div_sel = Selector::parse("div").unwrap();
    let heading_sel = Selector::parse("h1").unwrap();

    let label = document
        .select(&div_sel)
        .find(|el| element_text(el) == "Kvadratmeterpris")
        .ok_or_else(|| ScrapeError::PriceIndexError {
            postal_code: postal_code.to_string(),
            message: "no element labeled Kvadratmeterpris".to_string(),
        })?;

    let container = std::iter::successors(label.parent(), |node| node.parent())
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "div")
        .ok_or_else(|| ScrapeError::PriceIndexError {
            postal_code: postal_code.to_string(),
            message: "label has no enclosing div".to_string(),
        })?;

    let heading = container
        .select(&heading_sel)
        .next()
        .ok_or_else(|| ScrapeError::PriceIndexError {
            postal_code: postal_code.to_string(),
            message: "no heading next to the label".to_string(),
        })?;

    let text = element_text(&heading).replace(' ', "");
    text.parse::<i64>()
        .map_err(|_| ScrapeError::PriceIndexError {
            postal_code: postal_code.to_string(),
            message: format!("heading {:?} is not a number", text),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StubFetcher {
        body: String,
    }

    #[async_trait]
    impl Fetcher for StubFetcher {
        async fn fetch(&self, _url: &str) -> Result<String> {
            Ok(self.body.clone())
        }
    }

    const PRICE_PAGE: &str = "<html><body>\
        <div class=\"stats\">\
          <div class=\"card\">\
            <div>Kvadratmeterpris</div>\
            <h1>85 000</h1>\
          </div>\
        </div>\
        </body></html>";

    #[test]
    fn test_parse_area_price() {
        let html = Html::parse_document(PRICE_PAGE);
        assert_eq!(parse_area_price(&html, "0170").unwrap(), 85_000);
    }

    #[test]
    fn test_missing_label_is_error() {
        let html = Html::parse_document("<html><body><div>Pristall</div></body></html>");
        let err = parse_area_price(&html, "0170").unwrap_err();
        assert!(matches!(
            err,
            ScrapeError::PriceIndexError { ref postal_code, .. } if postal_code == "0170"
        ));
    }

    #[test]
    fn test_missing_heading_is_error() {
        let html = Html::parse_document(
            "<html><body><div><div>Kvadratmeterpris</div><p>85 000</p></div></body></html>",
        );
        assert!(parse_area_price(&html, "0170").is_err());
    }

    #[test]
    fn test_non_numeric_heading_is_error() {
        let html = Html::parse_document(
            "<html><body><div><div>Kvadratmeterpris</div><h1>ukjent</h1></div></body></html>",
        );
        assert!(parse_area_price(&html, "0170").is_err());
    }

    #[tokio::test]
    async fn test_no_postal_code_defaults_to_zero() {
        let fetcher = StubFetcher {
            body: String::new(),
        };
        assert_eq!(resolve_area_price(&fetcher, None).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_resolve_with_postal_code() {
        let fetcher = StubFetcher {
            body: PRICE_PAGE.to_string(),
        };
        assert_eq!(
            resolve_area_price(&fetcher, Some("0170")).await.unwrap(),
            85_000
        );
    }
}
