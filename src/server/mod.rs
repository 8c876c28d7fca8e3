use crate::config::DEFAULT_CACHE_TTL_SECS;
use crate::core::fetch::HttpFetcher;
use crate::core::scrape::{ad_url, Scraper};
use crate::domain::ports::Fetcher;
use crate::utils::error::Result;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

struct CacheEntry {
    value: Value,
    expires_at: Instant,
}

/// Shared state for the HTTP endpoint: the scraper plus an in-memory
/// TTL cache of serialized records keyed by finnkode.
pub struct AppState<F: Fetcher> {
    scraper: Scraper<F>,
    cache: Mutex<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl<F: Fetcher> AppState<F> {
    pub fn new(scraper: Scraper<F>, ttl: Duration) -> Self {
        Self {
            scraper,
            cache: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    pub fn scraper(&self) -> &Scraper<F> {
        &self.scraper
    }

    async fn cache_get(&self, key: &str) -> Option<Value> {
        let mut cache = self.cache.lock().await;
        if let Some(entry) = cache.get(key) {
            if entry.expires_at > Instant::now() {
                return Some(entry.value.clone());
            }
            cache.remove(key);
        }
        None
    }

    async fn cache_put(&self, key: String, value: Value) {
        let mut cache = self.cache.lock().await;
        cache.insert(
            key,
            CacheEntry {
                value,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }
}

pub fn app<F: Fetcher + 'static>(state: Arc<AppState<F>>) -> Router {
    Router::new()
        .route("/", get(ad_detail::<F>))
        .route("/list", get(favorite_list::<F>))
        .with_state(state)
}

/// Bind and run the endpoint with the real HTTP fetcher.
pub async fn serve(bind: &str, cache_ttl_secs: u64) -> Result<()> {
    let scraper = Scraper::new(HttpFetcher::new()?);
    let state = Arc::new(AppState::new(
        scraper,
        Duration::from_secs(if cache_ttl_secs == 0 {
            DEFAULT_CACHE_TTL_SECS
        } else {
            cache_ttl_secs
        }),
    ));

    let listener = tokio::net::TcpListener::bind(bind).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}

#[derive(Deserialize)]
struct AdParams {
    finnkode: Option<String>,
}

async fn ad_detail<F: Fetcher + 'static>(
    State(state): State<Arc<AppState<F>>>,
    Query(params): Query<AdParams>,
) -> (StatusCode, Json<Value>) {
    let Some(finnkode) = params
        .finnkode
        .filter(|code| !code.is_empty() && code.chars().all(|c| c.is_ascii_digit()))
    else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Missing or invalid param finnkode. Try /?finnkode=KODE"})),
        );
    };

    let cache_key = format!("finn-ad-v1:{}", finnkode);
    if let Some(hit) = state.cache_get(&cache_key).await {
        tracing::debug!("Cache hit for {}", cache_key);
        return (StatusCode::OK, Json(json!({ "ad": hit })));
    }

    let record = match state.scraper.scrape_ad_by_code(&finnkode).await {
        Ok(record) => record,
        Err(e) => {
            tracing::error!("Scrape failed for finnkode {}: {}", finnkode, e);
            return (
                StatusCode::BAD_GATEWAY,
                Json(json!({"error": e.to_string()})),
            );
        }
    };

    let mut ad = match serde_json::to_value(&record) {
        Ok(Value::Object(fields)) => fields,
        _ => serde_json::Map::new(),
    };
    ad.insert("url".to_string(), Value::String(ad_url(&finnkode)));
    let ad = Value::Object(ad);

    state.cache_put(cache_key, ad.clone()).await;
    (StatusCode::OK, Json(json!({ "ad": ad })))
}

#[derive(Deserialize)]
struct ListParams {
    listid: Option<String>,
}

async fn favorite_list<F: Fetcher + 'static>(
    State(state): State<Arc<AppState<F>>>,
    Query(params): Query<ListParams>,
) -> (StatusCode, Json<Value>) {
    let Some(listid) = params.listid else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Missing param listid. Try /list?listid=ID"})),
        );
    };

    match state.scraper.scrape_list(&listid).await {
        Ok(urls) => (StatusCode::OK, Json(json!(urls))),
        Err(e) => {
            tracing::error!("List scrape failed for {}: {}", listid, e);
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({"error": e.to_string()})),
            )
        }
    }
}
