//! Live occurrence data from GBIF and iNaturalist.
//!
//! DESIGN
//! ======
//! `OccurrenceSource` hides the two upstream APIs behind infallible lookups:
//! any upstream failure is logged and degrades to an empty summary so the
//! bloom endpoints always answer. Successful lookups from both APIs are
//! memoised per scientific name in bounded LRU caches.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::config::OccurrenceConfig;

pub const GBIF_CACHE_CAPACITY: usize = 100;
pub const INATURALIST_CACHE_CAPACITY: usize = 100;
const GBIF_PAGE_LIMIT: u32 = 50;
const GBIF_MAX_LOCATIONS: usize = 20;
const GBIF_YEAR_RANGE: &str = "2020,2025";
const COUNTRY_CODE: &str = "SE";
/// iNaturalist place id for Sweden.
const INATURALIST_PLACE_ID: u32 = 7706;
const INATURALIST_PER_PAGE: u32 = 20;

#[derive(Debug, thiserror::Error)]
pub enum OccurrenceError {
    #[error("occurrence request failed: {0}")]
    Request(String),
    #[error("occurrence API returned status {0}")]
    Status(u16),
    #[error("occurrence response parse failed: {0}")]
    Parse(String),
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// SUMMARIES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
    pub date: Option<String>,
    pub locality: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GbifSummary {
    pub count: u64,
    pub locations: Vec<Location>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InatSummary {
    pub count: u64,
    pub recent_observations: usize,
}

/// Per-species occurrence lookups. Failures degrade to `Default`.
#[async_trait::async_trait]
pub trait OccurrenceSource: Send + Sync {
    async fn gbif(&self, scientific_name: &str) -> GbifSummary;
    async fn inaturalist(&self, scientific_name: &str) -> InatSummary;
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct OccurrenceClient {
    http: reqwest::Client,
    config: OccurrenceConfig,
    gbif_cache: MemoCache<GbifSummary>,
    inat_cache: MemoCache<InatSummary>,
}

impl OccurrenceClient {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: OccurrenceConfig) -> Result<Self, OccurrenceError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| OccurrenceError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            config,
            gbif_cache: MemoCache::new(GBIF_CACHE_CAPACITY),
            inat_cache: MemoCache::new(INATURALIST_CACHE_CAPACITY),
        })
    }

    async fn fetch_gbif(&self, scientific_name: &str) -> Result<GbifSummary, OccurrenceError> {
        let url = format!("{}/occurrence/search", self.config.gbif_base_url);
        let limit = GBIF_PAGE_LIMIT.to_string();
        let text = self
            .get_text(
                &url,
                &[
                    ("scientificName", scientific_name),
                    ("country", COUNTRY_CODE),
                    ("limit", limit.as_str()),
                    ("hasCoordinate", "true"),
                    ("year", GBIF_YEAR_RANGE),
                ],
            )
            .await?;
        parse_gbif(&text)
    }

    async fn fetch_inaturalist(&self, scientific_name: &str) -> Result<InatSummary, OccurrenceError> {
        let url = format!("{}/observations", self.config.inaturalist_base_url);
        let place_id = INATURALIST_PLACE_ID.to_string();
        let per_page = INATURALIST_PER_PAGE.to_string();
        let text = self
            .get_text(
                &url,
                &[
                    ("taxon_name", scientific_name),
                    ("place_id", place_id.as_str()),
                    ("quality_grade", "research"),
                    ("per_page", per_page.as_str()),
                ],
            )
            .await?;
        parse_inaturalist(&text)
    }

    async fn get_text(&self, url: &str, query: &[(&str, &str)]) -> Result<String, OccurrenceError> {
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| OccurrenceError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(OccurrenceError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| OccurrenceError::Request(e.to_string()))
    }
}

#[async_trait::async_trait]
impl OccurrenceSource for OccurrenceClient {
    async fn gbif(&self, scientific_name: &str) -> GbifSummary {
        if let Some(hit) = self.gbif_cache.get(scientific_name) {
            return hit;
        }
        match self.fetch_gbif(scientific_name).await {
            Ok(summary) => {
                self.gbif_cache.insert(scientific_name, summary.clone());
                summary
            }
            Err(e) => {
                tracing::warn!(error = %e, species = scientific_name, "gbif lookup failed");
                GbifSummary::default()
            }
        }
    }

    async fn inaturalist(&self, scientific_name: &str) -> InatSummary {
        if let Some(hit) = self.inat_cache.get(scientific_name) {
            return hit;
        }
        match self.fetch_inaturalist(scientific_name).await {
            Ok(summary) => {
                self.inat_cache.insert(scientific_name, summary);
                summary
            }
            Err(e) => {
                tracing::warn!(error = %e, species = scientific_name, "inaturalist lookup failed");
                InatSummary::default()
            }
        }
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Deserialize)]
struct GbifPage {
    #[serde(default)]
    count: u64,
    #[serde(default)]
    results: Vec<GbifOccurrence>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GbifOccurrence {
    decimal_latitude: Option<f64>,
    decimal_longitude: Option<f64>,
    event_date: Option<String>,
    locality: Option<String>,
}

#[derive(Deserialize)]
struct InatPage {
    #[serde(default)]
    total_results: u64,
    #[serde(default)]
    results: Vec<serde_json::Value>,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_gbif(json: &str) -> Result<GbifSummary, OccurrenceError> {
    let page: GbifPage = serde_json::from_str(json).map_err(|e| OccurrenceError::Parse(e.to_string()))?;

    let locations = page
        .results
        .into_iter()
        .take(GBIF_MAX_LOCATIONS)
        .filter_map(|occ| {
            let lat = occ.decimal_latitude.filter(|v| v.abs() > 0.0)?;
            let lon = occ.decimal_longitude.filter(|v| v.abs() > 0.0)?;
            Some(Location {
                lat,
                lon,
                date: occ.event_date,
                locality: occ.locality.unwrap_or_else(|| "Unknown".into()),
            })
        })
        .collect();

    Ok(GbifSummary { count: page.count, locations })
}

fn parse_inaturalist(json: &str) -> Result<InatSummary, OccurrenceError> {
    let page: InatPage = serde_json::from_str(json).map_err(|e| OccurrenceError::Parse(e.to_string()))?;
    Ok(InatSummary { count: page.total_results, recent_observations: page.results.len() })
}

// =============================================================================
// MEMO CACHE
// =============================================================================

/// Bounded string-keyed LRU cache. Evicts the least recently used key when full.
struct MemoCache<V> {
    capacity: usize,
    inner: Mutex<MemoInner<V>>,
}

struct MemoInner<V> {
    entries: HashMap<String, V>,
    /// Keys from least to most recently used.
    order: VecDeque<String>,
}

impl<V> MemoInner<V> {
    fn touch(&mut self, key: &str) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            if let Some(k) = self.order.remove(pos) {
                self.order.push_back(k);
            }
        }
    }
}

impl<V: Clone> MemoCache<V> {
    fn new(capacity: usize) -> Self {
        Self { capacity, inner: Mutex::new(MemoInner { entries: HashMap::new(), order: VecDeque::new() }) }
    }

    /// Look up `key` and mark it most recently used.
    fn get(&self, key: &str) -> Option<V> {
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let value = inner.entries.get(key).cloned()?;
        inner.touch(key);
        Some(value)
    }

    fn insert(&self, key: &str, value: V) {
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if inner.entries.insert(key.to_owned(), value).is_some() {
            inner.touch(key);
            return;
        }
        inner.order.push_back(key.to_owned());
        while inner.order.len() > self.capacity {
            if let Some(oldest) = inner.order.pop_front() {
                inner.entries.remove(&oldest);
            }
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .entries
            .len()
    }
}

#[cfg(test)]
#[path = "occurrence_test.rs"]
mod tests;
