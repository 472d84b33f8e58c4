//! # Catalog Module
//!
//! Client for the TMDB `discover/movie` endpoint. A request asks for one page of
//! movies in a given original language, sorted by popularity, with adult titles
//! excluded. Results come back in server order and are never re-sorted here.

use std::future::Future;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, info};

use crate::catalog_errors::CatalogError;
use crate::config::CatalogConfig;

/// Sort order sent with every discover request
pub const SORT_BY_POPULARITY: &str = "popularity.desc";

/// Raw movie (or TV) record as returned by the catalog API
///
/// Only the fields the bot displays are decoded; everything else in the
/// payload is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CatalogItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl CatalogItem {
    /// Movie title, falling back to the TV-style `name`
    pub fn display_title(&self) -> &str {
        non_empty(&self.title)
            .or_else(|| non_empty(&self.name))
            .unwrap_or_default()
    }

    /// Release date, falling back to the first air date
    pub fn display_date(&self) -> Option<&str> {
        non_empty(&self.release_date).or_else(|| non_empty(&self.first_air_date))
    }

    /// Poster path, if the item has one that can be rendered
    pub fn poster(&self) -> Option<&str> {
        non_empty(&self.poster_path)
    }
}

#[derive(Debug, Deserialize)]
struct DiscoverResponse {
    #[serde(default)]
    results: Vec<CatalogItem>,
}

/// One user selection turned into a catalog request
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRequest {
    /// ISO 639-1 code matched against `original_language`
    pub language_code: String,
    /// 1-based result page
    pub page: u32,
    /// Maximum number of movies to present
    pub count: usize,
}

impl CatalogRequest {
    pub fn new(language_code: impl Into<String>, page: u32, count: usize) -> Self {
        Self {
            language_code: language_code.into(),
            page: page.max(1),
            count,
        }
    }
}

/// Source of catalog items
///
/// Implemented by [`TmdbClient`]; tests substitute in-memory sources.
pub trait CatalogSource {
    fn discover(
        &self,
        request: &CatalogRequest,
    ) -> impl Future<Output = Result<Vec<CatalogItem>, CatalogError>> + Send;
}

/// HTTP client for the TMDB v3 API
#[derive(Debug, Clone)]
pub struct TmdbClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl TmdbClient {
    /// Create a client with the timeout and base URL from `config`
    pub fn new(api_key: impl Into<String>, config: &CatalogConfig) -> Result<Self, CatalogError> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(CatalogError::from)?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn discover_url(&self) -> String {
        format!("{}/discover/movie", self.base_url)
    }
}

impl CatalogSource for TmdbClient {
    async fn discover(&self, request: &CatalogRequest) -> Result<Vec<CatalogItem>, CatalogError> {
        let page = request.page.max(1).to_string();
        debug!(
            language = %request.language_code,
            page = %page,
            "Querying catalog discover endpoint"
        );

        let response = self
            .http
            .get(self.discover_url())
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("with_original_language", request.language_code.as_str()),
                ("sort_by", SORT_BY_POPULARITY),
                ("include_adult", "false"),
                ("page", page.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                status = status.as_u16(),
                body = %body,
                "Catalog API returned a non-success status"
            );
            return Err(CatalogError::upstream_status(status.as_u16(), body));
        }

        let body = response.text().await?;
        let parsed: DiscoverResponse = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "Catalog API returned an undecodable body");
            CatalogError::upstream_transport(format!("Invalid catalog response: {e}"))
        })?;

        info!(
            language = %request.language_code,
            results = parsed.results.len(),
            "Catalog query completed"
        );

        Ok(parsed.results)
    }
}
