// src/services/catalog.rs

//! Catalog search client.
//!
//! Issues the single search request of a run and parses the result set.

use reqwest::Client;
use url::Url;

use crate::error::Result;
use crate::models::{ApiConfig, ResultCount, SourceRecord, parse_search_response};

/// Query parameter carrying the contributing organization facet.
pub const ORGANIZATION_FACET: &str = "facets[contributing_organization_name_s][]";

/// Result of one search request.
#[derive(Debug, Clone)]
pub struct FetchedItems {
    /// Response body exactly as received
    pub raw: Vec<u8>,

    /// Parsed records, in the order the API returned them
    pub records: Vec<SourceRecord>,
}

/// Client for the catalog search endpoint.
pub struct CatalogClient {
    client: Client,
    api: ApiConfig,
}

impl CatalogClient {
    pub fn new(client: Client, api: ApiConfig) -> Self {
        Self { client, api }
    }

    /// Build the search URL for `rows` results, newest additions first.
    pub fn search_url(&self, rows: ResultCount) -> Result<Url> {
        let mut url = Url::parse(&self.api.endpoint)?;
        url.query_pairs_mut()
            .append_pair(ORGANIZATION_FACET, &self.api.organization)
            .append_pair("q", &self.api.query)
            .append_pair("rows", &rows.to_string())
            .append_pair("sort", &self.api.sort);
        Ok(url)
    }

    /// Perform the search. Any transport failure, non-success status or
    /// unparseable body is returned as an error; nothing is retried.
    pub async fn fetch(&self, rows: ResultCount) -> Result<FetchedItems> {
        let url = self.search_url(rows)?;
        log::info!("Requesting {} items from {}", rows, self.api.endpoint);
        log::debug!("Search URL: {}", url);

        let response = self.client.get(url).send().await?.error_for_status()?;
        let raw = response.bytes().await?.to_vec();
        let records = parse_records(&raw, rows)?;

        log::info!("Fetched {} items", records.len());
        Ok(FetchedItems { raw, records })
    }
}

/// Parse a search response body, keeping at most `rows` records.
pub fn parse_records(body: &[u8], rows: ResultCount) -> Result<Vec<SourceRecord>> {
    let mut records = parse_search_response(body)?;
    if records.len() > rows.as_usize() {
        log::warn!(
            "Search returned {} items, more than the {} requested; keeping the first {}",
            records.len(),
            rows,
            rows
        );
        records.truncate(rows.as_usize());
    }
    Ok(records)
}
