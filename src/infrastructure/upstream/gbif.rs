use async_trait::async_trait;
use serde::Deserialize;

use super::http_client::HttpClientTrait;
use crate::domain::{
    DomainError, OccurrencePage, OccurrenceRequest, OccurrenceSource, SpeciesSuggestion,
    SuggestionSource,
};

pub const DEFAULT_GBIF_BASE_URL: &str = "https://api.gbif.org/v1";

const SERVICE: &str = "gbif";

/// GBIF occurrence search and species suggestion API
#[derive(Debug)]
pub struct GbifClient<C: HttpClientTrait> {
    client: C,
    base_url: String,
}

impl<C: HttpClientTrait> GbifClient<C> {
    pub fn new(client: C) -> Self {
        Self::with_base_url(client, DEFAULT_GBIF_BASE_URL)
    }

    pub fn with_base_url(client: C, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn occurrence_search_url(&self) -> String {
        format!("{}/occurrence/search", self.base_url)
    }

    fn species_suggest_url(&self) -> String {
        format!("{}/species/suggest", self.base_url)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GbifSuggestion {
    #[serde(default)]
    scientific_name: Option<String>,
}

#[async_trait]
impl<C: HttpClientTrait> OccurrenceSource for GbifClient<C> {
    async fn fetch_page(
        &self,
        request: &OccurrenceRequest,
        limit: u32,
        offset: u64,
    ) -> Result<OccurrencePage, DomainError> {
        let json = self
            .client
            .get_json(&self.occurrence_search_url(), &request.page_params(limit, offset))
            .await
            .map_err(|e| e.for_service(SERVICE))?;

        serde_json::from_value(json).map_err(|e| {
            DomainError::upstream(SERVICE, format!("Failed to decode occurrence page: {}", e))
        })
    }
}

#[async_trait]
impl<C: HttpClientTrait> SuggestionSource for GbifClient<C> {
    async fn suggest(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<SpeciesSuggestion>, DomainError> {
        let params = [("q", query.to_string()), ("limit", limit.to_string())];

        let json = self
            .client
            .get_json(&self.species_suggest_url(), &params)
            .await
            .map_err(|e| e.for_service(SERVICE))?;

        let raw: Vec<GbifSuggestion> = serde_json::from_value(json).map_err(|e| {
            DomainError::upstream(SERVICE, format!("Failed to decode suggestions: {}", e))
        })?;

        Ok(raw
            .into_iter()
            .filter_map(|s| s.scientific_name)
            .filter(|name| !name.is_empty())
            .map(|scientific_name| SpeciesSuggestion { scientific_name })
            .collect())
    }
}
