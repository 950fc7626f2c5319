//! Species service - autocomplete and cached detail panels

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::SuggestionConfig;
use crate::domain::{
    CacheExt, DetailContent, SpeciesSuggestion, SuggestionSource, SummarySource,
};
use crate::infrastructure::debounce::Debouncer;
use crate::infrastructure::session::Session;

/// Autocomplete answer for one query
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SuggestionResult {
    pub suggestions: Vec<SpeciesSuggestion>,
    /// The upstream lookup failed and the list is empty
    pub degraded: bool,
    /// A newer query arrived during the debounce window
    pub superseded: bool,
}

/// Species service
#[derive(Debug)]
pub struct SpeciesService {
    suggestions: Arc<dyn SuggestionSource>,
    summaries: Arc<dyn SummarySource>,
    session: Arc<Session>,
    debouncer: Debouncer,
    limit: u32,
    min_query_len: usize,
}

impl SpeciesService {
    pub fn new(
        suggestions: Arc<dyn SuggestionSource>,
        summaries: Arc<dyn SummarySource>,
        session: Arc<Session>,
        config: &SuggestionConfig,
    ) -> Self {
        Self {
            suggestions,
            summaries,
            session,
            debouncer: Debouncer::new(config.debounce()),
            limit: config.limit,
            min_query_len: config.min_query_len,
        }
    }

    /// Debounced autocomplete. Upstream failures degrade to an empty list.
    pub async fn suggest(&self, raw_query: &str) -> SuggestionResult {
        let query = raw_query.trim();

        if query.chars().count() < self.min_query_len {
            return SuggestionResult::default();
        }

        if !self.debouncer.settle().await {
            debug!(query = %query, "Suggestion superseded by a newer query");
            return SuggestionResult {
                superseded: true,
                ..Default::default()
            };
        }

        match self.suggestions.suggest(query, self.limit).await {
            Ok(suggestions) => SuggestionResult {
                suggestions,
                ..Default::default()
            },
            Err(e) => {
                warn!(query = %query, error = %e, "Species suggestions unavailable");
                SuggestionResult {
                    degraded: true,
                    ..Default::default()
                }
            }
        }
    }

    /// Detail panel for a species name, served from the session cache when possible.
    ///
    /// Only answers from the summary API are cached; transport failures are not.
    pub async fn detail(&self, species: &str) -> DetailContent {
        let key = detail_key(species);
        let cache = self.session.detail_cache();

        match cache.get::<DetailContent>(&key).await {
            Ok(Some(content)) => {
                debug!(species = %species, "Detail cache hit");
                return content;
            }
            Ok(None) => {}
            Err(e) => warn!(species = %species, error = %e, "Detail cache read failed"),
        }

        match self.summaries.fetch_summary(species).await {
            Ok(lookup) => {
                let content = DetailContent::render(species, &lookup);

                if let Err(e) = cache.set(&key, &content).await {
                    warn!(species = %species, error = %e, "Failed to cache detail content");
                }

                content
            }
            Err(e) => {
                warn!(species = %species, error = %e, "Species summary lookup failed");
                DetailContent::lookup_failed(species)
            }
        }
    }
}

/// Cache key for a species name exactly as given
fn detail_key(species: &str) -> String {
    format!("detail:{}", species)
}
