//! Occurrence search service - runs paged searches and tracks the latest result

use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use crate::domain::occurrence::CountryCount;
use crate::domain::{
    DomainError, OccurrenceSource, PaginationAggregator, SearchOutcome, SearchQuery,
};
use crate::infrastructure::observability::record_search;
use crate::infrastructure::session::Session;

/// Occurrence search service
#[derive(Debug)]
pub struct OccurrenceService {
    source: Arc<dyn OccurrenceSource>,
    aggregator: PaginationAggregator,
    session: Arc<Session>,
}

impl OccurrenceService {
    pub fn new(
        source: Arc<dyn OccurrenceSource>,
        aggregator: PaginationAggregator,
        session: Arc<Session>,
    ) -> Self {
        Self {
            source,
            aggregator,
            session,
        }
    }

    /// Fetches every page for `query` and records the outcome in the session.
    ///
    /// A stale outcome is still returned to the caller but never replaces a
    /// newer one. Any failed page fails the search.
    pub async fn search(&self, query: SearchQuery) -> Result<Arc<SearchOutcome>, DomainError> {
        let generation = self.session.next_generation();
        let start = Instant::now();

        info!(
            generation,
            species = %query.species(),
            country = ?query.country(),
            years = ?query.years().map(|y| y.as_param()),
            "Starting occurrence search"
        );

        let aggregation = match self
            .aggregator
            .aggregate(self.source.as_ref(), &query.to_request())
            .await
        {
            Ok(aggregation) => aggregation,
            Err(e) => {
                warn!(generation, error = %e, "Occurrence search failed");
                record_search("failed", 0, 0);
                return Err(e);
            }
        };

        let outcome = Arc::new(SearchOutcome::new(generation, query, aggregation));
        let label = if outcome.is_empty() { "empty" } else { "found" };
        record_search(label, outcome.records().len(), outcome.pages_fetched());

        let stored = self.session.store_if_newer(outcome.clone()).await;

        info!(
            generation,
            records = outcome.records().len(),
            pages = outcome.pages_fetched(),
            total = ?outcome.total_available(),
            stored,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Occurrence search completed"
        );

        Ok(outcome)
    }

    /// Country tally of the most recent search
    pub async fn last_tally(&self) -> Result<Vec<CountryCount>, DomainError> {
        self.session
            .latest()
            .await
            .map(|outcome| outcome.country_tally())
            .ok_or_else(|| DomainError::not_found("Please perform a species search first"))
    }

    pub async fn latest(&self) -> Option<Arc<SearchOutcome>> {
        self.session.latest().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::occurrence::{mock_record, MockOccurrenceSource, OccurrenceRecord};
    use crate::domain::PaginationConfig;
    use crate::infrastructure::cache::InMemoryCache;

    fn service(source: MockOccurrenceSource) -> (OccurrenceService, Arc<Session>) {
        let session = Arc::new(Session::new(Arc::new(InMemoryCache::new())));
        let aggregator = PaginationAggregator::new(PaginationConfig::new(300, 1200).unwrap());
        (
            OccurrenceService::new(Arc::new(source), aggregator, session.clone()),
            session,
        )
    }

    fn located(name: &str, country: &str) -> OccurrenceRecord {
        OccurrenceRecord {
            country: Some(country.to_string()),
            ..mock_record(name)
        }
    }

    fn query(species: &str) -> SearchQuery {
        SearchQuery::parse(species, None, None).unwrap()
    }

    #[tokio::test]
    async fn test_search_stores_outcome() {
        let (service, session) = service(MockOccurrenceSource::with_generated(450));

        let outcome = service.search(query("Panthera leo")).await.unwrap();

        assert_eq!(outcome.records().len(), 450);
        assert_eq!(outcome.pages_fetched(), 2);
        assert_eq!(session.latest().await.unwrap().generation(), outcome.generation());
    }

    #[tokio::test]
    async fn test_empty_search_is_not_an_error() {
        let (service, _) = service(MockOccurrenceSource::new(vec![]));

        let outcome = service.search(query("Nonexistus")).await.unwrap();

        assert!(outcome.is_empty());
    }

    #[tokio::test]
    async fn test_failed_search_stores_nothing() {
        let (service, session) = service(MockOccurrenceSource::with_generated(600).failing_at(300));

        let err = service.search(query("Panthera leo")).await.unwrap_err();

        assert_eq!(err.upstream_status_code(), Some(500));
        assert!(session.latest().await.is_none());
    }

    #[tokio::test]
    async fn test_last_tally_requires_search() {
        let (service, _) = service(MockOccurrenceSource::new(vec![]));

        let err = service.last_tally().await.unwrap_err();

        assert!(matches!(err, DomainError::NotFound { .. }));
        assert!(err.to_string().contains("Please perform a species search first"));
    }

    #[tokio::test]
    async fn test_last_tally_counts_countries() {
        let records = vec![
            located("Panthera leo", "Kenya"),
            located("Panthera leo", "Tanzania"),
            located("Panthera leo", "Kenya"),
            mock_record("Panthera leo"),
        ];
        let (service, _) = service(MockOccurrenceSource::new(records));

        service.search(query("Panthera leo")).await.unwrap();
        let tally = service.last_tally().await.unwrap();

        assert_eq!(
            tally,
            vec![
                CountryCount {
                    country: "Kenya".to_string(),
                    count: 2
                },
                CountryCount {
                    country: "Tanzania".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_generations_advance_per_search() {
        let (service, _) = service(MockOccurrenceSource::with_generated(3));

        let first = service.search(query("Panthera leo")).await.unwrap();
        let second = service.search(query("Panthera leo")).await.unwrap();

        assert!(second.generation() > first.generation());
        assert_eq!(service.latest().await.unwrap().generation(), second.generation());
    }
}
