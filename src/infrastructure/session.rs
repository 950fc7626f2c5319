//! Session-scoped state: the latest search outcome and the detail cache

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::{Cache, DomainError, SearchOutcome};

/// State shared by every request of one explorer session
#[derive(Debug)]
pub struct Session {
    generation: AtomicU64,
    latest: RwLock<Option<Arc<SearchOutcome>>>,
    detail_cache: Arc<dyn Cache>,
}

impl Session {
    pub fn new(detail_cache: Arc<dyn Cache>) -> Self {
        Self {
            generation: AtomicU64::new(0),
            latest: RwLock::new(None),
            detail_cache,
        }
    }

    /// Reserves the id for a new search; ids start at 1
    pub fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Stores `outcome` unless an outcome from a newer search is already held.
    ///
    /// Returns whether the outcome became the latest one.
    pub async fn store_if_newer(&self, outcome: Arc<SearchOutcome>) -> bool {
        let mut latest = self.latest.write().await;

        if let Some(current) = latest.as_ref() {
            if current.generation() > outcome.generation() {
                debug!(
                    stale = outcome.generation(),
                    current = current.generation(),
                    "Discarding stale search outcome"
                );
                return false;
            }
        }

        *latest = Some(outcome);
        true
    }

    pub async fn latest(&self) -> Option<Arc<SearchOutcome>> {
        self.latest.read().await.clone()
    }

    pub fn detail_cache(&self) -> &Arc<dyn Cache> {
        &self.detail_cache
    }

    /// Forgets the last search and every cached detail panel
    pub async fn reset(&self) -> Result<(), DomainError> {
        self.latest.write().await.take();
        self.detail_cache.clear().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::occurrence::{mock_record, Aggregation};
    use crate::domain::{CacheExt, SearchQuery};
    use crate::infrastructure::cache::InMemoryCache;

    fn session() -> Session {
        Session::new(Arc::new(InMemoryCache::new()))
    }

    fn outcome(generation: u64, species: &str) -> Arc<SearchOutcome> {
        let aggregation = Aggregation {
            records: vec![mock_record(species)],
            pages_fetched: 1,
            total_available: Some(1),
        };
        let query = SearchQuery::parse(species, None, None).unwrap();
        Arc::new(SearchOutcome::new(generation, query, aggregation))
    }

    #[test]
    fn test_generations_increase() {
        let session = session();

        assert_eq!(session.next_generation(), 1);
        assert_eq!(session.next_generation(), 2);
        assert_eq!(session.next_generation(), 3);
    }

    #[tokio::test]
    async fn test_stale_outcome_does_not_overwrite() {
        let session = session();
        let older = session.next_generation();
        let newer = session.next_generation();

        assert!(session.store_if_newer(outcome(newer, "Ursus arctos")).await);
        assert!(!session.store_if_newer(outcome(older, "Panthera leo")).await);

        let latest = session.latest().await.unwrap();
        assert_eq!(latest.generation(), newer);
        assert_eq!(latest.query().species(), "Ursus arctos");
    }

    #[tokio::test]
    async fn test_newer_outcome_replaces_older() {
        let session = session();

        assert!(session.store_if_newer(outcome(1, "Panthera leo")).await);
        assert!(session.store_if_newer(outcome(2, "Ursus arctos")).await);

        assert_eq!(session.latest().await.unwrap().generation(), 2);
    }

    #[tokio::test]
    async fn test_reset_clears_outcome_and_cache() {
        let session = session();
        session.store_if_newer(outcome(1, "Panthera leo")).await;
        session
            .detail_cache()
            .set("detail:Panthera leo", &"cached")
            .await
            .unwrap();

        session.reset().await.unwrap();

        assert!(session.latest().await.is_none());
        assert_eq!(session.detail_cache().size().await.unwrap(), 0);
    }
}
