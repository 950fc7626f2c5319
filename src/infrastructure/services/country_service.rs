//! Country directory service

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::domain::country::{filter_countries, sort_by_name};
use crate::domain::{Country, CountrySource, DomainError};

/// Country list fetched once and kept for the life of the process
#[derive(Debug)]
pub struct CountryService {
    source: Arc<dyn CountrySource>,
    countries: RwLock<Vec<Country>>,
}

impl CountryService {
    pub fn new(source: Arc<dyn CountrySource>) -> Self {
        Self {
            source,
            countries: RwLock::new(Vec::new()),
        }
    }

    /// Fetches and stores the directory, returning how many countries it holds
    pub async fn reload(&self) -> Result<usize, DomainError> {
        let mut countries = self.source.list_countries().await?;
        sort_by_name(&mut countries);

        let count = countries.len();
        *self.countries.write().await = countries;

        info!(count, "Country directory loaded");
        Ok(count)
    }

    /// Startup load: a failure leaves the directory empty and is only logged
    pub async fn load(&self) {
        if let Err(e) = self.reload().await {
            warn!(error = %e, "Failed to load countries; country suggestions disabled");
        }
    }

    pub async fn list(&self) -> Vec<Country> {
        self.countries.read().await.clone()
    }

    pub async fn is_loaded(&self) -> bool {
        !self.countries.read().await.is_empty()
    }

    /// At most ten countries whose code or name contains `query`
    pub async fn suggest(&self, query: &str) -> Vec<Country> {
        let countries = self.countries.read().await;
        filter_countries(&countries, query)
            .into_iter()
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::country::mock::MockCountrySource;

    fn source() -> MockCountrySource {
        MockCountrySource::new(vec![
            Country::new("US", "United States"),
            Country::new("KE", "Kenya"),
            Country::new("GB", "United Kingdom"),
            Country::new("FR", "France"),
        ])
    }

    #[tokio::test]
    async fn test_load_sorts_by_name() {
        let service = CountryService::new(Arc::new(source()));

        service.load().await;

        let names: Vec<String> = service.list().await.into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["France", "Kenya", "United Kingdom", "United States"]);
    }

    #[tokio::test]
    async fn test_failed_load_leaves_directory_empty() {
        let service = CountryService::new(Arc::new(source().failing_first(1)));

        service.load().await;

        assert!(!service.is_loaded().await);
        assert!(service.suggest("ke").await.is_empty());
    }

    #[tokio::test]
    async fn test_reload_recovers_after_failure() {
        let service = CountryService::new(Arc::new(source().failing_first(1)));

        service.load().await;
        assert_eq!(service.reload().await.unwrap(), 4);
        assert!(service.is_loaded().await);
    }

    #[tokio::test]
    async fn test_suggest_matches_code_or_name() {
        let service = CountryService::new(Arc::new(source()));
        service.load().await;

        let by_name: Vec<String> = service
            .suggest("united")
            .await
            .into_iter()
            .map(|c| c.code)
            .collect();
        assert_eq!(by_name, vec!["GB", "US"]);

        let by_code = service.suggest(" ke ").await;
        assert_eq!(by_code, vec![Country::new("KE", "Kenya")]);

        assert!(service.suggest("   ").await.is_empty());
    }
}
