//! Occurrence source trait

use async_trait::async_trait;

use super::query::OccurrenceRequest;
use super::record::OccurrencePage;
use crate::domain::DomainError;

/// Paged access to occurrence records
#[async_trait]
pub trait OccurrenceSource: Send + Sync + std::fmt::Debug {
    /// Fetches one window of records starting at `offset`
    async fn fetch_page(
        &self,
        request: &OccurrenceRequest,
        limit: u32,
        offset: u64,
    ) -> Result<OccurrencePage, DomainError>;
}
