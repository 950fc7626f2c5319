//! Offset/limit pagination over the occurrence source

use tracing::debug;

use super::query::OccurrenceRequest;
use super::record::OccurrenceRecord;
use super::source::OccurrenceSource;
use crate::domain::DomainError;

pub const DEFAULT_PAGE_SIZE: u32 = 300;
pub const DEFAULT_MAX_RECORDS: u32 = 1200;

/// Page size and hard cap for one aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    page_size: u32,
    max_records: u32,
}

impl PaginationConfig {
    pub fn new(page_size: u32, max_records: u32) -> Result<Self, DomainError> {
        if page_size == 0 {
            return Err(DomainError::configuration("page_size must be greater than 0"));
        }

        Ok(Self {
            page_size,
            max_records,
        })
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn max_records(&self) -> u32 {
        self.max_records
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_records: DEFAULT_MAX_RECORDS,
        }
    }
}

/// Records accumulated across all pages of one search
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    pub records: Vec<OccurrenceRecord>,
    pub pages_fetched: u32,
    /// Total reported by the first page, if any
    pub total_available: Option<u64>,
}

/// Drives an [`OccurrenceSource`] page by page.
///
/// Paging stops when a page is empty, when the offset reaches the total
/// reported by the first page, or when it reaches the configured cap.
/// Any failed page aborts the whole aggregation.
#[derive(Debug, Clone, Default)]
pub struct PaginationAggregator {
    config: PaginationConfig,
}

impl PaginationAggregator {
    pub fn new(config: PaginationConfig) -> Self {
        Self { config }
    }

    pub async fn aggregate(
        &self,
        source: &dyn OccurrenceSource,
        request: &OccurrenceRequest,
    ) -> Result<Aggregation, DomainError> {
        let page_size = self.config.page_size;
        let cap = u64::from(self.config.max_records);

        let mut aggregation = Aggregation::default();
        let mut offset: u64 = 0;

        while offset < cap && aggregation.total_available.is_none_or(|total| offset < total) {
            let page = source.fetch_page(request, page_size, offset).await?;
            aggregation.pages_fetched += 1;

            if page.results.is_empty() {
                debug!(offset, "Empty page, stopping");
                break;
            }

            if offset == 0 {
                // A zero count leaves the total open, matching a missing one
                aggregation.total_available = page.count.filter(|count| *count > 0);
            }

            debug!(
                offset,
                received = page.results.len(),
                total = ?aggregation.total_available,
                "Fetched occurrence page"
            );

            aggregation.records.extend(page.results);
            offset += u64::from(page_size);
        }

        Ok(aggregation)
    }
}
