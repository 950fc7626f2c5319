//! Species domain: autocomplete, encyclopedia summaries and the browse catalog

mod catalog;
mod suggestion;
mod summary;

pub use catalog::{CatalogCategory, CommonSpecies};
pub use suggestion::{SpeciesSuggestion, SuggestionSource};
pub use summary::{
    article_title, ContentUrls, DetailContent, PageSummary, PageUrl, SummaryLookup, SummarySource,
    Thumbnail, NO_IMAGE_URL, STANDARD_SUMMARY,
};

#[cfg(test)]
pub use suggestion::mock::MockSuggestionSource;
#[cfg(test)]
pub use summary::mock::{standard_summary, MockSummarySource};
