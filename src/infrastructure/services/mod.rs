//! Infrastructure services

mod country_service;
mod occurrence_service;
mod species_service;

pub use country_service::CountryService;
pub use occurrence_service::OccurrenceService;
pub use species_service::{SpeciesService, SuggestionResult};
