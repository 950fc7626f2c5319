//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::services::{CountryService, OccurrenceService, SpeciesService};
use crate::infrastructure::session::Session;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub occurrence_service: Arc<OccurrenceService>,
    pub species_service: Arc<SpeciesService>,
    pub country_service: Arc<CountryService>,
    pub session: Arc<Session>,
}

impl AppState {
    pub fn new(
        occurrence_service: Arc<OccurrenceService>,
        species_service: Arc<SpeciesService>,
        country_service: Arc<CountryService>,
        session: Arc<Session>,
    ) -> Self {
        Self {
            occurrence_service,
            species_service,
            country_service,
            session,
        }
    }
}
