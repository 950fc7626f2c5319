//! Country directory API types

use serde::{Deserialize, Serialize};

use crate::domain::Country;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CountrySuggestParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CountriesResponse {
    pub countries: Vec<Country>,
    /// The directory could not be loaded; country input still works by code
    pub degraded: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReloadResponse {
    pub loaded: usize,
}
