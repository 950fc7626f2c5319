//! Country directory entities

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Maximum number of country suggestions returned
pub const MAX_COUNTRY_SUGGESTIONS: usize = 10;

/// A country with its ISO 3166-1 alpha-2 code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
}

impl Country {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// `needle` must already be upper-cased
    fn matches(&self, needle: &str) -> bool {
        self.code.to_uppercase().contains(needle) || self.name.to_uppercase().contains(needle)
    }
}

/// Sorts countries by common name
pub fn sort_by_name(countries: &mut [Country]) {
    countries.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// Countries whose code or name contains the query, case-insensitively
pub fn filter_countries<'a>(countries: &'a [Country], query: &str) -> Vec<&'a Country> {
    let needle = query.trim().to_uppercase();

    if needle.is_empty() {
        return Vec::new();
    }

    countries
        .iter()
        .filter(|c| c.matches(&needle))
        .take(MAX_COUNTRY_SUGGESTIONS)
        .collect()
}

/// Source of the full country list
#[async_trait]
pub trait CountrySource: Send + Sync + std::fmt::Debug {
    async fn list_countries(&self) -> Result<Vec<Country>, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug)]
    pub struct MockCountrySource {
        countries: Vec<Country>,
        failures_left: Mutex<usize>,
    }

    impl MockCountrySource {
        pub fn new(countries: Vec<Country>) -> Self {
            Self {
                countries,
                failures_left: Mutex::new(0),
            }
        }

        /// Fails the first `n` calls
        pub fn failing_first(self, n: usize) -> Self {
            *self.failures_left.lock().unwrap() = n;
            self
        }
    }

    #[async_trait]
    impl CountrySource for MockCountrySource {
        async fn list_countries(&self) -> Result<Vec<Country>, DomainError> {
            let mut failures = self.failures_left.lock().unwrap();

            if *failures > 0 {
                *failures -= 1;
                return Err(DomainError::upstream_status("mock", 503, "HTTP 503"));
            }

            Ok(self.countries.clone())
        }
    }
}
