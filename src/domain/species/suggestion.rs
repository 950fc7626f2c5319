//! Species-name autocomplete

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// One autocomplete candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesSuggestion {
    pub scientific_name: String,
}

/// Source of species-name suggestions
#[async_trait]
pub trait SuggestionSource: Send + Sync + std::fmt::Debug {
    async fn suggest(&self, query: &str, limit: u32)
    -> Result<Vec<SpeciesSuggestion>, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    pub struct MockSuggestionSource {
        names: Vec<String>,
        error: Option<String>,
        queries: Mutex<Vec<String>>,
    }

    impl MockSuggestionSource {
        pub fn new(names: &[&str]) -> Self {
            Self {
                names: names.iter().map(|n| n.to_string()).collect(),
                ..Default::default()
            }
        }

        pub fn failing(message: impl Into<String>) -> Self {
            Self {
                error: Some(message.into()),
                ..Default::default()
            }
        }

        pub fn queries(&self) -> Vec<String> {
            self.queries.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SuggestionSource for MockSuggestionSource {
        async fn suggest(
            &self,
            query: &str,
            limit: u32,
        ) -> Result<Vec<SpeciesSuggestion>, DomainError> {
            self.queries.lock().unwrap().push(query.to_string());

            if let Some(error) = &self.error {
                return Err(DomainError::upstream("mock", error.clone()));
            }

            Ok(self
                .names
                .iter()
                .filter(|n| n.to_lowercase().starts_with(&query.to_lowercase()))
                .take(limit as usize)
                .map(|n| SpeciesSuggestion {
                    scientific_name: n.clone(),
                })
                .collect())
        }
    }
}
