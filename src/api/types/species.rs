//! Species API types

use serde::{Deserialize, Serialize};

use crate::domain::{CatalogCategory, CommonSpecies};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuggestParams {
    #[serde(default)]
    pub q: String,
}

/// One browsing category with its species
#[derive(Debug, Clone, Serialize)]
pub struct CatalogCategoryResponse {
    pub slug: &'static str,
    pub label: &'static str,
    pub species: &'static [CommonSpecies],
}

impl From<CatalogCategory> for CatalogCategoryResponse {
    fn from(category: CatalogCategory) -> Self {
        Self {
            slug: category.slug(),
            label: category.label(),
            species: category.species(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse {
    pub categories: Vec<CatalogCategoryResponse>,
}

impl CatalogResponse {
    pub fn all() -> Self {
        Self {
            categories: CatalogCategory::ALL.into_iter().map(Into::into).collect(),
        }
    }
}
