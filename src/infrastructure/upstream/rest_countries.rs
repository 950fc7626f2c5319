use async_trait::async_trait;
use serde::Deserialize;

use super::http_client::HttpClientTrait;
use crate::domain::{Country, CountrySource, DomainError};

pub const DEFAULT_COUNTRIES_BASE_URL: &str = "https://restcountries.com/v3.1";

const SERVICE: &str = "restcountries";

/// REST Countries list API
#[derive(Debug)]
pub struct RestCountriesClient<C: HttpClientTrait> {
    client: C,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct RawCountry {
    #[serde(default)]
    cca2: Option<String>,
    #[serde(default)]
    name: Option<RawCountryName>,
}

#[derive(Debug, Deserialize)]
struct RawCountryName {
    #[serde(default)]
    common: Option<String>,
}

impl<C: HttpClientTrait> RestCountriesClient<C> {
    pub fn new(client: C) -> Self {
        Self::with_base_url(client, DEFAULT_COUNTRIES_BASE_URL)
    }

    pub fn with_base_url(client: C, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn all_url(&self) -> String {
        format!("{}/all", self.base_url)
    }
}

#[async_trait]
impl<C: HttpClientTrait> CountrySource for RestCountriesClient<C> {
    async fn list_countries(&self) -> Result<Vec<Country>, DomainError> {
        // Only the two fields in use; the full payload is several megabytes
        let params = [("fields", "cca2,name".to_string())];

        let json = self
            .client
            .get_json(&self.all_url(), &params)
            .await
            .map_err(|e| e.for_service(SERVICE))?;

        let raw: Vec<RawCountry> = serde_json::from_value(json).map_err(|e| {
            DomainError::upstream(SERVICE, format!("Failed to decode country list: {}", e))
        })?;

        Ok(raw
            .into_iter()
            .filter_map(|c| {
                let code = c.cca2.filter(|code| !code.is_empty())?;
                let name = c.name.and_then(|n| n.common).filter(|name| !name.is_empty())?;
                Some(Country::new(code, name))
            })
            .collect())
    }
}
