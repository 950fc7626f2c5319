use async_trait::async_trait;
use tracing::debug;

use super::http_client::HttpClientTrait;
use crate::domain::species::article_title;
use crate::domain::{DomainError, PageSummary, SummaryLookup, SummarySource};

pub const DEFAULT_WIKIPEDIA_BASE_URL: &str = "https://en.wikipedia.org/api/rest_v1";

const SERVICE: &str = "wikipedia";

/// Wikipedia REST page summary API
#[derive(Debug)]
pub struct WikipediaClient<C: HttpClientTrait> {
    client: C,
    base_url: String,
}

impl<C: HttpClientTrait> WikipediaClient<C> {
    pub fn new(client: C) -> Self {
        Self::with_base_url(client, DEFAULT_WIKIPEDIA_BASE_URL)
    }

    pub fn with_base_url(client: C, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// `{base}/page/summary/{title}` with the title percent-encoded as one segment
    fn summary_url(&self, species: &str) -> Result<String, DomainError> {
        let mut url = reqwest::Url::parse(&self.base_url).map_err(|e| {
            DomainError::configuration(format!("Invalid Wikipedia base URL: {}", e))
        })?;

        url.path_segments_mut()
            .map_err(|_| DomainError::configuration("Wikipedia base URL cannot have a path"))?
            .pop_if_empty()
            .extend(["page", "summary", &article_title(species)]);

        Ok(url.to_string())
    }
}

#[async_trait]
impl<C: HttpClientTrait> SummarySource for WikipediaClient<C> {
    async fn fetch_summary(&self, species: &str) -> Result<SummaryLookup, DomainError> {
        let url = self.summary_url(species)?;

        let json = match self.client.get_json(&url, &[]).await {
            Ok(json) => json,
            Err(e) => {
                return match e.upstream_status_code() {
                    Some(status) => {
                        debug!(species = %species, status, "No summary for species");
                        Ok(SummaryLookup::Missing)
                    }
                    None => Err(e.for_service(SERVICE)),
                };
            }
        };

        let summary: PageSummary = serde_json::from_value(json).map_err(|e| {
            DomainError::upstream(SERVICE, format!("Failed to decode page summary: {}", e))
        })?;

        Ok(SummaryLookup::Found(summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::upstream::http_client::mock::MockHttpClient;

    const LION_URL: &str = "https://en.wikipedia.org/api/rest_v1/page/summary/Panthera_leo";

    #[test]
    fn test_summary_url_encodes_title() {
        let wiki = WikipediaClient::new(MockHttpClient::new());

        assert_eq!(wiki.summary_url("Panthera leo").unwrap(), LION_URL);
        assert_eq!(
            wiki.summary_url("Canis lupus/familiaris").unwrap(),
            "https://en.wikipedia.org/api/rest_v1/page/summary/Canis_lupus%2Ffamiliaris"
        );
    }

    #[test]
    fn test_summary_url_with_trailing_slash_base() {
        let wiki = WikipediaClient::with_base_url(MockHttpClient::new(), "http://localhost:8080/");

        assert_eq!(
            wiki.summary_url("Ursus arctos").unwrap(),
            "http://localhost:8080/page/summary/Ursus_arctos"
        );
    }

    #[tokio::test]
    async fn test_fetch_summary_found() {
        let client = MockHttpClient::new().with_response(
            LION_URL,
            serde_json::json!({
                "type": "standard",
                "title": "Lion",
                "extract": "The lion is a large cat.",
                "thumbnail": {"source": "https://upload.wikimedia.org/lion.jpg", "width": 320},
                "content_urls": {"desktop": {"page": "https://en.wikipedia.org/wiki/Lion"}}
            }),
        );
        let wiki = WikipediaClient::new(client);

        let lookup = wiki.fetch_summary("Panthera leo").await.unwrap();

        match lookup {
            SummaryLookup::Found(summary) => {
                assert!(summary.is_standard());
                assert_eq!(summary.title, "Lion");
                assert_eq!(summary.desktop_url(), Some("https://en.wikipedia.org/wiki/Lion"));
            }
            SummaryLookup::Missing => panic!("Expected a summary"),
        }
    }

    #[tokio::test]
    async fn test_fetch_summary_status_is_missing() {
        let client = MockHttpClient::new().with_status(LION_URL, 404);
        let wiki = WikipediaClient::new(client);

        assert_eq!(
            wiki.fetch_summary("Panthera leo").await.unwrap(),
            SummaryLookup::Missing
        );
    }

    #[tokio::test]
    async fn test_fetch_summary_transport_failure_propagates() {
        let client = MockHttpClient::new().with_error(LION_URL, "connection reset");
        let wiki = WikipediaClient::new(client);

        let err = wiki.fetch_summary("Panthera leo").await.unwrap_err();

        assert!(err.to_string().contains("wikipedia"));
    }
}
