//! Encyclopedia summaries and the detail panel rendered from them

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Summary type marking a regular article
pub const STANDARD_SUMMARY: &str = "standard";

/// Image shown when an article has no thumbnail
pub const NO_IMAGE_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/a/ac/No_image_available.svg";

/// Page summary as returned by the Wikipedia REST API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageSummary {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub extract: String,
    #[serde(default)]
    pub thumbnail: Option<Thumbnail>,
    #[serde(default)]
    pub content_urls: Option<ContentUrls>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentUrls {
    pub desktop: PageUrl,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageUrl {
    pub page: String,
}

impl PageSummary {
    pub fn is_standard(&self) -> bool {
        self.kind == STANDARD_SUMMARY
    }

    pub fn desktop_url(&self) -> Option<&str> {
        self.content_urls.as_ref().map(|urls| urls.desktop.page.as_str())
    }
}

/// What the summary endpoint had for a title
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryLookup {
    Found(PageSummary),
    /// The API answered with a non-success status
    Missing,
}

/// Source of species summaries
#[async_trait]
pub trait SummarySource: Send + Sync + std::fmt::Debug {
    /// Looks up the article for a species name as typed
    async fn fetch_summary(&self, species: &str) -> Result<SummaryLookup, DomainError>;
}

/// Article title for a species name: every whitespace character becomes `_`
pub fn article_title(species: &str) -> String {
    species
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}

/// Rendered content for the species detail panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailContent {
    pub species: String,
    pub html: String,
    pub found: bool,
}

impl DetailContent {
    /// Renders the panel for a lookup result
    pub fn render(species: &str, lookup: &SummaryLookup) -> Self {
        match lookup {
            SummaryLookup::Found(summary) if summary.is_standard() => Self {
                species: species.to_string(),
                html: render_summary(summary),
                found: true,
            },
            _ => Self::not_found(species),
        }
    }

    pub fn not_found(species: &str) -> Self {
        Self {
            species: species.to_string(),
            html: format!(
                "<p>No Wikipedia page found for \"<b>{}</b>\".</p>",
                escape_html(species)
            ),
            found: false,
        }
    }

    pub fn lookup_failed(species: &str) -> Self {
        Self {
            species: species.to_string(),
            html: format!(
                "<p>Error loading Wikipedia info for \"<b>{}</b>\".</p>",
                escape_html(species)
            ),
            found: false,
        }
    }
}

fn render_summary(summary: &PageSummary) -> String {
    let title = escape_html(&summary.title);
    let image = summary
        .thumbnail
        .as_ref()
        .map(|t| t.source.as_str())
        .unwrap_or(NO_IMAGE_URL);

    let mut html = format!(
        "<h5>{title}</h5>\n<img src=\"{}\" alt=\"{title}\" class=\"img-fluid mb-2\">\n<p>{}</p>",
        escape_html(image),
        escape_html(&summary.extract),
    );

    if let Some(url) = summary.desktop_url() {
        html.push_str(&format!(
            "\n<a href=\"{}\" target=\"_blank\" class=\"btn btn-primary\">Read More</a>",
            escape_html(url)
        ));
    }

    html
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());

    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_title_replaces_each_whitespace() {
        assert_eq!(article_title("Panthera leo"), "Panthera_leo");
        assert_eq!(article_title("Canis  lupus"), "Canis__lupus");
        assert_eq!(article_title("Ursus\tarctos"), "Ursus_arctos");
    }

    #[test]
    fn test_deserialize_summary() {
        let json = serde_json::json!({
            "type": "standard",
            "title": "Lion",
            "extract": "The lion is a large cat.",
            "thumbnail": {"source": "https://upload.wikimedia.org/lion.jpg", "width": 320},
            "content_urls": {
                "desktop": {"page": "https://en.wikipedia.org/wiki/Lion"},
                "mobile": {"page": "https://en.m.wikipedia.org/wiki/Lion"}
            }
        });

        let summary: PageSummary = serde_json::from_value(json).unwrap();
        assert!(summary.is_standard());
        assert_eq!(summary.desktop_url(), Some("https://en.wikipedia.org/wiki/Lion"));
    }

    #[test]
    fn test_render_standard_summary() {
        let summary: PageSummary = serde_json::from_value(serde_json::json!({
            "type": "standard",
            "title": "Lion",
            "extract": "The lion is a large cat.",
            "thumbnail": {"source": "https://upload.wikimedia.org/lion.jpg"},
            "content_urls": {"desktop": {"page": "https://en.wikipedia.org/wiki/Lion"}}
        }))
        .unwrap();

        let content = DetailContent::render("Panthera leo", &SummaryLookup::Found(summary));

        assert!(content.found);
        assert!(content.html.contains("<h5>Lion</h5>"));
        assert!(content.html.contains("src=\"https://upload.wikimedia.org/lion.jpg\""));
        assert!(content.html.contains("<p>The lion is a large cat.</p>"));
        assert!(content.html.contains("href=\"https://en.wikipedia.org/wiki/Lion\""));
    }

    #[test]
    fn test_render_uses_fallback_image() {
        let summary = PageSummary {
            kind: STANDARD_SUMMARY.to_string(),
            title: "Axolotl".to_string(),
            extract: "A salamander.".to_string(),
            thumbnail: None,
            content_urls: None,
        };

        let content = DetailContent::render("Ambystoma mexicanum", &SummaryLookup::Found(summary));
        assert!(content.html.contains(NO_IMAGE_URL));
        assert!(!content.html.contains("Read More"));
    }

    #[test]
    fn test_non_standard_summary_is_not_found() {
        let summary = PageSummary {
            kind: "disambiguation".to_string(),
            title: "Jaguar".to_string(),
            ..Default::default()
        };

        let content = DetailContent::render("Jaguar", &SummaryLookup::Found(summary));
        assert!(!content.found);
        assert_eq!(content, DetailContent::not_found("Jaguar"));
    }

    #[test]
    fn test_missing_is_not_found() {
        let content = DetailContent::render("Nonexistus", &SummaryLookup::Missing);
        assert!(!content.found);
        assert!(content.html.contains("No Wikipedia page found"));
    }

    #[test]
    fn test_species_name_is_escaped() {
        let content = DetailContent::not_found("<script>alert(1)</script>");
        assert!(!content.html.contains("<script>"));
        assert!(content.html.contains("&lt;script&gt;"));
    }
}
