//! Search input validation and request composition

use serde::Serialize;
use thiserror::Error;

/// Reasons a search is rejected before any upstream call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Please enter a species name.")]
    EmptySpeciesName,

    #[error("Invalid year range '{0}'. Please enter as 'startYear,endYear'.")]
    MalformedYearRange(String),

    #[error("Invalid country code '{0}'. Expected a two-letter ISO code.")]
    InvalidCountryCode(String),
}

impl QueryError {
    /// Name of the offending input field
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptySpeciesName => "species",
            Self::MalformedYearRange(_) => "years",
            Self::InvalidCountryCode(_) => "country",
        }
    }
}

/// Inclusive range of years, `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearRange {
    start: i32,
    end: i32,
}

impl YearRange {
    pub fn new(start: i32, end: i32) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    /// Value of the GBIF `year` parameter
    pub fn as_param(&self) -> String {
        format!("{},{}", self.start, self.end)
    }
}

/// Parses "startYear,endYear".
///
/// Blank input means no range was supplied and yields `Ok(None)`.
pub fn parse_year_range(raw: &str) -> Result<Option<YearRange>, QueryError> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Ok(None);
    }

    let malformed = || QueryError::MalformedYearRange(raw.to_string());
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();

    let [start, end] = parts.as_slice() else {
        return Err(malformed());
    };

    let start: i32 = start.parse().map_err(|_| malformed())?;
    let end: i32 = end.parse().map_err(|_| malformed())?;

    YearRange::new(start, end).map(Some).ok_or_else(malformed)
}

/// A validated occurrence search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    species: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    years: Option<YearRange>,
}

impl SearchQuery {
    /// Validates raw user input.
    ///
    /// Country and year inputs are optional; blank strings count as absent.
    pub fn parse(
        species: &str,
        country: Option<&str>,
        years: Option<&str>,
    ) -> Result<Self, QueryError> {
        let species = species.trim();

        if species.is_empty() {
            return Err(QueryError::EmptySpeciesName);
        }

        let country = match country.map(str::trim).filter(|c| !c.is_empty()) {
            Some(code) => Some(normalize_country_code(code)?),
            None => None,
        };

        let years = match years {
            Some(raw) => parse_year_range(raw)?,
            None => None,
        };

        Ok(Self {
            species: species.to_string(),
            country,
            years,
        })
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn years(&self) -> Option<YearRange> {
        self.years
    }

    /// Base filter parameters for the occurrence endpoint
    pub fn to_request(&self) -> OccurrenceRequest {
        let mut params = vec![
            ("scientificName", self.species.clone()),
            ("hasCoordinate", "true".to_string()),
        ];

        if let Some(country) = &self.country {
            params.push(("country", country.clone()));
        }

        if let Some(years) = &self.years {
            params.push(("year", years.as_param()));
        }

        OccurrenceRequest { params }
    }
}

fn normalize_country_code(code: &str) -> Result<String, QueryError> {
    if code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(code.to_ascii_uppercase())
    } else {
        Err(QueryError::InvalidCountryCode(code.to_string()))
    }
}

/// Request descriptor consumed by the pagination aggregator.
///
/// Paging parameters (`limit`, `offset`) are appended per page by the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccurrenceRequest {
    params: Vec<(&'static str, String)>,
}

impl OccurrenceRequest {
    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    /// Filter parameters followed by the paging window
    pub fn page_params(&self, limit: u32, offset: u64) -> Vec<(&'static str, String)> {
        let mut params = self.params.clone();
        params.push(("limit", limit.to_string()));
        params.push(("offset", offset.to_string()));
        params
    }
}
