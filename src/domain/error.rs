use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Upstream error: {service} - {message}")]
    Upstream {
        service: String,
        status: Option<u16>,
        message: String,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Cache error: {message}")]
    Cache { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Network or decoding failure talking to a third-party API
    pub fn upstream(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Upstream {
            service: service.into(),
            status: None,
            message: message.into(),
        }
    }

    /// Non-success HTTP status from a third-party API
    pub fn upstream_status(
        service: impl Into<String>,
        status: u16,
        message: impl Into<String>,
    ) -> Self {
        Self::Upstream {
            service: service.into(),
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn cache(message: impl Into<String>) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }

    /// HTTP status reported by the upstream, if the failure carried one
    pub fn upstream_status_code(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => *status,
            _ => None,
        }
    }

    /// Re-labels an upstream error with the API it came from
    pub fn for_service(self, name: &str) -> Self {
        match self {
            Self::Upstream {
                status, message, ..
            } => Self::Upstream {
                service: name.to_string(),
                status,
                message,
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("No search results yet");
        assert_eq!(error.to_string(), "Not found: No search results yet");
    }

    #[test]
    fn test_upstream_error_display() {
        let error = DomainError::upstream("gbif", "Request failed: connection refused");
        assert_eq!(
            error.to_string(),
            "Upstream error: gbif - Request failed: connection refused"
        );
        assert_eq!(error.upstream_status_code(), None);
    }

    #[test]
    fn test_upstream_status_is_kept_when_relabelled() {
        let error = DomainError::upstream_status("http", 503, "HTTP 503").for_service("wikipedia");

        assert_eq!(error.upstream_status_code(), Some(503));
        assert!(error.to_string().starts_with("Upstream error: wikipedia"));
    }

    #[test]
    fn test_for_service_leaves_other_errors_alone() {
        let error = DomainError::validation("bad").for_service("gbif");
        assert_eq!(error.to_string(), "Validation error: bad");
    }
}
