use std::collections::BTreeMap;
use std::fmt;

/// Typed error produced once at the API gateway boundary.
///
/// Call sites match on the kind to produce contextual user-facing messages
/// instead of string-matching on raw HTTP error text.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure: the backend could not be reached at all.
    #[error("backend unreachable at {url}")]
    Network { url: String },
    /// HTTP 400
    #[error("bad request: {0}")]
    BadRequest(String),
    /// HTTP 401
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    /// HTTP 403
    #[error("forbidden: {0}")]
    Forbidden(String),
    /// HTTP 404
    #[error("not found: {0}")]
    NotFound(String),
    /// Any other non-2xx status, carrying the raw response body text.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    /// The response decoded but did not have the expected shape.
    #[error("invalid server response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Classify a non-2xx response into a structured error kind.
    #[must_use]
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            400 => Self::BadRequest(body),
            401 => Self::Unauthorized(body),
            403 => Self::Forbidden(body),
            404 => Self::NotFound(body),
            _ => Self::Http { status, body },
        }
    }

    /// Whether this error invalidates the stored session.
    #[must_use]
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

/// Field-keyed client-side validation failures.
///
/// Collected before any network call is made; a request is only sent when
/// the map is empty.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<String, String>,
}

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.insert(field.into(), message.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Turn the collected errors into a `Result`, for use at the end of a
    /// validation pass.
    ///
    /// # Errors
    ///
    /// Returns `self` if any field error was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.fields {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_classifies_known_codes() {
        assert!(matches!(
            ApiError::from_status(400, String::new()),
            ApiError::BadRequest(_)
        ));
        assert!(matches!(
            ApiError::from_status(401, String::new()),
            ApiError::Unauthorized(_)
        ));
        assert!(matches!(
            ApiError::from_status(403, String::new()),
            ApiError::Forbidden(_)
        ));
        assert!(matches!(
            ApiError::from_status(404, String::new()),
            ApiError::NotFound(_)
        ));
    }

    #[test]
    fn test_from_status_keeps_raw_body_for_other_codes() {
        let err = ApiError::from_status(500, "boom".to_string());
        match err {
            ApiError::Http { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => unreachable!("unexpected kind: {other}"),
        }
    }

    #[test]
    fn test_only_unauthorized_is_auth_failure() {
        assert!(ApiError::from_status(401, String::new()).is_auth_failure());
        assert!(!ApiError::from_status(403, String::new()).is_auth_failure());
        assert!(!ApiError::from_status(404, String::new()).is_auth_failure());
    }

    #[test]
    fn test_network_error_names_the_url() {
        let err = ApiError::Network {
            url: "http://localhost:5134/api/Rooms".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "backend unreachable at http://localhost:5134/api/Rooms"
        );
    }

    #[test]
    fn test_validation_errors_collect_per_field() {
        let mut errors = ValidationErrors::new();
        assert!(errors.is_empty());
        errors.add("maxPlayers", "at most 10 players");
        errors.add("name", "name is required");
        assert_eq!(errors.get("name"), Some("name is required"));
        assert!(errors.clone().into_result().is_err());
        let rendered = errors.to_string();
        assert!(rendered.contains("maxPlayers: at most 10 players"));
        assert!(rendered.contains("name: name is required"));
    }
}
