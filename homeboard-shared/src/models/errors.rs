use thiserror::Error;

/// Everything that can go wrong fetching remote data.
///
/// A closed set, produced at the API client boundary so no HTTP-client error
/// type leaks into the rest of the app. The weather card renders
/// [`FetchError::user_message`]; the directory pages show a fixed retry
/// line instead of per-kind text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// No weather API key was compiled in.
    #[error("weather API key is not configured")]
    MissingApiKey,

    /// A weather search was submitted with a blank query.
    #[error("city query is empty")]
    EmptyCity,

    /// The remote rejected the API key (HTTP 401).
    #[error("the API key was rejected")]
    InvalidApiKey,

    /// The requested resource does not exist (HTTP 404).
    #[error("resource not found")]
    NotFound,

    /// The request never completed: connectivity loss, DNS failure, CORS.
    #[error("network failure")]
    Network,

    /// Any other non-success HTTP status.
    #[error("unexpected HTTP status {0}")]
    Http(u16),

    /// The response body could not be decoded into the expected shape.
    #[error("malformed response body")]
    Decode,
}

impl FetchError {
    /// Classify a non-success HTTP status code.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Self::InvalidApiKey,
            404 => Self::NotFound,
            other => Self::Http(other),
        }
    }

    /// The fixed user-facing line for this kind of failure, independent of
    /// transport details.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingApiKey => "API key not configured",
            Self::EmptyCity => "Please enter a city name",
            Self::InvalidApiKey => "Invalid API key",
            Self::NotFound => "City not found",
            Self::Network => "Network error. Please check your connection.",
            Self::Http(_) | Self::Decode => "Failed to fetch weather data",
        }
    }
}

/// Failures reported by the browser geolocation API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeoError {
    /// The browser exposes no geolocation API at all.
    #[error("geolocation is not available in this browser")]
    Unsupported,

    /// The user or platform denied the permission prompt.
    #[error("geolocation permission denied")]
    PermissionDenied,

    /// The platform could not produce a position fix.
    #[error("position unavailable")]
    Unavailable,

    /// No fix arrived within the request timeout.
    #[error("position request timed out")]
    Timeout,

    /// An error code outside the platform-defined set.
    #[error("geolocation failed")]
    Other,
}

impl GeoError {
    /// Map a browser `PositionError.code` to a kind. Codes 1 through 3 are
    /// defined by the platform; anything else collapses to [`GeoError::Other`].
    #[must_use]
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => Self::PermissionDenied,
            2 => Self::Unavailable,
            3 => Self::Timeout,
            _ => Self::Other,
        }
    }

    /// The fixed user-facing line for this kind of failure.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Unsupported => "Geolocation is not supported by your browser",
            Self::PermissionDenied => {
                "Location access denied. Please enable location permissions."
            }
            Self::Unavailable => "Location information unavailable.",
            Self::Timeout => "Location request timed out.",
            Self::Other => "An unknown error occurred.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_from_status() {
        assert_eq!(FetchError::from_status(401), FetchError::InvalidApiKey);
        assert_eq!(FetchError::from_status(404), FetchError::NotFound);
        assert_eq!(FetchError::from_status(500), FetchError::Http(500));
        assert_eq!(FetchError::from_status(429), FetchError::Http(429));
    }

    #[test]
    fn test_fetch_error_user_messages() {
        assert_eq!(
            FetchError::MissingApiKey.user_message(),
            "API key not configured"
        );
        assert_eq!(
            FetchError::EmptyCity.user_message(),
            "Please enter a city name"
        );
        assert_eq!(FetchError::InvalidApiKey.user_message(), "Invalid API key");
        assert_eq!(FetchError::NotFound.user_message(), "City not found");
        assert_eq!(
            FetchError::Network.user_message(),
            "Network error. Please check your connection."
        );
        assert_eq!(
            FetchError::Http(503).user_message(),
            "Failed to fetch weather data"
        );
        assert_eq!(
            FetchError::Decode.user_message(),
            "Failed to fetch weather data"
        );
    }

    #[test]
    fn test_fetch_error_display_is_internal() {
        // Display text is for logs; the UI goes through user_message().
        assert_eq!(
            FetchError::Http(500).to_string(),
            "unexpected HTTP status 500"
        );
        assert_ne!(
            FetchError::Network.to_string(),
            FetchError::Network.user_message()
        );
    }

    #[test]
    fn test_geo_error_from_code() {
        assert_eq!(GeoError::from_code(1), GeoError::PermissionDenied);
        assert_eq!(GeoError::from_code(2), GeoError::Unavailable);
        assert_eq!(GeoError::from_code(3), GeoError::Timeout);
        assert_eq!(GeoError::from_code(0), GeoError::Other);
        assert_eq!(GeoError::from_code(42), GeoError::Other);
    }

    #[test]
    fn test_geo_error_user_messages() {
        assert_eq!(
            GeoError::Unsupported.user_message(),
            "Geolocation is not supported by your browser"
        );
        assert_eq!(
            GeoError::PermissionDenied.user_message(),
            "Location access denied. Please enable location permissions."
        );
        assert_eq!(
            GeoError::Unavailable.user_message(),
            "Location information unavailable."
        );
        assert_eq!(
            GeoError::Timeout.user_message(),
            "Location request timed out."
        );
        assert_eq!(GeoError::Other.user_message(), "An unknown error occurred.");
    }
}
