use thiserror::Error;

/// Structured SDK error.
///
/// Identity-resolution failures never surface through this type — they are
/// normalized to `TorqueUser::Unknown` so a stale local session demotes to
/// logged-out instead of raising. Everything else returns one of these
/// variants as a result; recoverable paths do not panic.
///
/// All payloads are plain strings so the type stays `Clone` (the cached
/// remote-lookup functions require it).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TorqueError {
    /// Missing/malformed public key or required URLs. Fatal to construction.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Bad call-site argument, e.g. an empty price handle.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Non-2xx remote response.
    #[error("api error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The response body did not match the expected schema.
    #[error("unexpected api response data format: {0}")]
    UnexpectedResponseFormat(String),

    /// Catch-all carrying the underlying failure for diagnostics.
    #[error("unknown error: {0}")]
    Unknown(String),
}

impl TorqueError {
    pub fn is_api_error(&self) -> bool {
        matches!(self, TorqueError::Api { .. })
    }

    pub fn is_invalid_config(&self) -> bool {
        matches!(self, TorqueError::InvalidConfig(_))
    }

    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, TorqueError::InvalidParameter(_))
    }
}

impl From<url::ParseError> for TorqueError {
    fn from(e: url::ParseError) -> Self {
        TorqueError::InvalidConfig(format!("invalid URL: {}", e))
    }
}

impl From<reqwest::Error> for TorqueError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            TorqueError::UnexpectedResponseFormat(e.to_string())
        } else {
            TorqueError::Unknown(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_helpers() {
        let api = TorqueError::Api {
            status: 500,
            message: "boom".into(),
        };
        assert!(api.is_api_error());
        assert!(!api.is_invalid_config());
        assert!(TorqueError::InvalidParameter("price handle is empty".into())
            .is_invalid_parameter());
    }

    #[test]
    fn test_url_errors_map_to_invalid_config() {
        let err: TorqueError = url::Url::parse("not a url").unwrap_err().into();
        assert!(err.is_invalid_config());
    }
}
