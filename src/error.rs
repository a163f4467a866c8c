//! Error types for NWS requests

use reqwest::StatusCode;
use thiserror::Error;

/// Every way a weather lookup can fail
#[derive(Error, Debug)]
pub enum WeatherError {
    /// Connection, timeout or client construction failures
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request failed with status: {status} ({url})")]
    Status { status: StatusCode, url: String },

    /// Body was not JSON or did not have the expected shape
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Coarse category used when turning an error into tool output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    DataShape,
    Input,
}

impl WeatherError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) | Self::Status { .. } => ErrorKind::Transport,
            Self::Decode(_) | Self::MissingField(_) => ErrorKind::DataShape,
            Self::InvalidUrl { .. } => ErrorKind::Input,
        }
    }

    pub(crate) fn invalid_url(url: &str, reason: impl ToString) -> Self {
        Self::InvalidUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_transport() {
        let err = WeatherError::Status {
            status: StatusCode::NOT_FOUND,
            url: "https://api.weather.gov/points/0.0000,0.0000".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(err.to_string().contains("404 Not Found"));
    }

    #[test]
    fn decode_and_missing_field_are_data_shape() {
        let decode = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        assert_eq!(WeatherError::from(decode).kind(), ErrorKind::DataShape);
        assert_eq!(
            WeatherError::MissingField("properties.forecast").kind(),
            ErrorKind::DataShape
        );
    }

    #[test]
    fn invalid_url_is_input() {
        let err = WeatherError::invalid_url("http://[::1", "invalid IPv6 address");
        assert_eq!(err.kind(), ErrorKind::Input);
        assert_eq!(
            err.to_string(),
            "Invalid URL 'http://[::1': invalid IPv6 address"
        );
    }
}
