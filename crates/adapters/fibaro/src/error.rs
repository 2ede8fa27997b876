//! Fibaro adapter error types.

use garage_domain::error::TransportError;

/// Errors specific to the Fibaro adapter.
#[derive(Debug, thiserror::Error)]
pub enum FibaroError {
    /// The configured host does not form a valid URL.
    #[error("invalid controller address")]
    InvalidUrl(#[source] url::ParseError),

    /// The token contains characters not allowed in a header value.
    #[error("invalid authorization header")]
    InvalidHeader(#[source] reqwest::header::InvalidHeaderValue),

    /// reqwest failed to build the client or perform the request.
    #[error("HC3 request failed")]
    Request(#[source] reqwest::Error),

    /// The controller answered with a non-success status code.
    #[error("HC3 responded with HTTP {status}")]
    Status { status: u16 },

    /// The response body was not the expected JSON document.
    #[error("failed to parse HC3 payload")]
    Payload(#[source] serde_json::Error),

    /// `properties.value` held something that is not boolean-like.
    #[error("unexpected sensor value {0}")]
    InvalidValue(serde_json::Value),
}

impl FibaroError {
    /// Convert into a [`TransportError`] for propagation across the
    /// `DeviceClient` port.
    pub fn into_domain(self) -> TransportError {
        match self {
            Self::Status { status } => TransportError::Status { status },
            Self::Payload(err) => TransportError::Payload(err.to_string()),
            Self::InvalidValue(value) => {
                TransportError::Payload(format!("unexpected sensor value {value}"))
            }
            other => TransportError::Request(Box::new(other)),
        }
    }
}

impl From<FibaroError> for TransportError {
    fn from(err: FibaroError) -> Self {
        err.into_domain()
    }
}

impl From<reqwest::Error> for FibaroError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request(err)
    }
}
