use thiserror::Error;

/// Errors surfaced by the remote data service client.
///
/// Every variant is per-operation and recoverable: the console keeps its
/// previous view state and the operator may retry through any navigation
/// action.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("service returned HTTP {status}: {message}")]
    Http { status: u16, message: String },
    #[error("transport error: {0}")]
    Transport(String),
    /// Undecodable response body, including unknown status values on the
    /// wire: an out-of-range status is a decode error, never a default.
    #[error("failed to decode service response: {0}")]
    Decode(String),
    #[error("invalid service base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ServiceError {
    /// Transport hiccups and server-side 5xx are worth retrying; client
    /// errors and decode failures are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            ServiceError::Transport(_) => true,
            ServiceError::Http { status, .. } => *status >= 500,
            ServiceError::Decode(_) | ServiceError::InvalidBaseUrl(_) => false,
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ServiceError::Decode(err.to_string())
        } else {
            ServiceError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_are_retryable_client_errors_are_not() {
        let server = ServiceError::Http {
            status: 503,
            message: "unavailable".into(),
        };
        let client = ServiceError::Http {
            status: 404,
            message: "missing".into(),
        };
        assert!(server.is_retryable());
        assert!(!client.is_retryable());
        assert!(ServiceError::Transport("reset".into()).is_retryable());
        assert!(!ServiceError::Decode("bad json".into()).is_retryable());
    }
}
