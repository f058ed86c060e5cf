use std::fmt;

use thiserror::Error;

const MAX_BODY_CHARS: usize = 240;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The request never produced an HTTP response.
    Transport,
    /// The backend answered with a non-2xx status.
    HttpStatus,
    /// The response body could not be decoded or normalized.
    InvalidPayload,
    /// The caller asked for something that cannot be sent.
    InvalidRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
    pub status: Option<u16>,
    pub endpoint: Option<String>,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            endpoint: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Failures a reader should be told about, as opposed to programming or
    /// contract errors.
    pub fn is_user_facing(&self) -> bool {
        matches!(self.kind, ApiErrorKind::Transport | ApiErrorKind::HttpStatus)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.endpoint, self.status) {
            (Some(endpoint), Some(status)) => {
                write!(f, "{} (endpoint={}, status={})", self.message, endpoint, status)
            }
            (Some(endpoint), None) => write!(f, "{} (endpoint={})", self.message, endpoint),
            (None, Some(status)) => write!(f, "{} (status={})", self.message, status),
            (None, None) => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<NormalizeError> for ApiError {
    fn from(err: NormalizeError) -> Self {
        invalid_payload(err.to_string())
    }
}

/// A backend record that does not satisfy the field policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("{record} record is missing required field `{field}`")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },
    #[error("{record} record has invalid `{field}`: {reason}")]
    InvalidField {
        record: &'static str,
        field: &'static str,
        reason: String,
    },
}

impl NormalizeError {
    pub fn missing(record: &'static str, field: &'static str) -> Self {
        NormalizeError::MissingField { record, field }
    }

    pub fn invalid(record: &'static str, field: &'static str, reason: impl Into<String>) -> Self {
        NormalizeError::InvalidField {
            record,
            field,
            reason: reason.into(),
        }
    }
}

pub fn transport_error(message: impl Into<String>) -> ApiError {
    ApiError::new(ApiErrorKind::Transport, message)
}

pub fn invalid_payload(message: impl Into<String>) -> ApiError {
    ApiError::new(ApiErrorKind::InvalidPayload, message)
}

pub fn invalid_request(message: impl Into<String>) -> ApiError {
    ApiError::new(ApiErrorKind::InvalidRequest, message)
}

/// Builds the error for a non-2xx response, preferring the body text the
/// backend sent over a generic message.
pub fn status_error(status: u16, endpoint: &str, body: &str) -> ApiError {
    let body = body.trim();
    let message = if body.is_empty() {
        format!("request failed with status {}", status)
    } else {
        body.chars().take(MAX_BODY_CHARS).collect()
    };

    ApiError::new(ApiErrorKind::HttpStatus, message)
        .with_status(status)
        .with_endpoint(endpoint)
}
