//! Error types for the Observer API server.
//!
//! [`ObserverError`] unifies all failure modes into a single enum that
//! can be converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use colony_core::ParameterError;

/// Errors that can occur in the Observer API layer.
#[derive(Debug, thiserror::Error)]
pub enum ObserverError {
    /// The named parameter does not exist.
    #[error("unknown parameter: {0}")]
    UnknownParameter(String),

    /// A parameter value is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The request body could not be parsed.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// A serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<ParameterError> for ObserverError {
    fn from(err: ParameterError) -> Self {
        match err {
            ParameterError::UnknownParameter { .. } => Self::UnknownParameter(err.to_string()),
            ParameterError::InvalidParameter { .. } => Self::InvalidParameter(err.to_string()),
        }
    }
}

impl IntoResponse for ObserverError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::UnknownParameter(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::InvalidParameter(msg) | Self::InvalidBody(msg) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            Self::Serialization(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("JSON error: {e}"))
            }
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colony_core::ParameterName;

    #[test]
    fn unknown_parameter_maps_to_not_found() {
        let err = ObserverError::from(ParameterError::UnknownParameter {
            name: String::from("wingspan"),
        });
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_parameter_maps_to_bad_request() {
        let err = ObserverError::from(ParameterError::InvalidParameter {
            name: ParameterName::ScoutSpeed,
            value: -1.0,
            reason: "must be positive",
        });
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
