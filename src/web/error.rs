//! HTTP error mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::RulError;

/// JSON body of every non-200 API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Error returned by API handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Body missing, not JSON, or missing/ill-typed fields
    #[error(transparent)]
    Rejected(#[from] JsonRejection),

    #[error(transparent)]
    Service(#[from] RulError),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Rejected(rejection) => rejection.status(),
            Self::Service(RulError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Service(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Rejected(rejection) => rejection.body_text(),
            Self::Service(e) => e.to_string(),
        };

        if status.is_server_error() {
            tracing::error!("Request failed: {}", message);
        } else {
            tracing::warn!("Rejected request ({}): {}", status, message);
        }

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(RulError::Validation("bad".into())).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::from(RulError::Training("diverged".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
