//! Mapping of ledger errors onto HTTP responses
//!
//! | Error                                   | Status | `detail`                  |
//! |-----------------------------------------|--------|---------------------------|
//! | `AccountNotFound`                       | 404    | `Account not found`       |
//! | `InvalidAmount`, `MalformedRequest`     | 422    | validation message        |
//! | `InsufficientFunds`                     | 400    | `Insufficient funds`      |
//! | anything else                           | 500    | error display text        |

use super::dto::ErrorBody;
use crate::types::LedgerError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

impl LedgerError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            LedgerError::AccountNotFound { .. } => StatusCode::NOT_FOUND,
            LedgerError::InvalidAmount { .. } | LedgerError::MalformedRequest { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            LedgerError::InsufficientFunds { .. } => StatusCode::BAD_REQUEST,
            LedgerError::ArithmeticOverflow { .. }
            | LedgerError::DuplicateAccount { .. }
            | LedgerError::NegativeOpeningBalance { .. }
            | LedgerError::IoError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message for this error
    pub fn detail(&self) -> String {
        match self {
            LedgerError::AccountNotFound { .. } => "Account not found".to_string(),
            LedgerError::InsufficientFunds { .. } => "Insufficient funds".to_string(),
            LedgerError::InvalidAmount { reason, .. } => reason.clone(),
            LedgerError::MalformedRequest { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for LedgerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }

        (
            status,
            Json(ErrorBody {
                detail: self.detail(),
            }),
        )
            .into_response()
    }
}

// Undecodable bodies are validation failures, like out-of-range amounts.
impl From<JsonRejection> for LedgerError {
    fn from(rejection: JsonRejection) -> Self {
        LedgerError::malformed_request(rejection.body_text())
    }
}
