//! HTTP surface of the ledger
//!
//! | Method & Path                  | Success                          |
//! |--------------------------------|----------------------------------|
//! | `GET /accounts/:id/balance`    | 200 `{account_number, balance}`  |
//! | `POST /accounts/:id/deposit`   | 200 `{account_number, balance}`  |
//! | `POST /accounts/:id/withdraw`  | 200 `{account_number, balance}`  |
//! | `GET /health`                  | 200 `{"status": "ok"}`           |
//!
//! Failures are `{"detail": ...}` bodies; see [`error`] for the status mapping.

pub mod dto;
pub mod error;
pub mod handlers;

use crate::core::Ledger;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the application router around a shared ledger
pub fn router(ledger: Arc<Ledger>) -> Router {
    Router::new()
        .route(
            "/accounts/:account_number/balance",
            get(handlers::get_balance),
        )
        .route("/accounts/:account_number/deposit", post(handlers::deposit))
        .route(
            "/accounts/:account_number/withdraw",
            post(handlers::withdraw),
        )
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(ledger)
}
