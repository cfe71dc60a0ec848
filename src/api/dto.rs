//! Request and response bodies

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body of deposit and withdraw requests
///
/// `amount` may be a JSON string (`"10.00"`) or a JSON number (`10.5`).
/// It is validated into an `Amount` by the handler.
#[derive(Debug, Clone, Deserialize)]
pub struct AmountRequest {
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Body of every error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}
