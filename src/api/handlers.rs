//! Route handlers
//!
//! Handlers validate the request body before touching the ledger, so an
//! invalid amount is reported even for an unknown account.

use super::dto::{AmountRequest, HealthResponse};
use crate::core::Ledger;
use crate::types::{AccountBalance, Amount, LedgerError};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use std::sync::Arc;

pub async fn get_balance(
    State(ledger): State<Arc<Ledger>>,
    Path(account_number): Path<String>,
) -> Result<Json<AccountBalance>, LedgerError> {
    Ok(Json(ledger.balance(&account_number)?))
}

pub async fn deposit(
    State(ledger): State<Arc<Ledger>>,
    Path(account_number): Path<String>,
    body: Result<Json<AmountRequest>, JsonRejection>,
) -> Result<Json<AccountBalance>, LedgerError> {
    let amount = validate(body)?;
    Ok(Json(ledger.deposit(&account_number, amount)?))
}

pub async fn withdraw(
    State(ledger): State<Arc<Ledger>>,
    Path(account_number): Path<String>,
    body: Result<Json<AmountRequest>, JsonRejection>,
) -> Result<Json<AccountBalance>, LedgerError> {
    let amount = validate(body)?;
    Ok(Json(ledger.withdraw(&account_number, amount)?))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

fn validate(body: Result<Json<AmountRequest>, JsonRejection>) -> Result<Amount, LedgerError> {
    let Json(request) = body?;
    Amount::try_from(request.amount)
}
