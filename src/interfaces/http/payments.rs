use crate::application::ledger::PaymentLedger;
use crate::domain::payment::{Amount, Payment, PaymentId, PaymentStatus, Payments};
use crate::error::Result;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Query parameters for register and update.
#[derive(Debug, Deserialize)]
pub struct PaymentParams {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub payment_method: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub message: String,
    pub payment_id: PaymentId,
    pub status: PaymentStatus,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub message: String,
    pub payment_id: PaymentId,
    pub data: Payment,
}

pub fn routes(ledger: Arc<PaymentLedger>) -> Router {
    Router::new()
        .route("/payments", get(list_payments))
        .route("/payments/:payment_id", post(register_payment))
        .route("/payments/:payment_id/update", post(update_payment))
        .route("/payments/:payment_id/pay", post(pay_payment))
        .route("/payments/:payment_id/revert", post(revert_payment))
        .with_state(ledger)
}

pub async fn list_payments(State(ledger): State<Arc<PaymentLedger>>) -> Result<Json<Payments>> {
    let payments = ledger.list().await?;
    info!(count = payments.len(), "payments: list request served");
    Ok(Json(payments))
}

pub async fn register_payment(
    State(ledger): State<Arc<PaymentLedger>>,
    Path(payment_id): Path<PaymentId>,
    Query(params): Query<PaymentParams>,
) -> Result<Json<StatusResponse>> {
    let amount = Amount::try_from(params.amount)?;
    let payment = ledger
        .register(&payment_id, amount, &params.payment_method)
        .await?;

    Ok(Json(StatusResponse {
        message: "Payment registered".to_string(),
        payment_id,
        status: payment.status,
    }))
}

pub async fn update_payment(
    State(ledger): State<Arc<PaymentLedger>>,
    Path(payment_id): Path<PaymentId>,
    Query(params): Query<PaymentParams>,
) -> Result<Json<UpdateResponse>> {
    let amount = Amount::try_from(params.amount)?;
    let payment = ledger
        .update(&payment_id, amount, &params.payment_method)
        .await?;

    Ok(Json(UpdateResponse {
        message: "Payment updated".to_string(),
        payment_id,
        data: payment,
    }))
}

pub async fn pay_payment(
    State(ledger): State<Arc<PaymentLedger>>,
    Path(payment_id): Path<PaymentId>,
) -> Result<Json<StatusResponse>> {
    let status = ledger.pay(&payment_id).await?;
    let message = match status {
        PaymentStatus::Paid => "Payment successful",
        _ => "Payment failed validation",
    };

    Ok(Json(StatusResponse {
        message: message.to_string(),
        payment_id,
        status,
    }))
}

pub async fn revert_payment(
    State(ledger): State<Arc<PaymentLedger>>,
    Path(payment_id): Path<PaymentId>,
) -> Result<Json<StatusResponse>> {
    let status = ledger.revert(&payment_id).await?;

    Ok(Json(StatusResponse {
        message: format!("Payment reverted to {}", status),
        payment_id,
        status,
    }))
}
