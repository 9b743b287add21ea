#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use payments_lifecycle::application::ledger::PaymentLedger;
use payments_lifecycle::infrastructure::in_memory::InMemoryPaymentStore;
use payments_lifecycle::interfaces::http::http_serve;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tower::ServiceExt;

pub fn in_memory_ledger() -> Arc<PaymentLedger> {
    Arc::new(PaymentLedger::new(Box::new(InMemoryPaymentStore::new())))
}

pub fn test_app() -> Router {
    http_serve::router(in_memory_ledger())
}

pub async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Vec<u8>) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

pub async fn post_json<T: DeserializeOwned>(app: &Router, uri: &str) -> (StatusCode, T) {
    let (status, bytes) = send(app, Method::POST, uri).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

pub async fn get_json<T: DeserializeOwned>(app: &Router, uri: &str) -> (StatusCode, T) {
    let (status, bytes) = send(app, Method::GET, uri).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}
