// Token acquisition failures must surface as Auth errors and must block
// every dependent operation before any payment endpoint is touched.

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::atomic::Ordering;

use helpers::stub_paypal::{self, StubState};
use paybridge::core::AppError;
use paybridge::gateway::{BillingProvider, PayPalClient};

#[actix_web::test]
async fn test_token_failure_blocks_every_operation() {
    let state = StubState::new();
    state.token_ok.store(false, Ordering::SeqCst);
    let srv = stub_paypal::start(state.clone());
    let client = stub_paypal::client(&srv);

    assert!(matches!(
        client.create_order().await.unwrap_err(),
        AppError::Auth(_)
    ));
    assert!(matches!(
        client.capture_order("ORD-1001").await.unwrap_err(),
        AppError::Auth(_)
    ));
    assert!(matches!(
        client.refund_capture("T1").await.unwrap_err(),
        AppError::Auth(_)
    ));
    assert!(matches!(
        client.create_product().await.unwrap_err(),
        AppError::Auth(_)
    ));
    assert!(matches!(
        client.create_plan("PROD-1").await.unwrap_err(),
        AppError::Auth(_)
    ));
    assert!(matches!(
        client.fetch_plan("PL1").await.unwrap_err(),
        AppError::Auth(_)
    ));
    assert!(matches!(
        client.activate_plan("PL1").await.unwrap_err(),
        AppError::Auth(_)
    ));
    assert!(matches!(
        client.create_subscription("PL1").await.unwrap_err(),
        AppError::Auth(_)
    ));

    // No payment endpoint may be hit after a token failure
    assert_eq!(state.payment_calls.load(Ordering::SeqCst), 0);
}

#[actix_web::test]
async fn test_auth_error_names_the_token_status() {
    let state = StubState::new();
    state.token_ok.store(false, Ordering::SeqCst);
    let srv = stub_paypal::start(state);
    let client = stub_paypal::client(&srv);

    let err = client.create_order().await.unwrap_err();
    assert!(err.to_string().contains("500"), "got: {}", err);
}

#[actix_web::test]
async fn test_wrong_credentials_are_an_auth_error() {
    let state = StubState::new();
    let srv = stub_paypal::start(state.clone());

    let client = PayPalClient::new(
        stub_paypal::CLIENT_ID.to_string(),
        "wrong-secret".to_string(),
        Some(stub_paypal::base_url(&srv)),
        "http://localhost:8080".to_string(),
    );

    let err = client.create_order().await.unwrap_err();
    assert!(matches!(err, AppError::Auth(_)));
    assert!(err.to_string().contains("401"), "got: {}", err);
    assert_eq!(state.payment_calls.load(Ordering::SeqCst), 0);
}
