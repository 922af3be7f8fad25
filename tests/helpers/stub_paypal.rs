use std::sync::atomic::{AtomicBool, AtomicU16, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse};
use base64::prelude::*;
use serde_json::json;

use paybridge::gateway::PayPalClient;

pub const CLIENT_ID: &str = "test-client";
pub const CLIENT_SECRET: &str = "test-secret";
pub const ACCESS_TOKEN: &str = "stub-access-token";

/// Mutable behavior knobs for the stub PayPal API.
///
/// Shared between the test body and the stub's handlers, so tests can flip
/// failure modes and count the calls that actually reached the provider.
pub struct StubState {
    /// When false the token endpoint answers 500
    pub token_ok: AtomicBool,
    /// Status the order-create endpoint answers with
    pub order_create_status: AtomicU16,
    /// Calls that reached any payment/billing endpoint (everything but the token)
    pub payment_calls: AtomicUsize,
    /// Calls that reached the plan-activation endpoint
    pub activate_calls: AtomicUsize,
    /// Status the plan reports; activation flips it to ACTIVE
    pub plan_status: Mutex<String>,
    /// When false the subscription response carries no approve link
    pub include_approve_link: AtomicBool,
    /// When true the capture response carries no purchase units
    pub empty_purchase_units: AtomicBool,
}

impl StubState {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            token_ok: AtomicBool::new(true),
            order_create_status: AtomicU16::new(201),
            payment_calls: AtomicUsize::new(0),
            activate_calls: AtomicUsize::new(0),
            plan_status: Mutex::new("CREATED".to_string()),
            include_approve_link: AtomicBool::new(true),
            empty_purchase_units: AtomicBool::new(false),
        })
    }
}

/// Spin up the stub PayPal API on a loopback port
pub fn start(state: Arc<StubState>) -> actix_test::TestServer {
    actix_test::start(move || {
        let state = state.clone();
        App::new()
            .app_data(web::Data::from(state))
            .route("/v1/oauth2/token", web::post().to(token))
            .route("/v2/checkout/orders", web::post().to(create_order))
            .route(
                "/v2/checkout/orders/{order_id}/capture",
                web::post().to(capture_order),
            )
            .route(
                "/v2/payments/captures/{capture_id}/refund",
                web::post().to(refund_capture),
            )
            .route("/v1/catalogs/products", web::post().to(create_product))
            .route("/v1/billing/plans", web::post().to(create_plan))
            .route("/v1/billing/plans/{plan_id}", web::get().to(get_plan))
            .route(
                "/v1/billing/plans/{plan_id}/activate",
                web::post().to(activate_plan),
            )
            .route(
                "/v1/billing/subscriptions",
                web::post().to(create_subscription),
            )
    })
}

pub fn base_url(srv: &actix_test::TestServer) -> String {
    format!("http://{}", srv.addr())
}

/// A real PayPalClient pointed at the stub
pub fn client(srv: &actix_test::TestServer) -> PayPalClient {
    PayPalClient::new(
        CLIENT_ID.to_string(),
        CLIENT_SECRET.to_string(),
        Some(base_url(srv)),
        "http://localhost:8080".to_string(),
    )
}

fn basic_auth_ok(req: &HttpRequest) -> bool {
    let expected = format!(
        "Basic {}",
        BASE64_STANDARD.encode(format!("{}:{}", CLIENT_ID, CLIENT_SECRET))
    );
    req.headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        == Some(expected.as_str())
}

fn bearer_ok(req: &HttpRequest) -> bool {
    let expected = format!("Bearer {}", ACCESS_TOKEN);
    req.headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        == Some(expected.as_str())
}

async fn token(state: web::Data<StubState>, req: HttpRequest) -> HttpResponse {
    if !basic_auth_ok(&req) {
        return HttpResponse::Unauthorized().json(json!({ "error": "invalid_client" }));
    }

    if !state.token_ok.load(Ordering::SeqCst) {
        return HttpResponse::InternalServerError()
            .json(json!({ "error": "server_error" }));
    }

    HttpResponse::Ok().json(json!({
        "access_token": ACCESS_TOKEN,
        "token_type": "Bearer",
        "expires_in": 32400
    }))
}

async fn create_order(state: web::Data<StubState>, req: HttpRequest) -> HttpResponse {
    state.payment_calls.fetch_add(1, Ordering::SeqCst);
    if !bearer_ok(&req) {
        return HttpResponse::Unauthorized().finish();
    }

    let status = state.order_create_status.load(Ordering::SeqCst);
    if status == 200 || status == 201 {
        return HttpResponse::Created().json(json!({
            "id": "ORD-1001",
            "status": "CREATED"
        }));
    }

    let code = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(code).json(json!({
        "name": "UNPROCESSABLE_ENTITY",
        "message": "The requested action could not be performed."
    }))
}

async fn capture_order(
    state: web::Data<StubState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    state.payment_calls.fetch_add(1, Ordering::SeqCst);
    if !bearer_ok(&req) {
        return HttpResponse::Unauthorized().finish();
    }

    if state.empty_purchase_units.load(Ordering::SeqCst) {
        return HttpResponse::Created().json(json!({
            "id": path.into_inner(),
            "status": "COMPLETED",
            "purchase_units": []
        }));
    }

    HttpResponse::Created().json(json!({
        "id": path.into_inner(),
        "status": "COMPLETED",
        "purchase_units": [
            {
                "payments": {
                    "captures": [
                        { "id": "T1", "status": "COMPLETED" }
                    ]
                }
            }
        ]
    }))
}

async fn refund_capture(
    state: web::Data<StubState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    state.payment_calls.fetch_add(1, Ordering::SeqCst);
    if !bearer_ok(&req) {
        return HttpResponse::Unauthorized().finish();
    }

    let capture_id = path.into_inner();
    HttpResponse::Created().json(json!({
        "id": format!("REF-{}", capture_id),
        "status": "COMPLETED"
    }))
}

async fn create_product(state: web::Data<StubState>, req: HttpRequest) -> HttpResponse {
    state.payment_calls.fetch_add(1, Ordering::SeqCst);
    if !bearer_ok(&req) {
        return HttpResponse::Unauthorized().finish();
    }

    HttpResponse::Created().json(json!({
        "id": "PROD-1",
        "name": "Premium Streaming Service",
        "type": "SERVICE",
        "create_time": "2024-01-01T00:00:00Z"
    }))
}

async fn create_plan(state: web::Data<StubState>, req: HttpRequest) -> HttpResponse {
    state.payment_calls.fetch_add(1, Ordering::SeqCst);
    if !bearer_ok(&req) {
        return HttpResponse::Unauthorized().finish();
    }

    HttpResponse::Created().json(json!({
        "id": "PL1",
        "status": state.plan_status.lock().unwrap().clone()
    }))
}

async fn get_plan(
    state: web::Data<StubState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    state.payment_calls.fetch_add(1, Ordering::SeqCst);
    if !bearer_ok(&req) {
        return HttpResponse::Unauthorized().finish();
    }

    HttpResponse::Ok().json(json!({
        "id": path.into_inner(),
        "name": "Monthly Plan",
        "status": state.plan_status.lock().unwrap().clone(),
        "billing_cycles": [
            {
                "frequency": { "interval_unit": "MONTH", "interval_count": 1 },
                "tenure_type": "REGULAR",
                "sequence": 1,
                "total_cycles": 0,
                "pricing_scheme": {
                    "fixed_price": { "value": "10", "currency_code": "USD" }
                }
            }
        ]
    }))
}

async fn activate_plan(state: web::Data<StubState>, req: HttpRequest) -> HttpResponse {
    state.payment_calls.fetch_add(1, Ordering::SeqCst);
    if !bearer_ok(&req) {
        return HttpResponse::Unauthorized().finish();
    }

    state.activate_calls.fetch_add(1, Ordering::SeqCst);
    *state.plan_status.lock().unwrap() = "ACTIVE".to_string();

    HttpResponse::NoContent().finish()
}

async fn create_subscription(state: web::Data<StubState>, req: HttpRequest) -> HttpResponse {
    state.payment_calls.fetch_add(1, Ordering::SeqCst);
    if !bearer_ok(&req) {
        return HttpResponse::Unauthorized().finish();
    }

    let mut links = vec![json!({
        "href": "https://stub.test/subscriptions/I-SUB1",
        "rel": "self"
    })];
    if state.include_approve_link.load(Ordering::SeqCst) {
        links.push(json!({
            "href": "https://stub.test/approve/I-SUB1",
            "rel": "approve"
        }));
        links.push(json!({
            "href": "https://stub.test/cancel/I-SUB1",
            "rel": "cancel"
        }));
    }

    HttpResponse::Created().json(json!({
        "id": "I-SUB1",
        "status": "APPROVAL_PENDING",
        "links": links
    }))
}
