use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::modules::billing::services::billing_service::BillingService;

#[derive(Debug, Deserialize)]
pub struct CreatePlanQuery {
    pub product_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ActivatePlanQuery {
    pub plan_id: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateSubscriptionQuery {
    pub plan_id: String,
}

/// Create a catalog product
/// POST /create-product
/// Returns the raw provider response
pub async fn create_product(
    service: web::Data<Arc<BillingService>>,
) -> Result<HttpResponse, AppError> {
    let product = service.create_product().await?;

    Ok(HttpResponse::Ok().json(product))
}

/// Create a monthly billing plan for a product
/// POST /create-plan?product_id=
pub async fn create_plan(
    service: web::Data<Arc<BillingService>>,
    query: web::Query<CreatePlanQuery>,
) -> Result<HttpResponse, AppError> {
    let plan = service.create_plan(&query.product_id).await?;

    Ok(HttpResponse::Ok().json(plan))
}

/// Activate a billing plan
/// POST /activate-plan?plan_id=
pub async fn activate_plan(
    service: web::Data<Arc<BillingService>>,
    query: web::Query<ActivatePlanQuery>,
) -> Result<HttpResponse, AppError> {
    let outcome = service.activate_plan(&query.plan_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": outcome.message() })))
}

/// Create a subscription to a plan
/// POST /create-subscription?plan_id=
pub async fn create_subscription(
    service: web::Data<Arc<BillingService>>,
    query: web::Query<CreateSubscriptionQuery>,
) -> Result<HttpResponse, AppError> {
    let subscription = service.create_subscription(&query.plan_id).await?;

    Ok(HttpResponse::Ok().json(subscription))
}

/// Configure billing routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/create-product", web::post().to(create_product))
        .route("/create-plan", web::post().to(create_plan))
        .route("/activate-plan", web::post().to(activate_plan))
        .route("/create-subscription", web::post().to(create_subscription));
}
