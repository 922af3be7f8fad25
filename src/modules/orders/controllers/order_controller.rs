use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::orders::services::order_service::OrderService;

/// Create a payment order
/// POST /create-order
pub async fn create_order(
    service: web::Data<Arc<OrderService>>,
) -> Result<HttpResponse, AppError> {
    let order = service.create_order().await?;

    Ok(HttpResponse::Ok().json(order))
}

/// Capture an order's payment
/// POST /capture-order/{order_id}
pub async fn capture_order(
    service: web::Data<Arc<OrderService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();
    let capture = service.capture_order(&order_id).await?;

    Ok(HttpResponse::Ok().json(capture))
}

/// Refund a captured transaction
/// POST /refund-transaction/{capture_id}
pub async fn refund_transaction(
    service: web::Data<Arc<OrderService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let capture_id = path.into_inner();
    let refund = service.refund(&capture_id).await?;

    Ok(HttpResponse::Ok().json(refund))
}

/// Configure order routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/create-order", web::post().to(create_order))
        .route("/capture-order/{order_id}", web::post().to(capture_order))
        .route(
            "/refund-transaction/{capture_id}",
            web::post().to(refund_transaction),
        );
}
