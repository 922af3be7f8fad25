use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use paybridge::billing::BillingService;
use paybridge::config::Config;
use paybridge::gateway::{BillingProvider, PayPalClient};
use paybridge::middleware::RequestId;
use paybridge::orders::OrderService;
use paybridge::{billing, health, orders, pages};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paybridge=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    tracing::info!("Starting Paybridge payment gateway facade");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("PayPal API: {}", config.paypal.base_url);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Construct the provider client and the services that share it
    let provider: Arc<dyn BillingProvider> = Arc::new(PayPalClient::new(
        config.paypal.client_id.clone(),
        config.paypal.client_secret.clone(),
        Some(config.paypal.base_url.clone()),
        config.app.public_url.clone(),
    ));
    let order_service = Arc::new(OrderService::new(provider.clone()));
    let billing_service = Arc::new(BillingService::new(provider));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(order_service.clone()))
            .app_data(web::Data::new(billing_service.clone()))
            .wrap(TracingLogger::default())
            .wrap(RequestId)
            .wrap(Cors::permissive())
            .configure(pages::configure)
            .configure(orders::configure)
            .configure(billing::configure)
            .configure(health::configure)
    })
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}
