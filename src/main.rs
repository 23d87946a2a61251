use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mount_payments::config::{AppConfig, Config};
use mount_payments::modules::breakdowns::controllers::configure_breakdown_routes;
use mount_payments::modules::health::controllers::health_controller;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mount_payments=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    tracing::info!("Starting Mount Payments service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());
    tracing::info!(
        "Fee tier table loaded with {} tiers, promotion active: {}",
        config.pricing.fee_tiers.len(),
        config.pricing.promotion.is_active
    );

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let workers = config.server.workers;
    let pricing = web::Data::new(config.pricing.clone());
    let app_config = config.app.clone();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(build_cors(&app_config))
            .app_data(pricing.clone())
            .configure(health_controller::configure)
            .configure(configure_breakdown_routes)
            .route("/", web::get().to(index))
    })
    .workers(workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated with an error")
}

fn build_cors(app: &AppConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST"])
        .allow_any_header()
        .max_age(3600);

    if app.allowed_origins.is_empty() {
        // Development default; production sets ALLOWED_ORIGINS explicitly
        cors = cors.allow_any_origin();
    } else {
        for origin in &app.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "Mount Payments",
        "version": "0.1.0",
        "status": "running"
    }))
}
