//! Defect record server - main entry point.
//!
//! Starts the Actix-web server with the form pages, the JSON API and middleware.

use actix_cors::Cors;
use actix_web::{App, HttpServer, http::header, web};
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use defect_record_lib::api::{self, ApiDoc};
use defect_record_lib::config::Config;
use defect_record_lib::db::DbPool;
use defect_record_lib::{middleware, pages};

/// Perform health check (for Docker healthcheck).
fn health_check() -> bool {
    Config::from_env().is_ok()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // --health-check is used by the container HEALTHCHECK
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|arg| arg == "--health-check") {
        dotenvy::dotenv().ok();
        std::process::exit(if health_check() { 0 } else { 1 });
    }

    dotenvy::dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            error!("");
            error!("Please check your environment variables:");
            error!("  - RUST_ENV must be set to 'development' or 'production'");
            error!("  - In production, DATABASE_URL must not match the development default");
            std::process::exit(1);
        }
    };

    info!("========================================");
    info!("  Defect Record Server");
    info!("  Environment: {}", config.environment);
    info!("========================================");

    if config.is_development() {
        warn!("Running in DEVELOPMENT mode - do not use in production!");
    }
    if config.database.url.is_none() {
        warn!("DATABASE_URL is not set; defect submissions will fail until it is configured");
    }

    let pool = DbPool::new(config.database.clone());

    // Connect eagerly so problems show up in the startup log. A failure here is
    // not fatal: the first request that needs the database tries again.
    match pool.ensure_connected().await {
        Ok(_) => info!("Database ready"),
        Err(e) => warn!("Database not reachable at startup: {}", e),
    }

    let bind_address = config.bind_address();
    let max_form_size = config.max_form_size;
    let is_development = config.is_development();

    let worker_count = if is_development {
        info!(
            "Starting server at http://{} (4 workers - development mode)",
            bind_address
        );
        4
    } else {
        let cpus = num_cpus::get();
        info!(
            "Starting server at http://{} ({} workers)",
            bind_address, cpus
        );
        cpus
    };

    let server = HttpServer::new(move || {
        let cors = if is_development {
            Cors::default()
                .allowed_origin("http://localhost:3000")
                .allowed_origin("http://127.0.0.1:3000")
                .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
                .max_age(3600)
        } else {
            // Same-origin only
            Cors::default()
                .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
                .max_age(3600)
        };

        App::new()
            .wrap(cors)
            .wrap(middleware::RequestLogger)
            .app_data(web::Data::new(pool.clone()))
            .app_data(pages::form_config(max_form_size))
            .configure(pages::configure_routes)
            .service(
                web::scope("/api/v1")
                    .configure(api::configure_health_routes)
                    .configure(api::configure_defect_routes),
            )
            .service(
                SwaggerUi::new("/api/docs/{_:.*}").url("/api/openapi.json", ApiDoc::openapi()),
            )
    });

    server
        .workers(worker_count)
        .bind(&bind_address)?
        .run()
        .await
}
