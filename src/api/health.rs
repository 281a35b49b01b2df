//! Health check endpoints.

use actix_web::{HttpResponse, get, web};
use chrono::Utc;
use sea_orm::ConnectionTrait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::db::DbPool;

/// Health check response.
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    status: &'static str,
    timestamp: String,
}

/// Readiness check response.
#[derive(Serialize, ToSchema)]
pub struct ReadyResponse {
    status: &'static str,
    database: &'static str,
}

/// Server info response.
#[derive(Serialize, ToSchema)]
pub struct ServerInfoResponse {
    name: &'static str,
    version: &'static str,
}

/// Health check endpoint.
///
/// Returns 200 if the service is running.
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Readiness check endpoint.
///
/// Returns 200 if the database is reachable, connecting first if needed.
#[utoipa::path(
    get,
    path = "/api/v1/ready",
    tag = "Health",
    responses(
        (status = 200, description = "Service is ready", body = ReadyResponse),
        (status = 503, description = "Service unavailable")
    )
)]
#[get("/ready")]
pub async fn ready(pool: web::Data<DbPool>) -> HttpResponse {
    let conn = match pool.ensure_connected().await {
        Ok(conn) => conn,
        Err(e) => {
            tracing::warn!("Readiness check could not connect: {}", e);
            return not_ready();
        }
    };

    let stmt =
        sea_orm::Statement::from_string(sea_orm::DatabaseBackend::Postgres, "SELECT 1".to_owned());
    match conn.query_one_raw(stmt).await {
        Ok(_) => HttpResponse::Ok().json(ReadyResponse {
            status: "ready",
            database: "connected",
        }),
        Err(_) => not_ready(),
    }
}

fn not_ready() -> HttpResponse {
    HttpResponse::ServiceUnavailable().json(serde_json::json!({
        "error": "NOT_READY",
        "message": "Database connection failed"
    }))
}

/// Server name and version.
#[utoipa::path(
    get,
    path = "/api/v1/info",
    tag = "Health",
    responses(
        (status = 200, description = "Server information", body = ServerInfoResponse)
    )
)]
#[get("/info")]
pub async fn info() -> HttpResponse {
    HttpResponse::Ok().json(ServerInfoResponse {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Configure health routes.
pub fn configure_health_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health).service(ready).service(info);
}
