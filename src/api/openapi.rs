//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, error, models};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Defect Record Server",
        version = "0.1.0",
        description = "Capture defect reports and confirm their creation"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        api::health::health,
        api::health::ready,
        api::health::info,
        api::defects::create,
    ),
    components(
        schemas(
            error::ErrorResponse,
            api::health::HealthResponse,
            api::health::ReadyResponse,
            api::health::ServerInfoResponse,
            models::KindOfTest,
            models::Classification,
            models::NewDefect,
            models::Defect,
        )
    ),
    tags(
        (name = "Health", description = "Liveness and readiness"),
        (name = "Defects", description = "Defect creation")
    )
)]
pub struct ApiDoc;
