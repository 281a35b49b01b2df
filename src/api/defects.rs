//! Defect API handlers.

use actix_web::{HttpResponse, post, web};

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{Defect, NewDefect};
use crate::services::create_defect;

/// Create a defect.
///
/// Stores the payload as given and returns the stored record with its
/// generated identifier.
#[utoipa::path(
    post,
    path = "/api/v1/defects",
    tag = "Defects",
    request_body = NewDefect,
    responses(
        (status = 201, description = "Defect created", body = Defect),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 500, description = "Insert failed", body = crate::error::ErrorResponse),
        (status = 503, description = "Database unavailable", body = crate::error::ErrorResponse),
    )
)]
#[post("/defects")]
pub async fn create(pool: web::Data<DbPool>, body: web::Json<NewDefect>) -> AppResult<HttpResponse> {
    let defect = create_defect(pool.get_ref(), body.into_inner()).await?;

    Ok(HttpResponse::Created()
        .insert_header((actix_web::http::header::LOCATION, defect.confirmation_path()))
        .json(defect))
}

/// Configure defect routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create);
}
