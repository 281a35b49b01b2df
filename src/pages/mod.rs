//! Server-rendered pages: the defect form and its confirmation.

pub mod confirmation;
pub mod form;
pub mod html;

use actix_web::web;

pub use form::{DefectForm, FieldErrors, REAL_RESULTS_PLACEHOLDER};

/// Body limit for form submissions. Free-text fields have no length bound
/// of their own, so this is the only cap on them.
pub fn form_config(limit: usize) -> web::FormConfig {
    web::FormConfig::default().limit(limit)
}

/// Configure page routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(form::new_defect_page)
        .service(form::submit_defect)
        .service(confirmation::defect_created);
}
