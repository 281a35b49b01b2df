//! API endpoint modules.

pub mod defects;
pub mod health;
pub mod openapi;

pub use defects::configure_routes as configure_defect_routes;
pub use health::configure_health_routes;
pub use openapi::ApiDoc;
