//! Confirmation page shown after a defect is created.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, get, web};

use super::html::{escape, html_response, page};

/// Render the confirmation for the given identifier. Nothing is read back
/// from storage; the identifier is shown exactly as it arrived.
pub fn render_confirmation_page(id: &str) -> String {
    let body = format!(
        "<section><div class=\"card\">\n\
         <h1>Defect created <span class=\"id\">{}</span></h1>\n\
         <p><a class=\"button\" href=\"/\">Go Back</a></p>\n\
         </div></section>",
        escape(id)
    );
    page("Defect created", &body)
}

#[get("/defect/{id}")]
pub async fn defect_created(path: web::Path<String>) -> HttpResponse {
    html_response(StatusCode::OK, render_confirmation_page(&path.into_inner()))
}
