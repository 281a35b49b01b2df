//! Shared page layout and escaping for server-rendered views.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; background: #f4f4f8; margin: 0; }
main, section { max-width: 600px; margin: 0 auto; padding: 48px 0; }
.card { background: #fffafd; padding: 48px; border-radius: 6px; }
h1 { font-size: 1.875rem; margin: 0; }
h1 .id { color: #8b93ff; word-break: break-all; }
.subtitle { font-size: 1.25rem; margin: 0 0 32px; }
.row { display: flex; gap: 28px; align-items: flex-start; }
.field { display: flex; flex-direction: column; gap: 8px; margin-bottom: 32px; }
label { font-weight: 500; }
input, select, textarea { font: inherit; padding: 8px 12px; border: 1px solid #d4d4dc; border-radius: 6px; }
textarea { min-height: 80px; }
.error { color: #dc2626; font-size: 0.875rem; }
.dropzone { display: flex; flex-direction: column; align-items: center; justify-content: center;
  height: 16rem; border: 2px dashed #d1d5db; border-radius: 8px; background: #fff; cursor: pointer; }
.dropzone strong { color: #8b93ff; }
.dropzone input { display: none; }
.hint { font-size: 0.75rem; color: #6b7280; }
button, .button { font: inherit; background: #18181b; color: #fff; border: 0; border-radius: 6px;
  padding: 10px 16px; cursor: pointer; text-decoration: none; display: inline-block; }
button:disabled { opacity: 0.5; cursor: default; }
form.submitting input, form.submitting select, form.submitting textarea,
form.submitting .dropzone { pointer-events: none; opacity: 0.5; }
"#;

/// Escape text for use in HTML element content or quoted attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap body markup in the full document.
pub fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        STYLE,
        body
    )
}

/// Build an HTML response with the given status.
pub fn html_response(status: StatusCode, document: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(document)
}
