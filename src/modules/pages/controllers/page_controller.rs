use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

const INDEX_HTML: &str = include_str!("../../../../static/index.html");
const PROCESSING_HTML: &str = include_str!("../../../../static/processing_subs.html");

#[derive(Debug, Deserialize)]
pub struct SuccessQuery {
    pub subscription_id: Option<String>,
}

/// Landing page
/// GET /
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}

/// Confirmation page the provider redirects the buyer back to after approval.
/// GET /success?subscription_id=
///
/// Only echoes the id from the query string; the subscription's actual state
/// stays with the provider and is not verified here.
pub async fn success(query: web::Query<SuccessQuery>) -> HttpResponse {
    let subscription_id = query
        .subscription_id
        .as_deref()
        .map(escape_html)
        .unwrap_or_else(|| "unknown".to_string());

    let body = format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
           <meta charset=\"utf-8\">\n\
           <title>Subscription confirmed</title>\n\
           <style>body {{ font-family: system-ui, sans-serif; max-width: 640px; margin: 4rem auto; padding: 0 1rem; color: #222; text-align: center; }}</style>\n\
         </head>\n\
         <body>\n\
           <h1>Subscription confirmed</h1>\n\
           <p>Your subscription <strong>{}</strong> was approved.</p>\n\
           <p><a href=\"/\">Back to the store</a></p>\n\
         </body>\n\
         </html>\n",
        subscription_id
    );

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

/// Page shown when the buyer cancels or abandons the approval flow
/// GET /processing_subs.html
pub async fn processing_subs() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(PROCESSING_HTML)
}

// The id is echoed straight from the query string, so it gets escaped before
// landing in markup.
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Configure page routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/success", web::get().to(success))
        .route("/processing_subs.html", web::get().to(processing_subs));
}
