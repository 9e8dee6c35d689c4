//! HTTP handlers of the patient list server.

use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::components::AlertView;

pub mod assets;
pub mod patients;

/// Renders `template` into an HTML response, logging failures.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Maps flash message levels onto alert CSS classes.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

pub fn alerts(flash_messages: &IncomingFlashMessages) -> Vec<AlertView> {
    flash_messages
        .iter()
        .map(|f| AlertView {
            message: f.content().to_string(),
            level: alert_level_to_str(&f.level()),
        })
        .collect()
}
