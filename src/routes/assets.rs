use actix_web::{HttpResponse, Responder, get, web};
use tera::Tera;

use crate::components::styles::Stylesheet;

#[get("/assets/css/{file}")]
pub async fn stylesheet(file: web::Path<String>, tera: web::Data<Tera>) -> impl Responder {
    let Some(sheet) = Stylesheet::from_file_name(&file) else {
        return HttpResponse::NotFound().finish();
    };

    match sheet.render(&tera) {
        Ok(css) => HttpResponse::Ok()
            .content_type("text/css; charset=utf-8")
            .body(css),
        Err(err) => {
            log::error!("Failed to render stylesheet {}: {err}", sheet.file_name());
            HttpResponse::InternalServerError().finish()
        }
    }
}
