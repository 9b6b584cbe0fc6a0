use crate::server::catalog;
use crate::server::model::MessageResponse;
use actix_web::{get, web, Responder};

#[get("/")]
pub(crate) async fn root() -> impl Responder {
    web::Json(MessageResponse {
        message: "Backend işləyir!",
    })
}

#[get("/api/menu")]
/// list the menu
pub(crate) async fn get_menu() -> impl Responder {
    web::Json(catalog::menu())
}
