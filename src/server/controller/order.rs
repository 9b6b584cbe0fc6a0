use crate::server::catalog;
use crate::server::model::order::{Order, PostOrderResponse};
use crate::server::model::STATUS_OK;
use actix_web::{get, post, web, Responder};
use log::info;

#[post("/api/orders")]
/// accept an order, nothing is stored
pub(crate) async fn post_orders(body: web::Json<Order>) -> impl Responder {
    let order = body.into_inner();
    info!(
        "order received, lines={}, amount={}, payment_type={}",
        order.items.len(),
        order.amount,
        order.payment_type
    );
    web::Json(PostOrderResponse {
        status: STATUS_OK,
        received: order,
    })
}

#[get("/api/kitchen/orders")]
pub(crate) async fn get_kitchen_orders() -> impl Responder {
    web::Json(catalog::kitchen_orders())
}

#[get("/api/orders/all")]
pub(crate) async fn get_all_orders() -> impl Responder {
    web::Json(catalog::order_summaries())
}
