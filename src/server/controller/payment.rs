use crate::server::controller::error::CustomError;
use crate::server::device::{describe, DeviceOperation};
use crate::server::state::AppState;
use actix_web::{post, web, Responder};
use log::warn;
use serde_json::Value;

#[post("/api/payment")]
/// start a payment on the terminal
pub(crate) async fn post_payment(
    body: web::Json<Value>,
    data: web::Data<AppState>,
) -> Result<impl Responder, CustomError> {
    relay(&data, DeviceOperation::Payment, &body).await
}

#[post("/api/query")]
/// ask the terminal how a started payment is doing
pub(crate) async fn post_query(
    body: web::Json<Value>,
    data: web::Data<AppState>,
) -> Result<impl Responder, CustomError> {
    relay(&data, DeviceOperation::Query, &body).await
}

async fn relay(
    data: &AppState,
    op: DeviceOperation,
    payload: &Value,
) -> Result<web::Json<Value>, CustomError> {
    match data.get_device().forward(op, payload).await {
        Ok(reply) => Ok(web::Json(reply)),
        Err(e) => {
            let reason = describe(&e);
            warn!("{:?} via device failed, {}", op, reason);
            Err(CustomError::Hardware { reason })
        }
    }
}
