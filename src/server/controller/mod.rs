//! http handlers of the kiosk api

#[cfg(test)]
macro_rules! init_app {
    ($device_base_url:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new(crate::server::state::AppState::new(
                    crate::server::device::PaymentDevice::new($device_base_url),
                )))
                .configure(crate::server::controller::configure),
        )
        .await
    };
}

pub(crate) mod error;
mod menu;
mod order;
mod payment;
mod table;

use actix_web::web;
use crate::server::controller::error::CustomError;

/// Register every kiosk route plus the shared extractor configs.
pub(crate) fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .service(menu::root)
        .service(menu::get_menu)
        .service(order::post_orders)
        .service(order::get_kitchen_orders)
        .service(order::get_all_orders)
        .service(table::get_tables)
        .service(table::post_free_table)
        .service(payment::post_payment)
        .service(payment::post_query);
}

/// Bodies that fail to parse come back as 422 with the parser's message.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| {
            CustomError::InvalidPayload {
                reason: err.to_string(),
            }
            .into()
        })
}

/// Path segments that fail to parse, e.g. a non-numeric table id, are 422 too.
fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        CustomError::InvalidPayload {
            reason: err.to_string(),
        }
        .into()
    })
}
