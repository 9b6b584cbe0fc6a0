//! main file for the server

mod catalog;
mod controller;
mod device;
pub mod model;
mod state;

use actix_web::{middleware::Logger, web, App, HttpServer};
use crate::server::device::PaymentDevice;
use crate::server::model::config::ServerConfig;
use crate::server::state::AppState;

/// Run the server
pub async fn run(ServerConfig { addr, device_base_url }: ServerConfig) -> std::io::Result<()> {
    let state = web::Data::new(AppState::new(PaymentDevice::new(device_base_url)));
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(controller::configure)
    })
        .bind(addr)?
        .run()
        .await
}
