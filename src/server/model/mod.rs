use serde::Serialize;

pub(crate) mod config;
pub(crate) mod item;
pub(crate) mod order;
pub(crate) mod table;

pub(crate) const STATUS_OK: &str = "ok";

#[derive(Debug, Serialize)]
pub(crate) struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ErrorResponse {
    pub detail: String,
}
