use crate::server::model::ErrorResponse;
use actix_web::http::StatusCode;
use actix_web::{error, HttpResponse};
use derive_more::{Display, Error};

#[derive(Debug, Display, Error)]
pub(crate) enum CustomError {
    #[display("{reason}")]
    InvalidPayload { reason: String },
    #[display("Hardware error: {reason}")]
    Hardware { reason: String },
}

impl error::ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match *self {
            CustomError::InvalidPayload { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            CustomError::Hardware { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            detail: self.to_string(),
        })
    }
}
