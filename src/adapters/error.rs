use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, warn};

use crate::{adapters::dto::product_dto::ErrorResponse, application::error::ApplicationError};

impl ApplicationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
            ApplicationError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApplicationError::Corrupt(_) | ApplicationError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn log(&self) {
        match self {
            ApplicationError::NotFound(msg) => warn!("Resource not found: {}", msg),
            ApplicationError::BadRequest(msg) => warn!("Bad request: {}", msg),
            ApplicationError::Corrupt(msg) => error!("Corrupt data: {}", msg),
            ApplicationError::InternalError(msg) => error!("Internal server error: {}", msg),
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        self.log();

        let status = self.status_code();
        let message = self.message().to_string();

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
