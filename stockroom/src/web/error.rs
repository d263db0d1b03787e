use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use stockroom_api_types::result::JsonError;
use stockroom_db::StoreError;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Store(#[from] StoreError),
    #[error("{0}")]
    Json(#[from] JsonRejection),
    #[error("{0}")]
    Path(#[from] PathRejection),
    #[error("Not found")]
    RouteNotFound,
}

impl ApiError {
    fn as_status_code(&self) -> StatusCode {
        match self {
            ApiError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            // kept on 404 so existing clients see the same status as before
            ApiError::Store(StoreError::InsufficientStock { .. }) => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::InvalidQuantity(_)) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::Db(_) | StoreError::Timeout(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Json(rejection) => rejection.status(),
            ApiError::Path(rejection) => rejection.status(),
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
        }
    }

    /// Message shown to the caller. Storage failures never leak their cause.
    fn detail(&self) -> String {
        match self {
            ApiError::Store(StoreError::InsufficientStock { .. }) => {
                "Insufficient quantity in inventory".to_string()
            }
            ApiError::Store(e) if !e.is_domain() => "Internal Server Error".to_string(),
            ApiError::Json(rejection) => rejection.body_text(),
            ApiError::Path(rejection) => rejection.body_text(),
            e => e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.as_status_code();
        if status.is_server_error() {
            error!("error {self:?}");
        } else {
            info!("request rejected: {self}");
        }
        let body = JsonError {
            status: status.as_u16(),
            detail: self.detail(),
        };
        (status, Json(body)).into_response()
    }
}
