use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::SyncError;

#[derive(Debug)]
pub enum ApiError {
    Sync(SyncError),
}

impl From<SyncError> for ApiError {
    fn from(error: SyncError) -> Self {
        ApiError::Sync(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Sync(error) => {
                (StatusCode::INTERNAL_SERVER_ERROR, error.to_string()).into_response()
            }
        }
    }
}
