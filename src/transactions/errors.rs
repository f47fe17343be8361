use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum TransactionsApiError {
    InvalidMonth,
    MissingMonth,
    SeedFailed,
}

impl TransactionsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::InvalidMonth => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Invalid month provided".to_string(),
            },
            Self::MissingMonth => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "month is required.".to_string(),
            },
            Self::SeedFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to initialize database.".to_string(),
            },
        }
    }
}
