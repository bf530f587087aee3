use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use headway_optimizer::{
    parsers::arrivals_csv::ParseArrivalsError, solver::solver_error::SolverError,
};
use tracing::error;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    InternalServerError(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        ApiError::InternalServerError(error.to_string())
    }
}

impl From<ParseArrivalsError> for ApiError {
    fn from(error: ParseArrivalsError) -> Self {
        ApiError::BadRequest(error.to_string())
    }
}

impl From<SolverError> for ApiError {
    fn from(error: SolverError) -> Self {
        ApiError::InternalServerError(error.to_string())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(error: tokio::task::JoinError) -> Self {
        ApiError::InternalServerError(error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InternalServerError(message) => {
                error!("{message}");
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
        }
    }
}
