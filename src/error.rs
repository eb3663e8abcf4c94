use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;

use crate::response::{ApiResponse, Meta};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("ORM error")]
    OrmError(#[source] DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail))
            | Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                AppError::ConstraintViolation(detail)
            }
            _ if is_constraint_message(&err) => AppError::ConstraintViolation(err.to_string()),
            _ => AppError::OrmError(err),
        }
    }
}

// SeaORM leaves CHECK failures (and some driver codes) unclassified.
fn is_constraint_message(err: &DbErr) -> bool {
    const MARKERS: [&str; 4] = [
        "CHECK constraint failed",
        "violates check constraint",
        "FOREIGN KEY constraint failed",
        "UNIQUE constraint failed",
    ];
    let message = err.to_string();
    MARKERS.iter().any(|marker| message.contains(marker))
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::ConstraintViolation(_) => StatusCode::BAD_REQUEST,
            AppError::OrmError(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorData {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = ?self, "request failed");
        }

        let message = self.to_string();
        let body = ApiResponse {
            message: message.clone(),
            data: Some(ErrorData { error: message }),
            meta: Some(Meta::empty()),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
