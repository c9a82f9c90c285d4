use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::{forms::ValidationErrors, templates::error_page};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Database(_) | Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match self {
            Self::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                "Something went wrong on our end. Please try again later.".to_string()
            }
            Self::NotFound(ref msg) => msg.clone(),
            Self::Validation(ref errors) => errors.to_string(),
            Self::Conflict(ref msg) => msg.clone(),
            Self::Configuration(ref msg) => {
                tracing::error!("Configuration error: {}", msg);
                "Something went wrong on our end. Please try again later.".to_string()
            }
            Self::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                "Something went wrong on our end. Please try again later.".to_string()
            }
            Self::Other(ref e) => {
                tracing::error!("Unexpected error: {:#}", e);
                "Something went wrong on our end. Please try again later.".to_string()
            }
        };

        let status = self.status();
        (status, Html(error_page(status, &message).into_string())).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
