use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use barista_application::{
    AuthorizeError, CreateDrinkError, DeleteDrinkError, ListDrinksError, UpdateDrinkError,
};
use barista_core::{DrinkError, DrinkStoreError, PermissionError, TokenError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

/// Errors surfaced by the HTTP layer.
///
/// The payload carries the internal detail, which is logged but never sent
/// to the client; the response only carries the generic message of the status.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Resource not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad request",
            ApiError::Unauthorized(_) => "unauthorized",
            ApiError::NotFound => "resource not found",
            ApiError::MethodNotAllowed => "method not allowed",
            ApiError::Unprocessable(_) => "unprocessable",
            ApiError::Internal(_) => "server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Unauthorized(detail) => tracing::debug!(%detail, "Request unauthorized"),
            ApiError::BadRequest(detail) | ApiError::Unprocessable(detail) => {
                tracing::warn!(%detail, "Request rejected")
            }
            ApiError::Internal(detail) => tracing::error!(%detail, "Request failed"),
            ApiError::NotFound | ApiError::MethodNotAllowed => {}
        }

        let status_code = self.status_code();
        let body = Json(ErrorResponse {
            success: false,
            error: status_code.as_u16(),
            message: self.message().to_owned(),
        });

        (status_code, body).into_response()
    }
}

impl From<DrinkError> for ApiError {
    fn from(error: DrinkError) -> Self {
        ApiError::Unprocessable(error.to_string())
    }
}

impl From<DrinkStoreError> for ApiError {
    fn from(error: DrinkStoreError) -> Self {
        match error {
            DrinkStoreError::DrinkNotFound => ApiError::NotFound,
            DrinkStoreError::TitleAlreadyExists => ApiError::Unprocessable(error.to_string()),
            DrinkStoreError::UnexpectedError(e) => ApiError::Internal(e),
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::KeySetUnavailable(_) => ApiError::Internal(error.to_string()),
            _ => ApiError::Unauthorized(error.to_string()),
        }
    }
}

impl From<PermissionError> for ApiError {
    fn from(error: PermissionError) -> Self {
        ApiError::Unauthorized(error.to_string())
    }
}

impl From<AuthorizeError> for ApiError {
    fn from(error: AuthorizeError) -> Self {
        match error {
            AuthorizeError::Token(e) => e.into(),
            AuthorizeError::Permission(e) => e.into(),
        }
    }
}

impl From<ListDrinksError> for ApiError {
    fn from(error: ListDrinksError) -> Self {
        match error {
            ListDrinksError::DrinkStoreError(e) => e.into(),
        }
    }
}

impl From<CreateDrinkError> for ApiError {
    fn from(error: CreateDrinkError) -> Self {
        match error {
            CreateDrinkError::InvalidDrink(e) => e.into(),
            CreateDrinkError::DrinkStoreError(e) => {
                tracing::error!(error = %e, "Failed to store new drink");
                ApiError::Unprocessable(e.to_string())
            }
        }
    }
}

impl From<UpdateDrinkError> for ApiError {
    fn from(error: UpdateDrinkError) -> Self {
        match error {
            UpdateDrinkError::InvalidChanges(e) => e.into(),
            UpdateDrinkError::DrinkStoreError(e) => e.into(),
        }
    }
}

impl From<DeleteDrinkError> for ApiError {
    fn from(error: DeleteDrinkError) -> Self {
        match error {
            DeleteDrinkError::DrinkStoreError(DrinkStoreError::DrinkNotFound) => ApiError::NotFound,
            DeleteDrinkError::DrinkStoreError(e) => {
                tracing::error!(error = %e, "Failed to delete drink");
                ApiError::Unprocessable(e.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => ApiError::Unprocessable(e.body_text()),
            other => ApiError::BadRequest(other.body_text()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        if error.is_data() {
            ApiError::Unprocessable(error.to_string())
        } else {
            ApiError::BadRequest(error.to_string())
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> Self {
        ApiError::NotFound
    }
}
