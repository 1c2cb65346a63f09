use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use tracing::error;
use utoipa::ToSchema;

use crate::application::app_error::AppError;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorItem {
    pub msg: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorsResponse {
    pub errors: Vec<ValidationErrorItem>,
}

/// Collects every field-level message from a `validator` report into the
/// flat `errors` array the clients expect.
fn validation_messages(errors: &validator::ValidationErrors) -> Vec<String> {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |err| {
                err.message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"))
            })
        })
        .collect()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Field validation failures keep the errors-array shape; every
        // other failure is a single `error` message.
        if let AppError::Validation(ref errors) = self {
            let errors: Vec<_> = validation_messages(errors)
                .into_iter()
                .map(|msg| json!({ "msg": msg }))
                .collect();
            return (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response();
        }
        // A taken email reports through the same errors-array shape the
        // field validators use.
        if let AppError::UserAlreadyExists = self {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "errors": [{ "msg": self.to_string() }] })),
            )
                .into_response();
        }

        let status = match &self {
            AppError::UserAlreadyExists
            | AppError::AlreadyLiked
            | AppError::NotYetLiked
            | AppError::JsonRejection(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::AccessDenied => StatusCode::FORBIDDEN,
            AppError::InvalidId(_)
            | AppError::UserNotFound
            | AppError::ProfileNotFound
            | AppError::PostNotFound
            | AppError::CommentNotFound
            | AppError::GithubUserNotFound => StatusCode::NOT_FOUND,
            AppError::GithubUnavailable => StatusCode::BAD_GATEWAY,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_) | AppError::PasswordHashError => {
                error!("Internal error: {self}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = match &self {
            // Never leak driver details to the client.
            AppError::DatabaseError(_) | AppError::PasswordHashError => {
                "Server Error".to_string()
            }
            AppError::InvalidId(_) => "Not Found".to_string(),
            other => other.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
