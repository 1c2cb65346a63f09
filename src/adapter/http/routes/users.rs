use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapter::http::app_error_impl::{ErrorResponse, ErrorsResponse};
use crate::adapter::http::middleware::extractor::AuthUser;
use crate::adapter::http::schema::auth::TokenResponse;
use crate::adapter::http::schema::user::{RegisterUserRequest, UserResponse};
use crate::adapter::http::validation::ValidJson;
use crate::application::app_error::AppResult;
use crate::application::dto::id::IdDTO;
use crate::application::dto::user::CreateUserDTO;
use crate::application::interactors::users::{GetMeInteractor, RegisterUserInteractor};

#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = RegisterUserRequest,
    responses(
        (status = 200, description = "User registered, session token issued", body = TokenResponse),
        (status = 400, description = "Validation failed or email already taken", body = ErrorsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn register(
    interactor: RegisterUserInteractor,
    ValidJson(payload): ValidJson<RegisterUserRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = CreateUserDTO {
        name: payload.name,
        email: payload.email.to_string(),
        password: payload.password,
    };
    let token = interactor.execute(dto).await?;
    Ok((
        StatusCode::OK,
        Json(TokenResponse { token: token.token }),
    ))
}

#[utoipa::path(
    get,
    path = "/auth",
    tag = "Auth",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The authenticated user", body = UserResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    )
)]
pub async fn get_me(
    interactor: GetMeInteractor,
    user: AuthUser,
) -> AppResult<impl IntoResponse> {
    let result = interactor.execute(IdDTO { id: user.user_id }).await?;
    Ok((StatusCode::OK, Json(UserResponse::from(result))))
}
