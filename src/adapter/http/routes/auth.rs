use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapter::http::app_error_impl::ErrorResponse;
use crate::adapter::http::schema::auth::{LoginRequest, TokenResponse};
use crate::adapter::http::validation::ValidJson;
use crate::application::app_error::AppResult;
use crate::application::dto::auth::LoginDTO;
use crate::application::interactors::auth::LoginInteractor;

#[utoipa::path(
    post,
    path = "/auth",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, session token issued", body = TokenResponse),
        (status = 401, description = "Invalid email or password", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn login(
    interactor: LoginInteractor,
    ValidJson(payload): ValidJson<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = LoginDTO {
        email: payload.email.to_string(),
        password: payload.password,
    };
    let token = interactor.execute(dto).await?;
    Ok((
        StatusCode::OK,
        Json(TokenResponse { token: token.token }),
    ))
}
