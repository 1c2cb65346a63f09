use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::adapter::http::middleware::extractor::AuthUser;
use crate::application::{
    app_error::{AppError, AppResult},
    dto::auth::ValidateTokenDTO,
    interactors::auth::ValidateSessionInteractor,
};
use crate::infra::state::{AppState, FromAppState};

/// Resolves the bearer token to a user and stashes it in request
/// extensions; requests without a live session are rejected here.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> AppResult<Response> {
    let token = extract_bearer_token(&request)?;
    let interactor = ValidateSessionInteractor::from_app_state(&state).await?;
    let dto = ValidateTokenDTO {
        token,
        token_ttl: state.config.auth.token_ttl,
    };
    let user_id = interactor.execute(dto).await?;
    request.extensions_mut().insert(AuthUser {
        user_id: user_id.id,
    });

    Ok(next.run(request).await)
}

fn extract_bearer_token(request: &Request) -> AppResult<String> {
    let header = request
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AppError::InvalidCredentials)?;

    header
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .ok_or(AppError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;

    use super::extract_bearer_token;

    fn request_with_auth(value: &str) -> Request<Body> {
        Request::builder()
            .header("Authorization", value)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn test_extracts_bearer_token() {
        let request = request_with_auth("Bearer abc123");
        assert_eq!(extract_bearer_token(&request).unwrap(), "abc123");
    }

    #[test]
    fn test_rejects_missing_header() {
        let request = Request::builder().body(Body::empty()).unwrap();
        assert!(extract_bearer_token(&request).is_err());
    }

    #[test]
    fn test_rejects_wrong_scheme() {
        let request = request_with_auth("Basic abc123");
        assert!(extract_bearer_token(&request).is_err());
    }

    #[test]
    fn test_rejects_empty_token() {
        let request = request_with_auth("Bearer ");
        assert!(extract_bearer_token(&request).is_err());
    }
}
