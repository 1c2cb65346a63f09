use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{self};
use axum::routing::{delete, get, post, put};
use axum::{middleware, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use uuid::Uuid;

use crate::adapter::http::docs::{docs_ui, openapi_json};
use crate::adapter::http::middleware::auth::auth_middleware;
use crate::adapter::http::routes::auth::login;
use crate::adapter::http::routes::posts::{
    add_comment, create_post, delete_post, get_post, get_posts, like_post, remove_comment,
    unlike_post,
};
use crate::adapter::http::routes::profile::{
    add_education, add_experience, delete_account, get_current_profile, get_github_repos,
    get_profile_by_user, list_profiles, remove_education, remove_experience, upsert_profile,
};
use crate::adapter::http::routes::users::{get_me, register};
use crate::infra::config::AppConfig;
use crate::infra::state::AppState;

fn build_cors(config: &AppConfig) -> CorsLayer {
    let has_wildcard = config.application.allow_origins.iter().any(|s| s == "*");

    if has_wildcard {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([
                http::Method::POST,
                http::Method::GET,
                http::Method::PUT,
                http::Method::DELETE,
            ])
            .allow_headers([CONTENT_TYPE, AUTHORIZATION]);
    }
    let origins: Vec<http::HeaderValue> = config
        .application
        .allow_origins
        .iter()
        .filter_map(|s| {
            s.parse::<http::HeaderValue>()
                .map_err(|e| {
                    tracing::warn!("Failed to parse origin '{}': {}", s, e);
                })
                .ok()
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            http::Method::POST,
            http::Method::GET,
            http::Method::PUT,
            http::Method::DELETE,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
}

pub fn users_router() -> Router<AppState> {
    Router::new().route("/", post(register))
}

pub fn auth_router(state: AppState) -> Router<AppState> {
    let public_routes = Router::new().route("/", post(login));

    let protected_routes = Router::new()
        .route("/", get(get_me))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new().merge(public_routes).merge(protected_routes)
}

pub fn profile_router(state: AppState) -> Router<AppState> {
    let public_routes = Router::new()
        .route("/", get(list_profiles))
        .route("/user/{user_id}", get(get_profile_by_user))
        .route("/github/{username}", get(get_github_repos));

    let protected_routes = Router::new()
        .route("/", post(upsert_profile).delete(delete_account))
        .route("/me", get(get_current_profile))
        .route("/experience", put(add_experience))
        .route("/experience/{entry_id}", delete(remove_experience))
        .route("/education", put(add_education))
        .route("/education/{entry_id}", delete(remove_education))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new().merge(public_routes).merge(protected_routes)
}

pub fn posts_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_post).get(get_posts))
        .route("/{post_id}", get(get_post).delete(delete_post))
        .route("/like/{post_id}", put(like_post))
        .route("/unlike/{post_id}", put(unlike_post))
        .route("/comment/{post_id}", post(add_comment))
        .route("/comment/{post_id}/{comment_id}", delete(remove_comment))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
}

pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/api/users", users_router())
        .nest("/api/auth", auth_router(state.clone()))
        .nest("/api/profile", profile_router(state.clone()))
        .nest("/api/posts", posts_router(state.clone()))
        .route("/openapi.json", get(openapi_json))
        .route("/docs", get(docs_ui))
}

pub fn create_app(config: &AppConfig, state: AppState) -> Router {
    let cors = build_cors(config);
    Router::new()
        .merge(router(state.clone()))
        .with_state(state.clone())
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &http::Request<_>| {
                    let request_id = Uuid::now_v7();
                    tracing::info_span!(
                        "http-request",
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                        request_id = %request_id
                    )
                })
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
