use axum::{response::Html, Json};
use utoipa::{
    openapi::{
        security::{Http, HttpAuthScheme, SecurityScheme},
        OpenApi as OpenApiDoc,
    },
    Modify, OpenApi,
};

use crate::adapter::http::{
    app_error_impl::{ErrorResponse, ErrorsResponse, ValidationErrorItem},
    routes::{auth, posts, profile, users},
    schema::{
        auth::{LoginRequest, MessageResponse, TokenResponse},
        github::GithubRepoResponse,
        post::{AddCommentRequest, CommentResponse, CreatePostRequest, LikeResponse, PostResponse},
        profile::{
            AddEducationRequest, AddExperienceRequest, EducationResponse, ExperienceResponse,
            ProfileResponse, ProfileUserResponse, ProfileWithUserResponse, SkillsField,
            SocialRequest, SocialResponse, UpsertProfileRequest,
        },
        user::{RegisterUserRequest, UserResponse},
    },
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut OpenApiDoc) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    servers((url = "/api")),
    paths(
        users::register,
        users::get_me,
        auth::login,
        profile::get_current_profile,
        profile::upsert_profile,
        profile::list_profiles,
        profile::get_profile_by_user,
        profile::delete_account,
        profile::add_experience,
        profile::remove_experience,
        profile::add_education,
        profile::remove_education,
        profile::get_github_repos,
        posts::create_post,
        posts::get_posts,
        posts::get_post,
        posts::delete_post,
        posts::like_post,
        posts::unlike_post,
        posts::add_comment,
        posts::remove_comment
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorsResponse,
            ValidationErrorItem,
            LoginRequest,
            MessageResponse,
            TokenResponse,
            RegisterUserRequest,
            UserResponse,
            UpsertProfileRequest,
            SkillsField,
            SocialRequest,
            AddExperienceRequest,
            AddEducationRequest,
            ProfileResponse,
            ProfileUserResponse,
            ProfileWithUserResponse,
            SocialResponse,
            ExperienceResponse,
            EducationResponse,
            GithubRepoResponse,
            CreatePostRequest,
            AddCommentRequest,
            PostResponse,
            LikeResponse,
            CommentResponse
        )
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<OpenApiDoc> {
    Json(ApiDoc::openapi())
}

pub async fn docs_ui() -> Html<&'static str> {
    Html(
        r#"
            <!doctype html>
            <html>
              <head>
                <title>API docs</title>
                <meta charset="utf-8">
                <meta name="viewport" content="width=device-width, initial-scale=1">
                <script src="https://unpkg.com/@stoplight/elements/web-components.min.js"></script>
                <link rel="stylesheet" href="https://unpkg.com/@stoplight/elements/styles.min.css">
              </head>
              <body style="height: 100%; margin: 0;">
                <elements-api
                  apiDescriptionUrl="openapi.json"
                  basePath="/"
                  router="hash"
                />
              </body>
            </html>
        "#,
    )
}
