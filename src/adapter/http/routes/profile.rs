use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapter::http::app_error_impl::{ErrorResponse, ErrorsResponse};
use crate::adapter::http::middleware::extractor::AuthUser;
use crate::adapter::http::schema::auth::MessageResponse;
use crate::adapter::http::schema::github::GithubRepoResponse;
use crate::adapter::http::schema::profile::{
    AddEducationRequest, AddExperienceRequest, ProfileResponse, ProfileWithUserResponse,
    UpsertProfileRequest,
};
use crate::adapter::http::validation::ValidJson;
use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::id::IdDTO;
use crate::application::dto::profile::{
    AddEducationDTO, AddExperienceDTO, RemoveEntryDTO, SocialDTO, UpsertProfileDTO,
};
use crate::application::interactors::account::DeleteAccountInteractor;
use crate::application::interactors::github::GetGithubReposInteractor;
use crate::application::interactors::profile::{
    AddEducationInteractor, AddExperienceInteractor, GetCurrentProfileInteractor,
    GetProfileByUserInteractor, ListProfilesInteractor, RemoveEducationInteractor,
    RemoveExperienceInteractor, UpsertProfileInteractor,
};

// `required` already guarantees the date is present once validation has
// run; this keeps the same errors-array shape if it ever is not.
fn missing_from_date() -> AppError {
    let mut errors = validator::ValidationErrors::new();
    let mut error = validator::ValidationError::new("required");
    error.message = Some("From date is required".into());
    errors.add("from", error);
    AppError::Validation(errors)
}

#[utoipa::path(
    get,
    path = "/profile/me",
    tag = "Profile",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The caller's profile", body = ProfileWithUserResponse),
        (status = 404, description = "No profile for this user", body = ErrorResponse)
    )
)]
pub async fn get_current_profile(
    interactor: GetCurrentProfileInteractor,
    user: AuthUser,
) -> AppResult<impl IntoResponse> {
    let result = interactor.execute(IdDTO { id: user.user_id }).await?;
    Ok((StatusCode::OK, Json(ProfileWithUserResponse::from(result))))
}

#[utoipa::path(
    post,
    path = "/profile",
    tag = "Profile",
    security(("bearer" = [])),
    request_body = UpsertProfileRequest,
    responses(
        (status = 200, description = "Profile created or updated", body = ProfileResponse),
        (status = 400, description = "Validation failed", body = ErrorsResponse)
    )
)]
pub async fn upsert_profile(
    interactor: UpsertProfileInteractor,
    user: AuthUser,
    ValidJson(payload): ValidJson<UpsertProfileRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = UpsertProfileDTO {
        user_id: user.user_id,
        company: payload.company,
        website: payload.website,
        location: payload.location,
        bio: payload.bio,
        status: payload.status,
        github_username: payload.github_username,
        skills: payload.skills.normalized(),
        social: SocialDTO {
            youtube: payload.social.youtube,
            twitter: payload.social.twitter,
            facebook: payload.social.facebook,
            linkedin: payload.social.linkedin,
            instagram: payload.social.instagram,
        },
    };
    let result = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(result))))
}

#[utoipa::path(
    get,
    path = "/profile",
    tag = "Profile",
    responses(
        (status = 200, description = "All profiles", body = Vec<ProfileWithUserResponse>)
    )
)]
pub async fn list_profiles(
    interactor: ListProfilesInteractor,
) -> AppResult<impl IntoResponse> {
    let result = interactor.execute().await?;
    let profiles: Vec<ProfileWithUserResponse> = result.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(profiles)))
}

#[utoipa::path(
    get,
    path = "/profile/user/{user_id}",
    tag = "Profile",
    params(("user_id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "The user's profile", body = ProfileWithUserResponse),
        (status = 404, description = "No profile for this user", body = ErrorResponse)
    )
)]
pub async fn get_profile_by_user(
    interactor: GetProfileByUserInteractor,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    // An unparseable id reads as an absent profile, not a client error.
    let result = interactor
        .execute(IdDTO { id: user_id })
        .await
        .map_err(|err| match err {
            AppError::InvalidId(_) => AppError::ProfileNotFound,
            other => other,
        })?;
    Ok((StatusCode::OK, Json(ProfileWithUserResponse::from(result))))
}

#[utoipa::path(
    delete,
    path = "/profile",
    tag = "Profile",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Account and all owned data removed", body = MessageResponse)
    )
)]
pub async fn delete_account(
    interactor: DeleteAccountInteractor,
    user: AuthUser,
) -> AppResult<impl IntoResponse> {
    interactor.execute(IdDTO { id: user.user_id }).await?;
    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "User deleted".to_string(),
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/profile/experience",
    tag = "Profile",
    security(("bearer" = [])),
    request_body = AddExperienceRequest,
    responses(
        (status = 200, description = "Experience entry added", body = ProfileResponse),
        (status = 400, description = "Validation failed", body = ErrorsResponse),
        (status = 404, description = "No profile for this user", body = ErrorResponse)
    )
)]
pub async fn add_experience(
    interactor: AddExperienceInteractor,
    user: AuthUser,
    ValidJson(payload): ValidJson<AddExperienceRequest>,
) -> AppResult<impl IntoResponse> {
    let from = payload.from.ok_or_else(missing_from_date)?;
    let dto = AddExperienceDTO {
        user_id: user.user_id,
        title: payload.title,
        company: payload.company,
        location: payload.location,
        from,
        to: payload.to,
        current: payload.current,
        description: payload.description,
    };
    let result = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(result))))
}

#[utoipa::path(
    delete,
    path = "/profile/experience/{entry_id}",
    tag = "Profile",
    security(("bearer" = [])),
    params(("entry_id" = String, Path, description = "Experience entry id")),
    responses(
        (status = 200, description = "Entry removed (or was already absent)", body = ProfileResponse),
        (status = 404, description = "No profile for this user", body = ErrorResponse)
    )
)]
pub async fn remove_experience(
    interactor: RemoveExperienceInteractor,
    user: AuthUser,
    Path(entry_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dto = RemoveEntryDTO {
        user_id: user.user_id,
        entry_id,
    };
    let result = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(result))))
}

#[utoipa::path(
    put,
    path = "/profile/education",
    tag = "Profile",
    security(("bearer" = [])),
    request_body = AddEducationRequest,
    responses(
        (status = 200, description = "Education entry added", body = ProfileResponse),
        (status = 400, description = "Validation failed", body = ErrorsResponse),
        (status = 404, description = "No profile for this user", body = ErrorResponse)
    )
)]
pub async fn add_education(
    interactor: AddEducationInteractor,
    user: AuthUser,
    ValidJson(payload): ValidJson<AddEducationRequest>,
) -> AppResult<impl IntoResponse> {
    let from = payload.from.ok_or_else(missing_from_date)?;
    let dto = AddEducationDTO {
        user_id: user.user_id,
        school: payload.school,
        degree: payload.degree,
        field_of_study: payload.field_of_study,
        from,
        to: payload.to,
        current: payload.current,
        description: payload.description,
    };
    let result = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(result))))
}

#[utoipa::path(
    delete,
    path = "/profile/education/{entry_id}",
    tag = "Profile",
    security(("bearer" = [])),
    params(("entry_id" = String, Path, description = "Education entry id")),
    responses(
        (status = 200, description = "Entry removed (or was already absent)", body = ProfileResponse),
        (status = 404, description = "No profile for this user", body = ErrorResponse)
    )
)]
pub async fn remove_education(
    interactor: RemoveEducationInteractor,
    user: AuthUser,
    Path(entry_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dto = RemoveEntryDTO {
        user_id: user.user_id,
        entry_id,
    };
    let result = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(result))))
}

#[utoipa::path(
    get,
    path = "/profile/github/{username}",
    tag = "Profile",
    params(("username" = String, Path, description = "GitHub username")),
    responses(
        (status = 200, description = "The user's five most recently created public repos", body = Vec<GithubRepoResponse>),
        (status = 404, description = "No GitHub profile found", body = ErrorResponse),
        (status = 502, description = "GitHub unavailable", body = ErrorResponse)
    )
)]
pub async fn get_github_repos(
    interactor: GetGithubReposInteractor,
    Path(username): Path<String>,
) -> AppResult<impl IntoResponse> {
    let result = interactor.execute(username).await?;
    let repos: Vec<GithubRepoResponse> = result.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(repos)))
}
