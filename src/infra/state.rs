use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use sqlx::{Pool, Postgres};

use crate::adapter::db::gateway::post::PostGateway;
use crate::adapter::db::gateway::profile::ProfileGateway;
use crate::adapter::db::gateway::session::SessionGateway;
use crate::adapter::db::gateway::user::UserGateway;
use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::{AppError, AppResult};
use crate::application::interactors::account::DeleteAccountInteractor;
use crate::application::interactors::auth::{LoginInteractor, ValidateSessionInteractor};
use crate::application::interactors::github::GetGithubReposInteractor;
use crate::application::interactors::posts::{
    AddCommentInteractor, CreatePostInteractor, DeletePostInteractor, GetPostInteractor,
    GetPostsInteractor, LikePostInteractor, RemoveCommentInteractor, UnlikePostInteractor,
};
use crate::application::interactors::profile::{
    AddEducationInteractor, AddExperienceInteractor, GetCurrentProfileInteractor,
    GetProfileByUserInteractor, ListProfilesInteractor, RemoveEducationInteractor,
    RemoveExperienceInteractor, UpsertProfileInteractor,
};
use crate::application::interactors::users::{GetMeInteractor, RegisterUserInteractor};
use crate::application::interface::crypto::CredentialsHasher;
use crate::application::interface::github::RepoSource;
use crate::infra::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: Pool<Postgres>,
    pub hasher: Arc<dyn CredentialsHasher>,
    pub config: Arc<AppConfig>,
    pub github: Arc<dyn RepoSource>,
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

#[async_trait]
pub trait FromAppState: Sized {
    async fn from_app_state(state: &AppState) -> AppResult<Self>;
}

macro_rules! impl_from_request_parts {
    ($interactor:ty) => {
        impl<S> FromRequestParts<S> for $interactor
        where
            S: Send + Sync,
            AppState: FromRef<S>,
        {
            type Rejection = AppError;

            async fn from_request_parts(
                _parts: &mut Parts,
                state: &S,
            ) -> Result<Self, Self::Rejection> {
                let app_state = AppState::from_ref(state);
                <$interactor>::from_app_state(&app_state).await
            }
        }
    };
}

// RegisterUserInteractor
#[async_trait]
impl FromAppState for RegisterUserInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = UserGateway::new(session.clone());
        let session_gateway = SessionGateway::new(session.clone());

        Ok(RegisterUserInteractor::new(
            Arc::new(session),
            Arc::new(user_gateway.clone()),
            Arc::new(user_gateway),
            Arc::new(session_gateway),
            state.hasher.clone(),
        ))
    }
}

impl_from_request_parts!(RegisterUserInteractor);

// GetMeInteractor
#[async_trait]
impl FromAppState for GetMeInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = Arc::new(UserGateway::new(session));

        Ok(GetMeInteractor::new(user_gateway))
    }
}

impl_from_request_parts!(GetMeInteractor);

// LoginInteractor
#[async_trait]
impl FromAppState for LoginInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = UserGateway::new(session.clone());
        let session_gateway = SessionGateway::new(session.clone());

        Ok(LoginInteractor::new(
            Arc::new(session),
            Arc::new(user_gateway),
            Arc::new(session_gateway),
            state.hasher.clone(),
        ))
    }
}

impl_from_request_parts!(LoginInteractor);

// ValidateSessionInteractor
#[async_trait]
impl FromAppState for ValidateSessionInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let session_gateway = SessionGateway::new(session.clone());

        Ok(ValidateSessionInteractor::new(
            Arc::new(session),
            Arc::new(session_gateway.clone()),
            Arc::new(session_gateway),
        ))
    }
}

impl_from_request_parts!(ValidateSessionInteractor);

// DeleteAccountInteractor
#[async_trait]
impl FromAppState for DeleteAccountInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let post_gateway = PostGateway::new(session.clone());
        let profile_gateway = ProfileGateway::new(session.clone());
        let session_gateway = SessionGateway::new(session.clone());
        let user_gateway = UserGateway::new(session.clone());

        Ok(DeleteAccountInteractor::new(
            Arc::new(session),
            Arc::new(post_gateway),
            Arc::new(profile_gateway),
            Arc::new(session_gateway),
            Arc::new(user_gateway),
        ))
    }
}

impl_from_request_parts!(DeleteAccountInteractor);

// UpsertProfileInteractor
#[async_trait]
impl FromAppState for UpsertProfileInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session.clone());

        Ok(UpsertProfileInteractor::new(
            Arc::new(session),
            Arc::new(profile_gateway),
        ))
    }
}

impl_from_request_parts!(UpsertProfileInteractor);

// GetCurrentProfileInteractor
#[async_trait]
impl FromAppState for GetCurrentProfileInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session);

        Ok(GetCurrentProfileInteractor::new(Arc::new(profile_gateway)))
    }
}

impl_from_request_parts!(GetCurrentProfileInteractor);

// ListProfilesInteractor
#[async_trait]
impl FromAppState for ListProfilesInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session);

        Ok(ListProfilesInteractor::new(Arc::new(profile_gateway)))
    }
}

impl_from_request_parts!(ListProfilesInteractor);

// GetProfileByUserInteractor
#[async_trait]
impl FromAppState for GetProfileByUserInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session);

        Ok(GetProfileByUserInteractor::new(Arc::new(profile_gateway)))
    }
}

impl_from_request_parts!(GetProfileByUserInteractor);

// AddExperienceInteractor
#[async_trait]
impl FromAppState for AddExperienceInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session.clone());

        Ok(AddExperienceInteractor::new(
            Arc::new(session),
            Arc::new(profile_gateway.clone()),
            Arc::new(profile_gateway),
        ))
    }
}

impl_from_request_parts!(AddExperienceInteractor);

// RemoveExperienceInteractor
#[async_trait]
impl FromAppState for RemoveExperienceInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session.clone());

        Ok(RemoveExperienceInteractor::new(
            Arc::new(session),
            Arc::new(profile_gateway.clone()),
            Arc::new(profile_gateway),
        ))
    }
}

impl_from_request_parts!(RemoveExperienceInteractor);

// AddEducationInteractor
#[async_trait]
impl FromAppState for AddEducationInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session.clone());

        Ok(AddEducationInteractor::new(
            Arc::new(session),
            Arc::new(profile_gateway.clone()),
            Arc::new(profile_gateway),
        ))
    }
}

impl_from_request_parts!(AddEducationInteractor);

// RemoveEducationInteractor
#[async_trait]
impl FromAppState for RemoveEducationInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session.clone());

        Ok(RemoveEducationInteractor::new(
            Arc::new(session),
            Arc::new(profile_gateway.clone()),
            Arc::new(profile_gateway),
        ))
    }
}

impl_from_request_parts!(RemoveEducationInteractor);

// CreatePostInteractor
#[async_trait]
impl FromAppState for CreatePostInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = UserGateway::new(session.clone());
        let post_gateway = PostGateway::new(session.clone());

        Ok(CreatePostInteractor::new(
            Arc::new(session),
            Arc::new(user_gateway),
            Arc::new(post_gateway),
        ))
    }
}

impl_from_request_parts!(CreatePostInteractor);

// GetPostsInteractor
#[async_trait]
impl FromAppState for GetPostsInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let post_gateway = PostGateway::new(session);

        Ok(GetPostsInteractor::new(Arc::new(post_gateway)))
    }
}

impl_from_request_parts!(GetPostsInteractor);

// GetPostInteractor
#[async_trait]
impl FromAppState for GetPostInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let post_gateway = PostGateway::new(session);

        Ok(GetPostInteractor::new(Arc::new(post_gateway)))
    }
}

impl_from_request_parts!(GetPostInteractor);

// DeletePostInteractor
#[async_trait]
impl FromAppState for DeletePostInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let post_gateway = PostGateway::new(session.clone());

        Ok(DeletePostInteractor::new(
            Arc::new(session),
            Arc::new(post_gateway.clone()),
            Arc::new(post_gateway),
        ))
    }
}

impl_from_request_parts!(DeletePostInteractor);

// LikePostInteractor
#[async_trait]
impl FromAppState for LikePostInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let post_gateway = PostGateway::new(session.clone());

        Ok(LikePostInteractor::new(
            Arc::new(session),
            Arc::new(post_gateway.clone()),
            Arc::new(post_gateway),
        ))
    }
}

impl_from_request_parts!(LikePostInteractor);

// UnlikePostInteractor
#[async_trait]
impl FromAppState for UnlikePostInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let post_gateway = PostGateway::new(session.clone());

        Ok(UnlikePostInteractor::new(
            Arc::new(session),
            Arc::new(post_gateway.clone()),
            Arc::new(post_gateway),
        ))
    }
}

impl_from_request_parts!(UnlikePostInteractor);

// AddCommentInteractor
#[async_trait]
impl FromAppState for AddCommentInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = UserGateway::new(session.clone());
        let post_gateway = PostGateway::new(session.clone());

        Ok(AddCommentInteractor::new(
            Arc::new(session),
            Arc::new(user_gateway),
            Arc::new(post_gateway.clone()),
            Arc::new(post_gateway),
        ))
    }
}

impl_from_request_parts!(AddCommentInteractor);

// RemoveCommentInteractor
#[async_trait]
impl FromAppState for RemoveCommentInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let post_gateway = PostGateway::new(session.clone());

        Ok(RemoveCommentInteractor::new(
            Arc::new(session),
            Arc::new(post_gateway.clone()),
            Arc::new(post_gateway),
        ))
    }
}

impl_from_request_parts!(RemoveCommentInteractor);

// GetGithubReposInteractor
#[async_trait]
impl FromAppState for GetGithubReposInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        Ok(GetGithubReposInteractor::new(state.github.clone()))
    }
}

impl_from_request_parts!(GetGithubReposInteractor);
