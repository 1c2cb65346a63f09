use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{info, warn};

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::auth::{LoginDTO, TokenDTO, ValidateTokenDTO};
use crate::application::dto::id::IdDTO;
use crate::application::interface::crypto::CredentialsHasher;
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::session::{SessionReader, SessionWriter};
use crate::application::interface::gateway::user::UserReader;
use crate::domain::entities::id::Id;
use crate::domain::entities::session::Session;

#[derive(Clone)]
pub struct LoginInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    session_writer: Arc<dyn SessionWriter>,
    hasher: Arc<dyn CredentialsHasher>,
}

impl LoginInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        session_writer: Arc<dyn SessionWriter>,
        hasher: Arc<dyn CredentialsHasher>,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            session_writer,
            hasher,
        }
    }

    pub async fn execute(&self, dto: LoginDTO) -> AppResult<TokenDTO> {
        let user = self.user_reader.find_by_email(&dto.email).await?.ok_or_else(|| {
            warn!("Login attempt with non-existent email: {}", dto.email);
            AppError::InvalidCredentials
        })?;
        let is_valid = self.hasher.verify_password(&dto.password, &user.password).await?;
        if !is_valid {
            warn!("Invalid password for user: {}", user.name);
            return Err(AppError::InvalidCredentials);
        }
        let session_id = self.session_writer.insert(Session::new(user.id.clone())).await?;
        self.db_session.commit().await?;
        info!("User {} logged in successfully", user.name);
        Ok(TokenDTO {
            token: session_id.value.to_string(),
        })
    }
}

/// Resolves a bearer token to the user identity behind it. Every mutating
/// route and the private reads go through this.
#[derive(Clone)]
pub struct ValidateSessionInteractor {
    db_session: Arc<dyn DBSession>,
    session_reader: Arc<dyn SessionReader>,
    session_writer: Arc<dyn SessionWriter>,
}

impl ValidateSessionInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        session_reader: Arc<dyn SessionReader>,
        session_writer: Arc<dyn SessionWriter>,
    ) -> Self {
        Self {
            db_session,
            session_reader,
            session_writer,
        }
    }

    pub async fn execute(&self, dto: ValidateTokenDTO) -> AppResult<IdDTO> {
        let session_id: Id<Session> =
            dto.token.try_into().map_err(|_| AppError::InvalidCredentials)?;
        let session = self
            .session_reader
            .find_by_id(&session_id)
            .await?
            .ok_or(AppError::InvalidCredentials)?;
        if Utc::now() - session.created_at > Duration::seconds(dto.token_ttl) {
            self.session_writer.delete(&session_id).await?;
            self.db_session.commit().await?;
            return Err(AppError::InvalidCredentials);
        }
        Ok(IdDTO {
            id: session.user_id.value.to_string(),
        })
    }
}
