use std::sync::Arc;

use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::auth::TokenDTO;
use crate::application::dto::id::IdDTO;
use crate::application::dto::user::{CreateUserDTO, UserDTO};
use crate::application::interface::crypto::CredentialsHasher;
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::session::SessionWriter;
use crate::application::interface::gateway::user::{UserReader, UserWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::session::Session;
use crate::domain::entities::user::User;

/// Gravatar-style avatar derived from the email at registration time; the
/// stored URL is a snapshot, never recomputed.
pub fn gravatar_url(email: &str) -> String {
    let digest = Sha256::digest(email.trim().to_lowercase().as_bytes());
    format!("https://www.gravatar.com/avatar/{:x}?s=200&d=mm&r=pg", digest)
}

#[derive(Clone)]
pub struct RegisterUserInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    user_writer: Arc<dyn UserWriter>,
    session_writer: Arc<dyn SessionWriter>,
    hasher: Arc<dyn CredentialsHasher>,
}

impl RegisterUserInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        user_writer: Arc<dyn UserWriter>,
        session_writer: Arc<dyn SessionWriter>,
        hasher: Arc<dyn CredentialsHasher>,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            user_writer,
            session_writer,
            hasher,
        }
    }

    pub async fn execute(&self, dto: CreateUserDTO) -> AppResult<TokenDTO> {
        if self.user_reader.find_by_email(&dto.email).await?.is_some() {
            warn!("Registration attempt with existing email: {}", dto.email);
            return Err(AppError::UserAlreadyExists);
        }
        let avatar = gravatar_url(&dto.email);
        let hashed = self.hasher.hash_password(&dto.password).await?;
        let user = User::new(dto.name, dto.email, hashed, avatar);
        let user_id = self.user_writer.insert(user).await?;
        let session_id = self.session_writer.insert(Session::new(user_id.clone())).await?;
        self.db_session.commit().await?;
        info!("User {} registered", user_id.value);
        Ok(TokenDTO {
            token: session_id.value.to_string(),
        })
    }
}

#[derive(Clone)]
pub struct GetMeInteractor {
    user_reader: Arc<dyn UserReader>,
}

impl GetMeInteractor {
    pub fn new(user_reader: Arc<dyn UserReader>) -> Self {
        Self { user_reader }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<UserDTO> {
        let user_id: Id<User> = dto.id.try_into()?;
        let user = self
            .user_reader
            .find_by_id(&user_id)
            .await?
            .ok_or(AppError::UserNotFound)?;
        Ok(UserDTO {
            id: user.id.value.to_string(),
            name: user.name,
            email: user.email,
            avatar: user.avatar,
            created_at: user.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use mockall::mock;
    use rstest::{fixture, rstest};

    use crate::application::app_error::{AppError, AppResult};
    use crate::application::dto::id::IdDTO;
    use crate::application::dto::user::CreateUserDTO;
    use crate::application::interactors::users::{
        gravatar_url, GetMeInteractor, RegisterUserInteractor,
    };
    use crate::application::interface::crypto::CredentialsHasher;
    use crate::application::interface::db::DBSession;
    use crate::application::interface::gateway::session::SessionWriter;
    use crate::application::interface::gateway::user::{UserReader, UserWriter};
    use crate::domain::entities::id::Id;
    use crate::domain::entities::session::Session;
    use crate::domain::entities::user::User;

    // Mocks
    mock! {
        pub DBSessionMock {}

        #[async_trait]
        impl DBSession for DBSessionMock {
            async fn commit(&self) -> AppResult<()>;
        }
    }

    mock! {
        pub UserReaderMock {}

        #[async_trait]
        impl UserReader for UserReaderMock {
            async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
            async fn find_by_id(&self, user_id: &Id<User>) -> AppResult<Option<User>>;
        }
    }

    mock! {
        pub UserWriterMock {}

        #[async_trait]
        impl UserWriter for UserWriterMock {
            async fn insert(&self, user: User) -> AppResult<Id<User>>;
            async fn delete(&self, user_id: &Id<User>) -> AppResult<()>;
        }
    }

    mock! {
        pub SessionWriterMock {}

        #[async_trait]
        impl SessionWriter for SessionWriterMock {
            async fn insert(&self, session: Session) -> AppResult<Id<Session>>;
            async fn delete(&self, session_id: &Id<Session>) -> AppResult<()>;
            async fn delete_by_user_id(&self, user_id: &Id<User>) -> AppResult<()>;
        }
    }

    mock! {
        pub HasherMock {}

        #[async_trait]
        impl CredentialsHasher for HasherMock {
            async fn hash_password(&self, password: &str) -> AppResult<String>;
            async fn verify_password(&self, password: &str, hashed: &str) -> AppResult<bool>;
        }
    }

    // Constants
    const SESSION_ID: &str = "019c47ec-2160-7e53-bf7e-06db2a1bad85";
    const EMAIL: &str = "john@example.com";

    fn build_user() -> User {
        User::new(
            "john".to_string(),
            EMAIL.to_string(),
            "hash".to_string(),
            gravatar_url(EMAIL),
        )
    }

    // Fixtures
    #[fixture]
    fn create_user_dto() -> CreateUserDTO {
        CreateUserDTO {
            name: "john".to_string(),
            email: EMAIL.to_string(),
            password: "Password123!".to_string(),
        }
    }

    // RegisterUserInteractor tests
    #[rstest]
    #[tokio::test]
    async fn test_register_success(create_user_dto: CreateUserDTO) {
        let mut db_session = MockDBSessionMock::new();
        let mut user_reader = MockUserReaderMock::new();
        let mut user_writer = MockUserWriterMock::new();
        let mut session_writer = MockSessionWriterMock::new();
        let mut hasher = MockHasherMock::new();

        user_reader.expect_find_by_email().returning(|_| Ok(None));
        hasher
            .expect_hash_password()
            .returning(|_| Ok("hashed".to_string()));
        user_writer
            .expect_insert()
            .withf(|user| user.password == "hashed" && user.avatar.starts_with("https://www.gravatar.com/avatar/"))
            .returning(|user| Ok(user.id));
        session_writer
            .expect_insert()
            .returning(|_| Ok(SESSION_ID.to_string().try_into().unwrap()));
        db_session.expect_commit().returning(|| Ok(()));

        let interactor = RegisterUserInteractor::new(
            Arc::new(db_session),
            Arc::new(user_reader),
            Arc::new(user_writer),
            Arc::new(session_writer),
            Arc::new(hasher),
        );

        let result = interactor.execute(create_user_dto).await.unwrap();
        assert_eq!(result.token, SESSION_ID);
    }

    #[rstest]
    #[tokio::test]
    async fn test_register_duplicate_email(create_user_dto: CreateUserDTO) {
        let db_session = MockDBSessionMock::new();
        let mut user_reader = MockUserReaderMock::new();
        let user_writer = MockUserWriterMock::new();
        let session_writer = MockSessionWriterMock::new();
        let hasher = MockHasherMock::new();

        user_reader
            .expect_find_by_email()
            .returning(|_| Ok(Some(build_user())));

        let interactor = RegisterUserInteractor::new(
            Arc::new(db_session),
            Arc::new(user_reader),
            Arc::new(user_writer),
            Arc::new(session_writer),
            Arc::new(hasher),
        );

        let result = interactor.execute(create_user_dto).await;
        assert!(matches!(result.unwrap_err(), AppError::UserAlreadyExists));
    }

    // GetMeInteractor tests
    #[rstest]
    #[tokio::test]
    async fn test_get_me_success() {
        let mut user_reader = MockUserReaderMock::new();
        let user = build_user();
        let user_id = user.id.value.to_string();
        user_reader
            .expect_find_by_id()
            .returning(move |_| Ok(Some(build_user())));

        let interactor = GetMeInteractor::new(Arc::new(user_reader));
        let result = interactor.execute(IdDTO { id: user_id }).await.unwrap();
        assert_eq!(result.email, EMAIL);
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_me_not_found() {
        let mut user_reader = MockUserReaderMock::new();
        user_reader.expect_find_by_id().returning(|_| Ok(None));

        let interactor = GetMeInteractor::new(Arc::new(user_reader));
        let result = interactor
            .execute(IdDTO {
                id: Id::<User>::generate().value.to_string(),
            })
            .await;
        assert!(matches!(result.unwrap_err(), AppError::UserNotFound));
    }

    // gravatar_url tests
    #[rstest]
    fn test_gravatar_url_is_case_insensitive() {
        assert_eq!(gravatar_url("John@Example.com "), gravatar_url("john@example.com"));
    }

    #[rstest]
    fn test_gravatar_url_shape() {
        let url = gravatar_url(EMAIL);
        assert!(url.starts_with("https://www.gravatar.com/avatar/"));
        assert!(url.ends_with("?s=200&d=mm&r=pg"));
    }
}
