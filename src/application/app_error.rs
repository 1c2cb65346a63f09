use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid id: {0}")]
    InvalidId(String),
    #[error("Invalid Credentials")]
    InvalidCredentials,
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not authorized")]
    AccessDenied,
    #[error("User not found")]
    UserNotFound,
    #[error("There is no profile for this user")]
    ProfileNotFound,
    #[error("Post not found")]
    PostNotFound,
    #[error("Comment does not exist")]
    CommentNotFound,
    #[error("Post already liked")]
    AlreadyLiked,
    #[error("Post has not yet been liked")]
    NotYetLiked,
    #[error("No Github profile found")]
    GithubUserNotFound,
    #[error("Github is unavailable")]
    GithubUnavailable,
    #[error("Validation error")]
    Validation(#[from] validator::ValidationErrors),
    #[error("Invalid request body")]
    JsonRejection(#[from] axum::extract::rejection::JsonRejection),
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
    #[error("Password hash error")]
    PasswordHashError,
}

pub type AppResult<T> = Result<T, AppError>;
