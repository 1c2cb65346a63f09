use std::sync::Arc;

use tracing::info;

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::post::{
    AddCommentDTO, CreatePostDTO, LikeDTO, PostActionDTO, PostDTO, RemoveCommentDTO,
};
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::post::{PostReader, PostWriter};
use crate::application::interface::gateway::user::UserReader;
use crate::domain::entities::id::Id;
use crate::domain::entities::post::{Comment, Post};
use crate::domain::entities::user::User;

#[derive(Clone)]
pub struct CreatePostInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    post_writer: Arc<dyn PostWriter>,
}

impl CreatePostInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        post_writer: Arc<dyn PostWriter>,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            post_writer,
        }
    }

    pub async fn execute(&self, dto: CreatePostDTO) -> AppResult<PostDTO> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let user = self
            .user_reader
            .find_by_id(&user_id)
            .await?
            .ok_or(AppError::UserNotFound)?;
        let post = Post::new(&user, dto.text);
        self.post_writer.insert(post.clone()).await?;
        self.db_session.commit().await?;
        info!("Post {} created by user {}", post.id.value, user.id.value);
        Ok(post.into())
    }
}

#[derive(Clone)]
pub struct GetPostsInteractor {
    post_reader: Arc<dyn PostReader>,
}

impl GetPostsInteractor {
    pub fn new(post_reader: Arc<dyn PostReader>) -> Self {
        Self { post_reader }
    }

    pub async fn execute(&self) -> AppResult<Vec<PostDTO>> {
        let posts = self.post_reader.list().await?;
        Ok(posts.into_iter().map(Into::into).collect())
    }
}

#[derive(Clone)]
pub struct GetPostInteractor {
    post_reader: Arc<dyn PostReader>,
}

impl GetPostInteractor {
    pub fn new(post_reader: Arc<dyn PostReader>) -> Self {
        Self { post_reader }
    }

    pub async fn execute(&self, post_id: String) -> AppResult<PostDTO> {
        let post_id: Id<Post> = post_id.try_into().map_err(|_| AppError::PostNotFound)?;
        let post = self
            .post_reader
            .find_by_id(&post_id)
            .await?
            .ok_or(AppError::PostNotFound)?;
        Ok(post.into())
    }
}

#[derive(Clone)]
pub struct DeletePostInteractor {
    db_session: Arc<dyn DBSession>,
    post_reader: Arc<dyn PostReader>,
    post_writer: Arc<dyn PostWriter>,
}

impl DeletePostInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        post_reader: Arc<dyn PostReader>,
        post_writer: Arc<dyn PostWriter>,
    ) -> Self {
        Self {
            db_session,
            post_reader,
            post_writer,
        }
    }

    pub async fn execute(&self, dto: PostActionDTO) -> AppResult<()> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let post_id: Id<Post> = dto.post_id.try_into().map_err(|_| AppError::PostNotFound)?;
        let post = self
            .post_reader
            .find_by_id(&post_id)
            .await?
            .ok_or(AppError::PostNotFound)?;
        if post.user_id != user_id {
            return Err(AppError::AccessDenied);
        }
        self.post_writer.delete(&post_id).await?;
        self.db_session.commit().await?;
        info!("Post {} deleted", post_id.value);
        Ok(())
    }
}

#[derive(Clone)]
pub struct LikePostInteractor {
    db_session: Arc<dyn DBSession>,
    post_reader: Arc<dyn PostReader>,
    post_writer: Arc<dyn PostWriter>,
}

impl LikePostInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        post_reader: Arc<dyn PostReader>,
        post_writer: Arc<dyn PostWriter>,
    ) -> Self {
        Self {
            db_session,
            post_reader,
            post_writer,
        }
    }

    pub async fn execute(&self, dto: PostActionDTO) -> AppResult<Vec<LikeDTO>> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let post_id: Id<Post> = dto.post_id.try_into().map_err(|_| AppError::PostNotFound)?;
        let mut post = self
            .post_reader
            .find_by_id(&post_id)
            .await?
            .ok_or(AppError::PostNotFound)?;
        if post.is_liked_by(&user_id) {
            return Err(AppError::AlreadyLiked);
        }
        post.add_like(user_id);
        self.post_writer.save_engagement(&post).await?;
        self.db_session.commit().await?;
        Ok(post.likes.into_iter().map(Into::into).collect())
    }
}

#[derive(Clone)]
pub struct UnlikePostInteractor {
    db_session: Arc<dyn DBSession>,
    post_reader: Arc<dyn PostReader>,
    post_writer: Arc<dyn PostWriter>,
}

impl UnlikePostInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        post_reader: Arc<dyn PostReader>,
        post_writer: Arc<dyn PostWriter>,
    ) -> Self {
        Self {
            db_session,
            post_reader,
            post_writer,
        }
    }

    pub async fn execute(&self, dto: PostActionDTO) -> AppResult<Vec<LikeDTO>> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let post_id: Id<Post> = dto.post_id.try_into().map_err(|_| AppError::PostNotFound)?;
        let mut post = self
            .post_reader
            .find_by_id(&post_id)
            .await?
            .ok_or(AppError::PostNotFound)?;
        if !post.is_liked_by(&user_id) {
            return Err(AppError::NotYetLiked);
        }
        post.remove_like(&user_id);
        self.post_writer.save_engagement(&post).await?;
        self.db_session.commit().await?;
        Ok(post.likes.into_iter().map(Into::into).collect())
    }
}

#[derive(Clone)]
pub struct AddCommentInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    post_reader: Arc<dyn PostReader>,
    post_writer: Arc<dyn PostWriter>,
}

impl AddCommentInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        post_reader: Arc<dyn PostReader>,
        post_writer: Arc<dyn PostWriter>,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            post_reader,
            post_writer,
        }
    }

    pub async fn execute(&self, dto: AddCommentDTO) -> AppResult<PostDTO> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let post_id: Id<Post> = dto.post_id.try_into().map_err(|_| AppError::PostNotFound)?;
        let user = self
            .user_reader
            .find_by_id(&user_id)
            .await?
            .ok_or(AppError::UserNotFound)?;
        let mut post = self
            .post_reader
            .find_by_id(&post_id)
            .await?
            .ok_or(AppError::PostNotFound)?;
        post.add_comment(Comment::new(&user, dto.text));
        self.post_writer.save_engagement(&post).await?;
        self.db_session.commit().await?;
        Ok(post.into())
    }
}

#[derive(Clone)]
pub struct RemoveCommentInteractor {
    db_session: Arc<dyn DBSession>,
    post_reader: Arc<dyn PostReader>,
    post_writer: Arc<dyn PostWriter>,
}

impl RemoveCommentInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        post_reader: Arc<dyn PostReader>,
        post_writer: Arc<dyn PostWriter>,
    ) -> Self {
        Self {
            db_session,
            post_reader,
            post_writer,
        }
    }

    pub async fn execute(&self, dto: RemoveCommentDTO) -> AppResult<PostDTO> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let post_id: Id<Post> = dto.post_id.try_into().map_err(|_| AppError::PostNotFound)?;
        let comment_id: Id<Comment> = dto
            .comment_id
            .try_into()
            .map_err(|_| AppError::CommentNotFound)?;
        let mut post = self
            .post_reader
            .find_by_id(&post_id)
            .await?
            .ok_or(AppError::PostNotFound)?;
        let comment = post.comment(&comment_id).ok_or(AppError::CommentNotFound)?;
        // Only the comment's author may remove it.
        if comment.user_id != user_id {
            return Err(AppError::AccessDenied);
        }
        post.remove_comment(&comment_id);
        self.post_writer.save_engagement(&post).await?;
        self.db_session.commit().await?;
        Ok(post.into())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use mockall::mock;
    use rstest::rstest;

    use crate::application::app_error::{AppError, AppResult};
    use crate::application::dto::post::{AddCommentDTO, PostActionDTO, RemoveCommentDTO};
    use crate::application::interactors::posts::{
        AddCommentInteractor, DeletePostInteractor, LikePostInteractor, RemoveCommentInteractor,
        UnlikePostInteractor,
    };
    use crate::application::interface::db::DBSession;
    use crate::application::interface::gateway::post::{PostReader, PostWriter};
    use crate::application::interface::gateway::user::UserReader;
    use crate::domain::entities::id::Id;
    use crate::domain::entities::post::{Comment, Post};
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
            async fn find_by_id(&self, id: &Id<User>) -> AppResult<Option<User>>;
        }
    }

    mock! {
        pub PostReaderMock {}

        #[async_trait]
        impl PostReader for PostReaderMock {
            async fn find_by_id(&self, id: &Id<Post>) -> AppResult<Option<Post>>;
            async fn list(&self) -> AppResult<Vec<Post>>;
        }
    }

    mock! {
        pub PostWriterMock {}

        #[async_trait]
        impl PostWriter for PostWriterMock {
            async fn insert(&self, post: Post) -> AppResult<Id<Post>>;
            async fn save_engagement(&self, post: &Post) -> AppResult<()>;
            async fn delete(&self, post_id: &Id<Post>) -> AppResult<()>;
            async fn delete_by_user_id(&self, user_id: &Id<User>) -> AppResult<()>;
        }
    }

    // Constants
    const USER_ID: &str = "019c47ec-183d-744e-b11d-cd409015bf13";
    const OTHER_USER_ID: &str = "019c47ec-5a02-7cc5-8f20-9a1f3a6f2d84";
    const POST_ID: &str = "019c47ec-9b7e-7d31-a4c2-6a0e5b8c1f02";

    fn build_user(id: &str) -> User {
        User {
            id: id.to_string().try_into().unwrap(),
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            password: "hashed".to_string(),
            avatar: "https://www.gravatar.com/avatar/abc?s=200&d=mm&r=pg".to_string(),
            created_at: chrono::Utc::now(),
        }
    }

    fn build_post(author_id: &str) -> Post {
        let mut post = Post::new(&build_user(author_id), "hello".to_string());
        post.id = POST_ID.to_string().try_into().unwrap();
        post
    }

    // DeletePostInteractor tests
    #[rstest]
    #[tokio::test]
    async fn test_delete_post_by_owner() {
        let mut db_session = MockDBSessionMock::new();
        let mut post_reader = MockPostReaderMock::new();
        let mut post_writer = MockPostWriterMock::new();

        post_reader
            .expect_find_by_id()
            .returning(|_| Ok(Some(build_post(USER_ID))));
        post_writer.expect_delete().returning(|_| Ok(()));
        db_session.expect_commit().returning(|| Ok(()));

        let interactor = DeletePostInteractor::new(
            Arc::new(db_session),
            Arc::new(post_reader),
            Arc::new(post_writer),
        );

        let dto = PostActionDTO {
            user_id: USER_ID.to_string(),
            post_id: POST_ID.to_string(),
        };
        assert!(interactor.execute(dto).await.is_ok());
    }

    #[rstest]
    #[tokio::test]
    async fn test_delete_post_by_non_owner_denied() {
        let db_session = MockDBSessionMock::new();
        let mut post_reader = MockPostReaderMock::new();
        let post_writer = MockPostWriterMock::new();

        post_reader
            .expect_find_by_id()
            .returning(|_| Ok(Some(build_post(USER_ID))));

        let interactor = DeletePostInteractor::new(
            Arc::new(db_session),
            Arc::new(post_reader),
            Arc::new(post_writer),
        );

        let dto = PostActionDTO {
            user_id: OTHER_USER_ID.to_string(),
            post_id: POST_ID.to_string(),
        };
        let result = interactor.execute(dto).await;
        assert!(matches!(result.unwrap_err(), AppError::AccessDenied));
    }

    #[rstest]
    #[tokio::test]
    async fn test_delete_post_malformed_id_is_not_found() {
        let db_session = MockDBSessionMock::new();
        let post_reader = MockPostReaderMock::new();
        let post_writer = MockPostWriterMock::new();

        let interactor = DeletePostInteractor::new(
            Arc::new(db_session),
            Arc::new(post_reader),
            Arc::new(post_writer),
        );

        let dto = PostActionDTO {
            user_id: USER_ID.to_string(),
            post_id: "not-a-uuid".to_string(),
        };
        let result = interactor.execute(dto).await;
        assert!(matches!(result.unwrap_err(), AppError::PostNotFound));
    }

    // LikePostInteractor tests
    #[rstest]
    #[tokio::test]
    async fn test_like_post_adds_like() {
        let mut db_session = MockDBSessionMock::new();
        let mut post_reader = MockPostReaderMock::new();
        let mut post_writer = MockPostWriterMock::new();

        post_reader
            .expect_find_by_id()
            .returning(|_| Ok(Some(build_post(OTHER_USER_ID))));
        post_writer
            .expect_save_engagement()
            .withf(|post| post.likes.len() == 1)
            .returning(|_| Ok(()));
        db_session.expect_commit().returning(|| Ok(()));

        let interactor = LikePostInteractor::new(
            Arc::new(db_session),
            Arc::new(post_reader),
            Arc::new(post_writer),
        );

        let dto = PostActionDTO {
            user_id: USER_ID.to_string(),
            post_id: POST_ID.to_string(),
        };
        let likes = interactor.execute(dto).await.unwrap();
        assert_eq!(likes.len(), 1);
        assert_eq!(likes[0].user_id, USER_ID);
    }

    #[rstest]
    #[tokio::test]
    async fn test_like_post_twice_fails() {
        let db_session = MockDBSessionMock::new();
        let mut post_reader = MockPostReaderMock::new();
        let post_writer = MockPostWriterMock::new();

        post_reader.expect_find_by_id().returning(|_| {
            let mut post = build_post(OTHER_USER_ID);
            post.add_like(USER_ID.to_string().try_into().unwrap());
            Ok(Some(post))
        });

        let interactor = LikePostInteractor::new(
            Arc::new(db_session),
            Arc::new(post_reader),
            Arc::new(post_writer),
        );

        let dto = PostActionDTO {
            user_id: USER_ID.to_string(),
            post_id: POST_ID.to_string(),
        };
        let result = interactor.execute(dto).await;
        assert!(matches!(result.unwrap_err(), AppError::AlreadyLiked));
    }

    #[rstest]
    #[tokio::test]
    async fn test_unlike_without_like_fails() {
        let db_session = MockDBSessionMock::new();
        let mut post_reader = MockPostReaderMock::new();
        let post_writer = MockPostWriterMock::new();

        post_reader
            .expect_find_by_id()
            .returning(|_| Ok(Some(build_post(OTHER_USER_ID))));

        let interactor = UnlikePostInteractor::new(
            Arc::new(db_session),
            Arc::new(post_reader),
            Arc::new(post_writer),
        );

        let dto = PostActionDTO {
            user_id: USER_ID.to_string(),
            post_id: POST_ID.to_string(),
        };
        let result = interactor.execute(dto).await;
        assert!(matches!(result.unwrap_err(), AppError::NotYetLiked));
    }

    #[rstest]
    #[tokio::test]
    async fn test_unlike_removes_only_own_like() {
        let mut db_session = MockDBSessionMock::new();
        let mut post_reader = MockPostReaderMock::new();
        let mut post_writer = MockPostWriterMock::new();

        post_reader.expect_find_by_id().returning(|_| {
            let mut post = build_post(OTHER_USER_ID);
            post.add_like(OTHER_USER_ID.to_string().try_into().unwrap());
            post.add_like(USER_ID.to_string().try_into().unwrap());
            Ok(Some(post))
        });
        post_writer
            .expect_save_engagement()
            .withf(|post| post.likes.len() == 1)
            .returning(|_| Ok(()));
        db_session.expect_commit().returning(|| Ok(()));

        let interactor = UnlikePostInteractor::new(
            Arc::new(db_session),
            Arc::new(post_reader),
            Arc::new(post_writer),
        );

        let dto = PostActionDTO {
            user_id: USER_ID.to_string(),
            post_id: POST_ID.to_string(),
        };
        let likes = interactor.execute(dto).await.unwrap();
        assert_eq!(likes.len(), 1);
        assert_eq!(likes[0].user_id, OTHER_USER_ID);
    }

    // Comment interactor tests
    #[rstest]
    #[tokio::test]
    async fn test_add_comment_prepends_author_snapshot() {
        let mut db_session = MockDBSessionMock::new();
        let mut user_reader = MockUserReaderMock::new();
        let mut post_reader = MockPostReaderMock::new();
        let mut post_writer = MockPostWriterMock::new();

        user_reader
            .expect_find_by_id()
            .returning(|_| Ok(Some(build_user(USER_ID))));
        post_reader.expect_find_by_id().returning(|_| {
            let mut post = build_post(OTHER_USER_ID);
            post.add_comment(Comment::new(&build_user(OTHER_USER_ID), "first".to_string()));
            Ok(Some(post))
        });
        post_writer
            .expect_save_engagement()
            .withf(|post| post.comments.len() == 2 && post.comments[0].text == "second")
            .returning(|_| Ok(()));
        db_session.expect_commit().returning(|| Ok(()));

        let interactor = AddCommentInteractor::new(
            Arc::new(db_session),
            Arc::new(user_reader),
            Arc::new(post_reader),
            Arc::new(post_writer),
        );

        let dto = AddCommentDTO {
            user_id: USER_ID.to_string(),
            post_id: POST_ID.to_string(),
            text: "second".to_string(),
        };
        let result = interactor.execute(dto).await.unwrap();
        assert_eq!(result.comments[0].text, "second");
        assert_eq!(result.comments[0].name, "Jane");
    }

    #[rstest]
    #[tokio::test]
    async fn test_remove_comment_targets_exact_comment() {
        let mut db_session = MockDBSessionMock::new();
        let mut post_reader = MockPostReaderMock::new();
        let mut post_writer = MockPostWriterMock::new();

        // Two comments by the same author; only the addressed one goes away.
        let author = build_user(USER_ID);
        let keep = Comment::new(&author, "keep".to_string());
        let drop = Comment::new(&author, "drop".to_string());
        let drop_id = drop.id.value.to_string();
        let stored = {
            let mut post = build_post(OTHER_USER_ID);
            post.add_comment(keep);
            post.add_comment(drop);
            post
        };
        post_reader
            .expect_find_by_id()
            .returning(move |_| Ok(Some(stored.clone())));
        post_writer
            .expect_save_engagement()
            .withf(|post| post.comments.len() == 1 && post.comments[0].text == "keep")
            .returning(|_| Ok(()));
        db_session.expect_commit().returning(|| Ok(()));

        let interactor = RemoveCommentInteractor::new(
            Arc::new(db_session),
            Arc::new(post_reader),
            Arc::new(post_writer),
        );

        let dto = RemoveCommentDTO {
            user_id: USER_ID.to_string(),
            post_id: POST_ID.to_string(),
            comment_id: drop_id,
        };
        let result = interactor.execute(dto).await.unwrap();
        assert_eq!(result.comments.len(), 1);
        assert_eq!(result.comments[0].text, "keep");
    }

    #[rstest]
    #[tokio::test]
    async fn test_remove_comment_by_non_author_denied() {
        let db_session = MockDBSessionMock::new();
        let mut post_reader = MockPostReaderMock::new();
        let post_writer = MockPostWriterMock::new();

        let comment = Comment::new(&build_user(OTHER_USER_ID), "hands off".to_string());
        let comment_id = comment.id.value.to_string();
        post_reader.expect_find_by_id().returning(move |_| {
            let mut post = build_post(OTHER_USER_ID);
            post.add_comment(comment.clone());
            Ok(Some(post))
        });

        let interactor = RemoveCommentInteractor::new(
            Arc::new(db_session),
            Arc::new(post_reader),
            Arc::new(post_writer),
        );

        let dto = RemoveCommentDTO {
            user_id: USER_ID.to_string(),
            post_id: POST_ID.to_string(),
            comment_id,
        };
        let result = interactor.execute(dto).await;
        assert!(matches!(result.unwrap_err(), AppError::AccessDenied));
    }

    #[rstest]
    #[tokio::test]
    async fn test_remove_unknown_comment_not_found() {
        let db_session = MockDBSessionMock::new();
        let mut post_reader = MockPostReaderMock::new();
        let post_writer = MockPostWriterMock::new();

        post_reader
            .expect_find_by_id()
            .returning(|_| Ok(Some(build_post(OTHER_USER_ID))));

        let interactor = RemoveCommentInteractor::new(
            Arc::new(db_session),
            Arc::new(post_reader),
            Arc::new(post_writer),
        );

        let dto = RemoveCommentDTO {
            user_id: USER_ID.to_string(),
            post_id: POST_ID.to_string(),
            comment_id: Id::<Comment>::generate().value.to_string(),
        };
        let result = interactor.execute(dto).await;
        assert!(matches!(result.unwrap_err(), AppError::CommentNotFound));
    }
}
