use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapter::http::app_error_impl::{ErrorResponse, ErrorsResponse};
use crate::adapter::http::middleware::extractor::AuthUser;
use crate::adapter::http::schema::auth::MessageResponse;
use crate::adapter::http::schema::post::{
    AddCommentRequest, CreatePostRequest, LikeResponse, PostResponse,
};
use crate::adapter::http::validation::ValidJson;
use crate::application::app_error::AppResult;
use crate::application::dto::post::{
    AddCommentDTO, CreatePostDTO, PostActionDTO, RemoveCommentDTO,
};
use crate::application::interactors::posts::{
    AddCommentInteractor, CreatePostInteractor, DeletePostInteractor, GetPostInteractor,
    GetPostsInteractor, LikePostInteractor, RemoveCommentInteractor, UnlikePostInteractor,
};

#[utoipa::path(
    post,
    path = "/posts",
    tag = "Posts",
    security(("bearer" = [])),
    request_body = CreatePostRequest,
    responses(
        (status = 200, description = "Post created", body = PostResponse),
        (status = 400, description = "Validation failed", body = ErrorsResponse)
    )
)]
pub async fn create_post(
    interactor: CreatePostInteractor,
    user: AuthUser,
    ValidJson(payload): ValidJson<CreatePostRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = CreatePostDTO {
        user_id: user.user_id,
        text: payload.text,
    };
    let result = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(PostResponse::from(result))))
}

#[utoipa::path(
    get,
    path = "/posts",
    tag = "Posts",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All posts, newest first", body = Vec<PostResponse>)
    )
)]
pub async fn get_posts(interactor: GetPostsInteractor) -> AppResult<impl IntoResponse> {
    let result = interactor.execute().await?;
    let posts: Vec<PostResponse> = result.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(posts)))
}

#[utoipa::path(
    get,
    path = "/posts/{post_id}",
    tag = "Posts",
    security(("bearer" = [])),
    params(("post_id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "The post", body = PostResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    )
)]
pub async fn get_post(
    interactor: GetPostInteractor,
    Path(post_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let result = interactor.execute(post_id).await?;
    Ok((StatusCode::OK, Json(PostResponse::from(result))))
}

#[utoipa::path(
    delete,
    path = "/posts/{post_id}",
    tag = "Posts",
    security(("bearer" = [])),
    params(("post_id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post removed", body = MessageResponse),
        (status = 403, description = "Caller does not own the post", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    )
)]
pub async fn delete_post(
    interactor: DeletePostInteractor,
    user: AuthUser,
    Path(post_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dto = PostActionDTO {
        user_id: user.user_id,
        post_id,
    };
    interactor.execute(dto).await?;
    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "Post removed".to_string(),
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/posts/like/{post_id}",
    tag = "Posts",
    security(("bearer" = [])),
    params(("post_id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Updated likes, newest first", body = Vec<LikeResponse>),
        (status = 400, description = "Post already liked", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    )
)]
pub async fn like_post(
    interactor: LikePostInteractor,
    user: AuthUser,
    Path(post_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dto = PostActionDTO {
        user_id: user.user_id,
        post_id,
    };
    let result = interactor.execute(dto).await?;
    let likes: Vec<LikeResponse> = result.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(likes)))
}

#[utoipa::path(
    put,
    path = "/posts/unlike/{post_id}",
    tag = "Posts",
    security(("bearer" = [])),
    params(("post_id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Updated likes", body = Vec<LikeResponse>),
        (status = 400, description = "Post has not yet been liked", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    )
)]
pub async fn unlike_post(
    interactor: UnlikePostInteractor,
    user: AuthUser,
    Path(post_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dto = PostActionDTO {
        user_id: user.user_id,
        post_id,
    };
    let result = interactor.execute(dto).await?;
    let likes: Vec<LikeResponse> = result.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(likes)))
}

#[utoipa::path(
    post,
    path = "/posts/comment/{post_id}",
    tag = "Posts",
    security(("bearer" = [])),
    params(("post_id" = String, Path, description = "Post id")),
    request_body = AddCommentRequest,
    responses(
        (status = 200, description = "Post with the new comment", body = PostResponse),
        (status = 400, description = "Validation failed", body = ErrorsResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    )
)]
pub async fn add_comment(
    interactor: AddCommentInteractor,
    user: AuthUser,
    Path(post_id): Path<String>,
    ValidJson(payload): ValidJson<AddCommentRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = AddCommentDTO {
        user_id: user.user_id,
        post_id,
        text: payload.text,
    };
    let result = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(PostResponse::from(result))))
}

#[utoipa::path(
    delete,
    path = "/posts/comment/{post_id}/{comment_id}",
    tag = "Posts",
    security(("bearer" = [])),
    params(
        ("post_id" = String, Path, description = "Post id"),
        ("comment_id" = String, Path, description = "Comment id")
    ),
    responses(
        (status = 200, description = "Post without the comment", body = PostResponse),
        (status = 403, description = "Caller is not the comment's author", body = ErrorResponse),
        (status = 404, description = "Post or comment not found", body = ErrorResponse)
    )
)]
pub async fn remove_comment(
    interactor: RemoveCommentInteractor,
    user: AuthUser,
    Path((post_id, comment_id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let dto = RemoveCommentDTO {
        user_id: user.user_id,
        post_id,
        comment_id,
    };
    let result = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(PostResponse::from(result))))
}
