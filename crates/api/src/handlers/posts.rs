//! Handlers for the post feed, post detail, and content creation.

use axum::extract::State;
use axum::response::IntoResponse;
use serde::Serialize;

use feed_core::comment_tree::{build_comment_tree, CommentNode, FlatComment};
use feed_core::error::CoreError;
use feed_core::types::DbId;
use feed_db::models::comment::CreateComment;
use feed_db::models::post::{CreatePost, FeedPost};
use feed_db::repositories::{CommentRepo, PostRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::handlers::ensure_known_caller;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// A post with its full comment tree.
#[derive(Debug, Serialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub post: FeedPost,
    pub comments: Vec<CommentNode>,
}

// ---------------------------------------------------------------------------
// GET /posts
// ---------------------------------------------------------------------------

/// List all posts, newest first, with like counts.
pub async fn list_posts(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let posts = PostRepo::list_feed(&state.pool).await?;

    tracing::debug!(count = posts.len(), "Listed feed posts");

    Ok(DataResponse::ok(posts))
}

// ---------------------------------------------------------------------------
// GET /posts/:id
// ---------------------------------------------------------------------------

/// Get one post with its nested comments.
pub async fn get_post(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let post = PostRepo::find_feed_post(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Post", id))?;

    let rows = CommentRepo::list_for_post(&state.pool, id).await?;
    let comment_count = rows.len();
    let comments = build_comment_tree(rows.into_iter().map(FlatComment::from).collect());

    tracing::debug!(post_id = id, comment_count, "Loaded post detail");

    Ok(DataResponse::ok(PostDetail { post, comments }))
}

// ---------------------------------------------------------------------------
// POST /posts
// ---------------------------------------------------------------------------

/// Create a post authored by the caller.
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(body): ApiJson<CreatePost>,
) -> AppResult<impl IntoResponse> {
    ensure_known_caller(&state.pool, auth.user_id).await?;

    let post = PostRepo::create(&state.pool, auth.user_id, &body).await?;

    tracing::info!(post_id = post.id, user_id = auth.user_id, "Post created");

    Ok(DataResponse::created(post))
}

// ---------------------------------------------------------------------------
// POST /posts/:id/comments
// ---------------------------------------------------------------------------

/// Comment on a post, optionally replying to another comment on the same post.
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(post_id): ApiPath<DbId>,
    ApiJson(body): ApiJson<CreateComment>,
) -> AppResult<impl IntoResponse> {
    ensure_known_caller(&state.pool, auth.user_id).await?;

    PostRepo::find_by_id(&state.pool, post_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Post", post_id))?;

    if let Some(parent_id) = body.parent_id {
        let parent = CommentRepo::find_by_id(&state.pool, parent_id)
            .await?
            .ok_or_else(|| CoreError::not_found("Comment", parent_id))?;
        if parent.post_id != post_id {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Parent comment {parent_id} belongs to a different post"
            ))));
        }
    }

    let comment = CommentRepo::create(&state.pool, post_id, auth.user_id, &body).await?;

    tracing::info!(
        comment_id = comment.id,
        post_id,
        parent_id = ?comment.parent_id,
        user_id = auth.user_id,
        "Comment created"
    );

    Ok(DataResponse::created(comment))
}
