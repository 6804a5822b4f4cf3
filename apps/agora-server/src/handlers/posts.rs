//! Forum post handlers, public and moderation.

use actix_web::{HttpResponse, web};

use agora_core::DomainError;
use agora_core::domain::{
    EntityId, ModerationStatus, NewPost, PostPatch, PostView, ReviewNote, UserId,
};
use agora_shared::ApiResponse;
use agora_shared::dto::{CreatePostRequest, ReviewRequest, SearchQuery};

use super::{require_text, require_text_if_set};
use crate::middleware::error::{AppResult, found};
use crate::middleware::identity::{Identity, OptionalIdentity};
use crate::state::AppState;

/// Published posts are visible to everyone; the author also sees their own
/// pending or rejected submission.
pub(super) fn visible_to(view: &PostView, viewer: Option<UserId>) -> bool {
    view.post.is_public() || (viewer.is_some() && view.post.author_id == viewer)
}

/// Look up a post the caller may see, or 404.
pub(super) async fn find_visible(
    state: &AppState,
    id: EntityId,
    viewer: Option<UserId>,
) -> AppResult<PostView> {
    state
        .posts
        .find_post(id)
        .await?
        .filter(|view| visible_to(view, viewer))
        .ok_or_else(|| DomainError::not_found("Post", id).into())
}

/// GET /api/posts?q=
pub async fn list_public(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let posts = match query.into_inner().q {
        Some(keyword) => state.posts.search_posts(&keyword).await?,
        None => state.posts.list_public_posts().await?,
    };
    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// GET /api/posts/{id}
pub async fn get_public(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    path: web::Path<EntityId>,
) -> AppResult<HttpResponse> {
    let view = find_visible(&state, path.into_inner(), identity.user_id()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(view)))
}

/// POST /api/posts
///
/// New posts wait for review before they show up publicly.
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    require_text(&[
        ("title", req.title.as_str()),
        ("content", req.content.as_str()),
        ("author", req.author.as_str()),
    ])?;

    let post = state
        .posts
        .create_post(NewPost {
            title: req.title,
            content: req.content,
            author: req.author,
            author_id: Some(identity.user_id),
        })
        .await?;
    tracing::info!(id = post.id, user_id = identity.user_id, "Post submitted for review");

    Ok(HttpResponse::Created().json(ApiResponse::ok(post)))
}

/// GET /api/admin/posts
pub async fn list_all(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_all_posts_for_admin().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// GET /api/admin/posts/{id}
pub async fn get_any(
    state: web::Data<AppState>,
    path: web::Path<EntityId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let view = state
        .posts
        .find_post(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Post", id))?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(view)))
}

/// PATCH /api/admin/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<EntityId>,
    body: web::Json<PostPatch>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let patch = body.into_inner();
    require_text_if_set(&[
        ("title", patch.title.as_ref()),
        ("content", patch.content.as_ref()),
        ("author", patch.author.as_ref()),
    ])?;

    found(state.posts.update_post(id, patch).await?, "Post", id)?;
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /api/admin/posts/{id}
///
/// Removes the post's comments too.
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<EntityId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    found(state.posts.delete_post(id).await?, "Post", id)?;
    tracing::info!(id, "Post deleted with its comments");
    Ok(HttpResponse::NoContent().finish())
}

/// PUT /api/admin/posts/{id}/status
pub async fn review(
    state: web::Data<AppState>,
    path: web::Path<EntityId>,
    body: web::Json<ReviewRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();
    let status: ModerationStatus = req.status.parse()?;

    let note = ReviewNote {
        reviewed_by: req.reviewed_by,
        reject_reason: req.reject_reason,
    };
    found(state.posts.set_post_status(id, status, note).await?, "Post", id)?;
    tracing::info!(id, %status, "Post reviewed");

    Ok(HttpResponse::NoContent().finish())
}
