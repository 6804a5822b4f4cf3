//! Forum comment handlers.

use actix_web::{HttpResponse, web};

use agora_core::DomainError;
use agora_core::domain::{CommentPatch, EntityId, ModerationStatus, NewComment, ReviewNote};
use agora_shared::ApiResponse;
use agora_shared::dto::{AddCommentRequest, ReviewRequest};

use super::posts::find_visible;
use super::{require_text, require_text_if_set};
use crate::middleware::error::{AppResult, found};
use crate::middleware::identity::{Identity, OptionalIdentity};
use crate::state::AppState;

/// GET /api/posts/{id}/comments
pub async fn list_public(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    path: web::Path<EntityId>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    find_visible(&state, post_id, identity.user_id()).await?;

    let comments = state.comments.list_public_comments(post_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(comments)))
}

/// POST /api/posts/{id}/comments
pub async fn add(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<EntityId>,
    body: web::Json<AddCommentRequest>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let req = body.into_inner();
    require_text(&[
        ("content", req.content.as_str()),
        ("author", req.author.as_str()),
    ])?;
    find_visible(&state, post_id, Some(identity.user_id)).await?;

    let comment = state
        .comments
        .add_comment(NewComment {
            post_id,
            content: req.content,
            author: req.author,
            author_id: Some(identity.user_id),
        })
        .await?;
    tracing::info!(id = comment.id, post_id, "Comment submitted for review");

    Ok(HttpResponse::Created().json(ApiResponse::ok(comment)))
}

/// GET /api/admin/posts/{id}/comments
pub async fn list_all(
    state: web::Data<AppState>,
    path: web::Path<EntityId>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    if state.posts.find_post(post_id).await?.is_none() {
        return Err(DomainError::not_found("Post", post_id).into());
    }

    let comments = state.comments.list_all_comments_for_admin(post_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(comments)))
}

/// PATCH /api/admin/comments/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<EntityId>,
    body: web::Json<CommentPatch>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let patch = body.into_inner();
    require_text_if_set(&[
        ("content", patch.content.as_ref()),
        ("author", patch.author.as_ref()),
    ])?;

    found(state.comments.update_comment(id, patch).await?, "Comment", id)?;
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /api/admin/comments/{id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<EntityId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    found(state.comments.delete_comment(id).await?, "Comment", id)?;
    Ok(HttpResponse::NoContent().finish())
}

/// PUT /api/admin/comments/{id}/status
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
    found(
        state.comments.set_comment_status(id, status, note).await?,
        "Comment",
        id,
    )?;
    tracing::info!(id, %status, "Comment reviewed");

    Ok(HttpResponse::NoContent().finish())
}
