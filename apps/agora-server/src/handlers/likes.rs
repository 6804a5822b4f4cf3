//! Like toggles for posts and comments.

use actix_web::{HttpResponse, web};

use agora_core::DomainError;
use agora_core::domain::{EntityId, LikeTarget};
use agora_shared::ApiResponse;
use agora_shared::dto::{LikeStatusResponse, LikeToggleResponse};

use crate::middleware::error::AppResult;
use crate::middleware::identity::OptionalIdentity;
use crate::state::AppState;

async fn ensure_exists(state: &AppState, target: LikeTarget, id: EntityId) -> AppResult<()> {
    let exists = match target {
        LikeTarget::Post => state.posts.find_post(id).await?.is_some(),
        LikeTarget::Comment => state.comments.find_comment(id).await?.is_some(),
    };
    if exists {
        Ok(())
    } else {
        Err(DomainError::not_found(target.entity_type(), id).into())
    }
}

async fn status(
    state: &AppState,
    target: LikeTarget,
    id: EntityId,
    identity: OptionalIdentity,
) -> AppResult<LikeStatusResponse> {
    Ok(LikeStatusResponse {
        liked: state.likes.has_liked(target, id, identity.user_id()).await?,
        like_count: state.likes.like_count(target, id).await?,
    })
}

async fn toggle(
    state: &AppState,
    target: LikeTarget,
    id: EntityId,
    identity: OptionalIdentity,
) -> AppResult<HttpResponse> {
    ensure_exists(state, target, id).await?;

    // Anonymous callers get the current state back with nothing recorded.
    let toggled = state.likes.toggle_like(target, id, identity.user_id()).await?;
    let current = status(state, target, id, identity).await?;
    if toggled {
        tracing::debug!(entity = target.entity_type(), id, liked = current.liked, "Like toggled");
    }

    Ok(HttpResponse::Ok().json(ApiResponse::ok(LikeToggleResponse {
        toggled,
        liked: current.liked,
        like_count: current.like_count,
    })))
}

/// GET /api/posts/{id}/like
pub async fn post_status(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    path: web::Path<EntityId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    ensure_exists(&state, LikeTarget::Post, id).await?;
    let current = status(&state, LikeTarget::Post, id, identity).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(current)))
}

/// POST /api/posts/{id}/like
pub async fn toggle_post(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    path: web::Path<EntityId>,
) -> AppResult<HttpResponse> {
    toggle(&state, LikeTarget::Post, path.into_inner(), identity).await
}

/// GET /api/comments/{id}/like
pub async fn comment_status(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    path: web::Path<EntityId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    ensure_exists(&state, LikeTarget::Comment, id).await?;
    let current = status(&state, LikeTarget::Comment, id, identity).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(current)))
}

/// POST /api/comments/{id}/like
pub async fn toggle_comment(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    path: web::Path<EntityId>,
) -> AppResult<HttpResponse> {
    toggle(&state, LikeTarget::Comment, path.into_inner(), identity).await
}
