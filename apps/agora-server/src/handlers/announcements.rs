//! Announcement handlers.

use actix_web::{HttpResponse, web};

use agora_core::DomainError;
use agora_core::domain::{AnnouncementPatch, EntityId, NewAnnouncement};
use agora_shared::ApiResponse;

use super::{require_text, require_text_if_set};
use crate::middleware::error::{AppResult, found};
use crate::state::AppState;

/// GET /api/announcements
pub async fn list_public(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let announcements = state.announcements.list_public_announcements().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(announcements)))
}

/// GET /api/announcements/{id}
///
/// Drafts are hidden from the public.
pub async fn get_public(
    state: web::Data<AppState>,
    path: web::Path<EntityId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let announcement = state
        .announcements
        .find_announcement(id)
        .await?
        .filter(|a| a.is_public())
        .ok_or_else(|| DomainError::not_found("Announcement", id))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(announcement)))
}

/// GET /api/admin/announcements
pub async fn list_all(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let announcements = state.announcements.list_all_announcements().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(announcements)))
}

/// POST /api/admin/announcements
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<NewAnnouncement>,
) -> AppResult<HttpResponse> {
    let new = body.into_inner();
    require_text(&[("title", new.title.as_str()), ("content", new.content.as_str())])?;

    let announcement = state.announcements.create_announcement(new).await?;
    tracing::info!(id = announcement.id, "Announcement created");

    Ok(HttpResponse::Created().json(ApiResponse::ok(announcement)))
}

/// PATCH /api/admin/announcements/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<EntityId>,
    body: web::Json<AnnouncementPatch>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let patch = body.into_inner();
    require_text_if_set(&[
        ("title", patch.title.as_ref()),
        ("content", patch.content.as_ref()),
    ])?;

    found(
        state.announcements.update_announcement(id, patch).await?,
        "Announcement",
        id,
    )?;
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /api/admin/announcements/{id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<EntityId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    found(
        state.announcements.delete_announcement(id).await?,
        "Announcement",
        id,
    )?;
    tracing::info!(id, "Announcement deleted");
    Ok(HttpResponse::NoContent().finish())
}
