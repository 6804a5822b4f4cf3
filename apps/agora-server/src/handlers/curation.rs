//! Homepage carousel and check-in widget.

use actix_web::{HttpResponse, web};

use agora_core::domain::{CheckInPatch, EntityId, NewSlide, SlideMove, SlidePatch};
use agora_shared::ApiResponse;
use agora_shared::dto::MoveSlideRequest;

use super::{require_text, require_text_if_set};
use crate::middleware::error::{AppError, AppResult, found};
use crate::state::AppState;

/// GET /api/carousel
pub async fn list_slides(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let slides = state.curation.list_slides().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(slides)))
}

/// POST /api/admin/carousel
pub async fn create_slide(
    state: web::Data<AppState>,
    body: web::Json<NewSlide>,
) -> AppResult<HttpResponse> {
    let new = body.into_inner();
    require_text(&[
        ("title", new.title.as_str()),
        ("imageUrl", new.image_url.as_str()),
    ])?;

    let slide = state.curation.create_slide(new).await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(slide)))
}

/// PATCH /api/admin/carousel/{id}
pub async fn update_slide(
    state: web::Data<AppState>,
    path: web::Path<EntityId>,
    body: web::Json<SlidePatch>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let patch = body.into_inner();
    require_text_if_set(&[
        ("title", patch.title.as_ref()),
        ("imageUrl", patch.image_url.as_ref()),
    ])?;

    found(state.curation.update_slide(id, patch).await?, "CarouselSlide", id)?;
    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/admin/carousel/{id}/move
///
/// A slide already at the requested edge is rejected with 422.
pub async fn move_slide(
    state: web::Data<AppState>,
    path: web::Path<EntityId>,
    body: web::Json<MoveSlideRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let direction: SlideMove = body.into_inner().direction.parse()?;

    if !state.curation.move_slide(id, direction).await? {
        let exists = state.curation.list_slides().await?.iter().any(|s| s.id == id);
        found(exists, "CarouselSlide", id)?;
        return Err(AppError::Validation(vec![format!(
            "slide {id} cannot move {direction}"
        )]));
    }
    tracing::info!(id, %direction, "Carousel slide moved");
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /api/admin/carousel/{id}
pub async fn delete_slide(
    state: web::Data<AppState>,
    path: web::Path<EntityId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    found(state.curation.delete_slide(id).await?, "CarouselSlide", id)?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/check-in
pub async fn check_in(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let config = state.curation.check_in_config().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(config)))
}

/// PATCH /api/admin/check-in
///
/// Fields left out of the body keep their current value.
pub async fn update_check_in(
    state: web::Data<AppState>,
    body: web::Json<CheckInPatch>,
) -> AppResult<HttpResponse> {
    let patch = body.into_inner();
    require_text_if_set(&[
        ("dailyChallengeId", patch.daily_challenge_id.as_ref()),
        ("dailyChallengeTitle", patch.daily_challenge_title.as_ref()),
    ])?;

    let config = state.curation.update_check_in_config(patch).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(config)))
}
