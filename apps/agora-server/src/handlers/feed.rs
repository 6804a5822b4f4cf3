//! Activity feed handlers.

use actix_web::{HttpResponse, web};

use agora_shared::ApiResponse;
use agora_shared::dto::FeedSelectionRequest;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/feed/sources
pub async fn by_source(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let groups = state.feed.candidates_by_source().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(groups)))
}

/// GET /api/feed
pub async fn candidates(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let candidates = state.feed.candidates().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(candidates)))
}

/// POST /api/feed/selected
///
/// Resolves an ad-hoc id list, e.g. a curator previewing a selection.
pub async fn selected(
    state: web::Data<AppState>,
    body: web::Json<FeedSelectionRequest>,
) -> AppResult<HttpResponse> {
    let selected = state.feed.selected(&body.ids).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(selected)))
}

/// GET /api/feed/home
pub async fn homepage(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let home = state.feed.homepage().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(home)))
}

/// GET /api/admin/feed/selection
pub async fn get_selection(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let ids = state.curation.feed_selection().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(FeedSelectionRequest { ids })))
}

/// PUT /api/admin/feed/selection
pub async fn set_selection(
    state: web::Data<AppState>,
    body: web::Json<FeedSelectionRequest>,
) -> AppResult<HttpResponse> {
    let ids = body.into_inner().ids;
    tracing::info!(count = ids.len(), "Feed selection replaced");
    state.curation.set_feed_selection(ids).await?;
    Ok(HttpResponse::NoContent().finish())
}
