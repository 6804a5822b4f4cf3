//! Tag statistics and hot-tag curation.

use actix_web::{HttpResponse, web};

use agora_shared::ApiResponse;
use agora_shared::dto::HotTagsRequest;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/admin/tags
///
/// Every tag shown here keeps appearing in later calls, even at count zero.
pub async fn tag_counts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let counts = state.feed.tag_counts().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(counts)))
}

/// GET /api/admin/tags/hot
pub async fn hot_tags(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let tags = state.curation.hot_tags().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(HotTagsRequest { tags })))
}

/// PUT /api/admin/tags/hot
///
/// Responds with the normalized list that was stored.
pub async fn set_hot_tags(
    state: web::Data<AppState>,
    body: web::Json<HotTagsRequest>,
) -> AppResult<HttpResponse> {
    let tags = state.curation.set_hot_tags(body.into_inner().tags).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(HotTagsRequest { tags })))
}
