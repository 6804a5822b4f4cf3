//! HTTP handlers and route configuration.
//!
//! Routes under `/api/admin` perform no role check of their own. The service
//! expects to sit behind a gateway that only forwards `/api/admin` requests
//! from authenticated moderators; exposed directly, anyone can moderate.
//! `X-User-Id` is likewise trusted as set by that gateway.

mod announcements;
mod comments;
mod curation;
mod feed;
mod health;
mod likes;
mod posts;
mod tags;


use actix_web::{error::JsonPayloadError, web};

use crate::middleware::error::{AppError, AppResult};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            // Announcements
            .route("/announcements", web::get().to(announcements::list_public))
            .route("/announcements/{id}", web::get().to(announcements::get_public))
            // Forum
            .route("/posts", web::get().to(posts::list_public))
            .route("/posts", web::post().to(posts::create))
            .route("/posts/{id}", web::get().to(posts::get_public))
            .route("/posts/{id}/comments", web::get().to(comments::list_public))
            .route("/posts/{id}/comments", web::post().to(comments::add))
            // Likes
            .route("/posts/{id}/like", web::get().to(likes::post_status))
            .route("/posts/{id}/like", web::post().to(likes::toggle_post))
            .route("/comments/{id}/like", web::get().to(likes::comment_status))
            .route("/comments/{id}/like", web::post().to(likes::toggle_comment))
            // Feed
            .service(
                web::scope("/feed")
                    .route("", web::get().to(feed::candidates))
                    .route("/sources", web::get().to(feed::by_source))
                    .route("/selected", web::post().to(feed::selected))
                    .route("/home", web::get().to(feed::homepage)),
            )
            // Homepage widgets
            .route("/carousel", web::get().to(curation::list_slides))
            .route("/check-in", web::get().to(curation::check_in))
            // Back office
            .service(
                web::scope("/admin")
                    .route("/announcements", web::get().to(announcements::list_all))
                    .route("/announcements", web::post().to(announcements::create))
                    .route("/announcements/{id}", web::patch().to(announcements::update))
                    .route("/announcements/{id}", web::delete().to(announcements::delete))
                    .route("/posts", web::get().to(posts::list_all))
                    .route("/posts/{id}", web::get().to(posts::get_any))
                    .route("/posts/{id}", web::patch().to(posts::update))
                    .route("/posts/{id}", web::delete().to(posts::delete))
                    .route("/posts/{id}/status", web::put().to(posts::review))
                    .route("/posts/{id}/comments", web::get().to(comments::list_all))
                    .route("/comments/{id}", web::patch().to(comments::update))
                    .route("/comments/{id}", web::delete().to(comments::delete))
                    .route("/comments/{id}/status", web::put().to(comments::review))
                    .route("/feed/selection", web::get().to(feed::get_selection))
                    .route("/feed/selection", web::put().to(feed::set_selection))
                    .route("/tags", web::get().to(tags::tag_counts))
                    .route("/tags/hot", web::get().to(tags::hot_tags))
                    .route("/tags/hot", web::put().to(tags::set_hot_tags))
                    .route("/carousel", web::post().to(curation::create_slide))
                    .route("/carousel/{id}", web::patch().to(curation::update_slide))
                    .route("/carousel/{id}", web::delete().to(curation::delete_slide))
                    .route("/carousel/{id}/move", web::post().to(curation::move_slide))
                    .route("/check-in", web::patch().to(curation::update_check_in)),
            ),
    );
}

/// Malformed JSON bodies become RFC 7807 bad requests.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req| {
        AppError::BadRequest(err.to_string()).into()
    })
}

/// Reject blank required text fields with a 422 listing every offender.
fn require_text(fields: &[(&str, &str)]) -> AppResult<()> {
    let errors: Vec<String> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| format!("{} must not be empty", name))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

/// Same check for fields a patch may leave out.
fn require_text_if_set(fields: &[(&str, Option<&String>)]) -> AppResult<()> {
    let present: Vec<(&str, &str)> = fields
        .iter()
        .filter_map(|(name, value)| value.map(|v| (*name, v.as_str())))
        .collect();
    require_text(&present)
}
