//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to submit a forum post. The author id comes from the caller's identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub author: String,
}

/// Request to comment on a post. The post id comes from the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AddCommentRequest {
    pub content: String,
    pub author: String,
}

/// Moderator decision on a post or comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ReviewRequest {
    /// `pending`, `published` or `rejected`.
    pub status: String,
    #[serde(default)]
    pub reviewed_by: Option<String>,
    #[serde(default)]
    pub reject_reason: Option<String>,
}

/// Query string for the public post list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Case-insensitive keyword; blank means no filter.
    #[serde(default)]
    pub q: Option<String>,
}

/// Ordered list of feed candidate ids, e.g. `["forum-3", "announcement-1"]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedSelectionRequest {
    pub ids: Vec<String>,
}

/// Curated hot-tag list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotTagsRequest {
    pub tags: Vec<String>,
}

/// Moves a carousel slide one position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MoveSlideRequest {
    /// `up` or `down`.
    pub direction: String,
}

/// Outcome of a like toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeToggleResponse {
    /// `false` when nothing was recorded (anonymous caller).
    pub toggled: bool,
    pub liked: bool,
    pub like_count: usize,
}

/// Current like state of an entity for the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeStatusResponse {
    pub liked: bool,
    pub like_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_request_optional_fields() {
        let req: ReviewRequest = serde_json::from_str(r#"{"status": "rejected"}"#).unwrap();
        assert_eq!(req.status, "rejected");
        assert!(req.reviewed_by.is_none());
    }

    #[test]
    fn test_like_response_camel_case() {
        let json = serde_json::to_value(LikeToggleResponse {
            toggled: true,
            liked: true,
            like_count: 3,
        })
        .unwrap();
        assert_eq!(json["likeCount"], 3);
    }
}
