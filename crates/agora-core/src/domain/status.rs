use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Review state of a forum post or comment.
///
/// There is no transition table: a moderator may move an entity from any
/// state to any other, so mistaken rejections can be reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    Pending,
    Published,
    Rejected,
}

impl ModerationStatus {
    /// Status given to records stored before moderation existed.
    pub const LEGACY_DEFAULT: Self = Self::Published;

    /// Resolve a possibly-missing stored status.
    pub fn or_legacy_default(stored: Option<Self>) -> Self {
        stored.unwrap_or(Self::LEGACY_DEFAULT)
    }

    pub fn is_public(self) -> bool {
        self == Self::Published
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Published => "published",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModerationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "published" => Ok(Self::Published),
            "rejected" => Ok(Self::Rejected),
            other => Err(DomainError::Validation(format!(
                "unknown moderation status '{other}'"
            ))),
        }
    }
}

/// Publication state of an announcement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementStatus {
    #[default]
    Published,
    Draft,
}

/// Reviewer metadata supplied with a status change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewNote {
    pub reviewed_by: Option<String>,
    pub reject_reason: Option<String>,
}

/// Moderation fields shared by posts and comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Moderation {
    pub status: ModerationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<String>,
}

impl Moderation {
    /// Fresh submissions always wait for review.
    pub fn pending() -> Self {
        Self::with_status(ModerationStatus::Pending)
    }

    pub fn with_status(status: ModerationStatus) -> Self {
        Self {
            status,
            reviewed_at: None,
            reviewed_by: None,
            reject_reason: None,
        }
    }

    /// Record a reviewer decision.
    ///
    /// `reviewed_at` is always stamped; reviewer and reason only overwrite the
    /// previous values when supplied.
    pub fn review(&mut self, status: ModerationStatus, note: ReviewNote, at: DateTime<Utc>) {
        self.status = status;
        self.reviewed_at = Some(at);
        if let Some(by) = note.reviewed_by {
            self.reviewed_by = Some(by);
        }
        if let Some(reason) = note.reject_reason {
            self.reject_reason = Some(reason);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_missing_status_defaults_to_published() {
        assert_eq!(
            ModerationStatus::or_legacy_default(None),
            ModerationStatus::Published
        );
        assert_eq!(
            ModerationStatus::or_legacy_default(Some(ModerationStatus::Rejected)),
            ModerationStatus::Rejected
        );
    }

    #[test]
    fn test_parse_status() {
        assert_eq!(
            " Published ".parse::<ModerationStatus>().unwrap(),
            ModerationStatus::Published
        );
        assert!("approved".parse::<ModerationStatus>().is_err());
    }

    #[test]
    fn test_review_keeps_previous_reviewer_when_absent() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let mut moderation = Moderation::pending();

        moderation.review(
            ModerationStatus::Rejected,
            ReviewNote {
                reviewed_by: Some("alice".into()),
                reject_reason: Some("off topic".into()),
            },
            at,
        );
        moderation.review(ModerationStatus::Published, ReviewNote::default(), at);

        assert_eq!(moderation.status, ModerationStatus::Published);
        assert_eq!(moderation.reviewed_at, Some(at));
        assert_eq!(moderation.reviewed_by.as_deref(), Some("alice"));
        assert_eq!(moderation.reject_reason.as_deref(), Some("off topic"));
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&ModerationStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
    }
}
