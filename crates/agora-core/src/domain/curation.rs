//! Curated homepage records: check-in settings, carousel slides and hot tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::EntityId;
use crate::error::DomainError;

/// Hot tags a fresh store starts with.
pub const DEFAULT_HOT_TAGS: [&str; 5] = ["#pwn", "#writeup", "#ctf2024", "#python", "#docker"];

/// Homepage feed selection a fresh store starts with.
pub const DEFAULT_FEED_SELECTION: [&str; 3] = ["announcement-1", "announcement-2", "forum-1"];

/// Daily check-in card: today's challenge plus the fortune shown with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CheckInConfig {
    pub enabled: bool,
    pub daily_challenge_id: String,
    pub daily_challenge_title: String,
    pub fortune: String,
    /// Recommended activity ("宜") and its blurb.
    pub yi_text: String,
    pub yi_desc: String,
    /// Activity to avoid ("忌") and its blurb.
    pub ji_text: String,
    pub ji_desc: String,
    pub motto: String,
}

impl Default for CheckInConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            daily_challenge_id: "PWN-082".to_string(),
            daily_challenge_title: "Easy_Heap_OverFlow".to_string(),
            fortune: "中吉".to_string(),
            yi_text: "研究 SQL 注入".to_string(),
            yi_desc: "万物皆可 Union，今天灵感爆棚".to_string(),
            ji_text: "强制删除容器".to_string(),
            ji_desc: "小心没做完题数据就丢了".to_string(),
            motto: "真正的黑客，在命令行里寻找诗意。".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CheckInPatch {
    pub enabled: Option<bool>,
    pub daily_challenge_id: Option<String>,
    pub daily_challenge_title: Option<String>,
    pub fortune: Option<String>,
    pub yi_text: Option<String>,
    pub yi_desc: Option<String>,
    pub ji_text: Option<String>,
    pub ji_desc: Option<String>,
    pub motto: Option<String>,
}

impl CheckInConfig {
    pub fn apply(&mut self, patch: CheckInPatch) {
        if let Some(enabled) = patch.enabled {
            self.enabled = enabled;
        }
        let fields = [
            (&mut self.daily_challenge_id, patch.daily_challenge_id),
            (&mut self.daily_challenge_title, patch.daily_challenge_title),
            (&mut self.fortune, patch.fortune),
            (&mut self.yi_text, patch.yi_text),
            (&mut self.yi_desc, patch.yi_desc),
            (&mut self.ji_text, patch.ji_text),
            (&mut self.ji_desc, patch.ji_desc),
            (&mut self.motto, patch.motto),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                *field = value;
            }
        }
    }
}

/// One slide of the homepage carousel. Slides are shown in stored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselSlide {
    pub id: EntityId,
    pub image_url: String,
    pub title: String,
    pub subtitle: String,
    /// Short marker such as "正在进行".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewSlide {
    pub image_url: String,
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub badge: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SlidePatch {
    pub image_url: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub badge: Option<String>,
}

impl CarouselSlide {
    pub fn new(id: EntityId, new: NewSlide) -> Self {
        Self {
            id,
            image_url: new.image_url,
            title: new.title,
            subtitle: new.subtitle,
            badge: new.badge,
        }
    }

    pub fn apply(&mut self, patch: SlidePatch) {
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(subtitle) = patch.subtitle {
            self.subtitle = subtitle;
        }
        if let Some(badge) = patch.badge {
            self.badge = Some(badge);
        }
    }
}

/// Direction a slide moves within the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideMove {
    Up,
    Down,
}

impl SlideMove {
    /// Index a slide at `index` moves to, if it stays inside `len` slides.
    pub fn target(self, index: usize, len: usize) -> Option<usize> {
        match self {
            Self::Up => index.checked_sub(1),
            Self::Down => Some(index + 1).filter(|&to| to < len),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for SlideMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlideMove {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            other => Err(DomainError::Validation(format!(
                "unknown move direction '{other}'"
            ))),
        }
    }
}

/// Clean up a curated hot-tag list.
///
/// Blank entries are dropped, a leading `#` is added where missing and
/// duplicates are removed keeping the first occurrence.
pub fn normalize_hot_tags(tags: Vec<String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if tag.trim_start_matches('#').is_empty() {
            continue;
        }
        let tag = if tag.starts_with('#') {
            tag.to_string()
        } else {
            format!("#{tag}")
        };
        if !normalized.contains(&tag) {
            normalized.push(tag);
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_hot_tags() {
        let tags = vec![
            "pwn".to_string(),
            " #web ".to_string(),
            "#pwn".to_string(),
            "#".to_string(),
            "".to_string(),
        ];
        assert_eq!(normalize_hot_tags(tags), vec!["#pwn", "#web"]);
    }

    #[test]
    fn test_slide_patch_keeps_absent_fields() {
        let mut slide = CarouselSlide::new(
            1,
            NewSlide {
                image_url: "/img/ctf.png".into(),
                title: "Spring CTF".into(),
                subtitle: "Sign up now".into(),
                badge: None,
            },
        );
        slide.apply(SlidePatch {
            badge: Some("热门".into()),
            ..Default::default()
        });
        assert_eq!(slide.badge.as_deref(), Some("热门"));
        assert_eq!(slide.title, "Spring CTF");
        assert_eq!(slide.subtitle, "Sign up now");
    }

    #[test]
    fn test_slide_move_target() {
        assert_eq!(SlideMove::Up.target(0, 3), None);
        assert_eq!(SlideMove::Up.target(2, 3), Some(1));
        assert_eq!(SlideMove::Down.target(1, 3), Some(2));
        assert_eq!(SlideMove::Down.target(2, 3), None);
        assert!("sideways".parse::<SlideMove>().is_err());
        assert_eq!(" Down ".parse::<SlideMove>().unwrap(), SlideMove::Down);
    }

    #[test]
    fn test_check_in_patch() {
        let mut config = CheckInConfig::default();
        let patch: CheckInPatch =
            serde_json::from_str(r#"{"fortune": "大吉", "enabled": false}"#).unwrap();
        config.apply(patch);
        assert_eq!(config.fortune, "大吉");
        assert!(!config.enabled);
        assert_eq!(config.daily_challenge_id, "PWN-082");

        let unknown = serde_json::from_str::<CheckInPatch>(r#"{"rewardPoints": 5}"#);
        assert!(unknown.is_err());
    }
}
