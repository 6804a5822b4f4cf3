//! Hashtag extraction and frequency statistics.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// `#` followed by one or more ASCII word characters.
static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[A-Za-z0-9_]+").expect("Invalid tag regex"));

/// One row of the tag statistics table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagCount {
    /// Literal tag including the leading `#`.
    pub tag: String,
    pub count: usize,
    /// Whether the tag is on the curated hot-tag list.
    pub hot: bool,
}

/// Iterate over every tag occurrence in `text`, duplicates included.
pub fn extract_tags(text: &str) -> impl Iterator<Item = &str> {
    TAG_REGEX.find_iter(text).map(|m| m.as_str())
}

/// Count tag occurrences across `texts`.
///
/// Every hot tag and every previously surfaced tag is present in the result,
/// with a count of zero when it no longer occurs. Rows are ordered by count
/// descending, ties by tag.
pub fn count_tags<'a, I>(texts: I, hot_tags: &[String], surfaced: &BTreeSet<String>) -> Vec<TagCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for text in texts {
        for tag in extract_tags(text) {
            *counts.entry(tag.to_string()).or_default() += 1;
        }
    }
    for tag in hot_tags.iter().chain(surfaced) {
        counts.entry(tag.clone()).or_default();
    }

    let mut rows: Vec<TagCount> = counts
        .into_iter()
        .map(|(tag, count)| TagCount {
            hot: hot_tags.contains(&tag),
            tag,
            count,
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}
