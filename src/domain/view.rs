// src/domain/view.rs

use crate::domain::NormalizedItem;
use chrono::{DateTime, Utc};

pub const DEFAULT_LANGUAGE_COLOR: &str = "#6b7280";

/// Number of topics shown on a project card before collapsing into "+N".
pub const SUMMARY_TOPICS: usize = 3;

const LANGUAGE_COLORS: &[(&str, &str)] = &[
    ("JavaScript", "#f7df1e"),
    ("TypeScript", "#3178c6"),
    ("Python", "#3776ab"),
    ("Java", "#ed8b00"),
    ("C++", "#00599c"),
    ("HTML", "#e34f26"),
    ("CSS", "#1572b6"),
    ("React", "#61dafb"),
    ("Vue", "#4fc08d"),
    ("PHP", "#777bb4"),
];

/// Render-only projection of a `NormalizedItem`. Built fresh on every
/// render and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewItem<'a> {
    pub item: &'a NormalizedItem,
    pub display_name: String,
    pub color: &'static str,
    pub updated_label: String,
    pub topics: TopicSummary<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSummary<'a> {
    pub shown: &'a [String],
    pub remainder: usize,
}

impl TopicSummary<'_> {
    /// "+N" when topics were cut off.
    pub fn remainder_label(&self) -> Option<String> {
        (self.remainder > 0).then(|| format!("+{}", self.remainder))
    }
}

impl<'a> ViewItem<'a> {
    /// External demo link; the listing API reports "no homepage" as either
    /// null or an empty string.
    pub fn live_url(&self) -> Option<&'a str> {
        self.item.homepage.as_deref().filter(|h| !h.trim().is_empty())
    }
}

pub fn project(item: &NormalizedItem) -> ViewItem<'_> {
    ViewItem {
        item,
        display_name: humanize_name(&item.name),
        color: language_color(item.language.as_deref()),
        updated_label: format_date(&item.updated_at),
        topics: summarize_topics(&item.topics),
    }
}

pub fn project_all(items: &[NormalizedItem]) -> Vec<ViewItem<'_>> {
    items.iter().map(project).collect()
}

pub fn language_color(language: Option<&str>) -> &'static str {
    language
        .and_then(|lang| {
            LANGUAGE_COLORS
                .iter()
                .find(|(name, _)| *name == lang)
                .map(|(_, color)| *color)
        })
        .unwrap_or(DEFAULT_LANGUAGE_COLOR)
}

/// `2024-01-05T08:30:00Z` -> `Jan 5, 2024`, always in UTC. Anything that
/// does not parse is shown as-is.
pub fn format_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.with_timezone(&Utc).format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

pub fn summarize_topics(topics: &[String]) -> TopicSummary<'_> {
    let cut = topics.len().min(SUMMARY_TOPICS);
    TopicSummary {
        shown: &topics[..cut],
        remainder: topics.len() - cut,
    }
}

/// `foo-bar` -> `Foo Bar`. Upper-cases the first character of every word,
/// where a word is a run of alphanumerics or underscores. Non-ASCII letters
/// count as word characters, so "école-x" becomes "École X".
pub fn humanize_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut at_word_start = true;

    for ch in raw.chars() {
        let ch = if ch == '-' { ' ' } else { ch };
        let is_word = ch.is_alphanumeric() || ch == '_';

        if is_word && at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = !is_word;
    }

    out
}
