//! Review of the student's interview transcript alongside evaluator comments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const PLACEHOLDER_MARKER: &str = "currently unavailable";
const MISSING_QUESTION: &str = "No question available";
const MISSING_COMMENT: &str = "No comment available";

/// One exchange as emitted by the evaluator. Older payloads carry
/// `userMessage`/`aiMessage` instead of `question`/`comment`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl ConversationItem {
    fn is_placeholder(&self) -> bool {
        let marks = |field: &Option<String>| {
            field
                .as_deref()
                .map(|text| text.contains(PLACEHOLDER_MARKER))
                .unwrap_or(false)
        };
        marks(&self.question) && marks(&self.comment)
    }

    pub fn to_entry(&self) -> ConversationEntry {
        ConversationEntry {
            question: first_present(&[&self.question, &self.user_message])
                .unwrap_or(MISSING_QUESTION)
                .to_string(),
            comment: first_present(&[&self.comment, &self.ai_message])
                .unwrap_or(MISSING_COMMENT)
                .to_string(),
            timestamp: self.timestamp.as_deref().and_then(parse_timestamp),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationEntry {
    pub question: String,
    pub comment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// What the review screen should show for a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "entries", rename_all = "snake_case")]
pub enum ConversationAnalysis {
    Empty,
    /// The evaluator has not produced an analysis yet.
    Pending,
    Entries(Vec<ConversationEntry>),
}

impl ConversationAnalysis {
    pub fn from_items(items: &[ConversationItem]) -> Self {
        match items {
            [] => Self::Empty,
            [only] if only.is_placeholder() => Self::Pending,
            _ => Self::Entries(items.iter().map(ConversationItem::to_entry).collect()),
        }
    }

    pub fn entries(&self) -> &[ConversationEntry] {
        match self {
            Self::Entries(entries) => entries,
            Self::Empty | Self::Pending => &[],
        }
    }
}

fn first_present<'a>(candidates: &[&'a Option<String>]) -> Option<&'a str> {
    candidates
        .iter()
        .copied()
        .filter_map(|candidate| candidate.as_deref())
        .find(|text| !text.is_empty())
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}
