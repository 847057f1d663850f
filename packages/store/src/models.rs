//! # Domain models for diary entries and credentials
//!
//! Defines the data structures exchanged with the diary backend. Every type here is
//! `Serialize + Deserialize` with camelCase field names so it maps one-to-one onto the
//! backend's JSON representation.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Entry`] | One journal record as returned by the server. `id` and `created_at` are server-assigned and never change. |
//! | [`EntryDraft`] | The client-supplied part of an entry (`title`, `content`, `mood`), used as the body of create and update calls. |
//! | [`LoginRequest`] / [`RegisterRequest`] | Transient credential payloads, discarded once the request resolves. |
//! | [`AuthResponse`] | The `{ token }` body returned by both auth endpoints. |
//! | [`EntryStats`] | Counters shown above the entry list. |
//!
//! ## Timestamps
//!
//! `createdAt` is accepted either as RFC 3339 (`2025-06-24T10:15:30Z`) or as a naive ISO
//! timestamp without offset (`2025-06-24T10:15:30.1234567`), which is read as UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Mood labels offered by the entry form.
pub const MOOD_PRESETS: &[&str] = &[
    "😊 Happy",
    "😢 Sad",
    "😌 Calm",
    "😤 Angry",
    "😴 Tired",
    "🤔 Thoughtful",
    "😍 Excited",
];

const HAPPY_MARKER: &str = "😊";

/// Server-assigned entry identifier.
pub type EntryId = i64;

/// A diary entry owned by the authenticated user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: EntryId,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Entry {
    /// Content shortened to `limit` characters, with `...` appended when cut.
    pub fn preview(&self, limit: usize) -> String {
        match self.content.char_indices().nth(limit) {
            Some((end, _)) => format!("{}...", &self.content[..end]),
            None => self.content.clone(),
        }
    }

    /// Creation date as `dd.mm.yyyy`.
    pub fn display_date(&self) -> String {
        self.created_at.format("%d.%m.%Y").to_string()
    }

    pub fn is_happy(&self) -> bool {
        self.mood
            .as_deref()
            .is_some_and(|mood| mood.contains(HAPPY_MARKER))
    }

    /// Replace the client-owned fields with the ones from `draft`.
    pub fn apply(&mut self, draft: &EntryDraft) {
        self.title = draft.title.clone();
        self.content = draft.content.clone();
        self.mood = draft.mood.clone();
    }
}

/// Title, content and mood of an entry, as sent on create and update.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDraft {
    pub title: String,
    pub content: String,
    pub mood: Option<String>,
}

impl EntryDraft {
    /// Build a draft from raw form values. A blank mood becomes `None`.
    pub fn new(title: impl Into<String>, content: impl Into<String>, mood: &str) -> Self {
        let mood = mood.trim();
        Self {
            title: title.into(),
            content: content.into(),
            mood: (!mood.is_empty()).then(|| mood.to_string()),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        require("content", &self.content)
    }
}

impl From<&Entry> for EntryDraft {
    fn from(entry: &Entry) -> Self {
        Self {
            title: entry.title.clone(),
            content: entry.content.clone(),
            mood: entry.mood.clone(),
        }
    }
}

/// Body of `POST /Auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("email", &self.email)?;
        require("password", &self.password)
    }
}

/// Body of `POST /Auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("full name", &self.full_name)?;
        require("email", &self.email)?;
        require("password", &self.password)
    }
}

/// Response body of both auth endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

/// Counters displayed above the entry list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EntryStats {
    pub total: usize,
    pub happy: usize,
}

impl EntryStats {
    pub fn from_entries(entries: &[Entry]) -> Self {
        Self {
            total: entries.len(),
            happy: entries.iter().filter(|e| e.is_happy()).count(),
        }
    }
}

/// A caller-side input problem caught before any request is sent.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp `{raw}`")))
}

/// Parse an RFC 3339 timestamp, or a naive ISO timestamp taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    fn entry(content: &str, mood: Option<&str>) -> Entry {
        Entry {
            id: 1,
            title: "Title".to_string(),
            content: content.to_string(),
            mood: mood.map(str::to_string),
            created_at: Utc.with_ymd_and_hms(2025, 6, 4, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_entry_decodes_camel_case_with_naive_timestamp() {
        let json = r#"{"id":7,"title":"Morning Walk","content":"Felt great","mood":"😊 Happy","createdAt":"2025-06-24T08:15:00.1234567"}"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, 7);
        assert_eq!(entry.mood.as_deref(), Some("😊 Happy"));
        assert_eq!(entry.created_at.day(), 24);
        assert_eq!(entry.created_at.month(), 6);
    }

    #[test]
    fn test_entry_decodes_missing_mood_and_offset_timestamp() {
        let json = r#"{"id":3,"title":"t","content":"c","createdAt":"2025-01-02T23:30:00+02:00"}"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert!(entry.mood.is_none());
        assert_eq!(entry.created_at.hour(), 21);
    }

    #[test]
    fn test_entry_rejects_garbage_timestamp() {
        let json = r#"{"id":3,"title":"t","content":"c","createdAt":"yesterday"}"#;
        assert!(serde_json::from_str::<Entry>(json).is_err());
    }

    #[test]
    fn test_register_request_uses_full_name_key() {
        let body = serde_json::to_value(RegisterRequest::new("Ada", "ada@example.com", "pw")).unwrap();
        assert_eq!(body["fullName"], "Ada");
        assert_eq!(body["email"], "ada@example.com");
    }

    #[test]
    fn test_draft_blank_mood_is_null() {
        let draft = EntryDraft::new("t", "c", "  ");
        assert_eq!(draft.mood, None);
        let body = serde_json::to_value(&draft).unwrap();
        assert!(body["mood"].is_null());
    }

    #[test]
    fn test_validation_requires_fields() {
        assert_eq!(
            EntryDraft::new(" ", "c", "").validate(),
            Err(ValidationError::Required("title"))
        );
        assert_eq!(
            LoginRequest::new("a@b.c", "").validate(),
            Err(ValidationError::Required("password"))
        );
        assert!(RegisterRequest::new("Ada", "a@b.c", "pw").validate().is_ok());
        assert_eq!(
            ValidationError::Required("full name").to_string(),
            "full name is required"
        );
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let short = entry("short", None);
        assert_eq!(short.preview(150), "short");

        let long = entry(&"ğ".repeat(200), None);
        let preview = long.preview(150);
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), 153);
    }

    #[test]
    fn test_display_date_is_zero_padded() {
        assert_eq!(entry("c", None).display_date(), "04.06.2025");
    }

    #[test]
    fn test_apply_keeps_identity() {
        let mut e = entry("old", Some("😢 Sad"));
        let created = e.created_at;
        e.apply(&EntryDraft::new("New", "new", "😊 Happy"));
        assert_eq!(e.id, 1);
        assert_eq!(e.created_at, created);
        assert_eq!(e.title, "New");
        assert_eq!(e.mood.as_deref(), Some("😊 Happy"));
    }

    #[test]
    fn test_stats_count_happy_moods() {
        let entries = vec![
            entry("a", Some("😊 Happy")),
            entry("b", Some("😢 Sad")),
            entry("c", None),
        ];
        assert_eq!(
            EntryStats::from_entries(&entries),
            EntryStats { total: 3, happy: 1 }
        );
    }
}
