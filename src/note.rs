//! Core data structures for the glownotes application.
//!
//! This module contains the primary records held by a session: Note and
//! Action, plus the fixed color palette actions are tagged with.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The fixed palette of style tags an action can be created with.
///
/// A color is assigned once at creation time and never changes afterwards.
pub const ACTION_COLORS: [&str; 6] = ["rose", "amber", "emerald", "sky", "indigo", "fuchsia"];

/// Title shown for a note whose title is empty.
pub const UNTITLED: &str = "Untitled";

/// Title shown for an action whose note no longer resolves.
pub const UNTITLED_NOTE: &str = "Untitled Note";

/// Represents a single note in a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier, immutable for the note's lifetime
    pub id: String,
    /// Note title; may be empty (rendered as "Untitled")
    pub title: String,
    /// Free-form content; paragraphs are delimited by '\n'
    pub content: String,
    /// Whether the note is pinned
    pub is_pinned: bool,
    /// Whether the note is archived
    pub is_archived: bool,
    /// Milliseconds since epoch of the last mutation
    pub updated_at: i64,
    /// Optional free-form category, carried but not used by any view
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Note {
    /// Creates a new empty note with a fresh id and a current timestamp.
    pub fn new() -> Self {
        Note {
            id: Uuid::new_v4().to_string(),
            title: String::new(),
            content: String::new(),
            is_pinned: false,
            is_archived: false,
            updated_at: now_millis(),
            category: None,
        }
    }

    /// Title to display, falling back to "Untitled" for an empty title.
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            UNTITLED
        } else {
            &self.title
        }
    }

    /// Returns a copy with a new title and a bumped timestamp.
    ///
    /// Mutations go through value replacement rather than in-place field
    /// edits, so downstream consumers can rely on fresh values after every
    /// change.
    pub fn with_title(&self, title: impl Into<String>) -> Self {
        Note {
            title: title.into(),
            updated_at: bump(self.updated_at),
            ..self.clone()
        }
    }

    /// Returns a copy with new content and a bumped timestamp.
    pub fn with_content(&self, content: impl Into<String>) -> Self {
        Note {
            content: content.into(),
            updated_at: bump(self.updated_at),
            ..self.clone()
        }
    }

    /// Returns a copy with the pinned flag flipped and a bumped timestamp.
    pub fn toggled_pinned(&self) -> Self {
        Note {
            is_pinned: !self.is_pinned,
            updated_at: bump(self.updated_at),
            ..self.clone()
        }
    }

    /// Returns a copy with the archived flag flipped and a bumped timestamp.
    pub fn toggled_archived(&self) -> Self {
        Note {
            is_archived: !self.is_archived,
            updated_at: bump(self.updated_at),
            ..self.clone()
        }
    }
}

impl Default for Note {
    fn default() -> Self {
        Note::new()
    }
}

/// A short task captured from a note's text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    /// Unique identifier
    pub id: String,
    /// Id of the owning note; not guaranteed to resolve
    pub note_id: String,
    /// The captured text span, non-empty by construction
    pub text: String,
    /// Whether the action has been completed
    pub completed: bool,
    /// Milliseconds since epoch at creation, immutable
    pub created_at: i64,
    /// Style tag from [`ACTION_COLORS`], immutable
    pub color: String,
}

impl Action {
    /// Creates a new incomplete action owned by `note_id`.
    pub fn new(note_id: impl Into<String>, text: impl Into<String>, color: impl Into<String>) -> Self {
        Action {
            id: Uuid::new_v4().to_string(),
            note_id: note_id.into(),
            text: text.into(),
            completed: false,
            created_at: now_millis(),
            color: color.into(),
        }
    }

    /// Returns a copy with the completed flag flipped.
    pub fn toggled(&self) -> Self {
        Action {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// Current wall-clock time in milliseconds since epoch.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Next timestamp for a mutated note.
///
/// `updated_at` must never decrease across a note's edit history within a
/// session, even if the wall clock steps backwards.
fn bump(previous: i64) -> i64 {
    now_millis().max(previous)
}
