//! Shared types for the glownotes application.
//!
//! This module contains the Result alias, the view selector, and the shell
//! command grammar parsed from each input line.

use clap::{Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::GlowError;

/// A specialized Result type for glownotes operations.
pub type Result<T> = std::result::Result<T, GlowError>;

/// A lens over the note collection.
///
/// `Actions` routes the interface to the action review rather than a note
/// list; for note filtering purposes it behaves like `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// All non-archived notes
    All,
    /// Non-archived notes that are pinned
    Pinned,
    /// The action review screen
    Actions,
    /// Archived notes only
    Archive,
}

/// Available commands inside an interactive glownotes session.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new empty note and make it the active note
    New,

    /// Make an existing note the active note
    Open {
        /// ID (or unique ID prefix) of the note to open
        id: String,
    },

    /// List notes for a view, optionally filtered by a search query
    List {
        /// View to list notes for
        #[clap(short, long, value_enum, default_value = "all")]
        view: View,

        /// Case-insensitive substring to match against title or content
        #[clap(short, long)]
        query: Option<String>,

        /// Format output as raw JSON
        #[clap(short, long)]
        json: bool,
    },

    /// Show the active note (or a specific note) with numbered paragraphs
    Show {
        /// ID of the note to show (defaults to the active note)
        id: Option<String>,
    },

    /// Edit the active note's title, full content, or a single paragraph
    Edit {
        /// New title for the note
        #[clap(short = 'T', long)]
        title: Option<String>,

        /// New full content for the note ('\n' separates paragraphs)
        #[clap(short, long)]
        content: Option<String>,

        /// Index of the paragraph to replace (0-based, requires --text)
        #[clap(short, long)]
        paragraph: Option<usize>,

        /// Replacement text for the paragraph given by --paragraph
        #[clap(short, long)]
        text: Option<String>,
    },

    /// Toggle the pinned flag on a note
    Pin {
        /// ID of the note to pin or unpin
        id: String,
    },

    /// Toggle the archived flag on a note
    Archive {
        /// ID of the note to archive or unarchive
        id: String,
    },

    /// Action operations (make, toggle, delete)
    #[clap(subcommand)]
    Action(ActionCommands),

    /// Show the daily review of pending and completed actions
    Review,

    /// Ask the text-generation service for a 1-2 sentence insight
    Insight {
        /// ID of the note to summarize (defaults to the active note)
        id: Option<String>,
    },

    /// Extract actionable items from a note via the text-generation service
    Extract {
        /// ID of the note to extract from (defaults to the active note)
        id: Option<String>,
    },

    /// Leave the session (all state is discarded)
    Quit,
}

/// Action subcommands.
#[derive(Debug, Subcommand)]
pub enum ActionCommands {
    /// Capture a text span from a note as a new action
    Make {
        /// ID of the note the span was selected in
        note_id: String,

        /// The selected text span
        text: String,
    },

    /// Flip an action between complete and incomplete
    Toggle {
        /// ID of the action to toggle
        id: String,
    },

    /// Delete an action
    Delete {
        /// ID of the action to delete
        id: String,
    },
}
