//! Glow note-taking application library
//!
//! This library provides a single-user, in-memory note session: notes with
//! paragraph-level editing and pin/archive flags, actions captured from
//! text spans, view filtering, and optional AI-generated insights.

mod action;
mod cli;
mod config;
mod errors;
mod filter;
mod insight;
mod note;
mod paragraph;
mod store;
mod types;

// Re-export key components
pub use action::*;
pub use cli::*;
pub use config::*;
pub use errors::*;
pub use filter::*;
pub use insight::*;
pub use note::*;
pub use paragraph::*;
pub use store::*;
pub use types::*;
