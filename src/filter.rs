//! View filtering for the note list.
//!
//! Derives the ordered, visible note list from the full collection given a
//! view selector and a free-text search query.

use log::trace;

use crate::{Note, View};

/// Produces the ordered, filtered note list for a view.
///
/// Filtering rules:
/// 1. `Archive` keeps only archived notes; every other view keeps only
///    non-archived notes, and `Pinned` additionally requires the pinned
///    flag. An archived-and-pinned note therefore appears only under
///    `Archive`.
/// 2. A non-empty `query` keeps only notes whose title or content contains
///    it as a case-insensitive substring (either field is sufficient).
/// 3. The result is sorted by `updated_at` descending; ties keep their
///    relative collection order.
///
/// The input is never mutated; an empty result is a valid outcome.
pub fn filter_notes(notes: &[Note], view: View, query: &str) -> Vec<Note> {
    let query = query.to_lowercase();

    let mut visible: Vec<Note> = notes
        .iter()
        .filter(|note| match view {
            View::Archive => note.is_archived,
            View::Pinned => !note.is_archived && note.is_pinned,
            // `Actions` is not a note lens; it filters like `All`
            View::All | View::Actions => !note.is_archived,
        })
        .filter(|note| {
            query.is_empty()
                || note.title.to_lowercase().contains(&query)
                || note.content.to_lowercase().contains(&query)
        })
        .cloned()
        .collect();

    // Vec::sort_by is stable, which keeps tied notes in collection order
    visible.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

    trace!(
        "Filtered {} of {} notes for view {:?}",
        visible.len(),
        notes.len(),
        view
    );

    visible
}
