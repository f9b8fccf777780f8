//! Action derivation from text selections.
//!
//! Turns a raw text span selected inside a note into an action with a
//! randomly assigned palette color.

use log::debug;
use rand::seq::SliceRandom;

use crate::{Action, NoteStore, ACTION_COLORS};

/// Derives a new action from a text selection within a note.
///
/// The selection is trimmed first; a selection that trims to empty creates
/// nothing and returns `None`. Otherwise a color is chosen uniformly at
/// random from [`ACTION_COLORS`] and the action is inserted through the
/// store. This is a local, always-succeeding operation once the selection
/// is non-empty.
pub fn derive_action(store: &mut NoteStore, note_id: &str, selected_text: &str) -> Option<Action> {
    let text = selected_text.trim();
    if text.is_empty() {
        debug!("Skipping action derivation for empty selection");
        return None;
    }

    let color = pick_color();
    Some(store.create_action(note_id, text, color))
}

/// Picks a palette color uniformly at random.
fn pick_color() -> &'static str {
    let mut rng = rand::thread_rng();
    // The palette is a non-empty const array, so choose always succeeds
    ACTION_COLORS
        .choose(&mut rng)
        .copied()
        .unwrap_or(ACTION_COLORS[0])
}
