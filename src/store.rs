//! In-memory store for notes and actions.
//!
//! The store owns the canonical collections for a session and exposes the
//! only mutation surface. Every mutation replaces the stored value with a
//! freshly constructed one; stored records are never field-mutated in
//! place, so consumers holding derived views can rely on value replacement
//! for change detection.

use log::{debug, info, warn};

use crate::{Action, Note, UNTITLED_NOTE};

/// Owns the note and action collections for a single session.
///
/// State is volatile: it lives exactly as long as the process. Notes are
/// never hard-deleted (archiving is the only removal affordance); actions
/// can be deleted individually.
pub struct NoteStore {
    /// Notes, most recently created first
    notes: Vec<Note>,

    /// Actions, most recently created first
    actions: Vec<Action>,

    /// Id of the note currently open in the editor, if any
    active_note_id: Option<String>,
}

impl NoteStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            actions: Vec::new(),
            active_note_id: None,
        }
    }

    /// Creates a store pre-populated with the sample notes and actions a
    /// fresh session starts with.
    pub fn with_sample_data() -> Self {
        let mut store = Self::new();

        let mut morning = Note::new();
        morning.title = "Morning Reflections".to_string();
        morning.content = "Focus on the breath today. Remember to call the florist for the \
                           event tomorrow.\nThe garden needs some attention this weekend."
            .to_string();
        morning.is_pinned = true;

        let mut lumina = Note::new();
        lumina.title = "Project Ideas: Lumina".to_string();
        lumina.content = "Create a new design language for the mobile app. Check the color \
                          accessibility.\nSchedule a team sync on Friday."
            .to_string();
        // One day older than the pinned note
        lumina.updated_at = morning.updated_at - 86_400_000;

        store.actions.push(Action::new(
            &morning.id,
            "Call the florist for the event tomorrow",
            "rose",
        ));
        store.actions.push(Action::new(
            &lumina.id,
            "Schedule a team sync on Friday",
            "indigo",
        ));

        store.notes.push(morning);
        store.notes.push(lumina);

        info!(
            "Seeded session with {} notes and {} actions",
            store.notes.len(),
            store.actions.len()
        );

        store
    }

    /// Read-only view of the note collection.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Read-only view of the action collection.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Id of the currently active note, if any.
    pub fn active_note_id(&self) -> Option<&str> {
        self.active_note_id.as_deref()
    }

    /// Marks a note as active. Accepts any id without checking it resolves;
    /// a stale active id simply means no note renders as open.
    pub fn set_active_note(&mut self, id: Option<String>) {
        self.active_note_id = id;
    }

    /// Looks up a note by id.
    pub fn note(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Looks up an action by id.
    pub fn action(&self, id: &str) -> Option<&Action> {
        self.actions.iter().find(|a| a.id == id)
    }

    /// Creates a new empty note, prepends it to the collection, and makes
    /// it the active note. Always succeeds.
    ///
    /// # Returns
    ///
    /// A copy of the newly created note.
    pub fn create_note(&mut self) -> Note {
        let note = Note::new();
        info!("Created note {}", note.id);

        self.notes.insert(0, note.clone());
        self.active_note_id = Some(note.id.clone());
        note
    }

    /// Replaces the stored note matching `note.id` with the given value.
    ///
    /// Every field of the argument overwrites the stored field. Saving a
    /// note whose id is unknown is a silent no-op; callers always derive
    /// the argument from an existing note, so an unknown id only indicates
    /// a stale reference and is not worth failing over.
    pub fn save_note(&mut self, note: Note) {
        match self.notes.iter().position(|n| n.id == note.id) {
            Some(index) => {
                debug!("Saving note {}", note.id);
                self.notes[index] = note;
            }
            None => {
                warn!("Ignoring save for unknown note {}", note.id);
            }
        }
    }

    /// Constructs a new action and prepends it to the action collection.
    ///
    /// The action starts incomplete with a fresh id and creation timestamp.
    /// Non-empty `text` is the caller's responsibility; `note_id` is not
    /// checked against the note collection.
    ///
    /// # Returns
    ///
    /// A copy of the newly created action.
    pub fn create_action(
        &mut self,
        note_id: impl Into<String>,
        text: impl Into<String>,
        color: impl Into<String>,
    ) -> Action {
        let action = Action::new(note_id, text, color);
        info!("Created action {} for note {}", action.id, action.note_id);

        self.actions.insert(0, action.clone());
        action
    }

    /// Flips the completed flag on the matching action. Silent no-op when
    /// the id is unknown.
    pub fn toggle_action(&mut self, id: &str) {
        match self.actions.iter().position(|a| a.id == id) {
            Some(index) => {
                let toggled = self.actions[index].toggled();
                debug!("Action {} completed={}", id, toggled.completed);
                self.actions[index] = toggled;
            }
            None => {
                warn!("Ignoring toggle for unknown action {}", id);
            }
        }
    }

    /// Removes the matching action. Silent no-op when the id is unknown.
    pub fn delete_action(&mut self, id: &str) {
        match self.actions.iter().position(|a| a.id == id) {
            Some(index) => {
                self.actions.remove(index);
                info!("Deleted action {}", id);
            }
            None => {
                warn!("Ignoring delete for unknown action {}", id);
            }
        }
    }

    /// Title of the note owning `action`, falling back to "Untitled Note"
    /// when the reference no longer resolves.
    ///
    /// Deleting or archiving a note does not cascade to its actions, so a
    /// dangling `note_id` is an expected state, not an integrity violation.
    pub fn note_title_for(&self, action: &Action) -> String {
        self.note(&action.note_id)
            .map(|n| n.display_title().to_string())
            .unwrap_or_else(|| UNTITLED_NOTE.to_string())
    }

    /// Actions not yet completed, in collection order.
    pub fn pending_actions(&self) -> Vec<&Action> {
        self.actions.iter().filter(|a| !a.completed).collect()
    }

    /// Completed actions, in collection order.
    pub fn completed_actions(&self) -> Vec<&Action> {
        self.actions.iter().filter(|a| a.completed).collect()
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}
