use glownotes::{derive_action, NoteStore, ACTION_COLORS};

#[test]
fn create_note_prepends_an_empty_note_and_makes_it_active() {
    let mut store = NoteStore::new();

    let first = store.create_note();
    let second = store.create_note();

    assert_eq!(store.notes().len(), 2);
    assert_eq!(store.notes()[0].id, second.id);
    assert_eq!(store.notes()[1].id, first.id);
    assert_eq!(store.active_note_id(), Some(second.id.as_str()));

    assert!(second.title.is_empty());
    assert!(second.content.is_empty());
    assert!(!second.is_pinned);
    assert!(!second.is_archived);
    assert!(second.updated_at > 0);
    assert_ne!(first.id, second.id);
}

#[test]
fn save_note_replaces_the_stored_value() {
    let mut store = NoteStore::new();
    let created = store.create_note();

    let edited = created.with_title("Morning Reflections");
    store.save_note(edited);

    let stored = store.note(&created.id).expect("note should exist");
    assert_eq!(stored.title, "Morning Reflections");
    assert!(stored.updated_at >= created.updated_at);
}

#[test]
fn save_note_with_unknown_id_is_a_silent_noop() {
    let mut store = NoteStore::new();
    let existing = store.create_note();

    let mut phantom = existing.with_title("ghost");
    phantom.id = "does-not-exist".to_string();
    store.save_note(phantom);

    assert_eq!(store.notes().len(), 1);
    assert!(store.note(&existing.id).unwrap().title.is_empty());
}

#[test]
fn updated_at_never_decreases_across_edits() {
    let mut store = NoteStore::new();
    let created = store.create_note();

    let mut previous = created.updated_at;
    let mut current = created;
    for text in ["a", "a\nb", "a\nb\nc"] {
        current = current.with_content(text);
        assert!(current.updated_at >= previous);
        previous = current.updated_at;
        store.save_note(current.clone());
    }
}

#[test]
fn create_action_scenario() {
    let mut store = NoteStore::new();

    let action = store.create_action("1", "Call the florist", "rose");

    assert_eq!(action.note_id, "1");
    assert_eq!(action.text, "Call the florist");
    assert!(!action.completed);
    assert_eq!(action.color, "rose");
    assert!(action.created_at > 0);
    assert_eq!(store.actions().len(), 1);
}

#[test]
fn actions_are_prepended() {
    let mut store = NoteStore::new();
    let first = store.create_action("n", "first", "rose");
    let second = store.create_action("n", "second", "sky");

    assert_eq!(store.actions()[0].id, second.id);
    assert_eq!(store.actions()[1].id, first.id);
}

#[test]
fn toggle_action_flips_and_flips_back() {
    let mut store = NoteStore::new();
    let action = store.create_action("n", "task", "amber");

    store.toggle_action(&action.id);
    assert!(store.action(&action.id).unwrap().completed);

    store.toggle_action(&action.id);
    assert!(!store.action(&action.id).unwrap().completed);
}

#[test]
fn toggle_and_delete_with_unknown_ids_are_noops() {
    let mut store = NoteStore::new();
    let action = store.create_action("n", "task", "amber");

    store.toggle_action("missing");
    store.delete_action("missing");

    assert_eq!(store.actions().len(), 1);
    assert!(!store.action(&action.id).unwrap().completed);
}

#[test]
fn delete_action_removes_it() {
    let mut store = NoteStore::new();
    let action = store.create_action("n", "task", "emerald");

    store.delete_action(&action.id);
    assert!(store.actions().is_empty());
}

#[test]
fn dangling_note_reference_displays_as_untitled_note() {
    let mut store = NoteStore::new();
    let action = store.create_action("no-such-note", "orphan task", "indigo");

    assert_eq!(store.note_title_for(&action), "Untitled Note");
}

#[test]
fn note_title_for_falls_back_to_untitled_for_empty_titles() {
    let mut store = NoteStore::new();
    let note = store.create_note();
    let action = store.create_action(&note.id, "task", "rose");

    // The note exists but has an empty title
    assert_eq!(store.note_title_for(&action), "Untitled");
}

#[test]
fn pending_and_completed_partition_the_actions() {
    let mut store = NoteStore::new();
    let a = store.create_action("n", "one", "rose");
    store.create_action("n", "two", "sky");
    store.create_action("n", "three", "amber");
    store.toggle_action(&a.id);

    let pending: Vec<&str> = store
        .pending_actions()
        .iter()
        .map(|x| x.text.as_str())
        .collect();
    let completed: Vec<&str> = store
        .completed_actions()
        .iter()
        .map(|x| x.text.as_str())
        .collect();

    assert_eq!(pending, vec!["three", "two"]);
    assert_eq!(completed, vec!["one"]);
}

#[test]
fn derive_action_trims_and_assigns_a_palette_color() {
    let mut store = NoteStore::new();
    let note = store.create_note();

    let action = derive_action(&mut store, &note.id, "  Call the florist  ")
        .expect("non-empty selection should create an action");

    assert_eq!(action.text, "Call the florist");
    assert_eq!(action.note_id, note.id);
    assert!(!action.completed);
    assert!(ACTION_COLORS.contains(&action.color.as_str()));
}

#[test]
fn derive_action_rejects_whitespace_only_selections() {
    let mut store = NoteStore::new();
    let note = store.create_note();

    assert!(derive_action(&mut store, &note.id, "   \n  ").is_none());
    assert!(store.actions().is_empty());
}

#[test]
fn sample_data_seeds_two_notes_and_two_actions() {
    let store = NoteStore::with_sample_data();

    assert_eq!(store.notes().len(), 2);
    assert_eq!(store.actions().len(), 2);

    let pinned: Vec<&str> = store
        .notes()
        .iter()
        .filter(|n| n.is_pinned)
        .map(|n| n.title.as_str())
        .collect();
    assert_eq!(pinned, vec!["Morning Reflections"]);

    // Every seeded action resolves to its owning note
    for action in store.actions() {
        assert!(store.note(&action.note_id).is_some());
    }
}
