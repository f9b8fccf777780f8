use glownotes::{filter_notes, Note, View};

fn note(title: &str, content: &str, pinned: bool, archived: bool, updated_at: i64) -> Note {
    let mut n = Note::new();
    n.title = title.to_string();
    n.content = content.to_string();
    n.is_pinned = pinned;
    n.is_archived = archived;
    n.updated_at = updated_at;
    n
}

#[test]
fn archive_view_includes_exactly_the_archived_notes() {
    let archived = note("kept", "", false, true, 1);
    let plain = note("dropped", "", false, false, 1);

    let result = filter_notes(&[archived.clone()], View::Archive, "");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, archived.id);

    assert!(filter_notes(&[plain], View::Archive, "").is_empty());
}

#[test]
fn pinned_view_requires_pinned_and_not_archived() {
    let pinned = note("pinned", "", true, false, 1);
    let pinned_archived = note("both", "", true, true, 1);
    let plain = note("plain", "", false, false, 1);

    let result = filter_notes(
        &[pinned.clone(), pinned_archived.clone(), plain],
        View::Pinned,
        "",
    );
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, pinned.id);

    // An archived-and-pinned note appears only under the archive lens
    let archive = filter_notes(&[pinned_archived.clone()], View::Archive, "");
    assert_eq!(archive.len(), 1);
    assert_eq!(archive[0].id, pinned_archived.id);
}

#[test]
fn all_view_excludes_archived_notes() {
    let plain = note("plain", "", false, false, 1);
    let archived = note("archived", "", false, true, 1);

    let result = filter_notes(&[plain.clone(), archived], View::All, "");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, plain.id);
}

#[test]
fn query_matches_title_or_content_case_insensitively() {
    let by_title = note("Call the Florist", "nothing here", false, false, 1);
    let by_content = note("plain", "remember the FLORIST order", false, false, 1);
    let neither = note("other", "groceries", false, false, 1);

    let notes = [by_title.clone(), by_content.clone(), neither];
    let result = filter_notes(&notes, View::All, "florist");

    assert_eq!(result.len(), 2);
    assert!(result.iter().any(|n| n.id == by_title.id));
    assert!(result.iter().any(|n| n.id == by_content.id));
}

#[test]
fn query_result_is_subset_of_unfiltered_view() {
    let notes = [
        note("alpha", "one", false, false, 3),
        note("beta", "two", true, false, 2),
        note("gamma", "one and two", false, true, 1),
    ];

    for view in [View::All, View::Pinned, View::Archive] {
        let unfiltered = filter_notes(&notes, view, "");
        let filtered = filter_notes(&notes, view, "one");
        for kept in &filtered {
            assert!(unfiltered.iter().any(|n| n.id == kept.id));
            assert!(
                kept.title.to_lowercase().contains("one")
                    || kept.content.to_lowercase().contains("one")
            );
        }
    }
}

#[test]
fn notes_sort_by_updated_at_descending() {
    let notes = [
        note("first", "", false, false, 100),
        note("second", "", false, false, 300),
        note("third", "", false, false, 200),
    ];

    let result = filter_notes(&notes, View::All, "");
    let order: Vec<i64> = result.iter().map(|n| n.updated_at).collect();
    assert_eq!(order, vec![300, 200, 100]);
}

#[test]
fn filtering_never_mutates_the_input() {
    let notes = [
        note("a", "", false, false, 2),
        note("b", "", false, false, 5),
    ];
    let before: Vec<String> = notes.iter().map(|n| n.id.clone()).collect();

    let _ = filter_notes(&notes, View::All, "");

    let after: Vec<String> = notes.iter().map(|n| n.id.clone()).collect();
    assert_eq!(before, after);
    assert_eq!(notes[0].updated_at, 2);
}

#[test]
fn actions_view_filters_notes_like_all() {
    let plain = note("plain", "", false, false, 1);
    let archived = note("archived", "", false, true, 1);

    let result = filter_notes(&[plain.clone(), archived], View::Actions, "");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, plain.id);
}

#[test]
fn empty_result_is_a_valid_outcome() {
    assert!(filter_notes(&[], View::All, "").is_empty());
    let notes = [note("a", "b", false, false, 1)];
    assert!(filter_notes(&notes, View::All, "no such query").is_empty());
}
