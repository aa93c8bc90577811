use quicknote_core::{
    Attachment, InMemoryNoteStore, ManualClock, NoteDraft, NotePatch, NoteStore,
    NoteValidationError, StoreError,
};
use std::collections::HashSet;
use uuid::Uuid;

#[test]
fn add_then_get_returns_equal_note() {
    let mut store = InMemoryNoteStore::new(ManualClock::new(1_000));
    let draft = NoteDraft::new("Trip", "pack bags")
        .with_images(vec!["file:///cam/1.jpg".to_string()])
        .with_files(vec![Attachment::new("file:///doc.pdf", "doc.pdf", "application/pdf")
            .with_size(Some(2_048))]);

    let created = store.add(draft).unwrap();
    assert_eq!(created.created_at, 1_000);
    assert_eq!(created.updated_at, 1_000);
    assert!(!created.id.is_nil());

    let loaded = store.get(created.id).unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn add_assigns_unique_ids() {
    let mut store = InMemoryNoteStore::new(ManualClock::new(1));
    let ids: HashSet<_> = (0..50)
        .map(|idx| store.add(NoteDraft::new(format!("note {idx}"), "")).unwrap().id)
        .collect();
    assert_eq!(ids.len(), 50);
    assert_eq!(store.len(), 50);
}

#[test]
fn add_rejects_blank_content_and_leaves_store_unchanged() {
    let mut store = InMemoryNoteStore::with_welcome_notes(ManualClock::new(1_000));
    let before = store.list();

    let err = store.add(NoteDraft::new("", "")).unwrap_err();
    assert_eq!(err, StoreError::InvalidInput(NoteValidationError::EmptyContent));
    let err = store.add(NoteDraft::new("  ", "\n\t")).unwrap_err();
    assert_eq!(err, StoreError::InvalidInput(NoteValidationError::EmptyContent));

    assert_eq!(store.list(), before);
    assert!(store.list().iter().all(|note| !note.is_blank()));
}

#[test]
fn update_changes_only_supplied_fields_and_updated_at() {
    let clock = ManualClock::new(100);
    let mut store = InMemoryNoteStore::new(&clock);
    let created = store
        .add(NoteDraft::new("Heading", "Body").with_images(vec!["img://1".to_string()]))
        .unwrap();

    clock.set(250);
    let updated = store
        .update(created.id, NotePatch::new().heading("New heading"))
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, 100);
    assert_eq!(updated.updated_at, 250);
    assert_eq!(updated.heading, "New heading");
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.images, created.images);
    assert_eq!(updated.files, created.files);
    assert_eq!(store.get(created.id), Some(updated));
}

#[test]
fn update_missing_id_returns_not_found_without_changes() {
    let mut store = InMemoryNoteStore::with_welcome_notes(ManualClock::new(1_000));
    let before = store.list();
    let missing = Uuid::new_v4();

    let err = store
        .update(missing, NotePatch::new().heading("ghost"))
        .unwrap_err();
    assert_eq!(err, StoreError::NotFound(missing));
    assert_eq!(store.list(), before);
}

#[test]
fn update_that_would_blank_the_note_is_rejected() {
    let clock = ManualClock::new(100);
    let mut store = InMemoryNoteStore::new(&clock);
    let created = store.add(NoteDraft::new("Only heading", "")).unwrap();

    clock.set(200);
    let err = store
        .update(created.id, NotePatch::new().heading("   "))
        .unwrap_err();
    assert_eq!(err, StoreError::InvalidInput(NoteValidationError::EmptyContent));
    assert_eq!(store.get(created.id), Some(created));
}

#[test]
fn delete_is_idempotent() {
    let mut store = InMemoryNoteStore::with_welcome_notes(ManualClock::new(1_000));
    let target = store.list()[0].id;

    store.delete(target);
    let after_once = store.list();
    store.delete(target);
    assert_eq!(store.list(), after_once);
    assert_eq!(store.len(), 1);
    assert!(store.get(target).is_none());

    store.delete(Uuid::new_v4());
    assert_eq!(store.len(), 1);
}

#[test]
fn get_does_not_touch_updated_at() {
    let clock = ManualClock::new(10);
    let mut store = InMemoryNoteStore::new(&clock);
    let created = store.add(NoteDraft::new("read me", "")).unwrap();
    clock.set(99);
    assert_eq!(store.get(created.id).unwrap().updated_at, 10);
}

#[test]
fn list_is_sorted_by_updated_at_descending() {
    let clock = ManualClock::new(0);
    let mut store = InMemoryNoteStore::new(&clock);
    let mut ids = Vec::new();
    for (idx, at) in [300, 100, 500, 200, 400].into_iter().enumerate() {
        clock.set(at);
        ids.push(store.add(NoteDraft::new(format!("n{idx}"), "")).unwrap().id);
    }
    clock.set(50);
    store.update(ids[2], NotePatch::new().description("older clock")).unwrap();

    let listed = store.list();
    assert!(listed
        .windows(2)
        .all(|pair| pair[0].updated_at >= pair[1].updated_at));
}

#[test]
fn update_moves_note_to_front_of_list() {
    let clock = ManualClock::new(100);
    let mut store = InMemoryNoteStore::new(&clock);
    let a = store.add(NoteDraft::new("Welcome", "")).unwrap();
    clock.set(90);
    let b = store.add(NoteDraft::new("Tips", "")).unwrap();

    let listed: Vec<_> = store.list().into_iter().map(|n| n.id).collect();
    assert_eq!(listed, vec![a.id, b.id]);

    clock.set(200);
    store.update(b.id, NotePatch::new().heading("Tips!")).unwrap();
    let listed = store.list();
    assert_eq!(listed[0].id, b.id);
    assert_eq!(listed[0].heading, "Tips!");
    assert_eq!(listed[0].updated_at, 200);
    assert_eq!(listed[1].id, a.id);
    assert_eq!(listed[1].updated_at, 100);
}
