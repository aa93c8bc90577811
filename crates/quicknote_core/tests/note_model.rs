use quicknote_core::{Attachment, Note, NotePatch};
use uuid::Uuid;

#[test]
fn note_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let note = Note {
        id,
        heading: "Receipts".to_string(),
        description: "march".to_string(),
        images: vec!["file:///cam/1.jpg".to_string()],
        files: vec![Attachment::new("file:///cache/r.pdf", "r.pdf", "application/pdf")
            .with_size(Some(4_096))],
        created_at: 1_700_000_000_000,
        updated_at: 1_700_000_360_000,
    };

    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["createdAt"], 1_700_000_000_000_i64);
    assert_eq!(json["updatedAt"], 1_700_000_360_000_i64);
    assert_eq!(json["files"][0]["type"], "application/pdf");
    assert_eq!(json["files"][0]["size"], 4_096);

    let decoded: Note = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, note);
}

#[test]
fn missing_attachment_lists_deserialize_as_empty() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "heading": "Bare",
        "description": "",
        "createdAt": 1,
        "updatedAt": 2
    });

    let note: Note = serde_json::from_value(value).unwrap();
    assert!(note.images.is_empty());
    assert!(note.files.is_empty());
    assert!(!note.has_attachments());
    assert!(note.validate().is_ok());
}

#[test]
fn attachment_without_size_omits_the_field() {
    let file = Attachment::new("file:///a.txt", "a.txt", "text/plain");
    let json = serde_json::to_value(&file).unwrap();
    assert!(json.get("size").is_none());
}

#[test]
fn partial_patch_deserializes_missing_fields_as_unchanged() {
    let patch: NotePatch = serde_json::from_value(serde_json::json!({ "heading": "x" })).unwrap();
    assert_eq!(patch.heading.as_deref(), Some("x"));
    assert!(patch.description.is_none());
    assert!(patch.images.is_none());
    assert!(!patch.is_empty());
    assert!(NotePatch::new().is_empty());
}
