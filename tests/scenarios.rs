use style_swap::{
    Message, MemoryDocument, NoYield, RemapResult, Session, StyleAssignment, StyleId,
    StyleSegment, SwapSettings,
};

fn start(json: &str) -> (MemoryDocument, Session) {
    let doc = MemoryDocument::from_json(json).unwrap();
    let session = Session::start(&doc, SwapSettings::default(), &mut NoYield);
    (doc, session)
}

fn check_and_update(json: &str) -> Message {
    Message::CheckAndUpdate {
        json: json.to_string(),
    }
}

const HEADINGS: &str = r#"{
    "styles": {"S1": "Heading", "S2": "Body"},
    "nodes": [
        {"id": "1:1", "characters": "Intro", "style": "S1"},
        {"id": "1:2", "characters": "Chapter", "style": "S1"},
        {"id": "1:3", "characters": "plain text", "style": ""},
        {"id": "1:4", "characters": "Footnote", "style": "S2"}
    ]
}"#;

#[test]
fn test_heading_nodes_move_to_body() {
    let (mut doc, mut session) = start(HEADINGS);
    assert_eq!(session.catalog().lookup("heading"), Some(&StyleId::from("S1")));

    let outcome = session
        .dispatch(&mut doc, check_and_update(r#"{"heading":"body"}"#))
        .unwrap();

    assert_eq!(
        outcome.result,
        Some(RemapResult {
            updated: 2,
            not_found: 0
        })
    );
    for id in ["1:1", "1:2"] {
        assert_eq!(
            doc.node(id).unwrap().style,
            StyleAssignment::Uniform(StyleId::from("S2"))
        );
    }
    assert_eq!(
        doc.node("1:3").unwrap().style,
        StyleAssignment::Uniform(StyleId::from(""))
    );
}

#[test]
fn test_unknown_target_style_reported() {
    let (mut doc, mut session) = start(HEADINGS);
    let outcome = session
        .dispatch(&mut doc, check_and_update(r#"{"Heading":"Nonexistent"}"#))
        .unwrap();

    assert_eq!(
        outcome.result,
        Some(RemapResult {
            updated: 0,
            not_found: 1
        })
    );
    assert!(outcome.message.contains("1 styles not found"));
    assert_eq!(
        doc.node("1:1").unwrap().style,
        StyleAssignment::Uniform(StyleId::from("S1"))
    );
    assert!(doc.is_closed());
}

#[test]
fn test_malformed_json_rejected_without_mutation() {
    let (mut doc, mut session) = start(HEADINGS);
    let before = doc.snapshot().clone();

    let outcome = session
        .dispatch(&mut doc, check_and_update(r#"{"Heading":"#))
        .unwrap();

    assert_eq!(outcome.result, None);
    assert_eq!(doc.notifications(), ["Wrong format. Please try again.".to_string()]);
    assert_eq!(doc.snapshot(), &before);
    assert!(doc.is_closed());
}

#[test]
fn test_only_matching_segment_rewritten() {
    let (mut doc, mut session) = start(
        r#"{
            "styles": {"S1": "Heading", "S2": "Body", "S3": "Caption"},
            "nodes": [
                {"id": "2:1", "characters": "Hello world", "style": [
                    {"start": 0, "end": 5, "style": "S1"},
                    {"start": 5, "end": 11, "style": "S3"}
                ]},
                {"id": "2:2", "characters": "Body copy", "style": "S2"}
            ]
        }"#,
    );

    let outcome = session
        .dispatch(&mut doc, check_and_update(r#"{"Heading":"Body"}"#))
        .unwrap();

    assert_eq!(outcome.result.map(|r| r.updated), Some(1));
    assert_eq!(
        doc.node("2:1").unwrap().style,
        StyleAssignment::Segmented(vec![
            StyleSegment::new(0, 5, "S2"),
            StyleSegment::new(5, 11, "S3"),
        ])
    );
}

#[test]
fn test_parameters_from_palette() {
    let (mut doc, mut session) = start(HEADINGS);
    let outcome = session
        .dispatch(
            &mut doc,
            Message::RunWithParameters {
                old_style: Some("Body".to_string()),
                new_style: Some("Heading".to_string()),
            },
        )
        .unwrap();

    assert_eq!(outcome.message, "Styles swapped successfully. 1 nodes updated.");
    assert_eq!(
        doc.node("1:4").unwrap().style,
        StyleAssignment::Uniform(StyleId::from("S1"))
    );
}

#[test]
fn test_document_round_trips_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.json");

    let (mut doc, mut session) = start(HEADINGS);
    session
        .dispatch(&mut doc, check_and_update(r#"{"heading":"body"}"#))
        .unwrap();
    doc.save(&path).unwrap();

    let reloaded = MemoryDocument::load(&path).unwrap();
    let session = Session::start(&reloaded, SwapSettings::default(), &mut NoYield);
    let names: Vec<&str> = session
        .catalog()
        .entries()
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, vec!["body"]);
}

#[test]
fn test_hidden_top_level_node_is_remapped() {
    let (mut doc, mut session) = start(
        r#"{
            "styles": {"S1": "Heading", "S2": "Body", "S3": "Caption"},
            "nodes": [
                {"id": "1:1", "characters": "Visible", "style": "S2"},
                {"id": "1:2", "characters": "Hidden", "visible": false, "style": "S1"},
                {"id": "1:3", "characters": "Inside", "visible": false, "in_instance": true, "style": "S3"}
            ]
        }"#,
    );
    assert_eq!(session.catalog().lookup("heading"), Some(&StyleId::from("S1")));
    assert_eq!(session.catalog().lookup("caption"), None);

    let outcome = session
        .dispatch(&mut doc, check_and_update(r#"{"heading":"body"}"#))
        .unwrap();

    assert_eq!(
        outcome.result,
        Some(RemapResult {
            updated: 1,
            not_found: 0
        })
    );
    assert_eq!(
        doc.node("1:2").unwrap().style,
        StyleAssignment::Uniform(StyleId::from("S2"))
    );
}
