//! Tests for OutlineBuilder and the document loader

use std::path::PathBuf;
use tempfile::TempDir;

use wbsmap::errors::OutlineError;
use wbsmap::{load_document, OutlineBuilder, OutlineDocument};

fn parse(json: &str) -> OutlineDocument {
    serde_json::from_str(json).expect("parse outline document")
}

fn write_outline(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write outline file");
    path
}

#[test]
fn given_nested_document_when_building_then_depths_follow_parent_chain() {
    // Arrange
    let document = parse(
        r#"{"title":"Root","children":[
            {"title":"A","children":[{"title":"A1","children":[{"title":"A1a"}]}]},
            {"title":"B"}
        ]}"#,
    );

    // Act
    let arena = OutlineBuilder::new().build(&document);

    // Assert
    for (_, node) in arena.iter() {
        match node.parent {
            None => assert_eq!(node.data.depth, 0),
            Some(parent_idx) => {
                let parent = arena.get_node(parent_idx).unwrap();
                assert_eq!(node.data.depth, parent.data.depth + 1);
            }
        }
    }
    assert_eq!(arena.len(), 5);
}

#[test]
fn given_document_when_building_then_children_keep_input_order() {
    // Arrange
    let document = parse(
        r#"{"title":"Root","children":[{"title":"B"},{"title":"A"},{"title":"C"}]}"#,
    );

    // Act
    let arena = OutlineBuilder::new().build(&document);

    // Assert: pre-order iteration sees the children exactly as written
    let titles: Vec<String> = arena
        .iter()
        .map(|(_, node)| node.data.title.clone())
        .collect();
    assert_eq!(titles, vec!["Root", "B", "A", "C"]);
}

#[test]
fn given_code_and_title_when_labelling_then_code_prefixes_title() {
    let document = parse(r#"{"title":"Consent Workflow","code":"1.1"}"#);
    let arena = OutlineBuilder::new().build(&document);
    let root = arena.get_node(arena.root().unwrap()).unwrap();
    assert_eq!(root.data.label(), "1.1 Consent Workflow");
}

#[test]
fn given_title_without_code_when_labelling_then_title_stands_alone() {
    let document = parse(r#"{"title":"Rollout"}"#);
    let arena = OutlineBuilder::new().build(&document);
    let root = arena.get_node(arena.root().unwrap()).unwrap();
    assert_eq!(root.data.label(), "Rollout");
}

#[test]
fn given_missing_title_when_loading_then_malformed_input_error() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = write_outline(&temp, "broken.json", r#"{"children":[{"title":"A"}]}"#);

    // Act
    let result = load_document(&path);

    // Assert
    assert!(matches!(result, Err(OutlineError::MalformedInput { .. })));
}

#[test]
fn given_absent_file_when_loading_then_missing_input_error() {
    let result = load_document(&PathBuf::from("/nonexistent/outline.json"));
    assert!(matches!(result, Err(OutlineError::MissingInput { .. })));
}

#[test]
fn given_valid_file_when_loading_then_document_round_trips() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = write_outline(
        &temp,
        "outline.json",
        r#"{"title":"Root","code":"0","children":[{"title":"A"}]}"#,
    );

    // Act
    let document = load_document(&path).unwrap();

    // Assert
    assert_eq!(document.title, "Root");
    assert_eq!(document.code.as_deref(), Some("0"));
    assert_eq!(document.children.len(), 1);
    assert_eq!(document.children[0].title, "A");
}
