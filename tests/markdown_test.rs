//! Tests for the markdown renderer

use wbsmap::render::markdown;
use wbsmap::{OutlineArena, OutlineBuilder, OutlineDocument};

fn build(json: &str) -> OutlineArena {
    let document: OutlineDocument = serde_json::from_str(json).expect("parse outline document");
    OutlineBuilder::new().build(&document)
}

#[test]
fn given_two_leaves_when_rendering_then_output_matches_expected_shape() {
    // Arrange
    let arena = build(r#"{"title":"Root","children":[{"title":"A"},{"title":"B"}]}"#);

    // Act
    let rendered = markdown::render(&arena);

    // Assert
    assert_eq!(rendered, "# Root\n\n    - A\n    - B\n");
}

#[test]
fn given_nested_tree_when_rendering_then_indent_grows_four_spaces_per_level() {
    let arena = build(
        r#"{"title":"Root","children":[
            {"title":"A","children":[{"title":"A1","children":[{"title":"A1a"}]}]}
        ]}"#,
    );

    let rendered = markdown::render(&arena);

    assert_eq!(
        rendered,
        "# Root\n\n    - A\n        - A1\n            - A1a\n"
    );
}

#[test]
fn given_codes_when_rendering_then_labels_carry_code_prefix() {
    let arena = build(
        r#"{"title":"Root","code":"0","children":[{"title":"Consent Workflow","code":"1.1"}]}"#,
    );

    let rendered = markdown::render(&arena);

    assert!(rendered.starts_with("# 0 Root\n"));
    assert!(rendered.contains("    - 1.1 Consent Workflow\n"));
}

#[test]
fn given_childless_root_when_rendering_then_heading_stands_alone() {
    let arena = build(r#"{"title":"Root"}"#);
    assert_eq!(markdown::render(&arena), "# Root\n\n");
}

#[test]
fn given_sibling_order_when_rendering_then_items_follow_input_order() {
    let arena = build(
        r#"{"title":"Root","children":[{"title":"B"},{"title":"A"},{"title":"C"}]}"#,
    );

    let rendered = markdown::render(&arena);
    let items: Vec<&str> = rendered
        .lines()
        .filter_map(|line| line.trim_start().strip_prefix("- "))
        .collect();

    assert_eq!(items, vec!["B", "A", "C"]);
}
