//! Markdown outline renderer: root heading plus a nested unordered list.

use std::fs;
use std::path::Path;

use generational_arena::Index;
use tracing::instrument;

use crate::arena::OutlineArena;
use crate::errors::{OutlineError, OutlineResult};

/// Render the outline as a markdown document.
///
/// The root becomes a `#` heading followed by a blank line; every
/// descendant becomes a `- ` list item, indented four spaces per level
/// with the root's children at one level. Depth-first, pre-order, children
/// in document order.
pub fn render(arena: &OutlineArena) -> String {
    let Some(root_idx) = arena.root() else {
        return String::new();
    };
    let Some(root) = arena.get_node(root_idx) else {
        return String::new();
    };

    let mut lines = vec![format!("# {}", root.data.label()), String::new()];
    for &child in &root.children {
        walk(arena, child, 1, &mut lines);
    }

    lines.join("\n") + "\n"
}

fn walk(arena: &OutlineArena, idx: Index, level: usize, lines: &mut Vec<String>) {
    let Some(node) = arena.get_node(idx) else {
        return;
    };
    lines.push(format!("{}- {}", "    ".repeat(level), node.data.label()));
    for &child in &node.children {
        walk(arena, child, level + 1, lines);
    }
}

/// Render and write the markdown document to `path`.
#[instrument(level = "debug", skip(arena))]
pub fn write(arena: &OutlineArena, path: &Path) -> OutlineResult<()> {
    fs::write(path, render(arena)).map_err(|e| OutlineError::OutputWrite {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
