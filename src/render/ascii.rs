//! ASCII tree renderer with box-drawing connectors.

use std::fs;
use std::path::Path;

use generational_arena::Index;
use itertools::{Itertools, Position};
use tracing::instrument;

use crate::arena::OutlineArena;
use crate::errors::{OutlineError, OutlineResult};

/// Render the outline as a plain-text tree.
///
/// The root label stands alone on the first line; branches use `├──` /
/// `└──` connectors with `│` continuation guides for ancestors that still
/// have following siblings. A `│` plus an empty spacer line separates
/// consecutive top-level branches. Depth-first, pre-order.
pub fn render(arena: &OutlineArena) -> String {
    let Some(root_idx) = arena.root() else {
        return String::new();
    };
    let Some(root) = arena.get_node(root_idx) else {
        return String::new();
    };

    let mut lines = vec![root.data.label()];
    if !root.children.is_empty() {
        lines.push("│".to_string());
    }

    let last = root.children.len().saturating_sub(1);
    for (i, &child) in root.children.iter().enumerate() {
        walk(arena, child, "", i == last, &mut lines);
        if i < last {
            lines.push("│".to_string());
            lines.push(String::new());
        }
    }

    lines.join("\n") + "\n"
}

fn walk(arena: &OutlineArena, idx: Index, prefix: &str, is_last: bool, lines: &mut Vec<String>) {
    let Some(node) = arena.get_node(idx) else {
        return;
    };

    let connector = if is_last { "└──" } else { "├──" };
    lines.push(format!("{}{} {}", prefix, connector, node.data.label()));

    if node.children.is_empty() {
        return;
    }

    let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
    for (pos, &child) in node.children.iter().with_position() {
        let last_child = matches!(pos, Position::Last | Position::Only);
        walk(arena, child, &child_prefix, last_child, lines);
    }
}

/// Render and write the text tree to `path`.
#[instrument(level = "debug", skip(arena))]
pub fn write(arena: &OutlineArena, path: &Path) -> OutlineResult<()> {
    fs::write(path, render(arena)).map_err(|e| OutlineError::OutputWrite {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
