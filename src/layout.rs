//! Radial layout: depth maps to radius, sibling order to angle.
//!
//! Deterministic single-pass angular subdivision. Each subtree occupies an
//! angular wedge strictly nested inside its parent's wedge, so subtrees
//! never overlap; the trade-off is label crowding at high fan-out near the
//! center.

use std::f64::consts::{FRAC_PI_2, TAU};

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::arena::OutlineArena;
use crate::config::LayoutSettings;

/// Assign `(angle, radius)` to every node in the arena.
///
/// - Root: angle π/2 (pointing up), radius 0.
/// - First-level children: evenly distributed over the full circle,
///   starting at π/2 and proceeding clockwise.
/// - Deeper nodes: fanned into a window of `spread / (depth + 0.5)` radians
///   centered on the parent's angle; a single child inherits the parent's
///   angle exactly, multiple children span the window edge-to-edge.
/// - `radius = depth × radius_step` regardless of subtree size.
#[instrument(level = "debug", skip(arena))]
pub fn apply(arena: &mut OutlineArena, settings: &LayoutSettings) {
    let Some(root_idx) = arena.root() else {
        return;
    };

    let first_level = match arena.get_node_mut(root_idx) {
        Some(root) => {
            root.data.angle = FRAC_PI_2;
            root.data.radius = 0.0;
            root.children.clone()
        }
        None => return,
    };

    if first_level.is_empty() {
        return;
    }

    let branch_count = first_level.len();
    debug!("placing {} first-level branches", branch_count);

    for (idx, &child) in first_level.iter().enumerate() {
        let angle = FRAC_PI_2 - TAU * idx as f64 / branch_count as f64;
        assign_branch(arena, child, angle, settings);
    }
}

/// Place one first-level branch and all its descendants.
///
/// Explicit work list rather than recursion; traversal order does not
/// matter here since every node's angle depends only on its parent's.
fn assign_branch(arena: &mut OutlineArena, branch: Index, angle: f64, settings: &LayoutSettings) {
    let mut work = vec![(branch, angle)];

    while let Some((idx, angle)) = work.pop() {
        let (depth, children) = match arena.get_node_mut(idx) {
            Some(node) => {
                let depth = node.data.depth;
                node.data.angle = angle;
                node.data.radius = depth as f64 * settings.radius_step;
                (depth, node.children.clone())
            }
            None => continue,
        };

        let child_count = children.len();
        if child_count == 0 {
            continue;
        }

        let local_spread = settings.spread / (depth as f64 + 0.5);
        if child_count == 1 {
            work.push((children[0], angle));
        } else {
            let step = local_spread / (child_count - 1) as f64;
            for (i, &child) in children.iter().enumerate() {
                work.push((child, angle - local_spread / 2.0 + step * i as f64));
            }
        }
    }
}
