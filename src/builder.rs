//! Builds the arena-backed outline tree from a parsed document.

use generational_arena::Index;
use tracing::instrument;

use crate::arena::{NodeData, OutlineArena};
use crate::outline::OutlineDocument;

/// Constructs an [`OutlineArena`] congruent in shape with a document.
///
/// `depth` is assigned top-down starting at 0; children are inserted in
/// document order, which the layout engine and the list renderers rely on.
pub struct OutlineBuilder;

impl Default for OutlineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlineBuilder {
    pub fn new() -> Self {
        Self
    }

    #[instrument(level = "debug", skip(self, document), fields(title = %document.title))]
    pub fn build(&self, document: &OutlineDocument) -> OutlineArena {
        let mut arena = OutlineArena::new();
        self.insert_subtree(&mut arena, document, 0, None);
        arena
    }

    fn insert_subtree(
        &self,
        arena: &mut OutlineArena,
        document: &OutlineDocument,
        depth: usize,
        parent: Option<Index>,
    ) {
        let data = NodeData {
            title: document.title.clone(),
            code: document.code.clone(),
            depth,
            angle: 0.0,
            radius: 0.0,
        };
        let idx = arena.insert_node(data, parent);

        for child in &document.children {
            self.insert_subtree(arena, child, depth + 1, Some(idx));
        }
    }
}
