use generational_arena::{Arena, Index};
use std::fmt;
use tracing::instrument;

/// Data payload for one outline element.
///
/// `angle` (radians) and `radius` (plan units) are populated by the radial
/// layout engine; before layout runs they hold zeros and carry no meaning.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// Display text
    pub title: String,
    /// Optional short identifier prefix, e.g. "1.2"
    pub code: Option<String>,
    /// Distance from the root, 0 for the root itself
    pub depth: usize,
    /// Polar angle in the layout plane
    pub angle: f64,
    /// Polar radius in the layout plane
    pub radius: f64,
}

impl NodeData {
    /// Display label: code prefix plus title when a code is present.
    pub fn label(&self) -> String {
        match &self.code {
            Some(code) => format!("{} {}", code, self.title),
            None => self.title.clone(),
        }
    }

    /// Cartesian position derived from the polar coordinates.
    pub fn coords(&self) -> (f64, f64) {
        (
            self.radius * self.angle.cos(),
            self.radius * self.angle.sin(),
        )
    }
}

impl fmt::Display for NodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Tree node in the arena-based outline structure.
#[derive(Debug)]
pub struct OutlineNode {
    /// Outline data for this node
    pub data: NodeData,
    /// Index of the parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes, in document order
    pub children: Vec<Index>,
}

/// Arena-based tree structure for the outline hierarchy.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
/// The parent link is an index into the node table, not an owning pointer.
#[derive(Debug)]
pub struct OutlineArena {
    /// Arena storage for all tree nodes
    arena: Arena<OutlineNode>,
    /// Index of the root node, None for an empty tree
    root: Option<Index>,
}

impl Default for OutlineArena {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlineArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, data: NodeData, parent: Option<Index>) -> Index {
        let node = OutlineNode {
            data,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    pub fn get_node(&self, idx: Index) -> Option<&OutlineNode> {
        self.arena.get(idx)
    }

    pub fn get_node_mut(&mut self, idx: Index) -> Option<&mut OutlineNode> {
        self.arena.get_mut(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Depth-first pre-order iteration, children in document order.
    pub fn iter(&self) -> TreeIterator {
        TreeIterator::new(self)
    }
}

pub struct TreeIterator<'a> {
    arena: &'a OutlineArena,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(arena: &'a OutlineArena) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push(root);
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a OutlineNode);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}
