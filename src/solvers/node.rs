use crate::maze::{Action, Coord};

/// Index of a node inside a [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Coordinates of the cell in the maze
    pub state: Coord,
    /// The node from which this cell was reached, `None` for the root
    pub parent: Option<NodeId>,
    /// The action taken from the parent to reach this cell, `None` for the root
    pub action: Option<Action>,
}

/// Arena holding every node created during one search.
/// Nodes are never mutated or removed once pushed, so a `NodeId` stays valid for the
/// lifetime of the tree.
#[derive(Debug, Default)]
pub struct SearchTree {
    nodes: Vec<Node>,
}

impl SearchTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        SearchTree {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn root(&mut self, state: Coord) -> NodeId {
        self.push(Node {
            state,
            parent: None,
            action: None,
        })
    }

    pub fn child(&mut self, parent: NodeId, action: Action, state: Coord) -> NodeId {
        self.push(Node {
            state,
            parent: Some(parent),
            action: Some(action),
        })
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walks parent links from `id` back to the root and returns the actions and cells
    /// in root-to-`id` order. The root itself carries no action and is left out.
    pub fn path_to(&self, id: NodeId) -> (Vec<Action>, Vec<Coord>) {
        let mut actions = Vec::new();
        let mut cells = Vec::new();
        let mut node = self.get(id);
        while let (Some(parent), Some(action)) = (node.parent, node.action) {
            actions.push(action);
            cells.push(node.state);
            node = self.get(parent);
        }
        actions.reverse();
        cells.reverse();
        (actions, cells)
    }

    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }
}
