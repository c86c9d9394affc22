use std::ops::Index;

use crate::util::Side;

/// Stable address of a [`Node`] inside the [`Arena`] of the tree that owns it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// A single stored value and its relations to the rest of the tree.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,

    /// The node holding this one as `left` or `right`. `None` only for the root.
    /// Nothing walks upwards yet; it's kept for deletion and successor lookups.
    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) parent: Option<NodeId>,
}

impl<T> Node<T> {
    fn new(value: T, parent: Option<NodeId>) -> Self {
        Self {
            value,
            left: None,
            right: None,
            parent,
        }
    }

    pub(crate) fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Owns every [`Node`] of one tree.
///
/// Nodes are only ever appended, so a child is always stored at a higher index than its
/// parent. Dropping or clearing the arena releases each node exactly once, without
/// recursing down the tree.
#[derive(Debug)]
pub(crate) struct Arena<T> {
    nodes: Vec<Node<T>>,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Stores a new leaf holding `value`. If `parent` is given, the leaf is hooked into its
    /// `side` slot, which must be empty.
    pub(crate) fn alloc(&mut self, value: T, parent: Option<(NodeId, Side)>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(value, parent.map(|(p, _)| p)));

        if let Some((parent, side)) = parent {
            let slot = match side {
                Side::Left => &mut self.nodes[parent.0].left,
                Side::Right => &mut self.nodes[parent.0].right,
            };
            debug_assert!(slot.is_none(), "child slot already taken");
            *slot = Some(id);
        }

        id
    }

    /// Iterates every node with its id, in allocation order.
    pub(crate) fn iter(&self) -> impl DoubleEndedIterator<Item = (NodeId, &Node<T>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.0]
    }
}
