//! An unbalanced Binary Search Tree holding a set of unique values.
//!
//! Every value is compared on the way down from the root and ends up either in an existing
//! node (an equal value was already present, so nothing changes) or in a brand new leaf. Nothing
//! ever rotates, so inserting values in sorted order degrades the tree into a chain.
//!
//! # Examples
//!
//! ```
//! use bstree::OrderedTree;
//!
//! let mut tree: OrderedTree<String> = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains("dog"));
//!
//! for animal in ["dog", "cat", "bird", "fish"].iter() {
//!     tree.insert(animal.to_string());
//! }
//! assert!(tree.contains("dog"));
//!
//! // Inserting a value that is already there is ignored.
//! assert!(!tree.insert("cat".to_string()));
//!
//! // In-order traversal visits values in ascending order.
//! let mut sorted = Vec::new();
//! tree.traverse_in_order(|animal| sorted.push(animal.clone()));
//! assert_eq!(sorted, ["bird", "cat", "dog", "fish"]);
//!
//! // Pre-order traversal with depths shows the shape of the tree.
//! let mut shape = Vec::new();
//! tree.traverse_pre_order_with_depth(|animal, depth| shape.push((animal.clone(), depth)));
//! assert_eq!(
//!     shape,
//!     [
//!         ("dog".to_string(), 0),
//!         ("cat".to_string(), 1),
//!         ("bird".to_string(), 2),
//!         ("fish".to_string(), 1),
//!     ]
//! );
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use tracing::{debug, trace};

use crate::node::{Arena, NodeId};
use crate::util::{Search, Side};

/// A Binary Search Tree storing unique values. This can be used for inserting values, checking
/// whether a value is present, and visiting the values in sorted or structural order.
///
/// The tree owns all of its nodes. Copying a tree (via [`Clone`]) re-inserts every value of the
/// source in pre-order, so the copy shares nothing with the source.
pub struct OrderedTree<T> {
    nodes: Arena<T>,
    root: Option<NodeId>,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Returns how many values are stored in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every node, leaving an empty tree.
    pub fn clear(&mut self) {
        debug!(len = self.len(), "clearing tree");
        self.root = None;
        self.nodes.clear();
    }

    /// Returns `true` if the tree holds a value equal to `value`.
    ///
    /// The lookup may use any borrowed form of the stored type, so a tree of `String`s can be
    /// searched with a `&str`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        matches!(self.search(value), Search::Found)
    }

    /// Inserts `value` into the tree if no equal value is present. Returns `true` if a new node
    /// was created and `false` if the value was already there, in which case the tree is left
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// assert!(tree.insert("b"));
    /// assert!(!tree.insert("b"));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        match self.search(&value) {
            Search::Empty => {
                trace!("inserting root");
                self.root = Some(self.nodes.alloc(value, None));
                true
            }
            Search::Found => {
                trace!("ignoring duplicate value");
                false
            }
            Search::Vacant { parent, side } => {
                trace!(?side, parent = parent.index(), "inserting leaf");
                self.nodes.alloc(value, Some((parent, side)));
                true
            }
        }
    }

    /// Calls `visitor` once for every value in ascending order.
    pub fn traverse_in_order<'a, F>(&'a self, mut visitor: F)
    where
        F: FnMut(&'a T),
    {
        let mut stack = Vec::new();
        let mut current = self.root;

        loop {
            while let Some(id) = current {
                stack.push(id);
                current = self.nodes[id].left;
            }

            match stack.pop() {
                Some(id) => {
                    let node = &self.nodes[id];
                    visitor(&node.value);
                    current = node.right;
                }
                None => break,
            }
        }
    }

    /// Calls `visitor` once for every value in pre-order (a node, then its left subtree, then
    /// its right subtree) along with its depth. The root is at depth 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = ["a", "b", "c"].iter().copied().collect();
    ///
    /// // Ascending inserts build a chain leaning right.
    /// let mut shape = Vec::new();
    /// tree.traverse_pre_order_with_depth(|value, depth| shape.push((*value, depth)));
    /// assert_eq!(shape, [("a", 0), ("b", 1), ("c", 2)]);
    /// ```
    pub fn traverse_pre_order_with_depth<'a, F>(&'a self, mut visitor: F)
    where
        F: FnMut(&'a T, usize),
    {
        let nodes = &self.nodes;
        self.walk_pre_order(move |id, depth| visitor(&nodes[id].value, depth));
    }

    /// Calls `visitor` once for every value in pre-order along with the height of its node. The
    /// height is the number of edges on the longest path down to a leaf, so leaves have height 0.
    pub fn traverse_pre_order_with_height<'a, F>(&'a self, mut visitor: F)
    where
        F: FnMut(&'a T, usize),
    {
        let nodes = &self.nodes;
        let heights = self.heights();
        self.walk_pre_order(move |id, _| visitor(&nodes[id].value, heights[id.index()]));
    }

    /// Gets the height of the root node, or `None` if the tree is empty.
    pub fn height(&self) -> Option<usize> {
        self.root.map(|root| self.heights()[root.index()])
    }

    /// Descends from the root comparing `value` against each node on the way.
    fn search<Q>(&self, value: &Q) -> Search
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = match self.root {
            Some(root) => root,
            None => return Search::Empty,
        };

        loop {
            let node = &self.nodes[current];
            let side = match value.cmp(node.value.borrow()) {
                Ordering::Less => Side::Left,
                Ordering::Equal => return Search::Found,
                Ordering::Greater => Side::Right,
            };

            match node.child(side) {
                Some(child) => current = child,
                None => {
                    return Search::Vacant {
                        parent: current,
                        side,
                    }
                }
            }
        }
    }

    /// Visits every node id in pre-order with its depth. Uses an explicit stack so a degenerate
    /// tree can't overflow the call stack.
    fn walk_pre_order<F>(&self, mut f: F)
    where
        F: FnMut(NodeId, usize),
    {
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|root| (root, 0)).into_iter().collect();

        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id];
            f(id, depth);

            // Right goes first so left is popped first.
            if let Some(right) = node.right {
                stack.push((right, depth + 1));
            }
            if let Some(left) = node.left {
                stack.push((left, depth + 1));
            }
        }
    }

    /// Heights of every node, indexed by `NodeId`. Children always sit after their parent in
    /// the arena, so one backwards pass sees each child before its parent.
    fn heights(&self) -> Vec<usize> {
        let mut heights = vec![0; self.nodes.len()];

        for (id, node) in self.nodes.iter().rev() {
            let height = [node.left, node.right]
                .iter()
                .flatten()
                .map(|child| heights[child.index()] + 1)
                .max()
                .unwrap_or(0);
            heights[id.index()] = height;
        }

        heights
    }

    /// Inserts every value of `source` into this tree, in `source`'s pre-order.
    fn copy_from(&mut self, source: &Self)
    where
        T: Clone + Ord,
    {
        debug!(len = source.len(), "copying tree");
        self.nodes.reserve(source.len());
        source.walk_pre_order(|id, _| {
            self.insert(source.nodes[id].value.clone());
        });
    }
}

/// Copies are built by re-insertion rather than by cloning the node structure. A tree that was
/// only ever grown by [`OrderedTree::insert`] comes out with the same shape.
impl<T> Clone for OrderedTree<T>
where
    T: Clone + Ord,
{
    fn clone(&self) -> Self {
        let mut tree = Self::new();
        tree.copy_from(self);
        tree
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.copy_from(source);
    }
}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        self.traverse_in_order(|value| {
            set.entry(value);
        });
        set.finish()
    }
}

impl<T> Extend<T> for OrderedTree<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for OrderedTree<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
