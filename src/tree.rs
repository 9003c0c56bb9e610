//! A plain, unbalanced BST whose nodes remember where they were drawn.
//!
//! Each node is positioned once, when it is inserted, using a [`Layout`]. Later
//! insertions never move existing nodes even if the tree grows lopsided.
//!
//! Keys that compare equal to an existing key are not rejected. They are sent
//! to the right subtree, so the tree can hold duplicates.
//!
//! # Examples
//!
//! ```
//! use bst_layout::layout::Layout;
//! use bst_layout::tree::{Side, Tree};
//! use kurbo::Point;
//!
//! let layout = Layout::default();
//! let mut tree = Tree::new();
//!
//! // The first key becomes the root at the origin.
//! let root = tree.insert(50, &layout);
//! assert!(root.attachment.is_none());
//! assert_eq!(root.position, Point::ORIGIN);
//!
//! // 30 < 50 goes to the left of the root.
//! let left = tree.insert(30, &layout);
//! assert_eq!(left.attachment.map(|a| a.side), Some(Side::Left));
//! assert_eq!(left.position, Point::new(-2.0, -1.2));
//!
//! // The path to where 40 would go is 50 then 30.
//! let path: Vec<_> = tree.search_path(&40).iter().map(|n| *n.value()).collect();
//! assert_eq!(path, vec![50, 30]);
//!
//! assert_eq!(tree.depth_of(&30), Some(1));
//! assert_eq!(tree.depth_of(&99), None);
//! ```

use kurbo::Point;
use tracing::trace;

use crate::layout::Layout;

/// Which child slot of a parent a node hangs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// Holds keys strictly less than the parent's.
    Left,
    /// Holds keys greater than or equal to the parent's.
    Right,
}

impl Side {
    /// Which way `value` goes when compared against `node_value`. Ties go right.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_layout::tree::Side;
    ///
    /// assert_eq!(Side::of(&1, &2), Side::Left);
    /// assert_eq!(Side::of(&2, &2), Side::Right);
    /// assert_eq!(Side::of(&3, &2), Side::Right);
    /// ```
    pub fn of<K: Ord>(value: &K, node_value: &K) -> Self {
        if value < node_value {
            Self::Left
        } else {
            Self::Right
        }
    }
}

/// Where a new node was hung below an existing one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attachment {
    /// The parent's child slot the new node now occupies.
    pub side: Side,
    /// The parent's depth (root = 0).
    pub parent_depth: usize,
    /// The parent's position.
    pub parent_position: Point,
}

/// What [`Tree::insert`] did with a key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// `None` when the key became the root.
    pub attachment: Option<Attachment>,
    /// Depth of the new node.
    pub depth: usize,
    /// Position assigned to the new node.
    pub position: Point,
}

type Child<K> = Option<Box<Node<K>>>;

/// A key with its layout position and up to two exclusively owned children.
#[derive(Debug)]
pub struct Node<K> {
    value: K,
    left: Child<K>,
    right: Child<K>,
    position: Point,
    depth: usize,
}

impl<K> Node<K> {
    fn new(value: K, position: Point, depth: usize) -> Self {
        Self {
            value,
            left: None,
            right: None,
            position,
            depth,
        }
    }

    /// The key stored here.
    pub fn value(&self) -> &K {
        &self.value
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The child on `side`, if any.
    pub fn child(&self, side: Side) -> Option<&Self> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }

    /// Where this node was placed when it was inserted.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Distance from the root, which has depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    fn slot_mut(&mut self, side: Side) -> &mut Child<K> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// An unbalanced binary search tree built one key at a time.
#[derive(Debug)]
pub struct Tree<K> {
    root: Child<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        // Unlink every node before dropping it so a long chain doesn't recurse.
        let mut pending: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The root node, or `None` while the tree is empty.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// How many keys have been inserted, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of levels in the tree. An empty tree has height 0.
    pub fn height(&self) -> usize {
        self.iter().map(|node| node.depth + 1).max().unwrap_or(0)
    }

    /// Visits the nodes in key order. Equal keys come out in insertion order.
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root());
        iter
    }

    /// Stores `value` in a new leaf and places it with `layout`.
    ///
    /// Starting at the root, `value` goes left when it is less than a node's key
    /// and right otherwise, until it reaches an empty child slot. An empty tree
    /// gets `value` as its root at [`Layout::root_position`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_layout::layout::Layout;
    /// use bst_layout::tree::{Side, Tree};
    ///
    /// let layout = Layout::default();
    /// let mut tree = Tree::new();
    /// tree.insert(50, &layout);
    ///
    /// // Duplicates are kept, to the right.
    /// let placement = tree.insert(50, &layout);
    /// let attachment = placement.attachment.unwrap();
    /// assert_eq!(attachment.side, Side::Right);
    /// assert_eq!(attachment.parent_depth, 0);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: K, layout: &Layout) -> Placement
    where
        K: Ord,
    {
        self.len += 1;

        let mut node = match self.root.as_deref_mut() {
            Some(root) => root,
            None => {
                let position = layout.root_position();
                self.root = Some(Box::new(Node::new(value, position, 0)));
                trace!(x = position.x, y = position.y, "placed root");
                return Placement {
                    attachment: None,
                    depth: 0,
                    position,
                };
            }
        };

        loop {
            let side = Side::of(&value, &node.value);
            let parent_depth = node.depth;
            let parent_position = node.position;

            let slot = node.slot_mut(side);
            match slot {
                Some(child) => node = &mut **child,
                None => {
                    let depth = parent_depth + 1;
                    let position = layout.child_position(parent_position, side, parent_depth);
                    *slot = Some(Box::new(Node::new(value, position, depth)));
                    trace!(?side, depth, x = position.x, y = position.y, "placed node");
                    return Placement {
                        attachment: Some(Attachment {
                            side,
                            parent_depth,
                            parent_position,
                        }),
                        depth,
                        position,
                    };
                }
            }
        }
    }

    /// The nodes [`insert`][Tree::insert] would walk through for `value`: the root
    /// down to, and including, the node that would become its parent.
    ///
    /// Empty when the tree is empty, since `value` would become the root.
    pub fn search_path(&self, value: &K) -> Vec<&Node<K>>
    where
        K: Ord,
    {
        let mut path = Vec::new();
        let mut next = self.root();
        while let Some(node) = next {
            path.push(node);
            next = node.child(Side::of(value, &node.value));
        }
        path
    }

    /// Depth of the node holding `value`, or `None` if no node holds it.
    ///
    /// Every node is a candidate: the scan is pre-order, left subtree before right,
    /// so with duplicates the first match in that order wins.
    pub fn depth_of(&self, value: &K) -> Option<usize>
    where
        K: Ord,
    {
        let mut stack: Vec<&Node<K>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            if node.value == *value {
                return Some(node.depth);
            }
            stack.extend(node.right());
            stack.extend(node.left());
        }
        None
    }
}

/// In-order iterator over the nodes of a [`Tree`].
#[derive(Debug)]
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Iter<'a, K> {
    fn push_left_spine(&mut self, mut next: Option<&'a Node<K>>) {
        while let Some(node) = next {
            self.stack.push(node);
            next = node.left();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node)
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a Node<K>;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
