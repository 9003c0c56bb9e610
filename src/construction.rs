//! Turns a sequence of keys into a tree plus the ordered stream of events a
//! renderer needs to animate its construction.
//!
//! For every key, in order, a [`Session`] emits:
//!
//! 1. [`Event::PathHighlight`] with the keys of the nodes visited on the way to the
//!    insertion point (empty for the root),
//! 2. [`Event::NodeAppear`] for the new node,
//! 3. [`Event::EdgeAppear`] from the parent to the new node, unless it is the root.
//!
//! [`Session::finish`] then emits a single [`Event::InsertionSequenceComplete`].
//! The session never waits on the sink; pacing the playback is the sink's business.
//!
//! # Examples
//!
//! ```
//! use bst_layout::construction::{construct, Event};
//! use bst_layout::layout::Layout;
//! use kurbo::Point;
//!
//! let (tree, events) = construct([50, 30], Layout::default());
//!
//! assert_eq!(tree.len(), 2);
//! assert_eq!(
//!     events,
//!     vec![
//!         Event::PathHighlight(vec![]),
//!         Event::NodeAppear { value: 50, position: Point::new(0.0, 0.0) },
//!         Event::PathHighlight(vec![50]),
//!         Event::NodeAppear { value: 30, position: Point::new(-2.0, -1.2) },
//!         Event::EdgeAppear { from: Point::new(0.0, 0.0), to: Point::new(-2.0, -1.2) },
//!         Event::InsertionSequenceComplete,
//!     ]
//! );
//! ```

use std::fmt;

use kurbo::Point;
use tracing::{debug, instrument};

use crate::layout::Layout;
use crate::tree::{Placement, Tree};

/// Something for a renderer to draw or animate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event<K> {
    /// Trace the descent through these keys, root first.
    PathHighlight(Vec<K>),
    /// Draw a node for `value` at `position`.
    NodeAppear {
        /// The inserted key.
        value: K,
        /// Where the node goes.
        position: Point,
    },
    /// Draw an edge between a parent and its new child.
    EdgeAppear {
        /// The parent's position.
        from: Point,
        /// The child's position.
        to: Point,
    },
    /// Every key has been inserted.
    InsertionSequenceComplete,
}

impl<K: fmt::Display> fmt::Display for Event<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PathHighlight(path) => {
                f.write_str("highlight")?;
                for value in path {
                    write!(f, " {value}")?;
                }
                Ok(())
            }
            Self::NodeAppear { value, position } => {
                write!(f, "node {value} at ({}, {})", position.x, position.y)
            }
            Self::EdgeAppear { from, to } => write!(
                f,
                "edge ({}, {}) -> ({}, {})",
                from.x, from.y, to.x, to.y
            ),
            Self::InsertionSequenceComplete => f.write_str("complete"),
        }
    }
}

/// Receives events as a [`Session`] produces them.
pub trait Sink<K> {
    /// Accepts the next event.
    fn emit(&mut self, event: Event<K>);
}

impl<K> Sink<K> for Vec<Event<K>> {
    fn emit(&mut self, event: Event<K>) {
        self.push(event);
    }
}

impl<K, S: Sink<K> + ?Sized> Sink<K> for &mut S {
    fn emit(&mut self, event: Event<K>) {
        (**self).emit(event);
    }
}

/// One construction run: the tree being built, the layout placing its nodes, and
/// the sink receiving the events.
#[derive(Debug)]
pub struct Session<K, S> {
    tree: Tree<K>,
    layout: Layout,
    sink: S,
}

impl<K, S> Session<K, S>
where
    K: Ord + Clone,
    S: Sink<K>,
{
    /// Starts a run with an empty tree.
    pub fn new(layout: Layout, sink: S) -> Self {
        Self {
            tree: Tree::new(),
            layout,
            sink,
        }
    }

    /// Inserts `value`, emitting its highlight, node and edge events.
    #[instrument(level = "debug", skip_all, fields(index = self.tree.len()))]
    pub fn insert(&mut self, value: K) -> Placement {
        let path = self
            .tree
            .search_path(&value)
            .into_iter()
            .map(|node| node.value().clone())
            .collect();
        self.sink.emit(Event::PathHighlight(path));

        let placement = self.tree.insert(value.clone(), &self.layout);
        self.sink.emit(Event::NodeAppear {
            value,
            position: placement.position,
        });
        if let Some(attachment) = placement.attachment {
            self.sink.emit(Event::EdgeAppear {
                from: attachment.parent_position,
                to: placement.position,
            });
        }

        debug!(
            depth = placement.depth,
            x = placement.position.x,
            y = placement.position.y,
            "inserted key"
        );
        placement
    }

    /// The tree built so far.
    pub fn tree(&self) -> &Tree<K> {
        &self.tree
    }

    /// The layout placing new nodes.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Ends the run, emitting [`Event::InsertionSequenceComplete`], and hands back
    /// the tree and the sink.
    pub fn finish(mut self) -> (Tree<K>, S) {
        self.sink.emit(Event::InsertionSequenceComplete);
        debug!(nodes = self.tree.len(), "construction complete");
        (self.tree, self.sink)
    }
}

/// Builds a tree from `keys` in one session, collecting its events.
#[instrument(level = "debug", skip_all)]
pub fn construct<K, I>(keys: I, layout: Layout) -> (Tree<K>, Vec<Event<K>>)
where
    K: Ord + Clone,
    I: IntoIterator<Item = K>,
{
    let mut session = Session::new(layout, Vec::new());
    for key in keys {
        session.insert(key);
    }
    session.finish()
}
