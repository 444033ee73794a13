//! Recorded value sites.
//!
//! A [`Node`] is one observation of a value: a freshly constructed temporary, a named local, or a
//! reference that was bound to some other value. Nodes are addressed exclusively through
//! [`NodeId`], the position at which the node was appended to the graph's store.

use std::fmt;

use strum::{Display, EnumCount, EnumIter, FromRepr};

/// A strongly-typed index of a node within a [`Graph`](crate::Graph).
///
/// `NodeId` values are handed out by [`Graph::create_node`](crate::Graph::create_node) in strictly
/// increasing order starting at 0, and remain valid for the lifetime of the graph since nodes are
/// never removed.
///
/// # Examples
///
/// ```rust
/// use valueflow::{Graph, graph::ValueKind};
///
/// let mut graph = Graph::new();
/// let a = graph.create_node(ValueKind::LValue, "a")?;
/// let b = graph.create_node(ValueKind::Temporary, "")?;
///
/// assert_eq!(a.index() + 1, b.index());
/// # Ok::<(), valueflow::Error>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new `NodeId` from a raw index value.
    ///
    /// Intended for tests and for instrumentation that stores raw indices; ids obtained from
    /// [`Graph::create_node`](crate::Graph::create_node) are always valid, hand-made ones may not be.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw store index of this node.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}

/// Storage category of a recorded value.
///
/// The kind only selects a rendering style; it carries no further semantics and is never
/// validated against the edges touching the node.
///
/// Raw codes (as they might arrive from instrumentation that stores plain integers) can be mapped
/// with [`ValueKind::from_repr`]; codes outside the table yield `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount, FromRepr)]
#[repr(u8)]
pub enum ValueKind {
    /// An unnamed value, e.g. the result of an expression
    Temporary = 0,
    /// A named value with its own storage
    LValue = 1,
    /// A reference bound to an lvalue (`&T` / `&mut T`)
    LVRef = 2,
    /// A reference bound to a value that is about to be consumed
    RVRef = 3,
}

/// A single recorded value site.
///
/// Nodes are created by [`Graph::create_node`](crate::Graph::create_node) and are immutable from
/// the outside, with one exception: the most recently created node may be renamed and re-typed
/// through [`Graph::latest_node_mut`](crate::Graph::latest_node_mut). This lets instrumentation
/// attach a human-readable name that is only known after the value was constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    identifier: String,
    kind: ValueKind,
}

impl Node {
    pub(crate) fn new(id: NodeId, identifier: String, kind: ValueKind) -> Self {
        Node {
            id,
            identifier,
            kind,
        }
    }

    /// The store index of this node.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The label of this node, either caller supplied or a `tmp#<index>` placeholder.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The storage category used to pick the rendering style.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Replaces the label of this node.
    pub fn set_identifier(&mut self, identifier: impl Into<String>) {
        self.identifier = identifier.into();
    }

    /// Replaces the storage category of this node.
    pub fn set_kind(&mut self, kind: ValueKind) {
        self.kind = kind;
    }
}
