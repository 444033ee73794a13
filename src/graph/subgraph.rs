//! Lexical groupings of recorded nodes.

use std::fmt;

use crate::graph::NodeId;

/// A strongly-typed index of a subgraph within a [`Graph`](crate::Graph).
///
/// `SubgraphId(0)` is always the implicit root created together with the graph.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubgraphId(pub(crate) usize);

impl SubgraphId {
    /// The implicit root subgraph every graph starts with.
    pub const ROOT: SubgraphId = SubgraphId(0);

    /// Creates a new `SubgraphId` from a raw index value.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        SubgraphId(index)
    }

    /// Returns the raw store index of this subgraph.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Returns `true` if this is the implicit root.
    #[must_use]
    #[inline]
    pub const fn is_root(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for SubgraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubgraphId({})", self.0)
    }
}

impl fmt::Display for SubgraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cluster_{}", self.0)
    }
}

impl From<usize> for SubgraphId {
    #[inline]
    fn from(index: usize) -> Self {
        SubgraphId(index)
    }
}

/// One call or scope region of the recorded program.
///
/// A subgraph owns the nodes that were created while it was the current scope, and lists the
/// subgraphs that were created beneath it. Both lists only ever grow, and both keep creation
/// order, which is also the order in which they are rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Subgraph {
    identifier: String,
    nodes: Vec<NodeId>,
    children: Vec<SubgraphId>,
}

impl Subgraph {
    pub(crate) fn new(identifier: String) -> Self {
        Subgraph {
            identifier,
            nodes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The label of this subgraph. May be empty and need not be unique.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Nodes directly owned by this subgraph, in creation order.
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Direct child subgraphs, in creation order.
    #[must_use]
    pub fn children(&self) -> &[SubgraphId] {
        &self.children
    }

    pub(crate) fn push_node(&mut self, node: NodeId) {
        self.nodes.push(node);
    }

    pub(crate) fn push_child(&mut self, child: SubgraphId) {
        self.children.push(child);
    }
}
