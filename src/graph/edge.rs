//! Recorded relationships between value sites.
//!
//! An [`Edge`] records how a value crossed from one node to another: by copy, by move, or by
//! binding one of the reference flavours described by [`PassKind`].

use std::fmt;

use strum::{Display, EnumCount, EnumIter, FromRepr};

use crate::graph::NodeId;

/// A strongly-typed index of an edge within a [`Graph`](crate::Graph).
///
/// Edge ids are assigned sequentially starting from 0 by
/// [`Graph::create_edge`](crate::Graph::create_edge). Since the edge store is append-only, the id
/// order is also the emission order used when the graph is rendered.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Creates a new `EdgeId` from a raw index value.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        EdgeId(index)
    }

    /// Returns the raw store index of this edge.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

impl From<usize> for EdgeId {
    #[inline]
    fn from(index: usize) -> Self {
        EdgeId(index)
    }
}

impl From<EdgeId> for usize {
    #[inline]
    fn from(edge: EdgeId) -> Self {
        edge.0
    }
}

/// How a value was handed from one node to the next.
///
/// `Invalid` is a placeholder for instrumentation that could not classify the transfer; it is
/// recorded like any other kind but rendered without style attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount, FromRepr)]
#[repr(u8)]
pub enum PassKind {
    /// Unclassified transfer
    Invalid = 0,
    /// Bound to a mutable lvalue reference
    LVRef = 1,
    /// Bound to a shared lvalue reference
    ConstLVRef = 2,
    /// Bound to an rvalue reference
    RVRef = 3,
    /// Bound to a const rvalue reference
    ConstRVRef = 4,
    /// The value was duplicated
    Copy = 5,
    /// The value was moved, leaving the source consumed
    Move = 6,
}

impl PassKind {
    /// Returns `true` for the four reference flavours.
    #[must_use]
    pub fn is_reference(self) -> bool {
        matches!(
            self,
            PassKind::LVRef | PassKind::ConstLVRef | PassKind::RVRef | PassKind::ConstRVRef
        )
    }
}

/// A directed relationship between two recorded nodes.
///
/// Endpoints are stored as given: [`Graph::create_edge`](crate::Graph::create_edge) does not check
/// that they refer to existing nodes. Callers are expected to pass ids they obtained from
/// [`Graph::create_node`](crate::Graph::create_node).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    from: NodeId,
    to: NodeId,
    kind: PassKind,
}

impl Edge {
    pub(crate) fn new(from: NodeId, to: NodeId, kind: PassKind) -> Self {
        Edge { from, to, kind }
    }

    /// The node the value came from.
    #[must_use]
    pub fn from(&self) -> NodeId {
        self.from
    }

    /// The node the value went to.
    #[must_use]
    pub fn to(&self) -> NodeId {
        self.to
    }

    /// Both endpoints as `(from, to)`.
    #[must_use]
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.from, self.to)
    }

    /// How the value was handed over.
    #[must_use]
    pub fn kind(&self) -> PassKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_edge_id_formatting() {
        let edge = EdgeId::new(7);
        assert_eq!(format!("{edge:?}"), "EdgeId(7)");
        assert_eq!(format!("{edge}"), "e7");
        assert_eq!(usize::from(edge), 7);
    }

    #[test]
    fn test_edge_keeps_direction() {
        let edge = Edge::new(NodeId::new(4), NodeId::new(1), PassKind::Move);
        assert_eq!(edge.from(), NodeId::new(4));
        assert_eq!(edge.to(), NodeId::new(1));
        assert_eq!(edge.endpoints(), (NodeId::new(4), NodeId::new(1)));
        assert_eq!(edge.kind(), PassKind::Move);
    }

    #[test]
    fn test_pass_kind_reference_classification() {
        let references: Vec<_> = PassKind::iter().filter(|k| k.is_reference()).collect();
        assert_eq!(
            references,
            vec![
                PassKind::LVRef,
                PassKind::ConstLVRef,
                PassKind::RVRef,
                PassKind::ConstRVRef
            ]
        );
        assert_eq!(PassKind::COUNT, 7);
    }

    #[test]
    fn test_pass_kind_from_repr() {
        assert_eq!(PassKind::from_repr(6), Some(PassKind::Move));
        assert_eq!(PassKind::from_repr(7), None);
    }
}
