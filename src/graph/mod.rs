//! The recorded value-flow graph.
//!
//! This module holds the append-only entity store and the call-stack driven scoping rules that
//! decide which subgraph a new node belongs to.
//!
//! # Architecture
//!
//! - **Entities**: [`Node`], [`Edge`] and [`Subgraph`], each addressed by a strongly-typed id
//!   ([`NodeId`], [`EdgeId`], [`SubgraphId`]) equal to its position in the store
//! - **Scope stack**: a stack of [`SubgraphId`]s; the top is the subgraph that newly created nodes
//!   attach to
//! - **Façade**: [`Graph`], the operation surface used by instrumentation call sites
//! - **Guards**: [`ScopeGuard`] ties an entered call to a lexical region
//!
//! # Invariants
//!
//! - Nothing is ever removed; ids are dense and assigned in creation order
//! - The scope stack always holds at least the root while the graph is alive
//! - At teardown, popping the root must leave the stack empty. Anything else means an
//!   `enter_call` was never paired with a `leave_call`, which is reported by [`Graph::finish`]
//!   and is fatal when the graph is simply dropped
//!
//! # Examples
//!
//! ```rust
//! use valueflow::{Graph, graph::{PassKind, ValueKind}};
//!
//! let mut graph = Graph::new();
//! let a = graph.create_node(ValueKind::LValue, "a")?;
//! {
//!     let mut call = graph.scope("consume")?;
//!     let param = call.create_node(ValueKind::LValue, "param")?;
//!     call.create_edge(a, param, PassKind::Move);
//! }
//! assert_eq!(graph.depth(), 1);
//! graph.finish()?;
//! # Ok::<(), valueflow::Error>(())
//! ```

mod edge;
mod node;
mod scope;
mod subgraph;

pub use edge::{Edge, EdgeId, PassKind};
pub use node::{Node, NodeId, ValueKind};
pub use scope::ScopeGuard;
pub use subgraph::{Subgraph, SubgraphId};

use crate::{Error, Result};

/// Label of the implicit root subgraph, also used as the name of the rendered document.
pub const ROOT_LABEL: &str = "G";

/// Records nodes, edges and call scopes as a program runs.
///
/// A fresh graph contains exactly one subgraph, the root ([`SubgraphId::ROOT`], labelled
/// [`ROOT_LABEL`]), and its scope stack holds only that root. Every creation operation appends to
/// one of the three stores in O(1); rendering is done once at the end through
/// [`Graph::to_dot`] or [`Graph::dump`].
///
/// # Teardown
///
/// [`Graph::finish`] pops the root scope and reports unbalanced `enter_call`/`leave_call` pairs
/// as [`Error::UnbalancedScopes`]. A graph that is dropped without calling `finish` performs the
/// same check and panics on violation.
///
/// # Thread Safety
///
/// `Graph` is a plain single-threaded value. Share it between instrumentation sites of one thread
/// through a [`Recorder`](crate::Recorder).
#[derive(Debug)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    subgraphs: Vec<Subgraph>,
    scopes: Vec<SubgraphId>,
    finished: bool,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Creates a graph holding only the root subgraph, with the root as the active scope.
    #[must_use]
    pub fn new() -> Self {
        Graph {
            nodes: Vec::new(),
            edges: Vec::new(),
            subgraphs: vec![Subgraph::new(ROOT_LABEL.to_string())],
            scopes: vec![SubgraphId::ROOT],
            finished: false,
        }
    }

    /// Appends a subgraph as a child of the currently active scope.
    ///
    /// The identifier is not constrained: it may be empty and may repeat.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoActiveScope`] if the scope stack is empty.
    pub fn create_subgraph(&mut self, identifier: impl Into<String>) -> Result<SubgraphId> {
        let parent = self.current_scope()?;
        self.create_subgraph_in(parent, identifier)
    }

    /// Appends a subgraph as a child of `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SubgraphOutOfRange`] if `parent` does not exist.
    pub fn create_subgraph_in(
        &mut self,
        parent: SubgraphId,
        identifier: impl Into<String>,
    ) -> Result<SubgraphId> {
        let id = SubgraphId(self.subgraphs.len());
        self.subgraphs
            .get_mut(parent.0)
            .ok_or(Error::SubgraphOutOfRange(parent))?
            .push_child(id);
        self.subgraphs.push(Subgraph::new(identifier.into()));
        Ok(id)
    }

    /// Appends a node and attaches it to the currently active scope.
    ///
    /// An empty `identifier` is replaced by the placeholder `tmp#<index>`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoActiveScope`] if the scope stack is empty.
    pub fn create_node(
        &mut self,
        kind: ValueKind,
        identifier: impl Into<String>,
    ) -> Result<NodeId> {
        let scope = self.current_scope()?;
        let id = NodeId(self.nodes.len());

        let mut identifier = identifier.into();
        if identifier.is_empty() {
            identifier = format!("tmp#{}", id.0);
        }

        self.subgraphs
            .get_mut(scope.0)
            .ok_or(Error::SubgraphOutOfRange(scope))?
            .push_node(id);
        log::trace!("node {id} '{identifier}' ({kind}) in {scope}");
        self.nodes.push(Node::new(id, identifier, kind));
        Ok(id)
    }

    /// Appends an edge from `from` to `to`.
    ///
    /// The endpoints are not validated. Callers must pass ids returned by
    /// [`Graph::create_node`]; rendering an edge with a dangling endpoint produces a reference to
    /// a node that Graphviz will create implicitly.
    pub fn create_edge(&mut self, from: NodeId, to: NodeId, kind: PassKind) -> EdgeId {
        let id = EdgeId(self.edges.len());
        log::trace!("edge {id} {from} -> {to} ({kind})");
        self.edges.push(Edge::new(from, to, kind));
        id
    }

    /// Creates a subgraph under the active scope and makes it the active scope.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoActiveScope`] if the scope stack is empty.
    pub fn enter_call(&mut self, identifier: impl Into<String>) -> Result<SubgraphId> {
        let id = self.create_subgraph(identifier)?;
        self.scopes.push(id);
        log::debug!("enter {id} (depth {})", self.scopes.len());
        Ok(id)
    }

    /// Leaves the active call, making its parent the active scope again.
    ///
    /// Returns the subgraph that was left. Every [`Graph::enter_call`] must be paired with
    /// exactly one `leave_call`; see [`Graph::scope`] for a guard that does this automatically.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ScopeUnderflow`] if only the root scope is active.
    pub fn leave_call(&mut self) -> Result<SubgraphId> {
        if self.scopes.len() <= 1 {
            return Err(Error::ScopeUnderflow);
        }

        let left = self.scopes.pop().ok_or(Error::ScopeUnderflow)?;
        log::debug!("leave {left} (depth {})", self.scopes.len());
        Ok(left)
    }

    /// Enters a call and returns a guard that leaves it when dropped.
    ///
    /// The guard dereferences to the graph, so recording continues through it while the call is
    /// active.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoActiveScope`] if the scope stack is empty.
    pub fn scope(&mut self, identifier: impl Into<String>) -> Result<ScopeGuard<'_>> {
        ScopeGuard::enter(self, identifier)
    }

    /// Returns the node with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeOutOfRange`] if no such node was created.
    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(id.0).ok_or(Error::NodeOutOfRange(id))
    }

    /// Returns the edge with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EdgeOutOfRange`] if no such edge was created.
    pub fn edge(&self, id: EdgeId) -> Result<&Edge> {
        self.edges.get(id.0).ok_or(Error::EdgeOutOfRange(id))
    }

    /// Returns the subgraph with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SubgraphOutOfRange`] if no such subgraph was created.
    pub fn subgraph(&self, id: SubgraphId) -> Result<&Subgraph> {
        self.subgraphs.get(id.0).ok_or(Error::SubgraphOutOfRange(id))
    }

    /// Returns the implicit root subgraph.
    #[must_use]
    pub fn root(&self) -> &Subgraph {
        &self.subgraphs[SubgraphId::ROOT.0]
    }

    /// Returns the most recently created node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if no node has been created.
    pub fn latest_node(&self) -> Result<&Node> {
        self.nodes.last().ok_or(Error::Empty("node"))
    }

    /// Returns the most recently created node for renaming or re-typing.
    ///
    /// This is the only way to modify a node after creation, and it only reaches the latest one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if no node has been created.
    pub fn latest_node_mut(&mut self) -> Result<&mut Node> {
        self.nodes.last_mut().ok_or(Error::Empty("node"))
    }

    /// Returns the most recently created edge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if no edge has been created.
    pub fn latest_edge(&self) -> Result<&Edge> {
        self.edges.last().ok_or(Error::Empty("edge"))
    }

    /// Iterates over all nodes in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter()
    }

    /// Iterates over all edges in creation order, paired with their ids.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(index, edge)| (EdgeId(index), edge))
    }

    /// Number of recorded nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of recorded edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of subgraphs, including the root.
    #[must_use]
    pub fn subgraph_count(&self) -> usize {
        self.subgraphs.len()
    }

    /// Current depth of the scope stack; 1 when only the root is active.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// The subgraph that newly created nodes attach to.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoActiveScope`] if the scope stack is empty.
    pub fn current_scope(&self) -> Result<SubgraphId> {
        self.scopes.last().copied().ok_or(Error::NoActiveScope)
    }

    /// Tears the graph down, checking that every entered call was left.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnbalancedScopes`] if calls remain open after the root scope is popped.
    pub fn finish(mut self) -> Result<()> {
        self.finished = true;
        self.teardown()
    }

    fn teardown(&mut self) -> Result<()> {
        self.scopes.pop();
        log::debug!(
            "teardown: {} node(s), {} edge(s), {} subgraph(s)",
            self.nodes.len(),
            self.edges.len(),
            self.subgraphs.len()
        );

        if self.scopes.is_empty() {
            Ok(())
        } else {
            Err(Error::UnbalancedScopes {
                open: self.scopes.len(),
            })
        }
    }
}

impl Drop for Graph {
    fn drop(&mut self) {
        if self.finished {
            return;
        }

        if let Err(error) = self.teardown() {
            log::error!("{error}");
            if !std::thread::panicking() {
                panic!("{error}");
            }
        }
    }
}
