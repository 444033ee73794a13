//! Lexically bounded call scopes.

use std::ops::{Deref, DerefMut};

use crate::{
    graph::{Graph, SubgraphId},
    Result,
};

/// An entered call that is left again when the guard is dropped.
///
/// Created by [`Graph::scope`]. While the guard is alive it mutably borrows the graph and
/// dereferences to it, so nodes and edges recorded through the guard land in the entered
/// subgraph. Dropping the guard (at the end of the block, on an early `return`, on `?`
/// propagation, or while unwinding) calls [`Graph::leave_call`], keeping the scope stack balanced
/// across the region no matter how it exits.
///
/// Guards nest naturally through reborrowing:
///
/// ```rust
/// use valueflow::{Graph, graph::ValueKind};
///
/// let mut graph = Graph::new();
/// {
///     let mut outer = graph.scope("outer")?;
///     let mut inner = outer.scope("inner")?;
///     inner.create_node(ValueKind::LValue, "x")?;
///     assert_eq!(inner.depth(), 3);
/// }
/// assert_eq!(graph.depth(), 1);
/// # Ok::<(), valueflow::Error>(())
/// ```
#[derive(Debug)]
pub struct ScopeGuard<'g> {
    graph: &'g mut Graph,
    scope: SubgraphId,
}

impl<'g> ScopeGuard<'g> {
    pub(crate) fn enter(graph: &'g mut Graph, identifier: impl Into<String>) -> Result<Self> {
        let scope = graph.enter_call(identifier)?;
        Ok(ScopeGuard { graph, scope })
    }

    /// The subgraph entered by this guard.
    #[must_use]
    pub fn id(&self) -> SubgraphId {
        self.scope
    }
}

impl Deref for ScopeGuard<'_> {
    type Target = Graph;

    fn deref(&self) -> &Graph {
        self.graph
    }
}

impl DerefMut for ScopeGuard<'_> {
    fn deref_mut(&mut self) -> &mut Graph {
        self.graph
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        match self.graph.leave_call() {
            Ok(left) if left == self.scope => {}
            Ok(left) => log::warn!("scope guard for {} left {left} instead", self.scope),
            Err(error) => log::warn!("scope guard for {} failed to leave: {error}", self.scope),
        }
    }
}
