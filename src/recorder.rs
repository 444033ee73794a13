//! Shared recording handle for instrumentation call sites.
//!
//! Instrumented values and traced functions need to reach the same [`Graph`] without a global.
//! A [`Recorder`] is that handle: cheap to clone, passed explicitly to every site that records,
//! and resolved back into the graph once the run is over.

use std::{
    cell::{RefCell, RefMut},
    io,
    rc::Rc,
};

use crate::{
    graph::{EdgeId, Graph, NodeId, PassKind, SubgraphId, ValueKind},
    Error, Result,
};

/// A cloneable single-thread handle to one recorded [`Graph`].
///
/// All clones refer to the same graph. The handle is neither `Send` nor `Sync`; a scope stack
/// only describes the calls of one thread.
///
/// # Examples
///
/// ```rust
/// use valueflow::{Recorder, graph::ValueKind};
///
/// let recorder = Recorder::new();
/// {
///     let _call = recorder.enter("main")?;
///     recorder.create_node(ValueKind::LValue, "x")?;
/// }
///
/// let graph = recorder.into_graph()?;
/// assert_eq!(graph.node_count(), 1);
/// graph.finish()?;
/// # Ok::<(), valueflow::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    graph: Rc<RefCell<Graph>>,
}

impl Recorder {
    /// Creates a recorder around a fresh graph.
    #[must_use]
    pub fn new() -> Self {
        Self::from_graph(Graph::new())
    }

    /// Creates a recorder that continues recording into an existing graph.
    #[must_use]
    pub fn from_graph(graph: Graph) -> Self {
        Recorder {
            graph: Rc::new(RefCell::new(graph)),
        }
    }

    /// See [`Graph::create_node`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecorderBusy`] if called from inside [`Recorder::with`], or
    /// [`Error::NoActiveScope`] if the scope stack is empty.
    pub fn create_node(&self, kind: ValueKind, identifier: impl Into<String>) -> Result<NodeId> {
        self.graph_mut()?.create_node(kind, identifier)
    }

    /// See [`Graph::create_edge`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecorderBusy`] if called from inside [`Recorder::with`].
    pub fn create_edge(&self, from: NodeId, to: NodeId, kind: PassKind) -> Result<EdgeId> {
        Ok(self.graph_mut()?.create_edge(from, to, kind))
    }

    /// See [`Graph::create_subgraph`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecorderBusy`] if called from inside [`Recorder::with`], or
    /// [`Error::NoActiveScope`] if the scope stack is empty.
    pub fn create_subgraph(&self, identifier: impl Into<String>) -> Result<SubgraphId> {
        self.graph_mut()?.create_subgraph(identifier)
    }

    /// Enters a call and returns a guard that leaves it when dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecorderBusy`] if called from inside [`Recorder::with`], or
    /// [`Error::NoActiveScope`] if the scope stack is empty.
    pub fn enter(&self, identifier: impl Into<String>) -> Result<CallScope> {
        let scope = self.graph_mut()?.enter_call(identifier)?;
        Ok(CallScope {
            recorder: self.clone(),
            scope,
        })
    }

    /// Renames and re-types `node`, which must be the most recently recorded node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecorderBusy`] if called from inside [`Recorder::with`],
    /// [`Error::Empty`] if nothing was recorded yet, or [`Error::NotLatest`] if other nodes were
    /// recorded after `node`.
    pub fn rename_latest(
        &self,
        node: NodeId,
        identifier: impl Into<String>,
        kind: ValueKind,
    ) -> Result<()> {
        let mut graph = self.graph_mut()?;
        let latest = graph.latest_node_mut()?;
        if latest.id() != node {
            return Err(Error::NotLatest(node));
        }

        latest.set_identifier(identifier);
        latest.set_kind(kind);
        Ok(())
    }

    /// Runs `f` with shared access to the recorded graph.
    ///
    /// Recording through any handle of this graph from inside `f` fails with
    /// [`Error::RecorderBusy`].
    pub fn with<R>(&self, f: impl FnOnce(&Graph) -> R) -> R {
        f(&self.graph.borrow())
    }

    /// See [`Graph::to_dot`].
    #[must_use]
    pub fn to_dot(&self) -> String {
        self.graph.borrow().to_dot()
    }

    /// See [`Graph::dump`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if writing to the sink fails.
    pub fn dump<W: io::Write>(&self, sink: W) -> Result<()> {
        self.graph.borrow().dump(sink)
    }

    fn graph_mut(&self) -> Result<RefMut<'_, Graph>> {
        self.graph.try_borrow_mut().map_err(|_| Error::RecorderBusy)
    }

    /// Returns `true` if both handles record into the same graph.
    #[must_use]
    pub fn same_graph(&self, other: &Recorder) -> bool {
        Rc::ptr_eq(&self.graph, &other.graph)
    }

    /// Reclaims the recorded graph.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecorderShared`] if other handles (including live [`CallScope`]s or
    /// [`Proxy`](crate::Proxy) values) still refer to the graph.
    pub fn into_graph(self) -> Result<Graph> {
        Rc::try_unwrap(self.graph)
            .map(RefCell::into_inner)
            .map_err(|shared| Error::RecorderShared(Rc::strong_count(&shared) - 1))
    }

    /// Reclaims the graph and tears it down, see [`Graph::finish`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecorderShared`] if other handles are alive, or
    /// [`Error::UnbalancedScopes`] if calls were never left.
    pub fn finish(self) -> Result<()> {
        self.into_graph()?.finish()
    }
}

/// A call entered through a [`Recorder`], left again when dropped.
///
/// The guard holds its own recorder handle, so it may outlive the borrow it was created from.
///
/// A scope must not be dropped inside [`Recorder::with`]: the graph cannot be modified there, so
/// the call stays open and teardown reports it as [`Error::UnbalancedScopes`].
#[derive(Debug)]
#[must_use = "the call is left as soon as the scope is dropped"]
pub struct CallScope {
    recorder: Recorder,
    scope: SubgraphId,
}

impl CallScope {
    /// The subgraph entered by this scope.
    pub fn id(&self) -> SubgraphId {
        self.scope
    }
}

impl Drop for CallScope {
    fn drop(&mut self) {
        let Ok(mut graph) = self.recorder.graph.try_borrow_mut() else {
            log::error!("call scope {} dropped inside Recorder::with, call left open", self.scope);
            return;
        };

        match graph.leave_call() {
            Ok(left) if left == self.scope => {}
            Ok(left) => log::warn!("call scope {} left {left} instead", self.scope),
            Err(error) => log::warn!("call scope {} failed to leave: {error}", self.scope),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_graph() {
        let recorder = Recorder::new();
        let other = recorder.clone();
        other.create_node(ValueKind::Temporary, "").unwrap();

        assert!(recorder.same_graph(&other));
        assert!(!recorder.same_graph(&Recorder::new()));
        assert_eq!(recorder.with(Graph::node_count), 1);
    }

    #[test]
    fn test_enter_scope_attaches_nodes() {
        let recorder = Recorder::new();
        let (call, node) = {
            let scope = recorder.enter("f").unwrap();
            let node = recorder.create_node(ValueKind::LValue, "x").unwrap();
            assert_eq!(recorder.with(Graph::depth), 2);
            (scope.id(), node)
        };

        assert_eq!(recorder.with(Graph::depth), 1);
        recorder.with(|graph| {
            assert_eq!(graph.subgraph(call).unwrap().nodes(), &[node]);
        });
    }

    #[test]
    fn test_rename_latest() {
        let recorder = Recorder::new();
        let first = recorder.create_node(ValueKind::Temporary, "").unwrap();
        let second = recorder.create_node(ValueKind::Temporary, "").unwrap();

        assert!(matches!(
            recorder.rename_latest(first, "a", ValueKind::LValue),
            Err(Error::NotLatest(id)) if id == first
        ));

        recorder
            .rename_latest(second, "b", ValueKind::LValue)
            .unwrap();
        recorder.with(|graph| {
            assert_eq!(graph.node(second).unwrap().identifier(), "b");
            assert_eq!(graph.node(second).unwrap().kind(), ValueKind::LValue);
        });
    }

    #[test]
    fn test_rename_latest_empty() {
        let recorder = Recorder::new();
        assert!(matches!(
            recorder.rename_latest(NodeId::new(0), "a", ValueKind::LValue),
            Err(Error::Empty(_))
        ));
    }

    #[test]
    fn test_recording_inside_with_is_refused() {
        let recorder = Recorder::new();
        let other = recorder.clone();
        let a = recorder.create_node(ValueKind::LValue, "a").unwrap();

        recorder.with(|graph| {
            assert!(matches!(
                other.create_node(ValueKind::Temporary, ""),
                Err(Error::RecorderBusy)
            ));
            assert!(matches!(
                other.create_edge(a, a, PassKind::Copy),
                Err(Error::RecorderBusy)
            ));
            assert!(matches!(other.enter("f"), Err(Error::RecorderBusy)));
            assert!(matches!(
                other.rename_latest(a, "b", ValueKind::LValue),
                Err(Error::RecorderBusy)
            ));
            assert_eq!(other.to_dot(), graph.to_dot());
        });

        recorder.with(|graph| {
            assert_eq!(graph.node_count(), 1);
            assert_eq!(graph.edge_count(), 0);
            assert_eq!(graph.depth(), 1);
        });
        drop(other);
        assert!(recorder.finish().is_ok());
    }

    #[test]
    fn test_scope_dropped_inside_with_stays_open() {
        let recorder = Recorder::new();
        let scope = recorder.enter("f").unwrap();

        recorder.with(|_| drop(scope));

        assert_eq!(recorder.with(Graph::depth), 2);
        assert!(matches!(
            recorder.finish(),
            Err(Error::UnbalancedScopes { open: 1 })
        ));
    }

    #[test]
    fn test_into_graph_requires_sole_handle() {
        let recorder = Recorder::new();
        let scope = recorder.enter("f").unwrap();

        let recorder = match recorder.clone().into_graph() {
            Err(Error::RecorderShared(2)) => recorder,
            other => panic!("unexpected {other:?}"),
        };

        drop(scope);
        assert!(recorder.finish().is_ok());
    }

    #[test]
    fn test_dump_through_recorder() {
        let recorder = Recorder::new();
        recorder.create_node(ValueKind::Temporary, "").unwrap();

        let mut sink = Vec::new();
        recorder.dump(&mut sink).unwrap();
        assert_eq!(sink, recorder.to_dot().into_bytes());
    }
}
