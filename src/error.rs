use thiserror::Error;

use crate::graph::{EdgeId, NodeId, SubgraphId};

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Almost every variant signals a programming error in the instrumentation layer (a stale index,
/// a mismatched enter/leave pair, a rename of the wrong node). None of them are meant to be
/// recovered from; they exist so that the failure surfaces at the call site that caused it.
///
/// # Error Categories
///
/// ## Lookup Errors
/// - [`Error::NodeOutOfRange`] - Node index not present in the store
/// - [`Error::EdgeOutOfRange`] - Edge index not present in the store
/// - [`Error::SubgraphOutOfRange`] - Subgraph index not present in the store
/// - [`Error::Empty`] - A "latest" accessor was used on an empty store
///
/// ## Scope Errors
/// - [`Error::NoActiveScope`] - A node or subgraph was created with an empty scope stack
/// - [`Error::ScopeUnderflow`] - `leave_call` would have popped the root scope
/// - [`Error::UnbalancedScopes`] - Teardown found calls that were never left
///
/// ## Instrumentation Errors
/// - [`Error::NotLatest`] - Attempted to rename a node that is no longer the latest one
/// - [`Error::RecorderShared`] - The graph was reclaimed while other recorder handles exist
/// - [`Error::RecorderBusy`] - Recording was attempted from inside [`Recorder::with`](crate::Recorder::with)
///
/// ## I/O Errors
/// - [`Error::Io`] - The output sink failed while writing the rendered document
///
/// # Examples
///
/// ```rust
/// use valueflow::{Error, Graph, graph::NodeId};
///
/// let graph = Graph::new();
/// match graph.node(NodeId::new(3)) {
///     Err(Error::NodeOutOfRange(id)) => println!("no node {id}"),
///     _ => unreachable!(),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A node was requested by an index that was never handed out.
    #[error("Node index out of range - {0}")]
    NodeOutOfRange(NodeId),

    /// An edge was requested by an index that was never handed out.
    #[error("Edge index out of range - {0}")]
    EdgeOutOfRange(EdgeId),

    /// A subgraph was requested (or used as a parent) by an index that was never handed out.
    #[error("Subgraph index out of range - {0}")]
    SubgraphOutOfRange(SubgraphId),

    /// A "latest" accessor was used before anything of that kind was recorded.
    #[error("No {0} has been recorded yet")]
    Empty(&'static str),

    /// The scope stack was empty when an entity needed an owning subgraph.
    ///
    /// This can only happen after the root scope has been popped, i.e. while the graph is
    /// being torn down.
    #[error("No active scope to attach to")]
    NoActiveScope,

    /// `leave_call` was called while only the root scope was active.
    ///
    /// The root scope belongs to the graph itself and is only popped at teardown.
    #[error("Cannot leave the root scope")]
    ScopeUnderflow,

    /// The scope stack was not empty after popping the root at teardown.
    ///
    /// Every `enter_call` must be paired with exactly one `leave_call`; `open` is the number of
    /// calls that were entered but never left.
    #[error("Unbalanced scopes at teardown - {open} call(s) never left")]
    UnbalancedScopes {
        /// Number of scopes still open besides the root
        open: usize,
    },

    /// A node was renamed through the latest-node accessor after newer nodes had been recorded.
    #[error("Node {0} is no longer the most recently recorded node")]
    NotLatest(NodeId),

    /// The recorded graph was reclaimed while other recorder handles were still alive.
    #[error("Recorder still has {0} outstanding handle(s)")]
    RecorderShared(usize),

    /// Recording was attempted while the graph was lent out through `Recorder::with`.
    #[error("Graph is borrowed for inspection and cannot be modified")]
    RecorderBusy,

    /// Writing the rendered document to the output sink failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
