//! # valueflow Prelude
//!
//! This module re-exports the types needed by instrumentation code, so that a single glob import
//! is enough to record and render a graph.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all valueflow operations
pub use crate::Error;

/// The result type used throughout valueflow
pub use crate::Result;

// ================================================================================================
// Recording
// ================================================================================================

/// The recorded graph and its scope guard
pub use crate::graph::{Graph, ScopeGuard, ROOT_LABEL};

/// Entities and their ids
pub use crate::graph::{Edge, EdgeId, Node, NodeId, Subgraph, SubgraphId};

/// Kinds that select the rendering style
pub use crate::graph::{PassKind, ValueKind};

/// Shared recording handle and instrumented values
pub use crate::{CallScope, Proxy, Recorder};

/// Call tracing
pub use crate::trace_call;
