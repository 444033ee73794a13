// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # valueflow
//!
//! Records the lifecycle of values in a running program (construction, copies, moves, reference
//! bindings, call entry and exit) as a directed, hierarchically clustered graph, and renders that
//! graph as Graphviz DOT for visual inspection.
//!
//! ## Features
//!
//! - **Append-only store** - nodes, edges and subgraphs addressed by stable, strongly-typed ids
//! - **Call-stack scoping** - nodes land in the subgraph of the call that was active when they
//!   were created
//! - **Balanced by construction** - scope guards leave their call on every exit path, and
//!   teardown rejects unbalanced enter/leave pairs
//! - **Deterministic rendering** - nested clusters per call, then every edge in emission order
//!
//! ## Quick Start
//!
//! ```rust
//! use valueflow::prelude::*;
//!
//! let mut graph = Graph::new();
//! let a = graph.create_node(ValueKind::LValue, "a")?;
//! {
//!     let mut call = graph.scope("f")?;
//!     let x = call.create_node(ValueKind::LValue, "x")?;
//!     call.create_edge(a, x, PassKind::Copy);
//! }
//!
//! let mut out = Vec::new();
//! graph.dump(&mut out)?;
//! graph.finish()?;
//! # Ok::<(), valueflow::Error>(())
//! ```
//!
//! ### Instrumenting Values
//!
//! Instrumentation sites share one graph through a [`Recorder`] handle that is passed to them
//! explicitly; there is no global recorder.
//!
//! ```rust
//! use valueflow::prelude::*;
//!
//! fn add(recorder: &Recorder, lhs: &Proxy<i64>, rhs: &Proxy<i64>) -> Result<Proxy<i64>> {
//!     let _call = trace_call!(recorder)?;
//!     let mut result = lhs.copy()?.bind("result", ValueKind::LValue)?;
//!     *result.value_mut() += rhs.value();
//!     result.moved()
//! }
//!
//! let recorder = Recorder::new();
//! let a = Proxy::new(&recorder, 1)?.bind("a", ValueKind::LValue)?;
//! let b = Proxy::new(&recorder, 2)?.bind("b", ValueKind::LValue)?;
//! let c = add(&recorder, &a, &b)?;
//! assert_eq!(*c.value(), 3);
//!
//! println!("{}", recorder.to_dot());
//! # Ok::<(), valueflow::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - The entity store, the scope stack and the [`Graph`] façade
//! - [`dot`] - DOT rendering and the static style tables
//! - [`Recorder`] and [`Proxy`] - Shared handle and instrumented values
//! - [`trace_call!`] - Function-named call scopes
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: scope changes at `debug`,
//! every recorded node and edge at `trace`.
//!
//! ## Development and Testing
//!
//! ```bash
//! cargo test
//! cargo bench
//! cargo +nightly fuzz run operations --release
//! ```
#[macro_use]
pub(crate) mod macros;

pub(crate) mod error;
pub(crate) mod utils;

mod proxy;
mod recorder;

/// Convenient re-exports of the most commonly used types.
///
/// # Example
///
/// ```rust
/// use valueflow::prelude::*;
///
/// let recorder = Recorder::new();
/// let value = Proxy::new(&recorder, 42)?;
/// assert_eq!(value.node(), NodeId::new(0));
/// # Ok::<(), valueflow::Error>(())
/// ```
pub mod prelude;

/// The recorded graph: entities, ids, scope stack and scope guards.
///
/// # Key Types
///
/// - [`graph::Graph`] - The operation surface used by instrumentation
/// - [`graph::Node`], [`graph::Edge`], [`graph::Subgraph`] - Recorded entities
/// - [`graph::ValueKind`], [`graph::PassKind`] - Kinds that select the rendering style
/// - [`graph::ScopeGuard`] - Leaves an entered call when dropped
pub mod graph;

/// Graphviz DOT rendering.
///
/// Rendering is exposed as [`Graph::to_dot`] and [`Graph::dump`]; this module documents the
/// document layout and holds the style tables.
pub mod dot;

/// `valueflow` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `valueflow` Error type
///
/// See [`error::Error`](crate::Error) for the individual failure modes.
pub use error::Error;

/// The recorded graph, re-exported from [`graph`].
pub use graph::Graph;

/// Instrumented value wrapper.
pub use proxy::Proxy;

/// Shared recording handle and its call guard.
pub use recorder::{CallScope, Recorder};
