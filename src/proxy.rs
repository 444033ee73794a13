//! Instrumented value wrapper.
//!
//! [`Proxy`] pairs a value with the node that represents it in a [`Recorder`]'s graph and turns
//! the lifecycle operations of the value into recorded events:
//!
//! | Operation                   | Recorded                                         |
//! |-----------------------------|--------------------------------------------------|
//! | [`Proxy::new`]              | new `Temporary` node                             |
//! | [`Proxy::bind`]             | rename/re-type of the proxy's (latest) node      |
//! | [`Proxy::copy`]             | new `Temporary` node, `Copy` edge into it        |
//! | [`Proxy::moved`]            | new `Temporary` node, `Move` edge into it        |
//! | [`Proxy::assign`]           | `Copy` edge into the existing node               |
//! | [`Proxy::assign_move`]      | `Move` edge into the existing node               |
//! | [`Proxy::reference`]        | new `LVRef`/`RVRef` node, reference edge into it |
//!
//! Rust moves are not observable, so moves are recorded where the instrumented code asks for
//! them explicitly.

use crate::{
    graph::{NodeId, PassKind, ValueKind},
    Recorder, Result,
};

/// A value whose copies, moves and borrows are recorded as graph events.
///
/// Both proxies involved in an assignment must record into the same graph; edges between
/// proxies of different recorders would reference unrelated node indices.
///
/// # Examples
///
/// ```rust
/// use valueflow::{Proxy, Recorder, graph::ValueKind};
///
/// let recorder = Recorder::new();
/// let a = Proxy::new(&recorder, 1)?.bind("a", ValueKind::LValue)?;
/// let b = a.copy()?.bind("b", ValueKind::LValue)?;
///
/// assert_eq!(*b.value(), 1);
/// recorder.with(|graph| assert_eq!(graph.edge_count(), 1));
/// # Ok::<(), valueflow::Error>(())
/// ```
#[derive(Debug)]
pub struct Proxy<T> {
    recorder: Recorder,
    value: T,
    node: NodeId,
}

impl<T> Proxy<T> {
    /// Wraps `value`, recording a `Temporary` node in the active scope.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoActiveScope`](crate::Error::NoActiveScope) if the scope stack is empty.
    pub fn new(recorder: &Recorder, value: T) -> Result<Self> {
        let node = recorder.create_node(ValueKind::Temporary, "")?;
        Ok(Proxy {
            recorder: recorder.clone(),
            value,
            node,
        })
    }

    /// Gives the proxy's node a name and kind after construction.
    ///
    /// Only possible while the proxy's node is still the most recently recorded one, i.e.
    /// directly after [`Proxy::new`], [`Proxy::copy`] or [`Proxy::moved`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotLatest`](crate::Error::NotLatest) if other nodes were recorded since.
    pub fn bind(self, name: impl Into<String>, kind: ValueKind) -> Result<Self> {
        self.recorder.rename_latest(self.node, name, kind)?;
        Ok(self)
    }

    /// The node currently representing this value.
    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// The wrapped value.
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Mutable access to the wrapped value. Not recorded.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// The recorder this proxy records into.
    #[must_use]
    pub fn recorder(&self) -> &Recorder {
        &self.recorder
    }

    /// Unwraps the value without recording anything.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Moves the value into a new proxy, recording a new node and a `Move` edge into it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoActiveScope`](crate::Error::NoActiveScope) if the scope stack is empty.
    pub fn moved(self) -> Result<Self> {
        let node = self.recorder.create_node(ValueKind::Temporary, "")?;
        self.recorder.create_edge(self.node, node, PassKind::Move)?;
        Ok(Proxy {
            recorder: self.recorder,
            value: self.value,
            node,
        })
    }

    /// Move-assigns `other` into this proxy, recording a `Move` edge into the existing node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecorderBusy`](crate::Error::RecorderBusy) if called from inside
    /// [`Recorder::with`]; the value is left unchanged.
    pub fn assign_move(&mut self, other: Proxy<T>) -> Result<()> {
        self.recorder
            .create_edge(other.node, self.node, PassKind::Move)?;
        self.value = other.value;
        Ok(())
    }

    /// Binds a reference to this value, recording a reference node and an edge of kind `pass`.
    ///
    /// `RVRef`/`ConstRVRef` passes produce an `RVRef` node, every other kind an `LVRef` node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoActiveScope`](crate::Error::NoActiveScope) if the scope stack is empty.
    pub fn reference(&self, pass: PassKind, name: impl Into<String>) -> Result<NodeId> {
        let kind = match pass {
            PassKind::RVRef | PassKind::ConstRVRef => ValueKind::RVRef,
            _ => ValueKind::LVRef,
        };

        let node = self.recorder.create_node(kind, name)?;
        self.recorder.create_edge(self.node, node, pass)?;
        Ok(node)
    }
}

impl<T: Clone> Proxy<T> {
    /// Copies the value into a new proxy, recording a new node and a `Copy` edge into it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoActiveScope`](crate::Error::NoActiveScope) if the scope stack is empty.
    pub fn copy(&self) -> Result<Self> {
        let node = self.recorder.create_node(ValueKind::Temporary, "")?;
        self.recorder.create_edge(self.node, node, PassKind::Copy)?;
        Ok(Proxy {
            recorder: self.recorder.clone(),
            value: self.value.clone(),
            node,
        })
    }

    /// Copy-assigns `other` into this proxy, recording a `Copy` edge into the existing node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecorderBusy`](crate::Error::RecorderBusy) if called from inside
    /// [`Recorder::with`]; the value is left unchanged.
    pub fn assign(&mut self, other: &Proxy<T>) -> Result<()> {
        self.recorder
            .create_edge(other.node, self.node, PassKind::Copy)?;
        self.value = other.value.clone();
        Ok(())
    }
}
