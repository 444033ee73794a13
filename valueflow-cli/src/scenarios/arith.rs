//! `c = a + 3; d = c + b` over instrumented integers.

use valueflow::{
    graph::{PassKind, ValueKind},
    trace_call, Proxy, Recorder, Result,
};

/// An integer whose copies, moves and borrows end up in the recorded graph.
struct Int {
    inner: Proxy<i64>,
}

impl Int {
    fn named(recorder: &Recorder, value: i64, name: &str) -> Result<Self> {
        let inner = Proxy::new(recorder, value)?.bind(name, ValueKind::LValue)?;
        Ok(Int { inner })
    }

    fn literal(recorder: &Recorder, value: i64) -> Result<Self> {
        Ok(Int {
            inner: Proxy::new(recorder, value)?,
        })
    }

    fn value(&self) -> i64 {
        *self.inner.value()
    }

    fn add(&self, other: &Int) -> Result<Int> {
        let recorder = self.inner.recorder().clone();
        let _call = trace_call!(recorder)?;

        self.inner.reference(PassKind::ConstLVRef, "this")?;
        let mut result = Int {
            inner: self.inner.copy()?.bind("result", ValueKind::LValue)?,
        };
        result.add_assign(other)?;

        Ok(Int {
            inner: result.inner.moved()?,
        })
    }

    fn add_assign(&mut self, other: &Int) -> Result<()> {
        let recorder = self.inner.recorder().clone();
        let _call = trace_call!(recorder)?;

        other.inner.reference(PassKind::ConstLVRef, "other")?;
        *self.inner.value_mut() += other.inner.value();
        Ok(())
    }

    fn assign_move(&mut self, other: Int) -> Result<()> {
        self.inner.assign_move(other.inner)
    }
}

pub fn run(recorder: &Recorder) -> Result<()> {
    let a = Int::named(recorder, 0, "a")?;
    let b = Int::named(recorder, 0, "b")?;
    let mut c = Int::named(recorder, 0, "c")?;
    let mut d = Int::named(recorder, 0, "d")?;

    let three = Int::literal(recorder, 3)?;
    c.assign_move(a.add(&three)?)?;
    d.assign_move(c.add(&b)?)?;

    log::debug!("arith: c = {}, d = {}", c.value(), d.value());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arith_values() {
        let recorder = Recorder::new();
        let a = Int::named(&recorder, 2, "a").unwrap();
        let b = Int::literal(&recorder, 3).unwrap();

        assert_eq!(a.add(&b).unwrap().value(), 5);
        assert_eq!(recorder.with(|graph| graph.depth()), 1);
    }

    #[test]
    fn test_arith_shape() {
        let recorder = Recorder::new();
        run(&recorder).unwrap();
        let graph = recorder.into_graph().unwrap();

        // a, b, c, d, 3 and four nodes per addition
        assert_eq!(graph.node_count(), 13);
        assert_eq!(graph.edge_count(), 10);
        assert_eq!(graph.subgraph_count(), 5);

        let calls = graph.root().children();
        assert_eq!(calls.len(), 2);
        for call in calls {
            let add = graph.subgraph(*call).unwrap();
            assert!(add.identifier().ends_with("::add"), "{}", add.identifier());
            assert_eq!(add.nodes().len(), 3);
            assert_eq!(add.children().len(), 1);

            let add_assign = graph.subgraph(add.children()[0]).unwrap();
            assert!(add_assign.identifier().ends_with("::add_assign"));
            assert_eq!(add_assign.nodes().len(), 1);
        }

        let moves = graph
            .edges()
            .filter(|(_, edge)| edge.kind() == PassKind::Move)
            .count();
        assert_eq!(moves, 4);
        graph.finish().unwrap();
    }
}
