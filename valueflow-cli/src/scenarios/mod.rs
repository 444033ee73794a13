//! Built-in demo programs.
//!
//! Each scenario is a small instrumented program that records into a fresh [`Recorder`]. All
//! proxies and call scopes are local to the scenario, so the graph can be reclaimed as soon as it
//! returns.

mod arith;

use clap::ValueEnum;
use valueflow::{
    graph::{PassKind, ValueKind},
    Graph, Proxy, Recorder,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    /// Nothing recorded.
    Empty,
    /// A single temporary at the root.
    Temporary,
    /// A named local created inside a call.
    Call,
    /// Two named locals joined by a move.
    Move,
    /// Integer additions through traced operator calls.
    Arith,
    /// One value passed by every reference flavour.
    Refs,
}

impl Scenario {
    pub fn name(self) -> &'static str {
        match self {
            Scenario::Empty => "empty",
            Scenario::Temporary => "temporary",
            Scenario::Call => "call",
            Scenario::Move => "move",
            Scenario::Arith => "arith",
            Scenario::Refs => "refs",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Scenario::Empty => "fresh graph, nothing recorded",
            Scenario::Temporary => "one temporary value at the root",
            Scenario::Call => "call 'f' creating the local 'x'",
            Scenario::Move => "locals 'a' and 'b', 'a' moved into 'b'",
            Scenario::Arith => "c = a + 3; d = c + b with traced operators",
            Scenario::Refs => "one value bound by &, const &, && and const &&",
        }
    }

    /// Runs the scenario and returns the recorded graph.
    pub fn record(self) -> valueflow::Result<Graph> {
        let recorder = Recorder::new();
        log::debug!("recording scenario '{}'", self.name());

        match self {
            Scenario::Empty => {}
            Scenario::Temporary => {
                recorder.create_node(ValueKind::Temporary, "")?;
            }
            Scenario::Call => {
                let _call = recorder.enter("f")?;
                recorder.create_node(ValueKind::LValue, "x")?;
            }
            Scenario::Move => {
                let a = recorder.create_node(ValueKind::LValue, "a")?;
                let b = recorder.create_node(ValueKind::LValue, "b")?;
                recorder.create_edge(a, b, PassKind::Move)?;
            }
            Scenario::Arith => arith::run(&recorder)?,
            Scenario::Refs => refs(&recorder)?,
        }

        recorder.into_graph()
    }
}

fn refs(recorder: &Recorder) -> valueflow::Result<()> {
    let value = Proxy::new(recorder, String::from("payload"))?.bind("value", ValueKind::LValue)?;

    for (callee, pass) in [
        ("take_mut", PassKind::LVRef),
        ("take_ref", PassKind::ConstLVRef),
        ("take_owned", PassKind::RVRef),
        ("take_const_owned", PassKind::ConstRVRef),
    ] {
        let _call = recorder.enter(callee)?;
        value.reference(pass, "param")?;
    }

    // An unclassified hand-over is kept but rendered without style.
    let sink = recorder.create_node(ValueKind::Temporary, "sink")?;
    recorder.create_edge(value.node(), sink, PassKind::Invalid)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_scenario_records_balanced_graph() {
        for scenario in Scenario::value_variants() {
            let graph = scenario.record().unwrap();
            assert_eq!(graph.depth(), 1, "{}", scenario.name());
            graph.finish().unwrap();
        }
    }

    #[test]
    fn test_call_scenario_layout() {
        let graph = Scenario::Call.record().unwrap();
        assert!(graph.root().nodes().is_empty());
        assert_eq!(graph.root().children().len(), 1);

        let f = graph.subgraph(graph.root().children()[0]).unwrap();
        assert_eq!(f.identifier(), "f");
        assert_eq!(f.nodes().len(), 1);
    }

    #[test]
    fn test_refs_scenario_uses_every_pass_kind() {
        let graph = Scenario::Refs.record().unwrap();
        let kinds: Vec<_> = graph.edges().map(|(_, edge)| edge.kind()).collect();

        for kind in [
            PassKind::LVRef,
            PassKind::ConstLVRef,
            PassKind::RVRef,
            PassKind::ConstRVRef,
            PassKind::Invalid,
        ] {
            assert!(kinds.contains(&kind), "{kind}");
        }
        assert_eq!(graph.subgraph_count(), 5);
    }
}
