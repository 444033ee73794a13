//! Graphviz DOT rendering of a recorded [`Graph`].
//!
//! The document produced for a graph has a fixed shape:
//!
//! 1. a `digraph "<root label>" {` header followed by fixed default-style directives,
//! 2. the subgraph tree, depth first, one `subgraph cluster_<id> { ... }` block per subgraph
//!    (the root included) holding the subgraph's own nodes followed by its child clusters,
//! 3. every edge in creation order as `"%<from>" -> "%<to>" [...]`,
//! 4. the closing `}`.
//!
//! Clusters are indented by four spaces per nesting level up to a fixed maximum, so line length
//! does not grow with call depth.
//!
//! Node and edge attributes come from the static tables in [`style`]. Kinds without an entry are
//! written without an attribute list. Rendering never fails and is deterministic, so rendering
//! an unchanged graph twice yields identical output.
//!
//! # Examples
//!
//! ```rust
//! use valueflow::{Graph, graph::{PassKind, ValueKind}};
//!
//! let mut graph = Graph::new();
//! let a = graph.create_node(ValueKind::LValue, "a")?;
//! let b = graph.create_node(ValueKind::LValue, "b")?;
//! graph.create_edge(a, b, PassKind::Move);
//!
//! let dot = graph.to_dot();
//! assert!(dot.starts_with("digraph \"G\" {"));
//! assert!(dot.contains("\"%0\" -> \"%1\" [label=\" move\", color=\"green\"]"));
//! # Ok::<(), valueflow::Error>(())
//! ```

pub mod style;

use std::{fmt::Write as _, io};

use crate::{
    graph::{Edge, Graph, Node, SubgraphId},
    utils::escape_dot,
    Result,
};

const INDENT: &str = "    ";

/// Nesting levels past this depth share the indentation of the deepest level.
const MAX_INDENT_DEPTH: usize = 9;

const PADDING: &str = "                                        ";

fn indent(depth: usize) -> &'static str {
    &PADDING[..INDENT.len() * depth.min(MAX_INDENT_DEPTH)]
}

impl Graph {
    /// Renders the whole graph as a DOT document.
    #[must_use]
    pub fn to_dot(&self) -> String {
        let mut dot = String::new();
        DotRenderer { graph: self }.render(&mut dot);
        dot
    }

    /// Renders the whole graph as a DOT document into `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if writing to the sink fails.
    pub fn dump<W: io::Write>(&self, mut sink: W) -> Result<()> {
        sink.write_all(self.to_dot().as_bytes())?;
        sink.flush()?;
        Ok(())
    }
}

struct DotRenderer<'g> {
    graph: &'g Graph,
}

impl DotRenderer<'_> {
    fn render(&self, dot: &mut String) {
        let root = self.graph.root();
        let _ = writeln!(dot, "digraph \"{}\" {{", escape_dot(root.identifier()));
        dot.push_str("    fontname=\"Courier New\"\n");
        dot.push_str("    edge [fontname=\"Courier New\"]\n");
        dot.push_str(
            "    node [penwidth=2, shape=box, fillcolor=white, style=\"rounded, filled\", fontname=\"Courier\"]\n\n",
        );

        self.render_subgraphs(dot);

        if self.graph.edge_count() > 0 {
            dot.push('\n');
        }
        for (_, edge) in self.graph.edges() {
            Self::render_edge(dot, edge);
        }

        dot.push_str("}\n");
    }

    fn render_subgraphs(&self, dot: &mut String) {
        #[derive(Clone, Copy)]
        enum State {
            Enter,
            Exit,
        }

        let mut stack = vec![(SubgraphId::ROOT, 1, State::Enter)];

        while let Some((id, depth, state)) = stack.pop() {
            let outer = indent(depth);
            match state {
                State::Enter => {
                    // Ids reaching this point come from the graph's own child lists.
                    let Ok(subgraph) = self.graph.subgraph(id) else {
                        continue;
                    };
                    let inner = indent(depth + 1);

                    let _ = writeln!(dot, "{outer}subgraph {id} {{");
                    let _ = writeln!(dot, "{inner}style=\"rounded\"");
                    let _ = writeln!(
                        dot,
                        "{inner}label=\"{}\"",
                        escape_dot(subgraph.identifier())
                    );

                    for node in subgraph.nodes() {
                        if let Ok(node) = self.graph.node(*node) {
                            Self::render_node(dot, inner, node);
                        }
                    }

                    stack.push((id, depth, State::Exit));
                    for child in subgraph.children().iter().rev() {
                        stack.push((*child, depth + 1, State::Enter));
                    }
                }
                State::Exit => {
                    let _ = writeln!(dot, "{outer}}}");
                }
            }
        }
    }

    fn render_node(dot: &mut String, indent: &str, node: &Node) {
        let _ = write!(
            dot,
            "{indent}\"%{}\" [label=\"{}\"",
            node.id().index(),
            escape_dot(node.identifier())
        );
        if let Some(attributes) = style::node_attributes(node.kind()) {
            let _ = write!(dot, ", {attributes}");
        }
        dot.push_str("]\n");
    }

    fn render_edge(dot: &mut String, edge: &Edge) {
        let (from, to) = edge.endpoints();
        let _ = write!(dot, "{INDENT}\"%{}\" -> \"%{}\"", from.index(), to.index());
        if let Some(attributes) = style::edge_attributes(edge.kind()) {
            let _ = write!(dot, " [{attributes}]");
        }
        dot.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{Graph, NodeId, PassKind, ValueKind};

    #[test]
    fn test_render_empty_graph() {
        let graph = Graph::new();
        let expected = "digraph \"G\" {\n\
            \x20   fontname=\"Courier New\"\n\
            \x20   edge [fontname=\"Courier New\"]\n\
            \x20   node [penwidth=2, shape=box, fillcolor=white, style=\"rounded, filled\", fontname=\"Courier\"]\n\
            \n\
            \x20   subgraph cluster_0 {\n\
            \x20       style=\"rounded\"\n\
            \x20       label=\"G\"\n\
            \x20   }\n\
            }\n";
        assert_eq!(graph.to_dot(), expected);
    }

    #[test]
    fn test_render_nested_layout() {
        let mut graph = Graph::new();
        let a = graph.create_node(ValueKind::Temporary, "").unwrap();
        graph.enter_call("f").unwrap();
        let x = graph.create_node(ValueKind::LValue, "x").unwrap();
        graph.leave_call().unwrap();
        graph.create_edge(a, x, PassKind::Copy);

        let dot = graph.to_dot();
        let body: Vec<&str> = dot.lines().skip(5).collect();
        assert_eq!(
            body,
            vec![
                "    subgraph cluster_0 {",
                "        style=\"rounded\"",
                "        label=\"G\"",
                "        \"%0\" [label=\"tmp#0\", color=\"red\"]",
                "        subgraph cluster_1 {",
                "            style=\"rounded\"",
                "            label=\"f\"",
                "            \"%1\" [label=\"x\", color=\"grey\"]",
                "        }",
                "    }",
                "",
                "    \"%0\" -> \"%1\" [label=\" copy\", color=\"red\"]",
                "}",
            ]
        );
    }

    #[test]
    fn test_render_indent_is_capped() {
        let mut graph = Graph::new();
        for level in 0..20 {
            graph.enter_call(format!("f{level}")).unwrap();
        }
        graph.create_node(ValueKind::LValue, "deep").unwrap();
        for _ in 0..20 {
            graph.leave_call().unwrap();
        }

        let dot = graph.to_dot();
        let widest = dot
            .lines()
            .map(|line| line.len() - line.trim_start().len())
            .max()
            .unwrap();
        assert_eq!(widest, 4 * 9);
        assert!(dot.contains("\n                                    \"%0\" [label=\"deep\""));
        assert_eq!(dot.matches("subgraph cluster_").count(), 21);
    }

    #[test]
    fn test_render_invalid_edge_without_attributes() {
        let mut graph = Graph::new();
        graph.create_edge(NodeId::new(0), NodeId::new(1), PassKind::Invalid);

        let dot = graph.to_dot();
        assert!(dot.lines().any(|line| line == "    \"%0\" -> \"%1\""));
    }

    #[test]
    fn test_render_escapes_labels() {
        let mut graph = Graph::new();
        graph.enter_call("say \"hi\"").unwrap();
        graph.create_node(ValueKind::LVRef, "a\\b").unwrap();
        graph.leave_call().unwrap();

        let dot = graph.to_dot();
        assert!(dot.contains("label=\"say \\\"hi\\\"\""));
        assert!(dot.contains("[label=\"a\\\\b\", color=\"grey\", style=\"rounded, filled, dashed\"]"));
    }

    #[test]
    fn test_dump_matches_to_dot() {
        let mut graph = Graph::new();
        graph.create_node(ValueKind::RVRef, "r").unwrap();

        let mut sink = Vec::new();
        graph.dump(&mut sink).unwrap();
        assert_eq!(String::from_utf8(sink).unwrap(), graph.to_dot());
    }
}
