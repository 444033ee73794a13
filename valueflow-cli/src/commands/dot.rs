use std::{
    fs::File,
    io::{self, BufWriter},
    path::Path,
};

use anyhow::Context;

use crate::scenarios::Scenario;

pub fn run(scenario: Scenario, output: Option<&Path>) -> anyhow::Result<()> {
    let graph = scenario.record()?;

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            graph
                .dump(BufWriter::new(file))
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!(
                "wrote {} ({} nodes, {} edges) to {}",
                scenario.name(),
                graph.node_count(),
                graph.edge_count(),
                path.display()
            );
        }
        None => graph
            .dump(io::stdout().lock())
            .context("failed to write to stdout")?,
    }

    graph.finish().context("recorded graph is inconsistent")?;
    Ok(())
}
