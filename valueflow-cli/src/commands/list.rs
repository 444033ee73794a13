use clap::ValueEnum;
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    output::{print_output, print_table},
    scenarios::Scenario,
};

#[derive(Debug, Serialize)]
struct ScenarioOutput {
    name: String,
    description: &'static str,
}

pub fn run(opts: &GlobalOptions) -> anyhow::Result<()> {
    let scenarios: Vec<ScenarioOutput> = Scenario::value_variants()
        .iter()
        .map(|scenario| ScenarioOutput {
            name: scenario.name().to_string(),
            description: scenario.description(),
        })
        .collect();

    print_output(&scenarios, opts, |scenarios| {
        let rows = scenarios
            .iter()
            .map(|scenario| vec![scenario.name.clone(), scenario.description.to_string()])
            .collect();
        print_table("", &["Scenario", "Description"], rows, false);
    })
}
