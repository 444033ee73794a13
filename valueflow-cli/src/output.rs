use comfy_table::{presets, CellAlignment, Table};
use serde::Serialize;

use crate::app::GlobalOptions;

/// Print `data` as JSON (if `--json`) or call `display_fn` for human-readable output.
pub fn print_output<T: Serialize>(
    data: &T,
    opts: &GlobalOptions,
    display_fn: impl FnOnce(&T),
) -> anyhow::Result<()> {
    if opts.json {
        println!("{}", serde_json::to_string_pretty(data)?);
    } else {
        display_fn(data);
    }
    Ok(())
}

/// Print a borderless table with every line prefixed by `indent`.
///
/// The last column is right-aligned when `numeric_last` is set.
pub fn print_table(indent: &str, header: &[&str], rows: Vec<Vec<String>>, numeric_last: bool) {
    let mut table = Table::new();
    table.load_preset(presets::NOTHING).set_header(header.to_vec());
    for row in rows {
        table.add_row(row);
    }

    let last = header.len().saturating_sub(1);
    if numeric_last {
        if let Some(column) = table.column_mut(last) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    if let Some(column) = table.column_mut(0) {
        column.set_padding((0, 1));
    }

    for line in table.to_string().lines() {
        println!("{indent}{}", line.trim_end());
    }
}
