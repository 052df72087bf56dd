//! The `learnhub modes` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use learnhub_core::{catalog, registry};

pub fn execute() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Mode", "Name", "Activity", "Description"]);

    for config in registry::standard().configs() {
        let (name, description) = catalog::learning_mode(config.mode_id)
            .map(|m| (m.name, m.description))
            .unwrap_or(("", ""));
        table.add_row(vec![
            Cell::new(config.mode_id),
            Cell::new(name),
            Cell::new(config.kind),
            Cell::new(description),
        ]);
    }

    println!("{table}");
    println!("{} learning modes.", registry::standard().len());
    Ok(())
}
