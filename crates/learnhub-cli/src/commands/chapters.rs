//! The `learnhub chapters` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use learnhub_core::catalog;

pub fn execute(subject: Option<String>) -> Result<()> {
    let subjects: Vec<_> = match subject {
        Some(id) => vec![catalog::subject(&id)
            .ok_or_else(|| anyhow::anyhow!("unknown subject: {id}"))?],
        None => catalog::SUBJECTS.iter().collect(),
    };

    for subject in subjects {
        println!(
            "{} {} ({} chapters)",
            subject.icon,
            subject.name,
            subject.chapters.len()
        );

        let mut table = Table::new();
        table.set_header(vec!["No.", "Chapter", "Id"]);
        for chapter in subject.chapters {
            table.add_row(vec![
                Cell::new(chapter.number),
                Cell::new(chapter.title),
                Cell::new(chapter.id),
            ]);
        }
        println!("{table}\n");
    }

    Ok(())
}
