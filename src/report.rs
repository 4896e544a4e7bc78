use crate::types::FileRecord;
use colored::Colorize;
use comfy_table::{Attribute, Cell, Table};

#[must_use]
pub fn records_table(records: &[FileRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_HORIZONTAL_ONLY);
    table.set_header(vec!["Name", "Size", "Modified"]);

    for record in records {
        table.add_row(vec![
            Cell::new(&record.name).add_attribute(Attribute::Bold),
            Cell::new(&record.size),
            Cell::new(&record.modified),
        ]);
    }

    table
}

pub fn print_records(records: &[FileRecord]) {
    if records.is_empty() {
        println!("No files.");
        return;
    }

    println!("{}", format!("=== {} files ===", records.len()).cyan());
    println!("{}", records_table(records));
}
