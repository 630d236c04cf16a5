use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::GenerateResult;

/// How many generated links the summary shows.
const SAMPLE_LINKS: usize = 5;

/// How many error messages the summary shows before truncating.
const MAX_ISSUE_ROWS: usize = 10;

pub fn print_summary(result: &GenerateResult) {
    println!("Input: {}", result.input.display());
    match (&result.output, result.dry_run) {
        (Some(path), _) => println!("Output: {}", path.display()),
        (None, true) => println!("Output: (dry run, nothing written)"),
        (None, false) => println!("Output: none (no valid serial codes)"),
    }
    println!("Template: {}", result.template.as_str());

    if !result.links.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![header_cell("SerialCode"), header_cell("DynamicLink")]);
        apply_table_style(&mut table);
        for link in result.links.iter().take(SAMPLE_LINKS) {
            table.add_row(vec![Cell::new(&link.code), Cell::new(&link.link)]);
        }
        println!("{table}");
        if result.links.len() > SAMPLE_LINKS {
            println!("... and {} more links", result.links.len() - SAMPLE_LINKS);
        }
    }

    if !result.issues.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Row"), header_cell("Error")]);
        apply_table_style(&mut table);
        align_column(&mut table, 0, CellAlignment::Right);
        for issue in result.issues.iter().take(MAX_ISSUE_ROWS) {
            table.add_row(vec![
                Cell::new(issue.row).fg(Color::Red),
                Cell::new(&issue.message),
            ]);
        }
        println!();
        println!("Errors:");
        println!("{table}");
        if result.issues.len() > MAX_ISSUE_ROWS {
            println!(
                "... and {} more errors",
                result.issues.len() - MAX_ISSUE_ROWS
            );
        }
    }

    println!(
        "Generated {} links, {} errors.",
        result.links.len(),
        result.issues.len()
    );
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
