use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use keyingtime::error::KtResult;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LayoutTime {
    pub layout: String,
    pub time: u64,
}

#[derive(Debug, Serialize)]
struct EstimateReport<'a> {
    time: u64,
    layout: Option<&'a str>,
    clamped_setup_pairs: usize,
}

pub fn print_estimate_json(time: u64, layout: Option<&str>, clamped: usize) -> KtResult<()> {
    let report = EstimateReport {
        time,
        layout,
        clamped_setup_pairs: clamped,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub fn print_comparison_json(results: &[LayoutTime]) -> KtResult<()> {
    println!("{}", serde_json::to_string_pretty(results)?);
    Ok(())
}

pub fn print_comparison_table(results: &[LayoutTime]) {
    let baseline = results
        .iter()
        .find(|r| r.layout == "qwerty")
        .map(|r| r.time)
        .unwrap_or(0);

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Layout").add_attribute(Attribute::Bold),
        Cell::new("Time").fg(Color::Cyan),
        Cell::new("vs QWERTY"),
    ]);

    for i in 1..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for r in results {
        let relative = if baseline > 0 {
            format!("{:+.1}%", (r.time as f64 / baseline as f64 - 1.0) * 100.0)
        } else {
            "-".to_string()
        };
        table.add_row(vec![
            Cell::new(&r.layout).add_attribute(Attribute::Bold),
            Cell::new(r.time).fg(Color::Cyan),
            Cell::new(relative),
        ]);
    }
    println!("{}", table);
}
