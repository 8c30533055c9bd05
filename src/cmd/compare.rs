use crate::reports::{self, LayoutTime};
use keyingtime::error::KtResult;
use keyingtime::layouts::all_layouts;
use keyingtime::timing::KeyingTable;
use rayon::prelude::*;

pub fn run(table: &KeyingTable, text: &str, json: bool) -> KtResult<()> {
    let mut results = all_layouts()
        .par_iter()
        .map(|layout| -> KtResult<LayoutTime> {
            let remap = layout.to_remap()?;
            Ok(LayoutTime {
                layout: layout.to_string(),
                time: table.estimate(&remap.convert(text)),
            })
        })
        .collect::<KtResult<Vec<_>>>()?;

    results.sort_by(|a, b| a.time.cmp(&b.time).then_with(|| a.layout.cmp(&b.layout)));

    if json {
        reports::print_comparison_json(&results)?;
    } else {
        reports::print_comparison_table(&results);
    }
    Ok(())
}
